use std::sync::Arc;

use message_board::config::BoardConfig;
use message_board::render::Renderer;
use message_board::routes::configure_routes;
use message_board::store::PostgresStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the environment may already be populated
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = BoardConfig::from_env()?;
    let store = PostgresStore::new(config.store.clone());

    if config.init_schema {
        store.ensure_schema().await?;
    }

    let renderer = Arc::new(Renderer::new()?);
    let routes = configure_routes(Arc::new(store), renderer);

    tracing::info!(
        addr = %config.listen_addr,
        database = %config.store.database,
        db_host = %config.store.host,
        "starting message board"
    );
    warp::serve(routes).run(config.listen_addr).await;

    Ok(())
}
