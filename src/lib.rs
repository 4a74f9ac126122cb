// HTTP server modules
pub mod handlers;
pub mod rejection;
pub mod render;
pub mod routes;

// Configuration
pub mod config;

// Message persistence
pub mod store;
