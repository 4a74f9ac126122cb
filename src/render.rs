// HTML page rendering

use minijinja::{context, Environment};
use thiserror::Error;

const INDEX_TEMPLATE: &str = "index.html";

#[derive(Debug, Error)]
#[error("Render error: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Renders the board pages from the templates embedded in the binary
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        Ok(Self { env })
    }

    /// Render the index page listing `messages` in the given order.
    ///
    /// Message text is HTML-escaped.
    pub fn render_index(&self, messages: &[String]) -> Result<String, RenderError> {
        let template = self.env.get_template(INDEX_TEMPLATE)?;
        Ok(template.render(context! { messages => messages })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_messages_in_order() {
        let renderer = Renderer::new().unwrap();
        let page = renderer
            .render_index(&["first".to_string(), "second".to_string()])
            .unwrap();

        let first = page.find("<li>first</li>").expect("first message rendered");
        let second = page.find("<li>second</li>").expect("second message rendered");
        assert!(first < second);
        assert!(!page.contains("No messages yet."));
    }

    #[test]
    fn test_render_empty_board() {
        let renderer = Renderer::new().unwrap();
        let page = renderer.render_index(&[]).unwrap();

        assert!(page.contains("No messages yet."));
        assert!(!page.contains("<li>"));
    }

    #[test]
    fn test_render_escapes_html() {
        let renderer = Renderer::new().unwrap();
        let page = renderer
            .render_index(&["<script>alert(1)</script>".to_string()])
            .unwrap();

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_contains_forms() {
        let renderer = Renderer::new().unwrap();
        let page = renderer.render_index(&[]).unwrap();

        assert!(page.contains(r#"action="/submit""#));
        assert!(page.contains(r#"name="text""#));
        assert!(page.contains(r#"action="/delete_last""#));
    }
}
