//! Page rendering.
//!
//! Rendering is deliberately thin: a [`Page`] turns a [`RenderContext`] into a
//! [`Document`] holding inner HTML for every [`RenderTarget`]. Pages never know
//! how their output will be delivered; the delivery layer picks the targets.

pub mod document;
pub mod layout;
pub mod pages;
pub mod showcase;
pub mod toast;

use thiserror::Error;

pub use document::{Document, RenderTarget};

/// Per-request data available to every page.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub site_name: String,
    pub repository_url: String,
    /// Cached star count, zero until the first successful fetch.
    pub stars: u64,
    /// Path of the current request, for navigation highlighting.
    pub path: String,
}

/// Errors that can occur while rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("page did not render target '{0}'")]
    MissingTarget(RenderTarget),

    #[error("missing required data: {0}")]
    MissingData(&'static str),
}

/// Something that renders a complete document.
pub trait Page: Send + Sync {
    fn render(&self, ctx: &RenderContext) -> Result<Document, RenderError>;
}

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
