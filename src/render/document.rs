//! Named document regions and the rendered document.

use std::fmt;

use crate::render::RenderError;

/// An independently swappable region of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderTarget {
    Title,
    Header,
    Sidebar,
    Content,
    Toc,
    Footer,
}

impl RenderTarget {
    /// Every target, in the order they appear in a full document.
    pub const ALL: [RenderTarget; 6] = [
        RenderTarget::Title,
        RenderTarget::Header,
        RenderTarget::Sidebar,
        RenderTarget::Content,
        RenderTarget::Toc,
        RenderTarget::Footer,
    ];

    /// Name used as the element id and in logs.
    pub fn name(self) -> &'static str {
        match self {
            RenderTarget::Title => "title",
            RenderTarget::Header => "header",
            RenderTarget::Sidebar => "sidebar",
            RenderTarget::Content => "content",
            RenderTarget::Toc => "toc",
            RenderTarget::Footer => "footer",
        }
    }

    fn element(self) -> &'static str {
        match self {
            RenderTarget::Title => "title",
            RenderTarget::Header => "header",
            RenderTarget::Sidebar => "aside",
            RenderTarget::Content => "main",
            RenderTarget::Toc => "nav",
            RenderTarget::Footer => "footer",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Wrap rendered inner HTML in this target's element.
    ///
    /// `attrs` is appended verbatim after the id attribute.
    pub fn wrap(self, inner: &str, attrs: &str) -> String {
        let element = self.element();
        let mut out = String::with_capacity(inner.len() + 48);
        out.push('<');
        out.push_str(element);
        out.push_str(" id=\"");
        out.push_str(self.name());
        out.push('"');
        if !attrs.is_empty() {
            out.push(' ');
            out.push_str(attrs);
        }
        out.push('>');
        out.push_str(inner);
        out.push_str("</");
        out.push_str(element);
        out.push('>');
        out
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendered inner HTML for each target of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    regions: [Option<String>; 6],
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Document::set`].
    pub fn with(mut self, target: RenderTarget, html: impl Into<String>) -> Self {
        self.set(target, html);
        self
    }

    pub fn set(&mut self, target: RenderTarget, html: impl Into<String>) {
        self.regions[target.index()] = Some(html.into());
    }

    pub fn get(&self, target: RenderTarget) -> Option<&str> {
        self.regions[target.index()].as_deref()
    }

    /// Like [`Document::get`], but a missing region is a render failure.
    pub fn require(&self, target: RenderTarget) -> Result<&str, RenderError> {
        self.get(target).ok_or(RenderError::MissingTarget(target))
    }

    /// Targets present, in document order.
    pub fn targets(&self) -> impl Iterator<Item = RenderTarget> + '_ {
        RenderTarget::ALL
            .into_iter()
            .filter(|t| self.regions[t.index()].is_some())
    }
}
