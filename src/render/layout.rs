//! Page shell and the chrome shared by every documentation page.

use crate::render::pages::{COMPONENTS, GUIDES};
use crate::render::{escape, Document, RenderContext, RenderError, RenderTarget};

/// Assemble a complete HTML document. Every target must be present.
pub fn full_page(doc: &Document) -> Result<String, RenderError> {
    let region = |target: RenderTarget| -> Result<String, RenderError> {
        Ok(target.wrap(doc.require(target)?, ""))
    };

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&region(RenderTarget::Title)?);
    html.push('\n');
    html.push_str("<link rel=\"stylesheet\" href=\"/assets/css/output.css\">\n");
    html.push_str("<link rel=\"icon\" href=\"/favicon.ico\">\n");
    html.push_str("<script defer src=\"/assets/js/htmx.min.js\"></script>\n");
    html.push_str("<script type=\"module\" src=\"/assets/js/datastar.js\"></script>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&region(RenderTarget::Header)?);
    html.push_str("\n<div class=\"layout\">\n");
    html.push_str(&region(RenderTarget::Sidebar)?);
    html.push('\n');
    html.push_str(&region(RenderTarget::Content)?);
    html.push('\n');
    html.push_str(&region(RenderTarget::Toc)?);
    html.push_str("\n</div>\n");
    html.push_str(&region(RenderTarget::Footer)?);
    html.push_str("\n</body>\n</html>\n");
    Ok(html)
}

/// Page title text, e.g. `Button - templUI`.
pub fn title(page_title: &str, ctx: &RenderContext) -> String {
    if page_title.is_empty() {
        escape(&ctx.site_name)
    } else {
        format!("{} - {}", escape(page_title), escape(&ctx.site_name))
    }
}

/// Header with the site name and the cached star count.
pub fn header(ctx: &RenderContext) -> String {
    format!(
        concat!(
            "<a href=\"/\" class=\"brand\">{name}</a>",
            "<a href=\"{repo}\" class=\"github-stars\" target=\"_blank\" rel=\"noopener\">",
            "<span class=\"star-count\">{stars}</span> stars</a>"
        ),
        name = escape(&ctx.site_name),
        repo = escape(&ctx.repository_url),
        stars = format_count(ctx.stars),
    )
}

/// Navigation listing guides and components; the current page is marked.
pub fn sidebar(ctx: &RenderContext) -> String {
    let mut html = String::from("<ul class=\"nav\">");
    let guides = GUIDES.iter().map(|(path, label)| (path.to_string(), *label));
    let components = COMPONENTS
        .iter()
        .map(|c| (format!("/docs/components/{}", c.slug), c.name));

    for (path, label) in guides.chain(components) {
        let current = if path == ctx.path { " aria-current=\"page\"" } else { "" };
        html.push_str(&format!(
            "<li><a href=\"{p}\" hx-get=\"{p}\" hx-target=\"#content\" hx-swap=\"outerHTML\" hx-push-url=\"true\"{current}>{label}</a></li>",
            p = escape(&path),
            label = escape(label),
        ));
    }
    html.push_str("</ul>");
    html
}

/// Table of contents from `(anchor, label)` pairs.
pub fn toc(entries: &[(String, String)]) -> String {
    let mut html = String::from("<p class=\"toc-title\">On this page</p><ul>");
    for (anchor, label) in entries {
        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a></li>",
            escape(anchor),
            escape(label)
        ));
    }
    html.push_str("</ul>");
    html
}

pub fn footer(ctx: &RenderContext) -> String {
    format!(
        "<p>Built with {} &middot; <a href=\"{}\">Source</a></p>",
        escape(&ctx.site_name),
        escape(&ctx.repository_url)
    )
}

/// Compact count for the header badge: 950, 1.2k, 12k.
pub fn format_count(n: u64) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=9_999 => {
            let tenths = n / 100;
            if tenths % 10 == 0 {
                format!("{}k", tenths / 10)
            } else {
                format!("{}.{}k", tenths / 10, tenths % 10)
            }
        }
        _ => format!("{}k", n / 1000),
    }
}
