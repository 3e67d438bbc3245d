//! Toast notifications built from the demo form.

use std::collections::HashMap;

use crate::render::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Success,
    Error,
    Warning,
    Info,
}

impl Variant {
    /// Unknown values fall back to [`Variant::Default`].
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Variant::Success,
            "error" => Variant::Error,
            "warning" => Variant::Warning,
            "info" => Variant::Info,
            _ => Variant::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Success => "success",
            Variant::Error => "error",
            Variant::Warning => "warning",
            Variant::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    TopRight,
    TopLeft,
    TopCenter,
    #[default]
    BottomRight,
    BottomLeft,
    BottomCenter,
}

impl Position {
    /// Unknown values fall back to [`Position::BottomRight`].
    pub fn parse(value: &str) -> Self {
        match value {
            "top-right" => Position::TopRight,
            "top-left" => Position::TopLeft,
            "top-center" => Position::TopCenter,
            "bottom-left" => Position::BottomLeft,
            "bottom-center" => Position::BottomCenter,
            _ => Position::BottomRight,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
        }
    }
}

/// Toast parameters from one form submission. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastRequest {
    pub title: String,
    pub description: String,
    pub variant: Variant,
    pub position: Position,
    /// Auto-dismiss delay; 0 keeps the toast until dismissed.
    pub duration_ms: u64,
    pub dismissible: bool,
    pub show_indicator: bool,
    pub show_icon: bool,
}

impl ToastRequest {
    /// Build from form fields. Malformed values never fail: a bad `duration`
    /// becomes 0 and flags are set only by the literal `true`.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let field = |name: &str| form.get(name).map(String::as_str).unwrap_or_default();
        let flag = |name: &str| field(name) == "true";

        Self {
            title: field("title").to_string(),
            description: field("description").to_string(),
            variant: Variant::parse(field("type")),
            position: Position::parse(field("position")),
            duration_ms: field("duration").trim().parse().unwrap_or(0),
            dismissible: flag("dismissible"),
            show_indicator: flag("indicator"),
            show_icon: flag("icon"),
        }
    }

    pub fn render(&self) -> String {
        let mut html = format!(
            "<div class=\"toast toast-{variant} toast-{position}\" data-tui-toast data-tui-toast-duration=\"{duration}\" data-variant=\"{variant}\" data-position=\"{position}\" role=\"status\" aria-live=\"polite\">",
            variant = self.variant.as_str(),
            position = self.position.as_str(),
            duration = self.duration_ms,
        );

        if self.show_indicator && self.duration_ms > 0 {
            html.push_str("<div class=\"toast-progress\"></div>");
        }
        if self.show_icon {
            html.push_str(&format!(
                "<span class=\"toast-icon\" data-icon=\"{}\"></span>",
                self.variant.as_str()
            ));
        }

        html.push_str("<div class=\"toast-body\">");
        if !self.title.is_empty() {
            html.push_str(&format!("<p class=\"toast-title\">{}</p>", escape(&self.title)));
        }
        if !self.description.is_empty() {
            html.push_str(&format!(
                "<p class=\"toast-description\">{}</p>",
                escape(&self.description)
            ));
        }
        html.push_str("</div>");

        if self.dismissible {
            html.push_str("<button class=\"toast-dismiss\" data-tui-toast-dismiss aria-label=\"Close\">&times;</button>");
        }
        html.push_str("</div>");
        html
    }
}
