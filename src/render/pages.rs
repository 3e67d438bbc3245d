//! Documentation pages.

use crate::render::{escape, layout, Document, Page, RenderContext, RenderError, RenderTarget};

/// Guide pages listed at the top of the navigation.
pub const GUIDES: &[(&str, &str)] = &[
    ("/docs/introduction", "Introduction"),
    ("/docs/how-to-use", "How to Use"),
    ("/docs/themes", "Themes"),
    ("/docs/components", "Components"),
    ("/docs/htmx-example", "htmx Example"),
    ("/docs/datastar-example", "Datastar Example"),
];

/// A documented component.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn component(slug: &'static str, name: &'static str, description: &'static str) -> Component {
    Component {
        slug,
        name,
        description,
    }
}

pub const COMPONENTS: &[Component] = &[
    component("accordion", "Accordion", "Vertically stacked sections that expand and collapse."),
    component("alert", "Alert", "Callout for short, important messages."),
    component("aspect-ratio", "Aspect Ratio", "Keeps content at a fixed width-to-height ratio."),
    component("avatar", "Avatar", "Image with a fallback for representing a user."),
    component("badge", "Badge", "Small label for status or counts."),
    component("breadcrumb", "Breadcrumb", "Shows the location of the current page in a hierarchy."),
    component("button", "Button", "Triggers an action or event."),
    component("calendar", "Calendar", "Month grid for picking a date."),
    component("card", "Card", "Container grouping related content and actions."),
    component("carousel", "Carousel", "Cycles through a set of slides."),
    component("charts", "Charts", "Line, bar and pie charts driven by data attributes."),
    component("checkbox", "Checkbox", "Toggle between checked and unchecked."),
    component("checkbox-card", "Checkbox Card", "Checkbox presented as a selectable card."),
    component("code", "Code", "Syntax-highlighted code block with copy button."),
    component("date-picker", "Date Picker", "Input paired with a calendar popover."),
    component("drawer", "Drawer", "Panel sliding in from the edge of the screen."),
    component("dropdown", "Dropdown", "Menu of actions revealed on demand."),
    component("form", "Form", "Labels, descriptions and messages for form controls."),
    component("icon", "Icon", "Inline SVG icon set."),
    component("input", "Input", "Single-line text field."),
    component("input-otp", "Input OTP", "Segmented one-time-password field."),
    component("label", "Label", "Accessible caption for a form control."),
    component("modal", "Modal", "Dialog layered over the page."),
    component("pagination", "Pagination", "Navigation between pages of results."),
    component("popover", "Popover", "Floating content anchored to a trigger."),
    component("progress", "Progress", "Completion indicator for a task."),
    component("radio", "Radio", "Pick exactly one option from a set."),
    component("radio-card", "Radio Card", "Radio option presented as a selectable card."),
    component("rating", "Rating", "Star rating input and display."),
    component("select-box", "Select Box", "Searchable single or multi select."),
    component("separator", "Separator", "Visual divider between content."),
    component("skeleton", "Skeleton", "Placeholder shown while content loads."),
    component("slider", "Slider", "Pick a value from a range."),
    component("table", "Table", "Rows and columns of data."),
    component("tabs", "Tabs", "Switch between related panels."),
    component("tags-input", "Tags Input", "Enter a list of free-form tags."),
    component("textarea", "Textarea", "Multi-line text field with optional auto-resize."),
    component("time-picker", "Time Picker", "Input for choosing a time of day."),
    component("toast", "Toast", "Brief, auto-dismissing notification."),
    component("toggle", "Toggle", "On/off switch."),
    component("tooltip", "Tooltip", "Hint shown on hover or focus."),
];

/// Look up a component by URL slug.
pub fn find_component(slug: &str) -> Option<&'static Component> {
    COMPONENTS.iter().find(|c| c.slug == slug)
}

/// One heading and its body within a page.
#[derive(Debug, Clone)]
pub struct Section {
    pub anchor: String,
    pub heading: String,
    /// Trusted HTML.
    pub body: String,
}

impl Section {
    pub fn new(anchor: &str, heading: &str, body: impl Into<String>) -> Self {
        Self {
            anchor: anchor.to_string(),
            heading: heading.to_string(),
            body: body.into(),
        }
    }
}

/// A documentation page with the standard chrome.
#[derive(Debug, Clone)]
pub struct DocPage {
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
}

impl DocPage {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    fn content(&self) -> String {
        let mut html = format!(
            "<h1>{}</h1><p class=\"lead\">{}</p>",
            escape(&self.title),
            escape(&self.description)
        );
        for section in &self.sections {
            html.push_str(&format!(
                "<section id=\"{}\"><h2>{}</h2>{}</section>",
                escape(&section.anchor),
                escape(&section.heading),
                section.body
            ));
        }
        html
    }
}

impl Page for DocPage {
    fn render(&self, ctx: &RenderContext) -> Result<Document, RenderError> {
        if self.title.is_empty() {
            return Err(RenderError::MissingData("page title"));
        }

        let entries: Vec<(String, String)> = self
            .sections
            .iter()
            .map(|s| (s.anchor.clone(), s.heading.clone()))
            .collect();

        Ok(Document::new()
            .with(RenderTarget::Title, layout::title(&self.title, ctx))
            .with(RenderTarget::Header, layout::header(ctx))
            .with(RenderTarget::Sidebar, layout::sidebar(ctx))
            .with(RenderTarget::Content, self.content())
            .with(RenderTarget::Toc, layout::toc(&entries))
            .with(RenderTarget::Footer, layout::footer(ctx)))
    }
}

pub fn landing() -> DocPage {
    DocPage::new(
        "Beautiful UI components for Go",
        "Server-rendered components that work with htmx, Datastar or plain HTML.",
    )
    .section(Section::new(
        "get-started",
        "Get started",
        "<p><a href=\"/docs/introduction\">Read the introduction</a> or browse the <a href=\"/docs/components\">components</a>.</p>",
    ))
}

pub fn introduction() -> DocPage {
    DocPage::new("Introduction", "What the component library is and how it is organised.")
        .section(Section::new(
            "philosophy",
            "Philosophy",
            "<p>Components are plain server-rendered markup with small, optional scripts.</p>",
        ))
        .section(Section::new(
            "features",
            "Features",
            "<ul><li>No build step for the JavaScript</li><li>Works with any hypermedia library</li><li>Themeable with CSS variables</li></ul>",
        ))
}

pub fn how_to_use() -> DocPage {
    DocPage::new("How to Use", "Install the CLI and add components to a project.")
        .section(Section::new(
            "installation",
            "Installation",
            "<pre><code>go install github.com/templui/templui/cmd/templui@latest</code></pre>",
        ))
        .section(Section::new(
            "adding-components",
            "Adding components",
            "<pre><code>templui add button card</code></pre>",
        ))
}

pub fn themes() -> DocPage {
    DocPage::new("Themes", "Customise colours and radii with CSS variables.").section(Section::new(
        "variables",
        "Variables",
        "<p>Override <code>--primary</code>, <code>--background</code> and <code>--radius</code> in your stylesheet.</p>",
    ))
}

pub fn components_overview() -> DocPage {
    let mut list = String::from("<ul class=\"component-grid\">");
    for c in COMPONENTS {
        list.push_str(&format!(
            "<li><a href=\"/docs/components/{}\">{}</a></li>",
            c.slug,
            escape(c.name)
        ));
    }
    list.push_str("</ul>");

    DocPage::new("Components", "Every component in the library.")
        .section(Section::new("all-components", "All components", list))
}

pub fn component_page(component: &Component) -> DocPage {
    DocPage::new(component.name, component.description)
        .section(Section::new(
            "preview",
            "Preview",
            format!(
                "<div class=\"preview\" data-component=\"{}\"></div>",
                escape(component.slug)
            ),
        ))
        .section(Section::new(
            "installation",
            "Installation",
            format!("<pre><code>templui add {}</code></pre>", escape(component.slug)),
        ))
        .section(Section::new(
            "usage",
            "Usage",
            format!("<p>Import the <code>{}</code> package and render it from your templates.</p>", escape(component.slug)),
        ))
}

pub fn htmx_example() -> DocPage {
    DocPage::new("htmx Example", "Loading server-rendered components on demand with htmx.").section(
        Section::new(
            "demo",
            "Demo",
            "<button hx-get=\"/api/load-modal-htmx\" hx-target=\"#htmx-demo\">Load components</button><div id=\"htmx-demo\"></div>",
        ),
    )
}

pub fn datastar_example() -> DocPage {
    DocPage::new(
        "Datastar Example",
        "Merging server-pushed fragments into the page with Datastar.",
    )
    .section(Section::new(
        "demo",
        "Demo",
        "<button data-on-click=\"@get('/api/load-datepicker')\">Load modal</button><div id=\"modal-default\"></div>",
    ))
}

pub fn not_found() -> DocPage {
    DocPage::new("Page not found", "The page you are looking for does not exist.").section(
        Section::new(
            "next",
            "Where next",
            "<p><a href=\"/docs/introduction\">Go to the documentation</a></p>",
        ),
    )
}
