//! Standalone component demos, served as bare fragments.

/// A rendered demo. The root element carries `id`, so a morphing client can
/// merge it by id.
#[derive(Debug, Clone, Copy)]
pub struct Showcase {
    pub id: &'static str,
    pub html: &'static str,
}

pub const AVATAR_FALLBACK: Showcase = Showcase {
    id: "avatar-fallback",
    html: r#"<div id="avatar-fallback" class="avatar"><span class="avatar-fallback">JD</span></div>"#,
};

pub const CALENDAR_DEFAULT: Showcase = Showcase {
    id: "calendar-default",
    html: r#"<div id="calendar-default" class="calendar" data-tui-calendar></div>"#,
};

pub const CAROUSEL_DEFAULT: Showcase = Showcase {
    id: "carousel-default",
    html: r#"<div id="carousel-default" class="carousel" data-tui-carousel><div class="carousel-item">1</div><div class="carousel-item">2</div><div class="carousel-item">3</div></div>"#,
};

pub const CHART_DEFAULT: Showcase = Showcase {
    id: "chart-default",
    html: r#"<div id="chart-default" class="chart"><canvas data-tui-chart-id="chart-default"></canvas></div>"#,
};

pub const CODE_DEFAULT: Showcase = Showcase {
    id: "code-default",
    html: r#"<div id="code-default" class="code" data-tui-code><pre><code>fmt.Println("hello")</code></pre></div>"#,
};

pub const DATE_PICKER_DEFAULT: Showcase = Showcase {
    id: "date-picker-default",
    html: r#"<div id="date-picker-default" class="date-picker"><input type="text" placeholder="Select a date" data-tui-datepicker></div>"#,
};

pub const DRAWER_DEFAULT: Showcase = Showcase {
    id: "drawer-default",
    html: r#"<div id="drawer-default" class="drawer" data-tui-drawer><button>Open drawer</button></div>"#,
};

pub const DROPDOWN_DEFAULT: Showcase = Showcase {
    id: "dropdown-default",
    html: r#"<div id="dropdown-default" class="dropdown" data-tui-dropdown><button>Open menu</button></div>"#,
};

pub const INPUT_PASSWORD: Showcase = Showcase {
    id: "input-password",
    html: r#"<div id="input-password" class="input"><input type="password" placeholder="Password"></div>"#,
};

pub const INPUT_OTP_DEFAULT: Showcase = Showcase {
    id: "input-otp-default",
    html: r#"<div id="input-otp-default" class="input-otp" data-tui-inputotp data-tui-inputotp-length="6"></div>"#,
};

pub const MODAL_DEFAULT: Showcase = Showcase {
    id: "modal-default",
    html: r#"<div id="modal-default" class="modal" data-tui-modal><button data-tui-modal-trigger="demo">Open modal</button><div class="modal-content" role="dialog" aria-modal="true"><h2>Are you sure?</h2><p>This action cannot be undone.</p></div></div>"#,
};

pub const POPOVER_DEFAULT: Showcase = Showcase {
    id: "popover-default",
    html: r#"<div id="popover-default" class="popover" data-tui-popover><button>Open popover</button></div>"#,
};

pub const PROGRESS_DEFAULT: Showcase = Showcase {
    id: "progress-default",
    html: r#"<div id="progress-default" class="progress" role="progressbar" aria-valuenow="60" aria-valuemin="0" aria-valuemax="100"><div class="progress-bar" style="width:60%"></div></div>"#,
};

pub const RATING_DEFAULT: Showcase = Showcase {
    id: "rating-default",
    html: r#"<div id="rating-default" class="rating" data-tui-rating data-tui-rating-value="3"></div>"#,
};

pub const SELECT_BOX_DEFAULT: Showcase = Showcase {
    id: "select-box-default",
    html: r#"<div id="select-box-default" class="select-box" data-tui-selectbox><button>Select a fruit</button></div>"#,
};

pub const SLIDER_VALUE: Showcase = Showcase {
    id: "slider-value",
    html: r#"<div id="slider-value" class="slider"><input type="range" min="0" max="100" value="50" data-tui-slider-input></div>"#,
};

pub const TABS_DEFAULT: Showcase = Showcase {
    id: "tabs-default",
    html: r#"<div id="tabs-default" class="tabs" data-tui-tabs><button data-tui-tabs-trigger="account">Account</button><button data-tui-tabs-trigger="password">Password</button></div>"#,
};

pub const TAGS_INPUT_DEFAULT: Showcase = Showcase {
    id: "tags-input-default",
    html: r#"<div id="tags-input-default" class="tags-input" data-tui-tagsinput><input type="text" placeholder="Add a tag"></div>"#,
};

pub const TEXTAREA_AUTO_RESIZE: Showcase = Showcase {
    id: "textarea-auto-resize",
    html: r#"<div id="textarea-auto-resize" class="textarea"><textarea data-tui-textarea-auto-resize="true" placeholder="Type here"></textarea></div>"#,
};

pub const TIME_PICKER_DEFAULT: Showcase = Showcase {
    id: "time-picker-default",
    html: r#"<div id="time-picker-default" class="time-picker" data-tui-timepicker><button>Select time</button></div>"#,
};

pub const TOAST_DEFAULT: Showcase = Showcase {
    id: "toast-default",
    html: r#"<div id="toast-default" class="toast-demo"><button hx-post="/docs/toast/demo" hx-vals='{"title":"Saved","description":"Your changes were saved.","type":"success","duration":"3000","dismissible":"true","indicator":"true","icon":"true"}' hx-target="body" hx-swap="beforeend">Show toast</button></div>"#,
};

/// Components loaded by the htmx example, in display order.
pub const HTMX_EXAMPLE: &[Showcase] = &[
    AVATAR_FALLBACK,
    CALENDAR_DEFAULT,
    CAROUSEL_DEFAULT,
    CHART_DEFAULT,
    CODE_DEFAULT,
    DATE_PICKER_DEFAULT,
    DRAWER_DEFAULT,
    DROPDOWN_DEFAULT,
    INPUT_PASSWORD,
    INPUT_OTP_DEFAULT,
    MODAL_DEFAULT,
    POPOVER_DEFAULT,
    PROGRESS_DEFAULT,
    RATING_DEFAULT,
    SELECT_BOX_DEFAULT,
    SLIDER_VALUE,
    TABS_DEFAULT,
    TAGS_INPUT_DEFAULT,
    TEXTAREA_AUTO_RESIZE,
    TIME_PICKER_DEFAULT,
    TOAST_DEFAULT,
];

/// Concatenate demos into one fragment body.
pub fn render_all(items: &[Showcase]) -> String {
    items.iter().map(|s| s.html).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_element_carries_id() {
        for item in HTMX_EXAMPLE {
            assert!(
                item.html.starts_with(&format!("<div id=\"{}\"", item.id)),
                "{} does not start with its id",
                item.id
            );
        }
    }

    #[test]
    fn test_render_all_keeps_order() {
        let html = render_all(HTMX_EXAMPLE);
        let avatar = html.find("avatar-fallback").unwrap();
        let toast = html.find("toast-default").unwrap();
        assert!(avatar < toast);
        assert_eq!(html.lines().count(), HTMX_EXAMPLE.len());
    }
}
