use crate::dom;
use crate::state::SharedState;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const APP_TOAST_MS: u32 = 2600;
pub const LIVE_TOAST_MS: u32 = 3500;

const SEVERITY_CLASSES: [&str; 4] = [
    "text-bg-dark",
    "text-bg-success",
    "text-bg-danger",
    "text-bg-warning",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Default,
    Success,
    Danger,
    Warning,
}

impl Severity {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Default => "text-bg-dark",
            Self::Success => "text-bg-success",
            Self::Danger => "text-bg-danger",
            Self::Warning => "text-bg-warning",
        }
    }

    /// Anything that is not a known severity renders with the default look.
    pub fn from_label(label: &str) -> Self {
        match label {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            _ => Self::Default,
        }
    }
}

/// Show the shared `#app-toast` box. Calling again before the previous
/// toast hid replaces both the content and the hide timer.
pub fn show_app_toast(state: &SharedState, message: &str, severity: Severity, duration_ms: Option<u32>) {
    let document = dom::document();
    let Some(toast) = dom::by_id(&document, "app-toast") else {
        return;
    };
    let Some(body) = toast.query_selector(".toast-body").ok().flatten() else {
        return;
    };

    body.set_text_content(Some(message));
    for class in SEVERITY_CLASSES {
        let _ = toast.class_list().remove_1(class);
    }
    let _ = toast.class_list().add_1(severity.class_name());
    let _ = toast.class_list().add_1("show");

    let toast_clone = toast.clone();
    let state_clone = state.clone();
    let timer = Timeout::new(duration_ms.unwrap_or(APP_TOAST_MS), move || {
        let _ = toast_clone.class_list().remove_1("show");
        if let Ok(mut ui) = state_clone.try_borrow_mut() {
            ui.app_toast_timer = None;
        }
    });
    state.borrow_mut().app_toast_timer = Some(timer);
}

/// Show the `#live-popup` box used by the booking-event poller.
pub fn show_live_toast(state: &SharedState, message: &str) {
    let document = dom::document();
    let Some(toast) = dom::by_id(&document, "live-popup").and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(body) = toast.query_selector(".toast-body").ok().flatten() else {
        return;
    };

    body.set_text_content(Some(message));
    let _ = toast.style().set_property("display", "block");

    let toast_clone = toast.clone();
    let state_clone = state.clone();
    let timer = Timeout::new(LIVE_TOAST_MS, move || {
        let _ = toast_clone.style().set_property("display", "none");
        if let Ok(mut ui) = state_clone.try_borrow_mut() {
            ui.live_toast_timer = None;
        }
    });
    state.borrow_mut().live_toast_timer = Some(timer);
}
