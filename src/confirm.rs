use crate::dom;
use crate::state::SharedState;
use crate::toast::{self, Severity};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub const ARM_WINDOW_MS: f64 = 4200.0;
const DISARM_CHECK_MS: u32 = 4400;
const DEFAULT_PROMPT: &str = "Please confirm action.";

/// Outcome of one click on a guarded link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Press {
    /// First tap (or tap after expiry): block navigation, start the window.
    Arm { until: f64 },
    /// Second tap inside the window: let navigation proceed.
    Proceed,
}

pub fn press(armed_until: Option<f64>, now: f64) -> Press {
    match armed_until {
        Some(until) if now < until => Press::Proceed,
        _ => Press::Arm { until: now + ARM_WINDOW_MS },
    }
}

/// Lazy expiry check: only clear state for a window that actually ran out.
pub fn disarm_due(armed_until: Option<f64>, now: f64) -> bool {
    matches!(armed_until, Some(until) if until <= now)
}

/// Replace native confirm dialogs on `a[data-confirm-message]` links with
/// a tap-twice gesture. Arm deadlines live in the shared state map, keyed
/// by the link's wire-time index.
pub fn wire(state: &SharedState, document: &Document) {
    for (key, link) in dom::select_all(document, "a[data-confirm-message]").into_iter().enumerate() {
        let state = state.clone();
        let link_clone = link.clone();
        let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let now = js_sys::Date::now();
            let armed_until = state.borrow().confirm_armed.get(&key).copied();
            match press(armed_until, now) {
                Press::Proceed => {
                    toast::show_app_toast(&state, "Processing request...", Severity::Default, Some(1200));
                }
                Press::Arm { until } => {
                    event.prevent_default();
                    state.borrow_mut().confirm_armed.insert(key, until);
                    let prompt = link_clone
                        .get_attribute("data-confirm-message")
                        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());
                    toast::show_app_toast(
                        &state,
                        &format!("{prompt} Tap again to continue."),
                        Severity::Warning,
                        Some(3600),
                    );

                    let state = state.clone();
                    Timeout::new(DISARM_CHECK_MS, move || {
                        let now = js_sys::Date::now();
                        let mut ui = state.borrow_mut();
                        if disarm_due(ui.confirm_armed.get(&key).copied(), now) {
                            ui.confirm_armed.remove(&key);
                        }
                    })
                    .forget();
                }
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = link.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        handler.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_arms_with_full_window() {
        assert_eq!(press(None, 1_000.0), Press::Arm { until: 1_000.0 + ARM_WINDOW_MS });
    }

    #[test]
    fn press_inside_window_proceeds() {
        let Press::Arm { until } = press(None, 1_000.0) else {
            panic!("expected arm");
        };
        assert_eq!(press(Some(until), 1_000.0 + 4_199.0), Press::Proceed);
    }

    #[test]
    fn press_after_window_rearms() {
        let Press::Arm { until } = press(None, 1_000.0) else {
            panic!("expected arm");
        };
        let late = 1_000.0 + ARM_WINDOW_MS;
        assert_eq!(press(Some(until), late), Press::Arm { until: late + ARM_WINDOW_MS });
    }

    #[test]
    fn disarm_only_fires_for_expired_windows() {
        assert!(!disarm_due(None, 10_000.0));
        assert!(!disarm_due(Some(10_500.0), 10_000.0));
        assert!(disarm_due(Some(10_000.0), 10_000.0));
        assert!(disarm_due(Some(9_000.0), 10_000.0));
    }
}
