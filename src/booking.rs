use crate::errors::js_error_message;
use crate::state::SharedState;
use crate::toast::{self, Severity};
use crate::{cookie, dom, net};
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlButtonElement;

const NAV_DELAY_MS: u32 = 240;
const LABEL_BUSY: &str = "Booking...";
const LABEL_DONE: &str = "Booked!";
const LABEL_IDLE: &str = "Confirm Booking";

/// UI path picked from the booking response. A fetch that followed a
/// redirect is a success that navigates; a plain 2xx reloads in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Follow(String),
    Reload,
    Failed,
}

impl Outcome {
    pub fn classify(redirected: bool, ok: bool, url: String) -> Self {
        if redirected {
            Self::Follow(url)
        } else if ok {
            Self::Reload
        } else {
            Self::Failed
        }
    }
}

pub fn booking_url(slot_id: &str) -> String {
    format!("/book/{slot_id}/")
}

/// Submit one booking for `slot_id`, reflecting progress on the trigger
/// button. The button stays disabled for the whole round-trip, which is
/// the only double-submit guard this flow has. Failure re-enables it and
/// leaves retry to the user.
pub fn submit(state: &SharedState, slot_id: &str, button: &HtmlButtonElement) {
    button.set_disabled(true);
    button.set_text_content(Some(LABEL_BUSY));

    let url = booking_url(slot_id);
    let state = state.clone();
    let button = button.clone();
    spawn_local(async move {
        let token = cookie::csrf_token(&dom::document()).unwrap_or_default();
        let outcome = match net::post_booking(&url, &token).await {
            Ok(response) => Outcome::classify(response.redirected(), response.ok(), response.url()),
            Err(err) => {
                log::warn!("booking request failed: {}", js_error_message(&err, "request failed"));
                Outcome::Failed
            }
        };

        match outcome {
            Outcome::Follow(target) => {
                button.set_text_content(Some(LABEL_DONE));
                Timeout::new(NAV_DELAY_MS, move || {
                    let _ = dom::window().location().set_href(&target);
                })
                .forget();
            }
            Outcome::Reload => {
                button.set_text_content(Some(LABEL_DONE));
                toast::show_app_toast(&state, "Booking confirmed successfully.", Severity::Success, Some(1800));
                Timeout::new(NAV_DELAY_MS, move || {
                    let _ = dom::window().location().reload();
                })
                .forget();
            }
            Outcome::Failed => {
                toast::show_app_toast(&state, "Unable to book slot. Please try again.", Severity::Danger, Some(2800));
                button.set_disabled(false);
                button.set_text_content(Some(LABEL_IDLE));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_wins_over_ok() {
        let outcome = Outcome::classify(true, true, "/bookings/7/".into());
        assert_eq!(outcome, Outcome::Follow("/bookings/7/".into()));
    }

    #[test]
    fn plain_2xx_reloads() {
        assert_eq!(Outcome::classify(false, true, "/book/7/".into()), Outcome::Reload);
    }

    #[test]
    fn anything_else_fails() {
        assert_eq!(Outcome::classify(false, false, "/book/7/".into()), Outcome::Failed);
    }

    #[test]
    fn booking_url_is_per_slot() {
        assert_eq!(booking_url("31"), "/book/31/");
    }
}
