use crate::errors::js_error_message;
use crate::models::NotificationEvent;
use crate::state::SharedState;
use crate::{net, storage, toast};
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

/// A live-booking toast that should be shown, plus the id to persist
/// once it has been.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveToast {
    pub event_id: String,
    pub message: String,
}

/// Dedup decision for one polled payload. `None` means stay quiet:
/// either the backend had nothing, or the event was already shown.
pub fn decide(event: &NotificationEvent, last_seen: Option<&str>) -> Option<LiveToast> {
    let event_id = event.event_id.as_deref()?.trim();
    if event_id.is_empty() {
        return None;
    }
    if last_seen == Some(event_id) {
        return None;
    }
    Some(LiveToast {
        event_id: event_id.to_string(),
        // Time arrives preformatted from the backend (HH:MM).
        message: format!("{} booked at {}", event.ground, event.time),
    })
}

/// One poll cycle. Failures are logged and otherwise swallowed; the next
/// interval tick retries implicitly.
pub fn check_latest(state: &SharedState) {
    let url = state.borrow().config.notifications_url.clone();
    let state = state.clone();
    spawn_local(async move {
        let value = match net::fetch_json(&url).await {
            Ok(value) => value,
            Err(err) => {
                log::debug!("notification poll failed: {}", js_error_message(&err, "fetch error"));
                return;
            }
        };
        let event: NotificationEvent = match serde_wasm_bindgen::from_value(value) {
            Ok(event) => event,
            Err(err) => {
                log::debug!("notification payload unreadable: {err}");
                return;
            }
        };

        let last_seen = storage::last_seen_event_id();
        if let Some(live) = decide(&event, last_seen.as_deref()) {
            toast::show_live_toast(&state, &live.message);
            storage::remember_event_id(&live.event_id);
        }
    });
}

/// Immediate check, then a fixed-interval poll loop for the page lifetime.
pub fn start(state: &SharedState) {
    check_latest(state);
    let interval_ms = state.borrow().config.poll_interval_ms;
    let state = state.clone();
    Interval::new(interval_ms, move || check_latest(&state)).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: Option<&str>, ground: &str, time: &str) -> NotificationEvent {
        NotificationEvent {
            event_id: id.map(str::to_string),
            ground: ground.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn new_event_produces_one_toast() {
        let payload = event(Some("42"), "Court A", "18:30");
        let live = decide(&payload, None).expect("toast expected");
        assert_eq!(live.message, "Court A booked at 18:30");
        assert_eq!(live.event_id, "42");
    }

    #[test]
    fn already_seen_event_is_silent() {
        let payload = event(Some("42"), "Court A", "18:30");
        assert_eq!(decide(&payload, Some("42")), None);
    }

    #[test]
    fn different_last_seen_shows_again() {
        let payload = event(Some("43"), "Court B", "09:00");
        let live = decide(&payload, Some("42")).expect("toast expected");
        assert_eq!(live.event_id, "43");
    }

    #[test]
    fn missing_or_empty_id_is_a_no_op() {
        assert_eq!(decide(&event(None, "Court A", "18:30"), None), None);
        assert_eq!(decide(&event(Some(""), "Court A", "18:30"), None), None);
        assert_eq!(decide(&event(Some("   "), "Court A", "18:30"), None), None);
    }

    #[test]
    fn empty_payload_is_a_no_op() {
        assert_eq!(decide(&NotificationEvent::default(), None), None);
    }
}
