use crate::dom;
use web_sys::Storage;

const LAST_SEEN_KEY: &str = "live_booking_last_seen_event_id";

fn local_storage() -> Option<Storage> {
    dom::window().local_storage().ok().flatten()
}

/// Id of the last booking event that was shown as a toast, if any.
/// Unavailable storage (private browsing) reads as "nothing seen yet",
/// which only risks showing a toast twice.
pub fn last_seen_event_id() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(LAST_SEEN_KEY).ok().flatten())
}

pub fn remember_event_id(event_id: &str) {
    let Some(storage) = local_storage() else {
        log::debug!("local storage unavailable, skipping event id persist");
        return;
    };
    if storage.set_item(LAST_SEEN_KEY, event_id).is_err() {
        log::debug!("failed to persist last seen event id");
    }
}
