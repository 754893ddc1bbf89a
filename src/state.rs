use crate::dom;
use crate::models::BookingRequest;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::Document;

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30 * 60 * 1000;
const DEFAULT_NOTIFICATIONS_URL: &str = "/notifications/latest/";

/// Boot-time settings read from `<meta>` tags in the served page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub poll_interval_ms: u32,
    pub notifications_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            notifications_url: DEFAULT_NOTIFICATIONS_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_document(document: &Document) -> Self {
        Self {
            poll_interval_ms: parse_interval(dom::meta_content(document, "live-poll-interval-ms")),
            notifications_url: dom::meta_content(document, "live-notifications-url")
                .unwrap_or_else(|| DEFAULT_NOTIFICATIONS_URL.to_string()),
        }
    }
}

pub fn parse_interval(value: Option<String>) -> u32 {
    value
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
}

/// Mutable UI state shared by every event closure. One instance per page,
/// built at boot and threaded around as `Rc<RefCell<_>>`.
pub struct UiState {
    pub config: Config,
    pub app_toast_timer: Option<Timeout>,
    pub live_toast_timer: Option<Timeout>,
    /// Arm deadlines of the confirm-gesture links, keyed by wire-time index.
    pub confirm_armed: HashMap<usize, f64>,
    /// Slot currently bound to the confirmation modal.
    pub modal_binding: Option<BookingRequest>,
}

pub type SharedState = Rc<RefCell<UiState>>;

impl UiState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            app_toast_timer: None,
            live_toast_timer: None,
            confirm_armed: HashMap::new(),
            modal_binding: None,
        }
    }

    pub fn shared(config: Config) -> SharedState {
        Rc::new(RefCell::new(Self::new(config)))
    }
}
