pub mod app;
pub mod booking;
pub mod confirm;
pub mod cookie;
pub mod counters;
pub mod dom;
pub mod effects;
pub mod errors;
pub mod modal;
pub mod models;
pub mod net;
pub mod notify;
pub mod password;
pub mod state;
pub mod storage;
pub mod toast;

pub use models::{BookingRequest, NotificationEvent, SlotState, SlotTotals};
pub use state::{Config, SharedState, UiState};
pub use toast::Severity;
