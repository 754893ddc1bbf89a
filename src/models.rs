use serde::Deserialize;

/// Payload of `GET /notifications/latest/`. The backend sends an empty
/// object when there is nothing to announce, so every field defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct NotificationEvent {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub ground: String,
    #[serde(default)]
    pub time: String,
}

/// Server-rendered slot marker carried in the `data-slot-state` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Available,
    Booked,
    Past,
    Your,
}

impl SlotState {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Self::Available),
            "booked" => Some(Self::Booked),
            "past" => Some(Self::Past),
            "your" => Some(Self::Your),
            _ => None,
        }
    }
}

/// Display totals for the slots page. Past slots count toward `booked`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotTotals {
    pub available: u64,
    pub booked: u64,
    pub yours: u64,
}

/// Slot details carried in memory between modal open and submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub slot_id: String,
    pub start_time: String,
    pub end_time: String,
    pub price: String,
}
