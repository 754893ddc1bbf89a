use crate::dom;
use crate::models::{SlotState, SlotTotals};
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub const COUNTER_REFRESH_MS: u32 = 30_000;

pub fn tally<I>(states: I) -> SlotTotals
where
    I: IntoIterator<Item = SlotState>,
{
    let mut totals = SlotTotals::default();
    for state in states {
        match state {
            SlotState::Available => totals.available += 1,
            SlotState::Booked | SlotState::Past => totals.booked += 1,
            SlotState::Your => totals.yours += 1,
        }
    }
    totals
}

/// Recompute the three live counters from the `data-slot-state` markers.
/// A page without markers is left untouched.
pub fn update_counters(document: &Document) {
    let flags = dom::select_all(document, "[data-slot-state]");
    if flags.is_empty() {
        return;
    }

    let totals = tally(
        flags
            .iter()
            .filter_map(|flag| flag.get_attribute("data-slot-state"))
            .filter_map(|value| SlotState::parse(&value)),
    );

    set_counter_value(document, "live-available-count", totals.available);
    set_counter_value(document, "live-booked-count", totals.booked);
    set_counter_value(document, "live-your-count", totals.yours);
}

/// Dirty-checked write: an unchanged value is skipped entirely so the
/// flash animation only runs when a number actually moved.
fn set_counter_value(document: &Document, id: &str, value: u64) {
    let Some(el) = dom::by_id(document, id) else {
        return;
    };
    let next = value.to_string();
    if el.text_content().unwrap_or_default() == next {
        return;
    }
    el.set_text_content(Some(&next));
    let _ = el.class_list().remove_1("count-flash");
    // trigger animation restart
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.offset_width();
    }
    let _ = el.class_list().add_1("count-flash");
}

pub fn start(document: &Document) {
    update_counters(document);
    Interval::new(COUNTER_REFRESH_MS, || update_counters(&dom::document())).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_groups_booked_and_past_together() {
        let states = [
            SlotState::Available,
            SlotState::Booked,
            SlotState::Past,
            SlotState::Past,
            SlotState::Your,
            SlotState::Available,
        ];
        let totals = tally(states);
        assert_eq!(totals.available, 2);
        assert_eq!(totals.booked, 3);
        assert_eq!(totals.yours, 1);
    }

    #[test]
    fn tally_of_nothing_is_zero() {
        assert_eq!(tally([]), SlotTotals::default());
    }
}
