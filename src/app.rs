use crate::models::BookingRequest;
use crate::state::{Config, SharedState, UiState};
use crate::toast::Severity;
use crate::{booking, confirm, counters, dom, effects, modal, notify, password, toast};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement};

thread_local! {
    static CONTROLLER: RefCell<Option<SharedState>> = const { RefCell::new(None) };
}

fn with_controller(f: impl FnOnce(&SharedState)) {
    CONTROLLER.with(|slot| {
        if let Some(state) = slot.borrow().as_ref() {
            f(state);
        }
    });
}

/// Wire every widget against the current page. Each step independently
/// no-ops when its DOM contract is absent, since templates vary by page.
pub fn boot(state: &SharedState, document: &Document) {
    install(state);
    counters::start(document);
    notify::start(state);
    confirm::wire(state, document);
    modal::wire(state, document);
    password::wire_strength_meter(document);
    password::wire_visibility_toggles(document);
    effects::wire(document);
}

/// Publish the controller so the template-facing exports below can
/// reach the shared state.
fn install(state: &SharedState) {
    CONTROLLER.with(|slot| {
        *slot.borrow_mut() = Some(state.clone());
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let document = dom::document();
    let state = UiState::shared(Config::from_document(&document));
    boot(&state, &document);
    Ok(())
}

/// Template-facing toast entry point, e.g. `showAppToast('Saved.', 'success')`.
#[wasm_bindgen(js_name = showAppToast)]
pub fn show_app_toast(message: String, severity: Option<String>, delay_ms: Option<u32>) {
    with_controller(|state| {
        let severity = Severity::from_label(severity.as_deref().unwrap_or_default());
        toast::show_app_toast(state, &message, severity, delay_ms);
    });
}

/// Template-facing booking trigger for buttons outside the modal.
#[wasm_bindgen(js_name = bookSlot)]
pub fn book_slot(slot_id: String, button: HtmlButtonElement) {
    with_controller(|state| booking::submit(state, &slot_id, &button));
}

/// Rebind and open the page's confirmation modal for one slot.
#[wasm_bindgen(js_name = showConfirmModal)]
pub fn show_confirm_modal(slot_id: String, start_time: String, end_time: String, price: JsValue) {
    with_controller(|state| {
        modal::rebind(
            state,
            &dom::document(),
            BookingRequest {
                slot_id,
                start_time,
                end_time,
                price: price_label(&price),
            },
        );
    });
}

/// Templates pass the price as either a string or a bare number.
fn price_label(price: &JsValue) -> String {
    if let Some(text) = price.as_string() {
        return text;
    }
    if let Some(number) = price.as_f64() {
        if number.fract() == 0.0 {
            return format!("{}", number as i64);
        }
        return format!("{number}");
    }
    String::new()
}
