use crate::booking;
use crate::dom;
use crate::models::BookingRequest;
use crate::state::SharedState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

const MODAL_ID: &str = "confirmModalGlobal";
const CONFIRM_BTN_ID: &str = "cm-confirm-btn";

/// Rebind the page's single confirmation modal to `request` and show it.
/// Each call overwrites whatever the modal was bound to before; the
/// confirm button itself is wired once at boot and reads the current
/// binding from shared state.
pub fn rebind(state: &SharedState, document: &Document, request: BookingRequest) {
    let Some(modal) = dom::by_id(document, MODAL_ID) else {
        return;
    };

    set_field(
        document,
        "cm-slot-time",
        &format!("Slot: <strong>{} - {}</strong>", request.start_time, request.end_time),
    );
    set_field(
        document,
        "cm-ground",
        &format!("Ground: <strong>{}</strong>", ground_name(document, &modal)),
    );
    set_field(document, "cm-price", &format!("Price: <strong>\u{20b9}{}</strong>", request.price));

    if let Some(button) = confirm_button(document) {
        button.set_disabled(false);
        button.set_text_content(Some("Confirm Booking"));
    }

    state.borrow_mut().modal_binding = Some(request);
    show(&modal);
}

/// Wire the confirm control and the dismiss controls once per page load.
pub fn wire(state: &SharedState, document: &Document) {
    let Some(modal) = dom::by_id(document, MODAL_ID) else {
        return;
    };

    if let Some(button) = confirm_button(document) {
        let state = state.clone();
        let button_clone = button.clone();
        let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let binding = state.borrow().modal_binding.clone();
            if let Some(request) = binding {
                booking::submit(&state, &request.slot_id, &button_clone);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        handler.forget();
    }

    for control in dom::select_all(document, "#confirmModalGlobal [data-dismiss=\"modal\"]") {
        let modal = modal.clone();
        let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            hide(&modal);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = control.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        handler.forget();
    }
}

/// Ground name shown in the modal: the modal's own `data-ground-name`
/// attribute when the template set one, the page title otherwise.
fn ground_name(document: &Document, modal: &Element) -> String {
    modal
        .get_attribute("data-ground-name")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| document.title())
}

fn confirm_button(document: &Document) -> Option<HtmlButtonElement> {
    dom::by_id(document, CONFIRM_BTN_ID).and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
}

fn set_field(document: &Document, id: &str, html: &str) {
    if let Some(el) = dom::by_id(document, id) {
        el.set_inner_html(html);
    }
}

fn show(modal: &Element) {
    let _ = modal.class_list().add_1("show");
    if let Some(html) = modal.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", "block");
    }
}

fn hide(modal: &Element) {
    let _ = modal.class_list().remove_1("show");
    if let Some(html) = modal.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", "none");
    }
}
