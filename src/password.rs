use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

/// Strength score 0-4: one point each for length >= 6, a digit, an
/// uppercase letter, and a symbol.
pub fn score(value: &str) -> u8 {
    let mut score = 0;
    if value.chars().count() >= 6 {
        score += 1;
    }
    if value.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if value.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if value.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

pub fn percent(score: u8) -> f64 {
    (f64::from(score) / 4.0 * 100.0).min(100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Weak,
    Fair,
    Strong,
}

impl Tier {
    pub fn for_percent(percent: f64) -> Self {
        if percent < 40.0 {
            Self::Weak
        } else if percent < 75.0 {
            Self::Fair
        } else {
            Self::Strong
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            Self::Weak => "linear-gradient(90deg,#ff6b6b,#ff8a8a)",
            Self::Fair => "linear-gradient(90deg,#ffd166,#ffc857)",
            Self::Strong => "linear-gradient(90deg,#8ee4af,#2ecc71)",
        }
    }
}

/// Live strength meter under the signup password field.
pub fn wire_strength_meter(document: &Document) {
    let Some(input) = dom::by_id(document, "id_password").and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(meter) = dom::by_id(document, "pw-strength-level").and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let input_clone = input.clone();
    let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let pct = percent(score(&input_clone.value()));
        let style = meter.style();
        let _ = style.set_property("width", &format!("{pct}%"));
        let _ = style.set_property("background", Tier::for_percent(pct).gradient());
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = input.add_event_listener_with_callback("input", handler.as_ref().unchecked_ref());
    handler.forget();
}

/// Show/Hide buttons next to password inputs.
pub fn wire_visibility_toggles(document: &Document) {
    for button in dom::select_all(document, "[data-toggle=\"pw-toggle\"]") {
        let button_clone = button.clone();
        let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let Some(selector) = button_clone.get_attribute("data-target") else {
                return;
            };
            let Some(input) = dom::document()
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if input.type_() == "password" {
                input.set_type("text");
                button_clone.set_text_content(Some("Hide"));
            } else {
                input.set_type("password");
                button_clone.set_text_content(Some("Show"));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        handler.forget();
    }
}
