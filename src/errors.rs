use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human-readable message out of a thrown `JsValue`.
pub fn js_error_message(err: &JsValue, fallback: &str) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    fallback.to_string()
}
