use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

pub fn window() -> web_sys::Window {
    web_sys::window().expect("window")
}

pub fn document() -> Document {
    window().document().expect("document")
}

/// Every element a selector matched, already downcast to `HtmlElement`.
/// Non-element nodes and failed casts are skipped silently.
pub fn select_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(_) => return Vec::new(),
    };
    collect_html(&list)
}

fn collect_html(list: &NodeList) -> Vec<HtmlElement> {
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            elements.push(element);
        }
    }
    elements
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn meta_content(document: &Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
