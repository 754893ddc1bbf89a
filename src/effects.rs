use crate::dom;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const SHIMMER_BASE_MS: u32 = 220;
const SHIMMER_STEP_MS: u32 = 35;
const CARD_ENTER_STEP_MS: u32 = 40;
const RIPPLE_MS: u32 = 650;
const COUNT_UP_MS: f64 = 700.0;
const REVEAL_THRESHOLD: f64 = 0.08;

pub fn wire(document: &Document) {
    shimmer_cards(document);
    highlight_active_nav(document);
    reveal_on_scroll(document);
    stagger_slot_cards(document);
    wire_ripples(document);
    animate_metric_counts(document);
}

/// Quick shimmer load state for cards, dropped on a per-card stagger.
fn shimmer_cards(document: &Document) {
    let cards = dom::select_all(document, ".slot-card, .ground-card, .metric-card");
    for card in &cards {
        let _ = card.class_list().add_1("card-loading");
    }
    for (index, card) in cards.into_iter().enumerate() {
        Timeout::new(SHIMMER_BASE_MS + SHIMMER_STEP_MS * index as u32, move || {
            let _ = card.class_list().remove_1("card-loading");
        })
        .forget();
    }
}

/// Highlight the nav item whose href prefixes the current path. The root
/// link only matches the root path exactly.
fn highlight_active_nav(document: &Document) {
    let Ok(path) = dom::window().location().pathname() else {
        return;
    };
    for link in dom::select_all(document, ".site-navbar .nav-link") {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        let active = if href == "/" { path == "/" } else { path.starts_with(&href) };
        if active {
            let _ = link.class_list().add_1("active");
            let _ = link.style().set_property("background-color", "rgba(255,255,255,0.2)");
        }
    }
}

/// Reveal sections and cards as they enter the viewport, then stop
/// watching them.
fn reveal_on_scroll(document: &Document) {
    let targets = dom::select_all(document, ".page-shell, .panel-soft, .ground-card, .metric-card, .slot-wrap");
    if targets.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                let _ = target.class_list().add_1("reveal-visible");
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    let Ok(observer) = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for target in targets {
        let _ = target.class_list().add_1("reveal");
        observer.observe(&target);
    }
    // The observer must outlive this call to keep delivering entries.
    std::mem::forget(observer);
}

fn stagger_slot_cards(document: &Document) {
    for (index, card) in dom::select_all(document, ".slot-card").into_iter().enumerate() {
        Timeout::new(CARD_ENTER_STEP_MS * index as u32, move || {
            let _ = card.class_list().add_1("enter");
        })
        .forget();
    }
}

/// Ripple feedback on slot action buttons, centered on the click point.
fn wire_ripples(document: &Document) {
    for button in dom::select_all(document, ".slot-action") {
        let _ = button.style().set_property("position", "relative");
        let button_clone = button.clone();
        let handler = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let rect = button_clone.get_bounding_client_rect();
            let Ok(ripple) = dom::document().create_element("span") else {
                return;
            };
            ripple.set_class_name("ripple");
            let size = rect.width().max(rect.height());
            if let Some(span) = ripple.dyn_ref::<HtmlElement>() {
                let style = span.style();
                let _ = style.set_property("width", &format!("{size}px"));
                let _ = style.set_property("height", &format!("{size}px"));
                let _ = style.set_property(
                    "left",
                    &format!("{}px", f64::from(event.client_x()) - rect.left() - rect.width() / 2.0),
                );
                let _ = style.set_property(
                    "top",
                    &format!("{}px", f64::from(event.client_y()) - rect.top() - rect.height() / 2.0),
                );
            }
            let _ = button_clone.append_child(&ripple);
            Timeout::new(RIPPLE_MS, move || ripple.remove()).forget();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        let _ = button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        handler.forget();
    }
}

/// Count each `[data-count]` metric up from zero to its rendered value.
fn animate_metric_counts(document: &Document) {
    for el in dom::select_all(document, "[data-count]") {
        let target = digits_in(&el.text_content().unwrap_or_default());
        animate_count(el, target);
    }
}

fn animate_count(el: HtmlElement, target: u64) {
    el.set_text_content(Some("0"));
    let started: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_clone = frame.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if started.get().is_none() {
            started.set(Some(timestamp));
        }
        let elapsed = timestamp - started.get().unwrap_or(timestamp);
        let progress = (elapsed / COUNT_UP_MS).min(1.0);
        if progress < 1.0 {
            let value = (progress * target as f64).floor() as u64;
            el.set_text_content(Some(&group_thousands(value)));
            if let Some(callback) = frame_clone.borrow().as_ref() {
                let _ = dom::window().request_animation_frame(callback.as_ref().unchecked_ref());
            }
        } else {
            el.set_text_content(Some(&group_thousands(target)));
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame.borrow().as_ref() {
        let _ = dom::window().request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Integer value of all ASCII digits in a rendered metric, non-digits
/// stripped the way the templates format them (currency signs, commas).
pub fn digits_in(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Thousands grouping for the count-up display.
pub fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (index, digit) in raw.chars().enumerate() {
        if index > 0 && (raw.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_strip_formatting() {
        assert_eq!(digits_in("1,250"), 1250);
        assert_eq!(digits_in("\u{20b9}900"), 900);
        assert_eq!(digits_in("no numbers"), 0);
        assert_eq!(digits_in(""), 0);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
