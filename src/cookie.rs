use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument};

/// Value of the first cookie named `name` in a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    for pair in cookies.split(';') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next()?.trim();
        if key == name {
            return Some(parts.next().unwrap_or("").trim().to_string());
        }
    }
    None
}

pub fn csrf_token(document: &Document) -> Option<String> {
    let cookies = document
        .unchecked_ref::<HtmlDocument>()
        .cookie()
        .unwrap_or_default();
    cookie_value(&cookies, "csrftoken")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_many() {
        let cookies = "sessionid=abc123; csrftoken=tok-42; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("tok-42".into()));
    }

    #[test]
    fn tolerates_whitespace_and_missing_names() {
        assert_eq!(cookie_value("  csrftoken = spaced  ", "csrftoken"), Some("spaced".into()));
        assert_eq!(cookie_value("sessionid=abc", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn does_not_match_name_suffixes() {
        assert_eq!(cookie_value("xcsrftoken=nope", "csrftoken"), None);
    }

    #[test]
    fn empty_value_is_returned_as_empty() {
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), Some(String::new()));
    }
}
