use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestCredentials, RequestInit, Response};

/// Same-origin GET returning the decoded JSON body.
pub async fn fetch_json(url: &str) -> Result<JsValue, JsValue> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_credentials(RequestCredentials::SameOrigin);

    let response = JsFuture::from(dom::window().fetch_with_str_and_init(url, &init)).await?;
    let response: Response = response.dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("request failed: {}", response.status())));
    }
    JsFuture::from(response.json()?).await
}

/// CSRF-protected booking POST. The caller inspects the response itself,
/// since redirect/ok/error each drive a different UI path.
pub async fn post_booking(url: &str, csrf_token: &str) -> Result<Response, JsValue> {
    let headers = Headers::new()?;
    headers.set("X-CSRFToken", csrf_token)?;
    headers.set("Accept", "text/html")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_credentials(RequestCredentials::SameOrigin);
    init.set_headers(headers.as_ref());

    let response = JsFuture::from(dom::window().fetch_with_str_and_init(url, &init)).await?;
    Ok(response.dyn_into::<Response>()?)
}
