use scratchwin_protocol::FORM_CONTENT_TYPE;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Posts a url-encoded form and returns the reply body, whatever the HTTP status.
pub(crate) async fn post_form(endpoint: &str, body: &str) -> Result<String, JsValue> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(endpoint, &init)?;
    request.headers().set("Content-Type", FORM_CONTENT_TYPE)?;

    let response: Response = JsFuture::from(gloo::utils::window().fetch_with_request(&request))
        .await?
        .dyn_into()?;
    log::debug!("endpoint answered with status {}", response.status());

    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("reply body is not text"))
}
