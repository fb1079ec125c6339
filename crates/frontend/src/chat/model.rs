//! Question-answering flow - API functions

use crate::shared::api_utils::api_url;
use contracts::api::{AskRequest, AskResponse};

/// Ask a question about the uploaded document.
///
/// Like the upload endpoint, `/ask` answers JSON on error statuses too, so
/// the body is parsed before the HTTP status is consulted.
pub async fn ask_question(question: &str, filename: &str) -> Result<AskResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let dto = AskRequest {
        question: question.to_string(),
        filename: filename.to_string(),
    };
    let body_json = serde_json::to_string(&dto).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    let body = wasm_bindgen::JsValue::from_str(&body_json);
    opts.set_body(&body);

    let url = api_url("/ask");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    let status = resp.status();

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    match serde_json::from_str::<AskResponse>(&text) {
        Ok(data) => Ok(data),
        Err(_) if status >= 400 => Err(format!("HTTP {}", status)),
        Err(e) => Err(format!("{e}")),
    }
}
