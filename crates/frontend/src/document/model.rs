//! Upload flow - API functions

use crate::shared::api_utils::api_url;
use contracts::api::UploadResponse;
use contracts::document::UPLOAD_FIELD;

/// Upload a PDF as multipart form data and parse the summary response.
///
/// The backend answers JSON on every path, including 4xx/5xx, so the body
/// is parsed regardless of HTTP status; the status only matters when the
/// body is not valid JSON.
pub async fn upload_document(file: web_sys::File) -> Result<UploadResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob(UPLOAD_FIELD, &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/upload");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

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

    match serde_json::from_str::<UploadResponse>(&text) {
        Ok(data) => Ok(data),
        Err(_) if status >= 400 => Err(format!("HTTP {}", status)),
        Err(e) => Err(format!("{e}")),
    }
}
