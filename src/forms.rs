//! Form Readers
//!
//! Turn a submitted `<form>` into the payloads the bridge sends.

use form_bridge::{user_data_from_entries, BridgeError, BridgeResult, MultipartPayload, UserData};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, HtmlFormElement};

fn js_error(context: &str, err: JsValue) -> BridgeError {
    BridgeError::Form(format!("{}: {:?}", context, err))
}

fn form_data(form: &HtmlFormElement) -> BridgeResult<FormData> {
    FormData::new_with_form(form).map_err(|e| js_error("FormData", e))
}

/// (name, value) pairs, in insertion order
fn entries(data: &FormData) -> BridgeResult<Vec<(String, JsValue)>> {
    let iter = js_sys::try_iter(data)
        .map_err(|e| js_error("FormData iterator", e))?
        .ok_or_else(|| BridgeError::Form("FormData is not iterable".to_string()))?;

    let mut out = Vec::new();
    for entry in iter {
        let pair: Array = entry.map_err(|e| js_error("FormData entry", e))?.unchecked_into();
        let name = pair.get(0).as_string().unwrap_or_default();
        out.push((name, pair.get(1)));
    }
    Ok(out)
}

fn user_data_of(data: &FormData) -> BridgeResult<UserData> {
    let fields = entries(data)?
        .into_iter()
        .filter_map(|(name, value)| value.as_string().map(|v| (name, v)));
    Ok(user_data_from_entries(fields))
}

async fn multipart_of(data: &FormData) -> BridgeResult<MultipartPayload> {
    let mut payload = MultipartPayload::new();
    for (name, value) in entries(data)? {
        if let Some(text) = value.as_string() {
            payload = payload.text(name, text);
            continue;
        }
        let file: File = value
            .dyn_into()
            .map_err(|v| js_error("unexpected form value", v))?;
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| js_error("reading file", e))?;
        let bytes = Uint8Array::new(&buffer).to_vec();
        payload = payload.file(name, file.name(), file.type_(), bytes);
    }
    Ok(payload)
}

/// Text fields only, as the user form holds no files
pub fn read_user_data(form: &HtmlFormElement) -> BridgeResult<UserData> {
    user_data_of(&form_data(form)?)
}

/// Every entry, reading file contents into memory
pub async fn read_multipart(form: &HtmlFormElement) -> BridgeResult<MultipartPayload> {
    multipart_of(&form_data(form)?).await
}
