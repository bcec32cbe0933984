//! Note Endpoints

use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::{check, transport, with_auth};
use crate::config::api_url;
use crate::models::{ApiError, ImageAttachment, MultipartPayload, PayloadValue};
use note_draft::NoteGateway;

pub const CREATE_NOTE_PATH: &str = "/notes/create";

fn js_error(err: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", err))
}

fn image_blob(image: &ImageAttachment) -> Result<Blob, JsValue> {
    let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&image.content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

/// Copy payload parts into a browser `FormData`, keeping their order
pub fn to_form_data(payload: &MultipartPayload) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for (name, value) in payload.parts() {
        match value {
            PayloadValue::Text(text) => form.append_with_str(name, text)?,
            PayloadValue::File(image) => {
                let blob = image_blob(image)?;
                form.append_with_blob_and_filename(name, &blob, &image.file_name)?;
            }
        }
    }
    Ok(form)
}

/// `POST /notes/create` as multipart/form-data. Any 2xx counts as success.
pub async fn create_note(payload: &MultipartPayload) -> Result<(), ApiError> {
    let form = to_form_data(payload).map_err(js_error)?;
    // No Content-Type header: the browser adds it with the multipart boundary
    let request = with_auth(Request::post(&api_url(CREATE_NOTE_PATH)))
        .body(form)
        .map_err(transport)?;
    let response = request.send().await.map_err(transport)?;
    check(response).await.map(|_| ())
}

/// Create-note gateway backed by the HTTP API
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpNoteGateway;

#[async_trait(?Send)]
impl NoteGateway for HttpNoteGateway {
    async fn create_note(&self, payload: MultipartPayload) -> Result<(), ApiError> {
        create_note(&payload).await
    }
}
