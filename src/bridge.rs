//! Browser glue: `File` reading and `fetch` for the analyze pipeline.

use cnnviz_core::{AudioSource, HttpReply, InferenceTransport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, Headers, Request, RequestInit, Response};

/// Best description a thrown JS value offers, if any.
pub fn js_error_message(e: JsValue) -> Option<String> {
    if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        return Some(String::from(err.message()));
    }
    e.as_string()
}

/// A file handed over by the `<input type="file">` picker.
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }
}

impl AudioSource for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        read_file_bytes(&self.0).await
    }
}

async fn read_file_bytes(file: &File) -> Result<Vec<u8>, String> {
    let reader = FileReader::new().map_err(|e| format!("FileReader: {e:?}"))?;
    let reader_clone = reader.clone();

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once(move |_: web_sys::Event| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once(move |_: web_sys::Event| {
            let _ = reject.call0(&JsValue::NULL);
        });

        reader_clone.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader_clone.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        onload.forget();
        onerror.forget();
    });

    reader
        .read_as_array_buffer(file)
        .map_err(|e| format!("read_as_array_buffer: {e:?}"))?;

    JsFuture::from(promise)
        .await
        .map_err(|_| match reader.error() {
            Some(err) => format!("FileReader: {}", err.message()),
            None => "FileReader failed".to_string(),
        })?;

    let result = reader.result().map_err(|e| format!("result: {e:?}"))?;
    let array_buffer = result
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| "Expected ArrayBuffer".to_string())?;
    Ok(js_sys::Uint8Array::new(&array_buffer).to_vec())
}

/// `window.fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl InferenceTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, Option<String>> {
        let window = web_sys::window().ok_or_else(|| Some("No window".to_string()))?;

        let headers = Headers::new().map_err(js_error_message)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error_message)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error_message)?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error_message)?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| Some("Response cast failed".to_string()))?;

        let status = resp.status();
        if !resp.ok() {
            return Ok(HttpReply { status, body: String::new() });
        }

        let text = JsFuture::from(resp.text().map_err(js_error_message)?)
            .await
            .map_err(js_error_message)?;
        let body = text
            .as_string()
            .ok_or_else(|| Some("Response body is not text".to_string()))?;
        Ok(HttpReply { status, body })
    }
}
