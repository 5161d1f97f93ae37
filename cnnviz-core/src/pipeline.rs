use crate::encode::request_body;
use crate::error::{AnalyzeError, AnalyzeResult};
use crate::types::ApiResponse;

/// Inference endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://harshit7271--audio-cnn-classifier-audioclassifier-inference.modal.run/";

/// Endpoint baked in at build time (`CNNVIZ_ENDPOINT`), else the default.
pub fn compiled_endpoint() -> &'static str {
    option_env!("CNNVIZ_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT)
}

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    /// Only populated for 2xx replies.
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can POST a JSON document and hand back the reply.
///
/// Implemented over `fetch` in the browser and over `reqwest` natively.
/// Futures are not required to be `Send`; the browser side runs on a
/// single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait InferenceTransport {
    /// Send `body` with `Content-Type: application/json`.
    ///
    /// `Err` means the exchange never completed, carrying the failure's
    /// description when it has one.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, Option<String>>;
}

/// Where the audio bytes come from: a browser `File`, a path on disk, ...
#[allow(async_fn_in_trait)]
pub trait AudioSource {
    fn name(&self) -> String;

    async fn read_bytes(&self) -> Result<Vec<u8>, String>;
}

/// Encode `bytes`, send them once, and decode the reply.
pub async fn analyze_bytes<T>(transport: &T, endpoint: &str, bytes: &[u8]) -> AnalyzeResult<ApiResponse>
where
    T: InferenceTransport,
{
    let body = request_body(bytes)?;
    log::info!("POST {} ({} bytes of audio)", endpoint, bytes.len());

    let reply = transport
        .post_json(endpoint, body)
        .await
        .map_err(AnalyzeError::transport)?;

    if !reply.is_success() {
        log::warn!("Inference endpoint returned HTTP {}", reply.status);
        return Err(AnalyzeError::Status(reply.status));
    }

    let response: ApiResponse = serde_json::from_str(&reply.body)?;
    log::info!(
        "Received {} predictions, {} layers",
        response.predictions.len(),
        response.visualization.len()
    );
    Ok(response)
}

/// Read the whole source, then run [`analyze_bytes`].
pub async fn analyze_source<S, T>(source: &S, transport: &T, endpoint: &str) -> AnalyzeResult<ApiResponse>
where
    S: AudioSource,
    T: InferenceTransport,
{
    let bytes = source.read_bytes().await.map_err(|e| {
        log::error!("Failed to read {}: {e}", source.name());
        AnalyzeError::ReadFailed
    })?;
    analyze_bytes(transport, endpoint, &bytes).await
}
