//! `reqwest`-backed transport and file source for the analyze pipeline.

use std::path::{Path, PathBuf};

use cnnviz_core::{analyze_source, AnalyzeResult, ApiResponse, AudioSource, HttpReply, InferenceTransport};

/// Posts JSON over a shared `reqwest::Client`.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl InferenceTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, Option<String>> {
        let resp = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                log::warn!("POST {url} failed: {e}");
                Some(e.to_string())
            })?;

        let status = resp.status().as_u16();
        log::debug!("{url} answered HTTP {status}");
        if !resp.status().is_success() {
            return Ok(HttpReply { status, body: String::new() });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Some(format!("Failed to read response body: {e}")))?;
        Ok(HttpReply { status, body })
    }
}

/// Audio read from a path on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AudioSource for FileSource {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| format!("{}: {e}", self.path.display()))?;
        log::debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        Ok(bytes)
    }
}

/// Read `path` and classify it with one request to `endpoint`.
pub async fn classify_file(
    client: &reqwest::Client,
    endpoint: &str,
    path: &Path,
) -> AnalyzeResult<ApiResponse> {
    let transport = HttpTransport::new(client.clone());
    analyze_source(&FileSource::new(path), &transport, endpoint).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnnviz_core::AnalyzeError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response; yields the raw request.
    async fn one_shot_server(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = sock.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length").then(|| v.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    if raw.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }
            let reply = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(reply.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });
        (url, handle)
    }

    fn temp_wav(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cnnviz-{}-{name}", std::process::id()));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[tokio::test]
    async fn test_classify_success() {
        let (url, server) = one_shot_server(
            "HTTP/1.1 200 OK",
            r#"{"predictions":[{"class":"dog","confidence":0.9}]}"#,
        )
        .await;
        let path = temp_wav("ok.wav", b"RIFF");

        let resp = classify_file(&reqwest::Client::new(), &url, &path).await.unwrap();
        assert_eq!(resp.predictions[0].class, "dog");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST / HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"audio_data":"UklGRg=="}"#));
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_classify_server_error() {
        let (url, server) = one_shot_server("HTTP/1.1 500 Internal Server Error", "boom").await;
        let path = temp_wav("err.wav", b"RIFF");

        let err = classify_file(&reqwest::Client::new(), &url, &path).await.unwrap_err();
        assert_eq!(err, AnalyzeError::Status(500));
        server.await.unwrap();
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_read_failure() {
        let path = std::env::temp_dir().join("cnnviz-does-not-exist.wav");
        let err = classify_file(&reqwest::Client::new(), "http://127.0.0.1:9/", &path)
            .await
            .unwrap_err();
        assert_eq!(err, AnalyzeError::ReadFailed);
        assert_eq!(err.to_string(), "FAILED TO READ FILE");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        // bind then drop to get a port nothing listens on
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        let path = temp_wav("unreachable.wav", b"RIFF");
        let err = classify_file(&reqwest::Client::new(), &format!("http://127.0.0.1:{port}/"), &path)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::Transport(Some(_))), "got {err:?}");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_file_source_name() {
        assert_eq!(FileSource::new("/tmp/sounds/dog_bark.wav").name(), "dog_bark.wav");
    }
}
