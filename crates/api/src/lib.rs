//! Palette service client.
//!
//! The board needs one list of colors at startup. This crate defines the
//! [`PaletteSource`] seam the UI depends on and an HTTP implementation,
//! [`PaletteClient`], that talks to a random-color service.
//!
//! The service is expected to answer with a JSON object holding a `colors`
//! array of strings:
//!
//! ```text
//! { "colors": ["#E74C3C", "#1ABC9C", "#3498DB"] }
//! ```
//!
//! Any other shape is reported as [`PaletteFetchError::Malformed`]. The client
//! never retries and sets no timeout; callers decide what a failure means.
//!
//! # Example
//!
//! ```ignore
//! use swatch_api::{PaletteClient, PaletteSource};
//!
//! let client = PaletteClient::new("https://random-flat-colors.vercel.app/api/random?count=5")?;
//! let colors = client.fetch_palette().await?;
//! println!("{} colors", colors.len());
//! ```

use std::env;

use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::Value;
use swatch_types::Color;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Default endpoint for the random color service.
pub const DEFAULT_PALETTE_URL: &str = "https://random-flat-colors.vercel.app/api/random";

/// Field of the response object that carries the color list.
const COLORS_FIELD: &str = "colors";

/// Hostnames allowed to use plain HTTP.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

#[derive(Debug, Error)]
pub enum PaletteFetchError {
    #[error("invalid palette URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("palette request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("palette service answered with status {0}")]
    Status(u16),
    #[error("malformed palette response: {0}")]
    Malformed(String),
}

/// Anything that can produce the session palette.
#[async_trait]
pub trait PaletteSource: Send + Sync {
    async fn fetch_palette(&self) -> Result<Vec<Color>, PaletteFetchError>;
}

/// HTTP palette source backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct PaletteClient {
    url: Url,
    http: Client,
    user_agent: String,
}

impl PaletteClient {
    /// Build a client for `url`.
    ///
    /// Non-localhost hosts must use HTTPS.
    pub fn new(url: &str) -> Result<Self, PaletteFetchError> {
        let url = validate_palette_url(url)?;
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        let http = Client::builder().default_headers(default_headers).build()?;
        Ok(Self {
            url,
            http,
            user_agent: format!("swatch/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl PaletteSource for PaletteClient {
    async fn fetch_palette(&self) -> Result<Vec<Color>, PaletteFetchError> {
        debug!(url = %self.url, "fetching palette");
        let response = self
            .http
            .get(self.url.clone())
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PaletteFetchError::Status(status.as_u16()));
        }

        let payload: Value = response.json().await.map_err(|error| {
            if error.is_decode() {
                PaletteFetchError::Malformed(format!("body is not JSON: {error}"))
            } else {
                PaletteFetchError::Http(error)
            }
        })?;
        let colors = parse_palette_response(&payload)?;
        debug!(count = colors.len(), "palette fetched");
        Ok(colors)
    }
}

/// Extract the color list from a decoded response body.
pub fn parse_palette_response(payload: &Value) -> Result<Vec<Color>, PaletteFetchError> {
    let object = payload
        .as_object()
        .ok_or_else(|| PaletteFetchError::Malformed("expected a JSON object".into()))?;
    let entries = object
        .get(COLORS_FIELD)
        .ok_or_else(|| PaletteFetchError::Malformed(format!("missing '{COLORS_FIELD}' field")))?
        .as_array()
        .ok_or_else(|| PaletteFetchError::Malformed(format!("'{COLORS_FIELD}' is not an array")))?;

    if entries.is_empty() {
        return Err(PaletteFetchError::Malformed(format!("'{COLORS_FIELD}' is empty")));
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .as_str()
                .map(Color::from)
                .ok_or_else(|| PaletteFetchError::Malformed(format!("'{COLORS_FIELD}[{index}]' is not a string")))
        })
        .collect()
}

/// Validate that a palette URL is acceptable.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
fn validate_palette_url(raw: &str) -> Result<Url, PaletteFetchError> {
    let invalid = |reason: String| PaletteFetchError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = Url::parse(raw).map_err(|error| invalid(error.to_string()))?;
    let host = parsed.host_str().ok_or_else(|| invalid("URL must include a host".into()))?;

    if LOCALHOST_DOMAINS.iter().any(|&allowed| host.eq_ignore_ascii_case(allowed)) {
        return Ok(parsed);
    }
    if parsed.scheme() != "https" {
        return Err(invalid(format!("non-localhost hosts must use https; got '{}://'", parsed.scheme())));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let address = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = socket.read(&mut chunk).await.expect("read");
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            socket.shutdown().await.ok();
        });
        format!("http://127.0.0.1:{}/api/random?count=3", address.port())
    }

    #[test]
    fn parses_color_list_in_order() {
        let colors = parse_palette_response(&json!({"colors": ["#E74C3C", "teal", "#3498DB"]})).unwrap();
        assert_eq!(colors, vec![Color::from("#E74C3C"), Color::from("teal"), Color::from("#3498DB")]);
    }

    #[test]
    fn rejects_unexpected_shapes() {
        let cases = [
            json!(["#FFFFFF"]),
            json!({"palette": ["#FFFFFF"]}),
            json!({"colors": "#FFFFFF"}),
            json!({"colors": []}),
            json!({"colors": ["#FFFFFF", 7]}),
        ];
        for payload in cases {
            let error = parse_palette_response(&payload).unwrap_err();
            assert!(matches!(error, PaletteFetchError::Malformed(_)), "{payload}: {error}");
        }
    }

    #[test]
    fn url_validation() {
        assert!(validate_palette_url(DEFAULT_PALETTE_URL).is_ok());
        assert!(validate_palette_url("http://localhost:8080/colors").is_ok());
        assert!(validate_palette_url("http://127.0.0.1/colors").is_ok());
        assert!(matches!(
            validate_palette_url("http://example.com/colors"),
            Err(PaletteFetchError::InvalidUrl { .. })
        ));
        assert!(matches!(validate_palette_url("not a url"), Err(PaletteFetchError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn fetches_palette_over_http() {
        let url = serve_once("200 OK", r##"{"colors":["#FF0000","#00FF00"]}"##).await;
        let client = PaletteClient::new(&url).unwrap();
        let colors = client.fetch_palette().await.unwrap();
        assert_eq!(colors, vec![Color::from("#FF0000"), Color::from("#00FF00")]);
    }

    #[tokio::test]
    async fn malformed_body_is_reported() {
        let url = serve_once("200 OK", r#"{"colors":null}"#).await;
        let client = PaletteClient::new(&url).unwrap();
        let error = client.fetch_palette().await.unwrap_err();
        assert!(matches!(error, PaletteFetchError::Malformed(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let url = serve_once("200 OK", "<html>busy</html>").await;
        let client = PaletteClient::new(&url).unwrap();
        let error = client.fetch_palette().await.unwrap_err();
        assert!(matches!(error, PaletteFetchError::Malformed(_)), "{error}");
    }

    #[tokio::test]
    async fn refused_connection_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let port = listener.local_addr().expect("addr").port();
        drop(listener);

        let client = PaletteClient::new(&format!("http://127.0.0.1:{port}/api/random")).unwrap();
        let error = client.fetch_palette().await.unwrap_err();
        assert!(matches!(error, PaletteFetchError::Http(_)), "{error}");
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let url = serve_once("503 Service Unavailable", "{}").await;
        let client = PaletteClient::new(&url).unwrap();
        let error = client.fetch_palette().await.unwrap_err();
        assert!(matches!(error, PaletteFetchError::Status(503)));
    }
}
