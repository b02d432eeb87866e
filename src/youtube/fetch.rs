use crate::config::ApiConfig;
use crate::youtube::error::LoadError;
use anyhow::Context;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use std::future::Future;
use std::time::Duration;

/// Source of raw playlist pages. One call is one request.
pub trait PageSource {
    fn fetch_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<serde_json::Value, LoadError>> + Send;
}

/// Fetches pages from the Data API `playlistItems` endpoint.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    page_size: Option<u32>,
}

impl HttpPageFetcher {
    const USER_AGENT: &'static str = concat!("tubelist/", env!("CARGO_PKG_VERSION"));

    pub fn new(cfg: &ApiConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(Self::USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            http,
            base_url: cfg.base_url.clone(),
            api_key: cfg.api_key.clone().filter(|k| !k.is_empty()),
            page_size: cfg.page_size.map(|n| n.clamp(1, 50)),
        })
    }

    pub fn page_url(&self, playlist_id: &str, page_token: Option<&str>) -> String {
        let mut url = format!(
            "{}?part=snippet&playlistId={}",
            self.base_url,
            urlencoding::encode(playlist_id)
        );
        if let Some(n) = self.page_size {
            url.push_str(&format!("&maxResults={n}"));
        }
        if let Some(key) = self.api_key.as_deref() {
            url.push_str(&format!("&key={}", urlencoding::encode(key)));
        }
        if let Some(token) = page_token {
            url.push_str(&format!("&pageToken={}", urlencoding::encode(token)));
        }
        url
    }
}

impl PageSource for HttpPageFetcher {
    async fn fetch_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<serde_json::Value, LoadError> {
        let url = self.page_url(playlist_id, page_token);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = response.text().await?;

        classify_response(status, content_type.as_deref(), &body)
    }
}

/// Validate one HTTP response and parse its body.
pub fn classify_response(
    status: StatusCode,
    content_type: Option<&str>,
    body: &str,
) -> Result<serde_json::Value, LoadError> {
    if !status.is_success() {
        return Err(LoadError::Transport {
            status: Some(status.as_u16()),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
        });
    }

    if body.trim().is_empty() {
        return Err(LoadError::EmptyResponse);
    }

    let is_json = content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"));
    if !is_json {
        return Err(LoadError::InvalidContentType(
            content_type.unwrap_or("<none>").to_string(),
        ));
    }

    let v: serde_json::Value = serde_json::from_str(body)?;
    if !v.is_object() {
        return Err(LoadError::MalformedResponse(
            "top-level value is not an object".to_string(),
        ));
    }
    Ok(v)
}
