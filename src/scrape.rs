/// Scrape orchestration: one POST to the backend and interpretation of its reply
use crate::comment_data::{ScrapeResponse, ScrapeResult};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::shortcode::Shortcode;
use gloo::net::http::Request;
use serde::Serialize;

const UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeRequest<'a> {
    pub shortcode: &'a str,
}

/// Raw HTTP reply, before any decoding
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl BackendReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the scrape request. `Err` means the request never completed
/// (network down, CORS rejection, ...) and carries a description.
#[allow(async_fn_in_trait)]
pub trait ScrapeTransport {
    async fn post_json(&self, url: &str, body: &ScrapeRequest<'_>) -> Result<BackendReply, String>;
}

/// Transport over the browser `fetch` API
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl ScrapeTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: &ScrapeRequest<'_>) -> Result<BackendReply, String> {
        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| e.to_string())?;

        let response = request.send().await.map_err(|e| e.to_string())?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(BackendReply {
            status,
            status_text,
            body,
        })
    }
}

/// Scrape comments for `shortcode` from the configured backend
pub async fn scrape_comments<T: ScrapeTransport>(
    transport: &T,
    config: &AppConfig,
    shortcode: &Shortcode,
) -> Result<ScrapeResult, AppError> {
    let endpoint = config.scrape_endpoint();
    let request = ScrapeRequest {
        shortcode: shortcode.as_str(),
    };

    log::info!("Requesting comments for {} from {}", shortcode, endpoint);

    let reply = transport
        .post_json(&endpoint, &request)
        .await
        .map_err(|detail| {
            log::error!("Scrape request failed: {}", detail);
            AppError::TransportFailure {
                endpoint: endpoint.clone(),
                detail,
            }
        })?;

    let result = interpret_reply(&reply);
    match &result {
        Ok(scraped) => log::info!("Received {} comments for {}", scraped.comments.len(), shortcode),
        Err(e) => log::warn!("Backend replied {} {}: {}", reply.status, reply.status_text, e),
    }
    result
}

/// Decode a backend reply.
///
/// A 401 is always reported as a login problem, whatever the body says.
/// Any other reply must carry JSON; failed statuses surface the body's
/// `error` field when there is one.
pub fn interpret_reply(reply: &BackendReply) -> Result<ScrapeResult, AppError> {
    if reply.status == UNAUTHORIZED {
        return Err(AppError::AuthRequired);
    }

    let json: serde_json::Value =
        serde_json::from_str(&reply.body).map_err(|_| AppError::MalformedResponse)?;

    if !reply.is_success() {
        let message = json
            .get("error")
            .and_then(|v| v.as_str())
            .filter(|msg| !msg.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Server error: {} {}", reply.status, reply.status_text));
        return Err(AppError::ServerError(message));
    }

    serde_json::from_value::<ScrapeResponse>(json)
        .map(ScrapeResponse::into_result)
        .map_err(|_| AppError::MalformedResponse)
}
