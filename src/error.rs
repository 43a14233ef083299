/// Errors surfaced to the user through the status area
use thiserror::Error;

/// Every failure the client can report. The `Display` text is the message shown on the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid Instagram URL. Please use a URL like https://www.instagram.com/p/SHORTCODE/")]
    InvalidInput,

    #[error(
        "Failed to scrape comments. {detail}. Is the backend server running at {endpoint} and accessible? Check CORS configuration on the backend if domains differ."
    )]
    TransportFailure { endpoint: String, detail: String },

    #[error("Failed to scrape comments. Invalid JSON response from the server.")]
    MalformedResponse,

    #[error("Failed to scrape comments. {0}.")]
    ServerError(String),

    #[error(
        "Failed to scrape comments. Login is required to access comments of this post. Please ensure the backend is logged in."
    )]
    AuthRequired,

    #[error("A scrape is already in progress.")]
    ScrapeInFlight,

    #[error("No comment data available to download.")]
    EmptyExportSource,

    #[error("Failed to generate or download CSV: {0}")]
    ExportFailed(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_mentions_endpoint() {
        let err = AppError::TransportFailure {
            endpoint: "http://127.0.0.1:5001/scrape".to_string(),
            detail: "Failed to fetch".to_string(),
        };
        let msg = err.to_string();

        assert!(msg.starts_with("Failed to scrape comments. Failed to fetch."));
        assert!(msg.contains("http://127.0.0.1:5001/scrape"));
        assert!(msg.contains("CORS"));
    }

    #[test]
    fn test_server_error_message() {
        let err = AppError::ServerError("Missing 'shortcode'".to_string());
        assert_eq!(err.to_string(), "Failed to scrape comments. Missing 'shortcode'.");
    }
}
