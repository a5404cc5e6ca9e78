use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::PROXY_ERROR_MSG;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API URL is not defined")]
    Config,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("API did not return JSON")]
    InvalidContentType,
    #[error("Invalid JSON response from API")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Unexpected menu data: {0}")]
    UnexpectedShape(#[source] serde_json::Error),
}

impl FetchError {
    /// The single message shown to users. No variant distinction survives past this point.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Failure of the `/api/menu` proxy. The cause is logged, clients only get the generic body.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ProxyError(#[from] pub FetchError);

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        log::error!("Error fetching menu data: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": PROXY_ERROR_MSG })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_match_page_wording() {
        assert_eq!(FetchError::Config.user_message(), "API URL is not defined");
        assert_eq!(
            FetchError::HttpStatus(503).user_message(),
            "HTTP error! status: 503"
        );
        assert_eq!(
            FetchError::InvalidContentType.user_message(),
            "API did not return JSON"
        );

        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert_eq!(
            FetchError::InvalidJson(parse_err).user_message(),
            "Invalid JSON response from API"
        );
    }

    #[test]
    fn proxy_error_hides_cause() {
        let resp = ProxyError(FetchError::HttpStatus(503)).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
