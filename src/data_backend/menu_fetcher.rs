use std::time::{Duration, Instant};

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client,
};
use serde_json::Value;

use crate::constants::BAD_BODY_LOG_CHARS;
use crate::data_types::{menu_data_types::FoodMenu, Strictness};
use crate::errors::FetchError;

/// Reads the weekly menu from the upstream API. One request per call, no retries.
#[derive(Clone, Debug)]
pub struct MenuFetcher {
    client: Client,
    api_url: Option<String>,
}

impl MenuFetcher {
    pub fn new(api_url: Option<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_url,
        })
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Fetches the upstream body and parses it as JSON without looking at its shape.
    pub async fn fetch_menu_json(&self, strictness: Strictness) -> Result<Value, FetchError> {
        // no URL, no request
        let url = self.api_url().ok_or(FetchError::Config)?;

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, strictness.accept_header());
        if strictness == Strictness::Page {
            request = request.header(CONTENT_TYPE, "application/json");
        }

        let now = Instant::now();
        let resp = request.send().await?;
        log::debug!("Upstream response ({:?}): {:.2?}", strictness, now.elapsed());

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        if strictness == Strictness::Page {
            let declares_json = resp
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|content_type| content_type.contains("application/json"));
            if !declares_json {
                return Err(FetchError::InvalidContentType);
            }
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Failed to parse response as JSON: {}",
                body.chars().take(BAD_BODY_LOG_CHARS).collect::<String>()
            );
            FetchError::InvalidJson(e)
        })
    }

    /// Fetches and decodes the list of day-menus, in upstream order.
    pub async fn fetch_menu(&self, strictness: Strictness) -> Result<Vec<FoodMenu>, FetchError> {
        let json = self.fetch_menu_json(strictness).await?;
        serde_json::from_value(json).map_err(FetchError::UnexpectedShape)
    }
}
