use std::sync::Arc;

use crate::config::Config;
use crate::data_backend::{menu_cache::MenuCache, menu_fetcher::MenuFetcher};
use crate::errors::FetchError;

/// Shared by all handlers. Holds no per-request data.
pub struct AppState {
    pub config: Config,
    pub fetcher: MenuFetcher,
    pub page_cache: MenuCache,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, FetchError> {
        let fetcher = MenuFetcher::new(config.api_url.clone(), config.upstream_timeout)?;
        if fetcher.api_url().is_none() {
            log::warn!("No upstream API URL configured, every request will report it");
        }

        let page_cache = MenuCache::new(config.revalidate);

        Ok(Arc::new(Self {
            config,
            fetcher,
            page_cache,
        }))
    }
}
