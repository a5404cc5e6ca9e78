use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

use crate::data_backend::menu_fetcher::MenuFetcher;
use crate::data_types::{menu_data_types::FoodMenu, Strictness};
use crate::errors::FetchError;

struct CachedMenu {
    fetched_at: Instant,
    menus: Arc<Vec<FoodMenu>>,
}

/// Keeps the last successful page fetch for `max_age`. Failures are never stored.
pub struct MenuCache {
    max_age: Duration,
    entry: RwLock<Option<CachedMenu>>,
}

impl MenuCache {
    pub fn new(max_age: Duration) -> Self {
        Self {
            max_age,
            entry: RwLock::new(None),
        }
    }

    fn enabled(&self) -> bool {
        !self.max_age.is_zero()
    }

    pub async fn get_or_fetch(
        &self,
        fetcher: &MenuFetcher,
    ) -> Result<Arc<Vec<FoodMenu>>, FetchError> {
        if self.enabled() {
            if let Some(cached) = self.entry.read().await.as_ref() {
                if cached.fetched_at.elapsed() < self.max_age {
                    log::debug!("Menu cache hit, age {:.2?}", cached.fetched_at.elapsed());
                    return Ok(cached.menus.clone());
                }
            }
        }

        let menus = Arc::new(fetcher.fetch_menu(Strictness::Page).await?);

        if self.enabled() {
            *self.entry.write().await = Some(CachedMenu {
                fetched_at: Instant::now(),
                menus: menus.clone(),
            });
            log::debug!("Menu cache updated with {} days", menus.len());
        }

        Ok(menus)
    }
}
