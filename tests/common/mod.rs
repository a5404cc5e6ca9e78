#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use menu_cards::config::Config;
use menu_cards::data_backend::menu_fetcher::MenuFetcher;
use menu_cards::state::AppState;

pub const MENU_PATH: &str = "/menu";

/// Two day-menus in upstream order, the first one out of category order.
pub const SAMPLE_MENU_JSON: &str = r#"[
  {
    "Id": 1,
    "Date": "2024-03-10",
    "FoodMenuCategory": { "Id": 1, "Name": "Personel" },
    "FoodMenuTime": { "Id": 2, "Name": "Lunch" },
    "FoodLists": [
      { "Id": 1, "Food": "Soup", "Calory": 150, "FoodListType": { "Id": 2, "Name": "Starter" } },
      { "Id": 2, "Food": "Rice", "Calory": 300, "FoodListType": { "Id": 1, "Name": "Main" } }
    ]
  },
  {
    "Id": 2,
    "Date": "2024-03-11",
    "FoodMenuCategory": { "Id": 1, "Name": "Personel" },
    "FoodMenuTime": { "Id": 2, "Name": "Lunch" },
    "FoodLists": []
  }
]"#;

pub fn fetcher_for(server: &mockito::ServerGuard) -> MenuFetcher {
    MenuFetcher::new(Some(format!("{}{}", server.url(), MENU_PATH)), None).unwrap()
}

pub fn config_for(server: &mockito::ServerGuard, revalidate: Duration) -> Config {
    Config {
        api_url: Some(format!("{}{}", server.url(), MENU_PATH)),
        revalidate,
        ..Config::default()
    }
}

pub fn state_for(server: &mockito::ServerGuard, revalidate: Duration) -> Arc<AppState> {
    AppState::new(config_for(server, revalidate)).unwrap()
}
