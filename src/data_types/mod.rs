pub mod menu_data_types;

use chrono::NaiveDate;
use menu_data_types::{FoodItem, FoodMenu};

/// Which validation profile the fetcher applies to the upstream response.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strictness {
    /// HTML page path: requires a JSON content type.
    Page,
    /// `/api/menu` path: parses whatever body comes back.
    Proxy,
}

impl Strictness {
    pub fn accept_header(self) -> &'static str {
        match self {
            Strictness::Page => "application/json",
            Strictness::Proxy => "*/*",
        }
    }
}

/// Render-ready projection of one day-menu.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCard<'a> {
    pub menu: &'a FoodMenu,
    /// `None` when the upstream date string could not be read.
    pub date: Option<NaiveDate>,
    pub is_today: bool,
    pub sorted_items: Vec<&'a FoodItem>,
    pub total_calories: i64,
}

/// Colour scheme requested by the visitor. Only affects markup, never data.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(|p| p.trim().to_ascii_lowercase()).as_deref() {
            Some("light") => Theme::Light,
            Some("dark") => Theme::Dark,
            _ => Theme::System,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}
