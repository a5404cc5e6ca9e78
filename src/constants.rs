pub const PAGE_TITLE: &str = "Menü";
pub const TODAY_BADGE: &str = "Bugün";
pub const TOTAL_CALORIES_LABEL: &str = "Toplam Kalori:";
pub const PAGE_ERROR_PREFIX: &str = "Error loading menu data:";

/// Body returned by the proxy endpoint on any failure. The real cause is only logged.
pub const PROXY_ERROR_MSG: &str = "Failed to fetch menu data";

pub const IMAGE_SEARCH_URL: &str = "https://www.google.com/search";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REVALIDATE_SECS: u64 = 3600;

// how much of a non-JSON body ends up in the log
pub const BAD_BODY_LOG_CHARS: usize = 200;
