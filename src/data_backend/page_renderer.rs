use reqwest::Url;

use crate::constants::{
    IMAGE_SEARCH_URL, PAGE_ERROR_PREFIX, PAGE_TITLE, TODAY_BADGE, TOTAL_CALORIES_LABEL,
};
use crate::data_backend::{escape_html, turkish_date_fmt};
use crate::data_types::{menu_data_types::FoodItem, DayCard, Theme};

const STYLE: &str = r#"
:root { --bg: #ffffff; --fg: #0f172a; --muted: #64748b; --card: #f8fafc; --primary: #2563eb; }
html.dark { --bg: #0f172a; --fg: #f1f5f9; --muted: #94a3b8; --card: #1e293b; --primary: #60a5fa; }
@media (prefers-color-scheme: dark) {
  html:not(.light) { --bg: #0f172a; --fg: #f1f5f9; --muted: #94a3b8; --card: #1e293b; --primary: #60a5fa; }
}
body { background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; margin: 0; }
.container { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
.page-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem; }
.theme-switcher a { color: var(--muted); margin-left: .5rem; }
.theme-switcher a.active { color: var(--primary); font-weight: 600; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr)); }
.card { background: var(--card); border-radius: .75rem; padding: 1rem; }
.card.today { box-shadow: 0 0 0 2px var(--primary); }
.card-header { display: flex; justify-content: space-between; align-items: center; }
.card-title { font-size: .9rem; margin: 0; }
.badge { border: 1px solid var(--muted); border-radius: 999px; padding: 0 .5rem; font-size: .8rem; }
.food-list { list-style: none; padding: 0; }
.food-item { display: flex; justify-content: space-between; align-items: flex-start; padding: .5rem 0; }
.food-name { margin: 0; font-weight: 500; }
.food-type { margin: 0; color: var(--muted); font-size: .85rem; }
.image-search { color: var(--muted); text-decoration: none; margin-left: .5rem; }
.card-footer { display: flex; justify-content: space-between; border-top: 1px solid var(--muted); padding-top: 1rem; font-weight: 500; }
"#;

/// Full page with one card per day.
pub fn render_menu_page(cards: &[DayCard], theme: Theme) -> String {
    let mut body = String::from("<main class=\"grid\">\n");
    for card in cards {
        body += &render_card(card);
    }
    body += "</main>\n";

    page_shell(theme, &body)
}

/// Full page with the error panel instead of the card grid.
pub fn render_error_page(message: &str, theme: Theme) -> String {
    let body = format!(
        "<div class=\"error-panel\" role=\"alert\">{} {}</div>\n",
        PAGE_ERROR_PREFIX,
        escape_html(message)
    );

    page_shell(theme, &body)
}

fn page_shell(theme: Theme, body: &str) -> String {
    let root_class = match theme {
        Theme::System => String::new(),
        other => format!(" class=\"{}\"", other.as_str()),
    };

    let mut page = String::new();
    page += "<!DOCTYPE html>\n";
    page += &format!("<html lang=\"tr\"{}>\n", root_class);
    page += &format!(
        "<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{}</title>\n<style>{}</style>\n</head>\n",
        PAGE_TITLE, STYLE
    );
    page += "<body>\n<div class=\"container\">\n";
    page += &format!(
        "<div class=\"page-header\">\n<h1>{}</h1>\n{}</div>\n",
        PAGE_TITLE,
        theme_switcher(theme)
    );
    page += body;
    page += "</div>\n</body>\n</html>\n";

    page
}

fn theme_switcher(current: Theme) -> String {
    let mut nav = String::from("<nav class=\"theme-switcher\">");
    for theme in [Theme::Light, Theme::Dark, Theme::System] {
        let active = if theme == current { " class=\"active\"" } else { "" };
        nav += &format!(
            "<a href=\"?theme={0}\"{1}>{0}</a>",
            theme.as_str(),
            active
        );
    }
    nav += "</nav>\n";
    nav
}

fn render_card(card: &DayCard) -> String {
    let date_label = match card.date {
        Some(date) => turkish_date_fmt(date),
        None => escape_html(&card.menu.date),
    };

    let mut html = format!(
        "<article class=\"card{}\" data-menu-id=\"{}\">\n",
        if card.is_today { " today" } else { "" },
        card.menu.id
    );

    html += "<header class=\"card-header\">\n";
    html += &format!("<h2 class=\"card-title\">{}</h2>\n", date_label);
    html += "<div class=\"badges\">";
    if card.is_today {
        html += &format!("<span class=\"badge badge-today\">{}</span>", TODAY_BADGE);
    }
    if let Some(menu_time) = card.menu.food_menu_time.as_ref() {
        html += &format!(
            "<span class=\"badge badge-time\">{}</span>",
            escape_html(&menu_time.name)
        );
    }
    html += "</div>\n</header>\n";

    html += "<ul class=\"food-list\">\n";
    for item in &card.sorted_items {
        html += &render_item(item);
    }
    html += "</ul>\n";

    html += &format!(
        "<footer class=\"card-footer\"><span>{}</span><span class=\"total-calories\">{} kcal</span></footer>\n",
        TOTAL_CALORIES_LABEL, card.total_calories
    );
    html += "</article>\n";

    html
}

fn render_item(item: &FoodItem) -> String {
    let food = escape_html(&item.food);

    format!(
        "<li class=\"food-item\" data-item-id=\"{id}\">\
<div><p class=\"food-name\">{food}</p><p class=\"food-type\">{category}</p></div>\
<a class=\"image-search\" href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"{food} için görselleri ara\">?</a>\
<span class=\"badge badge-calory\">{calory} kcal</span></li>\n",
        id = item.id,
        food = food,
        category = escape_html(item.category_name()),
        href = escape_html(&image_search_url(&item.food)),
        calory = item.calory,
    )
}

fn image_search_url(food: &str) -> String {
    Url::parse_with_params(IMAGE_SEARCH_URL, &[("q", food), ("tbm", "isch")])
        .map(|url| url.to_string())
        .unwrap_or_else(|_| IMAGE_SEARCH_URL.to_string())
}
