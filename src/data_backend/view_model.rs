use chrono::{Local, NaiveDate};

use crate::data_backend::parse_menu_date;
use crate::data_types::{
    menu_data_types::{FoodItem, FoodMenu},
    DayCard,
};

/// The date `is_today` is compared against: the server's local calendar day.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// One card per day-menu, in the order the upstream delivered them.
pub fn build_day_cards(menus: &[FoodMenu], today: NaiveDate) -> Vec<DayCard<'_>> {
    menus.iter().map(|menu| build_day_card(menu, today)).collect()
}

pub fn build_day_card(menu: &FoodMenu, today: NaiveDate) -> DayCard<'_> {
    let date = parse_menu_date(&menu.date);

    DayCard {
        menu,
        date,
        is_today: date == Some(today),
        sorted_items: sort_by_category(&menu.food_lists),
        total_calories: total_calories(&menu.food_lists),
    }
}

// saturates instead of overflowing on absurd upstream values
fn total_calories(items: &[FoodItem]) -> i64 {
    items
        .iter()
        .fold(0i64, |total, item| total.saturating_add(item.calory))
}

fn sort_by_category(items: &[FoodItem]) -> Vec<&FoodItem> {
    let mut sorted: Vec<&FoodItem> = items.iter().collect();
    // stable; items without a category id go last
    sorted.sort_by_key(|item| match item.category_id() {
        Some(id) => (false, id),
        None => (true, 0),
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::menu_data_types::FoodListType;

    fn item(id: i64, food: &str, calory: i64, type_id: Option<i64>) -> FoodItem {
        FoodItem {
            id,
            food: food.to_string(),
            calory,
            food_list_type: Some(FoodListType {
                id: type_id,
                name: format!("type {type_id:?}"),
            }),
        }
    }

    fn menu(date: &str, food_lists: Vec<FoodItem>) -> FoodMenu {
        FoodMenu {
            id: 1,
            date: date.to_string(),
            food_menu_category: None,
            food_menu_time: None,
            food_lists,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(card: &DayCard) -> Vec<String> {
        card.sorted_items.iter().map(|i| i.food.clone()).collect()
    }

    #[test]
    fn soup_and_rice_example() {
        let menu = menu(
            "2024-03-10",
            vec![item(1, "Soup", 150, Some(2)), item(2, "Rice", 300, Some(1))],
        );
        let card = build_day_card(&menu, day(2024, 3, 11));

        assert_eq!(names(&card), ["Rice", "Soup"]);
        assert_eq!(card.total_calories, 450);
        assert!(!card.is_today);
        // input untouched
        assert_eq!(menu.food_lists[0].food, "Soup");
    }

    #[test]
    fn empty_day_sums_to_zero() {
        let menu = menu("2024-03-10", vec![]);
        let card = build_day_card(&menu, day(2024, 3, 10));

        assert_eq!(card.total_calories, 0);
        assert!(card.sorted_items.is_empty());
    }

    #[test]
    fn negative_calories_are_summed_as_is() {
        let menu = menu(
            "2024-03-10",
            vec![item(1, "A", 200, Some(1)), item(2, "B", -50, Some(1))],
        );
        assert_eq!(build_day_card(&menu, day(2024, 3, 10)).total_calories, 150);
    }

    #[test]
    fn calorie_total_saturates() {
        let high = menu(
            "2024-03-10",
            vec![item(1, "A", i64::MAX, Some(1)), item(2, "B", 1, Some(1))],
        );
        let low = menu(
            "2024-03-10",
            vec![item(1, "A", i64::MIN, Some(1)), item(2, "B", -1, Some(1))],
        );

        assert_eq!(build_day_card(&high, day(2024, 3, 10)).total_calories, i64::MAX);
        assert_eq!(build_day_card(&low, day(2024, 3, 10)).total_calories, i64::MIN);
    }

    #[test]
    fn sort_is_stable_for_equal_categories() {
        let menu = menu(
            "2024-03-10",
            vec![
                item(1, "Main A", 1, Some(3)),
                item(2, "Starter A", 1, Some(1)),
                item(3, "Main B", 1, Some(3)),
                item(4, "Starter B", 1, Some(1)),
                item(5, "Side", 1, Some(2)),
                item(6, "Main C", 1, Some(3)),
            ],
        );
        let card = build_day_card(&menu, day(2024, 3, 10));

        assert_eq!(
            names(&card),
            ["Starter A", "Starter B", "Side", "Main A", "Main B", "Main C"]
        );
        let ids: Vec<_> = card.sorted_items.iter().map(|i| i.category_id()).collect();
        assert!(ids.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn items_without_category_go_last_in_original_order() {
        let mut no_type = item(1, "Mystery", 10, None);
        no_type.food_list_type = None;
        let menu = menu(
            "2024-03-10",
            vec![
                no_type,
                item(2, "Dessert", 10, Some(9)),
                item(3, "Unknown id", 10, None),
                item(4, "Soup", 10, Some(-1)),
            ],
        );
        let card = build_day_card(&menu, day(2024, 3, 10));

        assert_eq!(names(&card), ["Soup", "Dessert", "Mystery", "Unknown id"]);
        assert_eq!(card.total_calories, 40);
    }

    #[test]
    fn today_flag_across_day_boundary() {
        let menu = menu("2024-03-10", vec![]);

        assert!(build_day_card(&menu, day(2024, 3, 10)).is_today);
        assert!(!build_day_card(&menu, day(2024, 3, 9)).is_today);
        assert!(!build_day_card(&menu, day(2024, 3, 11)).is_today);
    }

    #[test]
    fn today_flag_ignores_time_of_day() {
        let late = menu("2024-03-10T23:59:59", vec![]);
        let early = menu("2024-03-10T00:00:00+03:00", vec![]);

        assert!(build_day_card(&late, day(2024, 3, 10)).is_today);
        assert!(build_day_card(&early, day(2024, 3, 10)).is_today);
    }

    #[test]
    fn unreadable_date_is_never_today() {
        let menu = menu("someday", vec![]);
        let card = build_day_card(&menu, day(2024, 3, 10));

        assert_eq!(card.date, None);
        assert!(!card.is_today);
    }

    #[test]
    fn cards_keep_upstream_order() {
        let menus = vec![
            menu("2024-03-12", vec![]),
            menu("2024-03-10", vec![]),
            menu("2024-03-11", vec![]),
        ];
        let cards = build_day_cards(&menus, day(2024, 3, 11));

        let dates: Vec<_> = cards.iter().map(|c| c.menu.date.as_str()).collect();
        assert_eq!(dates, ["2024-03-12", "2024-03-10", "2024-03-11"]);
        let today: Vec<_> = cards.iter().map(|c| c.is_today).collect();
        assert_eq!(today, [false, false, true]);
    }
}
