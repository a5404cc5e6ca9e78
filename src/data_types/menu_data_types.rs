use serde::{Deserialize, Serialize};

// Upstream keys are PascalCase. Everything except `Date` is optional on the wire,
// missing values fall back to empty / zero / absent.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FoodListType {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FoodItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub food: String,
    #[serde(default)]
    pub calory: i64,
    #[serde(default)]
    pub food_list_type: Option<FoodListType>,
}

impl FoodItem {
    /// Category id used for ordering, `None` when the upstream record has no usable one.
    pub fn category_id(&self) -> Option<i64> {
        self.food_list_type.as_ref().and_then(|t| t.id)
    }

    pub fn category_name(&self) -> &str {
        self.food_list_type
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FoodMenuCategory {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FoodMenuTime {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// One day-menu as delivered by the upstream API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FoodMenu {
    #[serde(default)]
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub food_menu_category: Option<FoodMenuCategory>,
    #[serde(default)]
    pub food_menu_time: Option<FoodMenuTime>,
    #[serde(default)]
    pub food_lists: Vec<FoodItem>,
}
