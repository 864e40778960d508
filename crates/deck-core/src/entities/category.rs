use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::SyncState;
use crate::enums::CategoryStatus;

/// Color given to a new category when none is chosen.
pub const DEFAULT_CATEGORY_COLOR: &str = "#C6FF00";

/// Colors offered when creating a category.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#C6FF00", "#FF3B30", "#FF9500", "#34C759", "#00B4D8", "#8E44AD", "#E94B3C", "#1ABC9C",
    "#F39C12", "#34495E",
];

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

/// A user-defined label ("task type") with a display color.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    #[serde(rename = "user_id")]
    pub owner_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub status: CategoryStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "SyncState::is_confirmed")]
    pub sync: SyncState,
}

impl Category {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == CategoryStatus::Active
    }
}

/// Form input for creating or editing a category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
}

impl Default for NewCategory {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            color: default_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_color_uses_brand_default() {
        let category: Category = serde_json::from_str(
            r#"{"id":"c1","user_id":"u1","name":"Work","status":"Inactive","created_at":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
        assert!(!category.is_active());
    }

    #[test]
    fn palette_starts_with_default() {
        assert_eq!(DEFAULT_PALETTE[0], DEFAULT_CATEGORY_COLOR);
    }
}
