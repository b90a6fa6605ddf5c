//! Campground entity model and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use yelpcamp_core::types::{DbId, Timestamp};

/// A campground row from the `campgrounds` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campground {
    pub id: DbId,
    pub title: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new campground.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCampground {
    pub title: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// DTO for updating an existing campground.
///
/// Outer `None` keeps the stored value. `Some(None)` clears an optional
/// field, which is what a blank form input submits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCampground {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
}

/// A key that is present maps to `Some`, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_distinguishes_absent_from_cleared() {
        let input: UpdateCampground =
            serde_json::from_value(json!({ "title": "T", "location": null, "price": 5.0 }))
                .unwrap();
        assert_eq!(input.title.as_deref(), Some("T"));
        assert_eq!(input.location, Some(None));
        assert_eq!(input.price, Some(Some(5.0)));
        assert_eq!(input.description, None);
        assert_eq!(input.image, None);
    }
}
