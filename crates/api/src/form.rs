//! URL-encoded form bodies with bracketed nesting.
//!
//! HTML forms post `campground[title]=...`; these are decoded into
//! `{"campground": {"title": ...}}` before schema validation.

use axum::extract::{FromRequest, Request};
use axum::Form;
use serde_json::{Map, Value};
use yelpcamp_core::validation;
use yelpcamp_db::models::campground::{CreateCampground, UpdateCampground};

use crate::error::{AppError, AppResult};

/// Decode flat `key=value` pairs, nesting `outer[inner]` keys one level deep.
///
/// Later duplicates win. Keys with deeper or malformed brackets are kept
/// verbatim at the top level.
pub fn decode_nested(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut decoded = Map::new();
    for (key, value) in pairs {
        match split_key(&key) {
            Some((outer, inner)) => {
                let entry = decoded
                    .entry(outer.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !entry.is_object() {
                    *entry = Value::Object(Map::new());
                }
                if let Value::Object(nested) = entry {
                    nested.insert(inner.to_string(), Value::String(value));
                }
            }
            None => {
                decoded.insert(key, Value::String(value));
            }
        }
    }
    decoded
}

fn split_key(key: &str) -> Option<(&str, &str)> {
    let (outer, rest) = key.split_once('[')?;
    let inner = rest.strip_suffix(']')?;
    let well_formed = !outer.is_empty()
        && !inner.is_empty()
        && !inner.contains(['[', ']'])
        && !outer.contains(']');
    well_formed.then_some((outer, inner))
}

/// A campground form submission that passed schema validation.
///
/// Used as the last extractor of the create and update handlers so the
/// validator runs before the handler body and before any store call.
#[derive(Debug, Clone)]
pub struct ValidatedCampground(pub Map<String, Value>);

impl ValidatedCampground {
    pub fn into_create(self) -> AppResult<CreateCampground> {
        serde_json::from_value(Value::Object(self.0))
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }

    pub fn into_update(self) -> AppResult<UpdateCampground> {
        serde_json::from_value(Value::Object(self.0))
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

impl<S> FromRequest<S> for ValidatedCampground
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let payload = decode_nested(pairs);
        let campground = validation::validate_campground(&payload)?;
        Ok(Self(campground))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn bracketed_keys_are_nested() {
        let decoded = decode_nested(pairs(&[
            ("campground[title]", "Camp A"),
            ("campground[price]", "10"),
        ]));
        assert_eq!(
            Value::Object(decoded),
            json!({ "campground": { "title": "Camp A", "price": "10" } })
        );
    }

    #[test]
    fn plain_keys_stay_top_level() {
        let decoded = decode_nested(pairs(&[("title", "Camp A")]));
        assert_eq!(Value::Object(decoded), json!({ "title": "Camp A" }));
    }

    #[test]
    fn malformed_brackets_are_kept_verbatim() {
        let decoded = decode_nested(pairs(&[("a[b][c]", "1"), ("[x]", "2"), ("y[", "3")]));
        assert_eq!(
            Value::Object(decoded),
            json!({ "a[b][c]": "1", "[x]": "2", "y[": "3" })
        );
    }

    #[test]
    fn nested_key_replaces_scalar() {
        let decoded = decode_nested(pairs(&[("campground", "x"), ("campground[title]", "T")]));
        assert_eq!(
            Value::Object(decoded),
            json!({ "campground": { "title": "T" } })
        );
    }

    #[test]
    fn validated_payload_converts_to_dtos() {
        let payload = decode_nested(pairs(&[
            ("campground[title]", "Camp A"),
            ("campground[price]", "12.5"),
        ]));
        let normalized = validation::validate_campground(&payload).unwrap();

        let create = ValidatedCampground(normalized.clone()).into_create().unwrap();
        assert_eq!(create.title, "Camp A");
        assert_eq!(create.price, Some(12.5));
        assert_eq!(create.location, None);

        let update = ValidatedCampground(normalized).into_update().unwrap();
        assert_eq!(update.title.as_deref(), Some("Camp A"));
        assert_eq!(update.location, None);
    }

    #[test]
    fn blank_inputs_clear_on_update() {
        let payload = decode_nested(pairs(&[
            ("campground[title]", "Camp A"),
            ("campground[location]", ""),
            ("campground[price]", ""),
        ]));
        let normalized = validation::validate_campground(&payload).unwrap();

        let update = ValidatedCampground(normalized.clone()).into_update().unwrap();
        assert_eq!(update.location, Some(None));
        assert_eq!(update.price, Some(None));
        assert_eq!(update.image, None);

        let create = ValidatedCampground(normalized).into_create().unwrap();
        assert_eq!(create.location, None);
    }
}
