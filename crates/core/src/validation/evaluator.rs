//! Rule evaluator — pure logic, no store access.

use serde_json::{Map, Number, Value};

use super::rules::{
    FieldRule, FieldViolation, RuleKind, ValidationResult, CAMPGROUND_FIELDS, CAMPGROUND_RULES,
};
use crate::error::CoreError;

/// Evaluate all rules against a single payload.
///
/// Every rule runs; violations are collected rather than stopping at the
/// first failure.
pub fn evaluate_rules(rules: &[FieldRule], data: &Map<String, Value>) -> ValidationResult {
    let errors: Vec<FieldViolation> = rules
        .iter()
        .filter_map(|rule| match lookup(data, rule.field) {
            Lookup::Found(value) => evaluate_single_rule(rule, value),
            Lookup::ParentMissing => None,
        })
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Validate a submitted `{ "campground": { ... } }` payload.
///
/// On success returns the normalized campground object: submitted blank
/// optional fields become `null`, absent ones stay absent, and `price` is
/// coerced to a JSON number. On failure returns [`CoreError::Validation`]
/// listing every violation.
pub fn validate_campground(payload: &Map<String, Value>) -> Result<Map<String, Value>, CoreError> {
    let mut result = evaluate_rules(CAMPGROUND_RULES, payload);

    result
        .errors
        .extend(unknown_keys(payload, &["campground"], ""));
    if let Some(Value::Object(campground)) = payload.get("campground") {
        result
            .errors
            .extend(unknown_keys(campground, CAMPGROUND_FIELDS, "campground."));
    }
    result.is_valid = result.errors.is_empty();

    if !result.is_valid {
        return Err(CoreError::Validation(result.message()));
    }

    let campground = payload
        .get("campground")
        .and_then(Value::as_object)
        .ok_or_else(|| CoreError::Validation("\"campground\" is required".to_string()))?;

    Ok(normalize_campground(campground))
}

fn unknown_keys(
    object: &Map<String, Value>,
    allowed: &[&str],
    prefix: &str,
) -> Vec<FieldViolation> {
    object
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .map(|key| FieldViolation {
            field: format!("{prefix}{key}"),
            message: format!("\"{prefix}{key}\" is not allowed"),
        })
        .collect()
}

fn normalize_campground(campground: &Map<String, Value>) -> Map<String, Value> {
    let mut normalized = Map::new();
    for &field in CAMPGROUND_FIELDS {
        if !campground.contains_key(field) {
            continue;
        }
        let value = match present(campground.get(field)) {
            None => Value::Null,
            Some(value) if field == "price" => as_number(value)
                .and_then(Number::from_f64)
                .map_or(Value::Null, Value::Number),
            Some(value) => value.clone(),
        };
        normalized.insert(field.to_string(), value);
    }
    normalized
}

enum Lookup<'a> {
    Found(Option<&'a Value>),
    ParentMissing,
}

/// Resolve a dotted path. Intermediate segments must be objects.
fn lookup<'a>(data: &'a Map<String, Value>, path: &str) -> Lookup<'a> {
    let mut segments = path.split('.');
    let first = segments.next().unwrap_or(path);
    let mut current = data.get(first);
    for segment in segments {
        match current {
            Some(Value::Object(obj)) => current = obj.get(segment),
            _ => return Lookup::ParentMissing,
        }
    }
    Lookup::Found(current)
}

/// `None` for absent, null or blank-string values.
fn present(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(v) => Some(v),
    }
}

/// Numbers pass through; numeric strings (as sent by HTML forms) are parsed.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn violation(rule: &FieldRule, message: String) -> FieldViolation {
    FieldViolation {
        field: rule.field.to_string(),
        message,
    }
}

fn evaluate_single_rule(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    let field = rule.field;
    match rule.kind {
        RuleKind::Required => match present(value) {
            None => Some(violation(rule, format!("\"{field}\" is required"))),
            Some(_) => None,
        },
        RuleKind::Object => {
            let value = present(value)?;
            (!value.is_object())
                .then(|| violation(rule, format!("\"{field}\" must be of type object")))
        }
        RuleKind::String => {
            let value = present(value)?;
            (!value.is_string()).then(|| violation(rule, format!("\"{field}\" must be a string")))
        }
        RuleKind::Number => {
            let value = present(value)?;
            as_number(value)
                .is_none()
                .then(|| violation(rule, format!("\"{field}\" must be a number")))
        }
        RuleKind::MinValue(min) => {
            let number = as_number(present(value)?)?;
            (number < min).then(|| {
                violation(
                    rule,
                    format!("\"{field}\" must be greater than or equal to {min}"),
                )
            })
        }
    }
}
