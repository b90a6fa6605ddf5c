//! Validation rule and result types.

use serde::Serialize;

/// Delimiter placed between violation messages in the combined error.
pub const MESSAGE_DELIMITER: &str = ",";

/// The check a [`FieldRule`] performs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// Value must be present, non-null and (for strings) non-empty.
    Required,
    /// When present, value must be a JSON object.
    Object,
    /// When present, value must be a string.
    String,
    /// When present, value must be a number or a numeric string.
    Number,
    /// When present and numeric, value must be `>=` the bound.
    MinValue(f64),
}

/// A single rule bound to a dotted field path such as `campground.title`.
///
/// Rules on a nested path are skipped when the parent is not an object; the
/// parent's own rules report that case.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: RuleKind,
}

impl FieldRule {
    pub const fn new(field: &'static str, kind: RuleKind) -> Self {
        Self { field, kind }
    }
}

/// Keys accepted inside the `campground` object.
pub const CAMPGROUND_FIELDS: &[&str] = &["title", "location", "price", "description", "image"];

/// Schema for create and update submissions.
pub const CAMPGROUND_RULES: &[FieldRule] = &[
    FieldRule::new("campground", RuleKind::Required),
    FieldRule::new("campground", RuleKind::Object),
    FieldRule::new("campground.title", RuleKind::Required),
    FieldRule::new("campground.title", RuleKind::String),
    FieldRule::new("campground.price", RuleKind::Number),
    FieldRule::new("campground.price", RuleKind::MinValue(0.0)),
    FieldRule::new("campground.location", RuleKind::String),
    FieldRule::new("campground.description", RuleKind::String),
    FieldRule::new("campground.image", RuleKind::String),
];

/// Aggregated result of evaluating every rule against one payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    /// All violation messages joined into one string.
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(MESSAGE_DELIMITER)
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}
