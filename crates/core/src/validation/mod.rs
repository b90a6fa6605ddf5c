//! Payload shape validation.
//!
//! Provides the rule types, a pure-logic evaluator, and the fixed campground
//! schema applied before any create/update reaches the store.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate_rules, validate_campground};
pub use rules::{FieldRule, FieldViolation, RuleKind, ValidationResult, CAMPGROUND_RULES};
