use crate::rule::ConditionOperator;
use serde::Serialize;
use thiserror::Error;

/// Structural defects found in a rule before it is accepted.
///
/// Surfaced synchronously by the validator so the authoring UI can block
/// saving; never raised during evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Condition references unknown field '{field_id}'")]
    UnknownConditionField { field_id: String },

    #[error("Action targets unknown field '{field_id}'")]
    UnknownActionTarget { field_id: String },

    #[error("Operator '{operator}' requires a comparison value, but none was provided")]
    MissingConditionValue { operator: ConditionOperator },

    #[error("A 'set_value' action on field '{field_id}' requires a value, but none was provided")]
    MissingActionValue { field_id: String },
}

/// Errors from rule repository mutations.
#[derive(Error, Debug, Clone)]
pub enum RepositoryError {
    #[error("No rule with id '{0}' exists in the repository")]
    RuleNotFound(String),

    #[error("Rule '{}' was rejected by validation: {}", .name, .errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    RejectedRule {
        name: String,
        errors: Vec<ValidationError>,
    },
}

/// Non-fatal diagnostics recorded during evaluation.
///
/// Evaluation is total: these are collected on the [`Resolution`] output for
/// the diagnostic "run test" view, and never abort a call.
///
/// [`Resolution`]: crate::engine::Resolution
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EvaluationWarning {
    #[error("Rule '{rule_id}' has a condition referencing unknown field '{field_id}'")]
    UnknownConditionField { rule_id: String, field_id: String },

    #[error("Rule '{rule_id}' has an action targeting unknown field '{field_id}'")]
    UnknownActionTarget { rule_id: String, field_id: String },

    #[error("Derived state did not stabilize after {passes} passes; returning the last computed state")]
    NonConvergence { passes: usize },
}
