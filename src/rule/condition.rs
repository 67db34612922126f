use crate::form::FormValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The predicate applied to one field's current value.
///
/// A closed enum rather than an open string, so adding an operator forces a
/// compile-time update of the condition evaluator instead of a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    IsEmpty,
    IsNotEmpty,
}

impl ConditionOperator {
    /// Whether the operator needs a comparison value. Only the two emptiness
    /// checks operate on the field value alone.
    pub fn requires_value(self) -> bool {
        !matches!(self, ConditionOperator::IsEmpty | ConditionOperator::IsNotEmpty)
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConditionOperator::Equals => "equals",
            ConditionOperator::NotEquals => "not_equals",
            ConditionOperator::Contains => "contains",
            ConditionOperator::NotContains => "not_contains",
            ConditionOperator::IsEmpty => "is_empty",
            ConditionOperator::IsNotEmpty => "is_not_empty",
        };
        write!(f, "{}", name)
    }
}

/// A single predicate over one field's current value.
///
/// `value` must be present for every operator except `is_empty` and
/// `is_not_empty`; the validator enforces this before a rule is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub field_id: String,
    pub operator: ConditionOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FormValue>,
}
