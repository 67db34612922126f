use crate::error::EvaluationWarning;
use crate::form::{FormData, FormValue};
use crate::rule::{Condition, ConditionOperator};
use ahash::AHashSet;

static ABSENT: FormValue = FormValue::Null;

/// Evaluates one condition against the effective data snapshot.
///
/// Fail-soft by contract: a condition referencing a field the caller never
/// defined records a warning and simply does not match, and a condition whose
/// operator needs a comparison value but has none does not match either. This
/// function must never panic or error, whatever the inputs.
///
/// A field that is defined but has no value in the snapshot evaluates as
/// `Null`, so `is_empty` is true for untouched fields.
pub(super) fn matches(
    rule_id: &str,
    condition: &Condition,
    known_fields: &AHashSet<String>,
    snapshot: &FormData,
    warnings: &mut Vec<EvaluationWarning>,
) -> bool {
    if !known_fields.contains(condition.field_id.as_str()) {
        warnings.push(EvaluationWarning::UnknownConditionField {
            rule_id: rule_id.to_string(),
            field_id: condition.field_id.clone(),
        });
        return false;
    }

    let current = snapshot.get(condition.field_id.as_str()).unwrap_or(&ABSENT);

    match condition.operator {
        ConditionOperator::Equals => condition
            .value
            .as_ref()
            .is_some_and(|expected| current.loosely_equals(expected)),
        ConditionOperator::NotEquals => condition
            .value
            .as_ref()
            .is_some_and(|expected| !current.loosely_equals(expected)),
        ConditionOperator::Contains => condition
            .value
            .as_ref()
            .is_some_and(|needle| current.contains(needle)),
        ConditionOperator::NotContains => condition
            .value
            .as_ref()
            .is_some_and(|needle| !current.contains(needle)),
        ConditionOperator::IsEmpty => current.is_empty(),
        ConditionOperator::IsNotEmpty => !current.is_empty(),
    }
}
