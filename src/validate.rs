use crate::error::ValidationError;
use crate::form::FieldDefinition;
use crate::rule::Rule;
use ahash::AHashSet;

/// Outcome of validating one rule. `errors` is empty for a valid rule; each
/// entry renders as a human-readable message for the authoring UI.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors rendered as display strings, in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Checks the structural well-formedness of a rule against the caller's field
/// definitions: every referenced field must exist, every operator that needs a
/// comparison value must carry one, and every `set_value` action must carry a
/// payload.
///
/// Callers (the authoring UI, the repository) must block saving when the
/// report is invalid. Evaluation never runs this: the resolution engine
/// degrades gracefully on bad references instead of failing.
pub fn validate_rule(rule: &Rule, fields: &[FieldDefinition]) -> ValidationReport {
    let known: AHashSet<&str> = fields.iter().map(|f| f.id.as_str()).collect();
    let mut errors = Vec::new();

    for condition in &rule.conditions {
        if !known.contains(condition.field_id.as_str()) {
            errors.push(ValidationError::UnknownConditionField {
                field_id: condition.field_id.clone(),
            });
        }
        if condition.operator.requires_value() && condition.value.is_none() {
            errors.push(ValidationError::MissingConditionValue {
                operator: condition.operator,
            });
        }
    }

    for action in &rule.actions {
        if !known.contains(action.target_field_id.as_str()) {
            errors.push(ValidationError::UnknownActionTarget {
                field_id: action.target_field_id.clone(),
            });
        }
        if action.kind.requires_value() && action.value.is_none() {
            errors.push(ValidationError::MissingActionValue {
                field_id: action.target_field_id.clone(),
            });
        }
    }

    ValidationReport { errors }
}
