//! Common test utilities for building field definitions, rules, and form data.
use joken::prelude::*;

#[allow(dead_code)]
pub fn field(id: &str, field_type: FieldType, required_by_default: bool) -> FieldDefinition {
    FieldDefinition {
        id: id.to_string(),
        field_type,
        required_by_default,
    }
}

/// The field set most tests share: a select `a` and three text fields.
#[allow(dead_code)]
pub fn standard_fields() -> Vec<FieldDefinition> {
    vec![
        field("a", FieldType::Select, false),
        field("b", FieldType::Text, false),
        field("c", FieldType::Text, false),
        field("d", FieldType::Text, false),
    ]
}

#[allow(dead_code)]
pub fn condition(field_id: &str, operator: ConditionOperator, value: Option<FormValue>) -> Condition {
    Condition {
        field_id: field_id.to_string(),
        operator,
        value,
    }
}

#[allow(dead_code)]
pub fn action(kind: ActionKind, target_field_id: &str) -> Action {
    Action {
        kind,
        target_field_id: target_field_id.to_string(),
        value: None,
    }
}

#[allow(dead_code)]
pub fn set_value(target_field_id: &str, value: FormValue) -> Action {
    Action {
        kind: ActionKind::SetValue,
        target_field_id: target_field_id.to_string(),
        value: Some(value),
    }
}

/// An active rule with the given priority. The id doubles as the name.
#[allow(dead_code)]
pub fn rule(id: &str, priority: i64, conditions: Vec<Condition>, actions: Vec<Action>) -> Rule {
    Rule {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        conditions,
        actions,
        active: true,
        priority,
    }
}

#[allow(dead_code)]
pub fn text(s: &str) -> FormValue {
    FormValue::Text(s.to_string())
}

#[allow(dead_code)]
pub fn data(pairs: &[(&str, FormValue)]) -> FormData {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.clone()))
        .collect()
}

/// Runs a default engine over the standard fields.
#[allow(dead_code)]
pub fn resolve(rules: &[Rule], data: &FormData) -> Resolution {
    ResolutionEngine::default().update_form_data(&standard_fields(), rules, data)
}
