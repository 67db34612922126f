use crate::form::{FieldDefinition, FieldType, FormData, FormValue};
use crate::rule::{Action, ActionKind, Condition, ConditionOperator, Rule};
use serde::Deserialize;
use std::fs;

/// A complete form bundle (fields, rules, data) matching the expected JSON
/// format, used by the diagnostic CLI and for quick experiments.
#[derive(Deserialize, Debug)]
pub struct SampleForm {
    pub fields: Vec<FieldDefinition>,
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub data: FormData,
}

impl SampleForm {
    /// Load a sample form from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let form = serde_json::from_str(&content)?;
        Ok(form)
    }

    /// Creates a built-in mock form when no file is provided: a plan selector
    /// that reveals and requires a company field, and a chained value rule.
    pub fn mock() -> Self {
        let fields = vec![
            FieldDefinition {
                id: "plan".to_string(),
                field_type: FieldType::Select,
                required_by_default: true,
            },
            FieldDefinition {
                id: "company".to_string(),
                field_type: FieldType::Text,
                required_by_default: false,
            },
            FieldDefinition {
                id: "seats".to_string(),
                field_type: FieldType::Number,
                required_by_default: false,
            },
        ];

        let rules = vec![
            Rule {
                id: "rule-1".to_string(),
                name: "Require company for business plans".to_string(),
                description: "Business customers must name their company".to_string(),
                conditions: vec![Condition {
                    field_id: "plan".to_string(),
                    operator: ConditionOperator::Equals,
                    value: Some(FormValue::Text("business".to_string())),
                }],
                actions: vec![Action {
                    kind: ActionKind::RequireField,
                    target_field_id: "company".to_string(),
                    value: None,
                }],
                active: true,
                priority: 0,
            },
            Rule {
                id: "rule-2".to_string(),
                name: "Default seats for business plans".to_string(),
                description: "Pre-fill the seat count once a company is required".to_string(),
                conditions: vec![Condition {
                    field_id: "company".to_string(),
                    operator: ConditionOperator::IsNotEmpty,
                    value: None,
                }],
                actions: vec![Action {
                    kind: ActionKind::SetValue,
                    target_field_id: "seats".to_string(),
                    value: Some(FormValue::Number(5.0)),
                }],
                active: true,
                priority: 1,
            },
        ];

        let mut data = FormData::default();
        data.insert("plan".to_string(), FormValue::Text("business".to_string()));
        data.insert("company".to_string(), FormValue::Text("Acme".to_string()));

        Self {
            fields,
            rules,
            data,
        }
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }
}
