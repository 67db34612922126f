use crate::form::{FieldDefinition, FormValue};
use serde::Serialize;

/// The per-field output of evaluation: the attributes the renderer actually
/// uses to toggle visibility, required markers, and displayed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFieldState {
    pub visible: bool,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_override: Option<FormValue>,
}

impl DerivedFieldState {
    /// The state of a field before any rule has touched it: visible, required
    /// per its definition, no override.
    pub fn from_definition(field: &FieldDefinition) -> Self {
        Self {
            visible: true,
            required: field.required_by_default,
            value_override: None,
        }
    }
}
