use serde::{Deserialize, Serialize};

/// The kind of a form field, as chosen in the form designer.
///
/// The engine itself is agnostic to the field kind; it is carried so that
/// authoring tooling and validation messages can speak the form's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Select,
    Checkbox,
    Radio,
    Date,
    Email,
    Phone,
}

/// A single field of a form, owned by the caller.
///
/// The engine receives the full field list fresh on every evaluation call and
/// never mutates a definition. `required_by_default` seeds the derived
/// `required` attribute before any rule runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required_by_default: bool,
}
