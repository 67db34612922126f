use crate::form::FormValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The effect a matched rule applies to one target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ShowField,
    HideField,
    RequireField,
    OptionalField,
    SetValue,
}

impl ActionKind {
    /// Whether the action needs a payload value. Only `set_value` does.
    pub fn requires_value(self) -> bool {
        matches!(self, ActionKind::SetValue)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::ShowField => "show_field",
            ActionKind::HideField => "hide_field",
            ActionKind::RequireField => "require_field",
            ActionKind::OptionalField => "optional_field",
            ActionKind::SetValue => "set_value",
        };
        write!(f, "{}", name)
    }
}

/// A single effect (visibility, requiredness, or value override) applied to
/// one target field when the owning rule matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub kind: ActionKind,
    pub target_field_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FormValue>,
}
