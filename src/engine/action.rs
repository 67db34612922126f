use super::state::DerivedFieldState;
use crate::rule::{Action, ActionKind};

/// Applies one action to a field's derived state, returning the updated copy.
///
/// Pure: conflict resolution falls out of sequential application alone. A
/// `set_value` action missing its payload (invalid, but representable on the
/// wire) leaves the state unchanged.
pub(super) fn apply(action: &Action, state: &DerivedFieldState) -> DerivedFieldState {
    let mut next = state.clone();
    match action.kind {
        ActionKind::ShowField => next.visible = true,
        ActionKind::HideField => next.visible = false,
        ActionKind::RequireField => next.required = true,
        ActionKind::OptionalField => next.required = false,
        ActionKind::SetValue => {
            if let Some(value) = &action.value {
                next.value_override = Some(value.clone());
            }
        }
    }
    next
}
