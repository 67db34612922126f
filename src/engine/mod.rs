//! The resolution engine: bounded fixed-point evaluation of the active rule
//! set against a form data snapshot.

use crate::error::EvaluationWarning;
use crate::form::{FieldDefinition, FormData, FormValue};
use crate::rule::{ActionKind, Rule};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde::Serialize;

mod action;
mod condition;
mod state;

pub use state::DerivedFieldState;

/// Maximum evaluation passes before the engine gives up on convergence and
/// returns the last computed state with a warning.
pub const DEFAULT_PASS_CAP: usize = 5;

/// The result of one `update_form_data` call: the derived state of every
/// field, plus the diagnostics the "run test" view dumps for rule authors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Derived state per field id, for every field the caller defined.
    pub fields: AHashMap<String, DerivedFieldState>,
    /// Non-fatal issues encountered during evaluation, deduplicated.
    pub warnings: Vec<EvaluationWarning>,
    /// Number of passes actually run, including the pass that confirmed the
    /// fixed point.
    pub passes: usize,
    /// False only when the pass cap was hit before the state stabilized.
    pub converged: bool,
}

impl Resolution {
    pub fn field(&self, id: &str) -> Option<&DerivedFieldState> {
        self.fields.get(id)
    }

    /// Whether the renderer should show the field. Unknown ids report `true`,
    /// matching the default state of an untouched field.
    pub fn is_visible(&self, id: &str) -> bool {
        self.field(id).map_or(true, |state| state.visible)
    }

    pub fn is_required(&self, id: &str) -> bool {
        self.field(id).is_some_and(|state| state.required)
    }

    pub fn value_override(&self, id: &str) -> Option<&FormValue> {
        self.field(id).and_then(|state| state.value_override.as_ref())
    }
}

/// Evaluates rules against form data to a fixed point.
///
/// The engine is stateless between calls and performs no I/O: every
/// `update_form_data` call works purely on the arguments it is given, so it
/// is safe to share across threads and to call on every keystroke of an
/// interactive editor. Cost is O(active rules x conditions per rule) per
/// pass, with at most `pass_cap` passes.
#[derive(Debug, Clone)]
pub struct ResolutionEngine {
    pass_cap: usize,
}

impl Default for ResolutionEngine {
    fn default() -> Self {
        Self {
            pass_cap: DEFAULT_PASS_CAP,
        }
    }
}

impl ResolutionEngine {
    /// Creates an engine with a custom pass cap. The cap is clamped to at
    /// least one pass.
    pub fn new(pass_cap: usize) -> Self {
        Self {
            pass_cap: pass_cap.max(1),
        }
    }

    /// Computes the derived state of every field for the given data snapshot.
    ///
    /// Active rules are applied in ascending priority order (ties keep
    /// insertion order), repeatedly, until a pass changes nothing or the pass
    /// cap is reached. `set_value` overrides are folded into the effective
    /// snapshot immediately, so a chain "rule A sets B, rule keyed on B"
    /// resolves within the same pass where rule order permits.
    ///
    /// A field targeted by a `show_field` action of any active rule is
    /// conditionally shown: it starts the resolution hidden and becomes
    /// visible only when a showing rule matches. All other fields start
    /// visible.
    ///
    /// Total over any input: evaluation-time trouble (unknown field
    /// references, non-convergence) is recorded as warnings on the returned
    /// [`Resolution`], never surfaced as an error.
    pub fn update_form_data(
        &self,
        fields: &[FieldDefinition],
        rules: &[Rule],
        data: &FormData,
    ) -> Resolution {
        let known: AHashSet<String> = fields.iter().map(|f| f.id.clone()).collect();

        // Stable sort: equal priorities keep their insertion order, which
        // makes the application order fully deterministic.
        let ordered: Vec<&Rule> = rules
            .iter()
            .filter(|rule| rule.active)
            .sorted_by_key(|rule| rule.priority)
            .collect();

        // A field some active rule conditionally shows starts hidden, so it
        // only appears when a showing rule actually matches. Fields no rule
        // shows keep the default visibility.
        let shown_conditionally: AHashSet<&str> = ordered
            .iter()
            .flat_map(|rule| rule.actions.iter())
            .filter(|act| act.kind == ActionKind::ShowField)
            .map(|act| act.target_field_id.as_str())
            .collect();

        let mut derived: AHashMap<String, DerivedFieldState> = fields
            .iter()
            .map(|f| {
                let mut state = DerivedFieldState::from_definition(f);
                if shown_conditionally.contains(f.id.as_str()) {
                    state.visible = false;
                }
                (f.id.clone(), state)
            })
            .collect();

        let mut warnings = Vec::new();
        let mut passes = 0;
        let mut converged = false;

        while passes < self.pass_cap {
            passes += 1;
            let previous = derived.clone();

            // Effective snapshot: caller data overlaid with the overrides
            // accumulated so far, then updated in place as set_value actions
            // land during this pass.
            let mut snapshot: FormData = data.clone();
            for (id, state) in &derived {
                if let Some(value) = &state.value_override {
                    snapshot.insert(id.clone(), value.clone());
                }
            }

            for rule in &ordered {
                let matched = rule
                    .conditions
                    .iter()
                    .all(|c| condition::matches(&rule.id, c, &known, &snapshot, &mut warnings));
                if !matched {
                    continue;
                }

                for act in &rule.actions {
                    let Some(current) = derived.get(&act.target_field_id) else {
                        warnings.push(EvaluationWarning::UnknownActionTarget {
                            rule_id: rule.id.clone(),
                            field_id: act.target_field_id.clone(),
                        });
                        continue;
                    };

                    let next = action::apply(act, current);
                    if act.kind == ActionKind::SetValue {
                        if let Some(value) = &next.value_override {
                            snapshot.insert(act.target_field_id.clone(), value.clone());
                        }
                    }
                    derived.insert(act.target_field_id.clone(), next);
                }
            }

            if derived == previous {
                converged = true;
                break;
            }
        }

        // The same bad reference warns once per pass; keep the first of each.
        let mut seen = AHashSet::new();
        warnings.retain(|warning| seen.insert(warning.clone()));

        if !converged {
            warnings.push(EvaluationWarning::NonConvergence { passes });
        }

        Resolution {
            fields: derived,
            warnings,
            passes,
            converged,
        }
    }
}
