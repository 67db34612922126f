//! # Joken - Conditional Logic Engine for Dynamic Forms
//!
//! **Joken** is a rule-based evaluation engine that decides, for a set of form
//! fields and their current values, which fields are visible, which are required,
//! and which values are overridden. Rules are user-authored ("if field A equals X,
//! show field B"), prioritized, and re-evaluated to a fixed point on every change
//! to the form data.
//!
//! ## Core Workflow
//!
//! The engine is deliberately stateless between calls. The caller owns the field
//! definitions and the current form data; the engine owns nothing but the
//! evaluation algorithm. The primary workflow is:
//!
//! 1.  **Define Your Fields**: Supply a `Vec<FieldDefinition>` describing every
//!     field in the form. The engine never mutates these.
//! 2.  **Author Rules**: Build a `RuleRepository` and add rules through it. Every
//!     rule is validated against the field definitions before it is stored, and
//!     every mutation returns a fresh, immutable repository.
//! 3.  **Evaluate**: Call `ResolutionEngine::update_form_data` with the fields, a
//!     rule snapshot, and the current data. The engine runs bounded fixed-point
//!     passes and returns a per-field derived state map.
//! 4.  **Render**: The caller's rendering layer applies the derived map to toggle
//!     visibility, required markers, and value overrides.
//!
//! ## Quick Start
//!
//! ```rust
//! use joken::prelude::*;
//!
//! let fields = vec![
//!     FieldDefinition {
//!         id: "plan".to_string(),
//!         field_type: FieldType::Select,
//!         required_by_default: true,
//!     },
//!     FieldDefinition {
//!         id: "company".to_string(),
//!         field_type: FieldType::Text,
//!         required_by_default: false,
//!     },
//! ];
//!
//! // Rules are stored copy-on-write: every mutation returns a new repository.
//! let repository = RuleRepository::new();
//! let (repository, _rule) = repository
//!     .add_rule(
//!         RuleDraft {
//!             name: "Require company for business plans".to_string(),
//!             conditions: vec![Condition {
//!                 field_id: "plan".to_string(),
//!                 operator: ConditionOperator::Equals,
//!                 value: Some(FormValue::Text("business".to_string())),
//!             }],
//!             actions: vec![Action {
//!                 kind: ActionKind::RequireField,
//!                 target_field_id: "company".to_string(),
//!                 value: None,
//!             }],
//!             ..RuleDraft::default()
//!         },
//!         &fields,
//!     )
//!     .unwrap();
//!
//! let mut data = FormData::default();
//! data.insert("plan".to_string(), FormValue::Text("business".to_string()));
//!
//! let engine = ResolutionEngine::default();
//! let resolution = engine.update_form_data(&fields, repository.rules(), &data);
//!
//! assert!(resolution.is_required("company"));
//! assert!(resolution.converged);
//! ```

pub mod data;
pub mod engine;
pub mod error;
pub mod form;
pub mod prelude;
pub mod rule;
pub mod validate;
