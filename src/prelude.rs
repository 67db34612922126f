//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the joken crate. Import this
//! module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use joken::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let form = SampleForm::from_file("path/to/form.json")?;
//!
//! for rule in form.rules() {
//!     let report = validate_rule(rule, form.fields());
//!     assert!(report.is_valid(), "{:?}", report.messages());
//! }
//!
//! let engine = ResolutionEngine::default();
//! let resolution = engine.update_form_data(form.fields(), form.rules(), form.data());
//! println!("{}", serde_json::to_string_pretty(&resolution)?);
//! # Ok(())
//! # }
//! ```

// Evaluation
pub use crate::engine::{DEFAULT_PASS_CAP, DerivedFieldState, Resolution, ResolutionEngine};

// Form model
pub use crate::form::{FieldDefinition, FieldType, FormData, FormValue};

// Rules and their store
pub use crate::rule::{
    Action, ActionKind, Condition, ConditionOperator, Rule, RuleDraft, RulePatch, RuleRepository,
};

// Validation
pub use crate::validate::{ValidationReport, validate_rule};

// Error and warning types
pub use crate::error::{EvaluationWarning, RepositoryError, ValidationError};

// Sample data
pub use crate::data::SampleForm;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
