use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The current values of a form, keyed by field id. Supplied fresh by the
/// caller on every evaluation call.
pub type FormData = AHashMap<String, FormValue>;

/// Runtime value of a form field, and the literal type used by rule
/// conditions and `set_value` actions.
///
/// Untagged on the wire, so values round-trip as plain JSON: `"yes"`, `9`,
/// `true`, `["a", "b"]`, `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<FormValue>),
    Null,
}

impl FormValue {
    /// True for the values the `is_empty` operator treats as empty: an absent
    /// value, an empty string, or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            FormValue::Null => true,
            FormValue::Text(s) => s.is_empty(),
            FormValue::List(items) => items.is_empty(),
            FormValue::Number(_) | FormValue::Bool(_) => false,
        }
    }

    /// Numeric view of the value, if it has one. Text is included so that
    /// numeric strings coming from text inputs compare numerically.
    fn as_number(&self) -> Option<f64> {
        match self {
            FormValue::Number(n) => Some(*n),
            FormValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Type-aware equality: when both sides have a numeric view they compare
    /// numerically (`Number(9.0)` equals `Text("9")`), otherwise their
    /// canonical text forms are compared.
    pub fn loosely_equals(&self, other: &FormValue) -> bool {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return a == b;
        }
        self.to_string() == other.to_string()
    }

    /// Containment check backing the `contains` operator: membership for
    /// lists, substring for text, false for everything else.
    pub fn contains(&self, needle: &FormValue) -> bool {
        match self {
            FormValue::List(items) => items.iter().any(|item| item.loosely_equals(needle)),
            FormValue::Text(s) => s.contains(&needle.to_string()),
            _ => false,
        }
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            FormValue::Text(s) => write!(f, "{}", s),
            FormValue::Bool(b) => write!(f, "{}", b),
            FormValue::List(items) => {
                write!(f, "[{}]", items.iter().map(|item| item.to_string()).join(", "))
            }
            FormValue::Null => write!(f, "null"),
        }
    }
}
