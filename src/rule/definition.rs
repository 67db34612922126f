use super::action::Action;
use super::condition::Condition;
use serde::{Deserialize, Serialize};

/// A named, prioritized, optionally-active bundle of conditions and actions.
///
/// Conditions are AND-combined: the rule matches iff every condition matches,
/// and an empty condition list matches vacuously. Lower `priority` values are
/// applied earlier; because rules are applied sequentially, a later rule wins
/// any conflict ("last write wins").
///
/// This struct is the stable wire shape: it round-trips through form storage
/// and the authoring UI, so field names and enum spellings must not change
/// across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
    pub active: bool,
    pub priority: i64,
}

/// Authoring input for [`RuleRepository::add_rule`](super::RuleRepository::add_rule).
///
/// The repository assigns the id. When `priority` is omitted it defaults to
/// the current rule count, i.e. the new rule starts at the lowest precedence.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub priority: Option<i64>,
}

impl Default for RuleDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            conditions: Vec::new(),
            actions: Vec::new(),
            active: true,
            priority: None,
        }
    }
}

fn default_active() -> bool {
    true
}

/// Partial update for [`RuleRepository::update_rule`](super::RuleRepository::update_rule).
/// Absent attributes are left untouched; the rule id is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub conditions: Option<Vec<Condition>>,
    pub actions: Option<Vec<Action>>,
    pub active: Option<bool>,
    pub priority: Option<i64>,
}
