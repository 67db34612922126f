use super::definition::{Rule, RuleDraft, RulePatch};
use crate::error::RepositoryError;
use crate::form::FieldDefinition;
use crate::validate::validate_rule;
use std::sync::Arc;

/// Copy-on-write store for the active rule set.
///
/// Every mutation takes `&self` and returns a fresh repository; the shared
/// rule list itself is never written in place. An evaluation call that took a
/// [`snapshot`](Self::snapshot) therefore keeps a consistent view for its
/// whole duration, even while the authoring UI edits rules concurrently.
///
/// The repository never stores a rule the validator rejects: `add_rule` and
/// `update_rule` validate against the supplied field definitions first.
#[derive(Debug, Clone, Default)]
pub struct RuleRepository {
    rules: Arc<Vec<Rule>>,
    next_id: u64,
}

impl RuleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current rule list, in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// A shared handle to the current rule list, suitable for handing to an
    /// evaluation call. Later repository mutations do not affect it.
    pub fn snapshot(&self) -> Arc<Vec<Rule>> {
        Arc::clone(&self.rules)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Validates the draft, assigns an id, and appends the new rule.
    ///
    /// A draft without an explicit priority defaults to the current rule
    /// count, so new rules start at the lowest precedence.
    pub fn add_rule(
        &self,
        draft: RuleDraft,
        fields: &[FieldDefinition],
    ) -> Result<(Self, Rule), RepositoryError> {
        let rule = Rule {
            id: format!("rule-{}", self.next_id + 1),
            name: draft.name,
            description: draft.description,
            conditions: draft.conditions,
            actions: draft.actions,
            active: draft.active,
            priority: draft.priority.unwrap_or(self.rules.len() as i64),
        };

        let report = validate_rule(&rule, fields);
        if !report.is_valid() {
            return Err(RepositoryError::RejectedRule {
                name: rule.name,
                errors: report.errors,
            });
        }

        let mut rules = self.rules.as_ref().clone();
        rules.push(rule.clone());
        let next = Self {
            rules: Arc::new(rules),
            next_id: self.next_id + 1,
        };
        Ok((next, rule))
    }

    /// Applies a patch to the rule with the given id. The patched rule is
    /// re-validated before it replaces the stored one.
    pub fn update_rule(
        &self,
        id: &str,
        patch: RulePatch,
        fields: &[FieldDefinition],
    ) -> Result<Self, RepositoryError> {
        let index = self.index_of(id)?;

        let mut updated = self.rules[index].clone();
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(description) = patch.description {
            updated.description = description;
        }
        if let Some(conditions) = patch.conditions {
            updated.conditions = conditions;
        }
        if let Some(actions) = patch.actions {
            updated.actions = actions;
        }
        if let Some(active) = patch.active {
            updated.active = active;
        }
        if let Some(priority) = patch.priority {
            updated.priority = priority;
        }

        let report = validate_rule(&updated, fields);
        if !report.is_valid() {
            return Err(RepositoryError::RejectedRule {
                name: updated.name,
                errors: report.errors,
            });
        }

        let mut rules = self.rules.as_ref().clone();
        rules[index] = updated;
        Ok(Self {
            rules: Arc::new(rules),
            next_id: self.next_id,
        })
    }

    pub fn remove_rule(&self, id: &str) -> Result<Self, RepositoryError> {
        let index = self.index_of(id)?;
        let mut rules = self.rules.as_ref().clone();
        rules.remove(index);
        Ok(Self {
            rules: Arc::new(rules),
            next_id: self.next_id,
        })
    }

    pub fn set_active(&self, id: &str, active: bool) -> Result<Self, RepositoryError> {
        let index = self.index_of(id)?;
        let mut rules = self.rules.as_ref().clone();
        rules[index].active = active;
        Ok(Self {
            rules: Arc::new(rules),
            next_id: self.next_id,
        })
    }

    fn index_of(&self, id: &str) -> Result<usize, RepositoryError> {
        self.rules
            .iter()
            .position(|rule| rule.id == id)
            .ok_or_else(|| RepositoryError::RuleNotFound(id.to_string()))
    }
}
