//! Copy-on-write rule repository behavior and the stable rule wire format.
mod common;
use common::{action, condition, standard_fields, text};
use joken::prelude::*;

fn draft(name: &str) -> RuleDraft {
    RuleDraft {
        name: name.to_string(),
        conditions: vec![condition("a", ConditionOperator::Equals, Some(text("yes")))],
        actions: vec![action(ActionKind::ShowField, "b")],
        ..RuleDraft::default()
    }
}

#[test]
fn test_add_rule_assigns_id_and_default_priority() {
    let fields = standard_fields();
    let repository = RuleRepository::new();

    let (repository, first) = repository.add_rule(draft("First"), &fields).unwrap();
    let (repository, second) = repository.add_rule(draft("Second"), &fields).unwrap();

    assert_eq!(first.id, "rule-1");
    assert_eq!(first.priority, 0);
    assert_eq!(second.id, "rule-2");
    assert_eq!(second.priority, 1); // appended at lowest precedence
    assert!(second.active);
    assert_eq!(repository.len(), 2);
}

#[test]
fn test_add_rule_honors_explicit_priority() {
    let fields = standard_fields();
    let (_, rule) = RuleRepository::new()
        .add_rule(
            RuleDraft {
                priority: Some(7),
                ..draft("Pinned")
            },
            &fields,
        )
        .unwrap();

    assert_eq!(rule.priority, 7);
}

#[test]
fn test_add_rule_rejects_invalid_drafts() {
    let fields = standard_fields();
    let repository = RuleRepository::new();

    let bad = RuleDraft {
        conditions: vec![condition("zzz", ConditionOperator::Equals, Some(text("x")))],
        ..draft("Broken")
    };
    let err = repository.add_rule(bad, &fields).unwrap_err();

    assert!(matches!(err, RepositoryError::RejectedRule { .. }));
    assert!(err.to_string().contains("zzz"));
    // The rejected rule was never stored.
    assert!(repository.is_empty());
}

#[test]
fn test_update_rule_patches_editable_attributes() {
    let fields = standard_fields();
    let (repository, rule) = RuleRepository::new().add_rule(draft("Original"), &fields).unwrap();

    let repository = repository
        .update_rule(
            &rule.id,
            RulePatch {
                name: Some("Renamed".to_string()),
                priority: Some(3),
                ..RulePatch::default()
            },
            &fields,
        )
        .unwrap();

    let updated = repository.get(&rule.id).unwrap();
    assert_eq!(updated.id, rule.id); // identity is immutable
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.priority, 3);
    assert_eq!(updated.conditions, rule.conditions); // untouched attributes survive
}

#[test]
fn test_update_rule_revalidates_the_patched_rule() {
    let fields = standard_fields();
    let (repository, rule) = RuleRepository::new().add_rule(draft("Ok"), &fields).unwrap();

    let err = repository
        .update_rule(
            &rule.id,
            RulePatch {
                actions: Some(vec![action(ActionKind::HideField, "ghost")]),
                ..RulePatch::default()
            },
            &fields,
        )
        .unwrap_err();

    assert!(matches!(err, RepositoryError::RejectedRule { .. }));
    assert_eq!(repository.get(&rule.id).unwrap().actions, rule.actions);
}

#[test]
fn test_remove_and_set_active() {
    let fields = standard_fields();
    let (repository, first) = RuleRepository::new().add_rule(draft("First"), &fields).unwrap();
    let (repository, second) = repository.add_rule(draft("Second"), &fields).unwrap();

    let repository = repository.set_active(&first.id, false).unwrap();
    assert!(!repository.get(&first.id).unwrap().active);

    let repository = repository.remove_rule(&first.id).unwrap();
    assert_eq!(repository.len(), 1);
    assert!(repository.get(&second.id).is_some());
}

#[test]
fn test_unknown_rule_id_errors() {
    let repository = RuleRepository::new();

    assert!(matches!(
        repository.remove_rule("rule-404").unwrap_err(),
        RepositoryError::RuleNotFound(_)
    ));
    assert!(matches!(
        repository.set_active("rule-404", true).unwrap_err(),
        RepositoryError::RuleNotFound(_)
    ));
}

#[test]
fn test_snapshot_is_isolated_from_later_edits() {
    let fields = standard_fields();
    let (repository, rule) = RuleRepository::new().add_rule(draft("First"), &fields).unwrap();

    // An evaluation call holds this snapshot for its whole duration.
    let snapshot = repository.snapshot();

    let edited = repository.set_active(&rule.id, false).unwrap();
    let (edited, _) = edited.add_rule(draft("Second"), &fields).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert!(snapshot[0].active);
    // The original repository handle is likewise untouched.
    assert_eq!(repository.len(), 1);
    assert!(repository.get(&rule.id).unwrap().active);
    assert_eq!(edited.len(), 2);
}

#[test]
fn test_rule_wire_format_round_trips_the_documented_shape() {
    let json = r#"{
        "id": "rule-1",
        "name": "ShowB",
        "description": "Reveal b for yes",
        "conditions": [
            { "fieldId": "a", "operator": "equals", "value": "yes" },
            { "fieldId": "b", "operator": "is_empty" }
        ],
        "actions": [
            { "kind": "show_field", "targetFieldId": "b" },
            { "kind": "set_value", "targetFieldId": "c", "value": 9 }
        ],
        "active": true,
        "priority": 2
    }"#;

    let rule: Rule = serde_json::from_str(json).unwrap();
    assert_eq!(rule.id, "rule-1");
    assert_eq!(rule.conditions[0].operator, ConditionOperator::Equals);
    assert_eq!(rule.conditions[0].value, Some(text("yes")));
    assert_eq!(rule.conditions[1].value, None);
    assert_eq!(rule.actions[1].kind, ActionKind::SetValue);
    assert_eq!(rule.actions[1].value, Some(FormValue::Number(9.0)));
    assert_eq!(rule.priority, 2);

    // Re-serialization keeps the documented keys and omits absent values.
    let serialized = serde_json::to_value(&rule).unwrap();
    assert_eq!(serialized["conditions"][0]["fieldId"], "a");
    assert_eq!(serialized["actions"][0]["targetFieldId"], "b");
    assert!(serialized["conditions"][1].get("value").is_none());
    assert_eq!(serialized["actions"][1]["value"], 9.0);
}
