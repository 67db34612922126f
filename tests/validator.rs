//! Structural rule validation: the checks that block saving in the authoring UI.
mod common;
use common::{action, condition, rule, set_value, standard_fields, text};
use joken::prelude::*;

#[test]
fn test_well_formed_rule_is_valid() {
    let rule = rule(
        "ok",
        0,
        vec![condition("a", ConditionOperator::Equals, Some(text("yes")))],
        vec![
            action(ActionKind::ShowField, "b"),
            set_value("c", text("9")),
        ],
    );
    let report = validate_rule(&rule, &standard_fields());

    assert!(report.is_valid());
    assert!(report.messages().is_empty());
}

#[test]
fn test_unknown_condition_field_is_rejected_with_named_error() {
    let rule = rule(
        "bad",
        0,
        vec![condition("zzz", ConditionOperator::Equals, Some(text("x")))],
        vec![action(ActionKind::ShowField, "b")],
    );
    let report = validate_rule(&rule, &standard_fields());

    assert!(!report.is_valid());
    assert_eq!(
        report.errors,
        vec![ValidationError::UnknownConditionField {
            field_id: "zzz".to_string(),
        }]
    );
    assert!(report.messages()[0].contains("zzz"));
}

#[test]
fn test_unknown_action_target_is_rejected() {
    let rule = rule("bad", 0, vec![], vec![action(ActionKind::HideField, "ghost")]);
    let report = validate_rule(&rule, &standard_fields());

    assert_eq!(
        report.errors,
        vec![ValidationError::UnknownActionTarget {
            field_id: "ghost".to_string(),
        }]
    );
}

#[test]
fn test_comparison_operator_requires_a_value() {
    let rule = rule(
        "bad",
        0,
        vec![condition("a", ConditionOperator::Contains, None)],
        vec![],
    );
    let report = validate_rule(&rule, &standard_fields());

    assert_eq!(
        report.errors,
        vec![ValidationError::MissingConditionValue {
            operator: ConditionOperator::Contains,
        }]
    );
}

#[test]
fn test_emptiness_operators_do_not_require_a_value() {
    let rule = rule(
        "ok",
        0,
        vec![
            condition("a", ConditionOperator::IsEmpty, None),
            condition("b", ConditionOperator::IsNotEmpty, None),
        ],
        vec![],
    );

    assert!(validate_rule(&rule, &standard_fields()).is_valid());
}

#[test]
fn test_set_value_requires_a_payload() {
    let rule = rule("bad", 0, vec![], vec![action(ActionKind::SetValue, "b")]);
    let report = validate_rule(&rule, &standard_fields());

    assert_eq!(
        report.errors,
        vec![ValidationError::MissingActionValue {
            field_id: "b".to_string(),
        }]
    );
}

#[test]
fn test_multiple_defects_are_all_reported() {
    let rule = rule(
        "bad",
        0,
        vec![condition("zzz", ConditionOperator::Equals, None)],
        vec![action(ActionKind::SetValue, "ghost")],
    );
    let report = validate_rule(&rule, &standard_fields());

    assert_eq!(report.errors.len(), 4);
}

#[test]
fn test_rule_with_no_conditions_is_accepted() {
    // Open question resolved as always-match: the authoring UI may save a
    // rule with an empty condition list.
    let rule = rule("vacuous", 0, vec![], vec![action(ActionKind::HideField, "b")]);

    assert!(validate_rule(&rule, &standard_fields()).is_valid());
}
