//! Unit tests for identifier derivation, transition indexing, and the
//! version vocabulary tables.
mod common;
use bpmn_cacao::convert::ids;
use bpmn_cacao::convert::index::{Discriminator, TransitionIndex};
use bpmn_cacao::prelude::*;
use common::*;

#[test]
fn derived_ids_are_stable() {
    let a = ids::derived_step_id(StepKind::Action, SpecVersion::V2_0, "Task_1");
    let b = ids::derived_step_id(StepKind::Action, SpecVersion::V2_0, "Task_1");
    assert_eq!(a, b);
    assert!(a.starts_with("action--"));

    let other = ids::derived_step_id(StepKind::Action, SpecVersion::V2_0, "Task_2");
    assert_ne!(a, other);
}

#[test]
fn derived_ids_use_version_outer_tags() {
    let v11 = ids::derived_step_id(StepKind::IfCondition, SpecVersion::V1_1, "Gateway_1");
    let v20 = ids::derived_step_id(StepKind::IfCondition, SpecVersion::V2_0, "Gateway_1");
    assert!(v11.starts_with("step--"));
    assert!(v20.starts_with("if-condition--"));
    // Same source element, same hashed suffix.
    assert_eq!(
        v11.strip_prefix("step--"),
        v20.strip_prefix("if-condition--")
    );
}

#[test]
fn synthesized_ids_are_unique() {
    let a = ids::synthesized_step_id(StepKind::End, SpecVersion::V2_0);
    let b = ids::synthesized_step_id(StepKind::End, SpecVersion::V2_0);
    assert!(a.starts_with("end--"));
    assert_ne!(a, b);
}

#[test]
fn playbook_id_is_derived_from_process_id() {
    let a = ids::playbook_id("Process_1");
    assert!(a.starts_with("playbook--"));
    assert_eq!(a, ids::playbook_id("Process_1"));
}

#[test]
fn transition_index_uppercases_labels() {
    let index = TransitionIndex::build(&[labeled_flow("g", "t1", "Yes")]);
    assert_eq!(
        index.target("g", &Discriminator::Label("YES".to_string())),
        Some("t1")
    );
    assert_eq!(index.target("g", &Discriminator::Position(0)), None);
}

#[test]
fn transition_index_probes_positions_for_unlabeled_flows() {
    let flows = vec![
        flow("g", "t1"),
        labeled_flow("g", "t2", "Retry"),
        flow("g", "t3"),
        flow("other", "t4"),
    ];
    let index = TransitionIndex::build(&flows);
    assert_eq!(index.target("g", &Discriminator::Position(0)), Some("t1"));
    assert_eq!(index.target("g", &Discriminator::Position(1)), Some("t3"));
    assert_eq!(index.target("g", &Discriminator::label("retry")), Some("t2"));
    assert_eq!(index.target("other", &Discriminator::Position(0)), Some("t4"));
    assert_eq!(index.target("missing", &Discriminator::Position(0)), None);
}

#[test]
fn discriminator_display() {
    assert_eq!(Discriminator::label("Yes").to_string(), "YES");
    assert_eq!(Discriminator::Position(3).to_string(), "3");
}

#[test]
fn spec_version_round_trips() {
    assert_eq!("1.1".parse::<SpecVersion>().unwrap(), SpecVersion::V1_1);
    assert_eq!("2.0".parse::<SpecVersion>().unwrap(), SpecVersion::V2_0);
    assert_eq!(SpecVersion::V2_0.to_string(), "2.0");
    assert_eq!(SpecVersion::default(), SpecVersion::V1_1);

    let err = "3.0".parse::<SpecVersion>().unwrap_err();
    assert!(err.to_string().contains("3.0"));
}

#[test]
fn step_kind_vocabulary_tables() {
    assert_eq!(StepKind::Action.outer_tag(SpecVersion::V1_1), "step");
    assert_eq!(StepKind::Action.outer_tag(SpecVersion::V2_0), "action");
    assert_eq!(StepKind::Action.record_tag(SpecVersion::V1_1), "single");
    assert_eq!(StepKind::Action.record_tag(SpecVersion::V2_0), "action");
    // Condition records keep their tag in both revisions.
    assert_eq!(
        StepKind::IfCondition.record_tag(SpecVersion::V1_1),
        "if-condition"
    );
    assert_eq!(StepKind::Start.record_tag(SpecVersion::V1_1), "start");
    assert_eq!(StepKind::End.outer_tag(SpecVersion::V2_0), "end");
}

#[test]
fn command_kind_serialization() {
    assert_eq!(
        serde_json::to_value(CommandKind::HttpApi).unwrap(),
        serde_json::json!("http-api")
    );
    assert_eq!(
        serde_json::to_value(CommandKind::Bash).unwrap(),
        serde_json::json!("bash")
    );
    assert_eq!(
        serde_json::to_value(CommandKind::Manual).unwrap(),
        serde_json::json!("manual")
    );
}
