//! Lowering for BPMN gateways into parallel, if-condition, and
//! switch-condition steps.

use std::collections::BTreeMap;

use crate::bpmn::BpmnGateway;
use crate::cacao::{Playbook, PlaybookVariable, Step, StepKind};

use super::ids::derived_step_id;
use super::index::Discriminator;
use super::{ConversionContext, synthesize_end};

/// Lowers one gateway. `parallel` selects fan-out semantics (all branches
/// run); otherwise the gateway becomes a condition step driven by a
/// playbook variable derived from its label.
pub(super) fn lower_gateway(
    gateway: &BpmnGateway,
    parallel: bool,
    ctx: &ConversionContext,
    playbook: &mut Playbook,
) {
    if parallel {
        lower_parallel(gateway, ctx, playbook);
    } else {
        lower_conditional(gateway, ctx, playbook);
    }
}

/// Fan-out: every branch target runs. Unresolved branches are dropped
/// rather than repaired, so the emitted list only ever names real steps.
fn lower_parallel(gateway: &BpmnGateway, ctx: &ConversionContext, playbook: &mut Playbook) {
    let step_id = derived_step_id(StepKind::Parallel, ctx.version, &gateway.id);
    let next_steps = (0..gateway.outgoing.len())
        .filter_map(|position| {
            let target = ctx
                .transitions
                .target(&gateway.id, &Discriminator::Position(position))?;
            ctx.steps.step_id(target).map(str::to_string)
        })
        .collect();
    playbook.workflow.insert(
        step_id,
        Step {
            kind: StepKind::Parallel.record_tag(ctx.version).to_string(),
            next_steps,
            ..Step::default()
        },
    );
}

fn lower_conditional(gateway: &BpmnGateway, ctx: &ConversionContext, playbook: &mut Playbook) {
    let variable = condition_variable(gateway);
    let display_name = if gateway.name.is_empty() {
        gateway.id.clone()
    } else {
        gateway.name.clone()
    };
    playbook.playbook_variables.insert(
        variable.clone(),
        PlaybookVariable {
            kind: "integer".to_string(),
            description: display_name.clone(),
            value: "0".to_string(),
            constant: false,
        },
    );

    match gateway.outgoing.len() {
        2 => {
            let step_id = derived_step_id(StepKind::IfCondition, ctx.version, &gateway.id);
            let on_true = resolve_branch(gateway, "YES", ctx, playbook);
            let on_false = resolve_branch(gateway, "NO", ctx, playbook);
            playbook.workflow.insert(
                step_id,
                Step {
                    kind: StepKind::IfCondition.record_tag(ctx.version).to_string(),
                    name: display_name,
                    condition: format!("{} == 1", variable),
                    on_true: Some(on_true),
                    on_false: Some(on_false),
                    in_args: vec![variable],
                    ..Step::default()
                },
            );
        }
        n if n > 2 => {
            let step_id = derived_step_id(StepKind::SwitchCondition, ctx.version, &gateway.id);
            let mut cases: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for (discriminator, target) in ctx.transitions.branches_from(&gateway.id) {
                let Some(target_step) = ctx.steps.step_id(target) else {
                    log::warn!(
                        "switch gateway {}: branch {} targets unknown element {}",
                        gateway.id,
                        discriminator,
                        target
                    );
                    continue;
                };
                cases.insert(discriminator.to_string(), vec![target_step.to_string()]);
            }
            playbook.workflow.insert(
                step_id,
                Step {
                    kind: StepKind::SwitchCondition.record_tag(ctx.version).to_string(),
                    name: display_name,
                    switch: variable.clone(),
                    cases,
                    in_args: vec![variable],
                    ..Step::default()
                },
            );
        }
        n => {
            // Neither condition form can express a fan-in; the branch point
            // is omitted from the output.
            log::error!(
                "exclusive gateway {} has unexpected number of outgoing flows: {}",
                gateway.id,
                n
            );
        }
    }
}

/// Resolves one side of a binary condition by its YES/NO edge label,
/// synthesizing an End step when the branch is missing or dangling.
fn resolve_branch(
    gateway: &BpmnGateway,
    label: &str,
    ctx: &ConversionContext,
    playbook: &mut Playbook,
) -> String {
    ctx.transitions
        .target(&gateway.id, &Discriminator::Label(label.to_string()))
        .and_then(|target| ctx.steps.step_id(target))
        .map(str::to_string)
        .unwrap_or_else(|| synthesize_end(ctx, playbook))
}

/// Mangles the gateway label into a valid variable name: spaces become
/// underscores, everything is lower-cased, and any remaining character that
/// is not a letter, digit, or underscore is stripped. Falls back to the raw
/// element id when nothing survives.
fn condition_variable(gateway: &BpmnGateway) -> String {
    let mangled: String = gateway
        .name
        .replace(' ', "_")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if mangled.is_empty() {
        gateway.id.clone()
    } else {
        mangled
    }
}
