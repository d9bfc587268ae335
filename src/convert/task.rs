//! Lowering for task-like BPMN elements.

use crate::bpmn::BpmnTask;
use crate::cacao::{Command, CommandKind, Playbook, Step, StepKind};

use super::index::Discriminator;
use super::{ConversionContext, synthesize_end};

/// Lowers one task-like element into one step carrying a single command,
/// wiring its linear outgoing transition.
///
/// A task whose successor cannot be resolved gets a freshly synthesized End
/// step instead; a missing successor is never an error.
pub(super) fn lower_task(
    task: &BpmnTask,
    command: CommandKind,
    ctx: &ConversionContext,
    playbook: &mut Playbook,
) {
    let Some(step_id) = ctx.steps.step_id(&task.id).map(str::to_string) else {
        return;
    };

    let on_completion = ctx
        .transitions
        .target(&task.id, &Discriminator::Position(0))
        .and_then(|target| ctx.steps.step_id(target))
        .map(str::to_string)
        .unwrap_or_else(|| synthesize_end(ctx, playbook));

    // The promoted-start rule can make a task-like node the declared entry
    // point; it then carries the start kind instead of a generic action.
    let kind = if playbook.workflow_start == step_id {
        StepKind::Start
    } else {
        StepKind::Action
    };

    playbook.workflow.insert(
        step_id,
        Step {
            kind: kind.record_tag(ctx.version).to_string(),
            name: task.name.clone(),
            on_completion: Some(on_completion),
            commands: vec![Command {
                kind: command,
                command: task.name.clone(),
                description: task.documentation.clone(),
            }],
            ..Step::default()
        },
    );
}
