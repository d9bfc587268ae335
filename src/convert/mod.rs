//! Lowering from a parsed BPMN process graph to a CACAO playbook.
//!
//! The pipeline runs in a fixed order so identical input always yields an
//! identical playbook:
//!
//! 1. **Validate**: the document must contain exactly one process.
//! 2. **Index**: classify every flow node into a step id and index every
//!    sequence flow by source and branch discriminator ([`index`]). Both
//!    maps are complete before any lowering runs.
//! 3. **Lower**: emit one step per task-like node and per gateway,
//!    category by category.
//!
//! Dangling transition references are repaired by synthesizing End steps;
//! gateways with a fan-in shape are logged and omitted. Neither stops the
//! conversion.

pub mod ids;
pub mod index;

mod classify;
mod gateway;
mod task;

use crate::bpmn::BpmnDefinitions;
use crate::cacao::{CommandKind, Playbook, SpecVersion, Step, StepKind};
use crate::error::ConvertError;

use classify::StepIndex;
use index::{Discriminator, TransitionIndex};

/// Everything the per-node lowering passes need to resolve references: the
/// selected spec revision plus the two read-only index maps. Built fresh for
/// each document and dropped when its conversion finishes.
pub(crate) struct ConversionContext {
    version: SpecVersion,
    steps: StepIndex,
    transitions: TransitionIndex,
}

/// Converts parsed BPMN definitions into CACAO playbooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    version: SpecVersion,
}

impl Converter {
    pub fn new(version: SpecVersion) -> Self {
        Self { version }
    }

    /// Lowers one BPMN document into a playbook.
    ///
    /// The conversion is deterministic and holds no state between calls:
    /// repeating it for the same input yields the same step ids and graph
    /// structure.
    pub fn convert(&self, definitions: &BpmnDefinitions) -> Result<Playbook, ConvertError> {
        let process = match definitions.processes.as_slice() {
            [process] => process,
            other => return Err(ConvertError::UnexpectedProcessCount(other.len())),
        };

        let ctx = ConversionContext {
            version: self.version,
            steps: StepIndex::classify(process, self.version),
            transitions: TransitionIndex::build(&process.sequence_flows),
        };

        let mut playbook = Playbook::new(
            self.version,
            ids::playbook_id(&process.id),
            process.name.clone(),
            ctx.steps.start_step_id().unwrap_or_default().to_string(),
        );

        // The explicit start event is emitted directly; it carries no
        // command payload and its missing successor is left unset rather
        // than repaired.
        if let Some(start) = &process.start_event
            && let Some(step_id) = ctx.steps.step_id(&start.id)
        {
            let on_completion = ctx
                .transitions
                .target(&start.id, &Discriminator::Position(0))
                .and_then(|target| ctx.steps.step_id(target))
                .map(str::to_string);
            playbook.workflow.insert(
                step_id.to_string(),
                Step {
                    kind: StepKind::Start.record_tag(self.version).to_string(),
                    name: start.name.clone(),
                    on_completion,
                    ..Step::default()
                },
            );
        }

        for event in &process.intermediate_catch_events {
            task::lower_task(event, CommandKind::Manual, &ctx, &mut playbook);
        }

        for end in &process.end_events {
            if let Some(step_id) = ctx.steps.step_id(&end.id) {
                playbook.workflow.insert(
                    step_id.to_string(),
                    Step {
                        kind: StepKind::End.record_tag(self.version).to_string(),
                        name: "End".to_string(),
                        ..Step::default()
                    },
                );
            }
        }

        // The command payload kind is fixed per task category.
        for task in &process.service_tasks {
            task::lower_task(task, CommandKind::HttpApi, &ctx, &mut playbook);
        }
        for task in &process.user_tasks {
            task::lower_task(task, CommandKind::Manual, &ctx, &mut playbook);
        }
        for task in &process.manual_tasks {
            task::lower_task(task, CommandKind::Manual, &ctx, &mut playbook);
        }
        for task in &process.script_tasks {
            task::lower_task(task, CommandKind::Bash, &ctx, &mut playbook);
        }
        for task in &process.send_tasks {
            task::lower_task(task, CommandKind::Bash, &ctx, &mut playbook);
        }
        for task in &process.tasks {
            task::lower_task(task, CommandKind::Manual, &ctx, &mut playbook);
        }
        for task in &process.intermediate_throw_events {
            task::lower_task(task, CommandKind::Manual, &ctx, &mut playbook);
        }

        for gw in &process.exclusive_gateways {
            gateway::lower_gateway(gw, false, &ctx, &mut playbook);
        }
        for gw in &process.parallel_gateways {
            gateway::lower_gateway(gw, true, &ctx, &mut playbook);
        }
        // Inclusive gateways lower as fan-out; their conditional semantics
        // are a known fidelity gap of the target notation mapping.
        for gw in &process.inclusive_gateways {
            gateway::lower_gateway(gw, true, &ctx, &mut playbook);
        }

        Ok(playbook)
    }
}

/// Dangling-edge repair: when a successor lookup misses, synthesize a fresh
/// End step, insert it, and return its id so the caller can rewire to it.
pub(crate) fn synthesize_end(ctx: &ConversionContext, playbook: &mut Playbook) -> String {
    let step_id = ids::synthesized_step_id(StepKind::End, ctx.version);
    playbook.workflow.insert(
        step_id.clone(),
        Step {
            kind: StepKind::End.record_tag(ctx.version).to_string(),
            name: "End".to_string(),
            ..Step::default()
        },
    );
    step_id
}
