//! Assigns every BPMN flow node its workflow step id ahead of lowering.

use ahash::AHashMap;
use itertools::chain;

use crate::bpmn::BpmnProcess;
use crate::cacao::{SpecVersion, StepKind};

use super::ids::derived_step_id;

/// Maps BPMN element ids to the workflow keys their steps will occupy.
///
/// Populated for every node category before any lowering runs, so successor
/// lookups always observe the complete graph.
#[derive(Debug, Default)]
pub(super) struct StepIndex {
    map: AHashMap<String, String>,
    start_step_id: Option<String>,
}

impl StepIndex {
    pub(super) fn classify(process: &BpmnProcess, version: SpecVersion) -> Self {
        let mut index = StepIndex::default();

        if let Some(start) = &process.start_event {
            let step_id = derived_step_id(StepKind::Start, version, &start.id);
            index.map.insert(start.id.clone(), step_id.clone());
            index.start_step_id = Some(step_id);
        }

        // Without an explicit start event, the first intermediate catch
        // event becomes the declared entry point; the rest are plain actions.
        for event in &process.intermediate_catch_events {
            let kind = if index.start_step_id.is_none() {
                StepKind::Start
            } else {
                StepKind::Action
            };
            let step_id = derived_step_id(kind, version, &event.id);
            if kind == StepKind::Start {
                index.start_step_id = Some(step_id.clone());
            }
            index.map.insert(event.id.clone(), step_id);
        }

        for task in chain!(
            &process.service_tasks,
            &process.user_tasks,
            &process.manual_tasks,
            &process.script_tasks,
            &process.send_tasks,
            &process.tasks,
            &process.intermediate_throw_events,
        ) {
            index.map.insert(
                task.id.clone(),
                derived_step_id(StepKind::Action, version, &task.id),
            );
        }

        for end in &process.end_events {
            index.map.insert(
                end.id.clone(),
                derived_step_id(StepKind::End, version, &end.id),
            );
        }

        for gateway in &process.exclusive_gateways {
            let kind = match gateway.outgoing.len() {
                2 => StepKind::IfCondition,
                n if n > 2 => StepKind::SwitchCondition,
                n => {
                    log::error!(
                        "exclusive gateway {} has unexpected number of outgoing flows: {}",
                        gateway.id,
                        n
                    );
                    continue;
                }
            };
            index
                .map
                .insert(gateway.id.clone(), derived_step_id(kind, version, &gateway.id));
        }

        for gateway in chain!(&process.parallel_gateways, &process.inclusive_gateways) {
            index.map.insert(
                gateway.id.clone(),
                derived_step_id(StepKind::Parallel, version, &gateway.id),
            );
        }

        index
    }

    pub(super) fn step_id(&self, element_id: &str) -> Option<&str> {
        self.map.get(element_id).map(String::as_str)
    }

    pub(super) fn start_step_id(&self) -> Option<&str> {
        self.start_step_id.as_deref()
    }
}
