//! Shared fixtures for building BPMN process graphs in tests.
use bpmn_cacao::prelude::*;

#[allow(dead_code)]
pub fn definitions(process: BpmnProcess) -> BpmnDefinitions {
    BpmnDefinitions {
        processes: vec![process],
    }
}

#[allow(dead_code)]
pub fn start_event(id: &str, name: &str) -> BpmnStartEvent {
    BpmnStartEvent {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[allow(dead_code)]
pub fn task(id: &str, name: &str) -> BpmnTask {
    BpmnTask {
        id: id.to_string(),
        name: name.to_string(),
        documentation: String::new(),
    }
}

#[allow(dead_code)]
pub fn end_event(id: &str) -> BpmnEndEvent {
    BpmnEndEvent {
        id: id.to_string(),
        name: String::new(),
    }
}

/// A gateway with `outgoing` placeholder flow references; only the count
/// matters to the lowering.
#[allow(dead_code)]
pub fn gateway(id: &str, name: &str, outgoing: usize) -> BpmnGateway {
    BpmnGateway {
        id: id.to_string(),
        name: name.to_string(),
        outgoing: (0..outgoing).map(|i| format!("{}-out-{}", id, i)).collect(),
    }
}

#[allow(dead_code)]
pub fn flow(source: &str, target: &str) -> BpmnSequenceFlow {
    labeled_flow(source, target, "")
}

#[allow(dead_code)]
pub fn labeled_flow(source: &str, target: &str, label: &str) -> BpmnSequenceFlow {
    BpmnSequenceFlow {
        id: format!("flow-{}-{}", source, target),
        source_ref: source.to_string(),
        target_ref: target.to_string(),
        name: label.to_string(),
    }
}

/// start -> "Check" (service task) -> "Approved?" gateway, Yes -> task A,
/// No -> task B. Tasks A and B have no outgoing flows.
#[allow(dead_code)]
pub fn approval_process() -> BpmnProcess {
    BpmnProcess {
        id: "Process_Approval".to_string(),
        name: "Approval".to_string(),
        start_event: Some(start_event("Start_1", "Begin")),
        service_tasks: vec![task("Check_1", "Check")],
        user_tasks: vec![task("TaskA_1", "Escalate"), task("TaskB_1", "Dismiss")],
        exclusive_gateways: vec![gateway("Gateway_1", "Approved?", 2)],
        sequence_flows: vec![
            flow("Start_1", "Check_1"),
            flow("Check_1", "Gateway_1"),
            labeled_flow("Gateway_1", "TaskA_1", "Yes"),
            labeled_flow("Gateway_1", "TaskB_1", "No"),
        ],
        ..BpmnProcess::default()
    }
}

/// start -> task -> end, with every edge resolving.
#[allow(dead_code)]
pub fn closed_process() -> BpmnProcess {
    BpmnProcess {
        id: "Process_Closed".to_string(),
        name: "Closed".to_string(),
        start_event: Some(start_event("Start_1", "Begin")),
        service_tasks: vec![task("Task_1", "Collect logs")],
        end_events: vec![end_event("End_1")],
        sequence_flows: vec![flow("Start_1", "Task_1"), flow("Task_1", "End_1")],
        ..BpmnProcess::default()
    }
}
