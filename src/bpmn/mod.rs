//! Data model for BPMN 2.0 process definitions.
//!
//! Only the flow elements the conversion consumes are modeled. Diagram
//! interchange, boundary events, timers, and sub-processes are ignored by
//! the parser. Element names also match with a `bpmn:` prefix so exports
//! from common modelers deserialize without preprocessing.

mod parse;

pub use parse::read_bpmn;

use serde::Deserialize;

/// Root element of a BPMN 2.0 XML document.
///
/// See <http://www.omg.org/spec/BPMN/2.0/>
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BpmnDefinitions {
    #[serde(rename = "process", alias = "bpmn:process", default)]
    pub processes: Vec<BpmnProcess>,
}

/// A BPMN 2.0 process: typed collections of flow nodes plus the sequence
/// flows connecting them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BpmnProcess {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "startEvent", alias = "bpmn:startEvent")]
    pub start_event: Option<BpmnStartEvent>,
    #[serde(rename = "serviceTask", alias = "bpmn:serviceTask", default)]
    pub service_tasks: Vec<BpmnTask>,
    #[serde(rename = "userTask", alias = "bpmn:userTask", default)]
    pub user_tasks: Vec<BpmnTask>,
    #[serde(rename = "manualTask", alias = "bpmn:manualTask", default)]
    pub manual_tasks: Vec<BpmnTask>,
    #[serde(rename = "scriptTask", alias = "bpmn:scriptTask", default)]
    pub script_tasks: Vec<BpmnTask>,
    #[serde(rename = "sendTask", alias = "bpmn:sendTask", default)]
    pub send_tasks: Vec<BpmnTask>,
    #[serde(rename = "task", alias = "bpmn:task", default)]
    pub tasks: Vec<BpmnTask>,
    #[serde(
        rename = "intermediateThrowEvent",
        alias = "bpmn:intermediateThrowEvent",
        default
    )]
    pub intermediate_throw_events: Vec<BpmnTask>,
    #[serde(
        rename = "intermediateCatchEvent",
        alias = "bpmn:intermediateCatchEvent",
        default
    )]
    pub intermediate_catch_events: Vec<BpmnTask>,
    #[serde(rename = "exclusiveGateway", alias = "bpmn:exclusiveGateway", default)]
    pub exclusive_gateways: Vec<BpmnGateway>,
    #[serde(rename = "inclusiveGateway", alias = "bpmn:inclusiveGateway", default)]
    pub inclusive_gateways: Vec<BpmnGateway>,
    #[serde(rename = "parallelGateway", alias = "bpmn:parallelGateway", default)]
    pub parallel_gateways: Vec<BpmnGateway>,
    #[serde(rename = "endEvent", alias = "bpmn:endEvent", default)]
    pub end_events: Vec<BpmnEndEvent>,
    #[serde(rename = "sequenceFlow", alias = "bpmn:sequenceFlow", default)]
    pub sequence_flows: Vec<BpmnSequenceFlow>,
}

/// A BPMN 2.0 start event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BpmnStartEvent {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
}

/// A task-like BPMN 2.0 element. All task sub-kinds, plus intermediate
/// throw and catch events, carry this shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BpmnTask {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "documentation", alias = "bpmn:documentation", default)]
    pub documentation: String,
}

/// A BPMN 2.0 gateway with its ordered list of outgoing flow references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BpmnGateway {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "outgoing", alias = "bpmn:outgoing", default)]
    pub outgoing: Vec<String>,
}

/// A BPMN 2.0 end event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BpmnEndEvent {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
}

/// A BPMN 2.0 sequence flow, the directed edge between two flow nodes.
/// The optional `name` is the writing on the edge, used to tell branches
/// of a gateway apart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BpmnSequenceFlow {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@sourceRef", default)]
    pub source_ref: String,
    #[serde(rename = "@targetRef", default)]
    pub target_ref: String,
    #[serde(rename = "@name", default)]
    pub name: String,
}
