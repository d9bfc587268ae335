//! Prelude module for convenient imports.
//!
//! Re-exports the types needed for the common parse-then-convert workflow.

pub use crate::bpmn::{
    BpmnDefinitions, BpmnEndEvent, BpmnGateway, BpmnProcess, BpmnSequenceFlow, BpmnStartEvent,
    BpmnTask, read_bpmn,
};
pub use crate::cacao::{Command, CommandKind, Playbook, SpecVersion, Step, StepKind};
pub use crate::convert::Converter;
pub use crate::error::{ConvertError, ParseError, UnknownSpecVersion};
