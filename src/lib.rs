//! # bpmn-cacao — BPMN 2.0 to CACAO playbook conversion
//!
//! Converts business processes modeled as BPMN 2.0 XML into CACAO security
//! playbooks (spec revision 1.1 or 2.0). BPMN gateways become the typed
//! branch constructs of the target notation (if-condition, switch-condition,
//! parallel), tasks become action steps carrying a command payload, and
//! structure the source never spelled out — end markers for dangling edges,
//! boolean condition variables for gateways — is synthesized.
//!
//! Step identifiers are content-derived (name-based UUIDs over the BPMN
//! element ids), so converting the same diagram twice yields the same
//! playbook graph and re-runs diff cleanly.
//!
//! ## Quick Start
//!
//! ```rust
//! use bpmn_cacao::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let xml = r#"
//!         <definitions xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL">
//!           <process id="Process_1" name="Demo">
//!             <startEvent id="Start_1" name="Begin"/>
//!             <serviceTask id="Task_1" name="Collect logs"/>
//!             <endEvent id="End_1"/>
//!             <sequenceFlow id="Flow_1" sourceRef="Start_1" targetRef="Task_1"/>
//!             <sequenceFlow id="Flow_2" sourceRef="Task_1" targetRef="End_1"/>
//!           </process>
//!         </definitions>"#;
//!
//!     let definitions = read_bpmn(xml)?;
//!     let playbook = Converter::new(SpecVersion::V2_0).convert(&definitions)?;
//!     println!("{}", serde_json::to_string_pretty(&playbook)?);
//!     Ok(())
//! }
//! ```
//!
//! The conversion is lossy by design: the target notation cannot express
//! every BPMN construct, and the tool prefers a valid, best-effort playbook
//! over a failed conversion. Only a document without exactly one process
//! aborts.

pub mod bpmn;
pub mod cacao;
pub mod convert;
pub mod error;
pub mod prelude;
