//! BPMN 2.0 XML parsing via quick-xml's serde integration.

use crate::bpmn::BpmnDefinitions;
use crate::error::ParseError;

/// Reads a BPMN 2.0 XML document into [`BpmnDefinitions`].
pub fn read_bpmn(xml: &str) -> Result<BpmnDefinitions, ParseError> {
    Ok(quick_xml::de::from_str(xml)?)
}
