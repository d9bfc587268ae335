use thiserror::Error;

/// Errors that can occur while reading BPMN XML input.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to parse BPMN XML: {0}")]
    Xml(#[from] quick_xml::de::DeError),
}

/// Errors that can occur while lowering a BPMN document into a playbook.
///
/// A document without exactly one process is the only fatal condition; every
/// other irregularity in the input is absorbed by synthesis or omission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unexpected number of process definitions: {0}")]
    UnexpectedProcessCount(usize),
}

/// Raised when a spec version string is neither `1.1` nor `2.0`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized CACAO spec version '{0}', expected '1.1' or '2.0'")]
pub struct UnknownSpecVersion(pub String);
