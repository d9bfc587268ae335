//! Data model for CACAO security playbooks.
//!
//! Only the subset of the CACAO document model that the BPMN conversion
//! produces is represented here. Property names and omit-when-empty
//! behavior follow the CACAO JSON serialization for both supported spec
//! revisions. Serialized mappings use `BTreeMap` so a playbook always
//! renders with a stable key order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::error::UnknownSpecVersion;

/// The two CACAO spec revisions this crate can emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpecVersion {
    /// CACAO 1.1, where every workflow step carries the outer tag `step`.
    #[default]
    V1_1,
    /// CACAO 2.0, with distinct outer tags per step kind.
    V2_0,
}

impl SpecVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecVersion::V1_1 => "1.1",
            SpecVersion::V2_0 => "2.0",
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecVersion {
    type Err = UnknownSpecVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.1" => Ok(SpecVersion::V1_1),
            "2.0" => Ok(SpecVersion::V2_0),
            other => Err(UnknownSpecVersion(other.to_string())),
        }
    }
}

impl Serialize for SpecVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Semantic workflow step kinds, shared by both spec revisions.
///
/// The two revisions disagree on vocabulary in two places, so every
/// derivation site must go through the same pair of tables: [`outer_tag`]
/// names the prefix of the step's workflow key, [`record_tag`] names the
/// value of the step record's `type` property.
///
/// [`outer_tag`]: StepKind::outer_tag
/// [`record_tag`]: StepKind::record_tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Start,
    End,
    Action,
    IfCondition,
    SwitchCondition,
    Parallel,
}

impl StepKind {
    /// Tag used in the `<kind>--<uuid>` workflow key. CACAO 1.1 collapses
    /// every kind to `step`; 2.0 keeps them distinct.
    pub fn outer_tag(self, version: SpecVersion) -> &'static str {
        if version == SpecVersion::V1_1 {
            return "step";
        }
        match self {
            StepKind::Start => "start",
            StepKind::End => "end",
            StepKind::Action => "action",
            StepKind::IfCondition => "if-condition",
            StepKind::SwitchCondition => "switch-condition",
            StepKind::Parallel => "parallel",
        }
    }

    /// Tag recorded in the step record's `type` property. Only action steps
    /// differ between revisions: `single` in 1.1, `action` in 2.0.
    pub fn record_tag(self, version: SpecVersion) -> &'static str {
        match self {
            StepKind::Action if version == SpecVersion::V1_1 => "single",
            StepKind::Action => "action",
            StepKind::Start => "start",
            StepKind::End => "end",
            StepKind::IfCondition => "if-condition",
            StepKind::SwitchCondition => "switch-condition",
            StepKind::Parallel => "parallel",
        }
    }
}

/// Payload kinds for action step commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    Manual,
    Bash,
    HttpApi,
}

/// A CACAO playbook: the envelope plus the workflow step graph it owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playbook {
    #[serde(rename = "type")]
    pub kind: String,
    pub spec_version: SpecVersion,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_by: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub revoked: bool,
    pub priority: i32,
    pub severity: i32,
    pub impact: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_references: Vec<ExternalReference>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub playbook_variables: BTreeMap<String, PlaybookVariable>,
    pub workflow_start: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub workflow_exception: String,
    pub workflow: BTreeMap<String, Step>,
}

impl Playbook {
    /// Creates an empty playbook envelope stamped with the current time.
    pub fn new(version: SpecVersion, id: String, name: String, workflow_start: String) -> Self {
        let now = Utc::now();
        Self {
            kind: "playbook".to_string(),
            spec_version: version,
            id,
            name,
            description: String::new(),
            created_by: String::new(),
            created: now,
            modified: now,
            revoked: false,
            priority: 0,
            severity: 0,
            impact: 0,
            labels: Vec::new(),
            external_references: Vec::new(),
            playbook_variables: BTreeMap::new(),
            workflow_start,
            workflow_exception: String::new(),
            workflow: BTreeMap::new(),
        }
    }
}

/// An external reference embedded in a playbook envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExternalReference {
    pub name: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub hash: String,
    pub external_id: String,
}

/// A variable declared in the envelope and referenced by condition steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaybookVariable {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub value: String,
    pub constant: bool,
}

/// One step in the workflow graph.
///
/// A single struct covers every step kind; which successor fields are
/// populated depends on the `type` tag. Unused fields are omitted from the
/// serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Step {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_completion: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_true: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_false: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub switch: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub cases: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<Command>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub in_args: Vec<String>,
}

/// A command carried by an action step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    #[serde(rename = "type")]
    pub kind: CommandKind,
    pub command: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}
