//! Stable, content-derived identifiers for workflow steps.

use uuid::Uuid;

use crate::cacao::{SpecVersion, StepKind};

/// Namespace for name-based (v5) step identifiers. Hashing a BPMN element id
/// under this namespace always yields the same UUID, which keeps re-runs of
/// a conversion diffable.
pub const CACAO_NAMESPACE: Uuid = uuid::uuid!("aa7caf3a-d55a-4e9a-b34e-056215fba56a");

/// Derives the workflow key for a step backed by a BPMN element.
pub fn derived_step_id(kind: StepKind, version: SpecVersion, source_id: &str) -> String {
    let uuid = Uuid::new_v5(&CACAO_NAMESPACE, source_id.as_bytes());
    format!("{}--{}", kind.outer_tag(version), uuid)
}

/// Derives the playbook envelope id from the BPMN process id.
pub fn playbook_id(process_id: &str) -> String {
    format!(
        "playbook--{}",
        Uuid::new_v5(&CACAO_NAMESPACE, process_id.as_bytes())
    )
}

/// Mints a workflow key for a synthesized step with no BPMN counterpart.
/// Random by necessity: there is no source id to hash.
pub fn synthesized_step_id(kind: StepKind, version: SpecVersion) -> String {
    format!("{}--{}", kind.outer_tag(version), Uuid::new_v4())
}
