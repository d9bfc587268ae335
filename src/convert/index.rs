//! Transition lookup keyed by source element and branch discriminator.

use std::fmt;

use ahash::AHashMap;

use crate::bpmn::BpmnSequenceFlow;

/// Distinguishes one outgoing transition from a node among its siblings:
/// the upper-cased edge label when present, otherwise a zero-based position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Discriminator {
    Label(String),
    Position(usize),
}

impl Discriminator {
    /// Builds a label discriminator, upper-casing so that lookups are
    /// case-insensitive.
    pub fn label(text: &str) -> Self {
        Discriminator::Label(text.to_uppercase())
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discriminator::Label(label) => f.write_str(label),
            Discriminator::Position(position) => write!(f, "{}", position),
        }
    }
}

/// Maps a source element id and a [`Discriminator`] to the target element id
/// of the matching sequence flow.
///
/// The key is structured rather than a joined string, so element ids that
/// contain a separator character can never collide with a labeled branch.
#[derive(Debug, Default)]
pub struct TransitionIndex {
    map: AHashMap<String, AHashMap<Discriminator, String>>,
}

impl TransitionIndex {
    pub fn build(flows: &[BpmnSequenceFlow]) -> Self {
        let mut map: AHashMap<String, AHashMap<Discriminator, String>> = AHashMap::new();
        for flow in flows {
            let branches = map.entry(flow.source_ref.clone()).or_default();
            let discriminator = if flow.name.is_empty() {
                // Probe ascending positions so unlabeled flows never
                // overwrite each other, even mixed with labeled ones.
                let mut position = 0;
                while branches.contains_key(&Discriminator::Position(position)) {
                    position += 1;
                }
                Discriminator::Position(position)
            } else {
                Discriminator::label(&flow.name)
            };
            branches.insert(discriminator, flow.target_ref.clone());
        }
        Self { map }
    }

    /// Looks up the element reached from `source` over the transition
    /// identified by `discriminator`.
    pub fn target(&self, source: &str, discriminator: &Discriminator) -> Option<&str> {
        self.map
            .get(source)?
            .get(discriminator)
            .map(String::as_str)
    }

    /// Iterates over every indexed branch leaving `source`, in no
    /// particular order.
    pub fn branches_from<'a>(
        &'a self,
        source: &str,
    ) -> impl Iterator<Item = (&'a Discriminator, &'a str)> {
        self.map
            .get(source)
            .into_iter()
            .flat_map(|branches| branches.iter().map(|(d, t)| (d, t.as_str())))
    }
}
