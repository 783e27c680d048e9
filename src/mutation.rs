//! The mutation record handed to every downstream consumer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder written for the empty side of a pure insertion or deletion.
pub const GAP: &str = "-";

/// How a span of the reference was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    Replace,
    Deletion,
    Insertion,
}

impl MutationKind {
    /// Column value used in typed CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            MutationKind::Replace => "Replace",
            MutationKind::Deletion => "Deletion",
            MutationKind::Insertion => "Insertion",
        }
    }
}

/// One difference between the reference and the mutated sequence.
///
/// `position` is 1-based into the reference. `original` and `mutated` hold
/// the affected spans; exactly one of them is [`GAP`] for a pure insertion
/// or deletion, never both. A run of alignment produces records in strictly
/// increasing `position` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRecord {
    pub position: usize,
    pub original: String,
    pub mutated: String,
    pub kind: MutationKind,
}

impl MutationRecord {
    pub fn replace(position: usize, original: String, mutated: String) -> Self {
        MutationRecord { position, original, mutated, kind: MutationKind::Replace }
    }

    pub fn deletion(position: usize, original: String) -> Self {
        MutationRecord { position, original, mutated: GAP.to_string(), kind: MutationKind::Deletion }
    }

    pub fn insertion(position: usize, mutated: String) -> Self {
        MutationRecord { position, original: GAP.to_string(), mutated, kind: MutationKind::Insertion }
    }
}

impl fmt::Display for MutationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position {}: {} -> {}", self.position, self.original, self.mutated)
    }
}
