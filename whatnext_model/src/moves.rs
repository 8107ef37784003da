// Moves: named transition techniques, each valid for one or more
// (start pose, end pose) pairings.
//
// Pairings refer to poses by `PoseId`, so a move only makes sense alongside
// the `Registry` that issued those handles. A move with no pairings is legal
// but inert: the index never returns it.

use crate::types::PoseId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One valid way to perform a move: the pose it starts from and the pose
/// it ends in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pairing {
    pub start: PoseId,
    pub end: PoseId,
}

impl Pairing {
    pub const fn new(start: PoseId, end: PoseId) -> Self {
        Self { start, end }
    }
}

/// A named dance transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    name: String,
    pairings: Vec<Pairing>,
}

impl Move {
    pub fn new(name: impl Into<String>, pairings: impl IntoIterator<Item = Pairing>) -> Self {
        Self {
            name: name.into(),
            pairings: pairings.into_iter().collect(),
        }
    }

    /// A move with a fresh, empty pairing list.
    pub fn without_pairings(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pairings: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pairings in declaration order.
    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    /// Start pose of every pairing, repeats included.
    pub fn start_poses(&self) -> impl Iterator<Item = PoseId> + '_ {
        self.pairings.iter().map(|p| p.start)
    }

    /// True if the move has no pairings and so can never be suggested.
    pub fn is_inert(&self) -> bool {
        self.pairings.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
