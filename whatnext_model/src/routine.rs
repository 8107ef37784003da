// Routines: ordered, append-only sequences of moves.
//
// A routine records choreography; it does not check that one move's end
// pose can start the next move.

use crate::types::MoveId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    moves: Vec<MoveId>,
}

impl Routine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move. Returns `self` so calls can be chained.
    pub fn add(&mut self, move_id: MoveId) -> &mut Self {
        self.moves.push(move_id);
        self
    }

    pub fn moves(&self) -> &[MoveId] {
        &self.moves
    }

    pub fn iter(&self) -> impl Iterator<Item = MoveId> + '_ {
        self.moves.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl FromIterator<MoveId> for Routine {
    fn from_iter<I: IntoIterator<Item = MoveId>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}
