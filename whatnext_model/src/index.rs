// One-hop move index: "which moves can I start from this pose?"
//
// `MoveIndex::build` walks every pairing of every input move and files the
// move under the pairing's start pose. End poses are not indexed, so there
// is no "what leads into this pose" query. Keys are `PoseId` handles: two
// separately registered poses with identical names and properties are
// different keys.
//
// The index is a one-time materialization. It copies handles out of the
// registry at build time and keeps no reference to it. `Move` has no
// mutators, so the only way to change a move's pairings is to build a
// new registry, and an index built earlier keeps its old answers.
//
// Storage is `BTreeMap<PoseId, BTreeSet<MoveId>>` so iteration order is
// deterministic. Query results are ordered by handle (registration order);
// `next_sorted_by_name` gives a name ordering for display.
//
// See also: `registry.rs` for handle issue, `moves.rs` for `Pairing`.

use crate::moves::Move;
use crate::registry::Registry;
use crate::types::{MoveId, PoseId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

static NO_MOVES: BTreeSet<MoveId> = BTreeSet::new();

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveIndex {
    /// The source collection, in input order.
    moves: Vec<MoveId>,
    index: BTreeMap<PoseId, BTreeSet<MoveId>>,
}

impl MoveIndex {
    /// Build the index over `moves`, resolving each handle in `registry`.
    ///
    /// Handles that do not resolve are skipped with a warning. Moves with no
    /// pairings are kept in the source collection but never indexed.
    pub fn build(registry: &Registry, moves: impl IntoIterator<Item = MoveId>) -> Self {
        let moves: Vec<MoveId> = moves.into_iter().collect();
        let mut index: BTreeMap<PoseId, BTreeSet<MoveId>> = BTreeMap::new();

        for &move_id in &moves {
            let Some(mv) = registry.move_(move_id) else {
                warn!(%move_id, "move handle not in registry, skipping");
                continue;
            };
            if mv.is_inert() {
                warn!(
                    name = mv.name(),
                    "move has no pose pairings and will never be suggested"
                );
                continue;
            }
            for start in mv.start_poses() {
                index.entry(start).or_default().insert(move_id);
            }
        }

        debug!(
            moves = moves.len(),
            start_poses = index.len(),
            "built move index"
        );
        Self { moves, index }
    }

    /// Moves that can start from `pose`. Empty for a pose that no indexed
    /// move starts from, including poses the index has never seen.
    pub fn next(&self, pose: PoseId) -> &BTreeSet<MoveId> {
        self.index.get(&pose).unwrap_or(&NO_MOVES)
    }

    /// `next`, resolved against `registry` and ordered by move name, with
    /// the handle breaking ties between equally named moves.
    pub fn next_sorted_by_name<'r>(
        &self,
        registry: &'r Registry,
        pose: PoseId,
    ) -> Vec<(MoveId, &'r Move)> {
        let mut found: Vec<(MoveId, &Move)> = self
            .next(pose)
            .iter()
            .filter_map(|&id| registry.move_(id).map(|m| (id, m)))
            .collect();
        found.sort_by(|a, b| a.1.name().cmp(b.1.name()).then(a.0.cmp(&b.0)));
        found
    }

    /// The move handles the index was built from, in input order.
    pub fn moves(&self) -> &[MoveId] {
        &self.moves
    }

    /// Poses with at least one outgoing move.
    pub fn indexed_poses(&self) -> impl Iterator<Item = PoseId> + '_ {
        self.index.keys().copied()
    }
}
