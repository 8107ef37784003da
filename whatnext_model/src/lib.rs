// whatnext_model — partner-dance pose/move data model and move index.
//
// Answers "what moves can I do from pose X?" with a one-hop lookup. There is
// no path search over several moves and no I/O; the catalog crate
// (`whatnext_catalog`) loads the salsa data and drives this one.
//
// Module overview:
// - `types.rs`:    `PoseProperty` tag enum, `PoseId` / `MoveId` handles.
// - `pose.rs`:     `Pose` — a named hold configuration with property tags.
// - `moves.rs`:    `Move` + `Pairing` — a named transition, valid from/to
//                  several (start, end) pose pairs.
// - `routine.rs`:  `Routine` — an ordered, append-only list of moves.
// - `registry.rs`: `Registry` — arena owning poses and moves; issues handles.
// - `index.rs`:    `MoveIndex` — start pose -> set of moves.
// - `error.rs`:    `ModelError`.
//
// **Identity constraint.** A pose is identified by the `PoseId` it was given
// when registered, not by its name or properties. Reusing one pose under two
// names means reusing its handle. Registering an identical pose twice creates
// two unrelated index keys.

pub mod error;
pub mod index;
pub mod moves;
pub mod pose;
pub mod registry;
pub mod routine;
pub mod types;

pub use error::{ModelError, ModelResult};
pub use index::MoveIndex;
pub use moves::{Move, Pairing};
pub use pose::Pose;
pub use registry::Registry;
pub use routine::Routine;
pub use types::{MoveId, PoseId, PoseProperty};
