// Data-driven dance catalog for the `whatnext` move index.
//
// A `DanceCatalog` bundles everything the program knows about one dance
// style: the `Registry` of poses and moves, the string keys that name them,
// the named routines, and the `MoveIndex` built over the indexed moves. It is
// built once at startup and passed explicitly to whatever needs it.
//
// Architecture:
// - `builder.rs`: `CatalogBuilder` — setup-time registration and key checks.
// - `demo.rs`:    text rendering of "what can I do from X?" reports.
// - `error.rs`:   `CatalogError`.
// - `lib.rs` (this file): `DanceCatalog`, the JSON file format, and
//   `default_catalog()`.
//
// The salsa catalog is loaded from `data/salsa_catalog.json` via
// `DanceCatalog::from_json()` (JSON string in, typed struct out).
// `default_catalog()` embeds that file at compile time with `include_str!`.
//
// Property lists in catalog files are loaded through the strict
// `Pose::try_add_property`, so a tag listed twice is a load error.

pub mod builder;
pub mod demo;
pub mod error;

pub use builder::CatalogBuilder;
pub use error::{CatalogError, CatalogResult, KeyKind};

use serde::Deserialize;
use std::collections::BTreeMap;
use whatnext_model::{
    Move, MoveId, MoveIndex, Pairing, Pose, PoseId, PoseProperty, Registry, Routine,
};

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

/// The top-level JSON structure for a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    poses: Vec<PoseEntry>,
    #[serde(default)]
    aliases: Vec<AliasEntry>,
    moves: Vec<MoveEntry>,
    #[serde(default)]
    routines: Vec<RoutineEntry>,
}

#[derive(Debug, Deserialize)]
struct PoseEntry {
    key: String,
    name: String,
    #[serde(default)]
    properties: Vec<PoseProperty>,
}

#[derive(Debug, Deserialize)]
struct AliasEntry {
    alias: String,
    pose: String,
}

#[derive(Debug, Deserialize)]
struct MoveEntry {
    key: String,
    name: String,
    /// `[start_key, end_key]` pairs.
    #[serde(default)]
    pairings: Vec<(String, String)>,
    #[serde(default = "default_true")]
    indexed: bool,
}

#[derive(Debug, Deserialize)]
struct RoutineEntry {
    key: String,
    name: String,
    #[serde(default)]
    moves: Vec<String>,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A routine together with its display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogRoutine {
    pub name: String,
    pub routine: Routine,
}

/// Immutable, fully indexed set of poses, moves and routines.
#[derive(Clone, Debug)]
pub struct DanceCatalog {
    registry: Registry,
    pose_keys: BTreeMap<String, PoseId>,
    move_keys: BTreeMap<String, MoveId>,
    /// Routines in declaration order.
    routines: Vec<(String, CatalogRoutine)>,
    index: MoveIndex,
}

impl DanceCatalog {
    /// Parse and build a catalog from a JSON string.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut builder = CatalogBuilder::new();

        for entry in file.poses {
            let mut pose = Pose::new(entry.name);
            for property in entry.properties {
                pose.try_add_property(property)?;
            }
            builder.add_pose(entry.key, pose)?;
        }

        for entry in file.aliases {
            builder.alias_pose(entry.alias, &entry.pose)?;
        }

        for entry in file.moves {
            let context = format!("move '{}'", entry.key);
            let pairings = entry
                .pairings
                .iter()
                .map(|(start, end)| {
                    Ok(Pairing::new(
                        resolve_pose(&builder, &context, start)?,
                        resolve_pose(&builder, &context, end)?,
                    ))
                })
                .collect::<CatalogResult<Vec<Pairing>>>()?;
            builder.add_move(entry.key.clone(), Move::new(entry.name, pairings))?;
            if !entry.indexed {
                builder.exclude_from_index(&entry.key)?;
            }
        }

        for entry in file.routines {
            let context = format!("routine '{}'", entry.key);
            let mut routine = Routine::new();
            for key in &entry.moves {
                let id = builder
                    .move_id(key)
                    .ok_or_else(|| CatalogError::UnknownMove {
                        context: context.clone(),
                        key: key.clone(),
                    })?;
                routine.add(id);
            }
            builder.add_routine(entry.key, entry.name, routine)?;
        }

        Ok(builder.build())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn index(&self) -> &MoveIndex {
        &self.index
    }

    pub fn pose_id(&self, key: &str) -> Option<PoseId> {
        self.pose_keys.get(key).copied()
    }

    pub fn move_id(&self, key: &str) -> Option<MoveId> {
        self.move_keys.get(key).copied()
    }

    pub fn pose(&self, key: &str) -> Option<&Pose> {
        self.registry.pose(self.pose_id(key)?)
    }

    pub fn move_(&self, key: &str) -> Option<&Move> {
        self.registry.move_(self.move_id(key)?)
    }

    /// Pose keys in sorted order, aliases included.
    pub fn pose_keys(&self) -> impl Iterator<Item = &str> {
        self.pose_keys.keys().map(String::as_str)
    }

    pub fn routine(&self, key: &str) -> Option<&CatalogRoutine> {
        self.routines.iter().find(|(k, _)| k == key).map(|(_, r)| r)
    }

    /// Routines in declaration order, with their keys.
    pub fn routines(&self) -> impl Iterator<Item = (&str, &CatalogRoutine)> {
        self.routines.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Moves that can start from the pose named `key`, ordered by name.
    ///
    /// Unlike `MoveIndex::next`, an unknown key is an error here: a typo in
    /// a key is never a pose with no moves.
    pub fn next(&self, key: &str) -> CatalogResult<Vec<&Move>> {
        let pose = self.pose_id(key).ok_or_else(|| CatalogError::UnknownPose {
            context: "query".to_string(),
            key: key.to_string(),
        })?;
        Ok(self.next_for(pose))
    }

    /// Moves that can start from `pose`, ordered by name. Total over all
    /// handles.
    pub fn next_for(&self, pose: PoseId) -> Vec<&Move> {
        self.index
            .next_sorted_by_name(&self.registry, pose)
            .into_iter()
            .map(|(_, m)| m)
            .collect()
    }

    /// The moves of a routine, resolved, in routine order.
    pub fn routine_moves(&self, key: &str) -> CatalogResult<Vec<&Move>> {
        let entry = self
            .routine(key)
            .ok_or_else(|| CatalogError::UnknownRoutine {
                key: key.to_string(),
            })?;
        Ok(entry
            .routine
            .iter()
            .filter_map(|id| self.registry.move_(id))
            .collect())
    }
}

fn resolve_pose(builder: &CatalogBuilder, context: &str, key: &str) -> CatalogResult<PoseId> {
    builder
        .pose_id(key)
        .ok_or_else(|| CatalogError::UnknownPose {
            context: context.to_string(),
            key: key.to_string(),
        })
}

/// The bundled salsa poses, moves and routines, built into the binary from
/// `data/salsa_catalog.json`.
///
/// The `default_catalog_loads` test keeps the bundled file loadable, so a
/// failure here means a bad edit to that file slipped past the tests.
pub fn default_catalog() -> DanceCatalog {
    let json = include_str!("../../data/salsa_catalog.json");
    DanceCatalog::from_json(json).expect("bundled salsa catalog failed to load")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "poses": [
            {"key": "open", "name": "Open Position", "properties": ["facing_each_other"]},
            {"key": "closed", "name": "Closed Position"},
            {"key": "half_open", "name": "Half Open Left To Right"}
        ],
        "moves": [
            {"key": "scoop", "name": "Scoop", "pairings": [["half_open", "closed"]]},
            {"key": "cbl", "name": "Cross Body Lead",
             "pairings": [["closed", "closed"], ["closed", "open"]]}
        ]
    }"#;

    fn names<'a>(moves: &[&'a Move]) -> Vec<&'a str> {
        moves.iter().map(|m| m.name()).collect()
    }

    #[test]
    fn from_json_builds_index() {
        let catalog = DanceCatalog::from_json(SMALL).unwrap();
        assert_eq!(
            names(&catalog.next("closed").unwrap()),
            vec!["Cross Body Lead"]
        );
        assert_eq!(names(&catalog.next("half_open").unwrap()), vec!["Scoop"]);
        assert!(catalog.next("open").unwrap().is_empty());
        assert_eq!(catalog.routines().count(), 0);
    }

    #[test]
    fn unknown_query_key_is_an_error() {
        let catalog = DanceCatalog::from_json(SMALL).unwrap();
        assert!(matches!(
            catalog.next("hammerlock"),
            Err(CatalogError::UnknownPose { .. })
        ));
    }

    #[test]
    fn pairing_with_unknown_pose_fails_to_load() {
        let json = r#"{
            "poses": [{"key": "open", "name": "Open Position"}],
            "moves": [{"key": "m", "name": "M", "pairings": [["open", "nowhere"]]}]
        }"#;
        let err = DanceCatalog::from_json(json).unwrap_err();
        match err {
            CatalogError::UnknownPose { context, key } => {
                assert_eq!(context, "move 'm'");
                assert_eq!(key, "nowhere");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn routine_with_unknown_move_fails_to_load() {
        let json = r#"{
            "poses": [],
            "moves": [],
            "routines": [{"key": "r", "name": "R", "moves": ["enchufla"]}]
        }"#;
        assert!(matches!(
            DanceCatalog::from_json(json),
            Err(CatalogError::UnknownMove { .. })
        ));
    }

    #[test]
    fn duplicate_property_fails_to_load() {
        let json = r#"{
            "poses": [{"key": "p", "name": "P", "properties": ["right_to_left", "right_to_left"]}],
            "moves": []
        }"#;
        assert!(matches!(DanceCatalog::from_json(json), Err(CatalogError::Model(_))));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            DanceCatalog::from_json("{\"poses\": ["),
            Err(CatalogError::Json(_))
        ));
        let bad_property = r#"{
            "poses": [{"key": "p", "name": "P", "properties": ["moonwalk"]}],
            "moves": []
        }"#;
        assert!(matches!(
            DanceCatalog::from_json(bad_property),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn move_without_pairings_loads_and_is_inert() {
        let json = r#"{
            "poses": [{"key": "open", "name": "Open Position"}],
            "moves": [{"key": "booty_roll", "name": "Booty Roll"}]
        }"#;
        let catalog = DanceCatalog::from_json(json).unwrap();
        assert!(catalog.move_("booty_roll").unwrap().is_inert());
        assert!(catalog.next("open").unwrap().is_empty());
    }

    #[test]
    fn default_catalog_loads() {
        let catalog = default_catalog();
        assert_eq!(catalog.registry().pose_count(), 7);
        assert_eq!(catalog.registry().move_count(), 16);
        assert_eq!(catalog.routines().count(), 3);
        assert_eq!(catalog.index().moves().len(), 13);
    }

    #[test]
    fn default_catalog_pose_data() {
        let catalog = default_catalog();
        let handshake = catalog.pose("handshake").unwrap();
        assert_eq!(handshake.name(), "handshake");
        assert_eq!(handshake.properties(), &[PoseProperty::RightToRight]);
        let hammerlock = catalog.pose("hammerlock").unwrap();
        assert_eq!(
            hammerlock.properties(),
            &[PoseProperty::RightToLeft, PoseProperty::LeftToRight]
        );
    }

    #[test]
    fn default_catalog_alias() {
        let catalog = default_catalog();
        assert_eq!(
            catalog.pose_id("parallel_handhold"),
            catalog.pose_id("open_position")
        );
        assert_eq!(
            names(&catalog.next("parallel_handhold").unwrap()),
            names(&catalog.next("open_position").unwrap())
        );
    }

    #[test]
    fn default_catalog_routines_preserve_order() {
        let catalog = default_catalog();
        let keys: Vec<&str> = catalog.routines().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "follower_right_turn_to_cbl",
                "challenge",
                "nieves_2022_06_20",
            ]
        );
        let moves = catalog.routine_moves("follower_right_turn_to_cbl").unwrap();
        assert_eq!(
            names(&moves),
            vec!["Follower Right Turn", "Scoop", "Cross Body Lead"]
        );
        assert!(catalog.routine_moves("jun_17").is_err());
    }
}
