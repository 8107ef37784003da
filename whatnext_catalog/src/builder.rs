// Setup-time construction of a `DanceCatalog`.
//
// `CatalogBuilder` owns a mutable `Registry` plus the string keys that name
// its poses, moves and routines. `build()` consumes the builder, builds the
// move index once, and returns a catalog that only hands out shared
// references. Nothing can add a property to a pose after its index exists.
//
// Keys are unique per namespace. An alias is a second pose key bound to an
// existing handle, so queries through either key hit the same index entry.

use crate::error::{CatalogError, CatalogResult, KeyKind};
use crate::{CatalogRoutine, DanceCatalog};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use whatnext_model::{Move, MoveId, MoveIndex, Pose, PoseId, Registry, Routine};

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    registry: Registry,
    pose_keys: BTreeMap<String, PoseId>,
    move_keys: BTreeMap<String, MoveId>,
    routines: Vec<(String, CatalogRoutine)>,
    unindexed: BTreeSet<MoveId>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `pose` under `key`.
    pub fn add_pose(&mut self, key: impl Into<String>, pose: Pose) -> CatalogResult<PoseId> {
        let key = key.into();
        if self.pose_keys.contains_key(&key) {
            return Err(CatalogError::DuplicateKey {
                kind: KeyKind::Pose,
                key,
            });
        }
        let id = self.registry.add_pose(pose);
        self.pose_keys.insert(key, id);
        Ok(id)
    }

    /// Bind `alias` to the pose already registered as `target`.
    pub fn alias_pose(&mut self, alias: impl Into<String>, target: &str) -> CatalogResult<PoseId> {
        let alias = alias.into();
        let id = self
            .pose_id(target)
            .ok_or_else(|| CatalogError::UnknownPose {
                context: format!("alias '{alias}'"),
                key: target.to_string(),
            })?;
        if self.pose_keys.contains_key(&alias) {
            return Err(CatalogError::DuplicateKey {
                kind: KeyKind::Pose,
                key: alias,
            });
        }
        self.pose_keys.insert(alias, id);
        Ok(id)
    }

    /// Mutable access to a pose for setup-time edits such as adding
    /// properties.
    pub fn pose_mut(&mut self, key: &str) -> Option<&mut Pose> {
        let id = self.pose_id(key)?;
        self.registry.pose_mut(id)
    }

    pub fn add_move(&mut self, key: impl Into<String>, mv: Move) -> CatalogResult<MoveId> {
        let key = key.into();
        if self.move_keys.contains_key(&key) {
            return Err(CatalogError::DuplicateKey {
                kind: KeyKind::Move,
                key,
            });
        }
        let id = self.registry.add_move(mv);
        self.move_keys.insert(key, id);
        Ok(id)
    }

    /// Keep a move out of the index. It can still appear in routines.
    pub fn exclude_from_index(&mut self, key: &str) -> CatalogResult<()> {
        let id = self.move_id(key).ok_or_else(|| CatalogError::UnknownMove {
            context: "index exclusion".to_string(),
            key: key.to_string(),
        })?;
        self.unindexed.insert(id);
        Ok(())
    }

    pub fn add_routine(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        routine: Routine,
    ) -> CatalogResult<()> {
        let key = key.into();
        if self.routines.iter().any(|(k, _)| *k == key) {
            return Err(CatalogError::DuplicateKey {
                kind: KeyKind::Routine,
                key,
            });
        }
        self.routines.push((
            key,
            CatalogRoutine {
                name: name.into(),
                routine,
            },
        ));
        Ok(())
    }

    pub fn pose_id(&self, key: &str) -> Option<PoseId> {
        self.pose_keys.get(key).copied()
    }

    pub fn move_id(&self, key: &str) -> Option<MoveId> {
        self.move_keys.get(key).copied()
    }

    /// Freeze the data and build the move index over every move not
    /// excluded with `exclude_from_index`.
    pub fn build(self) -> DanceCatalog {
        let indexed: Vec<MoveId> = self
            .registry
            .move_ids()
            .filter(|id| !self.unindexed.contains(id))
            .collect();
        let index = MoveIndex::build(&self.registry, indexed);
        debug!(
            poses = self.registry.pose_count(),
            pose_keys = self.pose_keys.len(),
            moves = self.registry.move_count(),
            unindexed = self.unindexed.len(),
            routines = self.routines.len(),
            "catalog built"
        );
        DanceCatalog {
            registry: self.registry,
            pose_keys: self.pose_keys,
            move_keys: self.move_keys,
            routines: self.routines,
            index,
        }
    }
}
