// Arena that owns every pose and move and hands out their handles.
//
// Storage is two `Vec`s indexed by `PoseId`/`MoveId`, giving O(1) lookup and
// deterministic iteration. Handles are sequential and never reused, so
// registering a pose twice (even an identical one) produces two handles.
// That is how pose identity works throughout the crate.
//
// Poses are only mutable through `pose_mut`, which needs `&mut Registry`.
// Once the registry is handed to a built catalog it is only reachable by
// shared reference, which freezes it.

use crate::moves::Move;
use crate::pose::Pose;
use crate::types::{MoveId, PoseId};

#[derive(Clone, Debug, Default)]
pub struct Registry {
    poses: Vec<Pose>,
    moves: Vec<Move>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a pose and return its fresh handle.
    pub fn add_pose(&mut self, pose: Pose) -> PoseId {
        let id = PoseId(self.poses.len() as u32);
        self.poses.push(pose);
        id
    }

    /// Take ownership of a move and return its fresh handle.
    pub fn add_move(&mut self, mv: Move) -> MoveId {
        let id = MoveId(self.moves.len() as u32);
        self.moves.push(mv);
        id
    }

    pub fn pose(&self, id: PoseId) -> Option<&Pose> {
        self.poses.get(id.0 as usize)
    }

    pub fn pose_mut(&mut self, id: PoseId) -> Option<&mut Pose> {
        self.poses.get_mut(id.0 as usize)
    }

    /// Named with a trailing underscore because `move` is a keyword.
    pub fn move_(&self, id: MoveId) -> Option<&Move> {
        self.moves.get(id.0 as usize)
    }

    pub fn poses(&self) -> impl Iterator<Item = (PoseId, &Pose)> {
        self.poses
            .iter()
            .enumerate()
            .map(|(i, p)| (PoseId(i as u32), p))
    }

    pub fn moves(&self) -> impl Iterator<Item = (MoveId, &Move)> {
        self.moves
            .iter()
            .enumerate()
            .map(|(i, m)| (MoveId(i as u32), m))
    }

    /// Every move handle, in registration order.
    pub fn move_ids(&self) -> impl Iterator<Item = MoveId> {
        (0..self.moves.len() as u32).map(MoveId)
    }

    pub fn pose_count(&self) -> usize {
        self.poses.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Pairing;
    use crate::types::PoseProperty;

    #[test]
    fn handles_are_sequential() {
        let mut reg = Registry::new();
        let a = reg.add_pose(Pose::new("A"));
        let b = reg.add_pose(Pose::new("B"));
        assert_eq!(a, PoseId(0));
        assert_eq!(b, PoseId(1));
        assert_eq!(reg.pose(b).unwrap().name(), "B");
        assert!(reg.pose(PoseId(2)).is_none());
    }

    #[test]
    fn identical_poses_get_distinct_handles() {
        let mut reg = Registry::new();
        let props = [PoseProperty::FacingEachOther, PoseProperty::LeftToRight];
        let first = reg.add_pose(Pose::with_properties("Closed Position", props));
        let second = reg.add_pose(Pose::with_properties("Closed Position", props));
        assert_ne!(first, second);
        assert_eq!(reg.pose(first), reg.pose(second));
        assert_eq!(reg.pose_count(), 2);
    }

    #[test]
    fn pose_mut_edits_in_place() {
        let mut reg = Registry::new();
        let id = reg.add_pose(Pose::new("Hammerlock"));
        reg.pose_mut(id)
            .unwrap()
            .add_property(PoseProperty::RightToLeft);
        let pose = reg.pose(id).unwrap();
        assert!(pose.has_property(PoseProperty::RightToLeft));
    }

    #[test]
    fn moves_iterate_in_registration_order() {
        let mut reg = Registry::new();
        let p = reg.add_pose(Pose::new("P"));
        let scoop = reg.add_move(Move::new("Scoop", [Pairing::new(p, p)]));
        let walk = reg.add_move(Move::without_pairings("New York Walk"));
        let ids: Vec<MoveId> = reg.move_ids().collect();
        assert_eq!(ids, vec![scoop, walk]);
        let names: Vec<&str> = reg.moves().map(|(_, m)| m.name()).collect();
        assert_eq!(names, vec!["Scoop", "New York Walk"]);
        assert_eq!(reg.move_(walk).unwrap().name(), "New York Walk");
    }
}
