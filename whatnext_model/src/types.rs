// Core types shared across the model: the closed pose-property tag set and
// the compact handles that identify registered poses and moves.
//
// Handles are sequential integers issued by `Registry` (see `registry.rs`).
// They are the identity of a pose or move: the move index is keyed by
// `PoseId`, never by a pose's name or property set, so two poses that look
// the same but were registered separately stay distinct.
//
// All types derive `Serialize`/`Deserialize`. Property tags serialize in
// `snake_case`, which is the spelling the catalog JSON uses.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Handle for a pose owned by a `Registry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PoseId(pub u32);

/// Handle for a move owned by a `Registry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoveId(pub u32);

impl fmt::Display for PoseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoseId({})", self.0)
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveId({})", self.0)
    }
}

// ---------------------------------------------------------------------------
// Pose properties
// ---------------------------------------------------------------------------

/// Descriptive tag attached to a pose: facing, lateral arrangement,
/// hand-crossing geometry, or hand placement.
///
/// Hand-crossing names read leader's hand first, follower's hand second
/// (`LeftToRight` is the leader's left holding the follower's right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseProperty {
    FacingEachOther,
    FacingOppositeDirection,
    FacingSameDirection,
    SideBySide,
    LeaderInFront,
    LeaderInBack,
    LeaderOnRight,
    LeaderOnLeft,
    RightToRight,
    LeftToLeft,
    LeftToRight,
    RightToLeft,
    /// Crosshold: leader's right hand over the left.
    LeadersRightOverLeadersLeft,
    /// Reverse crosshold: leader's left hand over the right.
    LeadersLeftOverLeadersRight,
    LeadersRightHandOnFollowersBack,
    LeadersLeftHandOnFollowersBack,
}

impl PoseProperty {
    /// Every variant, in declaration order.
    pub const ALL: [PoseProperty; 16] = [
        PoseProperty::FacingEachOther,
        PoseProperty::FacingOppositeDirection,
        PoseProperty::FacingSameDirection,
        PoseProperty::SideBySide,
        PoseProperty::LeaderInFront,
        PoseProperty::LeaderInBack,
        PoseProperty::LeaderOnRight,
        PoseProperty::LeaderOnLeft,
        PoseProperty::RightToRight,
        PoseProperty::LeftToLeft,
        PoseProperty::LeftToRight,
        PoseProperty::RightToLeft,
        PoseProperty::LeadersRightOverLeadersLeft,
        PoseProperty::LeadersLeftOverLeadersRight,
        PoseProperty::LeadersRightHandOnFollowersBack,
        PoseProperty::LeadersLeftHandOnFollowersBack,
    ];

    /// True for the three facing-direction tags.
    pub fn is_facing(self) -> bool {
        matches!(
            self,
            PoseProperty::FacingEachOther
                | PoseProperty::FacingOppositeDirection
                | PoseProperty::FacingSameDirection
        )
    }

    /// True for the hand-crossing geometry tags.
    pub fn is_handhold(self) -> bool {
        matches!(
            self,
            PoseProperty::RightToRight
                | PoseProperty::LeftToLeft
                | PoseProperty::LeftToRight
                | PoseProperty::RightToLeft
                | PoseProperty::LeadersRightOverLeadersLeft
                | PoseProperty::LeadersLeftOverLeadersRight
        )
    }
}
