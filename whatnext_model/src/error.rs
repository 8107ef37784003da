// Error type for the model crate.
//
// The model has almost no failing operations: queries are total and an
// inert move is only logged. The one error is the opt-in strict property
// check in `Pose::try_add_property`.

use crate::types::PoseProperty;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("pose '{pose}' already has property {property:?}")]
    DuplicateProperty {
        pose: String,
        property: PoseProperty,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;
