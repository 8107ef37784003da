// Error types for catalog construction and keyed lookups.

use std::fmt;
use thiserror::Error;
use whatnext_model::ModelError;

/// Which key namespace a duplicate was found in. Pose aliases share the
/// pose namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Pose,
    Move,
    Routine,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyKind::Pose => "pose",
            KeyKind::Move => "move",
            KeyKind::Routine => "routine",
        })
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate {kind} key '{key}'")]
    DuplicateKey { kind: KeyKind, key: String },

    #[error("{context} refers to unknown pose '{key}'")]
    UnknownPose { context: String, key: String },

    #[error("{context} refers to unknown move '{key}'")]
    UnknownMove { context: String, key: String },

    #[error("unknown routine '{key}'")]
    UnknownRoutine { key: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
