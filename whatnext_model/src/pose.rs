// Poses: named partner-hold configurations tagged with `PoseProperty`s.
//
// A `Pose` is plain data. It gains its identity when registered with a
// `Registry`, which hands back a `PoseId`; see `registry.rs`.
//
// Properties keep insertion order for display. `add_property` appends
// unconditionally, so a tag added twice is stored twice. Callers that want
// set semantics use `try_add_property`, which rejects the duplicate.

use crate::error::{ModelError, ModelResult};
use crate::types::PoseProperty;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A distinguishable partner-hold configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    name: String,
    properties: Vec<PoseProperty>,
}

impl Pose {
    /// A pose with no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_properties(
        name: impl Into<String>,
        properties: impl IntoIterator<Item = PoseProperty>,
    ) -> Self {
        Self {
            name: name.into(),
            properties: properties.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties in the order they were added.
    pub fn properties(&self) -> &[PoseProperty] {
        &self.properties
    }

    pub fn has_property(&self, property: PoseProperty) -> bool {
        self.properties.contains(&property)
    }

    /// Append a property. Duplicates are kept.
    pub fn add_property(&mut self, property: PoseProperty) {
        self.properties.push(property);
    }

    /// Append a property unless it is already present, in which case the
    /// pose is left unchanged and `DuplicateProperty` is returned.
    pub fn try_add_property(&mut self, property: PoseProperty) -> ModelResult<()> {
        if self.has_property(property) {
            return Err(ModelError::DuplicateProperty {
                pose: self.name.clone(),
                property,
            });
        }
        self.properties.push(property);
        Ok(())
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
