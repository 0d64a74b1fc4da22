//! Syntax module - the structured source tree the combiner reads and writes.
//!
//! The tree is declaration-level only: statements inside function bodies are
//! kept as opaque source text owned by the developer. Trees are produced by
//! external parsers and generators and handed over as YAML or JSON.

mod elements;
mod types;

pub use elements::*;
pub use types::*;

use crate::error::MergeError;

impl Module {
    /// Creates a module with the given members.
    pub fn with_members(members: Vec<Declaration>) -> Self {
        Module { members }
    }

    /// Parses a module from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Module, MergeError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a module from JSON.
    pub fn from_json(json: &str) -> Result<Module, MergeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the module to YAML.
    pub fn to_yaml(&self) -> Result<String, MergeError> {
        serde_yaml::to_string(self)
            .map_err(|e| MergeError::upstream(format!("failed to serialize module: {}", e)))
    }

    /// Serializes the module to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, MergeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MergeError::upstream(format!("failed to serialize module: {}", e)))
    }

    /// Finds a member by name.
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.members.iter().find(|m| m.name() == name)
    }
}
