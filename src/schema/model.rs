use crate::error::MergeError;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// SchemaModel is a list of union types with their declared member order.
///
/// Unions are indexed in a map before the first search so this type should
/// be considered immutable.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SchemaModel {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unions: Vec<SchemaUnion>,

    #[serde(skip)]
    union_map: OnceCell<HashMap<String, usize>>,
}

impl Clone for SchemaModel {
    fn clone(&self) -> Self {
        SchemaModel::with_unions(self.unions.clone())
    }
}

impl PartialEq for SchemaModel {
    fn eq(&self, other: &Self) -> bool {
        self.unions == other.unions
    }
}

/// SchemaUnion is a union type as the schema declares it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaUnion {
    pub name: String,

    /// Member type names in declaration order.
    #[serde(default)]
    pub members: Vec<String>,
}

impl SchemaModel {
    /// Creates an empty schema model.
    pub fn new() -> Self {
        SchemaModel::default()
    }

    /// Creates a schema model with the given unions.
    pub fn with_unions(unions: Vec<SchemaUnion>) -> Self {
        SchemaModel {
            unions,
            union_map: OnceCell::new(),
        }
    }

    /// Parses a schema model from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, MergeError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a schema model from JSON.
    pub fn from_json(json: &str) -> Result<Self, MergeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the union named `name`, if the schema declares it. The first
    /// declaration wins when a name repeats.
    pub fn find_union(&self, name: &str) -> Option<&SchemaUnion> {
        let map = self.union_map.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.unions.len());
            for (i, u) in self.unions.iter().enumerate() {
                map.entry(u.name.clone()).or_insert(i);
            }
            map
        });
        map.get(name).map(|&i| &self.unions[i])
    }

    /// Returns the declared member order of union `name`.
    pub fn union_members(&self, name: &str) -> Option<&[String]> {
        self.find_union(name).map(|u| u.members.as_slice())
    }
}
