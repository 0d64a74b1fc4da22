//! Errors raised by the combiner.

use thiserror::Error;

/// MergeError aborts a merge; no partial tree is ever returned with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// A matched pair of a kind the engine has no comparator for.
    #[error("unsupported construct: {construct} '{name}' cannot be merged")]
    UnsupportedConstruct { construct: String, name: String },

    /// The same name denotes different declaration kinds in the two trees.
    #[error("'{name}' changed from {previous} to {next}; declarations of different kinds cannot be merged")]
    StructuralMismatch {
        name: String,
        previous: String,
        next: String,
    },

    /// Two siblings share a name.
    #[error("duplicate name '{name}' in {scope}")]
    DuplicateName { scope: String, name: String },

    /// Failure reported by an input collaborator, carried verbatim.
    #[error("{message}")]
    Upstream { message: String },
}

impl MergeError {
    /// Creates an unsupported construct error.
    pub fn unsupported(construct: impl Into<String>, name: impl Into<String>) -> Self {
        MergeError::UnsupportedConstruct {
            construct: construct.into(),
            name: name.into(),
        }
    }

    /// Creates a structural mismatch error.
    pub fn mismatch(name: impl Into<String>, previous: impl Into<String>, next: impl Into<String>) -> Self {
        MergeError::StructuralMismatch {
            name: name.into(),
            previous: previous.into(),
            next: next.into(),
        }
    }

    /// Creates a duplicate name error.
    pub fn duplicate(scope: impl Into<String>, name: impl Into<String>) -> Self {
        MergeError::DuplicateName {
            scope: scope.into(),
            name: name.into(),
        }
    }

    /// Creates an upstream error.
    pub fn upstream(message: impl Into<String>) -> Self {
        MergeError::Upstream {
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for MergeError {
    fn from(e: serde_yaml::Error) -> Self {
        MergeError::upstream(format!("failed to parse YAML: {}", e))
    }
}

impl From<serde_json::Error> for MergeError {
    fn from(e: serde_json::Error) -> Self {
        MergeError::upstream(format!("failed to parse JSON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_error_display() {
        let err = MergeError::mismatch("Book", "record type", "interface");
        assert_eq!(
            err.to_string(),
            "'Book' changed from record type to interface; declarations of different kinds cannot be merged"
        );

        let err = MergeError::duplicate("record type 'Book'", "id");
        assert_eq!(err.to_string(), "duplicate name 'id' in record type 'Book'");
    }

    #[test]
    fn test_upstream_errors_are_verbatim() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
        let err = MergeError::from(yaml_err);
        assert!(matches!(err, MergeError::Upstream { .. }));
        assert!(err.to_string().starts_with("failed to parse YAML: "));
    }
}
