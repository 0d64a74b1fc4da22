//! Field and record comparators.

use super::difference::Difference;
use crate::error::MergeError;
use crate::names::{match_by_name, DuplicateNames};
use crate::syntax::{Field, RecordDef};

/// FieldEquality compares two fields matched by name.
#[derive(Debug, Clone, Copy)]
pub struct FieldEquality<'a> {
    pub prev: &'a Field,
    pub next: &'a Field,
}

impl<'a> FieldEquality<'a> {
    pub fn new(prev: &'a Field, next: &'a Field) -> Self {
        FieldEquality { prev, next }
    }

    pub fn is_match(&self) -> bool {
        self.prev.name == self.next.name
    }

    /// Type and default value decide equality; the name is the matching key.
    pub fn is_equal(&self) -> bool {
        !self.is_type_changed() && self.prev.default == self.next.default
    }

    pub fn is_type_changed(&self) -> bool {
        self.prev.field_type != self.next.field_type
    }

    /// Returns the literal of a default value the next field dropped.
    pub fn removed_default(&self) -> Option<&'a str> {
        match (&self.prev.default, &self.next.default) {
            (Some(value), None) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns `(from, to)` when both sides carry different defaults.
    pub fn changed_default(&self) -> Option<(&'a str, &'a str)> {
        match (&self.prev.default, &self.next.default) {
            (Some(from), Some(to)) if from != to => Some((from.as_str(), to.as_str())),
            _ => None,
        }
    }
}

/// RecordEquality compares two record types field by field.
#[derive(Debug, Clone)]
pub struct RecordEquality<'a> {
    pub prev: &'a RecordDef,
    pub next: &'a RecordDef,
    /// Matched fields in next order.
    pub matched: Vec<FieldEquality<'a>>,
    /// Previous-only fields in previous order.
    pub removed: Vec<&'a Field>,
    /// Next-only fields in next order.
    pub added: Vec<&'a Field>,
}

impl<'a> RecordEquality<'a> {
    pub fn compare(prev: &'a RecordDef, next: &'a RecordDef, policy: DuplicateNames) -> Result<Self, MergeError> {
        let scope = format!("{} '{}'", next.flavor.as_str(), next.name);
        let matching = match_by_name(&prev.fields, &next.fields, |f| f.name.clone(), &scope, policy)?;

        Ok(RecordEquality {
            prev,
            next,
            matched: matching
                .matched
                .into_iter()
                .map(|(p, n)| FieldEquality::new(p, n))
                .collect(),
            removed: matching.removed,
            added: matching.added,
        })
    }

    pub fn is_match(&self) -> bool {
        self.prev.name == self.next.name
    }

    pub fn is_equal(&self) -> bool {
        self.removed.is_empty()
            && self.added.is_empty()
            && self.matched.iter().all(FieldEquality::is_equal)
            && self.prev.metadata == self.next.metadata
            && self.prev.flavor == self.next.flavor
            && self.prev.closed == self.next.closed
    }

    /// Appends the differences in reporting order: removed fields, then each
    /// changed field, then added fields.
    pub fn differences(&self, out: &mut Vec<Difference>) {
        let record = &self.next.name;
        let flavor = self.next.flavor;

        for field in &self.removed {
            out.push(Difference::FieldRemoved {
                record: record.clone(),
                flavor,
                field: field.name.clone(),
            });
        }

        for pair in &self.matched {
            let field = &pair.next.name;
            if let Some(value) = pair.removed_default() {
                out.push(Difference::FieldDefaultRemoved {
                    record: record.clone(),
                    field: field.clone(),
                    value: value.to_string(),
                });
            }
            if let Some((from, to)) = pair.changed_default() {
                out.push(Difference::FieldDefaultChanged {
                    record: record.clone(),
                    field: field.clone(),
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            if pair.is_type_changed() {
                out.push(Difference::FieldTypeChanged {
                    record: record.clone(),
                    flavor,
                    field: field.clone(),
                    from: pair.prev.field_type.clone(),
                    to: pair.next.field_type.clone(),
                });
            }
        }

        for field in &self.added {
            out.push(Difference::FieldAdded {
                record: record.clone(),
                flavor,
                field: field.name.clone(),
                default: field.default.clone(),
            });
        }
    }
}
