//! Parameter and function signature comparators.

use super::difference::{Difference, MethodOwner};
use crate::error::MergeError;
use crate::names::{match_by_name, DuplicateNames};
use crate::syntax::{FunctionSignature, Parameter};

/// ParameterEquality compares two parameters matched by name and position.
#[derive(Debug, Clone, Copy)]
pub struct ParameterEquality<'a> {
    pub prev: &'a Parameter,
    pub next: &'a Parameter,
}

impl<'a> ParameterEquality<'a> {
    pub fn new(prev: &'a Parameter, next: &'a Parameter) -> Self {
        ParameterEquality { prev, next }
    }

    pub fn is_match(&self) -> bool {
        self.prev.name == self.next.name
    }

    pub fn is_equal(&self) -> bool {
        self.is_match() && !self.is_type_changed() && self.prev.default == self.next.default
    }

    pub fn is_type_changed(&self) -> bool {
        self.prev.param_type != self.next.param_type
    }

    pub fn removed_default(&self) -> Option<&'a str> {
        match (&self.prev.default, &self.next.default) {
            (Some(value), None) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn changed_default(&self) -> Option<(&'a str, &'a str)> {
        match (&self.prev.default, &self.next.default) {
            (Some(from), Some(to)) if from != to => Some((from.as_str(), to.as_str())),
            _ => None,
        }
    }
}

/// SignatureEquality compares parameter lists and return types.
///
/// Parameter order is significant: a parameter present on both sides whose
/// relative position among the shared parameters moved counts as removed at
/// its previous position and added at its next one.
#[derive(Debug, Clone)]
pub struct SignatureEquality<'a> {
    pub prev: &'a FunctionSignature,
    pub next: &'a FunctionSignature,
    /// Parameters in place on both sides, in next order.
    pub matched: Vec<ParameterEquality<'a>>,
    /// Previous-only or displaced parameters, in previous order.
    pub removed: Vec<&'a Parameter>,
    /// Next-only or displaced parameters, in next order.
    pub added: Vec<&'a Parameter>,
}

impl<'a> SignatureEquality<'a> {
    pub fn compare(
        prev: &'a FunctionSignature,
        next: &'a FunctionSignature,
        scope: &str,
        policy: DuplicateNames,
    ) -> Result<Self, MergeError> {
        let matching = match_by_name(&prev.parameters, &next.parameters, |p| p.name.clone(), scope, policy)?;

        let prev_position = |p: &Parameter| prev.parameters.iter().position(|q| q.name == p.name);
        let next_position = |p: &Parameter| next.parameters.iter().position(|q| q.name == p.name);

        // Rank of each shared parameter among the shared ones, previous side.
        let mut shared_prev_order: Vec<&str> = matching.matched.iter().map(|(p, _)| p.name.as_str()).collect();
        shared_prev_order.sort_by_key(|name| prev.parameters.iter().position(|q| q.name == *name));

        let mut matched = Vec::new();
        let mut removed = matching.removed;
        let mut added = matching.added;
        for (rank, (p, n)) in matching.matched.into_iter().enumerate() {
            if shared_prev_order[rank] == p.name {
                matched.push(ParameterEquality::new(p, n));
            } else {
                removed.push(p);
                added.push(n);
            }
        }
        removed.sort_by_key(|p| prev_position(p));
        added.sort_by_key(|p| next_position(p));

        Ok(SignatureEquality {
            prev,
            next,
            matched,
            removed,
            added,
        })
    }

    pub fn is_return_type_changed(&self) -> bool {
        self.prev.return_type != self.next.return_type
    }

    pub fn is_parameters_equal(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.matched.iter().all(ParameterEquality::is_equal)
    }

    pub fn is_equal(&self) -> bool {
        self.is_parameters_equal() && !self.is_return_type_changed()
    }

    /// Appends parameter differences (removed, changed, added) and then the
    /// return type difference.
    pub fn differences(&self, owner: &MethodOwner, method: &str, out: &mut Vec<Difference>) {
        self.parameter_differences(owner, method, out);
        if self.is_return_type_changed() {
            out.push(self.return_type_difference(owner, method));
        }
    }

    pub fn parameter_differences(&self, owner: &MethodOwner, method: &str, out: &mut Vec<Difference>) {
        for param in &self.removed {
            out.push(Difference::ParameterRemoved {
                owner: owner.clone(),
                method: method.to_string(),
                parameter: param.name.clone(),
            });
        }

        for pair in &self.matched {
            let parameter = &pair.next.name;
            if let Some(value) = pair.removed_default() {
                out.push(Difference::ParameterDefaultRemoved {
                    owner: owner.clone(),
                    method: method.to_string(),
                    parameter: parameter.clone(),
                    value: value.to_string(),
                });
            }
            if let Some((from, to)) = pair.changed_default() {
                out.push(Difference::ParameterDefaultChanged {
                    owner: owner.clone(),
                    method: method.to_string(),
                    parameter: parameter.clone(),
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            if pair.is_type_changed() {
                out.push(Difference::ParameterTypeChanged {
                    owner: owner.clone(),
                    method: method.to_string(),
                    parameter: parameter.clone(),
                    from: pair.prev.param_type.clone(),
                    to: pair.next.param_type.clone(),
                });
            }
        }

        for param in &self.added {
            out.push(Difference::ParameterAdded {
                owner: owner.clone(),
                method: method.to_string(),
                parameter: param.name.clone(),
                default: param.default.clone(),
            });
        }
    }

    pub fn return_type_difference(&self, owner: &MethodOwner, method: &str) -> Difference {
        Difference::ReturnTypeChanged {
            owner: owner.clone(),
            method: method.to_string(),
            from: self.prev.return_type.clone(),
            to: self.next.return_type.clone(),
        }
    }
}
