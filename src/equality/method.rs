//! Method, function and object comparators.

use super::difference::{Difference, MethodOwner, OwnerKind};
use super::signature::SignatureEquality;
use crate::error::MergeError;
use crate::names::{match_by_name, DuplicateNames};
use crate::syntax::{ClassDef, FunctionDefinition, MethodDeclaration, ObjectTypeDef};

/// MethodLike is a member of an object or class that has a declaration part.
pub trait MethodLike {
    fn declaration(&self) -> &MethodDeclaration;

    /// Returns the name the member is matched by.
    fn key(&self) -> String {
        self.declaration().key()
    }
}

impl MethodLike for MethodDeclaration {
    fn declaration(&self) -> &MethodDeclaration {
        self
    }
}

impl MethodLike for FunctionDefinition {
    fn declaration(&self) -> &MethodDeclaration {
        &self.declaration
    }
}

/// MethodEquality compares two members matched by key.
#[derive(Debug, Clone)]
pub struct MethodEquality<'a, M> {
    pub prev: &'a M,
    pub next: &'a M,
    pub signature: SignatureEquality<'a>,
}

impl<'a, M: MethodLike> MethodEquality<'a, M> {
    pub fn compare(prev: &'a M, next: &'a M, owner: &MethodOwner, policy: DuplicateNames) -> Result<Self, MergeError> {
        let scope = format!("{} method '{}'", owner, next.key());
        let signature = SignatureEquality::compare(
            &prev.declaration().signature,
            &next.declaration().signature,
            &scope,
            policy,
        )?;
        Ok(MethodEquality { prev, next, signature })
    }

    pub fn is_match(&self) -> bool {
        self.prev.key() == self.next.key()
    }

    pub fn is_main_qualifier_changed(&self) -> bool {
        self.prev.declaration().main_qualifier() != self.next.declaration().main_qualifier()
    }

    pub fn is_qualifiers_changed(&self) -> bool {
        self.prev.declaration().qualifiers != self.next.declaration().qualifiers
    }

    pub fn is_equal(&self) -> bool {
        let (prev, next) = (self.prev.declaration(), self.next.declaration());
        self.signature.is_equal()
            && prev.qualifiers == next.qualifiers
            && prev.metadata == next.metadata
            && prev.name == next.name
            && prev.resource_path == next.resource_path
    }

    /// Appends the differences in reporting order: main qualifier, resolver
    /// kind, parameters, return type.
    pub fn differences(&self, owner: &MethodOwner, out: &mut Vec<Difference>) {
        let (prev, next) = (self.prev.declaration(), self.next.declaration());
        let method = next.key();

        if self.is_main_qualifier_changed() {
            out.push(Difference::MainQualifierChanged {
                owner: owner.clone(),
                method: method.clone(),
                from: prev.main_qualifier().map(str::to_string),
                to: next.main_qualifier().map(str::to_string),
            });
        } else if self.is_qualifiers_changed() {
            out.push(Difference::QualifiersChanged {
                owner: owner.clone(),
                method: method.clone(),
                from: prev.qualifiers.clone(),
                to: next.qualifiers.clone(),
            });
        }

        if let (Some(from), Some(to)) = (prev.resolver_kind(), next.resolver_kind()) {
            if from != to {
                out.push(Difference::ResolverKindChanged {
                    owner: owner.clone(),
                    method: method.clone(),
                    from,
                    to,
                });
            }
        }

        self.signature.differences(owner, &method, out);
    }
}

/// ObjectEquality compares the members of two objects, interfaces or
/// classes.
#[derive(Debug, Clone)]
pub struct ObjectEquality<'a, M> {
    pub owner: MethodOwner,
    /// Matched members in next order.
    pub matched: Vec<MethodEquality<'a, M>>,
    /// Previous-only resolver members in previous order.
    pub removed: Vec<&'a M>,
    /// Previous-only members without a `resource` or `remote` qualifier.
    /// These are developer helpers, not schema members, and survive the merge.
    pub retained: Vec<&'a M>,
    /// Next-only members in next order.
    pub added: Vec<&'a M>,
    header_equal: bool,
}

impl<'a> ObjectEquality<'a, MethodDeclaration> {
    /// Compares two service objects or two interfaces.
    pub fn compare_objects(
        kind: OwnerKind,
        prev: &'a ObjectTypeDef,
        next: &'a ObjectTypeDef,
        policy: DuplicateNames,
    ) -> Result<Self, MergeError> {
        let owner = MethodOwner::new(kind, next.name.clone());
        let header_equal = prev.metadata == next.metadata && prev.inclusions == next.inclusions;
        Self::compare_members(owner, &prev.methods, &next.methods, header_equal, policy)
    }
}

impl<'a> ObjectEquality<'a, FunctionDefinition> {
    /// Compares two service classes.
    pub fn compare_classes(prev: &'a ClassDef, next: &'a ClassDef, policy: DuplicateNames) -> Result<Self, MergeError> {
        let owner = MethodOwner::new(OwnerKind::ServiceClass, next.name.clone());
        let header_equal =
            prev.metadata == next.metadata && prev.qualifiers == next.qualifiers && prev.inclusions == next.inclusions;
        Self::compare_members(owner, &prev.functions, &next.functions, header_equal, policy)
    }
}

impl<'a, M: MethodLike> ObjectEquality<'a, M> {
    fn compare_members(
        owner: MethodOwner,
        prev: &'a [M],
        next: &'a [M],
        header_equal: bool,
        policy: DuplicateNames,
    ) -> Result<Self, MergeError> {
        let scope = owner.to_string();
        let matching = match_by_name(prev, next, |m| m.key(), &scope, policy)?;

        let matched = matching
            .matched
            .into_iter()
            .map(|(p, n)| MethodEquality::compare(p, n, &owner, policy))
            .collect::<Result<Vec<_>, _>>()?;

        let (removed, retained): (Vec<_>, Vec<_>) = matching
            .removed
            .into_iter()
            .partition(|m| m.declaration().main_qualifier().is_some());

        Ok(ObjectEquality {
            owner,
            matched,
            removed,
            retained,
            added: matching.added,
            header_equal,
        })
    }

    pub fn is_equal(&self) -> bool {
        self.header_equal
            && self.removed.is_empty()
            && self.added.is_empty()
            && self.matched.iter().all(MethodEquality::is_equal)
    }

    /// Appends the differences in reporting order: removed members, then each
    /// matched member, then added members.
    pub fn differences(&self, out: &mut Vec<Difference>) {
        for member in &self.removed {
            out.push(Difference::MethodRemoved {
                owner: self.owner.clone(),
                method: member.key(),
            });
        }
        for pair in &self.matched {
            pair.differences(&self.owner, out);
        }
        for member in &self.added {
            out.push(Difference::MethodAdded {
                owner: self.owner.clone(),
                method: member.key(),
            });
        }
    }
}
