//! Differences surfaced by the comparators.

use crate::syntax::{RecordFlavor, ResolverKind, TypeDescriptor};
use std::fmt;

/// OwnerKind is the kind of declaration that owns methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerKind {
    ServiceObject,
    Interface,
    ServiceClass,
}

/// MethodOwner names the declaration a method difference belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodOwner {
    pub kind: OwnerKind,
    pub name: String,
}

impl MethodOwner {
    pub fn new(kind: OwnerKind, name: impl Into<String>) -> Self {
        MethodOwner {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for MethodOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            OwnerKind::ServiceObject => "service object",
            OwnerKind::Interface => "interface",
            OwnerKind::ServiceClass => "service class",
        };
        write!(f, "{} '{}'", kind, self.name)
    }
}

/// Difference is one observable change between a matched previous and next
/// declaration. Not every difference is breaking; the classifier decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Difference {
    FieldRemoved {
        record: String,
        flavor: RecordFlavor,
        field: String,
    },
    FieldAdded {
        record: String,
        flavor: RecordFlavor,
        field: String,
        default: Option<String>,
    },
    FieldDefaultRemoved {
        record: String,
        field: String,
        value: String,
    },
    FieldDefaultChanged {
        record: String,
        field: String,
        from: String,
        to: String,
    },
    FieldTypeChanged {
        record: String,
        flavor: RecordFlavor,
        field: String,
        from: TypeDescriptor,
        to: TypeDescriptor,
    },
    EnumMemberRemoved {
        enumeration: String,
        member: String,
    },
    EnumMemberAdded {
        enumeration: String,
        member: String,
    },
    UnionMemberRemoved {
        union: String,
        member: String,
    },
    UnionMemberAdded {
        union: String,
        member: String,
    },
    MethodRemoved {
        owner: MethodOwner,
        method: String,
    },
    MethodAdded {
        owner: MethodOwner,
        method: String,
    },
    ParameterRemoved {
        owner: MethodOwner,
        method: String,
        parameter: String,
    },
    ParameterAdded {
        owner: MethodOwner,
        method: String,
        parameter: String,
        default: Option<String>,
    },
    ParameterDefaultRemoved {
        owner: MethodOwner,
        method: String,
        parameter: String,
        value: String,
    },
    ParameterDefaultChanged {
        owner: MethodOwner,
        method: String,
        parameter: String,
        from: String,
        to: String,
    },
    ParameterTypeChanged {
        owner: MethodOwner,
        method: String,
        parameter: String,
        from: TypeDescriptor,
        to: TypeDescriptor,
    },
    /// `None` is a method without a declared return type.
    ReturnTypeChanged {
        owner: MethodOwner,
        method: String,
        from: Option<TypeDescriptor>,
        to: Option<TypeDescriptor>,
    },
    MainQualifierChanged {
        owner: MethodOwner,
        method: String,
        from: Option<String>,
        to: Option<String>,
    },
    /// The qualifier list changed without touching the main qualifier.
    QualifiersChanged {
        owner: MethodOwner,
        method: String,
        from: Vec<String>,
        to: Vec<String>,
    },
    ResolverKindChanged {
        owner: MethodOwner,
        method: String,
        from: ResolverKind,
        to: ResolverKind,
    },
}
