//! Warnings module - classifying differences as breaking changes.
//!
//! A [`Difference`] is breaking when an existing caller of the service could
//! stop working because of it. Every breaking difference renders to exactly
//! one [`Warning`] from a fixed template; non-breaking differences (added
//! members with a default, changed default literals, added enum or union
//! members, added methods, qualifier reorderings) render to nothing.

mod templates;

#[cfg(test)]
mod warnings_test;

pub use templates::PREFIX;

use crate::equality::Difference;
use crate::syntax::TypeDescriptor;
use serde::Serialize;
use std::fmt;

/// Rendering of a missing return type.
const NO_RETURN: &str = "()";
/// Rendering of a missing main qualifier.
const NO_QUALIFIER: &str = "none";

/// Warning is one rendered breaking-change diagnostic. It always starts with
/// [`PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Warning(String);

impl Warning {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Warning {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true if `diff` could break existing clients.
pub fn is_breaking(diff: &Difference) -> bool {
    match diff {
        Difference::FieldAdded { default, .. } | Difference::ParameterAdded { default, .. } => default.is_none(),
        Difference::FieldDefaultChanged { .. }
        | Difference::ParameterDefaultChanged { .. }
        | Difference::EnumMemberAdded { .. }
        | Difference::UnionMemberAdded { .. }
        | Difference::MethodAdded { .. }
        | Difference::QualifiersChanged { .. } => false,
        _ => true,
    }
}

/// Renders the warning for `diff`, or `None` when it is not breaking.
pub fn classify(diff: &Difference) -> Option<Warning> {
    if !is_breaking(diff) {
        return None;
    }

    let text = match diff {
        Difference::FieldRemoved { record, flavor, field } => templates::field_removed(record, *flavor, field),
        Difference::FieldAdded {
            record, flavor, field, ..
        } => templates::field_added_without_default(record, *flavor, field),
        Difference::FieldDefaultRemoved { record, field, value } => {
            templates::field_default_removed(record, field, value)
        }
        Difference::FieldTypeChanged {
            record,
            flavor,
            field,
            from,
            to,
        } => templates::field_type_changed(record, *flavor, field, &from.to_string(), &to.to_string()),
        Difference::EnumMemberRemoved { enumeration, member } => templates::enum_member_removed(enumeration, member),
        Difference::UnionMemberRemoved { union, member } => templates::union_member_removed(union, member),
        Difference::MethodRemoved { owner, method } => templates::method_removed(owner.kind, &owner.name, method),
        Difference::ParameterRemoved {
            owner,
            method,
            parameter,
        } => templates::parameter_removed(owner.kind, &owner.name, method, parameter),
        Difference::ParameterAdded {
            owner,
            method,
            parameter,
            ..
        } => templates::parameter_added_without_default(owner.kind, &owner.name, method, parameter),
        Difference::ParameterDefaultRemoved {
            owner,
            method,
            parameter,
            value,
        } => templates::parameter_default_removed(owner.kind, &owner.name, method, parameter, value),
        Difference::ParameterTypeChanged {
            owner,
            method,
            parameter,
            from,
            to,
        } => templates::parameter_type_changed(
            owner.kind,
            &owner.name,
            method,
            parameter,
            &from.to_string(),
            &to.to_string(),
        ),
        Difference::ReturnTypeChanged { owner, method, from, to } => templates::return_type_changed(
            owner.kind,
            &owner.name,
            method,
            &render_return(from),
            &render_return(to),
        ),
        Difference::MainQualifierChanged { owner, method, from, to } => templates::main_qualifier_changed(
            owner.kind,
            &owner.name,
            method,
            from.as_deref().unwrap_or(NO_QUALIFIER),
            to.as_deref().unwrap_or(NO_QUALIFIER),
        ),
        Difference::ResolverKindChanged { owner, method, from, to } => {
            templates::resolver_kind_changed(owner.kind, &owner.name, method, from.as_str(), to.as_str())
        }
        Difference::FieldDefaultChanged { .. }
        | Difference::ParameterDefaultChanged { .. }
        | Difference::EnumMemberAdded { .. }
        | Difference::UnionMemberAdded { .. }
        | Difference::MethodAdded { .. }
        | Difference::QualifiersChanged { .. } => return None,
    };

    Some(Warning(text))
}

/// Classifies `diffs` in order and appends the resulting warnings to `out`.
pub fn classify_all(diffs: &[Difference], out: &mut Vec<Warning>) {
    out.extend(diffs.iter().filter_map(classify));
}

fn render_return(ty: &Option<TypeDescriptor>) -> String {
    match ty {
        Some(ty) => ty.to_string(),
        None => NO_RETURN.to_string(),
    }
}
