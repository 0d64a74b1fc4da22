//! Per-kind combiners.
//!
//! Each combiner compares a matched pair, classifies the differences into
//! `warnings`, and builds the merged declaration: the next side's shape with
//! the previous side's developer-owned parts carried over. Those are function
//! bodies, helper functions without a resolver qualifier, class attributes and
//! modifiers such as `isolated` or `readonly`.

use crate::equality::{
    EnumEquality, MethodLike, ObjectEquality, OwnerKind, RecordEquality, UnionEquality,
};
use crate::error::MergeError;
use crate::names::DuplicateNames;
use crate::schema::SchemaModel;
use crate::syntax::{
    ClassDef, EnumDef, Field, FunctionDefinition, MethodDeclaration, ObjectTypeDef, RecordDef, TypeDescriptor,
    UnionDef, REMOTE, RESOURCE,
};
use crate::warnings::{classify_all, Warning};
use std::collections::HashSet;
use tracing::trace;

/// Combines two record types.
pub fn combine_records(
    prev: &RecordDef,
    next: &RecordDef,
    policy: DuplicateNames,
    warnings: &mut Vec<Warning>,
) -> Result<RecordDef, MergeError> {
    let eq = RecordEquality::compare(prev, next, policy)?;
    if eq.is_equal() {
        trace!(record = %next.name, "record unchanged");
    }

    let mut diffs = Vec::new();
    eq.differences(&mut diffs);
    classify_all(&diffs, warnings);

    let fields = eq
        .matched
        .iter()
        .map(|pair| merge_field(pair.prev, pair.next))
        .chain(eq.added.iter().map(|f| (*f).clone()))
        .collect();

    Ok(RecordDef {
        metadata: next.metadata.clone(),
        name: next.name.clone(),
        flavor: next.flavor,
        closed: next.closed,
        fields,
    })
}

/// Combines two service objects, or two interfaces when `kind` says so.
pub fn combine_objects(
    kind: OwnerKind,
    prev: &ObjectTypeDef,
    next: &ObjectTypeDef,
    policy: DuplicateNames,
    warnings: &mut Vec<Warning>,
) -> Result<ObjectTypeDef, MergeError> {
    let eq = ObjectEquality::compare_objects(kind, prev, next, policy)?;
    if eq.is_equal() {
        trace!(owner = %eq.owner, "object unchanged");
    }

    let mut diffs = Vec::new();
    eq.differences(&mut diffs);
    classify_all(&diffs, warnings);

    let methods = eq
        .matched
        .iter()
        .map(|pair| merge_method(pair.prev, pair.next))
        .chain(eq.added.iter().map(|m| (*m).clone()))
        .chain(eq.retained.iter().map(|m| (*m).clone()))
        .collect();

    Ok(ObjectTypeDef {
        metadata: next.metadata.clone(),
        name: next.name.clone(),
        inclusions: next.inclusions.clone(),
        methods,
    })
}

/// Combines two service classes. Matched functions take the next
/// declaration and keep the previous body.
pub fn combine_classes(
    prev: &ClassDef,
    next: &ClassDef,
    policy: DuplicateNames,
    warnings: &mut Vec<Warning>,
) -> Result<ClassDef, MergeError> {
    let eq = ObjectEquality::compare_classes(prev, next, policy)?;
    if eq.is_equal() {
        trace!(owner = %eq.owner, "class unchanged");
    }

    let mut diffs = Vec::new();
    eq.differences(&mut diffs);
    classify_all(&diffs, warnings);

    let functions = eq
        .matched
        .iter()
        .map(|pair| merge_function(pair.prev, pair.next))
        .chain(eq.added.iter().map(|f| (*f).clone()))
        .chain(eq.retained.iter().map(|f| {
            trace!(function = %f.key(), "keeping helper function");
            (*f).clone()
        }))
        .collect();

    Ok(ClassDef {
        metadata: next.metadata.clone(),
        qualifiers: merge_qualifiers(&prev.qualifiers, &next.qualifiers),
        name: next.name.clone(),
        inclusions: next.inclusions.clone(),
        attributes: merge_attributes(&prev.attributes, &next.attributes),
        functions,
    })
}

fn merge_function(prev: &FunctionDefinition, next: &FunctionDefinition) -> FunctionDefinition {
    if prev.body.is_some() {
        trace!(function = %next.key(), "keeping previous body");
    }
    FunctionDefinition {
        declaration: merge_method(prev.declaration(), next.declaration()),
        body: prev.body.clone().or_else(|| next.body.clone()),
    }
}

fn merge_method(prev: &MethodDeclaration, next: &MethodDeclaration) -> MethodDeclaration {
    MethodDeclaration {
        qualifiers: merge_qualifiers(&prev.qualifiers, &next.qualifiers),
        ..next.clone()
    }
}

fn merge_field(prev: &Field, next: &Field) -> Field {
    Field {
        readonly: prev.readonly || next.readonly,
        ..next.clone()
    }
}

/// Takes the next qualifier list and puts the previous-only modifiers in
/// front of it. `resource` and `remote` always come from next.
fn merge_qualifiers(prev: &[String], next: &[String]) -> Vec<String> {
    prev.iter()
        .filter(|q| q.as_str() != RESOURCE && q.as_str() != REMOTE && !next.contains(*q))
        .chain(next.iter())
        .cloned()
        .collect()
}

/// Keeps every previous attribute and appends the next-only ones.
fn merge_attributes(prev: &[Field], next: &[Field]) -> Vec<Field> {
    let known: HashSet<&str> = prev.iter().map(|f| f.name.as_str()).collect();
    prev.iter()
        .chain(next.iter().filter(|f| !known.contains(f.name.as_str())))
        .cloned()
        .collect()
}

/// Combines two enums. The next member list is adopted verbatim.
pub fn combine_enums(
    prev: &EnumDef,
    next: &EnumDef,
    policy: DuplicateNames,
    warnings: &mut Vec<Warning>,
) -> Result<EnumDef, MergeError> {
    let eq = EnumEquality::compare(prev, next, policy)?;
    let mut diffs = Vec::new();
    eq.differences(&mut diffs);
    classify_all(&diffs, warnings);
    Ok(next.clone())
}

/// Combines two unions. The next descriptor is adopted verbatim unless the
/// schema declares the union's members and the next descriptor is a nested
/// composition of the same members, in which case the merged union is the
/// flat composition in schema order.
pub fn combine_unions(
    prev: &UnionDef,
    next: &UnionDef,
    schema: Option<&SchemaModel>,
    warnings: &mut Vec<Warning>,
) -> UnionDef {
    let eq = UnionEquality::compare(prev, next);
    let mut diffs = Vec::new();
    eq.differences(&mut diffs);
    classify_all(&diffs, warnings);

    let mut merged = next.clone();
    if let Some(order) = schema.and_then(|s| s.union_members(&next.name)) {
        if next.descriptor.is_nested_union() && same_members(order, &next.member_names()) {
            trace!(union = %next.name, "flattening union in schema order");
            merged.descriptor = TypeDescriptor::Union(order.iter().map(TypeDescriptor::named).collect());
        }
    }
    merged
}

fn same_members(order: &[String], members: &[String]) -> bool {
    let a: HashSet<&String> = order.iter().collect();
    let b: HashSet<&String> = members.iter().collect();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_class_merge_keeps_previous_body() {
        let prev: ClassDef = serde_yaml::from_str(
            r#"
name: Query
qualifiers: [service]
functions:
- qualifiers: [resource]
  name: get
  path: [greeting]
  returns: string
  body: '{ return "hello"; }'
"#,
        )
        .unwrap();
        let next: ClassDef = serde_yaml::from_str(
            r#"
name: Query
qualifiers: [isolated, service]
functions:
- qualifiers: [resource]
  name: get
  path: [greeting]
  parameters:
  - {name: name, type: string, default: '"World"'}
  returns: string
"#,
        )
        .unwrap();

        let mut warnings = Vec::new();
        let merged = combine_classes(&prev, &next, DuplicateNames::Reject, &mut warnings).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(merged.qualifiers, vec!["isolated", "service"]);
        assert_eq!(merged.functions.len(), 1);
        assert_eq!(merged.functions[0].declaration, next.functions[0].declaration);
        assert_eq!(merged.functions[0].body.as_deref(), Some("{ return \"hello\"; }"));
    }

    #[test]
    fn test_union_flattened_in_schema_order() {
        let prev: UnionDef = serde_yaml::from_str("{name: Profile, type: 'Parent|Clerk|Teacher'}").unwrap();
        let next: UnionDef = serde_yaml::from_str("{name: Profile, type: 'Teacher|(Clerk|Parent)'}").unwrap();
        let schema = SchemaModel::from_yaml("unions: [{name: Profile, members: [Parent, Clerk, Teacher]}]").unwrap();

        let mut warnings = Vec::new();
        let merged = combine_unions(&prev, &next, Some(&schema), &mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(merged.descriptor.to_string(), "Parent|Clerk|Teacher");

        let merged = combine_unions(&prev, &next, None, &mut warnings);
        assert_eq!(merged, next);
    }

    #[test]
    fn test_union_with_different_members_is_not_reordered() {
        let prev: UnionDef = serde_yaml::from_str("{name: Profile, type: 'Parent|Teacher'}").unwrap();
        let next: UnionDef = serde_yaml::from_str("{name: Profile, type: 'Teacher|(Clerk|Student)'}").unwrap();
        let schema = SchemaModel::from_yaml("unions: [{name: Profile, members: [Parent, Clerk, Teacher]}]").unwrap();

        let mut warnings = Vec::new();
        let merged = combine_unions(&prev, &next, Some(&schema), &mut warnings);
        assert_eq!(merged, next);
        assert_eq!(
            warnings.iter().map(Warning::as_str).collect::<Vec<_>>(),
            vec!["warning: In 'Profile' union type 'Parent' member has removed. This can break existing clients."]
        );
    }

    #[test]
    fn test_developer_modifiers_survive() {
        let prev: ClassDef = serde_yaml::from_str(
            r#"
name: Author
qualifiers: [readonly, service]
functions:
- {qualifiers: [isolated, resource], name: get, path: [name], returns: string}
- {qualifiers: [isolated, remote], name: rename, returns: string}
"#,
        )
        .unwrap();
        let next: ClassDef = serde_yaml::from_str(
            r#"
name: Author
qualifiers: [service]
functions:
- {qualifiers: [resource], name: get, path: [name], returns: string}
- {qualifiers: [resource], name: rename, returns: string}
"#,
        )
        .unwrap();

        let mut warnings = Vec::new();
        let merged = combine_classes(&prev, &next, DuplicateNames::Reject, &mut warnings).unwrap();
        assert_eq!(merged.qualifiers, vec!["readonly", "service"]);
        assert_eq!(merged.functions[0].declaration.qualifiers, vec!["isolated", "resource"]);
        // The main qualifier always follows next.
        let rename = merged.functions.iter().find(|f| f.key() == "rename").unwrap();
        assert_eq!(rename.declaration.qualifiers, vec!["isolated", "resource"]);
        assert_eq!(
            warnings.iter().map(Warning::as_str).collect::<Vec<_>>(),
            vec![
                "warning: In 'Author' service class 'rename' function qualifier list changed from 'remote' to \
                 'resource'. This can break existing clients."
            ]
        );
    }

    #[test]
    fn test_readonly_fields_survive() {
        let prev: RecordDef = serde_yaml::from_str(
            r#"
name: CreateBookInput
flavor: input
fields:
- {name: title, type: string, readonly: true}
"#,
        )
        .unwrap();
        let next: RecordDef = serde_yaml::from_str(
            r#"
name: CreateBookInput
flavor: input
fields:
- {name: title, type: string}
"#,
        )
        .unwrap();

        let mut warnings = Vec::new();
        let merged = combine_records(&prev, &next, DuplicateNames::Reject, &mut warnings).unwrap();
        assert!(warnings.is_empty());
        assert!(merged.fields[0].readonly);
    }

    #[test]
    fn test_class_attributes_and_helpers_survive() {
        let prev: ClassDef = serde_yaml::from_str(
            r#"
name: Author
attributes:
- {name: first, type: string}
- {name: last, type: string}
functions:
- {qualifiers: [resource], name: get, path: [name], returns: string, body: '{ return self.fullName(); }'}
- qualifiers: [isolated]
  name: fullName
  returns: string
  body: '{ return self.first + " " + self.last; }'
"#,
        )
        .unwrap();
        let next: ClassDef = serde_yaml::from_str(
            r#"
name: Author
functions:
- {qualifiers: [resource], name: get, path: [name], returns: string}
- {qualifiers: [resource], name: get, path: [age], returns: int}
"#,
        )
        .unwrap();

        let mut warnings = Vec::new();
        let merged = combine_classes(&prev, &next, DuplicateNames::Reject, &mut warnings).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(merged.attributes, prev.attributes);
        assert_eq!(
            merged.functions.iter().map(FunctionDefinition::key).collect::<Vec<_>>(),
            vec!["name", "age", "fullName"]
        );
        assert_eq!(merged.functions[2], prev.functions[1]);
    }
}
