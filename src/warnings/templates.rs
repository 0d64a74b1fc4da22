//! Literal wording of every breaking-change warning.
//!
//! Downstream tooling matches on these strings, spelling included, so the
//! text must not be normalized.

use crate::equality::OwnerKind;
use crate::syntax::RecordFlavor;

pub const PREFIX: &str = "warning: ";

const EXISTING: &str = "This can break existing clients.";
const AVAILABLE: &str = "This can break available clients";

pub fn field_removed(record: &str, flavor: RecordFlavor, field: &str) -> String {
    format!(
        "{}In '{}' {} '{}' field has removed. This can brake clients.",
        PREFIX,
        record,
        flavor.as_str(),
        field
    )
}

pub fn field_added_without_default(record: &str, flavor: RecordFlavor, field: &str) -> String {
    format!(
        "{}In '{}' {} '{}' field is introduced without a default value. This can brake available clients",
        PREFIX,
        record,
        flavor.as_str(),
        field
    )
}

pub fn field_default_removed(record: &str, field: &str, value: &str) -> String {
    format!(
        "{}In '{}' record type '{}' field assigned '{}' default value has removed. {}",
        PREFIX, record, field, value, EXISTING
    )
}

pub fn field_type_changed(record: &str, flavor: RecordFlavor, field: &str, from: &str, to: &str) -> String {
    format!(
        "{}In '{}' {} '{}' field type has changed from '{}' to '{}'. {}",
        PREFIX,
        record,
        flavor.as_str(),
        field,
        from,
        to,
        EXISTING
    )
}

pub fn enum_member_removed(enumeration: &str, member: &str) -> String {
    format!("{}In '{}' enum '{}' member has removed. {}", PREFIX, enumeration, member, EXISTING)
}

pub fn union_member_removed(union: &str, member: &str) -> String {
    format!("{}In '{}' union type '{}' member has removed. {}", PREFIX, union, member, EXISTING)
}

pub fn method_removed(kind: OwnerKind, owner: &str, method: &str) -> String {
    match kind {
        OwnerKind::ServiceObject => format!(
            "{}In '{}' service object '{}' method declaration has removed. {}",
            PREFIX, owner, method, EXISTING
        ),
        OwnerKind::Interface => format!(
            "{}In '{}' interface service object '{}' method declaration has removed. {}",
            PREFIX, owner, method, EXISTING
        ),
        OwnerKind::ServiceClass => format!(
            "{}In '{}' service class '{}' function definition has removed. {}",
            PREFIX, owner, method, AVAILABLE
        ),
    }
}

pub fn parameter_removed(kind: OwnerKind, owner: &str, method: &str, parameter: &str) -> String {
    match kind {
        OwnerKind::ServiceClass => format!(
            "{}In '{}' class '{}' function definition '{}' parameter removed. {}",
            PREFIX, owner, method, parameter, EXISTING
        ),
        _ => format!(
            "{}In '{}' service object '{}' method declaration '{}' parameter has removed. {}",
            PREFIX, owner, method, parameter, EXISTING
        ),
    }
}

pub fn parameter_added_without_default(kind: OwnerKind, owner: &str, method: &str, parameter: &str) -> String {
    match kind {
        OwnerKind::ServiceClass => format!(
            "{}In '{}' class '{}' function definition '{}' parameter added without default value. {}",
            PREFIX, owner, method, parameter, EXISTING
        ),
        _ => format!(
            "{}In '{}' service object '{}' method declaration '{}' parameter added without default value. {}",
            PREFIX, owner, method, parameter, EXISTING
        ),
    }
}

pub fn parameter_default_removed(kind: OwnerKind, owner: &str, method: &str, parameter: &str, value: &str) -> String {
    match kind {
        OwnerKind::ServiceClass => format!(
            "{}In '{}' service class '{}' function '{}' parameter assigned '{}' default value has removed. {}",
            PREFIX, owner, method, parameter, value, EXISTING
        ),
        _ => format!(
            "{}In '{}' service object '{}' method declaration '{}' parameter assigned '{}' default value has removed. {}",
            PREFIX, owner, method, parameter, value, EXISTING
        ),
    }
}

pub fn parameter_type_changed(
    kind: OwnerKind,
    owner: &str,
    method: &str,
    parameter: &str,
    from: &str,
    to: &str,
) -> String {
    match kind {
        OwnerKind::ServiceClass => format!(
            "{}In '{}' class '{}' function definition '{}' parameter type has changed from '{}' to '{}'. {}",
            PREFIX, owner, method, parameter, from, to, EXISTING
        ),
        _ => format!(
            "{}In '{}' service object '{}' method declaration '{}' parameter type change from '{}' to '{}'. {}",
            PREFIX, owner, method, parameter, from, to, EXISTING
        ),
    }
}

pub fn return_type_changed(kind: OwnerKind, owner: &str, method: &str, from: &str, to: &str) -> String {
    match kind {
        OwnerKind::ServiceClass => format!(
            "{}In '{}' class '{}' function definition return type has changed from '{}' to '{}'. {}",
            PREFIX, owner, method, from, to, EXISTING
        ),
        _ => format!(
            "{}In '{}' service object '{}' method declaration return type has changed from '{}' to '{}'. {}",
            PREFIX, owner, method, from, to, EXISTING
        ),
    }
}

pub fn main_qualifier_changed(kind: OwnerKind, owner: &str, method: &str, from: &str, to: &str) -> String {
    let label = match kind {
        OwnerKind::ServiceObject => "service object",
        OwnerKind::Interface => "interface",
        OwnerKind::ServiceClass => "service class",
    };
    format!(
        "{}In '{}' {} '{}' function qualifier list changed from '{}' to '{}'. {}",
        PREFIX, owner, label, method, from, to, EXISTING
    )
}

pub fn resolver_kind_changed(kind: OwnerKind, owner: &str, method: &str, from: &str, to: &str) -> String {
    let label = match kind {
        OwnerKind::ServiceClass => "service class",
        OwnerKind::ServiceObject | OwnerKind::Interface => "service object",
    };
    format!(
        "{}In '{}' {} '{}' method changed from '{}' to '{}'. {}",
        PREFIX, owner, label, method, from, to, EXISTING
    )
}
