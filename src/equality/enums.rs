use super::difference::Difference;
use crate::error::MergeError;
use crate::names::{match_by_name, DuplicateNames};
use crate::syntax::{EnumDef, EnumMember};

/// EnumEquality compares the member name sets of two enums.
#[derive(Debug, Clone)]
pub struct EnumEquality<'a> {
    pub prev: &'a EnumDef,
    pub next: &'a EnumDef,
    pub removed: Vec<&'a EnumMember>,
    pub added: Vec<&'a EnumMember>,
}

impl<'a> EnumEquality<'a> {
    pub fn compare(prev: &'a EnumDef, next: &'a EnumDef, policy: DuplicateNames) -> Result<Self, MergeError> {
        let scope = format!("enum '{}'", next.name);
        let matching = match_by_name(&prev.members, &next.members, |m| m.name.clone(), &scope, policy)?;
        Ok(EnumEquality {
            prev,
            next,
            removed: matching.removed,
            added: matching.added,
        })
    }

    pub fn is_match(&self) -> bool {
        self.prev.name == self.next.name
    }

    /// Member order is ignored.
    pub fn is_equal(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    pub fn differences(&self, out: &mut Vec<Difference>) {
        for member in &self.removed {
            out.push(Difference::EnumMemberRemoved {
                enumeration: self.next.name.clone(),
                member: member.name.clone(),
            });
        }
        for member in &self.added {
            out.push(Difference::EnumMemberAdded {
                enumeration: self.next.name.clone(),
                member: member.name.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn enumeration(yaml: &str) -> EnumDef {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_reordered_members_are_equal() {
        let prev = enumeration("{name: Gender, members: [{name: MALE}, {name: FEMALE}]}");
        let next = enumeration("{name: Gender, members: [{name: FEMALE}, {name: MALE}]}");
        let eq = EnumEquality::compare(&prev, &next, DuplicateNames::Reject).unwrap();
        assert!(eq.is_match());
        assert!(eq.is_equal());
    }

    #[test]
    fn test_removed_member() {
        let prev = enumeration("{name: Gender, members: [{name: MALE}, {name: FEMALE}]}");
        let next = enumeration("{name: Gender, members: [{name: MALE}, {name: OTHER}]}");
        let eq = EnumEquality::compare(&prev, &next, DuplicateNames::Reject).unwrap();

        let mut diffs = Vec::new();
        eq.differences(&mut diffs);
        assert_eq!(
            diffs,
            vec![
                Difference::EnumMemberRemoved {
                    enumeration: "Gender".into(),
                    member: "FEMALE".into(),
                },
                Difference::EnumMemberAdded {
                    enumeration: "Gender".into(),
                    member: "OTHER".into(),
                },
            ]
        );
    }
}
