use super::difference::Difference;
use crate::syntax::UnionDef;
use std::collections::HashSet;

/// UnionEquality compares the flattened member type names of two unions.
#[derive(Debug, Clone)]
pub struct UnionEquality<'a> {
    pub prev: &'a UnionDef,
    pub next: &'a UnionDef,
    /// Previous-only members in previous order.
    pub removed: Vec<String>,
    /// Next-only members in next order.
    pub added: Vec<String>,
}

impl<'a> UnionEquality<'a> {
    pub fn compare(prev: &'a UnionDef, next: &'a UnionDef) -> Self {
        let prev_members = prev.member_names();
        let next_members = next.member_names();
        let prev_set: HashSet<&str> = prev_members.iter().map(String::as_str).collect();
        let next_set: HashSet<&str> = next_members.iter().map(String::as_str).collect();

        let removed = distinct(prev_members.iter().filter(|m| !next_set.contains(m.as_str())));
        let added = distinct(next_members.iter().filter(|m| !prev_set.contains(m.as_str())));

        UnionEquality {
            prev,
            next,
            removed,
            added,
        }
    }

    pub fn is_match(&self) -> bool {
        self.prev.name == self.next.name
    }

    /// Member order and grouping are ignored.
    pub fn is_equal(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    pub fn differences(&self, out: &mut Vec<Difference>) {
        for member in &self.removed {
            out.push(Difference::UnionMemberRemoved {
                union: self.next.name.clone(),
                member: member.clone(),
            });
        }
        for member in &self.added {
            out.push(Difference::UnionMemberAdded {
                union: self.next.name.clone(),
                member: member.clone(),
            });
        }
    }
}

fn distinct<'s>(names: impl Iterator<Item = &'s String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for name in names {
        if seen.insert(name.as_str()) {
            out.push(name.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn union(yaml: &str) -> UnionDef {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_grouping_does_not_matter() {
        let prev = union("{name: Profile, type: 'Parent|Clerk|Teacher'}");
        let next = union("{name: Profile, type: 'Teacher|(Parent|Clerk)'}");
        let eq = UnionEquality::compare(&prev, &next);
        assert!(eq.is_match());
        assert!(eq.is_equal());
    }

    #[test]
    fn test_removed_members_in_previous_order() {
        let prev = union("{name: Profile, type: 'Parent|Clerk|Teacher'}");
        let next = union("{name: Profile, type: 'Teacher|Student'}");
        let eq = UnionEquality::compare(&prev, &next);

        let mut diffs = Vec::new();
        eq.differences(&mut diffs);
        assert_eq!(
            diffs,
            vec![
                Difference::UnionMemberRemoved {
                    union: "Profile".into(),
                    member: "Parent".into(),
                },
                Difference::UnionMemberRemoved {
                    union: "Profile".into(),
                    member: "Clerk".into(),
                },
                Difference::UnionMemberAdded {
                    union: "Profile".into(),
                    member: "Student".into(),
                },
            ]
        );
    }
}
