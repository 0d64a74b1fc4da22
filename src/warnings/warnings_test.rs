//! Tests for breaking-change classification.

#[cfg(test)]
mod tests {
    use crate::warnings::*;
    use crate::equality::{MethodOwner, OwnerKind};
    use crate::syntax::{RecordFlavor, ResolverKind};
    use pretty_assertions::assert_eq;

    fn ty(s: &str) -> TypeDescriptor {
        s.parse().unwrap()
    }

    fn render(diff: Difference) -> Option<String> {
        classify(&diff).map(|w| w.to_string())
    }

    fn object() -> MethodOwner {
        MethodOwner::new(OwnerKind::ServiceObject, "LibraryApi")
    }

    fn interface() -> MethodOwner {
        MethodOwner::new(OwnerKind::Interface, "Info")
    }

    fn class() -> MethodOwner {
        MethodOwner::new(OwnerKind::ServiceClass, "Child")
    }

    #[test]
    fn test_field_warnings() {
        assert_eq!(
            render(Difference::FieldRemoved {
                record: "Book".into(),
                flavor: RecordFlavor::Record,
                field: "price".into(),
            })
            .unwrap(),
            "warning: In 'Book' record type 'price' field has removed. This can brake clients."
        );
        assert_eq!(
            render(Difference::FieldRemoved {
                record: "CreateBookInput".into(),
                flavor: RecordFlavor::Input,
                field: "price".into(),
            })
            .unwrap(),
            "warning: In 'CreateBookInput' input type 'price' field has removed. This can brake clients."
        );
        assert_eq!(
            render(Difference::FieldDefaultRemoved {
                record: "CreateBookInput".into(),
                field: "version".into(),
                value: "\"v1.0\"".into(),
            })
            .unwrap(),
            "warning: In 'CreateBookInput' record type 'version' field assigned '\"v1.0\"' default value has removed. \
             This can break existing clients."
        );
        assert_eq!(
            render(Difference::FieldTypeChanged {
                record: "Book".into(),
                flavor: RecordFlavor::Record,
                field: "id".into(),
                from: ty("int"),
                to: ty("int?"),
            })
            .unwrap(),
            "warning: In 'Book' record type 'id' field type has changed from 'int' to 'int?'. This can break existing clients."
        );
    }

    #[test]
    fn test_added_field_without_default_warns() {
        // Scenario: an input type gains a mandatory field.
        assert_eq!(
            render(Difference::FieldAdded {
                record: "CreateAuthorInput".into(),
                flavor: RecordFlavor::Input,
                field: "address".into(),
                default: None,
            })
            .unwrap(),
            "warning: In 'CreateAuthorInput' input type 'address' field is introduced without a default value. \
             This can brake available clients"
        );
    }

    #[test]
    fn test_non_breaking_differences_are_silent() {
        let silent = vec![
            Difference::FieldAdded {
                record: "CreateAuthorInput".into(),
                flavor: RecordFlavor::Input,
                field: "address".into(),
                default: Some("\"\"".into()),
            },
            Difference::FieldDefaultChanged {
                record: "Book".into(),
                field: "version".into(),
                from: "1".into(),
                to: "2".into(),
            },
            Difference::ParameterDefaultChanged {
                owner: object(),
                method: "books".into(),
                parameter: "limit".into(),
                from: "10".into(),
                to: "20".into(),
            },
            Difference::ParameterAdded {
                owner: class(),
                method: "books".into(),
                parameter: "limit".into(),
                default: Some("10".into()),
            },
            Difference::EnumMemberAdded {
                enumeration: "Gender".into(),
                member: "OTHER".into(),
            },
            Difference::UnionMemberAdded {
                union: "Profile".into(),
                member: "Student".into(),
            },
            Difference::MethodAdded {
                owner: object(),
                method: "authors".into(),
            },
            Difference::QualifiersChanged {
                owner: object(),
                method: "addBook".into(),
                from: vec!["remote".into()],
                to: vec!["isolated".into(), "remote".into()],
            },
        ];
        for diff in silent {
            assert!(!is_breaking(&diff), "{:?}", diff);
            assert_eq!(classify(&diff), None);
        }
    }

    #[test]
    fn test_enum_and_union_member_removed() {
        assert_eq!(
            render(Difference::EnumMemberRemoved {
                enumeration: "Gender".into(),
                member: "FEMALE".into(),
            })
            .unwrap(),
            "warning: In 'Gender' enum 'FEMALE' member has removed. This can break existing clients."
        );
        assert_eq!(
            render(Difference::UnionMemberRemoved {
                union: "Profile".into(),
                member: "Parent".into(),
            })
            .unwrap(),
            "warning: In 'Profile' union type 'Parent' member has removed. This can break existing clients."
        );
    }

    #[test]
    fn test_method_removed_per_owner_kind() {
        let removed = |owner: MethodOwner| {
            render(Difference::MethodRemoved {
                owner,
                method: "book".into(),
            })
            .unwrap()
        };
        assert_eq!(
            removed(object()),
            "warning: In 'LibraryApi' service object 'book' method declaration has removed. This can break existing clients."
        );
        assert_eq!(
            removed(interface()),
            "warning: In 'Info' interface service object 'book' method declaration has removed. \
             This can break existing clients."
        );
        assert_eq!(
            removed(class()),
            "warning: In 'Child' service class 'book' function definition has removed. This can break available clients"
        );
    }

    #[test]
    fn test_object_parameter_warnings() {
        let owner = interface();
        let diffs = vec![
            Difference::ParameterRemoved {
                owner: owner.clone(),
                method: "book".into(),
                parameter: "id".into(),
            },
            Difference::ParameterAdded {
                owner: owner.clone(),
                method: "book".into(),
                parameter: "isbn".into(),
                default: None,
            },
            Difference::ParameterDefaultRemoved {
                owner: owner.clone(),
                method: "book".into(),
                parameter: "limit".into(),
                value: "10".into(),
            },
            Difference::ParameterTypeChanged {
                owner: owner.clone(),
                method: "book".into(),
                parameter: "title".into(),
                from: ty("string"),
                to: ty("string?"),
            },
            Difference::ReturnTypeChanged {
                owner,
                method: "book".into(),
                from: Some(ty("Book?")),
                to: Some(ty("Book")),
            },
        ];
        let mut warnings = Vec::new();
        classify_all(&diffs, &mut warnings);

        let texts: Vec<&str> = warnings.iter().map(Warning::as_str).collect();
        assert_eq!(
            texts,
            vec![
                "warning: In 'Info' service object 'book' method declaration 'id' parameter has removed. \
                 This can break existing clients.",
                "warning: In 'Info' service object 'book' method declaration 'isbn' parameter added without default \
                 value. This can break existing clients.",
                "warning: In 'Info' service object 'book' method declaration 'limit' parameter assigned '10' default \
                 value has removed. This can break existing clients.",
                "warning: In 'Info' service object 'book' method declaration 'title' parameter type change from \
                 'string' to 'string?'. This can break existing clients.",
                "warning: In 'Info' service object 'book' method declaration return type has changed from 'Book?' to \
                 'Book'. This can break existing clients.",
            ]
        );
    }

    #[test]
    fn test_class_parameter_warnings() {
        let owner = class();
        let diffs = vec![
            Difference::ParameterRemoved {
                owner: owner.clone(),
                method: "knowsWords".into(),
                parameter: "word".into(),
            },
            Difference::ParameterAdded {
                owner: owner.clone(),
                method: "knowsWords".into(),
                parameter: "word1".into(),
                default: None,
            },
            Difference::ParameterDefaultRemoved {
                owner: owner.clone(),
                method: "knowsWords".into(),
                parameter: "id".into(),
                value: "1".into(),
            },
            Difference::ParameterTypeChanged {
                owner: owner.clone(),
                method: "knowsWords".into(),
                parameter: "id".into(),
                from: ty("int"),
                to: ty("string"),
            },
            Difference::ReturnTypeChanged {
                owner,
                method: "knowsWords".into(),
                from: None,
                to: Some(ty("string")),
            },
        ];
        let mut warnings = Vec::new();
        classify_all(&diffs, &mut warnings);

        let texts: Vec<&str> = warnings.iter().map(Warning::as_str).collect();
        assert_eq!(
            texts,
            vec![
                "warning: In 'Child' class 'knowsWords' function definition 'word' parameter removed. \
                 This can break existing clients.",
                "warning: In 'Child' class 'knowsWords' function definition 'word1' parameter added without default \
                 value. This can break existing clients.",
                "warning: In 'Child' service class 'knowsWords' function 'id' parameter assigned '1' default value \
                 has removed. This can break existing clients.",
                "warning: In 'Child' class 'knowsWords' function definition 'id' parameter type has changed from \
                 'int' to 'string'. This can break existing clients.",
                "warning: In 'Child' class 'knowsWords' function definition return type has changed from '()' to \
                 'string'. This can break existing clients.",
            ]
        );
    }

    #[test]
    fn test_qualifier_and_resolver_kind_warnings() {
        assert_eq!(
            render(Difference::MainQualifierChanged {
                owner: interface(),
                method: "book".into(),
                from: Some("resource".into()),
                to: Some("remote".into()),
            })
            .unwrap(),
            "warning: In 'Info' interface 'book' function qualifier list changed from 'resource' to 'remote'. \
             This can break existing clients."
        );
        assert_eq!(
            render(Difference::MainQualifierChanged {
                owner: class(),
                method: "greet".into(),
                from: None,
                to: Some("remote".into()),
            })
            .unwrap(),
            "warning: In 'Child' service class 'greet' function qualifier list changed from 'none' to 'remote'. \
             This can break existing clients."
        );
        assert_eq!(
            render(Difference::ResolverKindChanged {
                owner: interface(),
                method: "authorNames".into(),
                from: ResolverKind::Get,
                to: ResolverKind::Subscribe,
            })
            .unwrap(),
            "warning: In 'Info' service object 'authorNames' method changed from 'get' to 'subscribe'. \
             This can break existing clients."
        );
        assert_eq!(
            render(Difference::ResolverKindChanged {
                owner: class(),
                method: "authorNames".into(),
                from: ResolverKind::Subscribe,
                to: ResolverKind::Get,
            })
            .unwrap(),
            "warning: In 'Child' service class 'authorNames' method changed from 'subscribe' to 'get'. \
             This can break existing clients."
        );
    }

    #[test]
    fn test_every_warning_has_prefix() {
        let warning = classify(&Difference::EnumMemberRemoved {
            enumeration: "Gender".into(),
            member: "FEMALE".into(),
        })
        .unwrap();
        assert!(warning.as_str().starts_with(PREFIX));
        assert_eq!(warning.to_string(), warning.as_str());
    }
}
