use peoplepa_rs::{IdentifierKind, ParamValue, PeopleError, TemplateRegistry, TemplateSet, params};

#[test]
fn every_builtin_level_resolves_to_a_non_empty_mapping() {
    let reg = TemplateRegistry::default();
    for kind in [IdentifierKind::Email, IdentifierKind::PersonId] {
        let names: Vec<String> = reg.set(kind).names().map(str::to_string).collect();
        assert!(!names.is_empty());
        for name in names {
            let p = reg.resolve(kind, &name).unwrap();
            assert!(!p.is_empty(), "{kind:?}/{name} is empty");
        }
    }
}

#[test]
fn builtin_level_names_per_endpoint() {
    let reg = TemplateRegistry::default();
    let email: Vec<&str> = reg.set(IdentifierKind::Email).names().collect();
    let people: Vec<&str> = reg.set(IdentifierKind::PersonId).names().collect();
    assert_eq!(email, vec!["just_gaia_id", "just_name", "max_details"]);
    assert_eq!(people, vec!["just_name", "max_details"]);
}

#[test]
fn default_levels_exist_in_their_sets() {
    let reg = TemplateRegistry::default();
    for kind in [IdentifierKind::Email, IdentifierKind::PersonId] {
        assert!(reg.resolve(kind, kind.default_detail_level()).is_ok());
    }
}

#[test]
fn unknown_level_is_an_error_not_a_fallback() {
    let reg = TemplateRegistry::default();

    // `just_gaia_id` only exists for the email endpoint.
    let err = reg
        .resolve(IdentifierKind::PersonId, "just_gaia_id")
        .unwrap_err();
    match err {
        PeopleError::UnknownTemplate { endpoint, template } => {
            assert_eq!(endpoint, "people");
            assert_eq!(template, "just_gaia_id");
        }
        other => panic!("expected UnknownTemplate, got {other:?}"),
    }

    for bogus in ["", "default", "MAX_DETAILS", "max_details "] {
        assert!(matches!(
            reg.resolve(IdentifierKind::Email, bogus),
            Err(PeopleError::UnknownTemplate { .. })
        ));
    }
}

#[test]
fn levels_are_complete_sets_not_diffs() {
    let reg = TemplateRegistry::default();
    let name = reg.resolve(IdentifierKind::Email, "just_name").unwrap();
    let max = reg.resolve(IdentifierKind::Email, "max_details").unwrap();

    assert_eq!(name.get("type"), Some(&ParamValue::from("EMAIL")));
    assert_eq!(max.get("type"), Some(&ParamValue::from("EMAIL")));
    assert_eq!(
        name.get("request_mask.include_field.paths"),
        Some(&ParamValue::from("person.name"))
    );
    match max.get("request_mask.include_container") {
        Some(ParamValue::List(containers)) => {
            assert_eq!(containers.len(), 10);
            assert_eq!(containers[0], "AFFINITY");
        }
        other => panic!("expected container list, got {other:?}"),
    }
    assert!(!name.contains_key("extension_set.extension_names"));
}

#[test]
fn empty_template_set_is_rejected() {
    let none: Vec<(String, peoplepa_rs::Params)> = Vec::new();
    assert!(matches!(
        TemplateSet::new(none),
        Err(PeopleError::InvalidParams(_))
    ));
}

#[test]
fn custom_registry_replaces_builtin_levels() {
    let lookup = TemplateSet::new([("bare", params([("type", "EMAIL".into())]))]).unwrap();
    let people = TemplateSet::new([("bare", params([("x", true.into())]))]).unwrap();
    let reg = TemplateRegistry::new(lookup, people);

    assert!(reg.resolve(IdentifierKind::Email, "bare").is_ok());
    assert!(reg.resolve(IdentifierKind::Email, "just_gaia_id").is_err());
    assert_eq!(
        reg.resolve(IdentifierKind::PersonId, "bare").unwrap().get("x"),
        Some(&ParamValue::Bool(true))
    );
}
