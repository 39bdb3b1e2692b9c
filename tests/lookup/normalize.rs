use peoplepa_rs::{IdentifierKind, PeopleError, normalize_response};
use serde_json::json;

#[test]
fn email_shape_extracts_the_single_record() {
    let body = json!({"people": {"r1": {"personId": "42", "name": []}}});
    let payload = normalize_response(IdentifierKind::Email, body).unwrap();
    assert_eq!(payload, Some(json!({"personId": "42", "name": []})));
}

#[test]
fn email_shape_falsy_bodies_are_not_found() {
    for body in [json!({}), json!(null), json!([]), json!(""), json!(false), json!(0)] {
        assert_eq!(
            normalize_response(IdentifierKind::Email, body.clone()).unwrap(),
            None,
            "{body} should be not found"
        );
    }
}

// Known edge case: several records is not an expected upstream answer. The first
// record in document order is taken; this pins current behaviour, not a rule.
#[test]
fn email_shape_multiple_records_takes_first_in_document_order() {
    let body: serde_json::Value = serde_json::from_str(
        r#"{"people": {"zz": {"personId": "first"}, "aa": {"personId": "second"}}}"#,
    )
    .unwrap();
    let payload = normalize_response(IdentifierKind::Email, body).unwrap().unwrap();
    assert_eq!(payload["personId"], "first");
}

#[test]
fn email_shape_without_people_key_is_a_shape_error() {
    let err = normalize_response(IdentifierKind::Email, json!({"matches": []})).unwrap_err();
    assert!(matches!(err, PeopleError::Data(_)), "got {err:?}");
}

#[test]
fn email_shape_with_empty_people_mapping_is_a_shape_error() {
    let err = normalize_response(IdentifierKind::Email, json!({"people": {}})).unwrap_err();
    assert!(matches!(err, PeopleError::Data(_)), "got {err:?}");
}

#[test]
fn id_shape_not_found_sentinel() {
    let body = json!({"personResponse": [{"status": "NOT_FOUND"}]});
    assert_eq!(normalize_response(IdentifierKind::PersonId, body).unwrap(), None);
}

#[test]
fn id_shape_found_extracts_nested_person() {
    let body = json!({"personResponse": [{"status": "FOUND", "person": {"personId": "7"}}]});
    assert_eq!(
        normalize_response(IdentifierKind::PersonId, body).unwrap(),
        Some(json!({"personId": "7"}))
    );
}

#[test]
fn id_shape_only_first_record_is_considered() {
    let body = json!({"personResponse": [
        {"status": "NOT_FOUND"},
        {"status": "FOUND", "person": {"personId": "7"}}
    ]});
    assert_eq!(normalize_response(IdentifierKind::PersonId, body).unwrap(), None);
}

#[test]
fn id_shape_errors_on_unexpected_payloads() {
    for body in [
        json!({}),
        json!({"personResponse": []}),
        json!({"personResponse": [{"status": "FOUND"}]}),
        json!({"personResponse": [{"person": {"personId": "7"}}]}),
    ] {
        assert!(
            matches!(
                normalize_response(IdentifierKind::PersonId, body.clone()),
                Err(PeopleError::Data(_))
            ),
            "{body} should be a shape error"
        );
    }
}
