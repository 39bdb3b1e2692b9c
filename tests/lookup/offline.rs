use crate::common::{client_for, fixture, mock_lookup, mock_people, setup_server};
use httpmock::Method::GET;
use peoplepa_rs::{IdentifierKind, LookupBuilder, LookupOutcome, PeopleClient, PeopleError};
use url::Url;

#[tokio::test]
async fn lookup_email_found_from_fixture() {
    let server = setup_server();
    let mock = mock_lookup(&server, "ada@example.com", fixture("people_lookup_found"));
    let client = client_for(&server);

    let res = client.lookup_email("ada@example.com").await.unwrap();
    mock.assert();

    assert!(res.found);
    let p = &res.person;
    assert_eq!(p.person_id, "104010957463213377912");
    assert_eq!(p.best_display_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(p.names["PROFILE"].given_name.as_deref(), Some("Ada"));
    assert_eq!(p.emails["PROFILE"].value, "ada@example.com");
    assert!(!p.profile_photos["PROFILE"].is_default);
    assert!(p.cover_photos["PROFILE"].is_default);
    assert_eq!(p.in_app_reachability["PROFILE"], vec!["BABEL", "PHOTOS"]);
    assert_eq!(
        p.source_ids["PROFILE"].last_updated.as_deref(),
        Some("2024-03-01T10:00:00.000Z")
    );
}

#[tokio::test]
async fn lookup_email_sends_default_template_params() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/people/lookup")
            .query_param("id", "ada@example.com")
            .query_param("type", "EMAIL")
            .query_param("match_type", "EXACT")
            .query_param("request_mask.include_field.paths", "person.metadata");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });
    let client = client_for(&server);

    let res = client.lookup_email("ada@example.com").await.unwrap();
    mock.assert();
    assert!(!res.found);
}

#[tokio::test]
async fn lookup_email_with_detail_level_and_session() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/people/lookup")
            .query_param("id", "ada@example.com")
            .query_param("core_id_params.enable_private_names", "true")
            .query_param("match_type", "EXACT")
            .query_param("key", "test-key")
            .header("authorization", "SAPISIDHASH 1_abc");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("people_lookup_found"));
    });

    let client = PeopleClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .api_key("test-key")
        .header("Authorization", "SAPISIDHASH 1_abc")
        .build()
        .unwrap();

    let res = LookupBuilder::new(&client, IdentifierKind::Email, "ada@example.com")
        .detail_level("max_details")
        .fetch()
        .await
        .unwrap();
    mock.assert();
    assert!(res.found);
}

#[tokio::test]
async fn lookup_person_id_found_and_not_found() {
    let server = setup_server();
    let found = mock_people(&server, "104010957463213377912", fixture("people_found"));
    let missing = mock_people(&server, "000000000000000000000", fixture("people_not_found"));
    let client = client_for(&server);

    let res = client
        .lookup_person_id("104010957463213377912")
        .await
        .unwrap();
    assert!(res.found);
    assert_eq!(res.person.names.len(), 2);
    assert_eq!(
        res.person.names["DOMAIN_PROFILE"].display_name.as_deref(),
        Some("A. Lovelace")
    );

    let res = client
        .lookup_person_id("000000000000000000000")
        .await
        .unwrap();
    assert!(!res.found);
    assert!(res.person.is_empty());

    found.assert();
    missing.assert();
}

#[tokio::test]
async fn unknown_detail_level_fails_before_any_request() {
    let server = setup_server();
    let mock = mock_lookup(&server, "ada@example.com", fixture("people_lookup_found"));
    let client = client_for(&server);

    let err = LookupBuilder::new(&client, IdentifierKind::Email, "ada@example.com")
        .detail_level("everything")
        .fetch_outcome()
        .await
        .unwrap_err();

    assert!(matches!(err, PeopleError::UnknownTemplate { .. }), "got {err:?}");
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn fetch_outcome_keeps_not_found_distinct() {
    let server = setup_server();
    let _mock = mock_people(&server, "000000000000000000000", fixture("people_not_found"));
    let client = client_for(&server);

    let outcome = LookupBuilder::new(&client, IdentifierKind::PersonId, "000000000000000000000")
        .fetch_outcome()
        .await
        .unwrap();
    assert_eq!(outcome, LookupOutcome::NotFound);
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/peoplepa/v2/people/lookup")
            .query_param("id", "ada@example.com");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("people_lookup_found"));
    });

    let client = PeopleClient::builder()
        .base_url(Url::parse(&server.url("/peoplepa")).unwrap())
        .build()
        .unwrap();

    let res = client.lookup_email("ada@example.com").await.unwrap();
    mock.assert();
    assert!(res.found);
}
