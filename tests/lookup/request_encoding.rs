use crate::common::{client_for, setup_server};
use httpmock::Method::POST;
use peoplepa_rs::{
    Endpoint, ParamValue, PayloadEncoding, Transport, Verb, compose, params,
};
use serde_json::json;

static LOOKUP_JSON: Endpoint = Endpoint {
    name: "people_lookup_json",
    verb: Verb::Post,
    path: "/v2/people/lookup",
    payload: PayloadEncoding::Json,
};

static LOOKUP_FORM: Endpoint = Endpoint {
    name: "people_lookup_form",
    verb: Verb::Post,
    path: "/v2/people/lookup",
    payload: PayloadEncoding::Form,
};

#[tokio::test]
async fn json_payload_rides_in_the_body() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/people/lookup")
            .query_param_missing("id")
            .query_param_missing("type")
            .json_body(json!({
                "id": "ada@example.com",
                "type": "EMAIL",
                "core_id_params.enable_private_names": true,
                "request_mask.include_container": ["PROFILE", "DOMAIN_PROFILE"],
            }));
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });
    let client = client_for(&server);

    let template = params([
        ("type", ParamValue::from("EMAIL")),
        ("core_id_params.enable_private_names", true.into()),
        ("request_mask.include_container", ["PROFILE", "DOMAIN_PROFILE"].into()),
    ]);
    let req = compose(&LOOKUP_JSON, &template, "id", "ada@example.com");

    let body = client.send(&req).await.unwrap();
    mock.assert();
    assert_eq!(body, "{}");
}

#[tokio::test]
async fn form_payload_rides_in_the_body_and_key_stays_in_query() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/people/lookup")
            .query_param("key", "test-key")
            .query_param_missing("id")
            .form_urlencoded_tuple("id", "ada@example.com")
            .form_urlencoded_tuple("type", "EMAIL");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });
    let client = peoplepa_rs::PeopleClient::builder()
        .base_url(url::Url::parse(&server.base_url()).unwrap())
        .api_key("test-key")
        .build()
        .unwrap();

    let template = params([("type", ParamValue::from("EMAIL"))]);
    let req = compose(&LOOKUP_FORM, &template, "id", "ada@example.com");

    client.send(&req).await.unwrap();
    mock.assert();
}
