//! Wire-level tests for the search client against a mock server.
//!
//! Verifies the request shape (path + query parameter encoding), the
//! response mapping, and the error taxonomy for non-success statuses and
//! malformed bodies.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use csel_search::{SearchApiConfig, SearchApiError, SearchClient};

fn client_for(server: &MockServer) -> SearchClient {
    let config = SearchApiConfig::local_mock(&server.uri()).unwrap();
    SearchClient::new(config).unwrap()
}

fn two_users() -> serde_json::Value {
    serde_json::json!({
        "users": [
            {
                "id": 1,
                "firstName": "Ann",
                "lastName": "Abbott",
                "email": "ann.abbott@example.com",
                "company": {"name": "Abbott & Co"},
                "address": {"address": "12 High St", "city": "Leeds", "country": "UK"}
            },
            {
                "id": 2,
                "firstName": "Anna",
                "lastName": "Berg",
                "email": "anna.berg@example.com"
            }
        ],
        "total": 2,
        "skip": 0,
        "limit": 30
    })
}

#[tokio::test]
async fn search_maps_users_into_contacts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/search"))
        .and(query_param("q", "ann"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_users()))
        .expect(1)
        .mount(&server)
        .await;

    let contacts = client_for(&server).search("ann").await.unwrap();

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].id.as_str(), "remote-1");
    assert_eq!(contacts[0].name, "Ann Abbott");
    assert_eq!(contacts[0].company_name.as_deref(), Some("Abbott & Co"));
    assert_eq!(contacts[0].city, "Leeds");
    assert_eq!(contacts[1].id.as_str(), "remote-2");
    assert_eq!(contacts[1].address_line1, "");
}

#[tokio::test]
async fn query_parameter_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/search"))
        .and(query_param("q", "ann smith & co"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"users": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let contacts = client_for(&server).search("ann smith & co").await.unwrap();
    assert!(contacts.is_empty());
}

#[tokio::test]
async fn non_success_status_surfaces_as_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).search("ann").await.unwrap_err();
    match err {
        SearchApiError::Api { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "down for maintenance");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_surfaces_as_deserialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).search("ann").await.unwrap_err();
    assert!(matches!(err, SearchApiError::Deserialization { .. }));
}

#[tokio::test]
async fn empty_result_page_maps_to_empty_vec() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [], "total": 0, "skip": 0, "limit": 30
        })))
        .mount(&server)
        .await;

    let contacts = client_for(&server).search("zzz").await.unwrap();
    assert!(contacts.is_empty());
}
