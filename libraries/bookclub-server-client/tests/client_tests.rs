//! Tests for the Bookclub admin API client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server connection.

use bookclub_core::SearchField;
use bookclub_server_client::{BookclubClient, ClientError, ListUsersQuery, ServerConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BookclubClient {
    BookclubClient::new(ServerConfig::new(server.uri())).expect("valid url")
}

fn user_json(id: i64, nickname: &str, deleted: bool) -> serde_json::Value {
    json!({
        "id": id,
        "createdAt": "2025-10-01T12:00:00Z",
        "nickname": nickname,
        "email": format!("{nickname}@example.com"),
        "ageGroup": "20s",
        "postCount": 4,
        "lastActive": "2026-02-01T08:00:00Z",
        "deletedAt": if deleted { json!("2026-01-15T00:00:00Z") } else { json!(null) },
    })
}

fn page_json(users: Vec<serde_json::Value>, total_pages: u32, total_elements: u64) -> serde_json::Value {
    json!({
        "content": users,
        "totalPages": total_pages,
        "totalElements": total_elements,
    })
}

// =============================================================================
// Server Config Tests
// =============================================================================

mod server_config {
    use super::*;

    #[test]
    fn test_new_with_url() {
        let config = ServerConfig::new("https://example.com");
        assert_eq!(config.url, "https://example.com");
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_with_token() {
        let config = ServerConfig::with_token("https://example.com", "token_123");
        assert_eq!(config.access_token.as_deref(), Some("token_123"));
    }
}

// =============================================================================
// Listing Tests
// =============================================================================

mod listing {
    use super::*;

    #[tokio::test]
    async fn test_list_sends_paging_params_and_parses_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .and(query_param("page", "2"))
            .and(query_param("size", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
                vec![user_json(1, "alpha", false), user_json(2, "beta", true)],
                5,
                42,
            )))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let page = client.users().list(&ListUsersQuery::new(2, 10)).await.unwrap();

        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total_elements, 42);
        assert_eq!(page.content[0].nickname, "alpha");
        assert!(page.content[0].is_active());
        assert!(!page.content[1].is_active());
    }

    #[tokio::test]
    async fn test_list_sends_search_field_and_keyword() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .and(query_param("searchType", "email"))
            .and(query_param("keyword", "kim"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0, 0)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = ListUsersQuery::new(0, 10).with_search(SearchField::Email, "kim");
        client.users().list(&query).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_keyword_is_omitted() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0, 0)))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = ListUsersQuery::new(0, 10).with_search(SearchField::Nickname, "");
        client.users().list(&query).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let url = &requests[0].url;
        assert!(url.query_pairs().any(|(k, v)| k == "searchType" && v == "name"));
        assert!(!url.query_pairs().any(|(k, _)| k == "keyword"));
    }

    #[tokio::test]
    async fn test_keyword_is_percent_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .and(query_param("keyword", "a b&c"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0, 0)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = ListUsersQuery::new(0, 10).with_search(SearchField::Nickname, "a b&c");
        client.users().list(&query).await.unwrap();
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_configured() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .and(header("Authorization", "Bearer secret_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0, 0)))
            .expect(1)
            .mount(&server)
            .await;

        let config = ServerConfig::with_token(server.uri(), "secret_token");
        let client = BookclubClient::new(config).unwrap();
        client.users().list(&ListUsersQuery::new(0, 10)).await.unwrap();
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_auth_required() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.users().list(&ListUsersQuery::new(0, 10)).await;
        assert!(matches!(result, Err(ClientError::AuthRequired)));
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.users().list(&ListUsersQuery::new(0, 10)).await;
        match result {
            Err(ClientError::Server { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected Server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.users().list(&ListUsersQuery::new(0, 10)).await;
        assert!(matches!(result, Err(ClientError::Parse(_))));
    }

    #[tokio::test]
    async fn test_unknown_age_label_is_a_parse_error() {
        let server = MockServer::start().await;

        let mut bad_user = user_json(1, "odd", false);
        bad_user["ageGroup"] = json!("90s");
        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![bad_user], 1, 1)))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.users().list(&ListUsersQuery::new(0, 10)).await;
        assert!(matches!(result, Err(ClientError::Parse(_))));
    }
}

// =============================================================================
// Connection Tests
// =============================================================================

mod connection {
    use super::*;

    #[tokio::test]
    async fn test_connection_parses_server_info() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "bookclub",
                "version": "1.4.0",
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let info = client.test_connection().await.unwrap();
        assert_eq!(info.name, "bookclub");
        assert_eq!(info.version, "1.4.0");
    }

    #[tokio::test]
    async fn test_connection_surfaces_server_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/info"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.test_connection().await;
        assert!(matches!(result, Err(ClientError::Server { status: 503, .. })));
    }
}
