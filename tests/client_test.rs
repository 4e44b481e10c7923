use httpmock::prelude::*;
use httpmock::Method::PATCH;
use rise::config::SynapseSection;
use rise::domain::model::{CreateUserRequest, NodeRequest, SubnetRequest};
use rise::{PaymentsGateway, RiseError, SynapseClient};

fn test_credentials(base_url: String) -> SynapseSection {
    SynapseSection {
        base_url,
        client_id: "client_id_123".to_string(),
        client_secret: "client_secret_456".to_string(),
        client_user_ip: "127.0.0.1".to_string(),
        client_user: "user_fingerprint_789".to_string(),
        timeout_seconds: None,
    }
}

fn test_client(server: &MockServer) -> SynapseClient<SynapseSection> {
    SynapseClient::new(test_credentials(server.base_url())).unwrap()
}

const GATEWAY: &str = "client_id_123|client_secret_456";
const FINGERPRINT: &str = "user_fingerprint_789";

#[tokio::test]
async fn test_get_all_users_sends_identity_headers() {
    let server = MockServer::start();
    let users = serde_json::json!({"users": [{"_id": "user_1"}, {"_id": "user_2"}]});

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users")
            .header("X-SP-GATEWAY", GATEWAY)
            .header("X-SP-USER-IP", "127.0.0.1")
            .header("X-SP-USER", FINGERPRINT);
        then.status(200).json_body(users.clone());
    });

    let client = test_client(&server);
    let response = client.get_all_users(None, None).await.unwrap();

    mock.assert();
    assert_eq!(response, users);
}

#[tokio::test]
async fn test_get_all_users_with_pagination() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users")
            .query_param("page", "2")
            .query_param("per_page", "10");
        then.status(200).json_body(serde_json::json!({"users": []}));
    });

    let client = test_client(&server);
    client.get_all_users(Some(2), Some(10)).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_get_user_substitutes_user_id() {
    let server = MockServer::start();
    let user = serde_json::json!({"_id": "user_abc", "refresh_token": "refresh-xyz"});

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/user_abc")
            .header("X-SP-GATEWAY", GATEWAY)
            .header("X-SP-USER", FINGERPRINT);
        then.status(200).json_body(user.clone());
    });

    let client = test_client(&server);
    let response = client.get_user("user_abc").await.unwrap();

    mock.assert();
    assert_eq!(response["refresh_token"], "refresh-xyz");
}

#[tokio::test]
async fn test_create_user_posts_documented_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users")
            .header("X-SP-GATEWAY", GATEWAY)
            .header("X-SP-USER-IP", "127.0.0.1")
            .header("X-SP-USER", FINGERPRINT)
            .json_body(serde_json::json!({
                "logins": [{"email": "jane@example.com"}],
                "phone_numbers": ["123.123.1234"],
                "legal_names": ["Jane Doe"]
            }));
        then.status(200)
            .json_body(serde_json::json!({"_id": "user_new", "refresh_token": "refresh-1"}));
    });

    let client = test_client(&server);
    let request = CreateUserRequest::new(
        "jane@example.com",
        vec!["123.123.1234".to_string()],
        vec!["Jane Doe".to_string()],
    );
    let response = client.create_user(request).await.unwrap();

    mock.assert();
    assert_eq!(response["_id"], "user_new");
}

#[tokio::test]
async fn test_get_oauth_token_posts_refresh_token() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/oauth/user_abc")
            .header("X-SP-USER", FINGERPRINT)
            .json_body(serde_json::json!({"refresh_token": "refresh-xyz"}));
        then.status(200)
            .json_body(serde_json::json!({"oauth_key": "oauth-123", "expires_in": "7200"}));
    });

    let client = test_client(&server);
    let response = client.get_oauth_token("user_abc", "refresh-xyz").await.unwrap();

    mock.assert();
    assert_eq!(response["oauth_key"], "oauth-123");
}

#[tokio::test]
async fn test_add_documents_patches_with_oauth_scoped_user_header() {
    let server = MockServer::start();
    let documents = vec![serde_json::json!({"name": "Jane Doe", "entity_type": "M"})];

    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/users/user_abc")
            .header("X-SP-GATEWAY", GATEWAY)
            // OAuth-scoped calls prepend the access token to the fingerprint.
            .header("X-SP-USER", format!("oauth-123{}", FINGERPRINT))
            .json_body(serde_json::json!({
                "documents": [{"name": "Jane Doe", "entity_type": "M"}]
            }));
        then.status(200).json_body(serde_json::json!({"_id": "user_abc"}));
    });

    let client = test_client(&server);
    client
        .add_documents("user_abc", "oauth-123", documents)
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_get_nodes_uses_oauth_scoped_user_header() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/user_abc/nodes")
            .header("X-SP-USER", format!("oauth-123{}", FINGERPRINT));
        then.status(200)
            .json_body(serde_json::json!({"nodes": [{"_id": "node_1"}]}));
    });

    let client = test_client(&server);
    let response = client.get_nodes("user_abc", "oauth-123").await.unwrap();

    mock.assert();
    assert_eq!(response["nodes"][0]["_id"], "node_1");
}

#[tokio::test]
async fn test_add_node_posts_type_and_nickname() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users/user_abc/nodes")
            .header("X-SP-USER", format!("oauth-123{}", FINGERPRINT))
            .json_body(serde_json::json!({
                "type": "DEPOSIT-US",
                "info": {"nickname": "My Checking"}
            }));
        then.status(200).json_body(serde_json::json!({"nodes": [{"_id": "node_new"}]}));
    });

    let client = test_client(&server);
    client
        .add_node(
            "user_abc",
            "oauth-123",
            NodeRequest::with_nickname("DEPOSIT-US", "My Checking"),
        )
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_add_ach_node_posts_bank_credentials() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users/user_abc/nodes")
            .json_body(serde_json::json!({
                "type": "ACH-US",
                "info": {
                    "bank_id": "bank_login",
                    "bank_pw": "bank_pass",
                    "bank_name": "fake"
                }
            }));
        then.status(200).json_body(serde_json::json!({"nodes": []}));
    });

    let client = test_client(&server);
    client
        .add_ach_node("user_abc", "oauth-123", "bank_login", "bank_pass", "fake")
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_get_subnets_substitutes_both_ids() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/user_abc/nodes/node_1/subnets")
            .header("X-SP-USER", format!("oauth-123{}", FINGERPRINT));
        then.status(200).json_body(serde_json::json!({"subnets": []}));
    });

    let client = test_client(&server);
    client
        .get_subnets("user_abc", "oauth-123", "node_1")
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_add_subnet_posts_nickname() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users/user_abc/nodes/node_1/subnets")
            .json_body(serde_json::json!({"nickname": "Payroll"}));
        then.status(200)
            .json_body(serde_json::json!({"_id": "subnet_new", "nickname": "Payroll"}));
    });

    let client = test_client(&server);
    let response = client
        .add_subnet(
            "user_abc",
            "oauth-123",
            "node_1",
            SubnetRequest {
                nickname: "Payroll".to_string(),
            },
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response["_id"], "subnet_new");
}

#[tokio::test]
async fn test_non_success_status_becomes_upstream_error() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/missing");
        then.status(404)
            .json_body(serde_json::json!({"error": {"en": "user not found"}}));
    });

    let client = test_client(&server);
    let error = client.get_user("missing").await.unwrap_err();

    mock.assert();
    match error {
        RiseError::UpstreamError { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("user not found"));
        }
        other => panic!("expected UpstreamError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failure_becomes_api_error() {
    // Nothing is listening on this port.
    let credentials = test_credentials("http://127.0.0.1:9".to_string());
    let client = SynapseClient::new(credentials).unwrap();

    let error = client.get_all_users(None, None).await.unwrap_err();
    assert!(matches!(error, RiseError::ApiError(_)));
}
