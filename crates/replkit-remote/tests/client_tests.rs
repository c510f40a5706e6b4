//! Tests for the GraphQL client against a mock server

use replkit_core::{Language, TemplateCommand};
use replkit_remote::{CreateReplRequest, Error, RemoteProvisioner, ReplitClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, token: Option<&str>) -> ReplitClient {
    ReplitClient::new(format!("{}/graphql", server.uri()))
        .unwrap()
        .with_token(token.map(str::to_string))
}

fn request() -> CreateReplRequest {
    CreateReplRequest {
        title: "Flask API".to_string(),
        language: Language::Python,
        is_private: false,
        commands: vec![TemplateCommand {
            command: "pip install flask".to_string(),
            context: "install dependencies".to_string(),
        }],
    }
}

#[tokio::test]
async fn test_current_user_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer secret"))
        .and(header("x-requested-with", "replit"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "currentUser": { "username": "ada", "displayName": "Ada Lovelace" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client(&server, Some("secret")).current_user().await.unwrap();
    assert_eq!(user.username, "ada");
    assert_eq!(user.display_name, "Ada Lovelace");
}

#[tokio::test]
async fn test_missing_token_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server, None).current_user().await.unwrap_err();
    assert!(matches!(err, Error::MissingToken));

    let err = client(&server, Some("   ")).create_repl(&request()).await.unwrap_err();
    assert!(matches!(err, Error::MissingToken));
}

#[tokio::test]
async fn test_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
        .mount(&server)
        .await;

    let err = client(&server, Some("nope")).current_user().await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized { status: 401 }));
}

#[tokio::test]
async fn test_server_error_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client(&server, Some("tok")).current_user().await.unwrap_err();
    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_graphql_errors_are_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "first" }, { "message": "second" }]
        })))
        .mount(&server)
        .await;

    let err = client(&server, Some("tok")).current_user().await.unwrap_err();
    assert_eq!(err.to_string(), "API returned an error: first; second");
}

#[tokio::test]
async fn test_null_current_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "currentUser": null } })),
        )
        .mount(&server)
        .await;

    let err = client(&server, Some("tok")).current_user().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse { .. }));
}

#[tokio::test]
async fn test_create_repl_sends_input_and_returns_repl() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {
                "input": {
                    "title": "Flask API",
                    "language": "python",
                    "isPrivate": false,
                    "commands": [{ "command": "pip install flask", "context": "install dependencies" }]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "createRepl": { "id": "abc-123", "url": "/@ada/Flask-API" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repl = client(&server, Some("tok")).create_repl(&request()).await.unwrap();
    assert_eq!(repl.id, "abc-123");
    assert_eq!(repl.url, "/@ada/Flask-API");
}

#[tokio::test]
async fn test_create_repl_user_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "createRepl": { "message": "Title already taken" } }
        })))
        .mount(&server)
        .await;

    let err = client(&server, Some("tok")).create_repl(&request()).await.unwrap_err();
    assert!(matches!(err, Error::Graphql { ref message } if message == "Title already taken"));
}

#[tokio::test]
async fn test_transport_error_keeps_cause_in_source() {
    // Bind then release a port so nothing is listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = ReplitClient::new(format!("http://127.0.0.1:{}/graphql", port))
        .unwrap()
        .with_token(Some("secret".to_string()));

    let err = client.current_user().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert_eq!(err.to_string(), "HTTP error");

    let cause = std::error::Error::source(&err).unwrap().to_string();
    assert!(!cause.is_empty());
    assert!(!err.to_string().contains(&cause));
}
