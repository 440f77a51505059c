//! End-to-end tests against an in-process recording HTTP server.
//!
//! The server answers every configured path with a canned envelope and logs
//! each request's method, path, raw query, headers, and JSON body, so the
//! tests can assert exactly what went over the wire.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::Router;
use serde_json::{json, Value};

use dootask_api::api::{DialogApi, MessageApi, ProjectApi, SystemApi, UserApi};
use dootask_api::models::message::{SendBotMessageRequest, SendMessageToUserRequest};
use dootask_api::{ApiError, Client, ClientConfig};

#[derive(Clone, Debug)]
struct Recorded {
    method: String,
    path: String,
    query: String,
    token: Option<String>,
    user_agent: Option<String>,
    version: Option<String>,
    content_type: Option<String>,
    body: Value,
}

type Log = Arc<Mutex<Vec<Recorded>>>;
type Responses = Arc<Mutex<HashMap<String, Value>>>;

async fn record(State((log, responses)): State<(Log, Responses)>, request: Request) -> Response {
    let method = request.method().to_string();
    let uri = request.uri().clone();
    let (token, user_agent, version, content_type) = {
        let header = |name: &str| {
            request
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        (
            header("Token"),
            header("User-Agent"),
            header("version"),
            header("Content-Type"),
        )
    };

    let bytes = to_bytes(request.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    log.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().unwrap_or("").to_string(),
        token,
        user_agent,
        version,
        content_type,
        body,
    });

    match responses.lock().unwrap().get(uri.path()) {
        Some(envelope) => Json(envelope.clone()).into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response(),
    }
}

/// Start the recording server on an ephemeral port.
async fn spawn_server(routes: Vec<(&str, Value)>) -> (String, Log, Responses) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let responses: Responses = Arc::new(Mutex::new(
        routes
            .into_iter()
            .map(|(path, envelope)| (path.to_string(), envelope))
            .collect(),
    ));

    let app = Router::new()
        .fallback(record)
        .with_state((log.clone(), responses.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), log, responses)
}

fn client_for(server: &str, token: &str) -> Client {
    Client::new(ClientConfig::new(token).with_server(server))
}

fn ok(data: Value) -> Value {
    json!({ "ret": 1, "msg": "", "data": data })
}

fn profile(nickname: &str) -> Value {
    json!({
        "userid": 7,
        "identity": ["admin"],
        "nickname": nickname,
        "email": "alice@example.com",
    })
}

fn count_calls(log: &Log, path: &str) -> usize {
    log.lock().unwrap().iter().filter(|r| r.path == path).count()
}

#[tokio::test]
async fn decodes_profile_payload() {
    let (server, _log, _) = spawn_server(vec![(
        "/api/users/info",
        ok(json!({ "userid": 7, "nickname": "Alice" })),
    )])
    .await;

    let client = client_for(&server, "tok");
    let user = client.get_user_info(false).await.unwrap();
    assert_eq!(user.userid, 7);
    assert_eq!(user.nickname, "Alice");
    // Fields absent from the payload come back zero-valued.
    assert!(user.identity.is_empty());
    assert!(user.email.is_empty());
}

#[tokio::test]
async fn sends_auth_and_client_headers() {
    let (server, log, _) =
        spawn_server(vec![("/api/users/info", ok(profile("Alice")))]).await;

    let client = client_for(&server, "tok-123");
    client.get_user_info(false).await.unwrap();

    let recorded = log.lock().unwrap()[0].clone();
    assert_eq!(recorded.token.as_deref(), Some("tok-123"));
    assert_eq!(recorded.user_agent.as_deref(), Some("DooTask-Rust-Client/1.0"));
}

#[tokio::test]
async fn application_error_carries_server_message() {
    let (server, _log, _) = spawn_server(vec![(
        "/api/users/info",
        json!({ "ret": 0, "msg": "bad token", "data": null }),
    )])
    .await;

    let client = client_for(&server, "tok");
    let err = client.get_user_info(false).await.unwrap_err();
    match err {
        ApiError::Api { ret, .. } => assert_eq!(ret, 0),
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(
        client.get_user_info(false).await.unwrap_err().to_string(),
        "bad token"
    );
}

#[tokio::test]
async fn application_error_without_message_uses_fallback() {
    let (server, _log, _) = spawn_server(vec![(
        "/api/system/setting",
        json!({ "ret": 2, "msg": "", "data": null }),
    )])
    .await;

    let client = client_for(&server, "tok");
    let err = client.get_system_settings().await.unwrap_err();
    assert_eq!(err.to_string(), "API error: 2");
}

#[tokio::test]
async fn non_200_status_is_a_transport_error_with_body() {
    // No route configured: the server answers 500 "internal error".
    let (server, _log, _) = spawn_server(vec![]).await;

    let client = client_for(&server, "tok");
    let err = client.get_user_departments().await.unwrap_err();
    match err {
        ApiError::Http { status, ref body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_envelope_is_a_parse_error() {
    let (server, _log, _) =
        spawn_server(vec![("/api/users/info", json!("not an envelope"))]).await;

    let client = client_for(&server, "tok");
    let err = client.get_user_info(false).await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn mismatched_payload_is_a_decode_error() {
    let (server, _log, _) = spawn_server(vec![(
        "/api/users/info/departments",
        ok(json!({ "not": "a list" })),
    )])
    .await;

    let client = client_for(&server, "tok");
    let err = client.get_user_departments().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop, so the port refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}"), "tok");
    let err = client.get_user_info(false).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn profile_cache_round_trip() {
    let (server, log, responses) =
        spawn_server(vec![("/api/users/info", ok(profile("Alice")))]).await;

    let client = client_for(&server, "tok");

    let first = client.get_user_info(false).await.unwrap();
    let second = client.get_user_info(false).await.unwrap();
    assert_eq!(first.nickname, "Alice");
    assert_eq!(second.nickname, "Alice");
    assert_eq!(count_calls(&log, "/api/users/info"), 1);
    assert_eq!(client.cache_size().await, 1);

    // A forced refresh bypasses the cache and replaces the entry.
    responses
        .lock()
        .unwrap()
        .insert("/api/users/info".to_string(), ok(profile("Bob")));
    let refreshed = client.get_user_info(true).await.unwrap();
    assert_eq!(refreshed.nickname, "Bob");
    assert_eq!(count_calls(&log, "/api/users/info"), 2);

    // And the replacement is what cached reads now see.
    let cached = client.get_user_info(false).await.unwrap();
    assert_eq!(cached.nickname, "Bob");
    assert_eq!(count_calls(&log, "/api/users/info"), 2);
}

#[tokio::test]
async fn expired_cache_entry_triggers_refetch() {
    let (server, log, responses) =
        spawn_server(vec![("/api/users/info", ok(profile("Alice")))]).await;

    let client = Client::new(
        ClientConfig::new("tok")
            .with_server(&server)
            .with_cache_ttl(Duration::ZERO),
    );

    client.get_user_info(false).await.unwrap();
    responses
        .lock()
        .unwrap()
        .insert("/api/users/info".to_string(), ok(profile("Bob")));

    let refetched = client.get_user_info(false).await.unwrap();
    assert_eq!(refetched.nickname, "Bob");
    assert_eq!(count_calls(&log, "/api/users/info"), 2);
}

#[tokio::test]
async fn identity_check_requires_matching_tag() {
    let (server, log, _) =
        spawn_server(vec![("/api/users/info", ok(profile("Alice")))]).await;

    let client = client_for(&server, "tok");

    let user = client.check_user_identity("admin").await.unwrap();
    assert_eq!(user.userid, 7);

    let err = client.check_user_identity("root").await.unwrap_err();
    assert!(matches!(err, ApiError::PermissionDenied), "got {err:?}");

    // Both checks rode the same cached profile.
    assert_eq!(count_calls(&log, "/api/users/info"), 1);
}

#[tokio::test]
async fn users_basic_repeats_userid_pairs() {
    let (server, log, _) = spawn_server(vec![(
        "/api/users/basic",
        ok(json!([
            { "userid": 1, "nickname": "A" },
            { "userid": 2, "nickname": "B" },
        ])),
    )])
    .await;

    let client = client_for(&server, "tok");
    let users = client.get_users_basic(&[1, 2]).await.unwrap();
    assert_eq!(users.len(), 2);

    let recorded = log.lock().unwrap()[0].clone();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.query, "userid[]=1&userid[]=2");
    assert_eq!(recorded.body, Value::Null);
}

#[tokio::test]
async fn missing_user_maps_to_domain_error() {
    let (server, _log, _) =
        spawn_server(vec![("/api/users/basic", ok(json!([])))]).await;

    let client = client_for(&server, "tok");
    let err = client.get_user_basic(42).await.unwrap_err();
    assert!(matches!(err, ApiError::UserNotFound), "got {err:?}");
}

#[tokio::test]
async fn send_to_user_resolves_dialog_then_posts() {
    let (server, log, _) = spawn_server(vec![
        (
            "/api/dialog/open/user",
            ok(json!({ "dialog_user": { "dialog_id": 77, "userid": 3, "bot": 0 } })),
        ),
        ("/api/dialog/msg/sendtext", ok(Value::Null)),
    ])
    .await;

    let client = client_for(&server, "tok");
    client
        .send_message_to_user(SendMessageToUserRequest {
            userid: 3,
            text: "hi".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let recorded = log.lock().unwrap().clone();
    assert_eq!(recorded.len(), 2);

    assert_eq!(recorded[0].method, "GET");
    assert_eq!(recorded[0].path, "/api/dialog/open/user");
    assert_eq!(recorded[0].query, "userid=3");

    assert_eq!(recorded[1].method, "POST");
    assert_eq!(recorded[1].path, "/api/dialog/msg/sendtext");
    assert_eq!(recorded[1].content_type.as_deref(), Some("application/json"));
    assert_eq!(recorded[1].body["dialog_id"], 77);
    assert_eq!(recorded[1].body["text"], "hi");
    assert_eq!(recorded[1].body["text_type"], "md");
}

#[tokio::test]
async fn bot_message_defaults_type_and_keeps_empty_fields() {
    let (server, log, _) =
        spawn_server(vec![("/api/dialog/msg/sendbot", ok(Value::Null))]).await;

    let client = client_for(&server, "tok");
    client
        .send_bot_message(SendBotMessageRequest {
            userid: 5,
            text: "ping".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let recorded = log.lock().unwrap()[0].clone();
    assert_eq!(recorded.body["bot_type"], "system-msg");
    // JSON bodies keep empty strings, unlike query encoding.
    assert_eq!(recorded.body["bot_name"], "");
    assert_eq!(recorded.body["silence"], false);
}

#[tokio::test]
async fn exit_group_sends_no_member_list() {
    let (server, log, _) =
        spawn_server(vec![("/api/dialog/group/deluser", ok(Value::Null))]).await;

    let client = client_for(&server, "tok");
    client.exit_group(9).await.unwrap();

    let recorded = log.lock().unwrap()[0].clone();
    assert_eq!(recorded.method, "GET");
    // Empty member list means "leave": no userids[] pairs on the wire.
    assert_eq!(recorded.query, "dialog_id=9");
}

#[tokio::test]
async fn project_list_decodes_page() {
    let (server, log, _) = spawn_server(vec![(
        "/api/project/lists",
        ok(json!({
            "current_page": 1,
            "data": [{ "id": 11, "name": "Launch" }],
            "next_page_url": null,
            "path": "/api/project/lists",
            "per_page": 50,
            "prev_page_url": null,
            "to": 1,
            "total": 1,
        })),
    )])
    .await;

    let client = client_for(&server, "tok");
    let page = client.get_project_list(None).await.unwrap();
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total, 1);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, 11);
    assert_eq!(page.data[0].name, "Launch");

    // The default filter sends its numeric zeroes and drops empty strings.
    let recorded = log.lock().unwrap()[0].clone();
    assert_eq!(recorded.query, "page=0&pagesize=0");
}

#[tokio::test]
async fn version_request_carries_version_header() {
    let (server, log, _) = spawn_server(vec![(
        "/api/system/version",
        ok(json!({ "device_count": 4, "version": "0.37.21" })),
    )])
    .await;

    let client = client_for(&server, "tok");
    let version = client.get_version().await.unwrap();
    assert_eq!(version.device_count, 4);
    assert_eq!(version.version, "0.37.21");

    let recorded = log.lock().unwrap()[0].clone();
    assert_eq!(recorded.version.as_deref(), Some("true"));
}
