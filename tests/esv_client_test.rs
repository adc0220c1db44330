//! Drives the real reqwest-based client against a throwaway local server.

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::time::Duration;
use versenote::error::FetchError;
use versenote::fetch::esv::EsvClient;
use versenote::fetch::{ESV_SOURCE_LABEL, VerseSource};
use versenote::model::VerseResult;

async fn passage_handler(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Token test-token");
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if params.get("include-verse-numbers").map(String::as_str) != Some("true") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match params.get("q").map(String::as_str).unwrap_or("") {
        "John 3:16" => Json(json!({
            "query": "John 3:16",
            "passages": ["  [16] For God so loved the world  \n"]
        }))
        .into_response(),
        "Genesis 1:1" => Json(json!({
            "passages": ["[1] In the beginning(1)"],
            "footnotes": ["(1) Or when God began to create"]
        }))
        .into_response(),
        "Hezekiah 1:1" => Json(json!({ "passages": [] })).into_response(),
        "Broken 1:1" => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/v3/passage/text/", get(passage_handler));
    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });
    addr
}

fn client(addr: SocketAddr, token: &str) -> EsvClient {
    EsvClient::new(
        format!("http://{}/v3/passage/text/", addr),
        token,
        Duration::from_secs(5),
    )
    .unwrap()
}

fn client_with_timeout(addr: SocketAddr, timeout: Duration) -> EsvClient {
    EsvClient::new(format!("http://{}/v3/passage/text/", addr), "test-token", timeout).unwrap()
}

#[tokio::test]
async fn fetches_and_trims_passage() {
    let addr = spawn_server();
    let result = client(addr, "test-token").fetch("John 3:16").await;

    assert_eq!(result.text(), Some("[16] For God so loved the world"));
    assert!(result.footnotes().is_empty());
    assert_eq!(result.source(), Some(ESV_SOURCE_LABEL));
}

#[tokio::test]
async fn footnotes_are_appended_and_returned() {
    let addr = spawn_server();
    let result = client(addr, "test-token").fetch("Genesis 1:1").await;

    assert_eq!(
        result.text(),
        Some("[1] In the beginning(1)\n\nFOOTNOTES:\n- (1) Or when God began to create\n")
    );
    assert_eq!(result.footnotes(), ["(1) Or when God began to create"]);
}

#[tokio::test]
async fn empty_passages_is_no_passage() {
    let addr = spawn_server();
    let result = client(addr, "test-token").fetch("Hezekiah 1:1").await;
    assert_eq!(result, VerseResult::Error(FetchError::NoPassage));
    assert_eq!(
        result.display_text(),
        "Error fetching verse: no passage text returned."
    );
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let addr = spawn_server();
    let result = client(addr, "test-token").fetch("Unknown 1:1").await;
    assert_eq!(result, VerseResult::Error(FetchError::Status(500)));
}

#[tokio::test]
async fn wrong_token_is_a_status_error() {
    let addr = spawn_server();
    let result = client(addr, "nope").fetch("John 3:16").await;
    assert_eq!(result, VerseResult::Error(FetchError::Status(401)));
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let addr = spawn_server();
    let result = client(addr, "test-token").fetch("Broken 1:1").await;
    assert!(matches!(result, VerseResult::Error(FetchError::Decode(_))));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let client = EsvClient::new("http://127.0.0.1:1/", "test-token", Duration::from_secs(2)).unwrap();
    let result = client.fetch("John 3:16").await;

    assert!(matches!(result, VerseResult::Error(FetchError::Transport(_))));
    assert!(!result.is_ok());
    assert!(result.display_text().starts_with("Error fetching verse: transport error"));
}

#[tokio::test]
async fn silent_server_times_out_as_transport_error() {
    // Connections queue in the backlog but are never answered
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let result = client_with_timeout(addr, Duration::from_secs(1))
        .fetch("John 3:16")
        .await;

    match result {
        VerseResult::Error(FetchError::Transport(message)) => {
            assert!(message.contains("timed out"), "unexpected message: {}", message)
        }
        other => panic!("expected a transport error, got {:?}", other),
    }
    drop(listener);
}
