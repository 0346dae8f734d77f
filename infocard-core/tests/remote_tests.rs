// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the HTTP-backed store and authenticator
//!
//! A small axum backend runs on an ephemeral port in its own thread; the
//! blocking clients talk to it from the test thread.
//!
//! Run with: cargo test -p infocard-core --features remote --test remote_tests

#![cfg(feature = "remote")]

use std::net::TcpListener;
use std::thread;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use infocard_core::*;
use serde_json::{json, Value};

const TOKEN: &str = "backend-token";

fn token(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTH_HEADER).and_then(|h| h.to_str().ok())
}

/// Echoes the requested username as the name and the received token as the
/// title.
async fn contact(Path(username): Path<String>, headers: HeaderMap) -> Response {
    match username.as_str() {
        "missing" => StatusCode::NOT_FOUND.into_response(),
        "broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(json!({
            "username": username,
            "name": username,
            "title": token(&headers),
        }))
        .into_response(),
    }
}

async fn default_contact() -> Json<Value> {
    Json(json!({ "username": "ada", "name": "Ada" }))
}

async fn update_contact(headers: HeaderMap, Json(_profile): Json<Value>) -> StatusCode {
    match token(&headers) {
        Some(TOKEN) => StatusCode::OK,
        _ => StatusCode::UNAUTHORIZED,
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    match (body["username"].as_str(), body["password"].as_str()) {
        (Some(""), _) => StatusCode::BAD_REQUEST.into_response(),
        (Some("ada"), Some("analytical")) => Json(json!({ "token": TOKEN })).into_response(),
        (Some("crash"), _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
            .into_response(),
    }
}

async fn verify(headers: HeaderMap) -> Response {
    match token(&headers) {
        Some(TOKEN) => Json(json!({ "valid": true, "user": { "username": "ada" } })).into_response(),
        // a backend answering 200 for a token it no longer knows
        Some("stale") => Json(json!({ "valid": false })).into_response(),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "valid": false }))).into_response(),
    }
}

async fn logout(headers: HeaderMap) -> StatusCode {
    match token(&headers) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::BAD_REQUEST,
    }
}

/// Starts the backend and returns its API URL.
fn spawn_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    listener.set_nonblocking(true).unwrap();

    let api = Router::new()
        .route("/contact", get(default_contact).put(update_contact))
        .route("/contact/:username", get(contact))
        .route("/auth/login", post(login))
        .route("/auth/verify", get(verify))
        .route("/auth/logout", post(logout));
    let app = Router::new().nest("/api", api);

    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    format!("http://{addr}/api")
}

/// An API URL nothing listens on.
fn closed_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

fn config(api_url: &str) -> CardConfig {
    CardConfig::default().with_remote(api_url)
}

// ===========================================================================
// Remote store
// ===========================================================================

#[test]
fn test_fetch_profile() {
    let store = RemoteProfileStore::new(&config(&spawn_backend())).unwrap();

    let profile = store.fetch("ada").unwrap();

    assert_eq!(profile.name, "ada");
    assert_eq!(profile.username.as_deref(), Some("ada"));
    assert_eq!(profile.title, None);
}

#[test]
fn test_token_header_attached() {
    let store = RemoteProfileStore::new(&config(&spawn_backend()))
        .unwrap()
        .with_token(Some(TOKEN.to_string()));

    let profile = store.fetch("ada").unwrap();

    assert_eq!(profile.title.as_deref(), Some(TOKEN));
}

#[test]
fn test_not_found_maps_to_not_found() {
    let store = RemoteProfileStore::new(&config(&spawn_backend())).unwrap();

    assert!(matches!(
        store.fetch("missing"),
        Err(StoreError::NotFound(name)) if name == "missing"
    ));
}

#[test]
fn test_server_error_maps_to_fetch() {
    let store = RemoteProfileStore::new(&config(&spawn_backend())).unwrap();

    assert!(matches!(store.fetch("broken"), Err(StoreError::Fetch(_))));

    let err = CardError::from(store.fetch("broken").unwrap_err());
    assert!(matches!(err, CardError::Fetch(_)));
}

#[test]
fn test_unreachable_backend_maps_to_fetch() {
    let store = RemoteProfileStore::new(&config(&closed_backend())).unwrap();

    assert!(matches!(store.fetch("ada"), Err(StoreError::Fetch(_))));
    assert!(matches!(store.usernames(), Err(StoreError::Fetch(_))));
}

#[test]
fn test_username_is_one_path_segment() {
    let store = RemoteProfileStore::new(&config(&spawn_backend())).unwrap();

    assert_eq!(store.fetch("a/vcard").unwrap().name, "a/vcard");
    assert_eq!(store.fetch("x?view=public").unwrap().name, "x?view=public");
    assert_eq!(store.fetch("Thiện").unwrap().name, "Thiện");
}

#[test]
fn test_usernames_from_default_contact() {
    let store = RemoteProfileStore::new(&config(&spawn_backend())).unwrap();

    assert_eq!(store.usernames().unwrap(), vec!["ada".to_string()]);
}

#[test]
fn test_update_requires_token() {
    let api_url = spawn_backend();

    let anonymous = RemoteProfileStore::new(&config(&api_url)).unwrap();
    assert!(matches!(
        anonymous.update("ada", ContactProfile::new("Ada")),
        Err(StoreError::Fetch(_))
    ));

    let owner = RemoteProfileStore::new(&config(&api_url))
        .unwrap()
        .with_token(Some(TOKEN.to_string()));
    assert!(owner.update("ada", ContactProfile::new("Ada")).is_ok());
}

// ===========================================================================
// Remote authenticator
// ===========================================================================

#[test]
fn test_login_and_verify() {
    let auth = RemoteAuthenticator::new(&config(&spawn_backend())).unwrap();

    let token = auth.login("ada", &Password::new("analytical")).unwrap();

    assert_eq!(token, TOKEN);
    assert_eq!(auth.verify(&token).unwrap(), User::new("ada"));
}

#[test]
fn test_rejected_login_maps_to_invalid_credentials() {
    let auth = RemoteAuthenticator::new(&config(&spawn_backend())).unwrap();

    // 401
    assert!(matches!(
        auth.login("ada", &Password::new("wrong")),
        Err(AuthError::InvalidCredentials)
    ));
    // 400
    assert!(matches!(
        auth.login("", &Password::new("analytical")),
        Err(AuthError::InvalidCredentials)
    ));
}

#[test]
fn test_backend_failure_maps_to_remote() {
    let auth = RemoteAuthenticator::new(&config(&spawn_backend())).unwrap();
    assert!(matches!(
        auth.login("crash", &Password::new("x")),
        Err(AuthError::Remote(_))
    ));

    let auth = RemoteAuthenticator::new(&config(&closed_backend())).unwrap();
    assert!(matches!(
        auth.login("ada", &Password::new("analytical")),
        Err(AuthError::Remote(_))
    ));
}

#[test]
fn test_invalid_tokens() {
    let auth = RemoteAuthenticator::new(&config(&spawn_backend())).unwrap();

    assert!(matches!(auth.verify("stale"), Err(AuthError::InvalidToken)));
    assert!(matches!(auth.verify("unknown"), Err(AuthError::InvalidToken)));
}

#[test]
fn test_logout_sends_token() {
    let auth = RemoteAuthenticator::new(&config(&spawn_backend())).unwrap();

    assert!(auth.logout(TOKEN).is_ok());
}

#[test]
fn test_remote_session_round_trip() {
    let auth = RemoteAuthenticator::new(&config(&spawn_backend())).unwrap();
    let mut session = Session::init(auth, MemoryCredentialStore::default());

    session.login("ada", &Password::new("analytical")).unwrap();
    assert_eq!(session.token(), Some(TOKEN));
    assert_eq!(session.user(), Some(&User::new("ada")));

    session.logout().unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn test_remote_session_failed_login_message() {
    let auth = RemoteAuthenticator::new(&config(&spawn_backend())).unwrap();
    let mut session = Session::init(auth, MemoryCredentialStore::default());

    assert!(session.login("crash", &Password::new("x")).is_err());
    assert_eq!(session.last_error(), Some("Login failed"));
}
