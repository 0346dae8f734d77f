// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP API
//!
//! REST endpoints for reading cards, exporting them and updating the
//! owner's profile. Every card response goes through the visibility
//! resolver with the caller's session.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use infocard_core::render::{qr_svg, share_url};
use infocard_core::session::{Authenticator, MemoryCredentialStore, Password, Session, User};
use infocard_core::{
    export_summary, export_vcard, render_card, vcard_file_name, AuthError, CardError, CardService,
    CardView, ContactProfile, DeviceClass, ProfileDraft, ProfileStore, RequestedView,
    ResolvedProfile, ShareError, AUTH_HEADER, VCARD_MIME_TYPE,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::auth::OwnerAuthenticator;

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CardService<Arc<dyn ProfileStore>>>,
    pub auth: Arc<OwnerAuthenticator>,
    pub default_username: String,
    pub public_url: String,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ProfileStore>,
        auth: OwnerAuthenticator,
        default_username: &str,
        public_url: &str,
    ) -> Self {
        AppState {
            service: Arc::new(CardService::new(store)),
            auth: Arc::new(auth),
            default_username: default_username.to_string(),
            public_url: public_url.trim_end_matches('/').to_string(),
            start_time: Instant::now(),
        }
    }

    /// Session for one request, built from the token it carries.
    fn session(
        &self,
        headers: &HeaderMap,
    ) -> Session<&OwnerAuthenticator, MemoryCredentialStore> {
        Session::init(
            self.auth.as_ref(),
            MemoryCredentialStore::from(request_token(headers)),
        )
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Viewer parameters of a card request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardQuery {
    pub view: Option<String>,
    pub device: Option<String>,
    /// Viewport width in pixels; takes precedence over `device`.
    pub width: Option<u32>,
    /// Card view for `/card`: info, share or nfc.
    pub card: Option<String>,
}

impl CardQuery {
    fn requested(&self) -> RequestedView {
        RequestedView::from_query(self.view.as_deref())
    }

    fn device(&self) -> DeviceClass {
        match (self.width, self.device.as_deref()) {
            (Some(width), _) => DeviceClass::from_viewport_width(width),
            (None, Some(device)) => device.parse().unwrap_or_default(),
            (None, None) => DeviceClass::default(),
        }
    }
}

/// Error response with a `{ "message": ... }` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "message": self.message })),
        )
            .into_response()
    }
}

impl From<CardError> for ApiError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, "Contact not found"),
            CardError::Fetch(_) => {
                ApiError::new(StatusCode::BAD_GATEWAY, "Failed to load contact information")
            }
            CardError::Validation(e) => {
                ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            CardError::Auth(e) => e.into(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::new(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            AuthError::InvalidToken | AuthError::NotAuthenticated => {
                ApiError::new(StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            AuthError::Remote(_) | AuthError::Storage(_) => {
                error!("Authentication failure: {}", err);
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Login failed")
            }
        }
    }
}

impl From<ShareError> for ApiError {
    fn from(err: ShareError) -> Self {
        error!("Share rendering failed: {}", err);
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to render share code")
    }
}

/// Creates the router: `/health` plus the API under `/api`.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/verify", get(verify_handler))
        .route("/auth/logout", post(logout_handler))
        .route(
            "/contact",
            get(default_contact_handler).put(update_contact_handler),
        )
        .route("/contact/:username", get(contact_handler))
        .route("/contact/:username/card", get(card_handler))
        .route("/contact/:username/vcard", get(vcard_handler))
        .route("/contact/:username/summary", get(summary_handler))
        .route("/contact/:username/qr", get(qr_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Reads the credential from `x-auth-token` or `Authorization: Bearer`.
fn request_token(headers: &HeaderMap) -> Option<String> {
    let custom = headers
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim);
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim);

    custom
        .or(bearer)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Runs password hashing and store access on the blocking pool.
async fn blocking<T, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task).await.map_err(|e| {
        error!("Blocking task failed: {}", e);
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    })?
}

async fn load(
    state: &AppState,
    headers: &HeaderMap,
    query: &CardQuery,
    username: &str,
) -> Result<ResolvedProfile, ApiError> {
    let (state, headers, query) = (state.clone(), headers.clone(), query.clone());
    let username = username.to_string();
    blocking(move || {
        let session = state.session(&headers);
        Ok(state
            .service
            .load_card(&username, &session, query.requested(), query.device())?)
    })
    .await
}

/// Health check endpoint - always returns 200 if server is running.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let password = Password::from(body.password);
    let token = blocking(move || Ok(state.auth.login(&body.username, &password)?)).await?;
    Ok(Json(LoginResponse { token }))
}

/// Revokes the request's token. Succeeds whether or not it was live.
async fn logout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    if let Some(token) = request_token(&headers) {
        state.auth.logout(&token)?;
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn verify_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user = request_token(&headers).and_then(|token| state.auth.verify(&token).ok());
    match user {
        Some(user) => Json(VerifyResponse {
            valid: true,
            user: Some(user),
        })
        .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(VerifyResponse {
                valid: false,
                user: None,
            }),
        )
            .into_response(),
    }
}

async fn default_contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CardQuery>,
) -> Result<Json<ContactProfile>, ApiError> {
    let resolved = load(&state, &headers, &query, &state.default_username).await?;
    Ok(Json(resolved.into_profile()))
}

async fn contact_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    headers: HeaderMap,
    Query(query): Query<CardQuery>,
) -> Result<Json<ContactProfile>, ApiError> {
    let resolved = load(&state, &headers, &query, &username).await?;
    Ok(Json(resolved.into_profile()))
}

async fn card_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    headers: HeaderMap,
    Query(query): Query<CardQuery>,
) -> Result<Response, ApiError> {
    let view = match query.card.as_deref() {
        Some(card) => card
            .parse::<CardView>()
            .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.to_string()))?,
        None => CardView::default(),
    };
    let resolved = load(&state, &headers, &query, &username).await?;
    let card = render_card(&resolved, view, &state.public_url)?;
    Ok(Json(card).into_response())
}

async fn vcard_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    headers: HeaderMap,
    Query(query): Query<CardQuery>,
) -> Result<Response, ApiError> {
    let resolved = load(&state, &headers, &query, &username).await?;
    let disposition = format!("attachment; filename=\"{}\"", vcard_file_name(&resolved));
    Ok((
        [
            (header::CONTENT_TYPE, format!("{VCARD_MIME_TYPE}; charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export_vcard(&resolved),
    )
        .into_response())
}

async fn summary_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    headers: HeaderMap,
    Query(query): Query<CardQuery>,
) -> Result<Response, ApiError> {
    let resolved = load(&state, &headers, &query, &username).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        export_summary(&resolved),
    )
        .into_response())
}

async fn qr_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    headers: HeaderMap,
    Query(query): Query<CardQuery>,
) -> Result<Response, ApiError> {
    let resolved = load(&state, &headers, &query, &username).await?;
    let url = share_url(&state.public_url, Some(&username), resolved.public_only());
    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml")],
        qr_svg(&url)?,
    )
        .into_response())
}

async fn update_contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(profile): Json<ContactProfile>,
) -> Result<Json<ContactProfile>, ApiError> {
    let saved = blocking(move || {
        let session = state.session(&headers);
        Ok(state.service.submit_edit(
            &state.default_username,
            &session,
            ProfileDraft::from_profile(profile),
        )?)
    })
    .await?;
    Ok(Json(saved))
}
