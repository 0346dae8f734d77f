// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Authenticator backed by the card server.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{Authenticator, Password, User, AUTH_HEADER};
use crate::config::CardConfig;
use crate::error::AuthError;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct VerifyResponse {
    valid: bool,
    user: Option<User>,
}

/// Calls `POST /auth/login`, `GET /auth/verify` and `POST /auth/logout` on
/// the backend.
pub struct RemoteAuthenticator {
    client: Client,
    api_url: String,
}

impl RemoteAuthenticator {
    pub fn new(config: &CardConfig) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(remote_error)?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }
}

impl Authenticator for RemoteAuthenticator {
    fn login(&self, username: &str, password: &Password) -> Result<String, AuthError> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.api_url))
            .json(&LoginRequest {
                username,
                password: password.expose(),
            })
            .send()
            .map_err(remote_error)?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST => {
                Err(AuthError::InvalidCredentials)
            }
            status if !status.is_success() => {
                Err(AuthError::Remote(format!("HTTP error: {}", status.as_u16())))
            }
            _ => {
                let body: LoginResponse = response.json().map_err(remote_error)?;
                Ok(body.token)
            }
        }
    }

    fn verify(&self, token: &str) -> Result<User, AuthError> {
        let response = self
            .client
            .get(format!("{}/auth/verify", self.api_url))
            .header(AUTH_HEADER, token)
            .send()
            .map_err(remote_error)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidToken);
        }
        if !response.status().is_success() {
            return Err(AuthError::Remote(format!(
                "HTTP error: {}",
                response.status().as_u16()
            )));
        }

        let body: VerifyResponse = response.json().map_err(remote_error)?;
        match (body.valid, body.user) {
            (true, Some(user)) => Ok(user),
            _ => Err(AuthError::InvalidToken),
        }
    }

    fn logout(&self, token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/auth/logout", self.api_url))
            .header(AUTH_HEADER, token)
            .send()
            .map_err(remote_error)?;

        if !response.status().is_success() {
            return Err(AuthError::Remote(format!(
                "HTTP error: {}",
                response.status().as_u16()
            )));
        }
        Ok(())
    }
}

fn remote_error(err: reqwest::Error) -> AuthError {
    AuthError::Remote(err.to_string())
}
