// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP-backed profile store.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{StatusCode, Url};

use super::{keyed, ProfileStore, StoreError};
use crate::config::CardConfig;
use crate::profile::ContactProfile;
use crate::session::AUTH_HEADER;

/// Profile store talking to the card backend.
pub struct RemoteProfileStore {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl RemoteProfileStore {
    /// Creates a store from config.
    pub fn new(config: &CardConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "InfoCard/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ))
            .build()
            .map_err(fetch_error)?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: None,
        })
    }

    /// Attaches a session credential to every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Appends path segments to the API URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let invalid = || StoreError::Fetch(format!("Invalid API URL: {}", self.api_url));
        let mut url = Url::parse(&self.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        }
    }
}

impl ProfileStore for RemoteProfileStore {
    fn fetch(&self, username: &str) -> Result<ContactProfile, StoreError> {
        let url = self.endpoint(&["contact", username])?;
        let response = self
            .authorized(self.client.get(url))
            .send()
            .map_err(fetch_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(StoreError::NotFound(username.to_string())),
            status if !status.is_success() => {
                Err(StoreError::Fetch(format!("HTTP error: {}", status.as_u16())))
            }
            _ => response.json().map_err(fetch_error),
        }
    }

    fn update(&self, username: &str, profile: ContactProfile) -> Result<(), StoreError> {
        let url = self.endpoint(&["contact"])?;
        let response = self
            .authorized(self.client.put(url))
            .json(&keyed(username, profile))
            .send()
            .map_err(fetch_error)?;

        if !response.status().is_success() {
            return Err(StoreError::Fetch(format!(
                "HTTP error: {}",
                response.status().as_u16()
            )));
        }
        Ok(())
    }

    /// The backend does not list profiles; only the default one is known.
    fn usernames(&self) -> Result<Vec<String>, StoreError> {
        let url = self.endpoint(&["contact"])?;
        let response = self
            .authorized(self.client.get(url))
            .send()
            .map_err(fetch_error)?;

        if !response.status().is_success() {
            return Err(StoreError::Fetch(format!(
                "HTTP error: {}",
                response.status().as_u16()
            )));
        }
        let profile: ContactProfile = response.json().map_err(fetch_error)?;
        Ok(profile.username.into_iter().collect())
    }
}

fn fetch_error(err: reqwest::Error) -> StoreError {
    StoreError::Fetch(err.to_string())
}
