// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Async HTTP client for the state-vector endpoint.

use log::debug;
use reqwest::StatusCode;

use crate::bounds::BoundingBox;
use crate::states::{RawStateResponse, StateResponse};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://opensky-network.org/api";

/// Errors surfaced by a state-vector fetch.
///
/// `QuotaExceeded` is an expected, recoverable condition: the provider
/// rate-limits by daily quota and signals exhaustion with HTTP 429. Every
/// other variant is unexpected and should be handled by the caller; this
/// crate applies no retry or backoff policy.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API quota exceeded")]
    QuotaExceeded,

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Basic-auth credentials for a registered account.
///
/// Anonymous requests are allowed but subject to a stricter quota.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Client for the `states/all` bounded-box query.
#[derive(Debug, Clone)]
pub struct OpenSkyClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl OpenSkyClient {
    /// Create a client against the public API endpoint.
    #[must_use]
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, credentials)
    }

    /// Create a client against an alternate endpoint (e.g. a test server).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Whether this client sends credentials.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Fetch all state vectors inside `bounds`.
    ///
    /// Sends a single GET with the box edges as `lamin/lomin/lamax/lomax`.
    /// HTTP 429 maps to [`Error::QuotaExceeded`]; any other failure
    /// propagates without retries.
    pub async fn fetch_states(&self, bounds: &BoundingBox) -> Result<StateResponse, Error> {
        let url = format!("{}/states/all", self.base_url);
        debug!(
            "Fetching states for box S{} W{} N{} E{}",
            bounds.south(),
            bounds.west(),
            bounds.north(),
            bounds.east()
        );

        let mut request = self.http.get(&url).query(&bounds.query_params());
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request.send().await?;
        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => Err(Error::QuotaExceeded),
            status if !status.is_success() => Err(Error::Status(status)),
            _ => {
                let raw: RawStateResponse = response.json().await?;
                let parsed = StateResponse::from_raw(raw);
                debug!(
                    "Received {} state vectors at t={}",
                    parsed.states.len(),
                    parsed.time
                );
                Ok(parsed)
            }
        }
    }
}
