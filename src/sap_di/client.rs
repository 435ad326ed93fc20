// This file is part of the terraform-provider-sapdi project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
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

use std::sync::Arc;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use reqwest::{header::AUTHORIZATION, RequestBuilder, StatusCode};
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use super::error::{Error, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings of a [`SapDiClient`]
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config without credentials and with the default timeout
    pub fn new(host_url: impl Into<String>) -> Self {
        Self {
            host_url: host_url.into(),
            username: String::new(),
            password: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host_url", &self.host_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for the SAP DI metadata catalog API
#[derive(Debug, Clone)]
pub struct SapDiClient {
    host_url: Url,
    config: ClientConfig,
    http: reqwest::Client,
}

impl SapDiClient {
    /// Create a client for `host`.
    ///
    /// If either credential is missing, the client is created with empty credentials.
    pub fn new(host: &str, username: Option<&str>, password: Option<&str>) -> Result<Self> {
        let mut config = ClientConfig::new(host);
        if let (Some(username), Some(password)) = (username, password) {
            config = config.credentials(username, password);
        }
        Self::with_config(config)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let invalid_host = |reason: String| Error::InvalidHost {
            host: config.host_url.clone(),
            reason,
        };

        let host_url = Url::parse(&config.host_url).map_err(|err| invalid_host(err.to_string()))?;
        if host_url.cannot_be_a_base() {
            return Err(invalid_host("URL cannot be used as a base".to_owned()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            host_url,
            config,
            http,
        })
    }

    pub fn host_url(&self) -> &Url {
        &self.host_url
    }

    /// Value of the `Authorization` header sent with every request
    ///
    /// The header is sent even without credentials, in which case it encodes `":"`.
    pub(crate) fn basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.config.username, self.config.password);
        format!("Basic {}", STANDARD.encode(credentials))
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.http.get(url)
    }

    /// Send `request` and return the response body when the status is 200
    pub async fn execute(&self, request: RequestBuilder) -> Result<Bytes> {
        let response = request
            .header(AUTHORIZATION, self.basic_auth())
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;

        debug!(
            status = status.as_u16(),
            length = body.len(),
            "SAP DI response received"
        );

        if status != StatusCode::OK {
            return Err(Error::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout: self.config.timeout,
                source: err,
            }
        } else {
            Error::Transport(err)
        }
    }
}

/// Client slot shared between the provider and its data sources.
///
/// The provider fills it at configure time; data sources only read it.
#[derive(Debug, Default, Clone)]
pub struct SharedClient(Arc<RwLock<Option<Arc<SapDiClient>>>>);

impl SharedClient {
    pub async fn set(&self, client: SapDiClient) {
        *self.0.write().await = Some(Arc::new(client));
    }

    pub async fn get(&self) -> Option<Arc<SapDiClient>> {
        self.0.read().await.clone()
    }
}
