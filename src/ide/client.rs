// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use reqwest::RequestBuilder;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EndpointConfig;
use crate::error::ProxyError;

/// Client identity sent with every request to the IDE.
pub const CLIENT_USER_AGENT: &str = concat!("jetbrains-mcp-proxy/", env!("CARGO_PKG_VERSION"));

/// Single-shot GET/POST calls against the IDE service.
///
/// Any failure, whether a non-2xx status or an unreachable endpoint, collapses into
/// [`ProxyError::RemoteOperationFailed`] carrying the caller's message.
#[derive(Debug, Clone)]
pub struct IdeClient {
    config: EndpointConfig,
    http: reqwest::Client,
}

impl IdeClient {
    pub fn new(config: EndpointConfig) -> Result<Self, ProxyError> {
        // The IDE always listens on loopback; an HTTP(S)_PROXY from the environment would
        // only get in the way.
        let http = reqwest::Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .no_proxy()
            .build()
            .map_err(|err| ProxyError::HttpClient(err.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    pub async fn fetch_text(&self, path: &str, on_failure: &str) -> Result<String, ProxyError> {
        let url = self.config.url_for(path);
        debug!(%url, "GET");
        self.send(self.http.get(&url), &url, on_failure).await
    }

    /// POSTs `payload` as JSON (`Content-Type: application/json`) and returns the body text.
    pub async fn post_text<T>(
        &self,
        path: &str,
        payload: &T,
        on_failure: &str,
    ) -> Result<String, ProxyError>
    where
        T: Serialize + ?Sized,
    {
        let url = self.config.url_for(path);
        debug!(%url, "POST");
        self.send(self.http.post(&url).json(payload), &url, on_failure).await
    }

    async fn send(
        &self,
        request: RequestBuilder,
        url: &str,
        on_failure: &str,
    ) -> Result<String, ProxyError> {
        let response = request.send().await.map_err(|err| {
            warn!(%url, error = %err, "IDE service unreachable");
            remote_failure(on_failure)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "IDE service rejected request");
            return Err(remote_failure(on_failure));
        }

        response.text().await.map_err(|err| {
            warn!(%url, error = %err, "failed to read IDE response body");
            remote_failure(on_failure)
        })
    }
}

fn remote_failure(message: &str) -> ProxyError {
    ProxyError::RemoteOperationFailed(message.to_owned())
}
