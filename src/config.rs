// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Location of the IDE's built-in web server.

use crate::error::ProxyError;

pub const IDE_PORT_ENV: &str = "IDE_PORT";
pub const DEFAULT_IDE_PORT: u16 = 63343;
pub const DEFAULT_IDE_HOST: &str = "localhost";
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Endpoint of the IDE service. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    host: String,
    port: u16,
    base_path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::with_port(DEFAULT_IDE_PORT)
    }
}

impl EndpointConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            host: DEFAULT_IDE_HOST.to_owned(),
            port,
            base_path: DEFAULT_BASE_PATH.to_owned(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Reads `IDE_PORT` from the process environment, falling back to the default port.
    pub fn from_env() -> Result<Self, ProxyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ProxyError> {
        match lookup(IDE_PORT_ENV) {
            Some(raw) if !raw.trim().is_empty() => Ok(Self::with_port(parse_port(&raw)?)),
            _ => Ok(Self::default()),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// `http://{host}:{port}{base_path}` without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.base_path)
    }

    /// Joins an endpoint path such as `/mcp/selected_text` onto the base URL.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url())
    }
}

pub fn parse_port(raw: &str) -> Result<u16, ProxyError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ProxyError::InvalidPort { value: raw.to_owned() }),
    }
}
