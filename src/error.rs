// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Error taxonomy shared by the IDE client, the catalogs and the dispatcher.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProxyError {
    /// The IDE service answered with a non-success status or could not be reached.
    ///
    /// Carries the per-tool message chosen by the caller; transport detail is only logged.
    #[error("{0}")]
    RemoteOperationFailed(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("invalid IDE port `{value}`: expected an integer in 1..=65535")]
    InvalidPort { value: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::ProxyError;

    #[test]
    fn remote_failure_displays_caller_message_verbatim() {
        let err = ProxyError::RemoteOperationFailed("There is no opened terminal".to_owned());
        assert_eq!(err.to_string(), "There is no opened terminal");
    }

    #[test]
    fn unknown_tool_message_embeds_name() {
        let err = ProxyError::UnknownTool("generate_image".to_owned());
        assert_eq!(err.to_string(), "Unknown tool: generate_image");
    }

    #[test]
    fn resource_not_found_message_embeds_uri() {
        let err = ProxyError::ResourceNotFound("jetbrains://missing".to_owned());
        assert!(err.to_string().contains("jetbrains://missing"));
    }
}
