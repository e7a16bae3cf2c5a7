// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! jetbrains-proxy — MCP tools backed by the JetBrains IDE built-in web server.
//!
//! Each tool call is forwarded as one HTTP request to the IDE; failures come back as
//! `isError` tool results instead of protocol faults.

pub mod config;
pub mod error;
pub mod ide;
pub mod logging;
pub mod mcp;

pub use config::EndpointConfig;
pub use error::ProxyError;
pub use ide::IdeClient;
pub use mcp::IdeProxy;
