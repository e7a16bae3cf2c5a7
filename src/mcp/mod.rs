// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Model Context Protocol (MCP) server surface.
//!
//! Tools and resources are advertised from static catalogs; each tool call becomes exactly
//! one request to the IDE service.

pub mod catalog;
mod server;
mod types;

pub use server::{into_envelope, IdeProxy};
pub use types::{ExecuteTerminalCommandParams, ReplaceTextParams};
