// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Argument shapes advertised in the tool catalog.
//!
//! Arguments are forwarded to the IDE untouched; these types only exist to derive the
//! advertised JSON schemas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExecuteTerminalCommandParams {
    /// Shell command to run in the IDE's active terminal.
    pub command: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReplaceTextParams {
    /// Replacement text.
    pub text: String,
}
