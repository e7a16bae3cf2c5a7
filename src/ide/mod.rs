// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP client for the companion service running inside the IDE.

mod client;

#[cfg(test)]
pub(crate) mod stub;

pub use client::{IdeClient, CLIENT_USER_AGENT};
