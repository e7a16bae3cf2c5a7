// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Static tool and resource catalogs.
//!
//! Registering a tool means appending one [`ToolSpec`] to [`TOOLS`]; discovery and dispatch
//! both read from that table.

use std::sync::Arc;

use rmcp::model::{AnnotateAble, JsonObject, RawResource, Resource, Tool};
use schemars::JsonSchema;
use serde_json::Value;

use super::types::{ExecuteTerminalCommandParams, ReplaceTextParams};

pub const CURRENT_FILE_URI: &str = "jetbrains://current_file";

/// Success text for tools that change IDE state.
pub const ACTION_OK: &str = "OK";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// GET the path; the response body is the tool result.
    Fetch,
    /// POST the call arguments as JSON; the tool result is [`ACTION_OK`].
    Post,
}

#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub action: ToolAction,
    pub path: &'static str,
    /// Reported to the agent when the IDE call fails.
    pub on_failure: &'static str,
    pub input_schema: fn() -> JsonObject,
}

impl ToolSpec {
    pub fn descriptor(&self) -> Tool {
        Tool::new(self.name, self.description, Arc::new((self.input_schema)()))
    }
}

pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_current_file_text",
        description: "Get the text of the file currently open in the JetBrains IDE editor",
        action: ToolAction::Fetch,
        path: "/mcp/get_current_file_text",
        on_failure: "Current file not found",
        input_schema: no_arguments,
    },
    ToolSpec {
        name: "get_current_file_path",
        description: "Get the absolute path of the file currently open in the JetBrains IDE editor",
        action: ToolAction::Fetch,
        path: "/mcp/get_current_file_path",
        on_failure: "Current file not found",
        input_schema: no_arguments,
    },
    ToolSpec {
        name: "get_selected_text",
        description: "Get the text currently selected in the JetBrains IDE editor",
        action: ToolAction::Fetch,
        path: "/mcp/selected_text",
        on_failure: "There is no selected text",
        input_schema: no_arguments,
    },
    ToolSpec {
        name: "get_terminal_text",
        description: "Get the visible text of the active JetBrains IDE terminal",
        action: ToolAction::Fetch,
        path: "/terminalMcp/current_text",
        on_failure: "There is no opened terminal",
        input_schema: no_arguments,
    },
    ToolSpec {
        name: "execute_terminal_command",
        description: "Run a shell command in the active JetBrains IDE terminal",
        action: ToolAction::Post,
        path: "/terminalMcp/execute_command",
        on_failure: "Failed to execute command in terminal",
        input_schema: schema_of::<ExecuteTerminalCommandParams>,
    },
    ToolSpec {
        name: "replace_selected_text",
        description: "Replace the text currently selected in the JetBrains IDE editor",
        action: ToolAction::Post,
        path: "/mcp/replace_selected_text",
        on_failure: "Unable to replace selected text",
        input_schema: schema_of::<ReplaceTextParams>,
    },
    ToolSpec {
        name: "replace_current_file_text",
        description: "Replace the whole text of the file currently open in the JetBrains IDE editor",
        action: ToolAction::Post,
        path: "/mcp/replace_current_file_text",
        on_failure: "Unable to replace current file text",
        input_schema: schema_of::<ReplaceTextParams>,
    },
];

pub fn list_tools() -> Vec<Tool> {
    TOOLS.iter().map(ToolSpec::descriptor).collect()
}

pub fn find_tool(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|tool| tool.name == name)
}

#[derive(Debug, Clone, Copy)]
pub struct ResourceSpec {
    pub uri: &'static str,
    pub name: &'static str,
    pub mime_type: &'static str,
    /// IDE endpoint that serves the resource body.
    pub path: &'static str,
    pub on_failure: &'static str,
}

impl ResourceSpec {
    pub fn descriptor(&self) -> Resource {
        let mut raw = RawResource::new(self.uri, self.name);
        raw.mime_type = Some(self.mime_type.to_owned());
        raw.no_annotation()
    }
}

pub const RESOURCES: &[ResourceSpec] = &[ResourceSpec {
    uri: CURRENT_FILE_URI,
    name: "Current File",
    mime_type: "text/plain",
    path: "/mcp/get_current_file_text",
    on_failure: "Current file not found",
}];

pub fn list_resources() -> Vec<Resource> {
    RESOURCES.iter().map(ResourceSpec::descriptor).collect()
}

pub fn find_resource(uri: &str) -> Option<&'static ResourceSpec> {
    RESOURCES.iter().find(|resource| resource.uri == uri)
}

fn no_arguments() -> JsonObject {
    let mut schema = JsonObject::new();
    schema.insert("type".to_owned(), Value::from("object"));
    schema.insert("properties".to_owned(), Value::Object(JsonObject::new()));
    schema
}

fn schema_of<T: JsonSchema>() -> JsonObject {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(mut schema)) => {
            schema.remove("$schema");
            schema
        }
        _ => no_arguments(),
    }
}
