#![forbid(unsafe_code)]

use crate::{JsonRpcRequest, json_rpc_error, json_rpc_response, tool_text_content};
use pl_core::editor::StepEditor;
use pl_storage::SqliteStore;
use serde_json::{Value, json};

pub(crate) struct McpServer {
    initialized: bool,
    store: SqliteStore,
    editor: StepEditor,
}

impl McpServer {
    pub(crate) fn new(store: SqliteStore) -> Self {
        Self {
            initialized: false,
            store,
            editor: StepEditor::new(),
        }
    }

    pub(crate) fn store(&self) -> &SqliteStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut SqliteStore {
        &mut self.store
    }

    pub(crate) fn editor(&self) -> &StepEditor {
        &self.editor
    }

    pub(crate) fn editor_mut(&mut self) -> &mut StepEditor {
        &mut self.editor
    }

    pub(crate) fn handle(&mut self, request: JsonRpcRequest) -> Option<Value> {
        let method = request.method.as_str();

        if method == "initialize" {
            self.initialized = true;
            return Some(json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": crate::MCP_VERSION,
                    "serverInfo": { "name": crate::SERVER_NAME, "version": crate::SERVER_VERSION },
                    "capabilities": { "tools": {} }
                }),
            ));
        }

        if method == "notifications/initialized" {
            self.initialized = true;
            return None;
        }

        if !self.initialized {
            return Some(json_rpc_error(request.id, -32002, "Server not initialized"));
        }

        if method == "ping" {
            return Some(json_rpc_response(request.id, json!({})));
        }

        // Some clients probe optional resources methods by default; an
        // empty set keeps the surface deterministic.
        if method == "resources/list" {
            return Some(json_rpc_response(request.id, json!({ "resources": [] })));
        }
        if method == "resources/read" {
            return Some(json_rpc_response(request.id, json!({ "contents": [] })));
        }

        if method == "tools/list" {
            return Some(json_rpc_response(
                request.id,
                json!({ "tools": crate::tools::tool_definitions() }),
            ));
        }

        if method == "tools/call" {
            let Some(params) = request.params else {
                return Some(json_rpc_error(request.id, -32602, "params must be an object"));
            };
            let Some(params_obj) = params.as_object() else {
                return Some(json_rpc_error(request.id, -32602, "params must be an object"));
            };
            let Some(name) = params_obj.get("name").and_then(|v| v.as_str()) else {
                return Some(json_rpc_error(request.id, -32602, "name must be a string"));
            };
            let args = params_obj
                .get("arguments")
                .cloned()
                .unwrap_or_else(|| json!({}));

            let Some(payload) = crate::handlers::dispatch_tool(self, name, args) else {
                return Some(json_rpc_error(
                    request.id,
                    -32602,
                    &format!("Unknown tool: {name}"),
                ));
            };
            return Some(json_rpc_response(
                request.id,
                json!({ "content": [tool_text_content(&payload)] }),
            ));
        }

        Some(json_rpc_error(
            request.id,
            -32601,
            &format!("Method not found: {method}"),
        ))
    }
}
