#![forbid(unsafe_code)]

use serde_json::{Value, json};

pub(crate) fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "catalog_list",
            "description": "List all collaboration methods (built-in catalog plus custom ones).",
            "inputSchema": {
                "type": "object",
                "properties": {},
                "required": []
            }
        }),
        json!({
            "name": "method_get",
            "description": "Get one collaboration method with its steps and success criteria.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "method": { "type": "integer" }
                },
                "required": ["method"]
            }
        }),
        json!({
            "name": "method_create",
            "description": "Create a custom collaboration method; it joins the catalog once it validates.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "description": { "type": "string" },
                    "duration": { "type": "string" },
                    "category": {
                        "type": "string",
                        "enum": ["Technical", "Business", "Product", "Design"]
                    },
                    "difficulty": {
                        "type": "string",
                        "enum": ["Easy", "Medium", "Hard"]
                    },
                    "steps": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "title": { "type": "string" },
                                "description": { "type": "string" },
                                "success_criteria": {
                                    "type": "array",
                                    "items": { "type": "string" }
                                }
                            },
                            "required": ["title", "description", "success_criteria"]
                        }
                    },
                    "outcome": { "type": "string" },
                    "success_criteria": {
                        "type": "array",
                        "items": { "type": "string" }
                    }
                },
                "required": ["title", "description", "duration", "steps", "outcome", "success_criteria"]
            }
        }),
        json!({
            "name": "collab_start",
            "description": "Start a collaboration from a method with a matched partner (status Proposed).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "method": { "type": "integer" },
                    "partner_name": { "type": "string" },
                    "partner_photo": { "type": "string" },
                    "start_date": { "type": "string" },
                    "due_date": { "type": "string" }
                },
                "required": ["method", "partner_name"]
            }
        }),
        json!({
            "name": "collab_list",
            "description": "List collaborations, optionally filtered by status.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "status": {
                        "type": "string",
                        "enum": ["Proposed", "In Progress", "Completed", "Cancelled"]
                    }
                },
                "required": []
            }
        }),
        json!({
            "name": "collab_open",
            "description": "Open one collaboration: step states, completed set, progress, and its method.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "collab": { "type": "integer" }
                },
                "required": ["collab"]
            }
        }),
        json!({
            "name": "collab_status",
            "description": "Set a collaboration's status explicitly; optionally require all steps completed.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "collab": { "type": "integer" },
                    "status": {
                        "type": "string",
                        "enum": ["Proposed", "In Progress", "Completed", "Cancelled"]
                    },
                    "require_steps_completed": { "type": "boolean" },
                    "expected_revision": { "type": "integer" }
                },
                "required": ["collab", "status"]
            }
        }),
        json!({
            "name": "collab_events",
            "description": "Read the event log of one collaboration, newest first.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "collab": { "type": "integer" },
                    "limit": { "type": "integer" }
                },
                "required": ["collab"]
            }
        }),
        json!({
            "name": "step_open",
            "description": "Open one step for editing; seeds the draft from stored notes and criteria.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "collab": { "type": "integer" },
                    "step": { "type": "integer" }
                },
                "required": ["collab", "step"]
            }
        }),
        json!({
            "name": "step_toggle",
            "description": "Toggle one success criterion in the open step draft.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "criterion": { "type": "integer" }
                },
                "required": ["criterion"]
            }
        }),
        json!({
            "name": "step_note",
            "description": "Replace the note in the open step draft (max 500 characters).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "note": { "type": "string" }
                },
                "required": ["note"]
            }
        }),
        json!({
            "name": "step_save",
            "description": "Commit the open step draft to the collaboration and close the editor.",
            "inputSchema": {
                "type": "object",
                "properties": {},
                "required": []
            }
        }),
        json!({
            "name": "step_discard",
            "description": "Close the step editor without committing the draft.",
            "inputSchema": {
                "type": "object",
                "properties": {},
                "required": []
            }
        }),
    ]
}
