#![forbid(unsafe_code)]

use crate::McpServer;
use serde_json::Value;

macro_rules! define_tool_dispatch {
    ($($tool_name:literal => $method:ident),* $(,)?) => {
        pub(crate) fn dispatch_tool(
            server: &mut McpServer,
            name: &str,
            args: Value,
        ) -> Option<Value> {
            let resp = match name {
                $($tool_name => server.$method(args),)*
                _ => return None,
            };
            Some(resp)
        }

        #[cfg(test)]
        pub(crate) fn dispatch_tool_names() -> &'static [&'static str] {
            &[$($tool_name),*]
        }
    };
}

define_tool_dispatch! {
    "catalog_list" => tool_catalog_list,
    "method_get" => tool_method_get,
    "method_create" => tool_method_create,
    "collab_start" => tool_collab_start,
    "collab_list" => tool_collab_list,
    "collab_open" => tool_collab_open,
    "collab_status" => tool_collab_status,
    "collab_events" => tool_collab_events,
    "step_open" => tool_step_open,
    "step_toggle" => tool_step_toggle,
    "step_note" => tool_step_note,
    "step_save" => tool_step_save,
    "step_discard" => tool_step_discard,
}
