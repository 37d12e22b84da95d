//! Generated "new tab" search page
//!
//! Each tab keeps exactly one homepage document in memory, addressed by a
//! location unique to the tab and generation. Regenerating replaces it.

use crate::bridge::{BRIDGE_COMMAND, PERFORM_SEARCH};

const HOMEPAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Zypox</title>
    <script>
        document.addEventListener("DOMContentLoaded", function () {
            const input = document.getElementById("search");
            input.focus();
            input.addEventListener("keydown", function (e) {
                if (e.key !== "Enter") {
                    return;
                }
                const query = input.value.trim();
                const ipc = window.__TAURI_INTERNALS__;
                if (query && ipc) {
                    ipc.invoke(__BRIDGE_COMMAND__, { call: { fn: __BRIDGE_FUNCTION__, query: query } });
                }
            });
        });
    </script>
    <style>
        body {
            background-color: #1e1e1e;
            color: white;
            font-family: Arial, sans-serif;
            text-align: center;
            margin-top: 200px;
        }
        input {
            padding: 15px;
            width: 400px;
            font-size: 18px;
            border-radius: 10px;
            border: none;
        }
        input:focus {
            outline: none;
            box-shadow: 0 0 10px #66f;
        }
    </style>
</head>
<body>
    <input id="search" type="text" placeholder="Quick search with Zypox...">
</body>
</html>
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomepageResource {
    location: String,
    document: String,
}

impl HomepageResource {
    /// Build the document for `tab_id`. `base` is the location prefix served
    /// by the host's homepage handler.
    pub fn generate(base: &str, tab_id: &str, generation: u64) -> Self {
        let command_json =
            serde_json::to_string(BRIDGE_COMMAND).unwrap_or_else(|_| "\"\"".to_string());
        let function_json =
            serde_json::to_string(PERFORM_SEARCH).unwrap_or_else(|_| "\"\"".to_string());

        let document = HOMEPAGE_TEMPLATE
            .replace("__BRIDGE_COMMAND__", &command_json)
            .replace("__BRIDGE_FUNCTION__", &function_json);

        Self {
            location: format!("{}{}-{}.html", base, tab_id, generation),
            document,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Whether an engine address points at this document
    pub fn matches(&self, address: &str) -> bool {
        address.contains(&self.location)
    }
}
