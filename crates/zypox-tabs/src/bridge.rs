//! Scripting bridge
//!
//! Calls made by script inside the generated homepage. They arrive over the
//! host IPC channel as `{ "fn": "<name>", ...args }`.

use serde::{Deserialize, Serialize};
use zypox_navigation::SearchEngine;

/// IPC command the homepage script invokes
pub const BRIDGE_COMMAND: &str = "bridge_call";

pub(crate) const PERFORM_SEARCH: &str = "performSearch";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fn", rename_all = "camelCase")]
pub enum BridgeCall {
    /// Free-text search typed into the homepage field
    PerformSearch { query: String },
}

impl BridgeCall {
    pub fn name(&self) -> &'static str {
        match self {
            BridgeCall::PerformSearch { .. } => PERFORM_SEARCH,
        }
    }

    /// Address the call wants loaded, if any. Empty queries are no-ops.
    pub fn target(&self, search: &SearchEngine) -> Option<String> {
        match self {
            BridgeCall::PerformSearch { query } => {
                let query = query.trim();
                if query.is_empty() {
                    None
                } else {
                    Some(search.query_url(query))
                }
            }
        }
    }
}
