//! Decoder settings

use serde::{Deserialize, Serialize};

/// Settings for one decode call
///
/// DTD handling is deliberately absent: a DOCTYPE is always rejected.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DecodeOptions {
    /// Name of the input, copied into every diagnostic's `source_file`
    pub source_name: Option<String>,

    /// Maximum number of tree nodes the XML reader may allocate
    pub nodes_limit: u32,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            source_name: None,
            nodes_limit: u32::MAX,
        }
    }
}

impl DecodeOptions {
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    pub fn with_nodes_limit(mut self, limit: u32) -> Self {
        self.nodes_limit = limit;
        self
    }
}
