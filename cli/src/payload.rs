use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Flat generation payload embedded as a JSON text chunk.
///
/// Unknown fields are kept, in document order, across a read-modify-write
/// cycle.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub(crate) struct GenerationPayload {
    /// Main generation prompt, stored under the `mega` wire name.
    #[serde(rename = "mega", default, skip_serializing_if = "Option::is_none")]
    pub(crate) prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) lighting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) scene: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) view: Option<String>,
    #[serde(flatten)]
    pub(crate) extra: IndexMap<String, serde_json::Value>,
}
