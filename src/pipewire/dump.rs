//! Typed view of `pw-dump` output
//!
//! Only the fields needed to find the default sink are modelled. Everything
//! else in the dump is ignored by serde.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Result;

pub const METADATA_INTERFACE: &str = "PipeWire:Interface:Metadata";

#[derive(Debug, Clone, Deserialize)]
pub struct GraphObject {
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Present at top level on metadata objects only
    #[serde(default)]
    pub props: Option<Map<String, Value>>,
    #[serde(default)]
    pub metadata: Option<Vec<MetadataEntry>>,
}

impl GraphObject {
    /// Property lookup that tolerates objects without a `props` map
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.as_ref().and_then(|props| props.get(key))
    }

    /// True for a metadata store whose `metadata.name` equals `name`
    pub fn is_metadata_named(&self, name: &str) -> bool {
        self.kind == METADATA_INTERFACE
            && self.prop("metadata.name").and_then(Value::as_str) == Some(name)
    }

    pub fn metadata_entries(&self) -> &[MetadataEntry] {
        self.metadata.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

impl MetadataEntry {
    /// The `name` field of a JSON-typed value, e.g. `{"name": "alsa_output..."}`
    pub fn value_name(&self) -> Option<&str> {
        self.value.get("name").and_then(Value::as_str)
    }
}

/// Parse the JSON array printed by `pw-dump`
pub fn parse_dump(bytes: &[u8]) -> Result<Vec<GraphObject>> {
    Ok(serde_json::from_slice(bytes)?)
}
