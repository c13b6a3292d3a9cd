use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute name to value, in first-seen order
pub type AttributeMap = IndexMap<String, String>;

/// Plain, detached snapshot of a DOM node.
///
/// Absent fields mean "not applicable" and are omitted from JSON entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Lowercased tag name of an element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,

    /// Node name of a non-element node (e.g. "#text")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,

    /// Text or comment content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_nodes: Option<Vec<Record>>,
}

impl Record {
    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        self.tag_name.is_none()
            && self.node_name.is_none()
            && self.node_value.is_none()
            && self.attributes.is_none()
            && self.child_nodes.is_none()
    }

    /// Get attribute value by name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(name).map(String::as_str)
    }

    /// Children, empty when the field is absent
    pub fn children(&self) -> &[Record] {
        self.child_nodes.as_deref().unwrap_or_default()
    }

    /// Count this record and all of its descendants
    pub fn count_nodes(&self) -> usize {
        1 + self.children().iter().map(Record::count_nodes).sum::<usize>()
    }

    /// Convert to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to single-line JSON
    pub fn to_json_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a record previously written with [`Record::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
