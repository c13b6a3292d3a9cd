use crate::dom::node::DomNode;
use crate::dom::record::{AttributeMap, Record};
use serde::{Deserialize, Serialize};

/// Options controlling how nodes are projected into records
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Leave out attributes whose value is missing or empty (default: false)
    #[serde(default)]
    pub skip_empty_value: bool,
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set `skip_empty_value`
    pub fn skip_empty_value(mut self, skip: bool) -> Self {
        self.skip_empty_value = skip;
        self
    }
}

/// Convert a DOM-like node into a plain [`Record`].
///
/// Missing or non-object nodes give an empty record, at the root as well as
/// in any child slot. This function never fails.
pub fn serialize<N: DomNode>(node: Option<&N>, options: SerializeOptions) -> Record {
    let mut record = Record::default();
    let Some(node) = node.filter(|n| n.is_node()) else {
        return record;
    };

    if let Some(tag_name) = truthy(node.tag_name()) {
        record.tag_name = Some(tag_name.to_lowercase());
    } else if let Some(node_name) = truthy(node.node_name()) {
        record.node_name = Some(node_name.to_string());
    }

    if let Some(node_value) = truthy(node.node_value()) {
        record.node_value = Some(node_value.to_string());
    }

    // Presence follows the input collection, so `{}` is possible when every
    // entry is skipped.
    if let Some(attrs) = node.attributes().filter(|attrs| !attrs.is_empty()) {
        let mut mapped = AttributeMap::with_capacity(attrs.len());
        for attr in attrs.into_iter().flatten() {
            if options.skip_empty_value && !attr.has_value() {
                continue;
            }
            // Duplicate names keep their first position and take the last value.
            mapped.insert(attr.name.to_string(), attr.value.unwrap_or_default().to_string());
        }
        record.attributes = Some(mapped);
    }

    if let Some(children) = node.child_nodes().filter(|children| !children.is_empty()) {
        record.child_nodes = Some(
            children
                .into_iter()
                .map(|child| serialize(child, options))
                .collect(),
        );
    }

    record
}

fn truthy(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
