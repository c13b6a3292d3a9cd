use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single attribute as seen by the serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> Attribute<'a> {
    pub fn new(name: &'a str, value: Option<&'a str>) -> Self {
        Self { name, value }
    }

    /// Whether the value is present and non-empty
    pub fn has_value(&self) -> bool {
        self.value.is_some_and(|v| !v.is_empty())
    }
}

/// Read-only view of a DOM-like node.
///
/// Every accessor is optional: a provider returns `None` for anything the node
/// does not carry. The serializer never mutates the node.
pub trait DomNode {
    /// Whether this value is an object-like node at all.
    ///
    /// Values that are not nodes serialize to an empty record.
    fn is_node(&self) -> bool {
        true
    }

    fn tag_name(&self) -> Option<&str>;

    fn node_name(&self) -> Option<&str>;

    fn node_value(&self) -> Option<&str>;

    /// Attributes in document order, `None` when the node has no collection.
    /// A `None` entry is a malformed attribute; it still counts toward the
    /// collection length.
    fn attributes(&self) -> Option<Vec<Option<Attribute<'_>>>>;

    /// Children in document order. A `None` entry is a missing child slot.
    fn child_nodes(&self) -> Option<Vec<Option<&Self>>>;
}

/// Duck-typed JSON nodes, e.g. the raw mirror produced by a page script.
///
/// Only objects are nodes. Fields holding anything other than a string are
/// treated as absent.
impl DomNode for Value {
    fn is_node(&self) -> bool {
        self.is_object()
    }

    fn tag_name(&self) -> Option<&str> {
        self.get("tagName").and_then(Value::as_str)
    }

    fn node_name(&self) -> Option<&str> {
        self.get("nodeName").and_then(Value::as_str)
    }

    fn node_value(&self) -> Option<&str> {
        self.get("nodeValue").and_then(Value::as_str)
    }

    fn attributes(&self) -> Option<Vec<Option<Attribute<'_>>>> {
        let entries = self.get("attributes")?.as_array()?;
        Some(
            entries
                .iter()
                .map(|entry| {
                    let name = str_field(entry, "name", "nodeName")?;
                    Some(Attribute::new(name, str_field(entry, "value", "nodeValue")))
                })
                .collect(),
        )
    }

    fn child_nodes(&self) -> Option<Vec<Option<&Self>>> {
        let children = self.get("childNodes")?.as_array()?;
        Some(children.iter().map(Some).collect())
    }
}

/// Attribute records may use either the `Attr` or the `Node` property names
fn str_field<'a>(entry: &'a Value, primary: &str, fallback: &str) -> Option<&'a str> {
    entry
        .get(primary)
        .or_else(|| entry.get(fallback))
        .and_then(Value::as_str)
}

/// An attribute owned by a [`Node`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attr {
    pub name: String,

    #[serde(default)]
    pub value: Option<String>,
}

/// Typed in-process node, handy for building trees without a browser
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attr>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_nodes: Option<Vec<Option<Node>>>,
}

impl Node {
    /// Element node; `nodeName` mirrors the tag the way browsers report it
    pub fn element(tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        Self {
            node_name: Some(tag_name.to_uppercase()),
            tag_name: Some(tag_name),
            ..Self::default()
        }
    }

    /// Text node
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            node_name: Some("#text".to_string()),
            node_value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Comment node
    pub fn comment(value: impl Into<String>) -> Self {
        Self {
            node_name: Some("#comment".to_string()),
            node_value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Builder method: append an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.get_or_insert_with(Vec::new).push(Attr {
            name: name.into(),
            value: Some(value.into()),
        });
        self
    }

    /// Builder method: append an attribute that carries no value
    pub fn with_bare_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.get_or_insert_with(Vec::new).push(Attr {
            name: name.into(),
            value: None,
        });
        self
    }

    /// Builder method: append a child
    pub fn with_child(mut self, child: Node) -> Self {
        self.child_nodes.get_or_insert_with(Vec::new).push(Some(child));
        self
    }

    /// Builder method: append an empty child slot
    pub fn with_missing_child(mut self) -> Self {
        self.child_nodes.get_or_insert_with(Vec::new).push(None);
        self
    }
}

impl DomNode for Node {
    fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    fn node_name(&self) -> Option<&str> {
        self.node_name.as_deref()
    }

    fn node_value(&self) -> Option<&str> {
        self.node_value.as_deref()
    }

    fn attributes(&self) -> Option<Vec<Option<Attribute<'_>>>> {
        self.attributes.as_ref().map(|attrs| {
            attrs
                .iter()
                .map(|attr| Some(Attribute::new(&attr.name, attr.value.as_deref())))
                .collect()
        })
    }

    fn child_nodes(&self) -> Option<Vec<Option<&Self>>> {
        self.child_nodes
            .as_ref()
            .map(|children| children.iter().map(Option::as_ref).collect())
    }
}
