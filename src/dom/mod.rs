//! DOM snapshot module
//!
//! This module turns DOM-like node trees into plain records. It includes:
//! - DomNode: read-only view over a node provider (JSON values, typed nodes)
//! - Record: detached, JSON-serializable snapshot of a node
//! - serialize: the recursive projection from nodes to records
//! - transform: post-processing passes (empty attribute removal, sorting)

pub mod node;
pub mod record;
pub mod serializer;
pub mod snapshot;
pub mod transform;

pub use node::{Attr, Attribute, DomNode, Node};
pub use record::{AttributeMap, Record};
pub use serializer::{SerializeOptions, serialize};
pub use snapshot::{SnapshotOptions, snapshot};
pub use transform::{remove_empty_attributes, sort_attributes};

use crate::error::Result;

/// Serialize a JSON node tree given as text
pub fn snapshot_json(json: &str, options: &SnapshotOptions) -> Result<Record> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(snapshot(Some(&value), options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json() {
        let record = snapshot_json(r#"{"tagName":"P"}"#, &SnapshotOptions::default()).unwrap();
        assert_eq!(record.tag_name.as_deref(), Some("p"));
    }

    #[test]
    fn test_snapshot_json_non_object() {
        let record = snapshot_json("null", &SnapshotOptions::default()).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_snapshot_json_invalid() {
        assert!(snapshot_json("{", &SnapshotOptions::default()).is_err());
    }
}
