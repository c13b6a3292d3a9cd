use crate::dom::node::DomNode;
use crate::dom::record::Record;
use crate::dom::serializer::{SerializeOptions, serialize};
use crate::dom::transform::{remove_empty_attributes, sort_attributes};
use serde::{Deserialize, Serialize};

/// Full snapshot configuration: serialization plus optional post-processing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SnapshotOptions {
    /// Leave out attributes with a missing or empty value while serializing
    pub skip_empty_value: bool,

    /// Drop empty attributes after serializing
    pub remove_empty_attributes: bool,

    /// Sort attribute names; the listed attributes also get their values sorted.
    /// `None` leaves the document order alone.
    pub sort_attributes: Option<Vec<String>>,
}

impl SnapshotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set `skip_empty_value`
    pub fn skip_empty_value(mut self, skip: bool) -> Self {
        self.skip_empty_value = skip;
        self
    }

    /// Builder method: set `remove_empty_attributes`
    pub fn remove_empty_attributes(mut self, remove: bool) -> Self {
        self.remove_empty_attributes = remove;
        self
    }

    /// Builder method: sort attribute names, and the values of `value_names`
    pub fn sort_attributes<I, S>(mut self, value_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort_attributes = Some(value_names.into_iter().map(Into::into).collect());
        self
    }

    /// Options handed to the serializer
    pub fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions::new().skip_empty_value(self.skip_empty_value)
    }

    /// Run the post-processing passes on an already serialized record
    pub fn apply(&self, record: &mut Record) {
        if self.remove_empty_attributes {
            remove_empty_attributes(record);
        }
        if let Some(names) = &self.sort_attributes {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            sort_attributes(record, &names);
        }
    }
}

/// Serialize a node and run the configured post-processing passes
pub fn snapshot<N: DomNode>(node: Option<&N>, options: &SnapshotOptions) -> Record {
    let mut record = serialize(node, options.serialize_options());
    options.apply(&mut record);
    log::debug!("Snapshot captured {} nodes", record.count_nodes());
    record
}
