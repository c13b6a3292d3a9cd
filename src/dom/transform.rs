//! Post-processing passes over serialized records
//!
//! Both passes keep the record contract intact: a field is either absent or
//! meaningful, and children keep their order.

use crate::dom::record::Record;

/// Recursively drop attributes with an empty value.
///
/// The `attributes` field itself is removed once nothing is left in it.
pub fn remove_empty_attributes(record: &mut Record) {
    let emptied = record.attributes.as_mut().is_some_and(|attributes| {
        attributes.retain(|_, value| !value.is_empty());
        attributes.is_empty()
    });
    if emptied {
        record.attributes = None;
    }

    for child in record.child_nodes.iter_mut().flatten() {
        remove_empty_attributes(child);
    }
}

/// Recursively sort attribute names.
///
/// For every attribute listed in `value_names` the whitespace-separated
/// tokens of its value are sorted too (e.g. `class="b a"` becomes `"a b"`).
pub fn sort_attributes(record: &mut Record, value_names: &[&str]) {
    if let Some(attributes) = &mut record.attributes {
        attributes.sort_keys();
        for &name in value_names {
            if let Some(value) = attributes.get_mut(name) {
                *value = sort_tokens(value);
            }
        }
    }

    for child in record.child_nodes.iter_mut().flatten() {
        sort_attributes(child, value_names);
    }
}

fn sort_tokens(value: &str) -> String {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::record::AttributeMap;

    fn element(tag: &str, attrs: &[(&str, &str)], children: Vec<Record>) -> Record {
        Record {
            tag_name: Some(tag.to_string()),
            attributes: (!attrs.is_empty()).then(|| {
                attrs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<AttributeMap>()
            }),
            child_nodes: (!children.is_empty()).then_some(children),
            ..Record::default()
        }
    }

    fn keys(record: &Record) -> Vec<&str> {
        record
            .attributes
            .as_ref()
            .map(|a| a.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_remove_empty_attributes() {
        let mut record = element(
            "div",
            &[("id", "x"), ("title", "")],
            vec![element("span", &[("hidden", "")], vec![])],
        );

        remove_empty_attributes(&mut record);

        assert_eq!(keys(&record), vec!["id"]);
        let span = &record.children()[0];
        assert_eq!(span.attributes, None);
        assert_eq!(span.tag_name.as_deref(), Some("span"));
    }

    #[test]
    fn test_remove_empty_attributes_drops_empty_map() {
        let mut record = Record {
            attributes: Some(AttributeMap::new()),
            ..Record::default()
        };
        remove_empty_attributes(&mut record);
        assert!(record.is_empty());
    }

    #[test]
    fn test_sort_attribute_names() {
        let mut record = element(
            "p",
            &[("title", "t"), ("class", "b a"), ("id", "x")],
            vec![element("em", &[("z", ""), ("a", "")], vec![])],
        );

        sort_attributes(&mut record, &[]);

        assert_eq!(keys(&record), vec!["class", "id", "title"]);
        assert_eq!(record.get_attribute("class"), Some("b a"));
        assert_eq!(keys(&record.children()[0]), vec!["a", "z"]);
    }

    #[test]
    fn test_sort_attribute_values() {
        let mut record = element(
            "p",
            &[("data-sorted-2", "c  a b"), ("data-sorted-1", "z y"), ("data-kept", "2 1")],
            vec![],
        );

        sort_attributes(&mut record, &["data-sorted-1", "data-sorted-2", "data-missing"]);

        assert_eq!(keys(&record), vec!["data-kept", "data-sorted-1", "data-sorted-2"]);
        assert_eq!(record.get_attribute("data-sorted-1"), Some("y z"));
        assert_eq!(record.get_attribute("data-sorted-2"), Some("a b c"));
        assert_eq!(record.get_attribute("data-kept"), Some("2 1"));
    }

    #[test]
    fn test_transforms_ignore_records_without_attributes() {
        let mut record = element("div", &[], vec![Record::default()]);
        let before = record.clone();

        remove_empty_attributes(&mut record);
        sort_attributes(&mut record, &["class"]);

        assert_eq!(record, before);
    }
}
