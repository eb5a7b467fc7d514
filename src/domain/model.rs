use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModelMetadata {
    #[serde(default)]
    pub item_types: Vec<ItemType>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemType {
    #[serde(alias = "model_class")]
    pub model_class: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub preparable_status_requirement: Option<StatusRequirementRef>,
    #[serde(default)]
    pub workflow_item_step: Option<WorkflowStepRef>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, Deserialize)]
pub struct StatusRequirementRef {
    #[serde(rename = "ref")]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, Deserialize)]
pub struct WorkflowStepRef {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(rename = "title", alias = "_title", default)]
    pub title: String,
}

impl ItemType {
    pub fn new(model_class: impl Into<String>) -> Self {
        Self {
            model_class: model_class.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn trait_name(&self) -> String {
        format!("{}Trait", self.model_class)
    }
}

impl Attribute {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn status_requirement(mut self, reference: impl Into<String>) -> Self {
        self.preparable_status_requirement = Some(StatusRequirementRef {
            reference: reference.into(),
        });
        self
    }

    pub fn workflow_step(mut self, reference: impl Into<String>, title: impl Into<String>) -> Self {
        self.workflow_item_step = Some(WorkflowStepRef {
            reference: reference.into(),
            title: title.into(),
        });
        self
    }

    /// Label, treating an empty string the same as a missing one.
    pub fn non_empty_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|s| !s.is_empty())
    }

    pub fn non_empty_hint(&self) -> Option<&str> {
        self.hint.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Map that keeps keys in first-insertion order.
///
/// Lookups are linear; the maps built here hold one entry per attribute at most.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Overwrites the value of an existing key in place, keeping its position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn entry_or_default(&mut self, key: impl Into<String>) -> &mut V
    where
        V: Default,
    {
        let key = key.into();
        let index = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => index,
            None => {
                self.entries.push((key, V::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata_with_original_field_names() {
        let json = r#"{
            "itemTypes": [
                {
                    "model_class": "Post",
                    "attributes": [
                        {
                            "ref": "title",
                            "label": "Title",
                            "hint": null,
                            "preparableStatusRequirement": {"ref": "draft"},
                            "workflowItemStep": {"ref": "info", "_title": "Info"}
                        },
                        {"ref": "slug", "unknown": 1}
                    ]
                }
            ]
        }"#;

        let metadata: ContentModelMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.item_types.len(), 1);

        let post = &metadata.item_types[0];
        assert_eq!(post.model_class, "Post");
        assert_eq!(post.attributes[0].label.as_deref(), Some("Title"));
        assert_eq!(post.attributes[0].hint, None);
        assert_eq!(
            post.attributes[0].workflow_item_step.as_ref().unwrap().title,
            "Info"
        );
        assert_eq!(post.attributes[1].preparable_status_requirement, None);
    }

    #[test]
    fn test_parse_camel_case_model_class() {
        let json = r#"{"itemTypes": [{"modelClass": "Page"}]}"#;
        let metadata: ContentModelMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.item_types[0].model_class, "Page");
        assert!(metadata.item_types[0].attributes.is_empty());
    }

    #[test]
    fn test_empty_label_is_treated_as_missing() {
        let attribute = Attribute::new("a").label("");
        assert_eq!(attribute.non_empty_label(), None);
    }

    #[test]
    fn test_ordered_map_keeps_first_insertion_position() {
        let mut map = OrderedMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        map.insert("b", 3);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(map.get("b"), Some(&3));

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"b":3,"a":2}"#);
    }
}
