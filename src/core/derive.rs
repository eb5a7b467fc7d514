//! Lookup tables derived from an item type's attributes.
//!
//! All functions are single passes over `item_type.attributes`; keys keep the
//! order in which they were first seen.

use crate::domain::model::{ItemType, OrderedMap};

pub type Grouping = OrderedMap<Vec<String>>;
pub type Captions = OrderedMap<String>;

/// Attribute refs grouped by the status requirement they belong to.
pub fn derive_status_requirements(item_type: &ItemType) -> Grouping {
    let mut groups = Grouping::new();
    for attribute in &item_type.attributes {
        if let Some(requirement) = &attribute.preparable_status_requirement {
            groups
                .entry_or_default(requirement.reference.as_str())
                .push(attribute.reference.clone());
        }
    }
    groups
}

/// Attribute refs grouped by workflow step.
pub fn derive_flow_steps(item_type: &ItemType) -> Grouping {
    let mut groups = Grouping::new();
    for attribute in &item_type.attributes {
        if let Some(step) = &attribute.workflow_item_step {
            groups
                .entry_or_default(step.reference.as_str())
                .push(attribute.reference.clone());
        }
    }
    groups
}

/// Step ref to step title. The last attribute naming a step wins.
pub fn derive_flow_step_captions(item_type: &ItemType) -> Captions {
    let mut captions = Captions::new();
    for attribute in &item_type.attributes {
        if let Some(step) = &attribute.workflow_item_step {
            captions.insert(step.reference.as_str(), step.title.clone());
        }
    }
    captions
}

pub fn derive_labels(item_type: &ItemType) -> Captions {
    let mut labels = Captions::new();
    for attribute in &item_type.attributes {
        if let Some(label) = attribute.non_empty_label() {
            labels.insert(attribute.reference.as_str(), label.to_string());
        }
    }
    labels
}

pub fn derive_hints(item_type: &ItemType) -> Captions {
    let mut hints = Captions::new();
    for attribute in &item_type.attributes {
        if let Some(hint) = attribute.non_empty_hint() {
            hints.insert(attribute.reference.as_str(), hint.to_string());
        }
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Attribute;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_labels_skip_missing_and_empty() {
        let item_type = ItemType::new("Post")
            .with_attribute(Attribute::new("a").label("Title"))
            .with_attribute(Attribute::new("b"))
            .with_attribute(Attribute::new("c").label(""));

        let labels = derive_labels(&item_type);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("a").map(String::as_str), Some("Title"));
        assert_eq!(labels.get("b"), None);
    }

    #[test]
    fn test_hints() {
        let item_type = ItemType::new("Post")
            .with_attribute(Attribute::new("a").label("Title"))
            .with_attribute(Attribute::new("b").hint("Shown in lists"));

        let hints = derive_hints(&item_type);
        assert_eq!(hints.keys().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_flow_steps_group_in_attribute_order() {
        let item_type = ItemType::new("Post")
            .with_attribute(Attribute::new("x").workflow_step("step1", "Draft"))
            .with_attribute(Attribute::new("z").workflow_step("step2", "Review"))
            .with_attribute(Attribute::new("y").workflow_step("step1", "Draft"))
            .with_attribute(Attribute::new("w"));

        let steps = derive_flow_steps(&item_type);
        assert_eq!(steps.keys().collect::<Vec<_>>(), vec!["step1", "step2"]);
        assert_eq!(steps.get("step1"), Some(&strings(&["x", "y"])));
        assert_eq!(steps.get("step2"), Some(&strings(&["z"])));

        let captions = derive_flow_step_captions(&item_type);
        assert_eq!(captions.get("step1").map(String::as_str), Some("Draft"));
        assert_eq!(captions.get("step2").map(String::as_str), Some("Review"));
    }

    #[test]
    fn test_flow_step_caption_last_write_wins() {
        let item_type = ItemType::new("Post")
            .with_attribute(Attribute::new("x").workflow_step("step1", "Draft"))
            .with_attribute(Attribute::new("y").workflow_step("step1", "Writing"));

        let captions = derive_flow_step_captions(&item_type);
        assert_eq!(captions.len(), 1);
        assert_eq!(captions.get("step1").map(String::as_str), Some("Writing"));
    }

    #[test]
    fn test_status_requirements() {
        let item_type = ItemType::new("Post")
            .with_attribute(Attribute::new("title").status_requirement("draft"))
            .with_attribute(Attribute::new("body").status_requirement("public"))
            .with_attribute(Attribute::new("slug").status_requirement("draft"))
            .with_attribute(Attribute::new("notes"));

        let requirements = derive_status_requirements(&item_type);
        assert_eq!(requirements.get("draft"), Some(&strings(&["title", "slug"])));
        assert_eq!(requirements.get("public"), Some(&strings(&["body"])));
        assert_eq!(requirements.len(), 2);
    }

    #[test]
    fn test_no_attributes_yields_empty_maps() {
        let item_type = ItemType::new("Empty");
        assert!(derive_status_requirements(&item_type).is_empty());
        assert!(derive_flow_steps(&item_type).is_empty());
        assert!(derive_flow_step_captions(&item_type).is_empty());
        assert!(derive_labels(&item_type).is_empty());
        assert!(derive_hints(&item_type).is_empty());
    }

    #[test]
    fn test_derivations_are_pure() {
        let item_type = ItemType::new("Post")
            .with_attribute(
                Attribute::new("a")
                    .label("A")
                    .hint("h")
                    .status_requirement("draft")
                    .workflow_step("s", "S"),
            );
        let before = item_type.clone();

        assert_eq!(derive_labels(&item_type), derive_labels(&item_type));
        assert_eq!(derive_hints(&item_type), derive_hints(&item_type));
        assert_eq!(
            derive_status_requirements(&item_type),
            derive_status_requirements(&item_type)
        );
        assert_eq!(derive_flow_steps(&item_type), derive_flow_steps(&item_type));
        assert_eq!(item_type, before);
    }
}
