use crate::domain::model::{ContentModelMetadata, ItemType};
use crate::utils::error::{GenError, Result};
use regex::Regex;

/// Compiled item type pattern.
///
/// `*` stands for one or more ASCII word characters and the whole pattern is
/// anchored, so `foo*` matches `foo_bar` but not `foo` or `xfoo_bar`. Text
/// around the wildcard is passed to the regex engine as written.
#[derive(Debug, Clone)]
pub struct ItemTypePattern {
    source: String,
    regex: Regex,
}

impl ItemTypePattern {
    pub fn compile(pattern: &str) -> Result<Self> {
        let translated = translate(pattern);
        let regex = Regex::new(&translated).map_err(|e| GenError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!("Item type pattern '{}' compiled to {}", pattern, translated);

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, model_class: &str) -> bool {
        self.regex.is_match(model_class)
    }
}

fn translate(pattern: &str) -> String {
    format!("^(?:{})$", pattern.replace('*', "[A-Za-z0-9_]+"))
}

/// Item types whose model class fully matches `pattern`, in document order.
pub fn match_item_types<'a>(
    metadata: &'a ContentModelMetadata,
    pattern: &str,
) -> Result<Vec<&'a ItemType>> {
    let compiled = ItemTypePattern::compile(pattern)?;
    Ok(metadata
        .item_types
        .iter()
        .filter(|item_type| compiled.is_match(&item_type.model_class))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(classes: &[&str]) -> ContentModelMetadata {
        ContentModelMetadata {
            item_types: classes.iter().map(|c| ItemType::new(*c)).collect(),
        }
    }

    fn classes(matched: Vec<&ItemType>) -> Vec<&str> {
        matched.iter().map(|t| t.model_class.as_str()).collect()
    }

    #[test]
    fn test_prefix_wildcard() {
        let cmm = metadata(&["post", "foo_bar", "page"]);
        let matched = match_item_types(&cmm, "foo*").unwrap();
        assert_eq!(classes(matched), vec!["foo_bar"]);
    }

    #[test]
    fn test_wildcard_requires_at_least_one_character() {
        let cmm = metadata(&["foo", "foo1"]);
        let matched = match_item_types(&cmm, "foo*").unwrap();
        assert_eq!(classes(matched), vec!["foo1"]);
    }

    #[test]
    fn test_star_matches_all_word_names_in_order() {
        let cmm = metadata(&["Post", "Page", "foo_bar", "Clip2"]);
        let matched = match_item_types(&cmm, "*").unwrap();
        assert_eq!(classes(matched), vec!["Post", "Page", "foo_bar", "Clip2"]);
    }

    #[test]
    fn test_star_rejects_names_with_non_word_characters() {
        let cmm = metadata(&["Post", "foo-bar", "with space"]);
        let matched = match_item_types(&cmm, "*").unwrap();
        assert_eq!(classes(matched), vec!["Post"]);
    }

    #[test]
    fn test_plain_pattern_is_exact_match() {
        let cmm = metadata(&["Post", "PostExtra", "APost"]);
        let matched = match_item_types(&cmm, "Post").unwrap();
        assert_eq!(classes(matched), vec!["Post"]);

        assert!(match_item_types(&cmm, "post").unwrap().is_empty());
    }

    #[test]
    fn test_alternation_stays_anchored() {
        let cmm = metadata(&["Post", "Page", "Postcard"]);
        let matched = match_item_types(&cmm, "Post|Page").unwrap();
        assert_eq!(classes(matched), vec!["Post", "Page"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let cmm = metadata(&["Post"]);
        let err = match_item_types(&cmm, "Post(").unwrap_err();
        assert!(matches!(err, GenError::InvalidPattern { ref pattern, .. } if pattern == "Post("));
    }
}
