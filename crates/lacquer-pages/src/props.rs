//! Prop filtering: separating page-level configuration from body content.

use serde_json::{Map, Value};

use crate::case::camel_case;

/// Return the props whose keys start with `prefix`, with the prefix stripped
/// and the remainder camel-cased. Non-matching keys are dropped.
///
/// `pageTitle` filtered with `"page"` becomes `title`. The typed signature
/// is the fail-fast for malformed input: a prop map is always a map, a
/// prefix is always a string.
pub fn prefixed_props(props: &Map<String, Value>, prefix: &str) -> Map<String, Value> {
    props
        .iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| (camel_case(&key[prefix.len()..]), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn strips_prefix_and_camel_cases() {
        let input = props(json!({"pageTitle": "x", "body": "y"}));

        let filtered = prefixed_props(&input, "page");

        assert_eq!(filtered, props(json!({"title": "x"})));
    }

    #[test]
    fn multi_word_keys() {
        let input = props(json!({"pageBodyClass": "home", "pageTitle": "Home"}));

        let filtered = prefixed_props(&input, "page");

        assert_eq!(
            filtered,
            props(json!({"bodyClass": "home", "title": "Home"}))
        );
    }

    #[test]
    fn drops_everything_without_the_prefix() {
        let input = props(json!({"class": "x", "id": "y"}));

        let filtered = prefixed_props(&input, "page");

        assert!(filtered.is_empty());
    }
}
