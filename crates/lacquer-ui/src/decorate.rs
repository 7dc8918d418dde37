//! Component decoration: normalization before page rendering.

use crate::manifest::{Component, Flavor};

/// Produce a normalized copy of a component for page rendering.
///
/// Missing component and flavor titles are derived by title-casing the id.
/// The input is never mutated.
pub fn decorate(component: &Component) -> Component {
    Component {
        id: component.id.clone(),
        title: Some(
            component
                .title
                .clone()
                .unwrap_or_else(|| title_case(&component.id)),
        ),
        path: component.path.clone(),
        flavors: component
            .flavors
            .iter()
            .map(|flavor| Flavor {
                id: flavor.id.clone(),
                title: Some(
                    flavor
                        .title
                        .clone()
                        .unwrap_or_else(|| title_case(&flavor.id)),
                ),
                path: flavor.path.clone(),
            })
            .collect(),
    }
}

/// "action-bar" → "Action Bar".
fn title_case(id: &str) -> String {
    id.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fills_missing_titles() {
        let component = Component {
            id: "action-bar".to_string(),
            title: None,
            path: "components/action-bar".to_string(),
            flavors: vec![Flavor {
                id: "base".to_string(),
                title: None,
                path: "components/action-bar/flavors/base".to_string(),
            }],
        };

        let decorated = decorate(&component);

        assert_eq!(decorated.title.as_deref(), Some("Action Bar"));
        assert_eq!(decorated.flavors[0].title.as_deref(), Some("Base"));
        // Input untouched
        assert_eq!(component.title, None);
    }

    #[test]
    fn keeps_explicit_titles() {
        let component = Component {
            id: "buttons".to_string(),
            title: Some("Buttons!".to_string()),
            path: "components/buttons".to_string(),
            flavors: vec![],
        };

        let decorated = decorate(&component);

        assert_eq!(decorated.title.as_deref(), Some("Buttons!"));
    }
}
