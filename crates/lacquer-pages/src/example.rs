//! Example definitions and state resolution.
//!
//! An example module declares up to three named elements (`preview`,
//! `default`, `code`) and an ordered list of states. Resolution picks the
//! element to render for a requested state, falling back through the
//! candidate keys in order.

use lacquer_dom::Element;
use serde::Deserialize;

use crate::case::kebab_case;

/// A flavor's example module.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExampleDef {
    pub preview: Option<Element>,
    pub default: Option<Element>,
    pub code: Option<Element>,
    pub states: Vec<ExampleState>,
}

/// A named alternate rendering of an example.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExampleState {
    pub id: Option<String>,
    pub label: Option<String>,
    pub element: Option<Element>,
}

/// Candidate keys of an example definition, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleKey {
    Preview,
    Default,
    Code,
}

impl ExampleDef {
    pub fn get(&self, key: ExampleKey) -> Option<&Element> {
        match key {
            ExampleKey::Preview => self.preview.as_ref(),
            ExampleKey::Default => self.default.as_ref(),
            ExampleKey::Code => self.code.as_ref(),
        }
    }

    pub fn has_states(&self) -> bool {
        !self.states.is_empty()
    }
}

/// Options for [`resolve_element`].
#[derive(Debug, Clone)]
pub struct ResolveOptions<'a> {
    /// Candidate keys checked in order; `Preview` wins over `Default`.
    pub keys: &'a [ExampleKey],

    /// When false, state-based resolution is skipped entirely — used for
    /// raw `code` examples that must not be replaced by state variants.
    pub render_state: bool,

    /// The state whose element should be rendered, if any.
    pub state: Option<&'a ExampleState>,
}

impl Default for ResolveOptions<'_> {
    fn default() -> Self {
        Self {
            keys: &[ExampleKey::Preview, ExampleKey::Default],
            render_state: true,
            state: None,
        }
    }
}

/// Select the element to render for an example.
///
/// The first candidate key present yields the default element. When none is
/// present, the first state's element stands in. A requested state's element
/// wins when it exists; otherwise the default element is used.
pub fn resolve_element<'a>(
    example: &'a ExampleDef,
    options: &ResolveOptions<'a>,
) -> Option<&'a Element> {
    let element = options.keys.iter().find_map(|&key| example.get(key));

    if !options.render_state {
        return element;
    }

    let element = element.or_else(|| example.states.first().and_then(|s| s.element.as_ref()))?;

    match options.state {
        None => Some(element),
        Some(state) => Some(state.element.as_ref().unwrap_or(element)),
    }
}

/// Derive a state's output identifier: explicit `id`, else a kebab slug of
/// the label.
pub fn state_id(state: &ExampleState) -> String {
    state
        .id
        .clone()
        .unwrap_or_else(|| kebab_case(state.label.as_deref().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(class: &str) -> Element {
        Element::new("button").prop("class", class)
    }

    #[test]
    fn resolves_default_key() {
        let example = ExampleDef {
            default: Some(element("d")),
            ..Default::default()
        };

        let resolved = resolve_element(&example, &ResolveOptions::default());

        assert_eq!(resolved, Some(&element("d")));
    }

    #[test]
    fn preview_wins_over_default() {
        let example = ExampleDef {
            preview: Some(element("p")),
            default: Some(element("d")),
            ..Default::default()
        };

        let resolved = resolve_element(&example, &ResolveOptions::default());

        assert_eq!(resolved, Some(&element("p")));
    }

    #[test]
    fn falls_back_to_first_state() {
        let example = ExampleDef {
            states: vec![
                ExampleState {
                    id: Some("s1".to_string()),
                    element: Some(element("s1")),
                    ..Default::default()
                },
                ExampleState {
                    label: Some("Foo Bar".to_string()),
                    element: Some(element("s2")),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let resolved = resolve_element(&example, &ResolveOptions::default());

        assert_eq!(resolved, Some(&element("s1")));
    }

    #[test]
    fn state_fallback_is_disabled_for_code_resolution() {
        let example = ExampleDef {
            states: vec![ExampleState {
                element: Some(element("s1")),
                ..Default::default()
            }],
            ..Default::default()
        };
        let options = ResolveOptions {
            keys: &[ExampleKey::Code, ExampleKey::Default],
            render_state: false,
            state: None,
        };

        assert_eq!(resolve_element(&example, &options), None);
    }

    #[test]
    fn requested_state_wins() {
        let state = ExampleState {
            id: Some("focus".to_string()),
            element: Some(element("focused")),
            ..Default::default()
        };
        let example = ExampleDef {
            default: Some(element("d")),
            states: vec![state.clone()],
            ..Default::default()
        };
        let options = ResolveOptions {
            state: Some(&state),
            ..Default::default()
        };

        assert_eq!(resolve_element(&example, &options), Some(&element("focused")));
    }

    #[test]
    fn elementless_state_falls_back_to_default() {
        let state = ExampleState {
            id: Some("empty".to_string()),
            ..Default::default()
        };
        let example = ExampleDef {
            default: Some(element("d")),
            states: vec![state.clone()],
            ..Default::default()
        };
        let options = ResolveOptions {
            state: Some(&state),
            ..Default::default()
        };

        assert_eq!(resolve_element(&example, &options), Some(&element("d")));
    }

    #[test]
    fn empty_example_resolves_to_none() {
        let example = ExampleDef::default();

        assert_eq!(resolve_element(&example, &ResolveOptions::default()), None);
    }

    #[test]
    fn state_id_prefers_explicit_id() {
        let state = ExampleState {
            id: Some("s1".to_string()),
            label: Some("Something Else".to_string()),
            ..Default::default()
        };

        assert_eq!(state_id(&state), "s1");
    }

    #[test]
    fn state_id_slugs_the_label() {
        let state = ExampleState {
            label: Some("Foo Bar".to_string()),
            ..Default::default()
        };

        assert_eq!(state_id(&state), "foo-bar");
    }
}
