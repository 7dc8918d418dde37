//! The declarative element model.
//!
//! An element tree is plain data: a tag, a prop map, and child nodes. Trees
//! arrive from YAML example and page modules; validation happens here, once,
//! when they are deserialized. Anything that parses is renderable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tags that never take children.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Return true if `tag` is an HTML void element.
pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.iter().any(|v| tag.eq_ignore_ascii_case(v))
}

/// A node in an element tree.
///
/// Bare strings are text, `{ raw: "<b>…</b>" }` records are verbatim HTML
/// fragments (used for pre-rendered docs), and maps with a `tag` key are
/// elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Raw(RawHtml),
    Element(Element),
}

/// A verbatim HTML fragment embedded in an element tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHtml {
    pub raw: String,
}

/// A renderable element: tag, props, children.
///
/// Invalid trees (bad tag names, void elements with children) are rejected
/// during deserialization, so holding an `Element` means holding something
/// renderable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawElement")]
pub struct Element {
    pub tag: String,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Unvalidated mirror of [`Element`] used as the serde entry point.
#[derive(Debug, Deserialize)]
struct RawElement {
    tag: String,

    #[serde(default)]
    props: Map<String, Value>,

    #[serde(default)]
    children: Vec<Node>,
}

/// Errors rejected at the element deserialization boundary.
#[derive(Debug, thiserror::Error)]
pub enum ElementError {
    #[error("invalid tag name: {0:?}")]
    InvalidTag(String),

    #[error("void element <{0}> cannot have children")]
    VoidWithChildren(String),
}

impl TryFrom<RawElement> for Element {
    type Error = ElementError;

    fn try_from(raw: RawElement) -> Result<Self, Self::Error> {
        if !valid_tag(&raw.tag) {
            return Err(ElementError::InvalidTag(raw.tag));
        }
        if is_void(&raw.tag) && !raw.children.is_empty() {
            return Err(ElementError::VoidWithChildren(raw.tag));
        }
        Ok(Self {
            tag: raw.tag,
            props: raw.props,
            children: raw.children,
        })
    }
}

/// Tag names are ascii: a letter followed by letters, digits, or dashes.
fn valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl Element {
    /// Create an element with a known-good tag.
    ///
    /// Intended for trees built in code; data from disk goes through serde
    /// instead. Invalid tags here are programmer error.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        assert!(valid_tag(&tag), "invalid tag name: {tag:?}");
        Self {
            tag,
            props: Map::new(),
            children: Vec::new(),
        }
    }

    /// Set a prop, builder style.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Append a child node, builder style.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        assert!(
            !is_void(&self.tag),
            "void element <{}> cannot have children",
            self.tag
        );
        self.children.push(node.into());
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append a verbatim HTML child.
    pub fn raw(self, html: impl Into<String>) -> Self {
        self.child(Node::Raw(RawHtml { raw: html.into() }))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}
