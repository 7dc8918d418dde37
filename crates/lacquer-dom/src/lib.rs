//! Declarative element trees and HTML rendering for lacquer.
//!
//! Pages and component examples are authored as data (YAML element trees),
//! validated once at the deserialization boundary, rendered to markup, and
//! manipulated as DOM documents when assembling full pages.

pub mod document;
pub mod element;
pub mod markup;
pub mod pretty;

pub use document::{
    append_children, body, find_by_id, fragment_nodes, parse, serialize_document, serialize_nodes,
    unwrap_wrappers,
};
pub use element::{Element, ElementError, Node, RawHtml};
pub use markup::render_static;
pub use pretty::FormatOptions;

/// Errors from rendering or serializing DOM trees.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("HTML serialization failed: {0}")]
    Serialize(String),

    #[error("serialized output was not valid UTF-8: {0}")]
    Utf8(String),

    #[error("parsed document is missing its <body>")]
    MissingBody,
}
