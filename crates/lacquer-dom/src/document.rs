//! Parsing and manipulation of HTML documents.
//!
//! Rendered markup comes back through here when a page shell needs its mount
//! node filled or an example needs its demo wrapper stripped. Fragments are
//! parsed by wrapping them in a full document, so the top-level nodes of a
//! fragment are the `<body>` children of the parse.

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::DomError;

/// Parse a complete HTML document.
pub fn parse(html: &str) -> RcDom {
    html5ever::parse_document(RcDom::default(), ParseOpts::default()).one(html)
}

/// Parse an HTML fragment and return its top-level nodes.
pub fn fragment_nodes(html: &str) -> Result<Vec<Handle>, DomError> {
    let dom = parse(html);
    let body = body(&dom).ok_or(DomError::MissingBody)?;
    let nodes = body.children.borrow().clone();
    Ok(nodes)
}

/// Find the `<body>` element of a parsed document.
pub fn body(dom: &RcDom) -> Option<Handle> {
    let html = dom
        .document
        .children
        .borrow()
        .iter()
        .find(|child| is_element(child, "html"))
        .cloned()?;
    let body = html
        .children
        .borrow()
        .iter()
        .find(|child| is_element(child, "body"))
        .cloned();
    body
}

fn is_element(handle: &Handle, tag: &str) -> bool {
    match &handle.data {
        NodeData::Element { name, .. } => &*name.local == tag,
        _ => false,
    }
}

/// Read an attribute off an element node.
pub fn element_attr(handle: &Handle, attr_name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Return true if an element node carries `class_name` in its class list.
pub fn has_class(handle: &Handle, class_name: &str) -> bool {
    element_attr(handle, "class")
        .map(|classes| classes.split_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// Depth-first search for the element with the given `id` attribute.
pub fn find_by_id(handle: &Handle, id: &str) -> Option<Handle> {
    if let NodeData::Element { .. } = &handle.data {
        if element_attr(handle, "id").as_deref() == Some(id) {
            return Some(handle.clone());
        }
    }
    for child in handle.children.borrow().iter() {
        if let Some(found) = find_by_id(child, id) {
            return Some(found);
        }
    }
    None
}

/// Append nodes to a parent, after any existing children.
pub fn append_children(parent: &Handle, nodes: Vec<Handle>) {
    parent.children.borrow_mut().extend(nodes);
}

/// Replace each immediate child of `parent` carrying `class_name` with that
/// child's own children. The wrapper is removed; its content survives.
pub fn unwrap_wrappers(parent: &Handle, class_name: &str) {
    let children = parent.children.borrow().clone();
    let mut replaced = Vec::with_capacity(children.len());
    for child in children {
        if has_class(&child, class_name) {
            replaced.extend(child.children.borrow().iter().cloned());
        } else {
            replaced.push(child);
        }
    }
    *parent.children.borrow_mut() = replaced;
}

/// Serialize a full document (everything under the document node).
pub fn serialize_document(dom: &RcDom) -> Result<String, DomError> {
    let mut output = Vec::new();
    let serializable = SerializableHandle::from(dom.document.clone());
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut output, &serializable, opts).map_err(|e| DomError::Serialize(e.to_string()))?;
    String::from_utf8(output).map_err(|e| DomError::Utf8(e.to_string()))
}

/// Serialize a list of nodes, each including its own tag.
pub fn serialize_nodes(nodes: &[Handle]) -> Result<String, DomError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    for node in nodes {
        let serializable = SerializableHandle::from(node.clone());
        serialize(&mut output, &serializable, opts.clone())
            .map_err(|e| DomError::Serialize(e.to_string()))?;
    }
    String::from_utf8(output).map_err(|e| DomError::Utf8(e.to_string()))
}
