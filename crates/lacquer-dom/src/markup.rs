//! Element tree → static HTML markup.
//!
//! Builds an rcdom subtree from an [`Element`] and serializes it. Escaping is
//! handled by the html5ever serializer; prop values map onto attributes
//! (`true` becomes a bare attribute, `false`/`null` are omitted).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use html5ever::{ns, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node as DomNode, NodeData};
use serde_json::Value;

use crate::document;
use crate::element::{Element, Node};
use crate::DomError;

/// Render an element tree to an HTML string.
pub fn render_static(element: &Element) -> Result<String, DomError> {
    let handle = build_element(element)?;
    document::serialize_nodes(&[handle])
}

fn build_element(element: &Element) -> Result<Handle, DomError> {
    let attrs = element
        .props
        .iter()
        .filter_map(|(key, value)| {
            attr_value(value).map(|v| Attribute {
                name: QualName::new(None, ns!(), LocalName::from(key.as_str())),
                value: v.into(),
            })
        })
        .collect();

    let handle: Handle = Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: QualName::new(None, ns!(html), LocalName::from(element.tag.as_str())),
            attrs: RefCell::new(attrs),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    });

    for child in &element.children {
        match child {
            Node::Text(text) => {
                handle.children.borrow_mut().push(create_text(text));
            }
            Node::Element(nested) => {
                let nested = build_element(nested)?;
                handle.children.borrow_mut().push(nested);
            }
            Node::Raw(raw) => {
                let nodes = document::fragment_nodes(&raw.raw)?;
                handle.children.borrow_mut().extend(nodes);
            }
        }
    }

    Ok(handle)
}

fn create_text(text: &str) -> Handle {
    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Map a prop value onto an attribute value, or drop the attribute.
fn attr_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some(String::new()),
        Value::Bool(false) | Value::Null => None,
        // Arrays and objects have no attribute rendering
        Value::Array(_) | Value::Object(_) => None,
    }
}
