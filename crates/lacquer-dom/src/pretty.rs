//! HTML pretty-printer for example markup.
//!
//! Formats parsed nodes with a fixed indent step. Tags listed in
//! [`FormatOptions::inline_tags`] (and text) flow on their parent's line
//! instead of getting lines of their own.

use markup5ever_rcdom::{Handle, NodeData};

use crate::element::is_void;

/// Formatting policy.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Spaces per indent level.
    pub indent: usize,

    /// Tags that do not force their own line breaks.
    pub inline_tags: Vec<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            inline_tags: vec!["a".to_string()],
        }
    }
}

/// Pretty-print a list of nodes.
pub fn format_nodes(nodes: &[Handle], options: &FormatOptions) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        fmt_node(node, 0, options, &mut lines);
    }
    lines.join("\n")
}

fn fmt_node(node: &Handle, depth: usize, options: &FormatOptions, lines: &mut Vec<String>) {
    let pad = " ".repeat(depth * options.indent);
    match &node.data {
        NodeData::Text { contents } => {
            let text = contents.borrow();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(format!("{pad}{}", escape_text(trimmed)));
            }
        }
        NodeData::Comment { contents } => {
            lines.push(format!("{pad}<!--{contents}-->"));
        }
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.to_string();
            let open = format!("<{tag}{}>", render_attrs(&attrs.borrow()));

            if is_void(&tag) {
                lines.push(format!("{pad}{open}"));
                return;
            }

            let children: Vec<Handle> = node
                .children
                .borrow()
                .iter()
                .filter(|child| !is_blank_text(child))
                .cloned()
                .collect();

            if children.is_empty() {
                lines.push(format!("{pad}{open}</{tag}>"));
            } else if children.iter().all(|child| is_inline(child, options)) {
                let content: String = children.iter().map(inline_html).collect();
                lines.push(format!("{pad}{open}{}</{tag}>", content.trim()));
            } else {
                lines.push(format!("{pad}{open}"));
                let mut run = String::new();
                for child in &children {
                    if is_inline(child, options) {
                        run.push_str(&inline_html(child));
                    } else {
                        flush_run(&mut run, depth + 1, options, lines);
                        fmt_node(child, depth + 1, options, lines);
                    }
                }
                flush_run(&mut run, depth + 1, options, lines);
                lines.push(format!("{pad}</{tag}>"));
            }
        }
        // Documents and doctypes never appear in example fragments
        _ => {}
    }
}

fn flush_run(run: &mut String, depth: usize, options: &FormatOptions, lines: &mut Vec<String>) {
    let trimmed = run.trim();
    if !trimmed.is_empty() {
        let pad = " ".repeat(depth * options.indent);
        lines.push(format!("{pad}{trimmed}"));
    }
    run.clear();
}

fn is_blank_text(node: &Handle) -> bool {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().trim().is_empty(),
        _ => false,
    }
}

fn is_inline(node: &Handle, options: &FormatOptions) -> bool {
    match &node.data {
        NodeData::Text { .. } => true,
        NodeData::Element { name, .. } => options
            .inline_tags
            .iter()
            .any(|tag| tag.as_str() == &*name.local),
        _ => false,
    }
}

/// Compact single-line rendering, used for inline runs.
fn inline_html(node: &Handle) -> String {
    match &node.data {
        NodeData::Text { contents } => escape_text(&contents.borrow()),
        NodeData::Comment { contents } => format!("<!--{contents}-->"),
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.to_string();
            let open = format!("<{tag}{}>", render_attrs(&attrs.borrow()));
            if is_void(&tag) {
                open
            } else {
                let content: String = node.children.borrow().iter().map(inline_html).collect();
                format!("{open}{content}</{tag}>")
            }
        }
        _ => String::new(),
    }
}

fn render_attrs(attrs: &[html5ever::Attribute]) -> String {
    attrs
        .iter()
        .map(|attr| format!(" {}=\"{}\"", attr.name.local, escape_attr(&attr.value)))
        .collect()
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::fragment_nodes;
    use pretty_assertions::assert_eq;

    fn format(html: &str) -> String {
        format_nodes(&fragment_nodes(html).unwrap(), &FormatOptions::default())
    }

    #[test]
    fn indents_nested_blocks() {
        let formatted = format("<div class=\"wrap\"><button class=\"x\">Go</button></div>");

        assert_eq!(
            formatted,
            "<div class=\"wrap\">\n  <button class=\"x\">Go</button>\n</div>"
        );
    }

    #[test]
    fn keeps_anchors_inline() {
        let formatted = format("<p>Click <a href=\"#\">here</a> now</p>");

        assert_eq!(formatted, "<p>Click <a href=\"#\">here</a> now</p>");
    }

    #[test]
    fn breaks_non_inline_tags() {
        let options = FormatOptions {
            inline_tags: Vec::new(),
            ..Default::default()
        };
        let nodes = fragment_nodes("<p>Click <a href=\"#\">here</a></p>").unwrap();

        let formatted = format_nodes(&nodes, &options);

        assert_eq!(
            formatted,
            "<p>\n  Click\n  <a href=\"#\">here</a>\n</p>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let formatted = format("<div><img src=\"x.png\" alt=\"\"><span>tail</span></div>");

        assert_eq!(
            formatted,
            "<div>\n  <img src=\"x.png\" alt=\"\">\n  <span>tail</span>\n</div>"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let formatted = format("<span title=\"a&quot;b\">1 &lt; 2</span>");

        assert_eq!(formatted, "<span title=\"a&quot;b\">1 &lt; 2</span>");
    }
}
