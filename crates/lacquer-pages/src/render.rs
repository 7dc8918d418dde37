//! Page and example markup rendering.

use lacquer_dom::{document, render_static, Element, FormatOptions};

use crate::pipeline::PageError;
use crate::props::prefixed_props;
use crate::shell::ShellEngine;

/// Prop prefix that marks page-level configuration on a body element.
pub const PAGE_PROP_PREFIX: &str = "page";

/// Class marking a wrapper that exists only to scope demo styling.
pub const DEMO_ONLY_CLASS: &str = "demo-only";

/// Id of the shell's mount node.
pub const MOUNT_ID: &str = "app";

const DOCTYPE: &str = "<!DOCTYPE html>";

/// Render a body element inside the page shell as a full HTML document.
///
/// The body's `page*` props configure the shell and are stripped from the
/// rendered body. Body markup is appended into the `#app` mount node, after
/// whatever chrome the shell already put there.
pub fn render_page(body: &Element, shell: &ShellEngine) -> Result<String, PageError> {
    let page_props = prefixed_props(&body.props, PAGE_PROP_PREFIX);
    let shell_html = shell.render(&page_props)?;

    let mut stripped = body.clone();
    stripped.props.retain(|key, _| !key.starts_with(PAGE_PROP_PREFIX));
    let body_html = render_static(&stripped)?;

    let dom = document::parse(&shell_html);
    let mount = document::find_by_id(&dom.document, MOUNT_ID).ok_or(PageError::MissingMount)?;
    document::append_children(&mount, document::fragment_nodes(&body_html)?);

    let html = document::serialize_document(&dom)?;
    Ok(format!("{DOCTYPE}{html}"))
}

/// Render an isolated example element as formatted display markup.
///
/// Returns `Ok(None)` when there is no element. A `demo-only` wrapper at the
/// root is replaced by its children before pretty-printing.
pub fn render_example(element: Option<&Element>) -> Result<Option<String>, PageError> {
    let Some(element) = element else {
        return Ok(None);
    };

    let html = render_static(element)?;
    let dom = document::parse(&html);
    let body = document::body(&dom).ok_or(lacquer_dom::DomError::MissingBody)?;
    document::unwrap_wrappers(&body, DEMO_ONLY_CLASS);

    let children = body.children.borrow();
    Ok(Some(lacquer_dom::pretty::format_nodes(
        children.as_slice(),
        &FormatOptions::default(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shell() -> ShellEngine {
        ShellEngine::new("Design System", "/")
    }

    #[test]
    fn page_starts_with_doctype_before_root() {
        let body = Element::new("div").prop("class", "page-body").text("hello");

        let html = render_page(&body, &shell()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html><html"));
    }

    #[test]
    fn page_props_configure_shell_and_are_stripped() {
        let body = Element::new("div")
            .prop("pageTitle", "About")
            .prop("class", "page-body")
            .child(Element::new("h1").text("About us"));

        let html = render_page(&body, &shell()).unwrap();

        assert!(html.contains("<title>About - Design System</title>"));
        assert!(!html.contains("pageTitle"));
        assert!(html.contains("<h1>About us</h1>"));
    }

    #[test]
    fn shell_chrome_survives_body_append() {
        let body = Element::new("main").text("content");

        let html = render_page(&body, &shell()).unwrap();

        let masthead = html.find("site-masthead").unwrap();
        let content = html.find("<main>content</main>").unwrap();
        assert!(masthead < content, "chrome must precede appended body");
    }

    #[test]
    fn no_element_renders_to_none() {
        assert_eq!(render_example(None).unwrap(), None);
    }

    #[test]
    fn example_markup_is_pretty_printed() {
        let element = Element::new("div")
            .prop("class", "card")
            .child(Element::new("button").prop("class", "button").text("Go"));

        let markup = render_example(Some(&element)).unwrap().unwrap();

        assert_eq!(
            markup,
            "<div class=\"card\">\n  <button class=\"button\">Go</button>\n</div>"
        );
    }

    #[test]
    fn demo_only_wrapper_is_unwrapped() {
        let element = Element::new("div")
            .prop("class", "demo-only")
            .child(Element::new("button").prop("class", "button").text("Go"));

        let markup = render_example(Some(&element)).unwrap().unwrap();

        assert_eq!(markup, "<button class=\"button\">Go</button>");
    }

    #[test]
    fn unmarked_wrapper_is_kept() {
        let element = Element::new("div")
            .prop("class", "demo-grid")
            .child(Element::new("span").text("x"));

        let markup = render_example(Some(&element)).unwrap().unwrap();

        assert!(markup.starts_with("<div class=\"demo-grid\">"));
    }
}
