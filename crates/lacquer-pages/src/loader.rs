//! Safe loading of auxiliary definition modules.
//!
//! Example and docs modules are data files looked up per flavor or per
//! component. Not every flavor has them, and a broken one must not abort the
//! build, so every failure path here collapses to `None`. Files are re-read
//! from disk on every call — there is no cache to go stale across watch-mode
//! rebuilds.

use std::fs;
use std::path::Path;

use pulldown_cmark::{html, Options, Parser};

use crate::example::ExampleDef;

/// Example module filename, relative to a flavor's path.
pub const EXAMPLE_FILE: &str = "index.example.yaml";

/// Docs module filename, relative to a component's path.
pub const DOCS_FILE: &str = "index.docs.md";

/// Load a flavor's example module. `None` if the file is missing, unreadable,
/// or fails to parse as an example definition.
pub fn load_example(path: &Path) -> Option<ExampleDef> {
    let source = read_fresh(path)?;
    match serde_yaml::from_str(&source) {
        Ok(example) => Some(example),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping unparseable example module");
            None
        }
    }
}

/// Load a component's docs module and render it to HTML. `None` if the file
/// is missing or unreadable.
pub fn load_docs(path: &Path) -> Option<String> {
    let source = read_fresh(path)?;
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(&source, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    Some(html_output)
}

fn read_fresh(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "module not loadable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_module_is_none() {
        let temp = tempdir().unwrap();

        assert!(load_example(&temp.path().join(EXAMPLE_FILE)).is_none());
        assert!(load_docs(&temp.path().join(DOCS_FILE)).is_none());
    }

    #[test]
    fn malformed_example_is_none() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(EXAMPLE_FILE);
        fs::write(&path, "default: [this is not an element").unwrap();

        assert!(load_example(&path).is_none());
    }

    #[test]
    fn example_with_invalid_element_is_none() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(EXAMPLE_FILE);
        fs::write(&path, "default:\n  tag: \"1bad\"\n").unwrap();

        assert!(load_example(&path).is_none());
    }

    #[test]
    fn loads_valid_example() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(EXAMPLE_FILE);
        fs::write(
            &path,
            "default:\n  tag: button\n  children:\n    - Save\n",
        )
        .unwrap();

        let example = load_example(&path).unwrap();

        assert!(example.default.is_some());
        assert!(example.states.is_empty());
    }

    #[test]
    fn sees_edits_on_reload() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(EXAMPLE_FILE);
        fs::write(&path, "default:\n  tag: button\n").unwrap();
        let first = load_example(&path).unwrap();

        fs::write(&path, "default:\n  tag: a\n").unwrap();
        let second = load_example(&path).unwrap();

        assert_eq!(first.default.unwrap().tag, "button");
        assert_eq!(second.default.unwrap().tag, "a");
    }

    #[test]
    fn renders_docs_markdown() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DOCS_FILE);
        fs::write(&path, "## Usage\n\nPress the *button*.\n").unwrap();

        let docs = load_docs(&path).unwrap();

        assert!(docs.contains("<h2>Usage</h2>"));
        assert!(docs.contains("<em>button</em>"));
    }
}
