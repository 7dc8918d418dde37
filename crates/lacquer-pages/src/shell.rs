//! The page shell: outer HTML chrome into which page bodies are injected.
//!
//! The embedded template deliberately has no doctype — the page renderer
//! inserts one in front of the root element — and its `#app` mount node
//! already contains the site masthead, which appended body content must not
//! displace.

use minijinja::{context, Environment};
use serde_json::{Map, Value};

/// Template engine for the page shell.
pub struct ShellEngine {
    env: Environment<'static>,
    site_title: String,
    base_url: String,
}

impl ShellEngine {
    pub fn new(site_title: impl Into<String>, base_url: impl Into<String>) -> Self {
        let mut env = Environment::new();

        env.add_template_owned("shell.html".to_string(), SHELL_TEMPLATE.to_string())
            .expect("Failed to add shell template");

        Self {
            env,
            site_title: site_title.into(),
            base_url: base_url.into(),
        }
    }

    /// Render the shell with page-level configuration (the filtered `page*`
    /// props of a body element).
    pub fn render(&self, page_props: &Map<String, Value>) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("shell.html")?;

        tmpl.render(context! {
            site_title => &self.site_title,
            base_url => &self.base_url,
            title => page_props.get("title"),
            description => page_props.get("description"),
            body_class => page_props.get("bodyClass"),
        })
    }
}

const SHELL_TEMPLATE: &str = r##"<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% if title %}{{ title }} - {% endif %}{{ site_title }}</title>
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body{% if body_class %} class="{{ body_class }}"{% endif %}>
  <a class="skip-link" href="#app">Skip to content</a>
  <div id="app">
    <header class="site-masthead">
      <a class="site-logo" href="{{ base_url }}">{{ site_title }}</a>
    </header>
  </div>
  <script src="{{ base_url }}assets/main.js"></script>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn renders_page_title() {
        let shell = ShellEngine::new("My Docs", "/");

        let html = shell.render(&props(json!({"title": "Buttons"}))).unwrap();

        assert!(html.contains("<title>Buttons - My Docs</title>"));
    }

    #[test]
    fn falls_back_to_site_title() {
        let shell = ShellEngine::new("My Docs", "/");

        let html = shell.render(&Map::new()).unwrap();

        assert!(html.contains("<title>My Docs</title>"));
    }

    #[test]
    fn mount_node_carries_chrome() {
        let shell = ShellEngine::new("My Docs", "/");

        let html = shell.render(&Map::new()).unwrap();

        assert!(html.contains("id=\"app\""));
        assert!(html.contains("site-masthead"));
        assert!(!html.contains("<!DOCTYPE"));
    }

    #[test]
    fn applies_body_class() {
        let shell = ShellEngine::new("Docs", "/");

        let html = shell
            .render(&props(json!({"bodyClass": "home"})))
            .unwrap();

        assert!(html.contains("<body class=\"home\">"));
    }
}
