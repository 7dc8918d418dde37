//! Static assets emitted alongside generated pages.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

/// The stylesheet linked by the page shell, minified unless disabled.
///
/// A minification failure falls back to the unminified sheet rather than
/// failing the build.
pub fn stylesheet(minify: bool) -> String {
    if !minify {
        return THEME_CSS.to_string();
    }
    match minify_css(THEME_CSS) {
        Ok(minified) => minified,
        Err(e) => {
            tracing::warn!(error = %e, "CSS minification failed, emitting unminified stylesheet");
            THEME_CSS.to_string()
        }
    }
}

/// The runtime script linked by the page shell.
pub fn runtime_js() -> &'static str {
    RUNTIME_JS
}

fn minify_css(css: &str) -> Result<String, String> {
    let sheet = StyleSheet::parse(css, ParserOptions::default()).map_err(|e| e.to_string())?;

    let out = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| e.to_string())?;

    Ok(out.code)
}

const THEME_CSS: &str = r#"/* Lacquer docs theme */

:root {
  --content-max-width: 900px;
  --border: #d8dde6;
  --text: #16325c;
  --muted: #54698d;
  --accent: #0070d2;
  --surface: #f4f6f9;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  color: var(--text);
  line-height: 1.6;
}

.skip-link {
  position: absolute;
  left: -9999px;
}

.skip-link:focus {
  left: 1rem;
  top: 1rem;
}

.site-masthead {
  border-bottom: 1px solid var(--border);
  padding: 1rem 2rem;
}

.site-logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text);
  text-decoration: none;
}

.page-body {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 2rem;
}

.component__title {
  font-size: 2rem;
  margin-bottom: 1.5rem;
}

.flavor {
  margin-bottom: 2.5rem;
}

.flavor__title {
  font-size: 1.25rem;
  margin-bottom: 0.75rem;
  padding-bottom: 0.25rem;
  border-bottom: 1px solid var(--border);
}

.flavor__preview {
  border: 1px solid var(--border);
  border-radius: 0.25rem;
  padding: 2rem;
  margin-bottom: 0.5rem;
}

.flavor__markup {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 0.25rem;
  padding: 1rem;
  overflow-x: auto;
  font-family: ui-monospace, monospace;
  font-size: 0.875rem;
}

.component__docs {
  margin-top: 2rem;
  color: var(--muted);
}

.component__docs a {
  color: var(--accent);
}
"#;

const RUNTIME_JS: &str = r#"// Lacquer docs runtime
(function() {
  'use strict';

  // Highlight the nav entry for the current page
  var current = window.location.pathname;
  document.querySelectorAll('.site-masthead a').forEach(function(link) {
    if (link.getAttribute('href') === current) {
      link.classList.add('active');
    }
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unminified_stylesheet_keeps_theme_rules() {
        let css = stylesheet(false);

        assert!(css.contains(":root"));
        assert!(css.contains(".flavor__markup"));
    }

    #[test]
    fn minified_stylesheet_is_one_line() {
        let css = stylesheet(true);

        assert!(!css.contains('\n'));
        assert!(css.contains(".flavor__markup"));
    }

    #[test]
    fn runtime_highlights_navigation() {
        assert!(runtime_js().contains("querySelectorAll"));
    }
}
