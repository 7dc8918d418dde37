//! The page generation pipelines.
//!
//! Components and loose page sources are dispatched into bounded concurrent
//! streams. Each component yields its output files in declared order (flavor
//! order, then state order); completion order across components is
//! unspecified. A failing item is reported and skipped; its siblings
//! continue.

use std::fs;
use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use globset::Glob;
use walkdir::WalkDir;

use lacquer_dom::Element;
use lacquer_ui::{decorate, Component, Flavor};

use crate::assets;
use crate::example::{resolve_element, state_id, ExampleDef, ExampleKey, ResolveOptions};
use crate::loader;
use crate::render;
use crate::shell::ShellEngine;

/// In-flight items per pipeline run.
const CONCURRENCY: usize = 8;

/// Configuration for a site generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// UI source root (manifest, example and docs modules).
    pub ui_dir: PathBuf,

    /// Root of loose page sources.
    pub site_dir: PathBuf,

    /// Destination directory.
    pub output_dir: PathBuf,

    /// Site title shown by the page shell.
    pub site_title: String,

    /// Base URL for generated asset links.
    pub base_url: String,

    /// Glob selecting page sources under `site_dir`.
    pub pages: String,

    /// Minify emitted CSS.
    pub minify: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            ui_dir: PathBuf::from("ui"),
            site_dir: PathBuf::from("site"),
            output_dir: PathBuf::from("www"),
            site_title: "Design System".to_string(),
            base_url: "/".to_string(),
            pages: "**/*.page.yaml".to_string(),
            minify: true,
        }
    }
}

/// Errors that can occur while generating pages.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to render page shell: {0}")]
    Shell(#[from] minijinja::Error),

    #[error("failed to render markup: {0}")]
    Render(#[from] lacquer_dom::DomError),

    #[error("page shell has no mount node")]
    MissingMount,

    #[error("failed to load page source {path}: {message}")]
    Source { path: String, message: String },

    #[error("invalid page glob {pattern}: {message}")]
    Pattern { pattern: String, message: String },

    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// A destination-relative file produced by a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
}

impl OutputFile {
    fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

/// Result of one pipeline run. The first error is what a caller should fail
/// the build with; partial output on disk is expected.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub written: usize,
    pub errors: Vec<PageError>,
}

impl GenerateReport {
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: GenerateReport) {
        self.written += other.written;
        self.errors.extend(other.errors);
    }
}

/// A flavor enriched with its loaded example and rendered display markup.
#[derive(Debug, Clone)]
pub struct ResolvedFlavor {
    pub flavor: Flavor,
    pub example: Option<ExampleDef>,
    pub markup: Option<String>,
}

/// The immutable enrichment product consumed by page generation.
#[derive(Debug, Clone)]
pub struct ResolvedComponent {
    pub component: Component,
    pub flavors: Vec<ResolvedFlavor>,
}

/// Generates component pages, example markup files, and loose pages.
pub struct SiteGenerator {
    config: GenerateConfig,
    shell: ShellEngine,
}

impl SiteGenerator {
    pub fn new(config: GenerateConfig) -> Self {
        let shell = ShellEngine::new(config.site_title.clone(), config.base_url.clone());
        Self { config, shell }
    }

    /// Render all pages for the given components concurrently.
    pub async fn generate_component_pages(&self, components: &[Component]) -> GenerateReport {
        let results = stream::iter(components)
            .map(|component| self.process_component(component))
            .buffer_unordered(CONCURRENCY)
            .collect::<Vec<_>>()
            .await;

        let mut report = GenerateReport::default();
        for result in results {
            match result {
                Ok(written) => report.written += written,
                Err(e) => report.errors.push(e),
            }
        }
        report
    }

    async fn process_component(&self, component: &Component) -> Result<usize, PageError> {
        let result = async {
            let outputs = self.component_outputs(component)?;
            let mut written = 0;
            for output in &outputs {
                self.write_output(output).await?;
                written += 1;
            }
            Ok(written)
        }
        .await;

        match &result {
            Ok(written) => {
                tracing::debug!(component = %component.id, files = written, "component pages written");
            }
            Err(e) => {
                tracing::error!(component = %component.id, error = %e, "component page generation failed");
            }
        }
        result
    }

    /// Load a component's example modules and render each flavor's display
    /// markup. Pure with respect to the input component.
    fn resolve_component(&self, component: &Component) -> Result<ResolvedComponent, PageError> {
        let mut flavors = Vec::with_capacity(component.flavors.len());

        for flavor in &component.flavors {
            let example = loader::load_example(
                &self.config.ui_dir.join(&flavor.path).join(loader::EXAMPLE_FILE),
            );

            let mut markup = None;
            if let Some(example) = &example {
                let display = resolve_element(example, &ResolveOptions::default());
                let code = resolve_element(
                    example,
                    &ResolveOptions {
                        keys: &[ExampleKey::Code, ExampleKey::Default],
                        render_state: false,
                        state: None,
                    },
                );
                markup = render::render_example(code.or(display))?;
            }

            flavors.push(ResolvedFlavor {
                flavor: flavor.clone(),
                example,
                markup,
            });
        }

        Ok(ResolvedComponent {
            component: component.clone(),
            flavors,
        })
    }

    /// Produce the ordered output files for one component: markup fragments
    /// per state (or a single default), then the index page.
    pub fn component_outputs(&self, component: &Component) -> Result<Vec<OutputFile>, PageError> {
        let resolved = self.resolve_component(component)?;
        let mut outputs = Vec::new();

        for flavor in &resolved.flavors {
            let Some(example) = &flavor.example else {
                continue;
            };

            if example.has_states() {
                for state in &example.states {
                    let options = ResolveOptions {
                        state: Some(state),
                        ..Default::default()
                    };
                    if let Some(markup) = render::render_example(resolve_element(example, &options))? {
                        let id = state_id(state);
                        outputs.push(OutputFile::new(
                            Path::new(&flavor.flavor.path).join(format!("_{id}.html")),
                            markup,
                        ));
                    }
                }
            } else if let Some(markup) =
                render::render_example(resolve_element(example, &ResolveOptions::default()))?
            {
                outputs.push(OutputFile::new(
                    Path::new(&flavor.flavor.path).join("_default.html"),
                    markup,
                ));
            }
        }

        let docs = loader::load_docs(
            &self.config.ui_dir.join(&resolved.component.path).join(loader::DOCS_FILE),
        );
        let body = self.component_body(&resolved, docs);
        let html = render::render_page(&body, &self.shell)?;
        outputs.push(OutputFile::new(
            Path::new(&resolved.component.path).join("index.html"),
            html,
        ));

        Ok(outputs)
    }

    /// Build the page body element for a component's index page.
    fn component_body(&self, resolved: &ResolvedComponent, docs: Option<String>) -> Element {
        let decorated = decorate(&resolved.component);
        let title = decorated.title.clone().unwrap_or_else(|| decorated.id.clone());

        let mut article = Element::new("article")
            .prop("class", "component")
            .prop("data-component", decorated.id.as_str())
            .child(
                Element::new("h1")
                    .prop("class", "component__title")
                    .text(title.as_str()),
            );

        for (flavor, resolved_flavor) in decorated.flavors.iter().zip(&resolved.flavors) {
            let Some(markup) = &resolved_flavor.markup else {
                continue;
            };
            let flavor_title = flavor.title.clone().unwrap_or_else(|| flavor.id.clone());

            let mut section = Element::new("section")
                .prop("class", "flavor")
                .prop("data-flavor", flavor.id.as_str())
                .child(
                    Element::new("h2")
                        .prop("class", "flavor__title")
                        .text(flavor_title),
                );

            if let Some(example) = &resolved_flavor.example {
                if let Some(display) = resolve_element(example, &ResolveOptions::default()) {
                    section = section.child(
                        Element::new("div")
                            .prop("class", "flavor__preview")
                            .child(display.clone()),
                    );
                }
            }

            section = section.child(
                Element::new("pre")
                    .prop("class", "flavor__markup")
                    .child(Element::new("code").text(markup.as_str())),
            );

            article = article.child(section);
        }

        if let Some(docs) = docs {
            article = article.child(
                Element::new("div")
                    .prop("class", "component__docs")
                    .raw(docs),
            );
        }

        Element::new("div")
            .prop("class", "page-body")
            .prop("pageTitle", title)
            .child(article)
    }

    /// Render all loose page sources concurrently.
    pub async fn generate_pages(&self) -> GenerateReport {
        let mut report = GenerateReport::default();

        let sources = match self.discover_page_sources() {
            Ok(sources) => sources,
            Err(e) => {
                tracing::error!(error = %e, "page source discovery failed");
                report.errors.push(e);
                return report;
            }
        };

        let results = stream::iter(&sources)
            .map(|relative| self.process_page(relative))
            .buffer_unordered(CONCURRENCY)
            .collect::<Vec<_>>()
            .await;

        for result in results {
            match result {
                Ok(()) => report.written += 1,
                Err(e) => report.errors.push(e),
            }
        }
        report
    }

    async fn process_page(&self, relative: &Path) -> Result<(), PageError> {
        let result = async {
            let output = self.page_output(relative)?;
            self.write_output(&output).await
        }
        .await;

        if let Err(e) = &result {
            tracing::error!(page = %relative.display(), error = %e, "page generation failed");
        }
        result
    }

    /// Page sources under the site root matching the configured glob,
    /// excluding underscore-prefixed path segments.
    fn discover_page_sources(&self) -> Result<Vec<PathBuf>, PageError> {
        let matcher = Glob::new(&self.config.pages)
            .map_err(|e| PageError::Pattern {
                pattern: self.config.pages.clone(),
                message: e.to_string(),
            })?
            .compile_matcher();

        let mut sources = Vec::new();
        if !self.config.site_dir.exists() {
            tracing::debug!(dir = %self.config.site_dir.display(), "site directory not present");
            return Ok(sources);
        }

        for entry in WalkDir::new(&self.config.site_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(&self.config.site_dir).unwrap_or(path);
            if !matcher.is_match(relative) || has_underscore_segment(relative) {
                continue;
            }

            sources.push(relative.to_path_buf());
        }

        sources.sort();
        Ok(sources)
    }

    /// Load a page source fresh and render it as a full document.
    fn page_output(&self, relative: &Path) -> Result<OutputFile, PageError> {
        let source_path = self.config.site_dir.join(relative);
        let source = fs::read_to_string(&source_path).map_err(|e| PageError::Source {
            path: source_path.display().to_string(),
            message: e.to_string(),
        })?;

        let body: Element = serde_yaml::from_str(&source).map_err(|e| PageError::Source {
            path: source_path.display().to_string(),
            message: e.to_string(),
        })?;

        let html = render::render_page(&body, &self.shell)?;
        Ok(OutputFile::new(page_document_path(relative), html))
    }

    async fn write_output(&self, output: &OutputFile) -> Result<(), PageError> {
        let dest = self.config.output_dir.join(&output.path);
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| write_error(parent, e))?;
        }
        tokio::fs::write(&dest, &output.contents)
            .await
            .map_err(|e| write_error(&dest, e))
    }

    /// Emit the stylesheet and runtime script referenced by the page shell.
    pub fn emit_assets(&self) -> Result<(), PageError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| write_error(&assets_dir, e))?;

        fs::write(
            assets_dir.join("main.css"),
            assets::stylesheet(self.config.minify),
        )
        .map_err(|e| write_error(&assets_dir.join("main.css"), e))?;

        fs::write(assets_dir.join("main.js"), assets::runtime_js())
            .map_err(|e| write_error(&assets_dir.join("main.js"), e))?;

        Ok(())
    }
}

fn write_error(path: &Path, e: std::io::Error) -> PageError {
    PageError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

/// True if any path segment starts with an underscore.
fn has_underscore_segment(relative: &Path) -> bool {
    relative.components().any(|part| {
        part.as_os_str()
            .to_str()
            .map(|s| s.starts_with('_'))
            .unwrap_or(false)
    })
}

/// Rewrite a page source path to its page-document path.
fn page_document_path(relative: &Path) -> PathBuf {
    let name = relative
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("index");
    let stem = name
        .strip_suffix(".page.yaml")
        .or_else(|| name.strip_suffix(".page.yml"))
        .or_else(|| name.strip_suffix(".yaml"))
        .or_else(|| name.strip_suffix(".yml"))
        .unwrap_or(name);
    relative.with_file_name(format!("{stem}.html"))
}
