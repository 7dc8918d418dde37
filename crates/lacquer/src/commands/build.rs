//! Site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use lacquer_pages::{GenerateConfig, GenerateReport, SiteGenerator};
use lacquer_ui::{find_group, generate_ui};

/// Group ids consumed from the UI manifest, in build order.
const ENTRY_GROUPS: &[&str] = &["components", "utilities"];

/// Configuration file structure (lacquer.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    build: BuildSettings,
}

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default = "default_ui_dir")]
    ui: String,
    #[serde(default = "default_site_dir")]
    dir: String,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Glob selecting page sources under the site dir
    #[serde(default = "default_pages")]
    pages: String,
}

#[derive(Debug, Deserialize)]
struct BuildSettings {
    #[serde(default = "default_minify")]
    minify: bool,
}

fn default_ui_dir() -> String {
    "ui".to_string()
}
fn default_site_dir() -> String {
    "site".to_string()
}
fn default_output() -> String {
    "www".to_string()
}
fn default_title() -> String {
    "Design System".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_pages() -> String {
    "**/*.page.yaml".to_string()
}
fn default_minify() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ui: default_ui_dir(),
            dir: default_site_dir(),
            output: default_output(),
            title: default_title(),
            base_url: default_base_url(),
            pages: default_pages(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

/// Load configuration from the config file if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Merge the config file with CLI overrides.
pub fn to_generate_config(
    file_config: ConfigFile,
    output: Option<PathBuf>,
    minify: Option<bool>,
) -> GenerateConfig {
    GenerateConfig {
        ui_dir: PathBuf::from(&file_config.site.ui),
        site_dir: PathBuf::from(&file_config.site.dir),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        site_title: file_config.site.title,
        base_url: file_config.site.base_url,
        pages: file_config.site.pages,
        minify: minify.unwrap_or(file_config.build.minify),
    }
}

/// Run the build command.
pub async fn run(config_path: PathBuf, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    let file_config = load_config(&config_path)?;
    let config = to_generate_config(file_config, output, minify);
    build_site(&config).await
}

/// Build the whole site: component pages, loose pages, assets.
pub async fn build_site(config: &GenerateConfig) -> Result<()> {
    tracing::info!("Building documentation site...");

    let generator = SiteGenerator::new(config.clone());
    let groups = generate_ui(&config.ui_dir)?;

    let mut report = GenerateReport::default();
    for group_id in ENTRY_GROUPS {
        if let Some(group) = find_group(&groups, group_id) {
            report.merge(generator.generate_component_pages(&group.components).await);
        }
    }
    report.merge(generator.generate_pages().await);

    generator.emit_assets()?;

    tracing::info!(
        "Wrote {} files to {}",
        report.written,
        config.output_dir.display()
    );

    if !report.ok() {
        anyhow::bail!(
            "{} page(s) failed; first error: {}",
            report.errors.len(),
            report.errors[0]
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = to_generate_config(ConfigFile::default(), None, None);

        assert_eq!(config.ui_dir, PathBuf::from("ui"));
        assert_eq!(config.output_dir, PathBuf::from("www"));
        assert_eq!(config.pages, "**/*.page.yaml");
        assert!(config.minify);
    }

    #[test]
    fn cli_overrides_win() {
        let file_config: ConfigFile = toml::from_str(
            r#"
[site]
output = "dist"

[build]
minify = true
"#,
        )
        .unwrap();

        let config = to_generate_config(file_config, Some(PathBuf::from("public")), Some(false));

        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert!(!config.minify);
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let file_config: ConfigFile = toml::from_str("[site]\ntitle = \"My DS\"\n").unwrap();

        let config = to_generate_config(file_config, None, None);

        assert_eq!(config.site_title, "My DS");
        assert_eq!(config.site_dir, PathBuf::from("site"));
        assert!(config.minify);
    }
}
