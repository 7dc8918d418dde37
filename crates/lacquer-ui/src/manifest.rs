//! The `ui.yaml` manifest: groups, components, flavors.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Name of the manifest file at the UI source root.
pub const MANIFEST_FILE: &str = "ui.yaml";

/// A top-level grouping of components ("components", "utilities", ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiGroup {
    pub id: String,

    #[serde(default)]
    pub components: Vec<Component>,
}

/// A documented component and its ordered flavors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Component {
    pub id: String,

    /// Display title; derived from the id when absent.
    #[serde(default)]
    pub title: Option<String>,

    /// Path relative to the UI root; the index page lands here.
    pub path: String,

    #[serde(default)]
    pub flavors: Vec<Flavor>,
}

/// A named variant of a component. The path locates its example module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Flavor {
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    pub path: String,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    groups: Vec<UiGroup>,
}

/// Errors from loading the UI manifest.
///
/// Unlike example and docs modules, a broken manifest fails the build.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("UI manifest not found: {0}")]
    NotFound(String),

    #[error("failed to read UI manifest {path}: {message}")]
    Read { path: String, message: String },

    #[error("invalid UI manifest {path}: {message}")]
    Parse { path: String, message: String },
}

/// Load the ordered component groups from `<ui_root>/ui.yaml`.
pub fn generate_ui(ui_root: &Path) -> Result<Vec<UiGroup>, UiError> {
    let path = ui_root.join(MANIFEST_FILE);
    if !path.exists() {
        return Err(UiError::NotFound(path.display().to_string()));
    }

    let source = fs::read_to_string(&path).map_err(|e| UiError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let manifest: Manifest = serde_yaml::from_str(&source).map_err(|e| UiError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(manifest.groups)
}

/// Find a group by id.
pub fn find_group<'a>(groups: &'a [UiGroup], id: &str) -> Option<&'a UiGroup> {
    groups.iter().find(|group| group.id == id)
}
