//! UI definition provider for lacquer documentation builds.
//!
//! Reads the site's `ui.yaml` manifest into groups of components and their
//! flavors, and normalizes component records before page rendering.

pub mod decorate;
pub mod manifest;

pub use decorate::decorate;
pub use manifest::{find_group, generate_ui, Component, Flavor, UiError, UiGroup};
