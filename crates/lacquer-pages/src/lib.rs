//! Page and example rendering pipeline for lacquer.
//!
//! Resolves component example definitions (including named states), renders
//! element trees into the page shell, pretty-prints isolated example markup,
//! and streams the resulting files to the destination directory.

pub mod assets;
pub mod case;
pub mod example;
pub mod loader;
pub mod pipeline;
pub mod props;
pub mod render;
pub mod shell;

pub use example::{
    resolve_element, state_id, ExampleDef, ExampleKey, ExampleState, ResolveOptions,
};
pub use pipeline::{
    GenerateConfig, GenerateReport, OutputFile, PageError, ResolvedComponent, ResolvedFlavor,
    SiteGenerator,
};
pub use props::prefixed_props;
pub use render::{render_example, render_page};
pub use shell::ShellEngine;
