//! Watch command: rebuild whenever UI or site sources change.

use std::path::PathBuf;

use anyhow::Result;

use crate::commands::build;
use crate::watcher::SourceWatcher;

/// Run the watch command.
pub async fn run(config_path: PathBuf) -> Result<()> {
    let file_config = build::load_config(&config_path)?;
    let config = build::to_generate_config(file_config, None, None);

    // Initial build; failures keep the watcher alive
    if let Err(e) = build::build_site(&config).await {
        tracing::error!("Build failed: {e:#}");
    }

    let roots = vec![config.ui_dir.clone(), config.site_dir.clone()];
    let mut watcher = SourceWatcher::new(&roots)?;
    tracing::info!(
        "Watching {} and {} for changes...",
        config.ui_dir.display(),
        config.site_dir.display()
    );

    while let Some(changed) = watcher.next_change().await {
        tracing::info!(path = %changed.display(), "source changed, rebuilding");
        if let Err(e) = build::build_site(&config).await {
            tracing::error!("Build failed: {e:#}");
        }
    }

    Ok(())
}
