//! CLI command implementations

pub mod eval;
pub mod filter;
pub mod stats;
pub mod tasks;

use std::path::Path;

use anyhow::{Context, Result};
use dice_core::{DatasetConfig, KnowledgeGraph};

use crate::console::CliConsole;

/// Read the triples of a dataset off the async runtime, with a spinner
pub(crate) async fn load_graph(
    console: &mut CliConsole,
    dataset: DatasetConfig,
) -> Result<KnowledgeGraph> {
    console.start_progress(&format!(
        "Loading triples from {}",
        dataset.triples_path().display()
    ));
    let result = tokio::task::spawn_blocking(move || KnowledgeGraph::load(dataset)).await;
    console.finish_progress();

    Ok(result.context("Triple loading task panicked")??)
}

/// Write command output to a file, or stdout when no path is given
pub(crate) async fn emit(console: &CliConsole, content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
            }
            tokio::fs::write(path, content)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            console.success(&format!("Wrote {}", path.display()));
        }
        None => print!("{}", content),
    }
    Ok(())
}
