//! `dice tasks`

use anyhow::Result;
use dice_core::{DatasetConfig, SplitName, Task, discover_tasks, read_task};

use crate::console::CliConsole;

/// Load every task directory and print per-split sample counts
///
/// Only the split files are read; the triples file may be absent.
pub async fn run(console: &mut CliConsole, dataset: DatasetConfig) -> Result<()> {
    console.start_progress("Loading tasks");
    let loaded = tokio::task::spawn_blocking(move || load_all(&dataset)).await;
    console.finish_progress();
    let tasks = loaded??;

    if tasks.is_empty() {
        console.warn("No task directories found");
        return Ok(());
    }

    console.print_header("Tasks");
    println!(
        "  {:<28} {:<12} {:>8} {:>8} {:>8}",
        "Task", "Format", "Train", "Valid", "Test"
    );
    for task in &tasks {
        let count = |split: SplitName| task.split(split).map(|s| s.len()).unwrap_or(0);
        println!(
            "  {:<28} {:<12} {:>8} {:>8} {:>8}",
            task.name,
            format!("{:?}", task.format),
            count(SplitName::Train),
            count(SplitName::Valid),
            count(SplitName::Test)
        );
    }
    Ok(())
}

fn load_all(dataset: &DatasetConfig) -> dice_core::DiceResult<Vec<Task>> {
    discover_tasks(dataset)?
        .into_iter()
        .map(|name| read_task(dataset, &name))
        .collect()
}
