//! `dice stats`

use anyhow::Result;
use dice_core::{DatasetConfig, KnowledgeGraphStats};

use super::load_graph;
use crate::console::CliConsole;

/// Load the triples and print graph statistics
pub async fn run(console: &mut CliConsole, dataset: DatasetConfig, json: bool) -> Result<()> {
    let dir = dataset.dataset_dir.clone();
    let kg = load_graph(console, dataset).await?;
    let stats = kg.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    console.print_header(&format!("Dataset {}", dir.display()));
    print_stats(console, &stats);
    Ok(())
}

fn print_stats(console: &CliConsole, stats: &KnowledgeGraphStats) {
    console.print_field("Triples", stats.triple_count);
    console.print_field("Distinct heads", stats.head_count);
    console.print_field("Distinct arcs", stats.arc_count);
    console.print_field("Distinct entities", stats.entity_count);
    console.print_field("Entity tails", stats.entity_tail_count);
    console.print_field("Value tails", stats.value_tail_count);

    if !stats.by_source.is_empty() {
        println!();
        println!("  Sources:");
        for (source, count) in &stats.by_source {
            println!("    {:<20} {}", source, count);
        }
    }
}
