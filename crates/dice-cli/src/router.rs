//! Command routing logic for CLI

use anyhow::Result;
use dice_core::{DiceConfig, TripleFilter};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::console::CliConsole;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, config: DiceConfig) -> Result<()> {
    let mut console = CliConsole::new(cli.verbose);
    let dataset = config.dataset;

    match cli.command {
        Commands::Stats { json } => commands::stats::run(&mut console, dataset, json).await,
        Commands::Tasks => commands::tasks::run(&mut console, dataset).await,
        Commands::Filter {
            heads,
            arcs,
            tails,
            tail_types,
            sources,
            output,
        } => {
            let filter = TripleFilter::new()
                .with_heads(heads)
                .with_arcs(arcs)
                .with_tails(tails)
                .with_tail_types(tail_types)
                .with_sources(sources);
            commands::filter::run(&mut console, dataset, filter, output).await
        }
        Commands::Eval {
            task,
            predictions,
            splits,
            metric,
            format,
            output,
        } => {
            let request = commands::eval::EvalRequest {
                task,
                predictions,
                splits,
                metric,
                format,
                output,
            };
            commands::eval::run(&mut console, dataset, request).await
        }
    }
}
