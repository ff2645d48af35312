//! `dice filter`

use std::path::PathBuf;

use anyhow::Result;
use dice_core::{DatasetConfig, Triple, TripleFilter};

use super::{emit, load_graph};
use crate::console::CliConsole;

/// Print the triples matching `filter` as tab-separated lines
pub async fn run(
    console: &mut CliConsole,
    dataset: DatasetConfig,
    filter: TripleFilter,
    output: Option<PathBuf>,
) -> Result<()> {
    if filter.is_empty() {
        console.warn("No filter values given; nothing matches an empty filter");
    }

    let kg = load_graph(console, dataset).await?;
    let matched = kg.filter_triples(&filter);
    console.info(&format!(
        "{} of {} triples matched",
        matched.len(),
        kg.triple_count()
    ));

    emit(console, &render(&matched), output.as_deref()).await
}

fn render(triples: &[&Triple]) -> String {
    let mut out = String::new();
    for triple in triples {
        out.push_str(&triple.to_line());
        out.push('\n');
    }
    out
}
