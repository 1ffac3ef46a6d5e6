use std::{cmp::Reverse, collections::BTreeMap, path::PathBuf};

use combogen_engine::{Category, ComboSeed, MoveCatalog, generate_combo};
use serde::Serialize;

use super::RequestArg;
use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SampleArg {
    #[command(flatten)]
    request: RequestArg,
    /// Number of combos to generate
    #[arg(long, default_value_t = 1000)]
    trials: usize,
    /// Hex seed for a reproducible sample
    #[arg(long)]
    seed: Option<ComboSeed>,
    /// Write the collected statistics as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Frequency statistics over one sampling run.
#[derive(Debug, Serialize)]
struct SampleStats {
    trials: usize,
    moves_generated: usize,
    category_counts: BTreeMap<String, usize>,
    move_counts: BTreeMap<String, usize>,
}

/// Samples `trials` combos and reports how often each category and move
/// shows up. This is the inspection tool for the weight constants: change
/// the tuning file, re-sample, compare distributions.
pub(crate) fn run(arg: &SampleArg) -> anyhow::Result<()> {
    let request = arg.request.to_request()?;
    let seed = arg.seed.unwrap_or_else(ComboSeed::random);
    let mut rng = seed.rng();

    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut move_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut moves_generated = 0;

    for _ in 0..arg.trials {
        let combo = generate_combo(&MoveCatalog::STANDARD, &request, &mut rng);
        moves_generated += combo.len();
        for label in combo {
            *category_counts.entry(label_category(label).to_string()).or_insert(0) += 1;
            *move_counts.entry(label.to_owned()).or_insert(0) += 1;
        }
    }

    eprintln!(
        "Sampled {} combos ({moves_generated} moves) with seed {seed}",
        arg.trials
    );

    println!("Category distribution:");
    util::print_histogram(
        category_counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count)),
    );
    println!();
    println!("Move distribution:");
    let mut by_count: Vec<_> = move_counts.iter().collect();
    by_count.sort_by_key(|&(label, count)| (Reverse(*count), label.as_str()));
    util::print_histogram(by_count.into_iter().map(|(label, count)| (label.as_str(), *count)));

    if let Some(output) = &arg.output {
        let stats = SampleStats {
            trials: arg.trials,
            moves_generated,
            category_counts,
            move_counts,
        };
        util::write_json_file(&stats, output)?;
        eprintln!("Statistics written to {}", output.display());
    }

    Ok(())
}

/// Category of a returned label. Catalog entries sharing a label are
/// stance-mirrored variants of the same technique, so any match will do.
fn label_category(label: &str) -> Category {
    MoveCatalog::STANDARD
        .moves()
        .iter()
        .find(|m| m.label() == label)
        .expect("every generated label comes from the catalog")
        .category()
}
