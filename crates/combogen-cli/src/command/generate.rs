use combogen_engine::{ComboSeed, MoveCatalog, generate_combo};

use super::RequestArg;

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct GenerateArg {
    #[command(flatten)]
    request: RequestArg,
    /// Hex seed for reproducible output
    #[arg(long)]
    seed: Option<ComboSeed>,
    /// Print the share text instead of the numbered list
    #[arg(long)]
    share: bool,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let request = arg.request.to_request()?;
    let seed = arg.seed.unwrap_or_else(ComboSeed::random);
    let combo = generate_combo(&MoveCatalog::STANDARD, &request, &mut seed.rng());

    if arg.share {
        println!("{}", share_text(&combo));
    } else {
        for (i, label) in combo.iter().enumerate() {
            println!("{}. {label}", i + 1);
        }
        eprintln!("seed: {seed}");
    }
    Ok(())
}

/// Joins the labels with the combo arrow and wraps them in the share
/// template. A plain string transform; no generation logic.
fn share_text(labels: &[&str]) -> String {
    format!(
        "Today's training order \u{1f94a}\n\"{}\"\nTough one, but a good one.\n#combogen",
        labels.join(" \u{2192} ")
    )
}
