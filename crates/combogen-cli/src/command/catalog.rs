use combogen_engine::{Level, MoveCatalog, Stance};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CatalogArg {
    /// Fighting stance
    #[arg(long, default_value = "orthodox")]
    stance: Stance,
    /// Skill tier
    #[arg(long, default_value = "advanced")]
    level: Level,
    /// Rule set
    #[arg(long, default_value = "kickboxing")]
    mode: combogen_engine::Mode,
}

/// Prints every move legal under the given parameters.
pub(crate) fn run(arg: &CatalogArg) -> anyhow::Result<()> {
    let legal = MoveCatalog::STANDARD.legal_moves(arg.level, arg.mode, arg.stance);
    let mut count = 0;
    println!("{:<48} {:<8} {:<12} {}", "move", "category", "level", "side");
    for m in legal {
        println!(
            "{:<48} {:<8} {:<12} {}",
            m.label(),
            m.category(),
            m.level(),
            m.body_side()
        );
        count += 1;
    }
    eprintln!("{count} legal moves ({} {} {})", arg.stance, arg.level, arg.mode);
    Ok(())
}
