use std::path::PathBuf;

use clap::{Parser, Subcommand};
use combogen_engine::{ComboRequest, Level, Rules, Stance, Tuning};
use serde::Deserialize;

use self::{catalog::CatalogArg, generate::GenerateArg, sample::SampleArg};
use crate::util;

mod catalog;
mod generate;
mod sample;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate one combo
    Generate(#[clap(flatten)] GenerateArg),
    /// Sample many combos and print frequency statistics
    Sample(#[clap(flatten)] SampleArg),
    /// List the legal moves for a stance, level, and mode
    Catalog(#[clap(flatten)] CatalogArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Generate(GenerateArg::default())) {
        Mode::Generate(arg) => generate::run(&arg),
        Mode::Sample(arg) => sample::run(&arg),
        Mode::Catalog(arg) => catalog::run(&arg),
    }
}

/// Request parameters shared by the generating subcommands.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RequestArg {
    /// Number of moves in the combo (clamped to 3-8)
    #[arg(long, short = 'c', default_value_t = 4)]
    count: usize,
    /// Fighting stance
    #[arg(long, default_value = "orthodox")]
    stance: Stance,
    /// Skill tier
    #[arg(long, default_value = "beginner")]
    level: Level,
    /// Rule set
    #[arg(long, default_value = "kickboxing")]
    mode: combogen_engine::Mode,
    /// JSON file overriding the default rules and tuning
    #[arg(long)]
    rules: Option<PathBuf>,
}

impl Default for RequestArg {
    fn default() -> Self {
        Self {
            count: 4,
            stance: Stance::Orthodox,
            level: Level::Beginner,
            mode: combogen_engine::Mode::Kickboxing,
            rules: None,
        }
    }
}

impl RequestArg {
    pub(crate) fn to_request(&self) -> anyhow::Result<ComboRequest> {
        let overrides = match &self.rules {
            Some(path) => util::read_json_file("rules", path)?,
            None => RulesFile::default(),
        };
        Ok(ComboRequest {
            count: self.count,
            stance: self.stance,
            level: self.level,
            mode: self.mode,
            rules: overrides.rules,
            tuning: overrides.tuning,
        })
    }
}

/// On-disk rules/tuning override file. Both sections are optional.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default)]
pub(crate) struct RulesFile {
    rules: Rules,
    tuning: Tuning,
}
