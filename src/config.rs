use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::deck::{DeckOptions, NavigationPolicy};

#[derive(Parser, Debug)]
#[command(name = "slidedeck", version, about = "Slide deck renderer, preview server and lesson page tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve a deck as a navigable preview page.
    Serve(ServeArgs),
    /// Print the markup of one slide.
    Render {
        deck: PathBuf,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        index: i64,
        /// Lesson page whose `lesson-config` block replaces the deck file's config.
        #[arg(long)]
        page: Option<PathBuf>,
        #[command(flatten)]
        deck_flavor: FlavorArgs,
    },
    /// Insert the presenter controls includes into every lesson_ppt.html under ROOT.
    AddIncludes { root: PathBuf },
    /// List lesson_ppt.html files under ROOT that lack the presenter controls includes.
    ReportIncludes { root: PathBuf },
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Deck JSON file: a slide array or `{ "config": {...}, "slides": [...] }`.
    pub deck: PathBuf,
    #[arg(long, env = "SLIDEDECK_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,
    #[arg(long, env = "SLIDEDECK_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
    /// Lesson page whose `lesson-config` block replaces the deck file's config.
    #[arg(long)]
    pub page: Option<PathBuf>,
    #[command(flatten)]
    pub deck_flavor: FlavorArgs,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct FlavorArgs {
    /// Input and navigation preset.
    #[arg(long, value_enum, default_value_t = Preset::Learning)]
    pub preset: Preset,
    /// Override the preset's navigation policy (clamped or wrapping).
    #[arg(long)]
    pub policy: Option<NavigationPolicy>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Learning,
    Presenter,
    Vlog,
}

impl FlavorArgs {
    pub fn options(&self) -> DeckOptions {
        let base = match self.preset {
            Preset::Learning => DeckOptions::learning(),
            Preset::Presenter => DeckOptions::presenter(),
            Preset::Vlog => DeckOptions::vlog(),
        };
        match self.policy {
            Some(policy) => base.with_policy(policy),
            None => base,
        }
    }
}
