//! RELIC - recover browser windows and tabs from session snapshot logs.

mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "relic",
    version,
    about = "Recover Chromium-family browser sessions from on-disk snapshot logs"
)]
struct Cli {
    /// Verbose logging to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List detected Chromium-family browsers
    List,

    /// List profiles for a browser
    Profiles {
        /// Browser id (see `relic list`)
        browser: String,
    },

    /// List defined workspaces (Vivaldi only)
    Workspaces {
        browser: String,

        /// Profile name
        #[arg(short, long)]
        profile: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Parse session files and display windows and tabs
    Parse {
        browser: String,

        /// Session file(s) to parse instead of auto-discovered ones
        files: Vec<PathBuf>,

        /// Profile name
        #[arg(short, long)]
        profile: Option<String>,

        /// Parse only the N most recent session files
        #[arg(short = 'n', long, default_value_t = 1)]
        latest: usize,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,

        /// Include closed tabs and windows
        #[arg(long)]
        show_deleted: bool,

        /// Group tabs by workspace instead of by window
        #[arg(short = 'W', long)]
        by_workspace: bool,
    },

    /// Quick stats for the newest session file
    Summary {
        browser: String,

        /// Profile name
        #[arg(short, long)]
        profile: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::List => commands::list::run(),
        Commands::Profiles { browser } => commands::profiles::run(&browser),
        Commands::Workspaces {
            browser,
            profile,
            json,
        } => commands::workspaces::run(&browser, profile.as_deref(), json),
        Commands::Parse {
            browser,
            files,
            profile,
            latest,
            json,
            show_deleted,
            by_workspace,
        } => commands::parse::run(commands::parse::ParseArgs {
            browser,
            files,
            profile,
            latest,
            json,
            show_deleted,
            by_workspace,
        }),
        Commands::Summary { browser, profile } => {
            commands::summary::run(&browser, profile.as_deref())
        }
    }
}
