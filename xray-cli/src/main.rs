//! xray CLI — print and check stat groups without a terminal UI.
//!
//! Commands:
//! - `show` — print each visible group as text
//! - `json` — print the derived groups as JSON
//! - `check` — list identifiers the layout names but the xray lacks

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use xray_core::{AnalysisResult, Layout, StatGroup, StatValue};

#[derive(Parser)]
#[command(name = "xray-cli", about = "xray CLI — stat group rendering for analysis results")]
struct Cli {
    /// Log at debug level.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// Path to the xray JSON document.
    xray: PathBuf,

    /// Layout TOML. Defaults to the built-in field layout.
    #[arg(long)]
    layout: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each visible group as text.
    Show {
        #[command(flatten)]
        input: Input,

        /// Include statistic descriptions.
        #[arg(long, default_value_t = false)]
        descriptions: bool,
    },
    /// Print the derived groups as JSON.
    Json {
        #[command(flatten)]
        input: Input,

        /// Include statistic descriptions.
        #[arg(long, default_value_t = false)]
        descriptions: bool,
    },
    /// List identifiers named by the layout that are absent from the xray.
    Check {
        #[command(flatten)]
        input: Input,

        /// Exit non-zero when any identifier is absent.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.command {
        Commands::Show {
            input,
            descriptions,
        } => {
            let (xray, layout) = load(&input)?;
            print!("{}", render_text(&layout.render(&xray, descriptions)));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Json {
            input,
            descriptions,
        } => {
            let (xray, layout) = load(&input)?;
            let groups = layout.render(&xray, descriptions);
            println!("{}", serde_json::to_string_pretty(&groups)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { input, strict } => {
            let (xray, layout) = load(&input)?;
            let missing = layout.missing(&xray);
            for id in &missing {
                println!("{id}");
            }
            info!(missing = missing.len(), "check complete");
            if strict && !missing.is_empty() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn load(input: &Input) -> Result<(AnalysisResult, Layout)> {
    let xray = load_xray(&input.xray)?;
    let layout = match &input.layout {
        Some(path) => Layout::from_file(path)
            .with_context(|| format!("loading layout {}", path.display()))?,
        None => Layout::default(),
    };
    Ok((xray, layout))
}

fn load_xray(path: &Path) -> Result<AnalysisResult> {
    AnalysisResult::from_json_file(path).with_context(|| format!("loading {}", path.display()))
}

/// Plain-text rendering: heading, then one indented line per card.
fn render_text(groups: &[StatGroup<'_, StatValue>]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let (heading, cards) = group.render_with(
            |title| format!("{title}\n{}\n", "=".repeat(title.chars().count())),
            |id, stat, show_description| {
                let mut line = format!("  {:<24} {}\n", stat.label_or(id), stat.value);
                if show_description {
                    if let Some(description) = &stat.description {
                        line.push_str(&format!("  {:<24} {}\n", "", description));
                    }
                }
                line
            },
        );
        out.push_str(&heading);
        for card in cards {
            out.push_str(&card);
        }
    }
    out
}
