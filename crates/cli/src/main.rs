//! mxml
//!
//! Command-line inspection of partwise MusicXML files: list the parts a
//! score declares, or validate its header.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use musicxml::{PartListItem, ScorePartwise, StartStop, from_xml_str};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "mxml", version, about = "Inspect MusicXML score headers")]
struct Cli {
    /// Log level when RUST_LOG is not set.
    #[arg(long, env = "MXML_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the parts and part groups of a score, in score order.
    Parts {
        /// Path to a partwise MusicXML file.
        file: PathBuf,

        /// Emit the full score header as JSON instead of a listing.
        #[arg(long)]
        json: bool,
    },
    /// Parse a score header and report what it contains.
    Check {
        /// Path to a partwise MusicXML file.
        file: PathBuf,
    },
}

fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mxml={level},musicxml={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_score(file: &Path) -> anyhow::Result<ScorePartwise> {
    let xml = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    debug!(file = %file.display(), bytes = xml.len(), "Read score file");
    let score: ScorePartwise = from_xml_str(&xml)
        .with_context(|| format!("failed to decode {}", file.display()))?;
    info!(
        file = %file.display(),
        parts = score.part_list.score_parts().count(),
        "Decoded score header"
    );
    Ok(score)
}

/// Prints the part list as an indented tree, group spans opening and closing
/// indentation.
fn print_parts(score: &ScorePartwise) {
    let mut depth = 0usize;
    for item in &score.part_list.items {
        match item {
            PartListItem::Group(group) => match group.kind {
                StartStop::Start => {
                    let name = group
                        .name
                        .as_ref()
                        .map(|name| name.value.as_str())
                        .unwrap_or("(unnamed group)");
                    println!("{}{name}", "  ".repeat(depth));
                    depth += 1;
                }
                StartStop::Stop => depth = depth.saturating_sub(1),
            },
            PartListItem::Part(part) => {
                let indent = "  ".repeat(depth);
                match &part.abbreviation {
                    Some(abbreviation) => println!(
                        "{indent}{} ({}) [{}]",
                        part.name.value, abbreviation.value, part.id
                    ),
                    None => println!("{indent}{} [{}]", part.name.value, part.id),
                }
            }
        }
    }
}

fn check(score: &ScorePartwise, file: &Path) {
    let parts = score.part_list.score_parts().count();
    let groups = score.part_list.items.len() - parts;
    let title = score
        .work
        .as_ref()
        .and_then(|work| work.title.as_deref())
        .or(score.movement_title.as_deref())
        .unwrap_or("(untitled)");
    println!(
        "{}: ok: {title}, {parts} part(s), {groups} group marker(s)",
        file.display()
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Parts { file, json } => {
            let score = load_score(&file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&score)?);
            } else {
                print_parts(&score);
            }
        }
        Command::Check { file } => {
            let score = load_score(&file)?;
            check(&score, &file);
        }
    }

    Ok(())
}
