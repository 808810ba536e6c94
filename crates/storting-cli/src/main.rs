mod render;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use storting_core::{
    matrix_view, party_detail, ranking_view, Dataset, PartyId, Selection, StortingConfig, Tab,
};
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset; keeps dataset warnings visible
const DEFAULT_FILTER: &str = "storting_core=warn,storting_cli=info";

#[derive(Parser)]
#[command(name = "storting")]
#[command(about = "Stortingsvotering - party agreement in the Storting", long_about = None)]
struct Cli {
    /// Dataset JSON file (defaults to the bundled 2023-2024 session)
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the agreement matrix
    Matrix,

    /// Show the most and least aligned party pairs
    Ranking,

    /// Show one party's agreement with every other party
    Party {
        /// Party ID (A, Sp, SV, R, MDG, H, V, KrF, FrP)
        id: String,
    },

    /// Check a dataset file against the integrity rules
    Validate {
        /// Dataset JSON file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Validate { file }) = &cli.command {
        return cmd_validate(file);
    }

    let dataset = load_dataset(cli.dataset.clone())?;

    match cli.command {
        Some(Commands::Matrix) => cmd_matrix(&dataset, &cli.output)?,
        Some(Commands::Ranking) => cmd_ranking(&dataset, &cli.output)?,
        Some(Commands::Party { id }) => cmd_party(&dataset, &id, &cli.output)?,
        Some(Commands::Validate { .. }) => {}
        None => run_interactive(&dataset)?,
    }

    Ok(())
}

/// Reads only the dataset section; window settings belong to the GUI
fn load_dataset(path: Option<PathBuf>) -> Result<Dataset> {
    let mut config = StortingConfig::from_env().context("failed to read configuration")?;
    if let Some(source) = &config.source {
        tracing::debug!("Configuration read from {}", source.display());
    }
    if path.is_some() {
        config.dataset.path = path;
    }
    config
        .dataset
        .load()
        .context("dataset failed integrity checks")
}

fn cmd_matrix(dataset: &Dataset, output_format: &str) -> Result<()> {
    let view = matrix_view(dataset);
    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&view)?),
        _ => print!("{}", render::render_matrix(&view)),
    }
    Ok(())
}

fn cmd_ranking(dataset: &Dataset, output_format: &str) -> Result<()> {
    let view = ranking_view(dataset);
    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&view)?),
        _ => print!("{}", render::render_ranking(&view)),
    }
    Ok(())
}

fn cmd_party(dataset: &Dataset, id: &str, output_format: &str) -> Result<()> {
    let detail = party_detail(dataset, &PartyId::from(id))?;
    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&detail)?),
        _ => print!("{}", render::render_party_detail(&detail)),
    }
    Ok(())
}

fn cmd_validate(file: &Path) -> Result<()> {
    let dataset = Dataset::load(file)
        .with_context(|| format!("{} failed integrity checks", file.display()))?;

    print!("{}", render::render_validation(file, &dataset));
    Ok(())
}

fn run_interactive(dataset: &Dataset) -> Result<()> {
    display_help();

    let mut selection = Selection::new();
    print!("{}", render::render(dataset, &selection)?);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(cmd) = parts.first() else {
            continue;
        };

        match cmd.to_lowercase().as_str() {
            "matrix" | "m" => selection.on_tab_select(Tab::Matrix),
            "ranking" | "r" => selection.on_tab_select(Tab::Ranking),
            "party" | "p" => selection.on_tab_select(Tab::PartyExplorer),
            "select" | "s" => {
                let Some(id) = parts.get(1) else {
                    println!("Usage: select <party id>");
                    continue;
                };
                let id = PartyId::from(*id);
                // Only ids from the dataset are accepted, like the buttons in the GUI
                if let Err(e) = dataset.party(&id) {
                    println!("Error: {}", e);
                    continue;
                }
                selection.on_party_select(id);
            }
            "help" | "h" | "?" => {
                display_help();
                continue;
            }
            "exit" | "quit" | "q" => break,
            other => {
                println!("Unknown command: {}. Type 'help' for available commands.", other);
                continue;
            }
        }

        println!();
        print!("{}", render::render(dataset, &selection)?);
    }

    Ok(())
}

fn display_help() {
    println!();
    println!("Available Commands:");
    println!("  matrix, m              Agreement matrix");
    println!("  ranking, r             Most and least aligned pairs");
    println!("  party, p               Party explorer");
    println!("  select, s <id>         Select a party (again to deselect)");
    println!("  help, h                Show this help message");
    println!("  exit, quit, q          Leave");
    println!();
}
