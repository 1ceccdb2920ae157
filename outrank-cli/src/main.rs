mod input;
mod output;

use clap::Parser;
use outrank_core::{ahp, electre, promethee};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::input::{AhpFile, ElectreFile, PrometheeFile};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "outrank",
    version,
    about = "Rank decision alternatives with PROMETHEE II, AHP, or ELECTRE I"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// PROMETHEE II: preference-flow ranking
    Promethee(MethodArgs),
    /// AHP: pairwise-comparison ranking with consistency checking
    Ahp(MethodArgs),
    /// ELECTRE I: concordance/discordance outranking and kernel
    Electre(MethodArgs),
}

#[derive(Parser)]
struct MethodArgs {
    /// JSON problem file (see outrank-cli/src/input.rs for the schemas)
    #[arg(long)]
    input: PathBuf,

    /// Output the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Read and deserialize a problem file, bailing with context on failure.
fn load_file<T: DeserializeOwned>(path: &Path) -> T {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| bail(format!("Failed to read {}: {e}", path.display())));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| bail(format!("Failed to parse {}: {e}", path.display())))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Promethee(args) => {
            let file: PrometheeFile = load_file(&args.input);
            let (problem, functions) = file.into_parts().unwrap_or_else(|e| bail(e));
            let result = promethee::rank(&problem, &functions).unwrap_or_else(|e| bail(e));
            if args.json {
                output::print_json(&result);
            } else {
                output::print_promethee_table(&result);
            }
        }
        Commands::Ahp(args) => {
            let file: AhpFile = load_file(&args.input);
            let (alternatives, criteria_names, criteria_matrix, alternative_matrices) =
                file.into_parts().unwrap_or_else(|e| bail(e));
            let result = ahp::rank(&alternatives, &criteria_matrix, &alternative_matrices)
                .unwrap_or_else(|e| bail(e));
            if args.json {
                output::print_json(&result);
            } else {
                output::print_ahp_table(&result, &criteria_names);
            }
        }
        Commands::Electre(args) => {
            let file: ElectreFile = load_file(&args.input);
            let (problem, vetoes, thresholds) = file.into_parts().unwrap_or_else(|e| bail(e));
            let result =
                electre::rank(&problem, &vetoes, thresholds).unwrap_or_else(|e| bail(e));
            if args.json {
                output::print_json(&result);
            } else {
                output::print_electre_table(&result);
            }
        }
    }
}
