mod convert_cmd;
mod prompt_cmd;
mod sample_cmd;
mod validate_cmd;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "tidyplan",
    about = "Importer and normalizer for tidy-up project templates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the plan-generation prompt from a requirements file
    MakePrompt {
        /// Path to a free-form requirements text file
        #[arg(long = "in")]
        input: String,
    },
    /// Validate a template JSON file
    Validate {
        /// Path to the template JSON file
        #[arg(long)]
        json: String,
    },
    /// Convert a template file to the canonical modern schema
    Convert {
        /// Path to the template file (modern or legacy)
        #[arg(long = "in")]
        input: String,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a canned example template
    Sample {
        /// Which schema generation to print
        #[arg(value_enum)]
        kind: SampleKind,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SampleKind {
    Modern,
    Legacy,
}

fn main() {
    // Diagnostics go to stderr so piped stdout stays clean JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::MakePrompt { input } => prompt_cmd::run_make_prompt(&input),
        Commands::Validate { json } => validate_cmd::run_validate(&json),
        Commands::Convert { input, out } => convert_cmd::run_convert(&input, out.as_deref()),
        Commands::Sample { kind } => sample_cmd::run_sample(kind),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
