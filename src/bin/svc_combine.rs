//! svc-combine - merges a regenerated service module into a previous one.
//!
//! Reads two structured source trees (YAML or JSON), writes the merged tree
//! and prints breaking-change warnings to stderr.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use service_combiner::{DuplicateNames, Module, ModuleCombiner, SchemaModel};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "svc-combine", version)]
#[command(about = "Merge a regenerated service module into a previously generated one")]
struct Cli {
    /// Previously generated, possibly hand-edited module
    #[arg(short, long, value_name = "FILE")]
    previous: PathBuf,

    /// Freshly regenerated module
    #[arg(short, long, value_name = "FILE")]
    next: PathBuf,

    /// Schema model with union member order
    #[arg(short, long, value_name = "FILE")]
    schema: Option<PathBuf>,

    /// Output location. Use '-' for stdout
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Output format of the merged module
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Keep the first of several siblings sharing a name instead of failing
    #[arg(long)]
    allow_duplicate_names: bool,

    /// Exit with a failure status when any breaking change is found
    #[arg(long)]
    fail_on_breaking: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(breaking) if breaking && cli.fail_on_breaking => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the combine and returns whether breaking changes were found.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let prev = read_module(&cli.previous)?;
    let next = read_module(&cli.next)?;

    let mut builder = ModuleCombiner::builder();
    if let Some(ref path) = cli.schema {
        builder = builder.schema(read_schema(path)?);
    }
    if cli.allow_duplicate_names {
        builder = builder.duplicate_names(DuplicateNames::FirstWins);
    }

    let outcome = builder.build(&prev, &next).combine()?;
    debug!(warnings = outcome.warnings.len(), "combine finished");

    let rendered = match cli.format {
        OutputFormat::Yaml => outcome.module.to_yaml()?,
        OutputFormat::Json => outcome.module.to_json()? + "\n",
    };

    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };
    write!(output, "{}", rendered)?;
    output.flush()?;

    let stderr = io::stderr();
    let mut stderr = stderr.lock();
    for warning in &outcome.warnings {
        writeln!(stderr, "{}", warning)?;
    }

    Ok(outcome.has_breaking_changes())
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read_module(path: &Path) -> Result<Module, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file {:?}: {}", path, e))?;
    let module = if is_json(path) {
        Module::from_json(&content)
    } else {
        Module::from_yaml(&content)
    };
    Ok(module.map_err(|e| format!("Failed to parse {:?}: {}", path, e))?)
}

fn read_schema(path: &Path) -> Result<SchemaModel, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read schema file {:?}: {}", path, e))?;
    let schema = if is_json(path) {
        SchemaModel::from_json(&content)
    } else {
        SchemaModel::from_yaml(&content)
    };
    Ok(schema.map_err(|e| format!("Failed to parse schema: {}", e))?)
}
