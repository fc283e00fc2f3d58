use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use polyproc::wire::{self, Response};
use polyproc::{InMemoryCache, Pipeline, PipelineConfig, PolyError};

#[derive(Parser, Debug)]
#[command(name = "polyproc", version, about = "Simplify and evaluate integer polynomials")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON objects instead of plain text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical form of a polynomial
    Simplify {
        #[arg(allow_hyphen_values = true)]
        polynomial: String,
    },
    /// Evaluate a polynomial at an integer x
    Evaluate {
        #[arg(allow_hyphen_values = true)]
        polynomial: String,
        #[arg(allow_hyphen_values = true)]
        x: String,
    },
    /// Answer JSON-line requests from stdin through one shared cache
    Batch,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    init_tracing(&config);

    let pipeline = Pipeline::with_config(InMemoryCache::new(), config);
    match cli.command {
        Command::Simplify { polynomial } => {
            let outcome = pipeline
                .simplify(&polynomial)
                .map(|polynomial| Response::Polynomial { polynomial });
            report(outcome, cli.json)
        }
        Command::Evaluate { polynomial, x } => {
            let outcome = pipeline
                .evaluate(&polynomial, &x)
                .map(|result| Response::Evaluation { result });
            report(outcome, cli.json)
        }
        Command::Batch => batch(&pipeline),
    }
}

fn init_tracing(config: &PipelineConfig) {
    let fallback = config.log_filter.as_deref().unwrap_or("warn");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn report(outcome: polyproc::Result<Response>, json: bool) -> Result<ExitCode> {
    let (response, code) = match outcome {
        Ok(response) => (response, ExitCode::SUCCESS),
        Err(err @ (PolyError::Store(_) | PolyError::Config(_))) => return Err(err.into()),
        Err(err) => (Response::from_error(&err), ExitCode::from(1)),
    };
    if json {
        println!("{}", serde_json::to_string(&response)?);
        return Ok(code);
    }
    match response {
        Response::Polynomial { polynomial } => println!("{polynomial}"),
        Response::Evaluation { result } => println!("{result}"),
        Response::Error { message, .. } => eprintln!("{message}"),
    }
    Ok(code)
}

fn batch(pipeline: &Pipeline<InMemoryCache>) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let Some(response) = wire::answer_line(pipeline, &line) else {
            continue;
        };
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
    }
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
