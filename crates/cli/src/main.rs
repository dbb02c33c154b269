//! wardscore CLI: JSON request in, JSON response out.
//!
//! Each subcommand reads one request object from a file (or stdin when no
//! file is given), runs the corresponding classification, and prints the
//! response as JSON. Validation rejections print the user-facing message to
//! stderr and exit 1; internal evaluation failures exit 2.

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use wardscore_banding::{band_reading, BandingError, BandingRequest};
use wardscore_scoring::{
    calculate_meows, calculate_news2, MeowsRequest, News2Request, ScoreError, ValidationError,
};

/// Clinical observation scoring toolchain.
#[derive(Parser)]
#[command(name = "wardscore", version, about = "Clinical observation scoring toolchain")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a seven-factor vital-signs observation set
    News2 {
        /// Request JSON file (stdin when omitted)
        input: Option<PathBuf>,
    },
    /// Score a six-factor obstetric observation set
    Meows {
        /// Request JSON file (stdin when omitted)
        input: Option<PathBuf>,
    },
    /// Band a blood-glucose reading against threshold configuration
    Banding {
        /// Request JSON file (stdin when omitted)
        input: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::News2 { input } => run(input.as_deref(), |req| {
            calculate_news2(req).map_err(score_failure)
        }),
        Commands::Meows { input } => run(input.as_deref(), |req| {
            calculate_meows(req).map_err(score_failure)
        }),
        Commands::Banding { input } => run(input.as_deref(), |req| {
            band_reading(req).map_err(banding_failure)
        }),
    };
    process::exit(code);
}

/// How a classification failed, from the process's point of view.
enum Failure {
    /// Bad request: report the user-facing message, log the technical one.
    Rejected(ValidationError),
    /// Defect in the rule tables or response fold.
    Internal(String),
}

fn score_failure(err: ScoreError) -> Failure {
    match err {
        ScoreError::Validation(pair) => Failure::Rejected(pair),
        other => Failure::Internal(other.to_string()),
    }
}

fn banding_failure(err: BandingError) -> Failure {
    match err {
        BandingError::Validation(pair) => Failure::Rejected(pair),
        other => Failure::Internal(other.to_string()),
    }
}

fn run<Req, Resp>(input: Option<&Path>, classify: impl Fn(&Req) -> Result<Resp, Failure>) -> i32
where
    Req: DeserializeOwned,
    Resp: Serialize,
{
    let raw = match read_input(input) {
        Ok(raw) => raw,
        Err(message) => {
            eprintln!("{}", message);
            return 1;
        }
    };

    let request: Req = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("invalid request JSON: {}", err);
            return 1;
        }
    };

    match classify(&request) {
        Ok(response) => {
            // Responses serialize infallibly; guard anyway rather than panic.
            match serde_json::to_string_pretty(&response) {
                Ok(json) => {
                    println!("{}", json);
                    0
                }
                Err(err) => {
                    eprintln!("failed to serialize response: {}", err);
                    2
                }
            }
        }
        Err(Failure::Rejected(pair)) => {
            tracing::warn!(log = %pair.log_message, "request rejected");
            eprintln!("{}", pair.user_message);
            1
        }
        Err(Failure::Internal(message)) => {
            eprintln!("evaluation failed: {}", message);
            2
        }
    }
}

fn read_input(input: Option<&Path>) -> Result<String, String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("cannot read {}: {}", path.display(), err)),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|err| format!("cannot read stdin: {}", err))?;
            Ok(raw)
        }
    }
}
