//! Module: pxfilter (binary)
//! Responsibility: developer front end for compiling and inspecting filters.
//! Does not own: compilation rules (see `pxfilter-core`).
//! Boundary: reads JSON scan requests; writes filters, headers or decoded
//! trees to stdout and diagnostics to stderr.

mod error;


use clap::{Parser, Subcommand};
use error::CliError;
use pxfilter_config::{PushdownConfig, PxfilterConfig};
use pxfilter_core::{
    codec::{FilterTree, decode},
    prelude::*,
};
use serde::Deserialize;
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Printed by `compile` when nothing could be pushed down.
const NO_FILTER: &str = "-";

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "pxfilter", version, about = "Compile and inspect pushdown filter strings")]
struct Cli {
    /// Config file (defaults to ./pxfilter.toml when present)
    #[arg(long, short, global = true, env = "PXFILTER_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

///
/// Command
///

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a JSON scan request into a filter string
    Compile {
        /// Print every request header instead of the bare filter
        #[arg(long)]
        headers: bool,

        /// JSON scan request or qual array; stdin when omitted or "-"
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Decode a filter string into its expression tree
    Decode {
        /// Print the postfix token stream as JSON
        #[arg(long)]
        json: bool,

        filter: String,
    },

    /// List the zero-based columns the quals of a request read
    Attrs {
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

///
/// RequestInput
///
/// Either a full scan request or just its qual list.
///

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequestInput {
    Quals(Vec<Node>),
    Request(ScanRequest),
}

impl From<RequestInput> for ScanRequest {
    fn from(input: RequestInput) -> Self {
        match input {
            RequestInput::Quals(quals) => Self {
                quals,
                ..Self::default()
            },
            RequestInput::Request(request) => request,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("pxfilter: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let config = PxfilterConfig::load_or_default(cli.config.as_deref())?;
    init_tracing(&config.logging.level);
    debug!(?config, "configuration loaded");

    match &cli.command {
        Command::Compile { headers, input } => {
            let request = read_request(input.as_deref())?;
            compile(&request, &config.pushdown, *headers)
        }
        Command::Decode { json, filter } => decode_filter(filter, *json),
        Command::Attrs { input } => {
            let request = read_request(input.as_deref())?;
            Ok(attributes(&request))
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

fn read_request(input: Option<&Path>) -> Result<ScanRequest, CliError> {
    let source = match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|source| CliError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            source
        }
    };

    parse_request(&source)
}

fn parse_request(source: &str) -> Result<ScanRequest, CliError> {
    let input: RequestInput = serde_json::from_str(source)?;

    Ok(input.into())
}

fn compile(
    request: &ScanRequest,
    config: &PushdownConfig,
    headers: bool,
) -> Result<String, CliError> {
    let pushdown = compile_scan(request, config, &BuiltinCatalog)?;

    if headers {
        let lines: Vec<String> = pushdown
            .headers
            .iter()
            .map(|header| format!("{}: {}", header.name, header.value))
            .collect();
        Ok(lines.join("\n"))
    } else {
        Ok(pushdown.filter.unwrap_or_else(|| NO_FILTER.to_string()))
    }
}

fn decode_filter(filter: &str, json: bool) -> Result<String, CliError> {
    if json {
        let tokens = decode(filter)?;
        Ok(serde_json::to_string_pretty(&tokens)?)
    } else {
        Ok(FilterTree::parse(filter)?.to_string())
    }
}

fn attributes(request: &ScanRequest) -> String {
    match extract_attributes(&request.quals) {
        ExtractedAttributes::Supported(columns) if columns.is_empty() => "none".to_string(),
        ExtractedAttributes::Supported(columns) => columns
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
        ExtractedAttributes::Unsupported => "unsupported".to_string(),
    }
}
