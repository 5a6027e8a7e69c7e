use clap::Parser;
use cornerpick::{count_from_signed, CornerResult, ExtractConfig, OwnedResponse, ScoredCorner};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Cornerpick CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    response_path: String,
    output_path: Option<String>,
    count: Option<i64>,
    threshold: f64,
    parallel: bool,
    with_scores: bool,
}

impl Default for Config {
    fn default() -> Self {
        let cfg = ExtractConfig::<f64>::default();
        Self {
            response_path: String::new(),
            output_path: None,
            count: None,
            threshold: cfg.threshold,
            parallel: cfg.parallel,
            with_scores: false,
        }
    }
}

impl Config {
    fn extract_config(&self) -> ExtractConfig<f64> {
        ExtractConfig {
            count: self.count.and_then(count_from_signed),
            threshold: self.threshold,
            parallel: self.parallel,
        }
    }
}

#[derive(Debug, Serialize)]
struct CornerRecord {
    row: usize,
    col: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
}

impl CornerRecord {
    fn new(corner: ScoredCorner<f64>, with_score: bool) -> Self {
        Self {
            row: corner.coord.row,
            col: corner.coord.col,
            score: with_score.then_some(corner.score),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    shape: [usize; 2],
    corners: Option<Vec<CornerRecord>>,
}

/// Extracts corners from nested response rows as configured.
fn run(config: &Config, rows: Vec<Vec<f64>>) -> CornerResult<Output> {
    let response = OwnedResponse::from_rows(rows)?;
    let corners = config.extract_config().try_extract_scored(response.view())?;
    Ok(Output {
        shape: [response.rows(), response.cols()],
        corners: corners.map(|corners| {
            corners
                .into_iter()
                .map(|corner| CornerRecord::new(corner, config.with_scores))
                .collect()
        }),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("cornerpick=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.response_path.is_empty() {
        return Err("response_path must be set in the config".into());
    }

    let response_text = fs::read_to_string(&config.response_path)?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&response_text)?;
    let output = run(&config, rows)?;
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
