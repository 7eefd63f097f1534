use clap::Parser;
use edgekit::io::{load_gray_image, save_gray_image};
use edgekit::{edge_pixel_count, DetectorKind, EdgeDetector, DEFAULT_AMPLIFIER, MAX_SAMPLE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "edgekit CLI (JSON config driven)")]
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
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum DetectorConfig {
    Difference,
    Roberts,
    #[default]
    Sobel,
    Prewitt,
}

impl From<DetectorConfig> for DetectorKind {
    fn from(value: DetectorConfig) -> Self {
        match value {
            DetectorConfig::Difference => DetectorKind::Difference,
            DetectorConfig::Roberts => DetectorKind::Roberts,
            DetectorConfig::Sobel => DetectorKind::Sobel,
            DetectorConfig::Prewitt => DetectorKind::Prewitt,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ThresholdConfig {
    value: u8,
    #[serde(default = "default_high")]
    high: u8,
    #[serde(default)]
    low: u8,
}

fn default_high() -> u8 {
    MAX_SAMPLE
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    input_path: String,
    output_path: String,
    detector: DetectorConfig,
    amplifier: f64,
    parallel: bool,
    threshold: Option<ThresholdConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: String::new(),
            output_path: String::new(),
            detector: DetectorConfig::default(),
            amplifier: DEFAULT_AMPLIFIER,
            parallel: false,
            threshold: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    detector: String,
    amplifier: f64,
    width: usize,
    height: usize,
    /// Interior samples with a nonzero detector response, before thresholding.
    edge_pixels: usize,
    output_path: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("edgekit=info".parse()?))
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
    if config.input_path.is_empty() || config.output_path.is_empty() {
        return Err("input_path and output_path must be set in the config".into());
    }

    let kind = DetectorKind::from(config.detector);
    let detector = kind.build(config.amplifier, config.parallel)?;

    let grid = load_gray_image(&config.input_path)?;
    let mut edges = detector.detect(&grid);
    let edge_pixels = edge_pixel_count(&edges);
    if let Some(th) = &config.threshold {
        edges = edges.threshold_with(th.value, th.high, th.low);
    }
    save_gray_image(&edges, &config.output_path)?;
    tracing::info!(detector = %kind, path = %config.output_path, "edges written");

    let summary = Summary {
        detector: kind.to_string(),
        amplifier: detector.amplifier(),
        width: edges.width(),
        height: edges.height(),
        edge_pixels,
        output_path: config.output_path,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
