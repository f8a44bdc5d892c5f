use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use surfconv::settings::{load_settings_from_file, SurfboardSettings};
use surfconv::convert;

/// Convert a list of vmess/trojan/ss/vless links into a Surfboard configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one subscription link per line
    #[arg(short, long, value_name = "FILE", default_value = "node.txt")]
    input: PathBuf,

    /// Where to write the generated configuration
    #[arg(short, long, value_name = "OUTPUT_FILE", default_value = "dist/index.html")]
    output: PathBuf,

    /// Path to a TOML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => load_settings_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => SurfboardSettings::default(),
    };

    let content = if args.input.exists() {
        fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read {}", args.input.display()))?
    } else {
        warn!(
            "Input file {} not found, generating a configuration without nodes",
            args.input.display()
        );
        String::new()
    };

    let conversion = convert(&content, &settings);

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(&args.output, &conversion.document)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        "Wrote Surfboard configuration to {} ({} node(s))",
        args.output.display(),
        conversion.nodes.len()
    );

    Ok(())
}
