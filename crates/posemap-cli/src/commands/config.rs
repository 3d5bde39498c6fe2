use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use posemap_core::config::SampleConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit the evaluation-split defaults
    #[arg(long)]
    pub eval: bool,
}

/// Print or save a full default SampleConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = if args.eval {
        SampleConfig::eval()
    } else {
        SampleConfig::default()
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
