use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use spdlog::{info, warn};

use papermill::generator;
use papermill::logger::configure_logger;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "papermill.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run papermill --help");
            return Ok(());
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Building {} into {}", config.site.title, config.paths.output_dir.display());

    let written = generator::generate(&config)?;
    info!("Build finished. {} pages written", written);

    Ok(())
}
