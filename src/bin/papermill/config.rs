use std::env;
use std::path::PathBuf;

use papermill::config::{read_config, Config};

use crate::CFG_FILE_NAME;

// Lookup order: next to the executable, then the working directory, then
// the user config directory
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![];

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join(CFG_FILE_NAME));
        }
    }
    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir.join(CFG_FILE_NAME));
    }
    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir.join(CFG_FILE_NAME));
    }

    candidates
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path {
        Some(path) => path,
        None => match config_candidates().into_iter().find(|p| p.exists()) {
            Some(path) => path,
            None => return Err("Could not find papermill configuration".to_string()),
        },
    };

    println!("Reading config from {}", config_path.display());
    let config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => return Err(e.to_string()),
    };

    match config.log {
        Some(ref log) => match log.location {
            Some(ref location) => println!("Log enabled. Files will be written in {}", location.display()),
            None => println!("Log enabled. Using console"),
        },
        None => println!("Log disabled. Using default console logger"),
    }

    Ok(config)
}
