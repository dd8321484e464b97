use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct SiteInfo {
    pub title: String,
    pub url: String,
}

#[derive(Deserialize)]
pub struct Paths {
    pub template_dir: PathBuf,
    pub posts_dir: PathBuf,
    pub output_dir: PathBuf,
    pub authors_file: PathBuf,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub site: SiteInfo,
    pub paths: Paths,
    pub log: Option<Log>,
}

// Paths in the config may be anchored to the executable directory with a
// ${exe_dir} prefix
fn expand_path(path: PathBuf) -> PathBuf {
    let str_path = match path.to_str() {
        Some(s) if s.starts_with("${exe_dir}") => s.to_string(),
        _ => return path,
    };

    let cur_exe = env::current_exe().unwrap();
    let exe_dir = cur_exe.parent().unwrap().to_str().unwrap();
    PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    let mut cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        template_dir: expand_path(cfg.paths.template_dir),
        posts_dir: expand_path(cfg.paths.posts_dir),
        output_dir: expand_path(cfg.paths.output_dir),
        authors_file: expand_path(cfg.paths.authors_file),
    };

    Ok(cfg)
}
