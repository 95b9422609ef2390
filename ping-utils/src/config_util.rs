use configrs::config::Config as configrs;
use serde::Deserialize;
use std::{
    fmt::Debug,
    path::{Path, PathBuf},
};

use anyhow::anyhow;

const ERROR_PREFIX: &str = "[ping-utils]";

/// get config from env variables, overlaid with .env file in workspace root for local dev.
pub fn get_config<CFG>(prefix: &'static str) -> Result<CFG, anyhow::Error>
where
    CFG: for<'de> Deserialize<'de> + Debug + Clone,
{
    let mut cfg = configrs::new().with_env_prefix(prefix);

    if cfg!(debug_assertions) {
        let dev_config_file = find_workspace_root()?.join(".env");
        if dev_config_file.exists() {
            cfg = cfg.with_overwrite().with_env(&dev_config_file);
        }
    }

    cfg.build::<CFG>().map_err(|err| {
        anyhow!(
            "{} failed building config with prefix {}: {}",
            ERROR_PREFIX,
            prefix,
            err
        )
    })
}

pub fn find_workspace_root() -> Result<PathBuf, anyhow::Error> {
    let mut current_dir = std::env::current_dir()?;

    loop {
        if is_workspace_root(&current_dir) {
            return Ok(current_dir);
        }

        // move up to parent directory
        if !current_dir.pop() {
            return Err(anyhow!("{} workspace root not found", ERROR_PREFIX));
        }
    }
}

fn is_workspace_root(dir: &Path) -> bool {
    if dir.join(".git").is_dir() {
        return true;
    }

    let cargo_toml = dir.join("Cargo.toml");
    if cargo_toml.is_file() {
        if let Ok(contents) = std::fs::read_to_string(cargo_toml) {
            if contents.contains("[workspace]") {
                return true;
            }
        }
    }

    false
}
