use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use vaultrun_core::GameConfig;

/// Load balance tunables, honouring a `VAULTRUN_CONFIG` JSON override.
pub fn load_config() -> Result<GameConfig> {
    let Some(path) = std::env::var_os("VAULTRUN_CONFIG") else {
        return Ok(GameConfig::default());
    };
    let path = PathBuf::from(path);
    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let config =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}
