//! Configuration file loading

use std::fs;
use std::path::Path;

use anyhow::Context;
use dg_core::GeneratorConfig;

/// Read a JSON configuration file; missing keys take their defaults
pub fn load_config(path: &Path) -> anyhow::Result<GeneratorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read config file '{}'", path.display()))?;
    let config: GeneratorConfig = serde_json::from_str(&text)
        .with_context(|| format!("invalid config file '{}'", path.display()))?;
    Ok(config)
}
