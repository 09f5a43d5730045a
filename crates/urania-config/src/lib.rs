use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use urania::rendering::WheelStyle;
use urania::time::ResolverSettings;

/// Relative locations tried for `configs/chart.toml`, from the workspace root
/// and from a crate directory.
pub const CONFIG_PATHS: [&str; 2] = ["configs/chart.toml", "../../configs/chart.toml"];

/// Everything `chart.toml` can set. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub resolver: ResolverSettings,
    pub wheel: WheelStyle,
}

impl ChartConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        self.resolver
            .validate()
            .map_err(|e| anyhow::anyhow!("[resolver] fallback_timezone: {e}"))?;
        self.wheel.validate().map_err(|e| anyhow::anyhow!("[wheel] {e}"))?;
        Ok(())
    }
}

/// Parse and validate a config document.
pub fn from_toml_str(text: &str) -> anyhow::Result<ChartConfig> {
    let config: ChartConfig =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse chart.toml: {e}"))?;
    config.validate()?;
    Ok(config)
}

/// Try the common relative paths for `configs/chart.toml`. `Ok(None)` when
/// none of them exists.
pub fn read_config_toml_text() -> anyhow::Result<Option<(PathBuf, String)>> {
    for p in &CONFIG_PATHS {
        let path = Path::new(p);
        if !path.exists() {
            continue;
        }
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
        return Ok(Some((path.to_path_buf(), text)));
    }
    Ok(None)
}

pub fn load_from_path(path: &Path) -> anyhow::Result<ChartConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    from_toml_str(&text).map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
}

/// Load `configs/chart.toml`, falling back to defaults when it is missing.
pub fn load_chart_config() -> anyhow::Result<ChartConfig> {
    match read_config_toml_text()? {
        Some((path, text)) => {
            log::info!("Loaded chart config from {}", path.display());
            from_toml_str(&text).map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
        }
        None => {
            log::debug!("No chart.toml found in {:?}; using defaults", CONFIG_PATHS);
            Ok(ChartConfig::default())
        }
    }
}
