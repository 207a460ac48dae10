use crate::link::{Decoder, EmptyPayloadPolicy};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/thunder/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThunderConfig {
    /// What an `AAZZ` link (envelope with nothing inside) decodes to:
    /// "accept" gives an empty URL, "reject" reports invalid content.
    #[serde(default)]
    pub empty_payload: EmptyPayloadPolicy,
    /// Extension appended to save paths that lack it.
    #[serde(default = "default_save_extension")]
    pub save_extension: String,
    /// Do not hand decoded payloads that are not absolute URLs to the browser.
    #[serde(default = "default_skip_non_url_on_open")]
    pub skip_non_url_on_open: bool,
}

fn default_save_extension() -> String {
    "txt".to_string()
}

fn default_skip_non_url_on_open() -> bool {
    true
}

impl Default for ThunderConfig {
    fn default() -> Self {
        Self {
            empty_payload: EmptyPayloadPolicy::default(),
            save_extension: default_save_extension(),
            skip_non_url_on_open: default_skip_non_url_on_open(),
        }
    }
}

impl ThunderConfig {
    pub fn decoder(&self) -> Decoder {
        Decoder::new(self.empty_payload)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("thunder")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ThunderConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ThunderConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ThunderConfig = toml::from_str(&data)?;
    Ok(cfg)
}
