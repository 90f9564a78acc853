use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::thousands::DEFAULT_SEPARATOR;

/// User preferences loaded from `~/.config/strutil/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrutilConfig {
    /// URI-decode query values unless `--raw` is given.
    pub decode_by_default: bool,
    /// Grouping separator used by `strutil group`.
    pub separator: char,
}

impl Default for StrutilConfig {
    fn default() -> Self {
        Self {
            decode_by_default: false,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("strutil")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<StrutilConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = StrutilConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<StrutilConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: StrutilConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = StrutilConfig::default();
        assert!(!cfg.decode_by_default);
        assert_eq!(cfg.separator, ',');
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = StrutilConfig {
            decode_by_default: true,
            separator: '.',
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: StrutilConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: StrutilConfig = toml::from_str("decode_by_default = true").unwrap();
        assert!(cfg.decode_by_default);
        assert_eq!(cfg.separator, ',');

        let cfg: StrutilConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, StrutilConfig::default());
    }

    #[test]
    fn config_toml_rejects_multichar_separator() {
        assert!(toml::from_str::<StrutilConfig>("separator = \"ab\"").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "separator = \"_\"").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.separator, '_');
        assert!(!cfg.decode_by_default);
    }

    #[test]
    fn load_from_invalid_file_names_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "separator = 5").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parse config"));
    }
}
