use anyhow::{bail, Context, Result};
use holdem_shared::MAX_SEATS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::IsTerminal;
use std::path::Path;

/// When to color human-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Tool configuration persisted as TOML.
///
/// Fields:
/// - seats: table size used when dealing demo snapshots
/// - color: auto/always/never coloring of `show` output
/// - default_viewer: seat to redact for when `--viewer` is not given
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub seats: usize,
    pub color: ColorMode,
    pub default_viewer: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seats: MAX_SEATS,
            color: ColorMode::Auto,
            default_viewer: None,
        }
    }
}

impl Config {
    /// Load configuration from `path`. If the file does not exist, create it
    /// with defaults and return them.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading config file '{}'", path.display()))?;
            let cfg: Config = toml::from_str(&s)
                .with_context(|| format!("parsing TOML config '{}'", path.display()))?;
            cfg.validate()
                .with_context(|| format!("checking config '{}'", path.display()))?;
            Ok(cfg)
        } else {
            let cfg = Config::default();
            cfg.save(path)?;
            tracing::debug!(config = %path.display(), "wrote default config");
            Ok(cfg)
        }
    }

    /// Table size must be between 1 and [`MAX_SEATS`]; a default viewer must sit at it.
    pub fn validate(&self) -> Result<()> {
        if self.seats == 0 || self.seats > MAX_SEATS {
            bail!("seats = {} is outside 1..={}", self.seats, MAX_SEATS);
        }
        if let Some(viewer) = self.default_viewer {
            if viewer >= self.seats {
                bail!("default_viewer = {} is not a seat at a table of {}", viewer, self.seats);
            }
        }
        Ok(())
    }

    /// Save the current config back to `path` (overwrites).
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating config directory '{}'", parent.display()))?;
            }
        }
        let toml_text =
            toml::to_string_pretty(&self).with_context(|| "serializing config to TOML")?;
        fs::write(path, toml_text)
            .with_context(|| format!("writing config to '{}'", path.display()))?;
        Ok(())
    }
}
