use derive_more::{Deref, From, Into};
use directories::ProjectDirs;
use palette::Srgba;
use rondel::{GlyphRef, Item, Label, Style};
use serde::Deserialize;
use serde_with::DeserializeFromStr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// A color written as `#rrggbb` or `#rrggbbaa` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, Deref, From, Into)]
pub struct HexColor(Srgba<f64>);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color '{0}': expected #rrggbb or #rrggbbaa")]
pub struct ColorParseError(String);

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ColorParseError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(bad)?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(bad());
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| bad())
        };
        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        let a = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self(Srgba::new(r, g, b, a)))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: HexColor,
    pub foreground: HexColor,
    pub border: HexColor,
    pub border_width: f64,
    pub labels_color: HexColor,
    pub labels_text_size: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let style = Style::default();
        Self {
            background: HexColor(style.background),
            foreground: HexColor(style.foreground),
            border: HexColor(style.border),
            border_width: style.border_width,
            labels_color: HexColor(style.labels_color),
            labels_text_size: style.labels_text_size,
        }
    }
}

impl From<&StyleConfig> for Style {
    fn from(cfg: &StyleConfig) -> Self {
        Self {
            background: cfg.background.0,
            foreground: cfg.foreground.0,
            border: cfg.border.0,
            border_width: cfg.border_width,
            labels_color: cfg.labels_color.0,
            labels_text_size: cfg.labels_text_size,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorSection {
    pub looped: bool,
    pub show_labels: bool,
    pub start_index: usize,
}

impl Default for SelectorSection {
    fn default() -> Self {
        Self {
            looped: false,
            show_labels: true,
            start_index: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    pub label: Label,
    pub glyph: GlyphRef,
}

impl ItemConfig {
    pub fn to_item(&self) -> Item {
        Item::new(self.label.clone(), self.glyph.clone())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RondelConfig {
    pub style: StyleConfig,
    pub selector: SelectorSection,
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "rondel", "rondel").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(path: PathBuf) -> Result<RondelConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("RONDEL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Load the user's config, falling back to the built-in demo set when the
/// file is missing, broken or lists no items.
pub fn load_or_default(path: PathBuf) -> RondelConfig {
    match load_config(path) {
        Ok(cfg) if !cfg.items.is_empty() => cfg,
        Ok(_) => {
            log::info!("config lists no items, using the built-in demo set");
            default_config()
        }
        Err(e) => {
            log::warn!("failed to load config ({e}), using the built-in demo set");
            default_config()
        }
    }
}

pub fn default_config() -> RondelConfig {
    config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()
        .and_then(|c| c.try_deserialize())
        .unwrap_or_else(|e| {
            log::error!("built-in default config is invalid: {e}");
            RondelConfig::default()
        })
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
