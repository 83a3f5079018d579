use std::path::PathBuf;

use anyhow::{Result, bail};
use figment::{
    Figment,
    providers::{Format, Json, Serialized, Toml, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::cli::CliArgs;
use crate::engines::fme::DEFAULT_BASE_URL;
use crate::pipeline::SortKey;
use crate::session::ViewMode;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const PAGE_SIZE_RANGE: (usize, usize) = (10, 100);
pub const DESCRIPTION_LENGTH_RANGE: (usize, usize) = (50, 500);

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Api {
    /// Search endpoint, queried with `search_term` and `token`
    pub base_url: String,
    /// Static token sent in the query string
    pub token: String,
    /// Request timeout in seconds, transport default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Display {
    /// Results per page (10 - 100)
    pub page_size: usize,
    /// Characters of a collapsed description (50 - 500)
    pub description_length: usize,
    pub view: ViewMode,
    pub sort: SortKey,
    pub language: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub api: Api,
    pub display: Display,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Api {
                base_url: DEFAULT_BASE_URL.to_string(),
                token: String::new(),
                timeout: None,
            },
            display: Display {
                page_size: 40,
                description_length: 100,
                view: ViewMode::Grid,
                sort: SortKey::Relevance,
                language: "en".to_string(),
            },
        }
    }
}

impl Config {
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Pulls numeric settings back into their supported ranges.
    pub fn clamp(mut self) -> Self {
        self.display.page_size = clamp_setting(
            "page_size",
            self.display.page_size,
            PAGE_SIZE_RANGE,
        );
        self.display.description_length = clamp_setting(
            "description_length",
            self.display.description_length,
            DESCRIPTION_LENGTH_RANGE,
        );
        self
    }
}

fn clamp_setting(name: &str, value: usize, (min, max): (usize, usize)) -> usize {
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{} = {} is outside {}..={}, using {}", name, value, min, max, clamped);
    }
    clamped
}

fn config_file(path: PathBuf) -> Result<Figment> {
    let figment = Figment::new();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(figment.merge(Toml::file(path))),
        Some("json") => Ok(figment.merge(Json::file(path))),
        Some("yaml") | Some("yml") => Ok(figment.merge(Yaml::file(path))),
        _ => bail!(
            "Cannot identify config file type of {}. Must be .toml, .json or .yaml",
            path.display()
        ),
    }
}

/// Defaults, then the config file, then CLI arguments and `LS_*` variables.
pub fn load_config(args: &CliArgs) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    let config_path = PathBuf::from(
        args.config
            .clone()
            .unwrap_or(DEFAULT_CONFIG_PATH.to_string()),
    );

    if config_path.exists() {
        log::info!("Config file found: {}", config_path.display());
        figment = figment.merge(config_file(config_path)?);
    } else if config_path.to_str() != Some(DEFAULT_CONFIG_PATH) {
        bail!("Config file not found: {}", config_path.display());
    }

    extract(figment.merge(Serialized::defaults(args.as_overrides())))
}

pub(crate) fn extract(figment: Figment) -> Result<Config> {
    let config: Config = figment.extract()?;
    let config = config.clamp();

    log::debug!("Loaded config: {:#?}", config);
    Ok(config)
}
