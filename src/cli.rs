use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use strum_macros::Display;

use crate::pipeline::SortKey;
use crate::session::ViewMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Result cards with header and pagination
    #[default]
    Full,
    /// Result count only, results are published as feature records
    Lite,
}

#[derive(Parser, Debug)]
#[command(version, about = "Search maps and layers on an FME search endpoint")]
pub struct CliArgs {
    /// Search term
    #[arg(required_unless_present = "print_config")]
    pub query: Vec<String>,

    /// Search endpoint URL
    #[arg(short, long, env = "LS_BASE_URL")]
    pub base_url: Option<String>,

    /// Endpoint token
    #[arg(short, long, env = "LS_TOKEN")]
    pub token: Option<String>,

    /// Request timeout in seconds (default: transport default)
    #[arg(long, env = "LS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Results per page, 10 - 100 (default: 40)
    #[arg(long, env = "LS_PAGE_SIZE")]
    pub page_size: Option<usize>,

    /// Collapsed description length, 50 - 500 (default: 100)
    #[arg(long, env = "LS_DESCRIPTION_LENGTH")]
    pub description_length: Option<usize>,

    /// Card layout (default: grid)
    #[arg(long, env = "LS_VIEW")]
    pub view: Option<ViewMode>,

    /// Result order (default: relevance)
    #[arg(short, long, env = "LS_SORT")]
    pub sort: Option<SortKey>,

    /// Interface language (default: en)
    #[arg(long, env = "LS_LANGUAGE")]
    pub language: Option<String>,

    /// Page to show
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Show the full description of these results (1-based, repeatable)
    #[arg(short, long)]
    pub expand: Vec<usize>,

    /// Front end to run
    #[arg(short, long, value_enum, default_value_t = Mode::Full, env = "LS_MODE")]
    pub mode: Mode,

    /// Write the results as feature records to this file ("-" for stdout)
    #[arg(short = 'o', long, env = "LS_EXPORT")]
    pub export: Option<PathBuf>,

    /// Config file path (default: "config.toml")
    #[arg(short, long, env = "LS_CONFIG")]
    pub config: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Serialize, Debug, Default)]
pub struct ApiOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

#[derive(Serialize, Debug, Default)]
pub struct DisplayOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// The subset of the config given on the command line.
#[derive(Serialize, Debug, Default)]
pub struct Overrides {
    pub api: ApiOverrides,
    pub display: DisplayOverrides,
}

impl CliArgs {
    pub fn query(&self) -> String {
        self.query.join(" ")
    }

    pub fn as_overrides(&self) -> Overrides {
        Overrides {
            api: ApiOverrides {
                base_url: self.base_url.clone(),
                token: self.token.clone(),
                timeout: self.timeout,
            },
            display: DisplayOverrides {
                page_size: self.page_size,
                description_length: self.description_length,
                view: self.view,
                sort: self.sort,
                language: self.language.clone(),
            },
        }
    }
}
