#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod cli;
pub mod config;
pub mod display;
pub mod engines;
pub mod error;
pub mod export;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod session;
pub(crate) mod transformers;

pub use error::SearchError;
pub use models::{FeatureRecord, NormalizedResult, RawHit};
pub use session::SearchSession;
