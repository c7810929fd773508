//! Flexbox and box-model style primitives.
//!
//! Everything here produces plain [`PropertyMapping`] values with camelCase
//! property names (plus literal `-webkit-` keys), ready for whatever registers
//! them as styles.

pub mod box_model;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod presets;
pub mod style;
pub mod vendor;

pub use box_model::{border, margin, normalize, padding, EdgeValue, ResolvedBox, Shorthand};
pub use error::{AppError, AppResult, StyleError, StyleResult};
pub use style::{compose, PropertyMapping, PropertyValue};

use clap::Parser;

/// Entrypoint used by the `csx` binary.
pub fn run() -> AppResult<()> {
    logging::init();
    let cli = cli::Cli::parse();
    let config = config::load_config_or_default();
    tracing::debug!(?config, "starting csx");

    let output = cli::execute(&cli, &config)?;
    println!("{output}");
    Ok(())
}
