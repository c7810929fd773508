use clap::{Parser, Subcommand};

use crate::box_model::{EdgeValue, BORDER, MARGIN, PADDING};
use crate::config::StyleConfig;
use crate::error::AppResult;
use crate::presets;
use crate::style::PropertyMapping;
use crate::vendor::VendorPolicy;

#[derive(Debug, Parser)]
#[command(name = "csx", version, about = "Print flexbox and box-model style mappings as JSON")]
pub struct Cli {
    /// Drop `-webkit-` aliases regardless of config.json.
    #[arg(long, global = true)]
    pub strip_prefixes: bool,
    /// Single-line JSON output.
    #[arg(long, global = true)]
    pub compact: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List preset names.
    Presets,
    /// Print one preset.
    Preset { name: String },
    /// Merge presets left to right.
    Compose {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Resolve 1, 2 or 4 padding values. Bare numbers are pixels.
    Padding {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    Margin {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    Border {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
}

/// A finite number is a pixel quantity; everything else is verbatim text.
pub fn parse_edge(raw: &str) -> EdgeValue {
    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => EdgeValue::Number(number),
        _ => EdgeValue::Text(raw.to_string()),
    }
}

fn parse_edges(values: &[String]) -> Vec<EdgeValue> {
    values.iter().map(|raw| parse_edge(raw)).collect()
}

/// Runs `cli` and returns what should be printed.
pub fn execute(cli: &Cli, config: &StyleConfig) -> AppResult<String> {
    tracing::debug!(command = ?cli.command, "executing command");
    let mapping = match &cli.command {
        Command::Presets => return Ok(presets::names().collect::<Vec<_>>().join("\n")),
        Command::Preset { name } => presets::require(name)?.clone(),
        Command::Compose { names } => {
            let parts = names
                .iter()
                .map(|name| presets::require(name))
                .collect::<Result<Vec<_>, _>>()?;
            crate::style::compose(parts)
        }
        Command::Padding { values } => PADDING.call_slice(&parse_edges(values))?,
        Command::Margin { values } => MARGIN.call_slice(&parse_edges(values))?,
        Command::Border { values } => BORDER.call_slice(&parse_edges(values))?,
    };
    render(&mapping, cli, config)
}

fn render(mapping: &PropertyMapping, cli: &Cli, config: &StyleConfig) -> AppResult<String> {
    let policy = if cli.strip_prefixes {
        VendorPolicy::Strip
    } else {
        config.vendor_prefixes
    };
    let mapping = policy.apply(mapping);
    let json = if config.pretty && !cli.compact {
        serde_json::to_string_pretty(&mapping)?
    } else {
        serde_json::to_string(&mapping)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn run(args: &[&str]) -> AppResult<String> {
        let cli = Cli::try_parse_from(std::iter::once("csx").chain(args.iter().copied()))
            .expect("arguments should parse");
        let config = StyleConfig {
            pretty: false,
            ..StyleConfig::default()
        };
        execute(&cli, &config)
    }

    #[test]
    fn parse_edge_treats_finite_numbers_as_pixels() {
        assert_eq!(parse_edge("5"), EdgeValue::Number(5.0));
        assert_eq!(parse_edge("-2.5"), EdgeValue::Number(-2.5));
        assert_eq!(parse_edge("1em"), EdgeValue::from("1em"));
        assert_eq!(parse_edge("inf"), EdgeValue::from("inf"));
    }

    #[test]
    fn padding_command_prints_resolved_edges() {
        let output = run(&["padding", "5", "1em", "0", "10%"]).unwrap();
        assert_eq!(
            output,
            r#"{"paddingTop":"5px","paddingRight":"1em","paddingBottom":"0px","paddingLeft":"10%"}"#
        );
    }

    #[test]
    fn margin_command_accepts_negative_values() {
        let output = run(&["margin", "-4"]).unwrap();
        assert!(output.contains(r#""marginLeft":"-4px""#));
    }

    #[test]
    fn three_values_are_an_invalid_argument() {
        let error = run(&["border", "1", "2", "3"]).unwrap_err();
        assert!(matches!(error, AppError::Style(style) if style.is_invalid_argument()));
    }

    #[test]
    fn preset_command_respects_strip_flag() {
        let output = run(&["preset", "centerCenter", "--strip-prefixes"]).unwrap();
        assert_eq!(
            output,
            r#"{"display":"flex","alignItems":"center","justifyContent":"center"}"#
        );
    }

    #[test]
    fn compose_command_merges_presets_in_order() {
        let output = run(&["compose", "horizontal", "vertical"]).unwrap();
        assert!(output.contains(r#""flexDirection":"column""#));
        assert!(!output.contains(r#""row""#));
    }

    #[test]
    fn unknown_preset_is_reported() {
        let error = run(&["preset", "sideways"]).unwrap_err();
        assert_eq!(error.to_string(), "unknown preset: sideways");
    }

    #[test]
    fn presets_command_lists_names() {
        let output = run(&["presets"]).unwrap();
        assert!(output.lines().any(|line| line == "newLayer"));
        assert_eq!(output.lines().count(), presets::names().count());
    }
}
