//! Command-line parsing
//!
//! Arguments are positional: grid width, grid height, fill percentage, then
//! one or more `r1 r2 repeat` triples. Everything is validated before any
//! generation happens.

use cavemap_automata::{CaveConfig, FillProbability, GenerationRule, RuleSet};
use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Positional argument synopsis, shown after the program name in usage messages.
pub const USAGE: &str = "width height fillPercent (r1_threshold r2_threshold repeatCount)+";

/// Errors that can occur while turning arguments into a [`CaveConfig`]
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed or missing arguments, including a fill outside `0..=100`
    #[error(transparent)]
    Parse(#[from] clap::Error),
    #[error("incomplete rule: {trailing} value(s) left over after the last full triple")]
    IncompleteRule { trailing: usize },
    #[error("rule {rule}: repeat count must not be negative, got {value}")]
    NegativeRepeat { rule: usize, value: i32 },
}

/// Output format for the generated cave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Rule summary followed by the `#`/`.` map
    #[default]
    Text,
    /// One JSON document with the config, summary lines and map rows
    Json,
}

/// Generate a cave map with cellular-automaton smoothing
#[derive(Debug, Parser)]
#[command(
    name = "cavemap",
    version,
    about,
    long_about = None,
    override_usage = "cavemap width height fillPercent (r1_threshold r2_threshold repeatCount)+"
)]
pub struct Cli {
    /// Grid width, border included
    pub width: u32,

    /// Grid height, border included
    pub height: u32,

    /// Chance in percent that an interior cell starts as wall
    #[arg(value_parser = parse_fill)]
    pub fill_percent: FillProbability,

    /// Rule triples: r1 threshold, r2 threshold (negative disables it), repeat count
    #[arg(
        required = true,
        num_args = 3..,
        allow_negative_numbers = true,
        value_name = "RULE"
    )]
    pub rules: Vec<i32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Parse from an argument iterator whose first item is the program name.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    /// Validate the parsed arguments into a generation config.
    pub fn to_config(&self) -> Result<CaveConfig, CliError> {
        let trailing = self.rules.len() % 3;
        if trailing != 0 {
            return Err(CliError::IncompleteRule { trailing });
        }

        let rules = self
            .rules
            .chunks_exact(3)
            .enumerate()
            .map(|(idx, triple)| -> Result<GenerationRule, CliError> {
                let repeat_count = u32::try_from(triple[2]).map_err(|_| CliError::NegativeRepeat {
                    rule: idx + 1,
                    value: triple[2],
                })?;
                Ok(GenerationRule::new(triple[0], triple[1], repeat_count))
            })
            .collect::<Result<RuleSet, CliError>>()?;

        Ok(CaveConfig {
            width: self.width,
            height: self.height,
            fill: self.fill_percent,
            rules,
        })
    }
}

fn parse_fill(arg: &str) -> Result<FillProbability, String> {
    let value: i64 = arg.parse().map_err(|e| format!("{e}"))?;
    FillProbability::try_from(value).map_err(|e| e.to_string())
}
