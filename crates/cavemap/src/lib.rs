//! cavemap - cellular-automaton cave map generator
//!
//! This crate is the user-facing layer on top of `cavemap_automata`:
//! - `cli` - positional argument parsing into a [`CaveConfig`](cavemap_automata::CaveConfig)
//! - `render` - rule summary, text map and JSON report output
//!
//! The `cavemap` binary wires these together with a clock-seeded RNG.

pub mod cli;
pub mod render;

pub use cli::{Cli, CliError, OutputFormat, USAGE};
pub use render::{render_json, render_map, render_output, rule_summary, rule_summary_lines};

// Re-export the lower layers
pub use cavemap_automata;
pub use cavemap_core;
