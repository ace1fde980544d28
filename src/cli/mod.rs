//! Script runner behind the `kgraph` binary.

pub mod commands;
pub mod script;

pub use commands::{execute, run_script, Output, ScriptRun};
pub use script::{parse_line, parse_script, Command};
