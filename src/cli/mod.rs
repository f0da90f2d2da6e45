pub mod commands;
pub mod output;

pub use commands::{BuildArgs, CliArgs, Commands, GraphArgs, OutputFormatArg};
pub use output::{OutputFormat, OutputFormatter};
