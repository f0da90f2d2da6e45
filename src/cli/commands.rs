use crate::config::{WireConfig, DEFAULT_CONFIG_FILE};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Compile-time dependency wiring for Rust services
#[derive(Parser, Debug)]
#[command(
    name = "diwire",
    about = "Generate a lazy-singleton dependency context from annotated service files",
    version,
    author,
    long_about = "diwire scans service directories for annotated Rust service files, links \
                  their dependencies by name, rejects cyclic graphs and writes a context \
                  module with one lazily built accessor per service."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate the context module",
        long_about = "Analyzes every service directory and writes the context module.\n\n\
                      Examples:\n  \
                      diwire build\n  \
                      diwire build --service-dir services --context-dir src/generated\n  \
                      diwire build --alias \"scalarService=YourFunkyDependency2('ns')\""
    )]
    Build(BuildArgs),

    #[command(
        about = "Validate services without writing anything",
        long_about = "Runs discovery, extraction and the cycle check, then reports the result.\n\n\
                      Examples:\n  \
                      diwire check\n  \
                      diwire check --config ci/diwire.toml"
    )]
    Check(BuildArgs),

    #[command(
        about = "Print the dependency graph",
        long_about = "Prints the linked dependency graph, aliases included.\n\n\
                      Examples:\n  \
                      diwire graph\n  \
                      diwire graph --format json"
    )]
    Graph(GraphArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "Config file (defaults to ./diwire.toml when present)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "DIR", help = "Directory service paths are relative to")]
    pub base_dir: Option<PathBuf>,

    #[arg(long, value_name = "DIR", help = "Directory the context is written to")]
    pub context_dir: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "File name of the generated context")]
    pub context_name: Option<String>,

    #[arg(
        short = 's',
        long = "service-dir",
        value_name = "DIR",
        help = "Service directory to scan (repeatable, replaces configured ones)"
    )]
    pub service_dirs: Vec<PathBuf>,

    #[arg(
        short = 'a',
        long = "alias",
        value_name = "NAME=SIGNATURE",
        value_parser = parse_alias,
        help = "Derived service, e.g. \"scalarService=YourFunkyDependency2('ns')\" (repeatable)"
    )]
    pub aliases: Vec<(String, String)>,
}

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

impl BuildArgs {
    /// Loads the config file (explicit, or the default one in `cwd` when it
    /// exists), applies the flags on top, anchors `base_dir` at `cwd` and
    /// validates the result.
    pub fn resolve_config(&self, cwd: &Path) -> Result<WireConfig> {
        let mut config = match &self.config {
            Some(path) => WireConfig::load(&cwd.join(path))?,
            None => {
                let default = cwd.join(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    WireConfig::load(&default)?
                } else {
                    WireConfig::default()
                }
            }
        };

        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(context_dir) = &self.context_dir {
            config.context_dir = Some(context_dir.clone());
        }
        if let Some(context_name) = &self.context_name {
            config.context_name = context_name.clone();
        }
        if !self.service_dirs.is_empty() {
            config.service_dirs = self.service_dirs.clone();
        }
        for (name, signature) in &self.aliases {
            config.aliases.insert(name.clone(), signature.clone());
        }

        config.base_dir = cwd.join(&config.base_dir);
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn parse_alias(s: &str) -> Result<(String, String), String> {
    let (name, signature) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid alias '{}'. Expected NAME=Base(arg, ...)", s))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("Invalid alias '{}': name is empty", s));
    }
    Ok((name.to_string(), signature.trim().to_string()))
}
