use diwire::cli::commands::{BuildArgs, CliArgs, Commands, GraphArgs};
use diwire::cli::output::{OutputFormat, OutputFormatter};
use diwire::config::WireConfig;
use diwire::fs::RealFileSystem;
use diwire::pipeline::ContextBuilder;
use diwire::progress::LoggingHandler;
use diwire::util::{init_logging, LoggingConfig};
use diwire::{NAME, VERSION};

use clap::Parser;
use std::env;
use std::process;
use tracing::{debug, error};

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_flags(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    ));

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Build(build_args) => handle_build(build_args, args.quiet),
        Commands::Check(check_args) => handle_check(check_args, args.quiet),
        Commands::Graph(graph_args) => handle_graph(graph_args),
    };

    process::exit(exit_code);
}

fn load_config(args: &BuildArgs) -> Option<WireConfig> {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            error!("Failed to determine working directory: {}", e);
            return None;
        }
    };

    match args.resolve_config(&cwd) {
        Ok(config) => {
            debug!(?config, "Resolved configuration");
            Some(config)
        }
        Err(e) => {
            error!("Configuration error: {:#}", e);
            None
        }
    }
}

fn builder(config: WireConfig) -> ContextBuilder<RealFileSystem> {
    ContextBuilder::new(config, RealFileSystem::new()).with_progress(Box::new(LoggingHandler))
}

fn handle_build(args: &BuildArgs, quiet: bool) -> i32 {
    let Some(config) = load_config(args) else {
        return 1;
    };

    match builder(config).build() {
        Ok(path) => {
            if !quiet {
                println!("{}", path.display());
            }
            0
        }
        Err(e) => {
            error!("Build failed: {}", e);
            1
        }
    }
}

fn handle_check(args: &BuildArgs, quiet: bool) -> i32 {
    let Some(config) = load_config(args) else {
        return 1;
    };

    match builder(config).analyze() {
        Ok(graph) => {
            if !quiet {
                println!("OK: {} service(s), no dependency cycles", graph.len());
            }
            0
        }
        Err(e) => {
            error!("Check failed: {}", e);
            1
        }
    }
}

fn handle_graph(args: &GraphArgs) -> i32 {
    let Some(config) = load_config(&args.build) else {
        return 1;
    };

    let graph = match builder(config).analyze() {
        Ok(graph) => graph,
        Err(e) => {
            error!("Analysis failed: {}", e);
            return 1;
        }
    };

    let formatter = OutputFormatter::new(OutputFormat::from(args.format));
    match formatter.format_graph(&graph) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            0
        }
        Err(e) => {
            error!("Failed to format graph: {}", e);
            1
        }
    }
}
