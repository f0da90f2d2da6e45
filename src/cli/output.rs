//! Output formatting for `diwire graph`
//!
//! JSON and YAML serialize the graph as a map from service name to descriptor,
//! in graph order. The human format lists each service with its dependency
//! tokens and marks literals and unresolved names.

use anyhow::{Context, Result};
use std::fmt::Write;

use crate::context::Argument;
use crate::graph::ServiceGraph;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_graph(&self, graph: &ServiceGraph) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(graph)
                .context("Failed to serialize dependency graph to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(graph).context("Failed to serialize dependency graph to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(graph)),
        }
    }

    fn format_human(&self, graph: &ServiceGraph) -> String {
        if graph.is_empty() {
            return "No services found\n".to_string();
        }

        let mut out = String::new();
        for service in graph.services() {
            if service.name == service.type_name {
                let _ = write!(out, "{}", service.name);
            } else {
                let _ = write!(out, "{}: {}", service.name, service.type_name);
            }
            let _ = writeln!(
                out,
                " [{}] {}",
                service.style,
                service.source_path.display()
            );

            for token in &service.dependencies {
                let note = match Argument::classify(token) {
                    Argument::Literal(_) => " (literal)",
                    Argument::Reference(name) if !graph.contains(name) => " (unknown)",
                    Argument::Reference(_) => "",
                };
                let _ = writeln!(out, "  - {}{}", token, note);
            }
        }

        let _ = writeln!(out, "\n{} service(s)", graph.len());
        out
    }
}
