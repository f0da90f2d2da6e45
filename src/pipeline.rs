//! Context build pipeline
//!
//! Discovery, extraction, graph construction and the cycle check all run
//! before anything is rendered, and the artifact is only written once the
//! whole module has been rendered in memory. Any error therefore leaves the
//! output directory untouched.

use crate::config::WireConfig;
use crate::context::ContextEmitter;
use crate::descriptor::ServiceParser;
use crate::discovery::ServiceScanner;
use crate::error::{Result, WireError};
use crate::fs::FileSystem;
use crate::graph::{CycleFinder, GraphBuilder, ServiceGraph};
use crate::progress::{ProgressEvent, ProgressHandler};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

pub struct ContextBuilder<F: FileSystem> {
    config: WireConfig,
    fs: F,
    progress_handler: Option<Box<dyn ProgressHandler>>,
}

impl<F: FileSystem> ContextBuilder<F> {
    pub fn new(config: WireConfig, fs: F) -> Self {
        Self {
            config,
            fs,
            progress_handler: None,
        }
    }

    pub fn with_progress(mut self, handler: Box<dyn ProgressHandler>) -> Self {
        self.progress_handler = Some(handler);
        self
    }

    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Discovers, parses and links every service, then checks for cycles
    pub fn analyze(&self) -> Result<ServiceGraph> {
        let start = Instant::now();
        let result = self.analyze_graph();
        self.finish(start, result)
    }

    /// Renders the context module without writing it
    pub fn render(&self) -> Result<String> {
        let start = Instant::now();
        let result = self.analyze_graph().and_then(|graph| self.emit(&graph));
        self.finish(start, result)
    }

    /// Renders the context module and writes it to the configured path
    pub fn build(&self) -> Result<PathBuf> {
        let start = Instant::now();
        let result = self
            .analyze_graph()
            .and_then(|graph| self.emit(&graph))
            .and_then(|rendered| self.write(&rendered));
        self.finish(start, result)
    }

    fn analyze_graph(&self) -> Result<ServiceGraph> {
        self.report(ProgressEvent::Started {
            service_dirs: self.config.service_dirs.len(),
        });
        info!(
            base_dir = %self.config.base_dir.display(),
            service_dirs = self.config.service_dirs.len(),
            "Analyzing services"
        );

        let aliases = self.config.alias_directives()?;
        let scanner = ServiceScanner::new(&self.fs, &self.config.base_dir);

        let mut paths = Vec::new();
        for dir in &self.config.service_dirs {
            paths.extend(scanner.list(dir)?);
        }

        // Parameter names can bind to any service of this build, aliases included
        let mut known = Vec::with_capacity(paths.len() + aliases.len());
        for path in &paths {
            known.push(ServiceParser::service_name(path)?);
        }
        known.extend(aliases.iter().map(|a| a.name.clone()));
        let parser = ServiceParser::new().with_known_services(known);

        let mut descriptors = Vec::with_capacity(paths.len());
        for path in &paths {
            self.report(ProgressEvent::ServiceDiscovered { path: path.clone() });
            let unit = scanner.read(path)?;
            descriptors.push(parser.parse(&unit)?);
        }

        let graph = GraphBuilder::build(descriptors, &aliases)?;
        self.report(ProgressEvent::GraphBuilt {
            services: graph.len(),
            aliases: aliases.len(),
        });

        if let Some(cycle) = CycleFinder::new(&graph).into_cycle() {
            return Err(WireError::CyclicDependency { cycle });
        }
        self.report(ProgressEvent::CycleCheckPassed);

        ContextEmitter::check_names(&graph)?;

        debug!(services = graph.len(), "Dependency graph is acyclic");
        Ok(graph)
    }

    fn emit(&self, graph: &ServiceGraph) -> Result<String> {
        ContextEmitter::new(&self.config.base_dir, self.config.context_dir()).render(graph)
    }

    fn write(&self, rendered: &str) -> Result<PathBuf> {
        let dir = self.config.context_dir();
        let path = self.config.context_path();

        self.fs.create_dir_all(&dir)?;
        self.fs.write(&path, rendered)?;

        self.report(ProgressEvent::ContextWritten {
            path: path.clone(),
            bytes: rendered.len(),
        });
        Ok(path)
    }

    fn finish<T>(&self, start: Instant, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.report(ProgressEvent::Completed {
                total_time: start.elapsed(),
            }),
            Err(e) => self.report(ProgressEvent::Failed {
                error: e.to_string(),
            }),
        }
        result
    }

    fn report(&self, event: ProgressEvent) {
        if let Some(handler) = &self.progress_handler {
            handler.on_progress(&event);
        }
    }
}
