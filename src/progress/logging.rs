//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { service_dirs } => {
                info!(service_dirs, "Context build started");
            }
            ProgressEvent::ServiceDiscovered { path } => {
                debug!(path = %path.display(), "Processing service");
            }
            ProgressEvent::GraphBuilt { services, aliases } => {
                debug!(services, aliases, "Dependency graph built");
            }
            ProgressEvent::CycleCheckPassed => {
                debug!("No dependency cycles");
            }
            ProgressEvent::ContextWritten { path, bytes } => {
                info!(path = %path.display(), bytes, "Context written");
            }
            ProgressEvent::Completed { total_time } => {
                info!(
                    total_time_ms = total_time.as_millis() as u64,
                    "Context build finished"
                );
            }
            ProgressEvent::Failed { error } => {
                warn!(error = %error, "Context build failed");
            }
        }
    }
}
