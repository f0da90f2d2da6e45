//! Service unit discovery
//!
//! Each configured service directory is listed non-recursively. Dotfiles,
//! directories and anything that is not a `.rs` file are skipped. Results are
//! sorted by file name so the graph order does not depend on the platform's
//! directory listing order.

use crate::descriptor::ServiceUnit;
use crate::fs::FileSystem;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const SOURCE_EXTENSION: &str = "rs";

pub struct ServiceScanner<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    base_dir: PathBuf,
}

impl<'a, F: FileSystem + ?Sized> ServiceScanner<'a, F> {
    pub fn new(fs: &'a F, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            base_dir: base_dir.into(),
        }
    }

    /// Paths (relative to the base directory) of the service files in `dir`
    pub fn list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let full = self.base_dir.join(dir);
        if !self.fs.is_dir(&full) {
            if self.fs.exists(&full) {
                bail!("Service directory {:?} is not a directory", full);
            }
            bail!("Service directory {:?} does not exist", full);
        }

        let mut entries = self
            .fs
            .read_dir(&full)
            .with_context(|| format!("Failed to list service directory {:?}", full))?;
        entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

        let mut paths = Vec::new();
        for entry in entries {
            let name = entry.file_name();
            if name.starts_with('.') || !entry.is_file() {
                trace!(entry = %name, "Skipping entry");
                continue;
            }
            if Path::new(name).extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
                trace!(entry = %name, "Skipping non-source file");
                continue;
            }
            paths.push(dir.join(name));
        }

        debug!(dir = %dir.display(), services = paths.len(), "Listed service directory");
        Ok(paths)
    }

    /// Reads one service unit
    pub fn read(&self, path: &Path) -> Result<ServiceUnit> {
        let source = self.fs.read_to_string(&self.base_dir.join(path))?;
        Ok(ServiceUnit::new(path, source))
    }
}
