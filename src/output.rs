//! Output Materialization
//!
//! Mirrors the model's package hierarchy as nested directories under an
//! output root. Every package directory carries an empty marker file.
//! Markers are created once and never overwritten; class files are
//! rewritten on every run.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::codegen::names;
use crate::config::OutputConfig;

/// File and directory name for a model element
pub fn file_stem(name: &str) -> String {
    names::type_name(name).trim_start_matches("r#").to_string()
}

/// Writes package directories and class files under one root
#[derive(Debug, Clone)]
pub struct Materializer {
    root: PathBuf,
    marker: String,
    extension: String,
    dry_run: bool,
}

impl Materializer {
    pub fn new(root: &Path, output: &OutputConfig, dry_run: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            marker: output.package_marker.clone(),
            extension: output.extension.clone(),
            dry_run,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of a package path
    pub fn package_dir(&self, package: &[String]) -> PathBuf {
        package
            .iter()
            .fold(self.root.clone(), |dir, segment| dir.join(file_stem(segment)))
    }

    /// File of a class inside its package directory
    pub fn class_path(&self, package: &[String], class: &str) -> PathBuf {
        self.package_dir(package)
            .join(format!("{}.{}", file_stem(class), self.extension))
    }

    /// Create every directory of `package` with its marker.
    ///
    /// Returns the markers that did not exist before. In a dry run nothing is
    /// touched and the missing markers are reported.
    pub fn ensure_package(&self, package: &[String]) -> io::Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        let mut dir = self.root.clone();

        for segment in package {
            dir.push(file_stem(segment));
            let marker = dir.join(&self.marker);

            if self.dry_run {
                if !marker.exists() {
                    created.push(marker);
                }
                continue;
            }

            fs::create_dir_all(&dir)?;
            match OpenOptions::new().write(true).create_new(true).open(&marker) {
                Ok(_) => {
                    debug!(marker = %marker.display(), "created package marker");
                    created.push(marker);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
                Err(e) => return Err(e),
            }
        }

        if !created.is_empty() {
            info!(package = %package.join("."), markers = created.len(), "created package");
        }
        Ok(created)
    }

    /// Write a class file, replacing any previous content
    pub fn write_class(
        &self,
        package: &[String],
        class: &str,
        source: &str,
    ) -> io::Result<PathBuf> {
        let path = self.class_path(package, class);
        if self.dry_run {
            debug!(path = %path.display(), "dry run, not writing");
            return Ok(path);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, source)?;
        Ok(path)
    }
}
