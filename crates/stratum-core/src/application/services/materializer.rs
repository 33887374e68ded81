//! File Materializer - idempotent directory and file primitives.
//!
//! Every write in a scaffold run goes through here, so this is also where
//! the run's write journal is kept (see [`FileMaterializer::take_journal`]).

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::{
    application::ports::Filesystem,
    domain::{LineTemplate, RenderContext, WriteMode},
    error::StratumResult,
};

/// Join lines into file content, every line newline-terminated.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut content = String::with_capacity(capacity);
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    content
}

pub struct FileMaterializer {
    filesystem: Box<dyn Filesystem>,
    journal: Mutex<Vec<PathBuf>>,
}

impl FileMaterializer {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            journal: Mutex::new(Vec::new()),
        }
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path)
    }

    /// Create `path` (and parents) if absent; an existing directory is a no-op.
    ///
    /// Fails if the path exists as a file or cannot be created.
    pub fn ensure_directory(&self, path: &Path) -> StratumResult<()> {
        let existed = self.filesystem.exists(path);
        self.filesystem.create_dir_all(path)?;
        if !existed {
            debug!(path = %path.display(), "Created directory");
        }
        Ok(())
    }

    /// Write `lines` to `path`, each newline-terminated.
    ///
    /// Not atomic: a failure part-way can leave a partial file behind.
    pub fn write_file<S: AsRef<str>>(
        &self,
        path: &Path,
        lines: &[S],
        mode: WriteMode,
    ) -> StratumResult<()> {
        let content = join_lines(lines);
        match mode {
            WriteMode::Overwrite => self.filesystem.write_file(path, &content)?,
            WriteMode::Append => self.filesystem.append_file(path, &content)?,
        }
        debug!(path = %path.display(), %mode, lines = lines.len(), "Wrote file");
        self.record(path);
        Ok(())
    }

    /// Render `template` against `ctx` and write the result.
    pub fn write_template(
        &self,
        path: &Path,
        template: &LineTemplate,
        ctx: &RenderContext,
        mode: WriteMode,
    ) -> StratumResult<()> {
        self.write_file(path, &template.render(ctx), mode)
    }

    /// Append only the rendered lines not already present as whole lines.
    ///
    /// Used for aggregator files (`pub mod ...;` lists) so that processing a
    /// use case twice does not declare a module twice. Creates the file if
    /// absent.
    pub fn append_missing(
        &self,
        path: &Path,
        template: &LineTemplate,
        ctx: &RenderContext,
    ) -> StratumResult<()> {
        let existing = if self.filesystem.exists(path) {
            self.filesystem.read_file(path)?
        } else {
            String::new()
        };

        let missing: Vec<String> = template
            .render(ctx)
            .into_iter()
            .filter(|line| !existing.lines().any(|present| present == line))
            .collect();

        if missing.is_empty() {
            trace!(path = %path.display(), "Aggregator already up to date");
            return Ok(());
        }

        // Keep appended declarations on their own line even if the file was
        // left without a trailing newline.
        if !existing.is_empty() && !existing.ends_with('\n') {
            self.filesystem.append_file(path, "\n")?;
        }
        self.write_file(path, &missing, WriteMode::Append)
    }

    /// Whole content of the file at `path`. Fails if it does not exist.
    pub fn read_to_string(&self, path: &Path) -> StratumResult<String> {
        self.filesystem.read_file(path)
    }

    /// Whether the file at `path` contains `needle` anywhere.
    ///
    /// Fails if the file does not exist.
    pub fn file_contains(&self, path: &Path, needle: &str) -> StratumResult<bool> {
        Ok(self.filesystem.read_file(path)?.contains(needle))
    }

    /// Drain the list of files written since the last call, in first-write order.
    pub fn take_journal(&self) -> Vec<PathBuf> {
        std::mem::take(&mut *self.journal())
    }

    fn record(&self, path: &Path) {
        let mut journal = self.journal();
        if !journal.iter().any(|p| p == path) {
            journal.push(path.to_path_buf());
        }
    }

    /// A panic elsewhere while holding the lock leaves the list intact.
    fn journal(&self) -> MutexGuard<'_, Vec<PathBuf>> {
        self.journal.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
