//! Module initialisation without a subprocess.
//!
//! Writes the same two files `cargo new --lib` would, through a
//! [`Filesystem`] port. Used when cargo is unavailable (`--no-cargo`) and
//! to drive scaffolding entirely in memory in tests.

use std::path::Path;

use tracing::{debug, instrument};

use stratum_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, ModuleInitializer},
    },
    error::StratumResult,
};

const EDITION: &str = "2024";

const LIB_RS: &str = "\
pub fn add(left: u64, right: u64) -> u64 {
    left + right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let result = add(2, 2);
        assert_eq!(result, 4);
    }
}
";

#[derive(Debug, Clone)]
pub struct BuiltinModuleInitializer<F> {
    filesystem: F,
}

impl<F: Filesystem> BuiltinModuleInitializer<F> {
    pub fn new(filesystem: F) -> Self {
        Self { filesystem }
    }
}

impl<F: Filesystem> ModuleInitializer for BuiltinModuleInitializer<F> {
    #[instrument(skip(self))]
    fn init_module(&self, path: &Path) -> StratumResult<()> {
        if self.filesystem.exists(path) {
            return Err(ApplicationError::ModuleInitFailed {
                path: path.to_path_buf(),
                reason: "destination already exists".into(),
            }
            .into());
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ApplicationError::ModuleInitFailed {
                path: path.to_path_buf(),
                reason: "path has no usable crate name".into(),
            })?;

        self.filesystem.create_dir_all(&path.join("src"))?;
        self.filesystem
            .write_file(&path.join("Cargo.toml"), &manifest(name))?;
        self.filesystem.write_file(&path.join("src").join("lib.rs"), LIB_RS)?;

        debug!(crate_name = name, "Module created");
        Ok(())
    }
}

fn manifest(name: &str) -> String {
    format!(
        "[package]\nname = \"{name}\"\nversion = \"0.1.0\"\nedition = \"{EDITION}\"\n\n[dependencies]\n"
    )
}
