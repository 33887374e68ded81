//! `cargo new --lib` as a subprocess.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument, warn};

use stratum_core::{
    application::{ApplicationError, ports::ModuleInitializer},
    error::StratumResult,
};

pub const DEFAULT_PROGRAM: &str = "cargo";

/// Creates layer crates by running `<program> new --lib <path>`.
#[derive(Debug, Clone)]
pub struct CargoModuleInitializer {
    program: OsString,
}

impl CargoModuleInitializer {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Use a different cargo binary (a toolchain wrapper, or a fake in tests).
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CargoModuleInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleInitializer for CargoModuleInitializer {
    #[instrument(skip(self), fields(program = ?self.program))]
    fn init_module(&self, path: &Path) -> StratumResult<()> {
        let output = Command::new(&self.program)
            .args(["new", "--lib", "--vcs", "none"])
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::ModuleInitFailed {
                path: path.to_path_buf(),
                reason: format!("failed to run {}: {}", self.program.to_string_lossy(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "Module initialisation exited non-zero");
            return Err(ApplicationError::ModuleInitFailed {
                path: path.to_path_buf(),
                reason: format!("{} ({})", stderr.trim(), output.status),
            }
            .into());
        }

        debug!("Module created");
        Ok(())
    }
}
