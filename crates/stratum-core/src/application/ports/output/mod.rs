//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stratum-adapters` crate provides implementations.

use std::path::Path;

use crate::error::StratumResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stratum_adapters::filesystem::LocalFilesystem` (production)
/// - `stratum_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Operations are deliberately raw: line joining, existence checks and
/// append-vs-overwrite decisions live in `FileMaterializer`.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> StratumResult<()>;

    /// Create or truncate `path` and write `content`.
    fn write_file(&self, path: &Path, content: &str) -> StratumResult<()>;

    /// Open `path` for appending (creating it if absent) and write `content`.
    fn append_file(&self, path: &Path, content: &str) -> StratumResult<()>;

    /// Read the whole file. Fails if it does not exist.
    fn read_file(&self, path: &Path) -> StratumResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for creating a new, empty library module at a path.
///
/// Implemented by:
/// - `stratum_adapters::module_init::CargoModuleInitializer` (`cargo new --lib`)
/// - `stratum_adapters::module_init::BuiltinModuleInitializer` (no subprocess)
///
/// After a successful call `path` holds a crate manifest (`Cargo.toml`,
/// ending in a `[dependencies]` table) and a `src/lib.rs`.
#[cfg_attr(test, mockall::automock)]
pub trait ModuleInitializer: Send + Sync {
    fn init_module(&self, path: &Path) -> StratumResult<()>;
}
