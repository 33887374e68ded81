//! Application layer for Stratum.
//!
//! This layer contains:
//! - **Services**: FileMaterializer, ReadmeRegistry, ModuleScaffolder and the
//!   ScaffoldService that sequences them
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! What a file contains is decided in `crate::domain`; this layer decides
//! when and how it is written.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    FileMaterializer, ModuleScaffolder, PlannedUseCase, README_FILE, ReadmeRegistry, ScaffoldPlan,
    ScaffoldReport, ScaffoldRequest, ScaffoldService, UseCaseStatus,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ModuleInitializer};

pub use error::ApplicationError;
