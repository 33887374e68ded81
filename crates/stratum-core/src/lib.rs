//! Stratum Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stratum
//! workspace scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stratum-cli (CLI)             │
//! │   (argument parsing, prompt, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ScaffoldService → ReadmeRegistry       │
//! │                  → ModuleScaffolder     │
//! │                  → FileMaterializer     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, ModuleInitializer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stratum-adapters (Infrastructure)    │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │  CargoModuleInitializer, Builtin...)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stratum_core::application::{ScaffoldRequest, ScaffoldService};
//!
//! let request = ScaffoldRequest::new("shop", "/tmp", ["place_order"], false)?;
//! let service = ScaffoldService::new(filesystem, initializer);
//! let report = service.run(&request)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldPlan, ScaffoldReport, ScaffoldRequest, ScaffoldService,
        ports::{Filesystem, ModuleInitializer},
    };
    pub use crate::domain::{Layer, LineTemplate, ProjectName, RenderContext, UseCaseName, WriteMode};
    pub use crate::error::{StratumError, StratumResult};
}
