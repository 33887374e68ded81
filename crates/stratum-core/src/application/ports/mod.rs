//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `stratum-adapters` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: raw file and directory operations
//!   - `ModuleInitializer`: creating an empty library crate for a layer

pub mod output;

pub use output::{Filesystem, ModuleInitializer};

#[cfg(test)]
pub use output::MockModuleInitializer;
