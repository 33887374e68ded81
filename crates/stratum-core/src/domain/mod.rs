// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stratum.
//!
//! Pure rules with no I/O: what a valid name is, which layers exist and how
//! they depend on each other, and what every generated file contains.
//!
//! - **No I/O**: filesystem and subprocess access go through the ports in
//!   `crate::application::ports`
//! - **No external crates**: std + thiserror + serde derives only
//! - **Immutable values**: names and templates are validated once, then read
//!
pub mod blueprints;
pub mod error;
pub mod layer;
pub mod names;
pub mod template;
pub mod write;

pub use error::DomainError;
pub use layer::Layer;
pub use names::{ProjectName, UseCaseName, to_pascal_case, validate_snake_case};
pub use template::{LineTemplate, RenderContext};
pub use write::WriteMode;
