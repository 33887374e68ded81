//! Application services.

pub mod materializer;
pub mod registry;
pub mod scaffold_service;
pub mod scaffolder;

pub use materializer::FileMaterializer;
pub use registry::{README_FILE, ReadmeRegistry};
pub use scaffold_service::{
    PlannedUseCase, ScaffoldPlan, ScaffoldReport, ScaffoldRequest, ScaffoldService, UseCaseStatus,
};
pub use scaffolder::ModuleScaffolder;
