//! README use case registry.
//!
//! The project README doubles as the list of use cases scaffolded so far.
//! Membership is a plain substring check against the whole file, so a use
//! case whose name appears anywhere in the README (the header included)
//! counts as registered.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{
        error::ApplicationError,
        services::materializer::{FileMaterializer, join_lines},
    },
    domain::{RenderContext, UseCaseName, WriteMode, blueprints},
    error::StratumResult,
};

pub const README_FILE: &str = "README.md";

pub struct ReadmeRegistry<'a> {
    materializer: &'a FileMaterializer,
}

impl<'a> ReadmeRegistry<'a> {
    pub fn new(materializer: &'a FileMaterializer) -> Self {
        Self { materializer }
    }

    pub fn readme_path(project_path: &Path) -> PathBuf {
        project_path.join(README_FILE)
    }

    /// README text as a run would first see it: the current file, or the
    /// header `init_workspace` writes when the project is new.
    pub fn text_before_run(&self, project_path: &Path) -> StratumResult<String> {
        let path = Self::readme_path(project_path);
        if self.materializer.exists(&path) {
            self.materializer.read_to_string(&path)
        } else {
            Ok(join_lines(
                &blueprints::README_HEADER.render(&RenderContext::default()),
            ))
        }
    }

    /// The text [`register`](Self::register) appends for `use_case`.
    pub fn entry(use_case: &UseCaseName) -> String {
        let ctx = RenderContext::default().with_use_case(use_case);
        join_lines(&blueprints::README_ENTRY.render(&ctx))
    }

    /// Fails if the README does not exist yet.
    pub fn is_registered(&self, project_path: &Path, use_case: &UseCaseName) -> StratumResult<bool> {
        self.materializer
            .file_contains(&Self::readme_path(project_path), use_case.as_str())
    }

    /// Append `use_case` to the README.
    ///
    /// With `force` the entry is appended even when the name is already
    /// present, so repeated forced runs accumulate duplicate entries.
    #[instrument(skip(self, use_case), fields(use_case = %use_case))]
    pub fn register(
        &self,
        project_path: &Path,
        use_case: &UseCaseName,
        force: bool,
    ) -> StratumResult<()> {
        if self.is_registered(project_path, use_case)? {
            if !force {
                return Err(ApplicationError::UseCaseAlreadyExists {
                    use_case: use_case.to_string(),
                }
                .into());
            }
            debug!("Use case already listed, appending again (force)");
        }

        let ctx = RenderContext::default().with_use_case(use_case);
        self.materializer.write_template(
            &Self::readme_path(project_path),
            &blueprints::README_ENTRY,
            &ctx,
            WriteMode::Append,
        )
    }
}
