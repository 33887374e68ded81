//! Module Scaffolder - creates the four layers and fills them in.
//!
//! Layer creation (`init_workspace`) is idempotent per layer: an existing
//! layer directory is never touched. The skeleton steps are not; they
//! overwrite their files on every run.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ports::ModuleInitializer, services::materializer::FileMaterializer},
    domain::{Layer, ProjectName, RenderContext, UseCaseName, WriteMode, blueprints},
    error::StratumResult,
};

pub const MANIFEST_FILE: &str = "Cargo.toml";

pub struct ModuleScaffolder<'a> {
    materializer: &'a FileMaterializer,
    initializer: &'a dyn ModuleInitializer,
}

impl<'a> ModuleScaffolder<'a> {
    pub fn new(materializer: &'a FileMaterializer, initializer: &'a dyn ModuleInitializer) -> Self {
        Self {
            materializer,
            initializer,
        }
    }

    /// Create every missing layer, then the workspace manifest and README if absent.
    ///
    /// Returns the layers created by this call, in initialisation order.
    #[instrument(skip(self, project), fields(project = %project))]
    pub fn init_workspace(
        &self,
        project_path: &Path,
        project: &ProjectName,
    ) -> StratumResult<Vec<Layer>> {
        self.materializer.ensure_directory(project_path)?;

        let ctx = RenderContext::for_project(project);
        let mut initialized = Vec::new();

        for layer in Layer::ALL {
            let layer_path = project_path.join(layer.as_str());
            if self.materializer.exists(&layer_path) {
                debug!(%layer, "Layer exists, leaving untouched");
                continue;
            }

            self.initializer.init_module(&layer_path)?;
            self.write_layer_dependencies(&layer_path, layer, &ctx)?;
            self.write_layer_starter(&layer_path, layer, &ctx)?;

            info!(%layer, "Initialised layer");
            initialized.push(layer);
        }

        let manifest = project_path.join(MANIFEST_FILE);
        if !self.materializer.exists(&manifest) {
            self.materializer
                .write_file(&manifest, &workspace_manifest(), WriteMode::Overwrite)?;
        }

        let readme = project_path.join(super::registry::README_FILE);
        if !self.materializer.exists(&readme) {
            self.materializer.write_template(
                &readme,
                &blueprints::README_HEADER,
                &ctx,
                WriteMode::Overwrite,
            )?;
        }

        Ok(initialized)
    }

    /// (Re)write the domain aggregator and placeholder modules.
    #[instrument(skip(self))]
    pub fn init_domain_skeleton(&self, project_path: &Path) -> StratumResult<()> {
        let src = source_dir(project_path, Layer::Domain);
        let ctx = RenderContext::default();

        for dir in ["entities", "errors", "ports"] {
            self.materializer.ensure_directory(&src.join(dir))?;
        }

        let files = [
            ("lib.rs", blueprints::DOMAIN_LIB),
            ("entities.rs", blueprints::DOMAIN_ENTITIES),
            ("errors.rs", blueprints::DOMAIN_ERRORS),
            ("ports.rs", blueprints::DOMAIN_PORTS),
        ];
        for (file, template) in files {
            self.materializer
                .write_template(&src.join(file), &template, &ctx, WriteMode::Overwrite)?;
        }
        Ok(())
    }

    /// (Re)write the infrastructure aggregator and placeholder module.
    #[instrument(skip(self))]
    pub fn init_infrastructure_skeleton(&self, project_path: &Path) -> StratumResult<()> {
        let src = source_dir(project_path, Layer::Infrastructure);
        let ctx = RenderContext::default();

        self.materializer.ensure_directory(&src.join("repositories"))?;

        self.materializer.write_template(
            &src.join("lib.rs"),
            &blueprints::INFRASTRUCTURE_LIB,
            &ctx,
            WriteMode::Overwrite,
        )?;
        self.materializer.write_template(
            &src.join("repositories.rs"),
            &blueprints::INFRASTRUCTURE_REPOSITORIES,
            &ctx,
            WriteMode::Overwrite,
        )
    }

    /// Generate the input message, interactor and output message for `use_case`.
    #[instrument(skip(self, use_case), fields(use_case = %use_case))]
    pub fn init_use_case_business_skeleton(
        &self,
        project_path: &Path,
        use_case: &UseCaseName,
    ) -> StratumResult<()> {
        let src = source_dir(project_path, Layer::Business);
        let module = use_case.module();
        let module_dir = src.join(&module);
        let ctx = RenderContext::default().with_use_case(use_case);

        self.materializer.ensure_directory(&module_dir)?;
        self.materializer
            .append_missing(&src.join("lib.rs"), &blueprints::BUSINESS_LIB_ENTRY, &ctx)?;
        self.materializer.write_template(
            &src.join(format!("{module}.rs")),
            &blueprints::USE_CASE_MODULE,
            &ctx,
            WriteMode::Overwrite,
        )?;

        let files = [
            ("input_message", blueprints::INPUT_MESSAGE),
            ("interactor", blueprints::INTERACTOR),
            ("output_message", blueprints::OUTPUT_MESSAGE),
        ];
        for (suffix, template) in files {
            let path = module_dir.join(format!("{use_case}_{suffix}.rs"));
            self.materializer
                .write_template(&path, &template, &ctx, WriteMode::Overwrite)?;
        }

        info!("Generated business skeleton");
        Ok(())
    }

    /// Generate the presenter and view model for `use_case`.
    ///
    /// Aggregator lines are only added once. The presenter and view model
    /// files themselves are appended to, so re-running a use case under
    /// force mode duplicates their contents.
    #[instrument(skip(self, use_case), fields(use_case = %use_case))]
    pub fn init_use_case_application_skeleton(
        &self,
        project_path: &Path,
        use_case: &UseCaseName,
    ) -> StratumResult<()> {
        let src = source_dir(project_path, Layer::Application);
        let presenters = src.join("presenters");
        let view_models = src.join("view_models");
        let ctx = RenderContext::default().with_use_case(use_case);

        self.materializer.ensure_directory(&presenters)?;
        self.materializer.ensure_directory(&view_models)?;

        self.materializer
            .append_missing(&src.join("lib.rs"), &blueprints::APPLICATION_LIB_ENTRY, &ctx)?;
        self.materializer
            .append_missing(&src.join("presenters.rs"), &blueprints::PRESENTERS_ENTRY, &ctx)?;
        self.materializer
            .append_missing(&src.join("view_models.rs"), &blueprints::VIEW_MODELS_ENTRY, &ctx)?;

        self.materializer.write_template(
            &view_models.join(format!("{use_case}_view_model.rs")),
            &blueprints::VIEW_MODEL,
            &ctx,
            WriteMode::Append,
        )?;
        self.materializer.write_template(
            &presenters.join(format!("{use_case}_presenter.rs")),
            &blueprints::PRESENTER,
            &ctx,
            WriteMode::Append,
        )?;

        info!("Generated application skeleton");
        Ok(())
    }

    fn write_layer_dependencies(
        &self,
        layer_path: &Path,
        layer: Layer,
        ctx: &RenderContext,
    ) -> StratumResult<()> {
        let deps = layer.dependencies();
        if deps.is_empty() {
            return Ok(());
        }

        let mut lines = Vec::with_capacity(deps.len() + 1);
        for dep in deps {
            let dep_ctx = ctx.clone().with_variable(blueprints::LAYER, dep.as_str());
            lines.extend(blueprints::DEPENDENCY.render(&dep_ctx));
        }
        lines.push(String::new());

        self.materializer
            .write_file(&layer_path.join(MANIFEST_FILE), &lines, WriteMode::Append)
    }

    fn write_layer_starter(
        &self,
        layer_path: &Path,
        layer: Layer,
        ctx: &RenderContext,
    ) -> StratumResult<()> {
        let (file, template) = match layer {
            Layer::Business => ("lib.rs", blueprints::BUSINESS_LIB),
            Layer::Application => ("view_models.rs", blueprints::APPLICATION_VIEW_MODELS),
            Layer::Domain | Layer::Infrastructure => return Ok(()),
        };
        self.materializer.write_template(
            &layer_path.join("src").join(file),
            &template,
            ctx,
            WriteMode::Overwrite,
        )
    }
}

fn source_dir(project_path: &Path, layer: Layer) -> PathBuf {
    project_path.join(layer.as_str()).join("src")
}

/// Root manifest lines: a virtual workspace over the four layers.
fn workspace_manifest() -> Vec<String> {
    let mut lines = vec![
        "[workspace]".to_string(),
        "resolver = \"3\"".to_string(),
        "members = [".to_string(),
    ];
    lines.extend(
        Layer::workspace_members()
            .into_iter()
            .map(|layer| format!("    \"{layer}\",")),
    );
    lines.push("]".to_string());
    lines
}
