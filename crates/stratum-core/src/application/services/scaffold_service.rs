//! Scaffold Service - the application entry point.
//!
//! Sequences one scaffold run:
//!
//! 1. `init_workspace` creates missing layers, manifest and README
//! 2. every use case is registered in the README (conflicts abort here)
//! 3. domain and infrastructure skeletons are rewritten
//! 4. per use case: business skeleton, then application skeleton
//!
//! Names are validated when the [`ScaffoldRequest`] is built, so nothing is
//! written for a request with a bad name. Later failures abort the run and
//! leave whatever was already written in place.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, ModuleInitializer},
        services::{
            materializer::FileMaterializer, registry::ReadmeRegistry, scaffolder::ModuleScaffolder,
        },
    },
    domain::{DomainError, Layer, ProjectName, UseCaseName},
    error::StratumResult,
};

// ============================================================================
// Request
// ============================================================================

/// A validated scaffold invocation.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    project: ProjectName,
    target_dir: PathBuf,
    use_cases: Vec<UseCaseName>,
    force: bool,
}

impl ScaffoldRequest {
    /// Validate every name before anything touches the filesystem.
    ///
    /// Checks, in order: at least one use case, the project name, then each
    /// use case name in the order given.
    pub fn new<I, S>(
        project_name: &str,
        target_dir: impl Into<PathBuf>,
        use_cases: I,
        force: bool,
    ) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = use_cases.into_iter().map(Into::into).collect();
        if raw.is_empty() {
            return Err(DomainError::NoUseCases);
        }

        let project = ProjectName::parse(project_name)?;
        let use_cases = raw
            .into_iter()
            .map(UseCaseName::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            project,
            target_dir: target_dir.into(),
            use_cases,
            force,
        })
    }

    pub fn project(&self) -> &ProjectName {
        &self.project
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn use_cases(&self) -> &[UseCaseName] {
        &self.use_cases
    }

    pub fn force(&self) -> bool {
        self.force
    }

    /// `<target_dir>/<project>`
    pub fn project_path(&self) -> PathBuf {
        self.target_dir.join(self.project.as_str())
    }
}

// ============================================================================
// Results
// ============================================================================

/// What a run would do to one use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseStatus {
    New,
    /// Already listed; a real run fails with a conflict.
    AlreadyRegistered,
    /// Already listed; force mode appends it again and rewrites its files.
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedUseCase {
    pub name: UseCaseName,
    pub status: UseCaseStatus,
}

/// Dry-run result. Computed without writing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub project_path: PathBuf,
    pub layers_to_initialize: Vec<Layer>,
    pub use_cases: Vec<PlannedUseCase>,
}

impl ScaffoldPlan {
    /// Whether a real run of the same request would stop on a conflict.
    pub fn has_conflicts(&self) -> bool {
        self.use_cases
            .iter()
            .any(|uc| uc.status == UseCaseStatus::AlreadyRegistered)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_path: PathBuf,
    pub initialized_layers: Vec<Layer>,
    pub registered_use_cases: Vec<UseCaseName>,
    /// Every file written, in first-write order.
    pub files_written: Vec<PathBuf>,
}

// ============================================================================
// Service
// ============================================================================

pub struct ScaffoldService {
    materializer: FileMaterializer,
    initializer: Box<dyn ModuleInitializer>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>, initializer: Box<dyn ModuleInitializer>) -> Self {
        Self {
            materializer: FileMaterializer::new(filesystem),
            initializer,
        }
    }

    /// Report what [`run`](Self::run) would do, without writing.
    ///
    /// Registration is replayed against a copy of the README text, so a name
    /// that matches the header or an entry added earlier in the same request
    /// is reported exactly as the real run would treat it.
    #[instrument(skip(self, request), fields(project = %request.project()))]
    pub fn plan(&self, request: &ScaffoldRequest) -> StratumResult<ScaffoldPlan> {
        let project_path = request.project_path();
        let registry = ReadmeRegistry::new(&self.materializer);

        let layers_to_initialize = Layer::ALL
            .into_iter()
            .filter(|layer| !self.materializer.exists(&project_path.join(layer.as_str())))
            .collect();

        let mut readme = registry.text_before_run(&project_path)?;
        let mut use_cases = Vec::with_capacity(request.use_cases().len());
        for use_case in request.use_cases() {
            let status = match (readme.contains(use_case.as_str()), request.force()) {
                (false, _) => UseCaseStatus::New,
                (true, false) => UseCaseStatus::AlreadyRegistered,
                (true, true) => UseCaseStatus::Overwrite,
            };
            readme.push_str(&ReadmeRegistry::entry(use_case));
            use_cases.push(PlannedUseCase {
                name: use_case.clone(),
                status,
            });
        }

        Ok(ScaffoldPlan {
            project_path,
            layers_to_initialize,
            use_cases,
        })
    }

    /// Scaffold the project described by `request`.
    #[instrument(skip(self, request), fields(project = %request.project(), force = request.force()))]
    pub fn run(&self, request: &ScaffoldRequest) -> StratumResult<ScaffoldReport> {
        let project_path = request.project_path();
        info!(path = %project_path.display(), "Scaffolding project");

        // Drop anything recorded by a previous run on this service.
        self.materializer.take_journal();

        let scaffolder = ModuleScaffolder::new(&self.materializer, self.initializer.as_ref());
        let registry = ReadmeRegistry::new(&self.materializer);

        let initialized_layers = scaffolder.init_workspace(&project_path, request.project())?;

        for use_case in request.use_cases() {
            registry.register(&project_path, use_case, request.force())?;
        }

        scaffolder.init_domain_skeleton(&project_path)?;
        scaffolder.init_infrastructure_skeleton(&project_path)?;

        for use_case in request.use_cases() {
            scaffolder.init_use_case_business_skeleton(&project_path, use_case)?;
            scaffolder.init_use_case_application_skeleton(&project_path, use_case)?;
            debug!(%use_case, "Use case scaffolded");
        }

        let files_written = self.materializer.take_journal();
        info!(
            layers = initialized_layers.len(),
            use_cases = request.use_cases().len(),
            files = files_written.len(),
            "Scaffold complete"
        );

        Ok(ScaffoldReport {
            project_path,
            initialized_layers,
            registered_use_cases: request.use_cases().to_vec(),
            files_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::MockModuleInitializer;
    use crate::error::StratumError;
    use std::collections::{HashMap, HashSet};
    use std::sync::RwLock;

    #[derive(Default)]
    struct MapFs {
        files: RwLock<HashMap<PathBuf, String>>,
        dirs: RwLock<HashSet<PathBuf>>,
    }

    impl MapFs {
        fn add_dirs(&self, path: &Path) {
            let mut dirs = self.dirs.write().unwrap();
            for ancestor in path.ancestors() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    impl Filesystem for MapFs {
        fn create_dir_all(&self, path: &Path) -> StratumResult<()> {
            self.add_dirs(path);
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> StratumResult<()> {
            self.files
                .write()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn append_file(&self, path: &Path, content: &str) -> StratumResult<()> {
            self.files
                .write()
                .unwrap()
                .entry(path.to_path_buf())
                .or_default()
                .push_str(content);
            Ok(())
        }

        fn read_file(&self, path: &Path) -> StratumResult<String> {
            self.files.read().unwrap().get(path).cloned().ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.read().unwrap().contains_key(path) || self.dirs.read().unwrap().contains(path)
        }
    }

    /// Shares one `MapFs` between the service and the test's assertions.
    struct SharedFs(std::sync::Arc<MapFs>);

    impl Filesystem for SharedFs {
        fn create_dir_all(&self, path: &Path) -> StratumResult<()> {
            self.0.create_dir_all(path)
        }
        fn write_file(&self, path: &Path, content: &str) -> StratumResult<()> {
            self.0.write_file(path, content)
        }
        fn append_file(&self, path: &Path, content: &str) -> StratumResult<()> {
            self.0.append_file(path, content)
        }
        fn read_file(&self, path: &Path) -> StratumResult<String> {
            self.0.read_file(path)
        }
        fn exists(&self, path: &Path) -> bool {
            self.0.exists(path)
        }
    }

    /// Mock initializer that lays down what `cargo new --lib` would, into `fs`.
    fn cargo_like(fs: std::sync::Arc<MapFs>) -> MockModuleInitializer {
        let mut initializer = MockModuleInitializer::new();
        initializer.expect_init_module().returning(move |path| {
            fs.add_dirs(&path.join("src"));
            fs.write_file(&path.join("Cargo.toml"), "[package]\n\n[dependencies]\n")?;
            fs.write_file(&path.join("src/lib.rs"), "pub fn add() {}\n")?;
            Ok(())
        });
        initializer
    }

    fn service() -> (ScaffoldService, std::sync::Arc<MapFs>) {
        let fs = std::sync::Arc::new(MapFs::default());
        let service = ScaffoldService::new(
            Box::new(SharedFs(fs.clone())),
            Box::new(cargo_like(fs.clone())),
        );
        (service, fs)
    }

    fn request(use_cases: &[&str], force: bool) -> ScaffoldRequest {
        ScaffoldRequest::new("shop", "/work", use_cases.iter().copied(), force).unwrap()
    }

    fn read(fs: &MapFs, path: &str) -> String {
        fs.read_file(Path::new(path)).unwrap()
    }

    #[test]
    fn request_rejects_missing_use_cases_first() {
        let err = ScaffoldRequest::new("Shop", "/work", Vec::<String>::new(), false).unwrap_err();
        assert_eq!(err, DomainError::NoUseCases);
    }

    #[test]
    fn request_rejects_bad_project_before_bad_use_case() {
        let err = ScaffoldRequest::new("MyApp", "/work", ["BadCase"], false).unwrap_err();
        assert_eq!(err.to_string(), "Project name must be in snake_case");
    }

    #[test]
    fn request_rejects_any_bad_use_case() {
        let err = ScaffoldRequest::new("shop", "/work", ["ok", "NotOk"], false).unwrap_err();
        assert_eq!(err.to_string(), "Use case must be in snake_case");
    }

    #[test]
    fn request_project_path_joins_target_and_name() {
        assert_eq!(request(&["a"], false).project_path(), PathBuf::from("/work/shop"));
    }

    #[test]
    fn run_creates_all_layers_and_registers_use_cases() {
        let (service, fs) = service();
        let report = service.run(&request(&["create_order"], false)).unwrap();

        assert_eq!(report.initialized_layers, Layer::ALL.to_vec());
        assert_eq!(
            read(&fs, "/work/shop/README.md"),
            "# Title of your application\n\n## Use cases\n\ncreate_order : Explain here the goal\n\n"
        );
        assert!(read(&fs, "/work/shop/business/Cargo.toml")
            .ends_with("[dependencies]\ndomain = { path = \"../domain\" }\n\n"));
        assert!(read(&fs, "/work/shop/business/src/lib.rs").contains("pub mod create_order_use_case;"));
        assert!(report
            .files_written
            .contains(&PathBuf::from("/work/shop/application/src/presenters/create_order_presenter.rs")));
    }

    #[test]
    fn second_run_without_force_conflicts() {
        let (service, _fs) = service();
        service.run(&request(&["create_order"], false)).unwrap();

        let err = service.run(&request(&["create_order"], false)).unwrap_err();
        assert!(matches!(
            err,
            StratumError::Application(ApplicationError::UseCaseAlreadyExists { .. })
        ));
        assert_eq!(err.to_string(), "Use case create_order already exists.");
    }

    #[test]
    fn second_run_skips_existing_layers() {
        let (service, _fs) = service();
        service.run(&request(&["create_order"], false)).unwrap();

        let report = service.run(&request(&["refund_payment"], false)).unwrap();
        assert!(report.initialized_layers.is_empty());
    }

    #[test]
    fn plan_reports_without_writing() {
        let (service, fs) = service();
        let plan = service
            .plan(&request(&["create_order", "create_order"], false))
            .unwrap();

        assert_eq!(plan.layers_to_initialize, Layer::ALL.to_vec());
        assert_eq!(plan.use_cases[0].status, UseCaseStatus::New);
        assert_eq!(plan.use_cases[1].status, UseCaseStatus::AlreadyRegistered);
        assert!(plan.has_conflicts());
        assert!(fs.files.read().unwrap().is_empty());
    }

    #[test]
    fn plan_marks_registered_use_cases_for_overwrite_under_force() {
        let (service, _fs) = service();
        service.run(&request(&["create_order"], false)).unwrap();

        let plan = service.plan(&request(&["create_order", "refund_payment"], true)).unwrap();
        assert!(plan.layers_to_initialize.is_empty());
        assert_eq!(plan.use_cases[0].status, UseCaseStatus::Overwrite);
        assert_eq!(plan.use_cases[1].status, UseCaseStatus::New);
        assert!(!plan.has_conflicts());
    }

    #[test]
    fn plan_sees_names_contained_in_earlier_entries() {
        let (service, _fs) = service();
        let request = request(&["place_order", "order"], false);

        let plan = service.plan(&request).unwrap();
        assert_eq!(plan.use_cases[0].status, UseCaseStatus::New);
        assert_eq!(plan.use_cases[1].status, UseCaseStatus::AlreadyRegistered);
        assert!(plan.has_conflicts());

        let err = service.run(&request).unwrap_err();
        assert_eq!(err.to_string(), "Use case order already exists.");
    }

    #[test]
    fn plan_sees_header_of_fresh_readme() {
        let (service, _fs) = service();
        let request = request(&["application"], false);

        let plan = service.plan(&request).unwrap();
        assert_eq!(plan.use_cases[0].status, UseCaseStatus::AlreadyRegistered);

        let err = service.run(&request).unwrap_err();
        assert_eq!(err.to_string(), "Use case application already exists.");
    }

    #[test]
    fn plan_agrees_with_run_under_force() {
        let (service, _fs) = service();
        let request = request(&["place_order", "order"], true);

        let plan = service.plan(&request).unwrap();
        assert_eq!(plan.use_cases[1].status, UseCaseStatus::Overwrite);
        assert!(!plan.has_conflicts());
        assert!(service.run(&request).is_ok());
    }
}
