//! The scaffold command: the default (and only) action of `stratum`.
//!
//! Responsibility: turn parsed arguments into a `ScaffoldRequest`, pick the
//! adapters, ask before a forced run, and display the result. No business
//! logic lives here.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use stratum_adapters::{BuiltinModuleInitializer, CargoModuleInitializer, LocalFilesystem};
use stratum_core::application::{
    ModuleInitializer, README_FILE, ScaffoldPlan, ScaffoldReport, ScaffoldRequest,
    ScaffoldService, UseCaseStatus,
};

use crate::{
    cli::ScaffoldArgs,
    config::{AppConfig, InitializerKind},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const OVERWRITE_PROMPT: &str = "Do you really want to overwrite use cases (Y/n) : ";

/// Execute a scaffold run.
///
/// 1. Check that a project name and at least one use case were given
/// 2. Resolve the target directory and validate every name
/// 3. `--dry-run`: print the plan and stop
/// 4. `--force`: confirm unless `-y` or `scaffold.assume_yes`
/// 5. Scaffold and report
#[instrument(skip_all)]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project_name = match args.project_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => return Err(CliError::usage("No project name found")),
    };
    if args.use_cases.is_empty() {
        return Err(CliError::usage("No use cases found"));
    }

    let target_dir = resolve_target_dir(args.dir.as_deref())?;
    let request = ScaffoldRequest::new(&project_name, target_dir, args.use_cases, args.force)
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        project = %request.project(),
        target = %request.target_dir().display(),
        use_cases = request.use_cases().len(),
        force = request.force(),
        "Request validated"
    );

    let service = build_service(&config, args.no_cargo);

    if args.dry_run {
        let plan = service.plan(&request).map_err(CliError::Core)?;
        return show_plan(&plan, &output);
    }

    if request.force() && !(args.yes || config.scaffold.assume_yes) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        if !confirm_overwrite(&mut stdin.lock(), &mut stdout)? {
            info!("Overwrite declined");
            output.info("Nothing was changed.")?;
            return Ok(());
        }
    }

    output.header(&format!(
        "Scaffolding '{}' in {}",
        request.project(),
        request.target_dir().display()
    ))?;

    let report = service.run(&request).map_err(CliError::Core)?;
    show_report(&report, &output)
}

// ── Setup ─────────────────────────────────────────────────────────────────────

/// `-d` resolved against the working directory, or the working directory itself.
fn resolve_target_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) => std::path::absolute(dir)
            .with_cli_context(|| format!("resolving target directory {}", dir.display())),
        None => std::env::current_dir().with_cli_context(|| "reading the current directory"),
    }
}

fn build_service(config: &AppConfig, no_cargo: bool) -> ScaffoldService {
    let initializer: Box<dyn ModuleInitializer> =
        if no_cargo || config.scaffold.module_initializer == InitializerKind::Builtin {
            debug!("Using the builtin module initializer");
            Box::new(BuiltinModuleInitializer::new(LocalFilesystem::new()))
        } else {
            debug!(program = %config.scaffold.cargo_program, "Using the cargo module initializer");
            Box::new(CargoModuleInitializer::with_program(
                config.scaffold.cargo_program.clone(),
            ))
        };

    ScaffoldService::new(Box::new(LocalFilesystem::new()), initializer)
}

/// Ask before a forced run. Only an explicit `n` (any case) declines.
fn confirm_overwrite<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> CliResult<bool> {
    write!(out, "{OVERWRITE_PROMPT}").with_cli_context(|| "writing the overwrite prompt")?;
    out.flush()
        .with_cli_context(|| "writing the overwrite prompt")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .with_cli_context(|| "reading the overwrite answer")?;

    let answer = answer.trim_end_matches(['\r', '\n']);
    Ok(!answer.eq_ignore_ascii_case("n"))
}

// ── Display ───────────────────────────────────────────────────────────────────

fn show_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(plan)?;
        return Ok(());
    }

    output.header(&format!(
        "Dry run: nothing will be written to {}",
        plan.project_path.display()
    ))?;

    for layer in &plan.layers_to_initialize {
        output.info(&format!("Would create layer {layer}"))?;
    }
    for planned in &plan.use_cases {
        match planned.status {
            UseCaseStatus::New => {
                output.info(&format!("Would add \"{}\" to {README_FILE}", planned.name))?
            }
            UseCaseStatus::Overwrite => {
                output.info(&format!("Would overwrite \"{}\"", planned.name))?
            }
            UseCaseStatus::AlreadyRegistered => output.warning(&format!(
                "\"{}\" already exists; use -f to overwrite it",
                planned.name
            ))?,
        }
    }

    if plan.has_conflicts() {
        output.warning("A real run would stop at the first existing use case.")?;
    }
    Ok(())
}

fn show_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    let readme = report.project_path.join(README_FILE);
    for layer in &report.initialized_layers {
        output.print(&format!("Created layer {layer}"))?;
    }
    for use_case in &report.registered_use_cases {
        output.print(&format!(
            "Adding \"{use_case}\" to file \"{}\"",
            readme.display()
        ))?;
    }

    output.success(&format!(
        "{} use case(s) scaffolded, {} file(s) written",
        report.registered_use_cases.len(),
        report.files_written.len()
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::cli::{GlobalArgs, OutputFormat};

    fn args(project: Option<&str>, use_cases: &[&str]) -> ScaffoldArgs {
        ScaffoldArgs {
            project_name: project.map(str::to_owned),
            dir: None,
            force: false,
            yes: false,
            no_cargo: true,
            dry_run: false,
            use_cases: use_cases.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn quiet_output() -> OutputManager {
        let global = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&global, &AppConfig::default())
    }

    fn confirm(answer: &str) -> (bool, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut out = Vec::new();
        let confirmed = confirm_overwrite(&mut input, &mut out).unwrap();
        (confirmed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prompt_is_written_before_reading() {
        let (_, prompt) = confirm("y\n");
        assert_eq!(prompt, OVERWRITE_PROMPT);
    }

    #[test]
    fn only_n_declines() {
        assert!(!confirm("n\n").0);
        assert!(!confirm("N\r\n").0);
        assert!(confirm("y\n").0);
        assert!(confirm("\n").0);
        assert!(confirm("no\n").0);
        assert!(confirm(" n\n").0);
    }

    #[test]
    fn end_of_input_confirms() {
        assert!(confirm("").0);
    }

    #[test]
    fn missing_project_name_is_usage_error() {
        let err = execute(args(None, &["place_order"]), AppConfig::default(), quiet_output())
            .unwrap_err();
        assert_eq!(err.to_string(), "No project name found");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_project_name_is_usage_error() {
        let err = execute(args(Some(""), &["place_order"]), AppConfig::default(), quiet_output())
            .unwrap_err();
        assert_eq!(err.to_string(), "No project name found");
    }

    #[test]
    fn missing_use_cases_is_usage_error() {
        let err = execute(args(Some("shop"), &[]), AppConfig::default(), quiet_output())
            .unwrap_err();
        assert_eq!(err.to_string(), "No use cases found");
        assert!(err.shows_usage());
    }

    #[test]
    fn invalid_use_case_is_rejected_before_writing() {
        let err = execute(
            args(Some("shop"), &["PlaceOrder"]),
            AppConfig::default(),
            quiet_output(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Use case must be in snake_case");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn relative_target_dir_becomes_absolute() {
        let resolved = resolve_target_dir(Some(Path::new("out"))).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("out"));
    }

    #[test]
    fn default_target_dir_is_current_dir() {
        assert_eq!(
            resolve_target_dir(None).unwrap(),
            std::env::current_dir().unwrap()
        );
    }
}
