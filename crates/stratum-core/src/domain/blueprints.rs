//! Boilerplate payloads for every generated file.
//!
//! Each constant is the full line list for one file (or one appended
//! fragment). Slots are described in [`crate::domain::template`]; the only
//! slot used outside that set is [`LAYER`] in [`DEPENDENCY`].

use crate::domain::template::LineTemplate;

/// Slot holding a sibling layer name inside [`DEPENDENCY`].
pub const LAYER: &str = "LAYER";

// ── Workspace ─────────────────────────────────────────────────────────────────

pub const README_HEADER: LineTemplate =
    LineTemplate::new(&["# Title of your application", "", "## Use cases", ""]);

/// One README registry entry.
pub const README_ENTRY: LineTemplate =
    LineTemplate::new(&["{{USE_CASE}} : Explain here the goal", ""]);

/// One path dependency on a sibling layer, appended to a layer manifest.
pub const DEPENDENCY: LineTemplate =
    LineTemplate::new(&["{{LAYER}} = { path = \"../{{LAYER}}\" }"]);

// ── Domain layer ──────────────────────────────────────────────────────────────

pub const DOMAIN_LIB: LineTemplate =
    LineTemplate::new(&["pub mod entities;", "pub mod errors;", "pub mod ports;"]);

pub const DOMAIN_ENTITIES: LineTemplate =
    LineTemplate::new(&["// Put all business entities struct in the folder with same name"]);

pub const DOMAIN_ERRORS: LineTemplate =
    LineTemplate::new(&["// Put all business errors struct in the folder with same name"]);

pub const DOMAIN_PORTS: LineTemplate = LineTemplate::new(&[
    "// Put all external dependencies abstraction in the folder with same name",
]);

// ── Business layer ────────────────────────────────────────────────────────────

/// Extension points every use case implements.
pub const BUSINESS_LIB: LineTemplate = LineTemplate::new(&[
    "use std::error::Error;",
    "",
    "pub trait InputMessage {}",
    "",
    "pub trait OutputMessage {}",
    "",
    "pub trait InputBoundary<T> where T: InputMessage {",
    "    fn execute(&mut self, message: T);",
    "}",
    "",
    "pub trait OutputBoundary<T, V> where T: OutputMessage, V: Error {",
    "    fn success(&mut self, message: T);",
    "    fn error(&mut self, message: T, error: V);",
    "}",
]);

pub const BUSINESS_LIB_ENTRY: LineTemplate = LineTemplate::new(&["pub mod {{USE_CASE}}_use_case;"]);

pub const USE_CASE_MODULE: LineTemplate = LineTemplate::new(&[
    "pub mod {{USE_CASE}}_input_message;",
    "pub mod {{USE_CASE}}_interactor;",
    "pub mod {{USE_CASE}}_output_message;",
]);

pub const INPUT_MESSAGE: LineTemplate = LineTemplate::new(&[
    "use crate::InputMessage;",
    "",
    "pub struct {{USE_CASE_PASCAL}}InputMessage {}",
    "",
    "impl {{USE_CASE_PASCAL}}InputMessage {",
    "    pub fn new() -> Self { Self{} }",
    "}",
    "",
    "impl InputMessage for {{USE_CASE_PASCAL}}InputMessage {}",
]);

pub const INTERACTOR: LineTemplate = LineTemplate::new(&[
    "use crate::{InputBoundary, OutputBoundary};",
    "use crate::{{USE_CASE}}_use_case::{{USE_CASE}}_input_message::{{USE_CASE_PASCAL}}InputMessage;",
    "use crate::{{USE_CASE}}_use_case::{{USE_CASE}}_output_message::{{USE_CASE_PASCAL}}OutputMessage;",
    "",
    "pub struct {{USE_CASE_PASCAL}}Interactor {",
    "    // Change generic exception with a specific exception",
    "    presenter: Box<dyn OutputBoundary<{{USE_CASE_PASCAL}}OutputMessage, std::fmt::Error>>,",
    "    output_message: {{USE_CASE_PASCAL}}OutputMessage,",
    "    // Add repositories : my_repository: Box<dyn MyPort>,",
    "}",
    "",
    "impl {{USE_CASE_PASCAL}}Interactor {",
    "    pub fn new(presenter: Box<dyn OutputBoundary<{{USE_CASE_PASCAL}}OutputMessage, std::fmt::Error>>) -> Self {",
    "        Self {",
    "            presenter,",
    "            output_message: {{USE_CASE_PASCAL}}OutputMessage::new(),",
    "            // Add repositories",
    "        }",
    "    }",
    "}",
    "",
    "impl InputBoundary<{{USE_CASE_PASCAL}}InputMessage> for {{USE_CASE_PASCAL}}Interactor {",
    "    fn execute(&mut self, _message: {{USE_CASE_PASCAL}}InputMessage) {",
    "        // Business processing",
    "        // If error : self.presenter.error(self.output_message.clone(), e);",
    "        self.presenter.success(self.output_message.clone());",
    "    }",
    "}",
]);

pub const OUTPUT_MESSAGE: LineTemplate = LineTemplate::new(&[
    "// use std::rc::Rc;",
    "use crate::OutputMessage;",
    "",
    "#[derive(Clone)]",
    "pub struct {{USE_CASE_PASCAL}}OutputMessage {",
    "    // my_entity: Option<Rc<MyEntity>>",
    "}",
    "",
    "impl {{USE_CASE_PASCAL}}OutputMessage {",
    "    pub fn new() -> Self {",
    "        Self {}",
    "    }",
    "}",
    "",
    "impl OutputMessage for {{USE_CASE_PASCAL}}OutputMessage {}",
]);

// ── Infrastructure layer ──────────────────────────────────────────────────────

pub const INFRASTRUCTURE_LIB: LineTemplate = LineTemplate::new(&["pub mod repositories;"]);

pub const INFRASTRUCTURE_REPOSITORIES: LineTemplate =
    LineTemplate::new(&["// Put all external dependencies logic in the folder with same name"]);

// ── Application layer ─────────────────────────────────────────────────────────

/// Written once, when the application layer is created.
pub const APPLICATION_VIEW_MODELS: LineTemplate = LineTemplate::new(&[
    "pub trait ViewModel {",
    "    fn is_success(&self) -> bool;",
    "    fn is_error(&self) -> bool;",
    "}",
]);

pub const APPLICATION_LIB_ENTRY: LineTemplate =
    LineTemplate::new(&["pub mod presenters;", "pub mod view_models;"]);

pub const PRESENTERS_ENTRY: LineTemplate = LineTemplate::new(&["pub mod {{USE_CASE}}_presenter;"]);

pub const VIEW_MODELS_ENTRY: LineTemplate = LineTemplate::new(&["pub mod {{USE_CASE}}_view_model;"]);

pub const VIEW_MODEL: LineTemplate = LineTemplate::new(&[
    "// use std::rc::Rc;",
    "use crate::view_models::ViewModel;",
    "",
    "pub struct {{USE_CASE_PASCAL}}ViewModel {",
    "    // my_entity: Option<Rc<MyEntity>>,",
    "    error: Option<std::fmt::Error>, // Change generic error by a specific error",
    "}",
    "",
    "impl {{USE_CASE_PASCAL}}ViewModel {",
    "    pub fn new(error: Option<std::fmt::Error>) -> Self {",
    "        Self {",
    "            // my_entity,",
    "            error,",
    "        }",
    "    }",
    "",
    "    pub fn get_error(&self) -> Option<&std::fmt::Error> {",
    "        self.error.as_ref()",
    "    }",
    "}",
    "",
    "impl ViewModel for {{USE_CASE_PASCAL}}ViewModel {",
    "    fn is_success(&self) -> bool {",
    "        self.error.is_none()",
    "    }",
    "",
    "    fn is_error(&self) -> bool {",
    "        self.error.is_some()",
    "    }",
    "}",
]);

pub const PRESENTER: LineTemplate = LineTemplate::new(&[
    "use business::{{USE_CASE}}_use_case::{{USE_CASE}}_output_message::{{USE_CASE_PASCAL}}OutputMessage;",
    "use business::OutputBoundary;",
    "use crate::view_models::{{USE_CASE}}_view_model::{{USE_CASE_PASCAL}}ViewModel;",
    "",
    "pub struct {{USE_CASE_PASCAL}}Presenter {",
    "    view_model: Option<{{USE_CASE_PASCAL}}ViewModel>,",
    "}",
    "",
    "impl {{USE_CASE_PASCAL}}Presenter {",
    "    pub fn new() -> Self {",
    "        Self { view_model: None }",
    "    }",
    "",
    "    pub fn view_model(&self) -> Option<&{{USE_CASE_PASCAL}}ViewModel> {",
    "        self.view_model.as_ref()",
    "    }",
    "}",
    "",
    "impl OutputBoundary<{{USE_CASE_PASCAL}}OutputMessage, std::fmt::Error> for {{USE_CASE_PASCAL}}Presenter {",
    "    fn success(&mut self, _message: {{USE_CASE_PASCAL}}OutputMessage) {",
    "        // first argument may be : message.get_my_entity()",
    "        let view_model = {{USE_CASE_PASCAL}}ViewModel::new(None);",
    "        self.view_model = Some(view_model);",
    "    }",
    "",
    "    fn error(&mut self, _message: {{USE_CASE_PASCAL}}OutputMessage, error: std::fmt::Error) {",
    "        // first argument may be : message.get_my_entity()",
    "        let view_model = {{USE_CASE_PASCAL}}ViewModel::new(Some(error));",
    "        self.view_model = Some(view_model);",
    "    }",
    "}",
]);
