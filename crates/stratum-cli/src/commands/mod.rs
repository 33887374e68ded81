//! Command handlers. Each one translates parsed arguments into core calls and
//! renders the result; no business logic lives here.

pub mod completions;
pub mod scaffold;
