//! Module initialisation adapters.
//!
//! Both produce the same shape: a `Cargo.toml` ending in a `[dependencies]`
//! table and a `src/lib.rs`.

mod builtin;
mod cargo;

pub use builtin::BuiltinModuleInitializer;
pub use cargo::CargoModuleInitializer;
