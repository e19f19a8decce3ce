//! Source rendering.
//!
//! - [`CodeBuilder`] - fluent API for building indented text
//! - [`KotlinRenderer`] - serializes spec trees to Kotlin source

mod code_builder;
mod kotlin;

pub use code_builder::CodeBuilder;
pub use kotlin::KotlinRenderer;
