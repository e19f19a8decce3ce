//! Declarative specifications for generated Kotlin types.
//!
//! The synthesizers build these purely as data; the [`render`](crate::render)
//! module turns them into source text. Keeping the two apart keeps the
//! generation logic free of string concatenation.
//!
//! - [`TypeSpec`], [`FileSpec`] - the generated class and its file
//! - [`ConstructorSpec`], [`CtorParamSpec`] - primary constructor
//! - [`PropertySpec`] - properties, including backing fields and overrides
//! - [`FunSpec`] - function overrides

mod constructor;
mod function;
mod property;
mod type_spec;

pub use constructor::{ConstructorSpec, CtorParamSpec};
pub use function::FunSpec;
pub use property::PropertySpec;
pub use type_spec::{FileSpec, Supertype, TypeSpec};

/// Visibility of a generated member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// No modifier in Kotlin.
    #[default]
    Public,
    /// `private`.
    Private,
}

impl Visibility {
    /// Check if this is a private visibility.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}
