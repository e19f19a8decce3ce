//! Host declaration model for the proxygen Kotlin proxy generator.
//!
//! This crate defines the narrow surface the generator sees of the host
//! toolchain's declaration world: classes, functions, properties, parameter
//! lists, modifiers, and Kotlin type references. A host integration builds
//! these from whatever parser or compiler API it sits on and hands them to
//! `proxygen-codegen`; the generator never queries the host directly.
//!
//! All types are plain data with fluent constructors, so tests and adapters
//! can assemble declarations without ceremony:
//!
//! ```
//! use proxygen_model::{ClassDecl, ClassKind, FunctionDecl, Modifier, TypeRef};
//!
//! let repo = ClassDecl::new("UserRepository", "com.example.repo", ClassKind::Interface)
//!     .annotation("ProxyGen")
//!     .function(
//!         FunctionDecl::new("login")
//!             .modifier(Modifier::Suspend)
//!             .returns(TypeRef::named("User").nullable()),
//!     );
//! assert!(repo.is_annotated("ProxyGen"));
//! ```

mod declaration;
mod types;

pub use declaration::{
    ClassDecl, ClassKind, FunctionDecl, Modifier, ParamDecl, PropertyDecl, PROXY_GEN_ANNOTATION,
};
pub use types::TypeRef;
