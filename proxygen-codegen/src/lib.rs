//! Kotlin proxy source generator.
//!
//! Given annotated interfaces and open/abstract classes (as
//! [`proxygen_model`] declarations), this crate synthesizes companion proxy
//! types whose members can each be individually overridden at construction
//! time through optional delegate parameters, falling back to the original
//! default implementation or an explicit not-implemented failure.
//!
//! # Module Organization
//!
//! - [`classify`] - candidate shape classification and member extraction
//! - [`descriptor`] - normalized member descriptors
//! - [`spec`] - declarative specifications of the generated type
//! - [`synth`] - constructor and member synthesis
//! - [`render`] - the Kotlin pretty-printer
//! - [`driver`] - worklist, dedup, and batch orchestration
//! - [`backend`] - persistence of generated sources
//!
//! # Example
//!
//! ```
//! use proxygen_codegen::backend::MemoryBackend;
//! use proxygen_codegen::driver::EmissionDriver;
//! use proxygen_model::{ClassDecl, ClassKind, FunctionDecl, Modifier, TypeRef};
//!
//! let repo = ClassDecl::new("Repo", "com.example", ClassKind::Interface)
//!     .annotation("ProxyGen")
//!     .function(
//!         FunctionDecl::new("fetch")
//!             .modifier(Modifier::Suspend)
//!             .returns(TypeRef::string().nullable()),
//!     );
//!
//! let mut driver = EmissionDriver::new();
//! driver.register(repo);
//! let mut backend = MemoryBackend::new();
//! let report = driver.flush(&mut backend).unwrap();
//! assert_eq!(report.generated, vec!["RepoProxy"]);
//! ```

pub mod backend;
pub mod classify;
pub mod descriptor;
pub mod diagnostic;
pub mod driver;
pub mod error;
pub mod naming;
pub mod render;
pub mod spec;
pub mod synth;

pub use backend::{Dependencies, FsBackend, GeneratedSource, MemoryBackend, SourceBackend};
pub use diagnostic::{Diagnostic, Severity};
pub use driver::{is_candidate, generate, EmissionDriver, FlushReport, Generated};
pub use error::Error;
