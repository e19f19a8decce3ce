//! Generation-time errors.

use proxygen_model::ClassKind;
use thiserror::Error;

/// Errors the generator can report for a single candidate.
///
/// These never abort a batch: the emission driver converts them into
/// diagnostics and moves on to the next candidate.
#[derive(Debug, Error)]
pub enum Error {
    /// The candidate is not an interface or an open/abstract class.
    #[error(
        "unsupported declaration shape for '{name}' ({kind:?}): ProxyGen supports interfaces \
         and open or abstract classes."
    )]
    UnsupportedShape {
        /// Simple name of the rejected candidate.
        name: String,
        /// The kind it was declared as.
        kind: ClassKind,
    },

    /// A class candidate declares a primary-constructor parameter whose
    /// name could not be resolved. The generated constructor must forward
    /// every base parameter by name, so no proxy can be built.
    #[error(
        "cannot generate a proxy for '{name}': a primary-constructor parameter has no \
         resolvable name and cannot be forwarded"
    )]
    UnnamedConstructorParam {
        /// Simple name of the rejected candidate.
        name: String,
    },
}

/// Result type for per-candidate generation steps.
pub type Result<T> = std::result::Result<T, Error>;
