//! Kotlin type references.
//!
//! Types are represented structurally so the generator can derive the
//! nullable and lambda forms it needs for delegate slots without parsing
//! source text.

use serde::{Deserialize, Serialize};

/// A Kotlin type reference.
///
/// Hosts resolve whatever their compiler's type model is into one of these
/// two shapes; the generator only ever needs names, nullability, and
/// function types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRef {
    /// A named type: `String`, `User`, `List<User>` (generics arrive
    /// pre-rendered in the name).
    Named {
        /// Simple or qualified type name as it should appear in source.
        name: String,
        /// Whether the type is nullable (`T?`).
        nullable: bool,
    },
    /// A function type: `(String, Int) -> User?`, optionally suspending.
    Lambda {
        /// Parameter types, in order.
        params: Vec<TypeRef>,
        /// Return type.
        ret: Box<TypeRef>,
        /// Whether this is a `suspend` function type.
        suspending: bool,
        /// Whether the function type itself is nullable.
        nullable: bool,
    },
}

impl TypeRef {
    /// Create a non-nullable named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            nullable: false,
        }
    }

    /// Create a function type.
    pub fn lambda(params: Vec<TypeRef>, ret: TypeRef) -> Self {
        Self::Lambda {
            params,
            ret: Box::new(ret),
            suspending: false,
            nullable: false,
        }
    }

    /// Convenience: Kotlin `Unit`.
    pub fn unit() -> Self {
        Self::named("Unit")
    }

    /// Convenience: Kotlin `String`.
    pub fn string() -> Self {
        Self::named("String")
    }

    /// Convenience: Kotlin `Boolean`.
    pub fn boolean() -> Self {
        Self::named("Boolean")
    }

    /// Convenience: Kotlin `Int`.
    pub fn int() -> Self {
        Self::named("Int")
    }

    /// The nullable version of this type (`T` -> `T?`). Idempotent.
    pub fn nullable(self) -> Self {
        match self {
            Self::Named { name, .. } => Self::Named {
                name,
                nullable: true,
            },
            Self::Lambda {
                params,
                ret,
                suspending,
                ..
            } => Self::Lambda {
                params,
                ret,
                suspending,
                nullable: true,
            },
        }
    }

    /// Mark a function type as suspending. No-op for named types.
    pub fn suspending(self) -> Self {
        match self {
            Self::Lambda {
                params,
                ret,
                nullable,
                ..
            } => Self::Lambda {
                params,
                ret,
                suspending: true,
                nullable,
            },
            other => other,
        }
    }

    /// Whether this type is nullable.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Named { nullable, .. } | Self::Lambda { nullable, .. } => *nullable,
        }
    }

    /// Whether this type is Kotlin `Unit`.
    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Named { name, nullable: false } if name == "Unit")
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named { name, nullable } => {
                write!(f, "{}", name)?;
                if *nullable {
                    write!(f, "?")?;
                }
                Ok(())
            }
            Self::Lambda {
                params,
                ret,
                suspending,
                nullable,
            } => {
                // A nullable function type must be parenthesized as a whole:
                // `(suspend () -> String?)?`.
                if *nullable {
                    write!(f, "(")?;
                }
                if *suspending {
                    write!(f, "suspend ")?;
                }
                write!(f, "(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ") -> {}", ret)?;
                if *nullable {
                    write!(f, ")?")?;
                }
                Ok(())
            }
        }
    }
}
