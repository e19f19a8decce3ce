//! Declarations as the host hands them to the generator.
//!
//! These mirror the subset of a Kotlin compiler's symbol API the generator
//! actually consults: class kind, modifier sets, primary-constructor
//! parameters, declared functions and properties, and the originating file
//! (for the backend's invalidation descriptor).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

/// The marker annotation that opts a declaration into proxy generation.
pub const PROXY_GEN_ANNOTATION: &str = "ProxyGen";

/// Kind of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassKind {
    /// `interface`.
    Interface,
    /// `class` (open, abstract, final, and sealed all arrive as `Class`
    /// plus modifiers).
    Class,
    /// `object` declaration.
    Object,
    /// `enum class`.
    EnumClass,
    /// `annotation class`.
    AnnotationClass,
}

/// A Kotlin declaration modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    Open,
    Abstract,
    Final,
    Sealed,
    Override,
    Suspend,
}

/// A value parameter (constructor or function).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    /// Parameter name. Hosts may be unable to resolve one; such parameters
    /// are dropped from generation.
    pub name: Option<String>,
    /// Parameter type.
    pub ty: TypeRef,
}

impl ParamDecl {
    /// Create a named parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    /// Create a parameter whose name could not be resolved.
    pub fn unnamed(ty: TypeRef) -> Self {
        Self { name: None, ty }
    }
}

/// A declared function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Function name. Empty if the host failed to resolve one.
    pub name: String,
    /// Value parameters, in declaration order.
    pub params: Vec<ParamDecl>,
    /// Return type; `None` means `Unit`.
    pub return_type: Option<TypeRef>,
    /// Declared modifiers.
    pub modifiers: Vec<Modifier>,
    /// Whether the declaration carries a body (a default implementation).
    pub has_body: bool,
}

impl FunctionDecl {
    /// Create a bodyless `Unit`-returning function.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            modifiers: Vec::new(),
            has_body: false,
        }
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Mark the function as having a default body.
    pub fn with_body(mut self) -> Self {
        self.has_body = true;
        self
    }

    /// Whether the declaration carries the given modifier.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Whether this function is private.
    pub fn is_private(&self) -> bool {
        self.has_modifier(Modifier::Private)
    }
}

/// A declared property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    /// Property name. Empty if the host failed to resolve one.
    pub name: String,
    /// Property type.
    pub ty: TypeRef,
    /// `var` vs `val`.
    pub mutable: bool,
    /// Declared modifiers.
    pub modifiers: Vec<Modifier>,
}

impl PropertyDecl {
    /// Create an immutable (`val`) property.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            mutable: false,
            modifiers: Vec::new(),
        }
    }

    /// Make this a `var` property.
    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Whether the declaration carries the given modifier.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Whether this property is private.
    pub fn is_private(&self) -> bool {
        self.has_modifier(Modifier::Private)
    }
}

/// A class-like declaration under consideration for proxy generation.
///
/// Immutable once registered with the emission driver; the driver re-derives
/// everything else from it on each pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Simple name.
    pub name: String,
    /// Package the declaration (and its proxy) live in.
    pub package: String,
    /// Declaration kind.
    pub kind: ClassKind,
    /// Declared modifiers.
    pub modifiers: Vec<Modifier>,
    /// Primary-constructor parameters, in declaration order.
    pub ctor_params: Vec<ParamDecl>,
    /// Declared functions, in declaration order.
    pub functions: Vec<FunctionDecl>,
    /// Declared properties, in declaration order.
    pub properties: Vec<PropertyDecl>,
    /// Annotation simple names present on the declaration.
    pub annotations: Vec<String>,
    /// File the declaration originates from, for dependency tracking.
    pub source_file: Option<PathBuf>,
}

impl ClassDecl {
    /// Create an empty declaration of the given kind.
    pub fn new(name: impl Into<String>, package: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            kind,
            modifiers: Vec::new(),
            ctor_params: Vec::new(),
            functions: Vec::new(),
            properties: Vec::new(),
            annotations: Vec::new(),
            source_file: None,
        }
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Add a primary-constructor parameter.
    pub fn ctor_param(mut self, param: ParamDecl) -> Self {
        self.ctor_params.push(param);
        self
    }

    /// Add a declared function.
    pub fn function(mut self, function: FunctionDecl) -> Self {
        self.functions.push(function);
        self
    }

    /// Add a declared property.
    pub fn property(mut self, property: PropertyDecl) -> Self {
        self.properties.push(property);
        self
    }

    /// Add an annotation by simple name.
    pub fn annotation(mut self, name: impl Into<String>) -> Self {
        self.annotations.push(name.into());
        self
    }

    /// Set the originating source file.
    pub fn source_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_file = Some(path.into());
        self
    }

    /// Whether the declaration carries the given modifier.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Whether the declaration carries the given annotation.
    pub fn is_annotated(&self, annotation: &str) -> bool {
        self.annotations.iter().any(|a| a == annotation)
    }
}
