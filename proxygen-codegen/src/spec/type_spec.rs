//! Generated type and file specifications.

use proxygen_model::TypeRef;

use super::{ConstructorSpec, FunSpec, PropertySpec};

/// How the generated type relates to the original declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Supertype {
    /// `class XProxy(...) : X` - the proxy implements the interface.
    Implements(TypeRef),
    /// `class XProxy(...) : X(arg, ...)` - the proxy extends the class,
    /// forwarding the base constructor arguments by name.
    Extends {
        /// The base class type.
        ty: TypeRef,
        /// Argument expressions for the superclass constructor call, in
        /// original declaration order.
        super_args: Vec<String>,
    },
}

/// The synthesized proxy type, built purely as data.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    /// Generated type name (`<Original>Proxy`).
    pub name: String,
    /// Supertype relation.
    pub supertype: Supertype,
    /// Primary constructor.
    pub constructor: ConstructorSpec,
    /// Properties: backing fields first, then overrides, in the order they
    /// should appear in source.
    pub properties: Vec<PropertySpec>,
    /// Function overrides, in declaration order.
    pub functions: Vec<FunSpec>,
}

impl TypeSpec {
    /// Create a type spec with an empty constructor and no members.
    pub fn new(name: impl Into<String>, supertype: Supertype) -> Self {
        Self {
            name: name.into(),
            supertype,
            constructor: ConstructorSpec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Set the primary constructor.
    pub fn constructor(mut self, ctor: ConstructorSpec) -> Self {
        self.constructor = ctor;
        self
    }

    /// Add a property.
    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    /// Add multiple properties.
    pub fn properties(mut self, properties: impl IntoIterator<Item = PropertySpec>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Add a function.
    pub fn function(mut self, function: FunSpec) -> Self {
        self.functions.push(function);
        self
    }

    /// Whether the type body has any members to render.
    pub fn has_members(&self) -> bool {
        !self.properties.is_empty() || !self.functions.is_empty()
    }
}

/// A generated source file: one type per file, named after it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSpec {
    /// Target package (same as the original declaration's).
    pub package: String,
    /// File name (`<TypeName>.kt`).
    pub file_name: String,
    /// The single type in the file.
    pub type_spec: TypeSpec,
}

impl FileSpec {
    /// Create a file spec for a generated type, deriving the file name.
    pub fn new(package: impl Into<String>, type_spec: TypeSpec) -> Self {
        Self {
            package: package.into(),
            file_name: crate::naming::file_name(&type_spec.name),
            type_spec,
        }
    }
}
