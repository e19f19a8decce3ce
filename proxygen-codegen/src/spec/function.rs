//! Function specifications.

use proxygen_model::TypeRef;

/// A function of the generated type.
#[derive(Debug, Clone, PartialEq)]
pub struct FunSpec {
    /// Function name.
    pub name: String,
    /// Named parameters, in order.
    pub params: Vec<(String, TypeRef)>,
    /// Return type; `None` renders no return type (Kotlin `Unit`).
    pub return_type: Option<TypeRef>,
    /// Whether the function overrides a supertype member.
    pub is_override: bool,
    /// Whether the function is `suspend`.
    pub suspending: bool,
    /// Body statements, rendered verbatim one per line.
    pub body: Vec<String>,
}

impl FunSpec {
    /// Create a `Unit`-returning function with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            is_override: false,
            suspending: false,
            body: Vec::new(),
        }
    }

    /// Add a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push((name.into(), ty));
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Mark as overriding a supertype member.
    pub fn override_(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Mark as `suspend`.
    pub fn suspending(mut self) -> Self {
        self.suspending = true;
        self
    }

    /// Add a body statement.
    pub fn statement(mut self, stmt: impl Into<String>) -> Self {
        self.body.push(stmt.into());
        self
    }
}
