//! Property specifications.
//!
//! Covers both faces of a delegate slot: the private backing property
//! initialized from the constructor parameter, and the public `override`
//! property with custom accessors.

use proxygen_model::TypeRef;

use super::Visibility;

/// A property of the generated type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    /// Property name.
    pub name: String,
    /// Property type.
    pub ty: TypeRef,
    /// `var` vs `val`.
    pub mutable: bool,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether the property overrides a supertype member.
    pub is_override: bool,
    /// Initializer expression, rendered verbatim.
    pub initializer: Option<String>,
    /// Custom getter body (single statement).
    pub getter: Option<String>,
    /// Custom setter body (single statement; the parameter is `value`).
    pub setter: Option<String>,
}

impl PropertySpec {
    /// Create a public immutable property.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            mutable: false,
            visibility: Visibility::Public,
            is_override: false,
            initializer: None,
            getter: None,
            setter: None,
        }
    }

    /// Make this a `var` property.
    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    /// Make this property private.
    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    /// Mark as overriding a supertype member.
    pub fn override_(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Set an initializer expression.
    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    /// Set the getter body.
    pub fn getter(mut self, stmt: impl Into<String>) -> Self {
        self.getter = Some(stmt.into());
        self
    }

    /// Set the setter body.
    pub fn setter(mut self, stmt: impl Into<String>) -> Self {
        self.setter = Some(stmt.into());
        self
    }

    /// Whether this property has custom accessors.
    pub fn has_accessors(&self) -> bool {
        self.getter.is_some() || self.setter.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_property() {
        let backing = PropertySpec::new("isLoggedInDelegate", TypeRef::boolean().nullable())
            .mutable()
            .private()
            .initializer("isLoggedInDelegate");

        assert!(backing.visibility.is_private());
        assert!(backing.mutable);
        assert!(!backing.has_accessors());
        assert_eq!(backing.initializer.as_deref(), Some("isLoggedInDelegate"));
    }

    #[test]
    fn test_override_property() {
        let over = PropertySpec::new("isLoggedIn", TypeRef::boolean())
            .mutable()
            .override_()
            .getter("return isLoggedInDelegate ?: TODO(\"Not yet implemented\")")
            .setter("isLoggedInDelegate = value");

        assert!(over.is_override);
        assert!(over.has_accessors());
    }
}
