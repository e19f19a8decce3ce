//! Primary constructor specification.

use proxygen_model::TypeRef;

/// A parameter of the generated primary constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct CtorParamSpec {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
    /// Default value expression, rendered verbatim (`null` for delegate
    /// slots; forwarded base parameters have none).
    pub default: Option<String>,
}

impl CtorParamSpec {
    /// Create a required parameter (no default).
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
        }
    }

    /// Set a default value expression.
    pub fn default_value(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }
}

/// The generated primary constructor.
///
/// Parameter order is the generator's most fragile invariant: forwarded
/// base parameters first, then property delegates, then function delegates,
/// each group in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorSpec {
    /// Parameters, in the order they appear in source.
    pub params: Vec<CtorParamSpec>,
}

impl ConstructorSpec {
    /// Create an empty constructor spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn param(mut self, param: CtorParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Whether any parameters exist.
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_order_is_insertion_order() {
        let ctor = ConstructorSpec::new()
            .param(CtorParamSpec::new("id", TypeRef::string()))
            .param(
                CtorParamSpec::new(
                    "greetDelegate",
                    TypeRef::lambda(vec![], TypeRef::string()).nullable(),
                )
                .default_value("null"),
            );

        assert!(ctor.has_params());
        assert_eq!(ctor.params[0].name, "id");
        assert!(ctor.params[0].default.is_none());
        assert_eq!(ctor.params[1].default.as_deref(), Some("null"));
    }
}
