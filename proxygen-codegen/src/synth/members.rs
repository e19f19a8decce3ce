//! Member synthesis.
//!
//! Builds the overriding members of the generated type. Every body follows
//! the same rule: the delegate wins unconditionally when present; otherwise
//! the base default runs if the original had one; otherwise the call fails
//! with an explicit not-implemented condition.

use crate::descriptor::MemberDescriptor;
use crate::naming::{delegate_name, escape_identifier};
use crate::spec::{FunSpec, PropertySpec};

/// Runtime failure raised by generated members that have neither a delegate
/// nor a usable default. Deliberately loud, never a silent no-op.
pub const NOT_IMPLEMENTED: &str = "TODO(\"Not yet implemented\")";

/// Build the override for one function.
///
/// The signature mirrors the original (name, parameters, return type,
/// suspend-ness). The body invokes the stored delegate with the forwarded
/// arguments when present, else dispatches to `super` when the original has
/// a default body, else fails.
pub fn build_function_override(descriptor: &MemberDescriptor) -> FunSpec {
    let delegate = delegate_name(&descriptor.name);
    let args = descriptor
        .params
        .iter()
        .map(|(name, _)| escape_identifier(name))
        .collect::<Vec<_>>()
        .join(", ");

    let fallback = if descriptor.has_default {
        format!("super.{}({})", escape_identifier(&descriptor.name), args)
    } else {
        NOT_IMPLEMENTED.to_string()
    };

    let returns_value = !descriptor.value_type.is_unit();
    let mut statement = String::new();
    if returns_value {
        statement.push_str("return ");
    }
    statement.push_str(&format!("{}?.invoke({}) ?: {}", delegate, args, fallback));

    let mut spec = FunSpec::new(descriptor.name.clone())
        .override_()
        .statement(statement);
    if descriptor.suspending {
        spec = spec.suspending();
    }
    for (name, ty) in &descriptor.params {
        spec = spec.param(name.clone(), ty.clone());
    }
    if returns_value {
        spec = spec.returns(descriptor.value_type.clone());
    }
    spec
}

/// Build the override for one property.
///
/// The getter returns the stored delegate value or fails; the setter
/// (mutable properties only) writes through to the backing field
/// unconditionally, so a written value is visible on the next read even
/// when no delegate was supplied at construction.
pub fn build_property_override(descriptor: &MemberDescriptor) -> PropertySpec {
    let delegate = delegate_name(&descriptor.name);

    let mut spec = PropertySpec::new(descriptor.name.clone(), descriptor.value_type.clone())
        .override_()
        .getter(format!("return {} ?: {}", delegate, NOT_IMPLEMENTED));
    if descriptor.mutable {
        spec = spec.mutable().setter(format!("{} = value", delegate));
    }
    spec
}

#[cfg(test)]
mod tests {
    use proxygen_model::{FunctionDecl, Modifier, ParamDecl, PropertyDecl, TypeRef};

    use crate::descriptor::{describe_function, describe_property};

    use super::*;

    #[test]
    fn test_abstract_function_falls_back_to_not_implemented() {
        let desc = describe_function(
            &FunctionDecl::new("fetch")
                .modifier(Modifier::Suspend)
                .returns(TypeRef::string().nullable()),
        )
        .unwrap();
        let spec = build_function_override(&desc);

        assert!(spec.is_override);
        assert!(spec.suspending);
        assert_eq!(
            spec.body,
            vec!["return fetchDelegate?.invoke() ?: TODO(\"Not yet implemented\")"]
        );
    }

    #[test]
    fn test_default_body_falls_back_to_super() {
        let desc = describe_function(&FunctionDecl::new("logout").with_body()).unwrap();
        let spec = build_function_override(&desc);

        // Unit return: no `return` keyword, no return type.
        assert!(spec.return_type.is_none());
        assert_eq!(spec.body, vec!["logoutDelegate?.invoke() ?: super.logout()"]);
    }

    #[test]
    fn test_arguments_forwarded_in_order() {
        let desc = describe_function(
            &FunctionDecl::new("login")
                .param(ParamDecl::new("userName", TypeRef::string()))
                .param(ParamDecl::new("password", TypeRef::string()))
                .returns(TypeRef::named("User").nullable()),
        )
        .unwrap();
        let spec = build_function_override(&desc);

        assert_eq!(
            spec.body,
            vec![
                "return loginDelegate?.invoke(userName, password) ?: TODO(\"Not yet implemented\")"
            ]
        );
        assert_eq!(spec.params.len(), 2);
    }

    #[test]
    fn test_mutable_property_override() {
        let desc =
            describe_property(&PropertyDecl::new("flag", TypeRef::boolean()).mutable()).unwrap();
        let spec = build_property_override(&desc);

        assert!(spec.is_override);
        assert!(spec.mutable);
        assert_eq!(
            spec.getter.as_deref(),
            Some("return flagDelegate ?: TODO(\"Not yet implemented\")")
        );
        assert_eq!(spec.setter.as_deref(), Some("flagDelegate = value"));
    }

    #[test]
    fn test_readonly_property_has_no_setter() {
        let desc = describe_property(&PropertyDecl::new("label", TypeRef::string())).unwrap();
        let spec = build_property_override(&desc);
        assert!(!spec.mutable);
        assert!(spec.setter.is_none());
    }
}
