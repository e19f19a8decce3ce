//! Member descriptor derivation.
//!
//! Normalizes one declared function or property into the flat view the
//! synthesizers consume. Descriptors are derived fresh from the candidate
//! on every pass and never persisted.

use proxygen_model::{FunctionDecl, Modifier, PropertyDecl, TypeRef};

/// Kind of a described member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Function,
    Property,
}

/// Normalized view of one overridable member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDescriptor {
    /// Member name.
    pub name: String,
    /// Function or property.
    pub kind: MemberKind,
    /// Named parameters, in order (functions only; parameters whose names
    /// the host could not resolve are dropped).
    pub params: Vec<(String, TypeRef)>,
    /// Return type or property type. `Unit` for functions declared without
    /// a return type.
    pub value_type: TypeRef,
    /// `var` vs `val` (properties only).
    pub mutable: bool,
    /// Whether the function is `suspend` (functions only).
    pub suspending: bool,
    /// Whether the original declaration carries a default body, which the
    /// generated override can dispatch to via `super`.
    pub has_default: bool,
}

/// Describe a declared function.
///
/// Returns `None` for private functions (never overridden, even on an
/// interface) and for functions whose name the host failed to resolve.
pub fn describe_function(decl: &FunctionDecl) -> Option<MemberDescriptor> {
    if decl.is_private() || decl.name.is_empty() {
        return None;
    }

    let params = decl
        .params
        .iter()
        .filter_map(|p| p.name.clone().map(|name| (name, p.ty.clone())))
        .collect();

    Some(MemberDescriptor {
        name: decl.name.clone(),
        kind: MemberKind::Function,
        params,
        value_type: decl.return_type.clone().unwrap_or_else(TypeRef::unit),
        mutable: false,
        suspending: decl.has_modifier(Modifier::Suspend),
        has_default: decl.has_body,
    })
}

/// Describe a declared property.
///
/// Returns `None` for private properties and for properties whose name the
/// host failed to resolve.
pub fn describe_property(decl: &PropertyDecl) -> Option<MemberDescriptor> {
    if decl.is_private() || decl.name.is_empty() {
        return None;
    }

    Some(MemberDescriptor {
        name: decl.name.clone(),
        kind: MemberKind::Property,
        params: Vec::new(),
        value_type: decl.ty.clone(),
        mutable: decl.mutable,
        suspending: false,
        has_default: false,
    })
}

impl MemberDescriptor {
    /// The delegate type for this member: the nullable property type, or a
    /// nullable (suspending) function type mirroring the signature.
    pub fn delegate_type(&self) -> TypeRef {
        match self.kind {
            MemberKind::Property => self.value_type.clone().nullable(),
            MemberKind::Function => {
                let lambda = TypeRef::lambda(
                    self.params.iter().map(|(_, ty)| ty.clone()).collect(),
                    self.value_type.clone(),
                );
                let lambda = if self.suspending {
                    lambda.suspending()
                } else {
                    lambda
                };
                lambda.nullable()
            }
        }
    }
}
