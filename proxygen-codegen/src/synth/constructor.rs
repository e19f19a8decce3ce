//! Constructor synthesis.
//!
//! Builds the generated primary constructor and the private backing
//! properties its delegate parameters initialize. Parameter ordering is
//! contractual: forwarded base parameters, then property delegates, then
//! function delegates, each group in declaration order.

use proxygen_model::ParamDecl;

use crate::descriptor::MemberDescriptor;
use crate::naming::delegate_name;
use crate::spec::{ConstructorSpec, CtorParamSpec, PropertySpec};

/// The constructor plus the backing properties it initializes.
#[derive(Debug, Clone)]
pub struct SynthesizedConstructor {
    /// The primary constructor.
    pub ctor: ConstructorSpec,
    /// Private backing properties, one per delegate slot, in parameter
    /// order.
    pub backing_properties: Vec<PropertySpec>,
}

/// Build the generated constructor for a candidate.
///
/// `base_params` is empty for interface shapes. Every delegate parameter
/// defaults to `null`, so the proxy is constructible with zero arguments
/// beyond the forwarded base parameters. Property backing fields are `var`
/// regardless of the original property's mutability (the setter override
/// writes through them); function backing fields are `val`.
pub fn build_constructor(
    base_params: &[ParamDecl],
    properties: &[MemberDescriptor],
    functions: &[MemberDescriptor],
) -> SynthesizedConstructor {
    let mut ctor = ConstructorSpec::new();
    let mut backing_properties = Vec::new();

    for param in base_params {
        // Classification rejects class candidates with unnamed constructor
        // parameters, so every base parameter here carries a name.
        if let Some(name) = &param.name {
            ctor = ctor.param(CtorParamSpec::new(name.clone(), param.ty.clone()));
        }
    }

    for descriptor in properties {
        let delegate = delegate_name(&descriptor.name);
        let ty = descriptor.delegate_type();
        ctor = ctor.param(CtorParamSpec::new(delegate.clone(), ty.clone()).default_value("null"));
        backing_properties.push(
            PropertySpec::new(delegate.clone(), ty)
                .mutable()
                .private()
                .initializer(delegate),
        );
    }

    for descriptor in functions {
        let delegate = delegate_name(&descriptor.name);
        let ty = descriptor.delegate_type();
        ctor = ctor.param(CtorParamSpec::new(delegate.clone(), ty.clone()).default_value("null"));
        backing_properties.push(
            PropertySpec::new(delegate.clone(), ty)
                .private()
                .initializer(delegate),
        );
    }

    SynthesizedConstructor {
        ctor,
        backing_properties,
    }
}
