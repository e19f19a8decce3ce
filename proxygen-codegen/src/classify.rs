//! Declaration classification.
//!
//! Decides whether a candidate can be proxied at all, and if so which
//! members the generator is allowed to override and which constructor
//! parameters must be forwarded.

use proxygen_model::{ClassDecl, ClassKind, FunctionDecl, Modifier, ParamDecl, PropertyDecl};

use crate::error::Error;

/// Shape of a supported candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The proxy implements the interface.
    Interface,
    /// The proxy extends an `open class`.
    OpenClass,
    /// The proxy extends an `abstract class`.
    AbstractClass,
}

impl Shape {
    /// Whether the proxy extends a class (as opposed to implementing an
    /// interface), and therefore forwards base constructor parameters.
    pub fn is_class(&self) -> bool {
        matches!(self, Shape::OpenClass | Shape::AbstractClass)
    }
}

/// Classification result: the shape plus the member set the synthesizers
/// act on. Borrows from the candidate declaration.
#[derive(Debug)]
pub struct Classified<'a> {
    /// Shape of the candidate.
    pub shape: Shape,
    /// Base constructor parameters to forward, in declaration order.
    /// Empty for interfaces.
    pub base_ctor_params: &'a [ParamDecl],
    /// Functions eligible for overriding, in declaration order.
    pub functions: Vec<&'a FunctionDecl>,
    /// Properties eligible for overriding, in declaration order.
    pub properties: Vec<&'a PropertyDecl>,
}

/// Classify a candidate declaration.
///
/// Interfaces contribute every declared member; open and abstract classes
/// contribute only members themselves marked `open` or `abstract` (anything
/// else is inherited untouched). Private and name-unresolved members are
/// filtered later, by the descriptor builder. Pure function of the input.
///
/// # Errors
///
/// Returns [`Error::UnsupportedShape`] for anything that is not an
/// interface or an open/abstract class, and
/// [`Error::UnnamedConstructorParam`] for a class whose primary
/// constructor has a parameter without a resolvable name (such a
/// parameter could not be forwarded to the superclass call). In both
/// cases the caller drops that candidate and continues the batch.
pub fn classify(decl: &ClassDecl) -> Result<Classified<'_>, Error> {
    match decl.kind {
        ClassKind::Interface => Ok(Classified {
            shape: Shape::Interface,
            base_ctor_params: &[],
            functions: decl.functions.iter().collect(),
            properties: decl.properties.iter().collect(),
        }),
        ClassKind::Class
            if decl.has_modifier(Modifier::Open) || decl.has_modifier(Modifier::Abstract) =>
        {
            if decl.ctor_params.iter().any(|p| p.name.is_none()) {
                return Err(Error::UnnamedConstructorParam {
                    name: decl.name.clone(),
                });
            }
            let shape = if decl.has_modifier(Modifier::Abstract) {
                Shape::AbstractClass
            } else {
                Shape::OpenClass
            };
            Ok(Classified {
                shape,
                base_ctor_params: &decl.ctor_params,
                functions: decl
                    .functions
                    .iter()
                    .filter(|f| is_overridable(&f.modifiers))
                    .collect(),
                properties: decl
                    .properties
                    .iter()
                    .filter(|p| is_overridable(&p.modifiers))
                    .collect(),
            })
        }
        _ => Err(Error::UnsupportedShape {
            name: decl.name.clone(),
            kind: decl.kind,
        }),
    }
}

fn is_overridable(modifiers: &[Modifier]) -> bool {
    modifiers.contains(&Modifier::Open) || modifiers.contains(&Modifier::Abstract)
}
