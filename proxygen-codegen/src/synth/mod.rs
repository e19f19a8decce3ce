//! Synthesis of the generated type's constructor and members.

mod constructor;
mod members;

pub use constructor::{build_constructor, SynthesizedConstructor};
pub use members::{build_function_override, build_property_override, NOT_IMPLEMENTED};
