//! C# code generation modules.

pub mod enums;
pub mod fields;
pub mod interfaces;
pub mod names;
pub mod objects;
pub mod preamble;
pub mod syntax;
pub mod unions;

pub use enums::EnumGenerator;
pub use fields::{Access, FieldGenerator};
pub use interfaces::InterfaceGenerator;
pub use names::NameResolver;
pub use objects::ObjectGenerator;
pub use preamble::preamble;
pub use unions::UnionGenerator;
