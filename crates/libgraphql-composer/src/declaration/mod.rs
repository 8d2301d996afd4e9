//! The declarative field trees that operations and fragments are composed
//! from.

mod field_declaration;
mod fragment_definition;
pub(crate) mod json;

pub use field_declaration::FieldDeclaration;
pub use fragment_definition::FragmentDefinition;

#[cfg(test)]
mod tests;
