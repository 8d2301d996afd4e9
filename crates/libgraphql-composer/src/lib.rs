//! Compose GraphQL operation documents from declarative field trees.
//!
//! A [`FieldDeclaration`](declaration::FieldDeclaration) tree describes the
//! selection an operation should make. Composing an
//! [`Operation`](operation::Operation) walks that tree once and produces two
//! artifacts that are kept in sync:
//!
//! * GraphQL source text for the operation (plus any fragment definitions it
//!   spreads), and
//! * an [`Expectation`](expectation::Expectation) for every selected field,
//!   predicting the shape of that field in the server's response.
//!
//! ```
//! use libgraphql_composer::compose;
//! use libgraphql_composer::declaration::FieldDeclaration;
//! use libgraphql_composer::expectation::ExpectedShape;
//! use libgraphql_composer::operation::Query;
//! use libgraphql_composer::Value;
//! use libgraphql_composer::VariableConfig;
//!
//! # fn example() -> Result<(), libgraphql_composer::ComposeError> {
//! let query = Query::builder()
//!     .set_name(Some("UserQuery".to_string()))?
//!     .add_variable("id", VariableConfig::new(1, "ID", true))?
//!     .add_field("user", FieldDeclaration::new()
//!         .add_argument("id", Value::from_variable("id"))
//!         .add_scalars(["id", "name"]))?
//!     .build()?;
//!
//! let composed = compose([query.into()])?;
//! assert_eq!(
//!     composed[0].document().query(),
//!     "query UserQuery ($id: ID!) { user (id: $id) { id name } }",
//! );
//! assert_eq!(
//!     composed[0].expectation("user", 1).map(|e| e.shape()),
//!     Some(ExpectedShape::Record),
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod compose;
mod compose_error;
pub mod composer;
pub mod declaration;
mod directive_annotation;
pub mod expectation;
mod file_reader;
mod named_ref;
pub mod operation;
mod value;
mod variable;

pub use compose::compose;
pub use compose::Composable;
pub use compose::ComposedOperation;
pub use compose::RequestDocument;
pub use compose_error::ComposeError;
pub use directive_annotation::DirectiveAnnotation;
pub use file_reader::ReadContentError;
pub use named_ref::DerefByNameError;
pub use value::Value;
pub use variable::NamedVariableRef;
pub use variable::VariableConfig;
pub use variable::VariableDescriptor;
pub use variable::VariableRegistry;
pub use variable::VariableType;
