//! Query, mutation and subscription operations and the builder that
//! assembles them.

mod mutation;
#[allow(clippy::module_inception)]
mod operation;
mod operation_builder;
mod operation_data;
mod operation_kind;
mod operation_trait;
mod query;
mod subscription;

pub use mutation::Mutation;
pub use operation::Operation;
pub use operation_builder::OperationBuilder;
use operation_data::OperationData;
pub use operation_kind::OperationKind;
use operation_trait::OperationTrait;
pub use query::Query;
pub use subscription::Subscription;

#[cfg(test)]
mod tests;
