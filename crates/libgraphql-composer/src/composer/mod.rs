//! The stateful engine that turns declarations into GraphQL source text and
//! [`Expectation`](crate::expectation::Expectation)s.

#[allow(clippy::module_inception)]
mod composer;
mod fragment_registry;
mod fragment_spread;

pub use composer::Composer;
pub(crate) use composer::join_source;
pub use fragment_registry::FragmentRegistry;

#[cfg(test)]
mod tests;
