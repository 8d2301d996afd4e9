//! Response-shape predictions recorded while composing an operation.

#[allow(clippy::module_inception)]
mod expectation;
mod expected_shape;
mod response_path;

pub use expectation::Expectation;
pub use expectation::ExpectationKey;
pub use expected_shape::classify;
pub use expected_shape::ExpectedShape;
pub use expected_shape::ShapeFlags;
pub use expected_shape::ShapeInputs;
pub use response_path::PathSegment;
pub use response_path::ResponsePath;
