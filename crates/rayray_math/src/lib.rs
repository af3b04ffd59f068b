//! Homogeneous-coordinate math for the rayray renderer.

#[macro_use]
mod macros;

pub mod color;
pub mod consts;
pub mod error;
pub mod matrix;
pub mod transform;
pub mod tuple;

pub use color::Color;
pub use error::MathError;
pub use matrix::Matrix;
pub use transform::Transform;
pub use tuple::Tuple;
