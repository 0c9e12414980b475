use num_traits::Float;

/// Bound satisfied by every floating point type the measures in this crate
/// operate over. Trimmed down from the teacher's version: no half-precision
/// coercions, since the MI engine only ever instantiates these at `f64`.
pub trait ThreadFloat: Float + Send + Sync + Copy + std::iter::Sum {}

impl<T> ThreadFloat for T where T: Float + Send + Sync + Copy + std::iter::Sum {}
