pub mod compensated_float;
pub mod complex;
pub mod double_float;
pub mod double_float2;
pub mod float;
pub mod is_nan;
pub mod mandelbrot;
pub mod math;
pub mod polynomial;

// For convenience, re-export.
pub use double_float::DoubleFloat;
pub use double_float2::DoubleFloat2;
pub use float::{Float, FloatAsBits, NativeVec2};
