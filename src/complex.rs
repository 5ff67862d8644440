//! Complex arithmetic treating a [`DoubleFloat2`] as `x + y*i`.
//!
//! The pair type itself is strictly elementwise; the cross-lane
//! combinations a complex product needs live here, built from the
//! scalar extended operations so the extra precision carries through.

use crate::double_float::DoubleFloat;
use crate::double_float2::DoubleFloat2;
use crate::float::NativeVec2;

/// Complex product of two extended-precision points.
pub fn complex_mul(a: DoubleFloat2, b: DoubleFloat2) -> DoubleFloat2 {
    DoubleFloat2::new(a.x * b.x - a.y * b.y, a.x * b.y + b.x * a.y)
}

/// Complex square. Cheaper than `complex_mul(z, z)` by one extended
/// multiply in the imaginary lane.
pub fn complex_sqr(z: DoubleFloat2) -> DoubleFloat2 {
    DoubleFloat2::new(z.x * z.x - z.y * z.y, 2.0 * (z.x * z.y))
}

/// Complex conjugate.
pub fn conj(z: DoubleFloat2) -> DoubleFloat2 {
    DoubleFloat2::new(z.x, -z.y)
}

/// Squared magnitude, kept in extended precision for the caller to
/// read back as it sees fit.
pub fn norm_sqr(z: DoubleFloat2) -> DoubleFloat {
    z.x * z.x + z.y * z.y
}

/// Complex quotient via the conjugate over the squared magnitude. A
/// zero denominator flows through to IEEE inf/NaN lanes, as with the
/// scalar division.
pub fn complex_div(a: DoubleFloat2, b: DoubleFloat2) -> DoubleFloat2 {
    let num = complex_mul(a, conj(b));
    num / DoubleFloat2::from(norm_sqr(b))
}

/// Complex product at native precision, for coefficient bookkeeping
/// that never enters the extended pipeline.
pub fn complex_mul_native(a: NativeVec2, b: NativeVec2) -> NativeVec2 {
    NativeVec2::new(a.x * b.x - a.y * b.y, a.x * b.y + b.x * a.y)
}
