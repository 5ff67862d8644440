//! The per-point escape-time loop, expressed over the extended pair
//! type. One invocation per output point; no state is shared between
//! invocations, so the kernel can run from arbitrarily many workers
//! at once.

use crate::complex::{complex_sqr, norm_sqr};
use crate::double_float2::DoubleFloat2;
use crate::Float;

/// The classic bailout: |z| > 2 guarantees divergence for z^2 + c.
pub const ESCAPE_RADIUS_SQR: Float = 4.0;

/// Default iteration budget, matching the renderer this library was
/// built for.
pub const DEFAULT_MAX_STEPS: u32 = 500;

/// Iterate `z = z^2 + c` from `z0` until the orbit leaves the escape
/// radius or the step budget runs out.
///
/// Returns the first step at which the orbit had already escaped, or
/// `None` if it stayed bounded for all `max_steps` steps. The escape
/// test reads the squared magnitude back at native precision each
/// step; the orbit itself stays in extended precision throughout. An
/// orbit that overflows to infinity or NaN never satisfies the escape
/// comparison again and simply exhausts the budget, consistent with
/// untrapped native semantics.
pub fn escape_time(
    z0: DoubleFloat2,
    c: DoubleFloat2,
    max_steps: u32,
    escape_radius_sqr: Float,
) -> Option<u32> {
    let mut z = z0;
    for step in 0..max_steps {
        if norm_sqr(z).to_float() > escape_radius_sqr {
            return Some(step);
        }
        z = complex_sqr(z) + c;
    }
    None
}

/// Mandelbrot form of [`escape_time`]: the orbit starts at the origin
/// and `c` is the point under test.
pub fn mandelbrot_escape_time(c: DoubleFloat2, max_steps: u32) -> Option<u32> {
    escape_time(DoubleFloat2::ZERO, c, max_steps, ESCAPE_RADIUS_SQR)
}

/// Julia form of [`escape_time`]: `c` is fixed for the whole image and
/// the point under test seeds the orbit.
pub fn julia_escape_time(z0: DoubleFloat2, c: DoubleFloat2, max_steps: u32) -> Option<u32> {
    escape_time(z0, c, max_steps, ESCAPE_RADIUS_SQR)
}
