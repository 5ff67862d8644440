//! Error-free transformations over the native float type.
//!
//! These recover the rounding error a native add or multiply discards,
//! using nothing wider than the native type itself. They are the
//! building blocks for [`DoubleFloat`](crate::DoubleFloat).
//!
//! Extended-Precision Floating-Point Numbers for GPU Computation,
//! Andrew Thall, https://andrewthall.org/papers/df64_qf128.pdf

use crate::compensated_float::CompensatedFloat;
use crate::Float;

/// The Veltkamp split constant, `2^ceil(p/2) + 1` for a `p`-bit
/// significand. This is the one place the library depends on the
/// native mantissa width; a different `Float` needs a different
/// constant.
#[cfg(not(use_f64))]
const SPLIT_FACTOR: Float = 4097.0; // (1 << 12) + 1
#[cfg(use_f64)]
const SPLIT_FACTOR: Float = 134_217_729.0; // (1 << 27) + 1

/// Computes `a + b` and the exact rounding error of that sum, valid for
/// arbitrary magnitudes and signs of the operands.
pub fn two_sum(a: Float, b: Float) -> CompensatedFloat {
    let s = a + b;
    let v = s - a;
    let err = (a - (s - v)) + (b - v);
    CompensatedFloat::new(s, err)
}

/// The cheap variant of [`two_sum`], valid **only** when `|a| >= |b|`.
///
/// The precondition is a caller contract, not checked at runtime:
/// violating it silently yields a wrong error term rather than
/// trapping. Equal magnitudes are fine, the error term degenerates to
/// an exact zero.
pub fn quick_two_sum(a: Float, b: Float) -> CompensatedFloat {
    let s = a + b;
    let err = b - (s - a);
    CompensatedFloat::new(s, err)
}

/// Veltkamp split of `a` into high and low parts, each occupying
/// roughly half the significand. `hi + lo == a` exactly, so the parts
/// can be multiplied pairwise without rounding.
pub fn split(a: Float) -> CompensatedFloat {
    let t = a * SPLIT_FACTOR;
    let hi = t - (t - a);
    let lo = a - hi;
    CompensatedFloat::new(hi, lo)
}

/// Computes `a * b` and the exact rounding error of that product, via
/// two splits and a compensated cross-term sum. Exact for any inputs
/// whose product does not overflow.
pub fn two_prod(a: Float, b: Float) -> CompensatedFloat {
    let p = a * b;
    let a_s = split(a);
    let b_s = split(b);
    let err = ((a_s.v * b_s.v - p) + a_s.v * b_s.err + a_s.err * b_s.v) + a_s.err * b_s.err;
    CompensatedFloat::new(p, err)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use crate::float::{next_float_up, Float};

    use super::{quick_two_sum, split, two_prod, two_sum};

    /// Number of significant bits in the significand of `x`.
    #[cfg(not(use_f64))]
    fn significand_bits(x: Float) -> u32 {
        use crate::float::float_to_bits;
        if x == 0.0 {
            return 0;
        }
        let mantissa = (float_to_bits(x.abs()) & 0x7f_ffff) | (1 << 23);
        Float::MANTISSA_DIGITS - mantissa.trailing_zeros()
    }

    // The reconstruction tests check against f64 as an exact wider
    // reference, which only exists when Float is f32.
    #[cfg(not(use_f64))]
    #[test]
    fn two_sum_reconstructs_exact_sum() {
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let a = rng.gen_range(-1.0e30..1.0e30);
            let b = rng.gen_range(-1.0e30..1.0e30);
            let r = two_sum(a, b);
            assert_eq!(a as f64 + b as f64, r.v as f64 + r.err as f64);
        }
    }

    #[test]
    fn two_sum_catastrophic_cancellation() {
        // The error term is the whole point: the correction a native sum
        // throws away survives.
        let a: Float = 1.0;
        let b = next_float_up(1.0e-20);
        let r = two_sum(a, b);
        assert_eq!(r.v, 1.0);
        assert_eq!(r.err, b);
    }

    #[test]
    fn quick_two_sum_matches_full_when_ordered() {
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let a: Float = rng.gen_range(-1.0e10..1.0e10);
            let b: Float = rng.gen_range(-1.0..1.0);
            let (big, small) = if a.abs() >= b.abs() { (a, b) } else { (b, a) };
            let quick = quick_two_sum(big, small);
            let full = two_sum(big, small);
            assert_eq!(quick.v, full.v);
            assert_eq!(quick.err, full.err);
        }
    }

    #[test]
    fn quick_two_sum_equal_magnitudes() {
        // |a| == |b| degenerates to an exact addition with a zero error.
        let r = quick_two_sum(1.5, 1.5);
        assert_eq!(r.v, 3.0);
        assert_eq!(r.err, 0.0);
        let r = quick_two_sum(1.5, -1.5);
        assert_eq!(r.v, 0.0);
        assert_eq!(r.err, 0.0);
    }

    #[test]
    fn split_is_exact() {
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let a: Float = rng.gen_range(-1.0e30..1.0e30);
            let r = split(a);
            assert_eq!(r.v + r.err, a);
        }
    }

    #[cfg(not(use_f64))]
    #[test]
    fn split_halves_fit_half_the_significand() {
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let a: Float = rng.gen_range(-1.0e6..1.0e6);
            let r = split(a);
            assert!(significand_bits(r.v) <= 12, "hi too wide for {}", a);
            assert!(significand_bits(r.err) <= 12, "lo too wide for {}", a);
        }
    }

    #[cfg(not(use_f64))]
    #[test]
    fn two_prod_reconstructs_exact_product() {
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let a = rng.gen_range(-1.0e3..1.0e3);
            let b = rng.gen_range(-1.0e3..1.0e3);
            let r = two_prod(a, b);
            assert_eq!(a as f64 * b as f64, r.v as f64 + r.err as f64);
        }
    }

    #[cfg(not(use_f64))]
    #[test]
    fn two_prod_error_term_is_nonzero_where_rounding_occurred() {
        // 1 + 2^-23 squared is not representable in 24 bits.
        let a = 1.0 + Float::EPSILON;
        let r = two_prod(a, a);
        assert_ne!(r.err, 0.0);
        assert_eq!(a as f64 * a as f64, r.v as f64 + r.err as f64);
    }
}
