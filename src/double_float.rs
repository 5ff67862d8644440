//! A compensated double-single extended-precision value.
//!
//! Deep zooms run out of mantissa long before they run out of
//! exponent: at a zoom of ~1e5 adjacent pixels map to coordinates
//! whose difference native single precision cannot represent, and
//! every escape-time orbit collapses to the same iterate. Carrying a
//! second limb with the rounding error of each operation roughly
//! doubles the usable precision while staying in native arithmetic
//! throughout.

use std::ops::Neg;

use auto_ops::{impl_op_ex, impl_op_ex_commutative};

use crate::math::{quick_two_sum, two_prod, two_sum};
use crate::Float;

/// An extended-precision real number stored as the unevaluated sum
/// `hi + lo` of two native floats.
///
/// `hi` is the best native approximation of the value and `lo` the
/// correction below it; every operation returns a pair renormalized so
/// the limbs do not overlap. The ordering and equality derives are the
/// intended semantics: lexicographic on `hi` then `lo`, and exact
/// componentwise limb equality with no tolerance. Two different
/// computation paths to the same real value are not guaranteed to land
/// on identical limbs.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct DoubleFloat {
    hi: Float,
    lo: Float,
}

impl DoubleFloat {
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };
    pub const ONE: Self = Self { hi: 1.0, lo: 0.0 };

    /// Widen a native float; exact, the correction limb is zero.
    pub const fn new(v: Float) -> DoubleFloat {
        DoubleFloat { hi: v, lo: 0.0 }
    }

    /// Assemble from raw limbs. Restricted to the arithmetic in this
    /// crate, which only produces pairs already satisfying the
    /// non-overlap invariant; arbitrary limb pairs would silently
    /// break ordering and renormalization.
    pub(crate) const fn from_parts(hi: Float, lo: Float) -> DoubleFloat {
        DoubleFloat { hi, lo }
    }

    pub fn hi(&self) -> Float {
        self.hi
    }

    pub fn lo(&self) -> Float {
        self.lo
    }

    /// Read back the best native approximation, dropping the
    /// correction limb. Lossy; meant for final escape tests and
    /// output, not for feeding back into extended arithmetic.
    pub fn to_float(&self) -> Float {
        self.hi
    }
}

impl From<Float> for DoubleFloat {
    fn from(value: Float) -> Self {
        Self::new(value)
    }
}

impl Neg for DoubleFloat {
    type Output = DoubleFloat;

    fn neg(self) -> Self::Output {
        DoubleFloat {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Neg for &DoubleFloat {
    type Output = DoubleFloat;

    fn neg(self) -> Self::Output {
        DoubleFloat {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl_op_ex!(+|a: &DoubleFloat, b: &DoubleFloat| -> DoubleFloat {
    // Sum the high and low limbs separately, then fold the low-order
    // results into the error term one at a time, renormalizing after
    // each fold so quick_two_sum always sees its |a| >= |b| contract.
    let s = two_sum(a.hi, b.hi);
    let t = two_sum(a.lo, b.lo);
    let r = quick_two_sum(s.v, s.err + t.v);
    let r = quick_two_sum(r.v, r.err + t.err);
    DoubleFloat::from_parts(r.v, r.err)
});

impl_op_ex!(-|a: &DoubleFloat, b: &DoubleFloat| -> DoubleFloat {
    a + (-b)
});

impl_op_ex!(*|a: &DoubleFloat, b: &DoubleFloat| -> DoubleFloat {
    // The hi*hi product carries the exact error; the cross terms are
    // folded in at native precision and the lo*lo term is below
    // working precision entirely.
    let p = two_prod(a.hi, b.hi);
    let err = p.err + a.hi * b.lo + a.lo * b.hi;
    let r = quick_two_sum(p.v, err);
    DoubleFloat::from_parts(r.v, r.err)
});

impl_op_ex!(/|b: &DoubleFloat, a: &DoubleFloat| -> DoubleFloat {
    // One Newton correction of the native reciprocal: form the
    // approximate quotient from a.hi alone, then push the compensated
    // residual b - a*y0 back through the reciprocal. A zero high limb
    // divides through to IEEE inf/NaN, same as native division.
    let xn = 1.0 / a.hi;
    let yn = b.hi * xn;
    let y0 = DoubleFloat::new(yn);
    let residual = b - a * y0;
    let corr = two_prod(xn, residual.hi);
    y0 + DoubleFloat::from_parts(corr.v, corr.err)
});

impl_op_ex_commutative!(+|a: &DoubleFloat, f: &Float| -> DoubleFloat {
    a + DoubleFloat::new(*f)
});

impl_op_ex!(-|a: &DoubleFloat, f: &Float| -> DoubleFloat {
    a - DoubleFloat::new(*f)
});

impl_op_ex!(-|f: &Float, a: &DoubleFloat| -> DoubleFloat {
    DoubleFloat::new(*f) - a
});

impl_op_ex_commutative!(*|a: &DoubleFloat, f: &Float| -> DoubleFloat {
    a * DoubleFloat::new(*f)
});

impl_op_ex!(/|a: &DoubleFloat, f: &Float| -> DoubleFloat {
    a / DoubleFloat::new(*f)
});

impl_op_ex!(/|f: &Float, a: &DoubleFloat| -> DoubleFloat {
    DoubleFloat::new(*f) / a
});
