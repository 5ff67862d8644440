use std::ops::Neg;

use auto_ops::impl_op_ex;

use crate::double_float::DoubleFloat;
use crate::float::NativeVec2;
use crate::Float;

/// Two independent [`DoubleFloat`] lanes carried through identical
/// elementwise operations, typically the real and imaginary parts of
/// an orbit point. There is no cross-lane invariant; each lane keeps
/// its own normalization.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct DoubleFloat2 {
    pub x: DoubleFloat,
    pub y: DoubleFloat,
}

impl DoubleFloat2 {
    pub const ZERO: Self = Self {
        x: DoubleFloat::ZERO,
        y: DoubleFloat::ZERO,
    };

    pub const fn new(x: DoubleFloat, y: DoubleFloat) -> DoubleFloat2 {
        DoubleFloat2 { x, y }
    }

    /// Read back both lanes' native approximations.
    pub fn to_vec2(&self) -> NativeVec2 {
        NativeVec2::new(self.x.to_float(), self.y.to_float())
    }
}

/// Broadcast a native scalar to both lanes.
impl From<Float> for DoubleFloat2 {
    fn from(v: Float) -> Self {
        DoubleFloat2 {
            x: DoubleFloat::new(v),
            y: DoubleFloat::new(v),
        }
    }
}

/// Broadcast one extended value to both lanes.
impl From<DoubleFloat> for DoubleFloat2 {
    fn from(v: DoubleFloat) -> Self {
        DoubleFloat2 { x: v, y: v }
    }
}

/// Widen a native vector, one component per lane, with zero
/// correction limbs.
impl From<NativeVec2> for DoubleFloat2 {
    fn from(v: NativeVec2) -> Self {
        DoubleFloat2 {
            x: DoubleFloat::new(v.x),
            y: DoubleFloat::new(v.y),
        }
    }
}

impl Neg for DoubleFloat2 {
    type Output = DoubleFloat2;

    fn neg(self) -> Self::Output {
        DoubleFloat2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Neg for &DoubleFloat2 {
    type Output = DoubleFloat2;

    fn neg(self) -> Self::Output {
        DoubleFloat2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl_op_ex!(+|a: &DoubleFloat2, b: &DoubleFloat2| -> DoubleFloat2 {
    DoubleFloat2::new(a.x + b.x, a.y + b.y)
});

impl_op_ex!(-|a: &DoubleFloat2, b: &DoubleFloat2| -> DoubleFloat2 {
    DoubleFloat2::new(a.x - b.x, a.y - b.y)
});

impl_op_ex!(*|a: &DoubleFloat2, b: &DoubleFloat2| -> DoubleFloat2 {
    DoubleFloat2::new(a.x * b.x, a.y * b.y)
});

impl_op_ex!(/|a: &DoubleFloat2, b: &DoubleFloat2| -> DoubleFloat2 {
    DoubleFloat2::new(a.x / b.x, a.y / b.y)
});
