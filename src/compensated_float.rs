use crate::Float;

/// A native-precision result paired with the exact rounding error the
/// operation that produced it lost. The mathematically exact value is
/// `v + err`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CompensatedFloat {
    pub v: Float,
    pub err: Float,
}

impl CompensatedFloat {
    pub fn new(v: Float, err: Float) -> CompensatedFloat {
        CompensatedFloat { v, err }
    }
}

impl From<CompensatedFloat> for Float {
    fn from(value: CompensatedFloat) -> Self {
        value.v + value.err
    }
}

#[cfg(test)]
mod tests {
    use crate::math::two_sum;
    use crate::Float;

    #[test]
    fn collapsing_a_normalized_pair_returns_the_rounded_result() {
        // The error term sits below half an ULP of the result, so
        // folding it back in reproduces the native sum.
        let r = two_sum(0.1, 0.2);
        assert_eq!(Float::from(r), 0.1 + 0.2);
    }
}
