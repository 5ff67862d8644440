//! Complex-coefficient polynomials for Newton-fractal iteration.
//!
//! Coefficients are held at native precision, constant term first;
//! evaluation promotes them lane-by-lane so the Horner recurrence runs
//! in extended precision where the iterate lives.

use auto_ops::impl_op_ex;

use crate::complex::{complex_div, complex_mul, complex_mul_native};
use crate::double_float2::DoubleFloat2;
use crate::float::NativeVec2;
use crate::Float;

#[derive(Debug, Clone)]
pub struct Polynomial {
    /// Index 0 is the constant term, index 1 the x term, and so on.
    pub coefficients: Vec<NativeVec2>,
}

impl Polynomial {
    /// The zero polynomial of the given degree.
    pub fn with_degree(degree: usize) -> Polynomial {
        Polynomial {
            coefficients: vec![NativeVec2::ZERO; degree + 1],
        }
    }

    /// Real coefficients, constant term first.
    pub fn from_real_coefficients(coefficients: &[Float]) -> Polynomial {
        Polynomial {
            coefficients: coefficients.iter().map(|&c| NativeVec2::new(c, 0.0)).collect(),
        }
    }

    /// The monic polynomial with the given real roots.
    pub fn from_real_roots(roots: &[Float]) -> Polynomial {
        debug_assert!(!roots.is_empty());
        let Some((first, rest)) = roots.split_first() else {
            return Polynomial::with_degree(0);
        };
        let mut p = Polynomial::from_real_coefficients(&[-first, 1.0]);
        for r in rest {
            p = p * Polynomial::from_real_coefficients(&[-r, 1.0]);
        }
        p
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn derivative(&self) -> Polynomial {
        if self.coefficients.len() <= 1 {
            return Polynomial::with_degree(0);
        }
        let mut result = Polynomial::with_degree(self.coefficients.len() - 2);
        for (power, coeff) in self.coefficients.iter().enumerate().skip(1) {
            result.coefficients[power - 1] =
                complex_mul_native(*coeff, NativeVec2::new(power as Float, 0.0));
        }
        result
    }

    /// Horner evaluation in extended precision.
    pub fn eval(&self, z: DoubleFloat2) -> DoubleFloat2 {
        let mut acc = DoubleFloat2::ZERO;
        for coeff in self.coefficients.iter().rev() {
            acc = complex_mul(acc, z) + DoubleFloat2::from(*coeff);
        }
        acc
    }
}

/// Equality up to trailing zero coefficients, so padded results of
/// arithmetic compare equal to their trimmed forms.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        let shared = self.coefficients.len().min(other.coefficients.len());
        if self.coefficients[..shared] != other.coefficients[..shared] {
            return false;
        }
        self.coefficients[shared..]
            .iter()
            .chain(other.coefficients[shared..].iter())
            .all(|&c| c == NativeVec2::ZERO)
    }
}

impl_op_ex!(+|a: &Polynomial, b: &Polynomial| -> Polynomial {
    let mut result =
        Polynomial::with_degree(a.coefficients.len().max(b.coefficients.len()) - 1);
    for (i, c) in a.coefficients.iter().enumerate() {
        result.coefficients[i] += *c;
    }
    for (i, c) in b.coefficients.iter().enumerate() {
        result.coefficients[i] += *c;
    }
    result
});

impl_op_ex!(-|a: &Polynomial, b: &Polynomial| -> Polynomial {
    let mut result =
        Polynomial::with_degree(a.coefficients.len().max(b.coefficients.len()) - 1);
    for (i, c) in a.coefficients.iter().enumerate() {
        result.coefficients[i] += *c;
    }
    for (i, c) in b.coefficients.iter().enumerate() {
        result.coefficients[i] -= *c;
    }
    result
});

impl_op_ex!(*|a: &Polynomial, b: &Polynomial| -> Polynomial {
    let mut result =
        Polynomial::with_degree(a.coefficients.len() + b.coefficients.len() - 2);
    for (i, av) in a.coefficients.iter().enumerate() {
        for (j, bv) in b.coefficients.iter().enumerate() {
            result.coefficients[i + j] += complex_mul_native(*av, *bv);
        }
    }
    result
});

/// One Newton iteration `z - f(z) / f'(z)` toward a root of `f`.
/// `df` must be the derivative of `f`; it is passed in rather than
/// recomputed so per-point loops can hoist it.
pub fn newton_step(f: &Polynomial, df: &Polynomial, z: DoubleFloat2) -> DoubleFloat2 {
    z - complex_div(f.eval(z), df.eval(z))
}
