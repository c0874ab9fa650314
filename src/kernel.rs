//! Bulk arithmetic primitives used by the arithmetic executor.
//!
//! Each primitive combines a destination slice with an equally long right
//! hand side (or with a repeated scalar) and reports whether a division by
//! zero occurred. The loops are written so that the compiler can vectorize
//! them; the executor does not depend on how they are implemented.

use std::iter;

use crate::NdFloat;

/// Element-wise binary operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub(crate) fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Pow => "pow",
        }
    }
}

/// `dst[i] = dst[i] op rhs[i]`
///
/// Returns `true` if a division by zero produced NaN.
pub(crate) fn zip_slice<A: NdFloat>(op: BinaryOp, dst: &mut [A], rhs: &[A]) -> bool {
    debug_assert_eq!(dst.len(), rhs.len());
    apply(op, dst, rhs.iter().copied())
}

/// `dst[i] = dst[i] op rhs`
///
/// Returns `true` if a division by zero produced NaN.
pub(crate) fn zip_scalar<A: NdFloat>(op: BinaryOp, dst: &mut [A], rhs: A) -> bool {
    apply(op, dst, iter::repeat(rhs))
}

#[inline(always)]
fn apply<A, I>(op: BinaryOp, dst: &mut [A], rhs: I) -> bool
where
    A: NdFloat,
    I: Iterator<Item = A>,
{
    match op {
        BinaryOp::Add => {
            dst.iter_mut().zip(rhs).for_each(|(x, y)| *x += y);
            false
        }
        BinaryOp::Sub => {
            dst.iter_mut().zip(rhs).for_each(|(x, y)| *x -= y);
            false
        }
        BinaryOp::Mul => {
            dst.iter_mut().zip(rhs).for_each(|(x, y)| *x *= y);
            false
        }
        BinaryOp::Div => {
            let mut singular = false;
            for (x, y) in dst.iter_mut().zip(rhs) {
                if y.is_zero() {
                    *x = A::nan();
                    singular = true;
                } else {
                    *x /= y;
                }
            }
            singular
        }
        BinaryOp::Pow => {
            let mut singular = false;
            for (x, y) in dst.iter_mut().zip(rhs) {
                // 0 ** -y is 1 / 0 ** y
                if x.is_zero() && y < A::zero() {
                    *x = A::nan();
                    singular = true;
                } else {
                    *x = x.powf(y);
                }
            }
            singular
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{zip_scalar, zip_slice, BinaryOp};

    #[test]
    fn arithmetic() {
        let mut xs = [1., 2., 3., 4.];
        assert!(!zip_slice(BinaryOp::Add, &mut xs, &[1., 1., 1., 1.]));
        assert_eq!(xs, [2., 3., 4., 5.]);
        assert!(!zip_slice(BinaryOp::Mul, &mut xs, &[2., 0., 1., -1.]));
        assert_eq!(xs, [4., 0., 4., -5.]);
        assert!(!zip_scalar(BinaryOp::Sub, &mut xs, 1.));
        assert_eq!(xs, [3., -1., 3., -6.]);
        assert!(!zip_scalar(BinaryOp::Pow, &mut xs, 2.));
        assert_eq!(xs, [9., 1., 9., 36.]);
    }

    #[test]
    fn division_by_zero() {
        let mut xs = [1f64, 2., 3.];
        assert!(zip_slice(BinaryOp::Div, &mut xs, &[2., 0., 3.]));
        assert_eq!(xs[0], 0.5);
        assert!(xs[1].is_nan());
        assert_eq!(xs[2], 1.);

        let mut xs = [0f32, 2.];
        assert!(zip_scalar(BinaryOp::Pow, &mut xs, -1.));
        assert!(xs[0].is_nan());
        assert_eq!(xs[1], 0.5);
    }
}
