// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::dimension::broadcast_block;
use crate::error::ErrorKind;
use crate::kernel::{self, BinaryOp};
use crate::parallel;
use crate::{Array, NdFloat};

/// # Arithmetic
///
/// Binary operations combine the array in place with a right hand side
/// array. The right hand side is broadcast by tiling: its shape must equal
/// the trailing axes of the shape of `self`, and the buffer of `self` is
/// processed as `len() / rhs.len()` consecutive tiles, each combined with the
/// whole right hand side.
///
/// ```
/// use ndbuf::Array;
///
/// let mut a = Array::<f64>::zeros([2, 3]);
/// let row = Array::from_vec(vec![1., 2., 3.]);
/// a.add(&row).mul_scalar(2.);
/// assert_eq!(a.as_slice(), &[2., 4., 6., 2., 4., 6.]);
/// ```
///
/// Failures are recorded on `self`:
///
/// - `NullOperand` if `rhs` is `None`,
/// - the fault of `rhs` if it carries one,
/// - `ShapeMismatch` if `rhs` can not be broadcast to the shape of `self`,
/// - `DivisionByZero` (not fatal) after the whole buffer is computed, if a
///   division by zero, or a zero raised to a negative power, put NaN in the
///   result.
impl<A: NdFloat> Array<A> {
    fn zip_apply(&mut self, op: BinaryOp, rhs: Option<&Array<A>>) -> &mut Self {
        if self.has_fault() {
            return self;
        }
        let rhs = match rhs {
            Some(rhs) => rhs,
            None => {
                self.record(ErrorKind::NullOperand, || format!("{} with no operand", op.name()));
                return self;
            }
        };
        if self.adopt_fault(rhs) {
            return self;
        }
        let block = match broadcast_block(self.shape(), rhs.shape()) {
            Ok(block) => block,
            Err(kind) => {
                let (lhs, rhs) = (self.dim.clone(), rhs.dim.clone());
                self.record(kind, || format!("{} {:?} with {:?}", op.name(), lhs, rhs));
                return self;
            }
        };
        let singular = parallel::for_each_unit(&mut self.data, block, |_, tile| {
            kernel::zip_slice(op, tile, &rhs.data)
        });
        if singular {
            self.record(ErrorKind::DivisionByZero, || op.name().to_string());
        }
        self
    }

    fn scalar_apply(&mut self, op: BinaryOp, x: A) -> &mut Self {
        if self.has_fault() {
            return self;
        }
        let singular = parallel::for_each_chunk(&mut self.data, |chunk| {
            kernel::zip_scalar(op, chunk, x)
        });
        if singular {
            self.record(ErrorKind::DivisionByZero, || format!("{} by {}", op.name(), x));
        }
        self
    }
}

macro_rules! binary_ops {
    ($($mth:ident, $scalar:ident, $op:expr, $doc:expr;)*) => {
        impl<A: NdFloat> Array<A> {
            $(
            /// Elementwise
            #[doc=$doc]
            /// of `self` and the broadcast `rhs`, in place.
            pub fn $mth<'a>(&mut self, rhs: impl Into<Option<&'a Array<A>>>) -> &mut Self {
                self.zip_apply($op, rhs.into())
            }

            /// Elementwise
            #[doc=$doc]
            /// of `self` and the scalar `x`, in place.
            pub fn $scalar(&mut self, x: A) -> &mut Self {
                self.scalar_apply($op, x)
            }
            )*
        }
    };
}

binary_ops! {
    add, add_scalar, BinaryOp::Add, "addition";
    sub, sub_scalar, BinaryOp::Sub, "subtraction";
    mul, mul_scalar, BinaryOp::Mul, "multiplication";
    div, div_scalar, BinaryOp::Div, "division";
    pow, pow_scalar, BinaryOp::Pow, "power";
}

macro_rules! impl_assign_op {
    ($trt:ident, $method:ident, $mth:ident, $scalar:ident) => {
        /// Same as the inherent method; the fault, if any, is recorded on
        /// `self`.
        impl<'a, A: NdFloat> $trt<&'a Array<A>> for Array<A> {
            fn $method(&mut self, rhs: &'a Array<A>) {
                self.$mth(rhs);
            }
        }

        impl<A: NdFloat> $trt<A> for Array<A> {
            fn $method(&mut self, rhs: A) {
                self.$scalar(rhs);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, add, add_scalar);
impl_assign_op!(SubAssign, sub_assign, sub, sub_scalar);
impl_assign_op!(MulAssign, mul_assign, mul, mul_scalar);
impl_assign_op!(DivAssign, div_assign, div, div_scalar);
