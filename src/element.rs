// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, FromPrimitive};

/// Elements that can be stored in an [`Array`](crate::Array).
///
/// Shape handling, the structural mutators and the reduction engine only
/// need this bound. `Default::default()` is the fill value used by
/// [`zeros`](crate::Array::zeros) and by [`resize`](crate::Array::resize).
///
/// This trait is implemented for `f32`, `f64` and `bool`.
pub trait Element: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl Element for f32 {}
impl Element for f64 {}
impl Element for bool {}

/// Floating-point element types `f32` and `f64`.
///
/// Trait `NdFloat` is only implemented for `f32` and `f64` but encompasses
/// what the arithmetic executor and the numeric reductions need.
pub trait NdFloat:
    Element
    + Float
    + FromPrimitive
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + fmt::Display
    + fmt::LowerExp
{
}

impl NdFloat for f32 {}
impl NdFloat for f64 {}
