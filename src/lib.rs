// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndbuf"]
#![doc(html_root_url = "https://docs.rs/ndbuf/0.3/")]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `ndbuf` crate provides an *n*-dimensional container for floating
//! point and boolean elements, stored in one contiguous buffer.
//!
//! In *n*-dimensional we include for example 1-dimensional rows or columns,
//! 2-dimensional matrices, and higher dimensional arrays. If the array has *n*
//! dimensions, then an element is accessed by using that many indices.
//!
//! - [`Array`]: the owned array type. Every array keeps its elements in
//!   row-major order in a single `Vec`, and interprets them through a
//!   [`Dim`]: the shape plus the strides derived from it.
//! - [`SharedArray`]: a reference counted array behind a reader/writer lock,
//!   for sharing one array value between threads.
//!
//! ## Highlights
//!
//! - Broadcasting arithmetic: the right hand operand is tiled over the
//!   left hand operand when its shape matches the trailing axes.
//! - Axis reductions ([`sum`](Array::sum), [`mean`](Array::mean),
//!   [`fold_axes`](Array::fold_axes), [`any`](Array::any), ...) over any set
//!   of axes.
//! - Structural mutators: [`reshape`](Array::reshape),
//!   [`resize`](Array::resize), [`append`](Array::append) and sub-array
//!   reads and writes.
//! - Bulk operations run on the rayon thread pool when the crate feature
//!   `rayon` is enabled (it is by default).
//!
//! ## Sticky faults
//!
//! Mutating operations return `&mut Self` so that they can be chained.
//! Instead of returning a `Result` at every step, a failing operation records
//! an [`ArrayError`] on the array. Once an array carries a fault, every later
//! operation on it (or with it as an operand) does nothing, until the fault
//! is consumed with [`take_fault`](Array::take_fault).
//!
//! ```
//! use ndbuf::prelude::*;
//!
//! let mut a = Array::<f64>::arange(20.);
//! a.reshape([2, 10]).sum([0]);
//! assert!(!a.has_fault());
//! assert_eq!(a.as_slice()[..3], [10., 12., 14.]);
//!
//! a.reshape([3, 3]).add_scalar(1.);
//! assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::Reshape));
//! assert!(!a.has_fault());
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default.
//! - `rayon`: enabled by default. Run the arithmetic executor and the
//!   reduction engine on the rayon thread pool.
//! - `serde`: serialization support.
//! - `approx`: implementations of the `approx` comparison traits.

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "rayon")]
extern crate rayon;

pub use crate::dimension::{Axis, AxisLen, AxisSet, Dim, IntoDimension};
pub use crate::element::{Element, NdFloat};
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::impl_shared::SharedArray;
pub use crate::linspace::{linspace, range, Linspace};

mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod arrayformat;
mod collapse;
pub mod debug;
mod dimension;
mod element;
mod error;
mod impl_constructors;
mod impl_methods;
mod impl_ops;
mod impl_owned_array;
mod impl_shared;
mod impl_subarray;
mod kernel;
mod linspace;
mod numeric;
mod numeric_util;
pub mod parallel;
pub mod prelude;

/// An *n*-dimensional array stored in one contiguous buffer.
///
/// The element type `A` is one of the [`Element`] kinds: `f32`, `f64` or
/// `bool`. Arithmetic and the numeric reductions are available when `A` is a
/// floating point type ([`NdFloat`]); [`any`](Array::any) and
/// [`all`](Array::all) are available on boolean arrays.
///
/// The elements are kept in row-major order: the last axis varies fastest.
/// `strides()[0]` is the total number of elements and `strides()[i + 1]`
/// is the distance in the buffer between neighbours along axis `i`.
///
/// Cloning an array makes a deep copy with its own buffer (and a copy of
/// any fault it carries).
#[derive(Clone)]
pub struct Array<A> {
    data: Vec<A>,
    dim: Dim,
    fault: Option<ArrayError>,
}

impl<A> Array<A> {
    #[inline]
    pub(crate) fn from_parts(dim: Dim, data: Vec<A>) -> Self {
        debug_assert_eq!(dim.size(), data.len());
        Array {
            data,
            dim,
            fault: None,
        }
    }

    /// An empty rank-1 array carrying `error`.
    pub(crate) fn from_error(error: ArrayError) -> Self {
        log::debug!("array fault: {}", error);
        Array {
            data: Vec::new(),
            dim: Dim::from_shape(&[0]),
            fault: Some(error),
        }
    }

    /// Replace shape, strides and buffer in one step.
    #[inline]
    pub(crate) fn install(&mut self, dim: Dim, data: Vec<A>) {
        debug_assert_eq!(dim.size(), data.len());
        self.dim = dim;
        self.data = data;
    }
}

/// Arrays compare equal when their shapes and elements are equal; faults
/// are not compared.
impl<A: PartialEq> PartialEq for Array<A> {
    fn eq(&self, rhs: &Self) -> bool {
        self.dim.shape() == rhs.dim.shape()
            && numeric_util::unrolled_eq(&self.data, &rhs.data)
    }
}
