// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for arrays.
//!
//! A shape with a negative axis length does not panic: the constructor
//! returns an empty array carrying a `NegativeAxis` fault.

use crate::dimension::{Dim, IntoDimension};
use crate::error::{ArrayError, ErrorKind};
use crate::linspace;
use crate::{Array, Element, NdFloat};

fn dim_of(lengths: &[isize]) -> Result<Dim, ArrayError> {
    Dim::from_lengths(lengths).map_err(|kind| {
        ArrayError::capture(kind, || format!("shape {:?}", lengths))
    })
}

/// Constructor methods for arrays of any element kind.
impl<A: Element> Array<A> {
    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// The result carries a `NegativeAxis` fault if an axis length is
    /// negative, or `ShapeMismatch` if the number of elements would overflow
    /// `isize`.
    ///
    /// **Panics** if the buffer cannot be allocated.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let a = Array::from_elem([2, 2, 2], 1.);
    /// assert_eq!(a.shape(), &[2, 2, 2]);
    /// assert_eq!(a.strides(), &[8, 4, 2, 1]);
    /// ```
    pub fn from_elem<Sh: IntoDimension>(shape: Sh, elem: A) -> Self {
        match dim_of(&shape.into_dimension()) {
            Ok(dim) => {
                let data = vec![elem; dim.size()];
                Array::from_parts(dim, data)
            }
            Err(error) => Array::from_error(error),
        }
    }

    /// Create an array of zeros (`false` for booleans), shape `shape`.
    ///
    /// Faults and panics like [`from_elem`](Array::from_elem).
    pub fn zeros<Sh: IntoDimension>(shape: Sh) -> Self {
        Self::from_elem(shape, A::default())
    }

    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let a = Array::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(a.shape(), &[4]);
    /// ```
    pub fn from_vec(v: Vec<A>) -> Self {
        Array::from_parts(Dim::linear(v.len()), v)
    }

    /// Create an array of shape `shape` from a vector in row-major order
    /// (no copying needed).
    ///
    /// The result carries a `ShapeMismatch` fault if the number of elements
    /// of `shape` differs from `v.len()`, or `NegativeAxis` if an axis length
    /// is negative.
    ///
    /// ```
    /// use ndbuf::{Array, ErrorKind};
    ///
    /// let a = Array::from_shape_vec([2, 2], vec![1., 2., 3., 4.]);
    /// assert_eq!(a.get([1, 0]), Ok(3.));
    ///
    /// let b = Array::from_shape_vec([3, 2], vec![1., 2., 3., 4.]);
    /// assert_eq!(b.fault().map(|e| e.kind()), Some(ErrorKind::ShapeMismatch));
    /// ```
    pub fn from_shape_vec<Sh: IntoDimension>(shape: Sh, v: Vec<A>) -> Self {
        let lengths = shape.into_dimension();
        let dim = match dim_of(&lengths) {
            Ok(dim) => dim,
            Err(error) => return Array::from_error(error),
        };
        if dim.size() != v.len() {
            let len = v.len();
            return Array::from_error(ArrayError::capture(ErrorKind::ShapeMismatch, || {
                format!("{} elements for shape {:?}", len, lengths)
            }));
        }
        Array::from_parts(dim, v)
    }
}

/// Constructor methods for floating point arrays.
impl<A: NdFloat> Array<A> {
    /// Create a one-dimensional array from the half-open interval
    /// `[start, stop)` with elements spaced by `step`.
    ///
    /// A zero step, or a step pointing away from `stop`, gives an empty
    /// array.
    ///
    /// **Panics** if the `(stop - start) / step` elements need more than
    /// `isize::MAX` bytes, e.g. `range(0., 2e18, 1.)` for `f64`. As for any
    /// `Vec`, a failed allocation of a smaller but still huge buffer aborts.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let a = Array::range(0., 5., 2.);
    /// assert_eq!(a.as_slice(), &[0., 2., 4.]);
    /// ```
    pub fn range(start: A, stop: A, step: A) -> Self {
        Self::from_vec(linspace::range(start, stop, step).collect())
    }

    /// Create a one-dimensional array `[0, 1, ..., stop)`.
    ///
    /// **Panics** like [`range`](Array::range) for a huge `stop`.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let a = Array::<f32>::arange(4.);
    /// assert_eq!(a.as_slice(), &[0., 1., 2., 3.]);
    /// ```
    pub fn arange(stop: A) -> Self {
        Self::range(A::zero(), stop, A::one())
    }

    /// Create a one-dimensional array from the inclusive interval
    /// `[start, end]` with `n` elements.
    ///
    /// **Panics** like [`range`](Array::range) for a huge `n`.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let a = Array::linspace(0., 1., 5);
    /// assert_eq!(a.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn linspace(start: A, end: A, n: usize) -> Self {
        Self::from_vec(linspace::linspace(start, end, n).collect())
    }

    /// Create an identity matrix of size `n` (square 2D array).
    ///
    /// The result carries a `ShapeMismatch` fault if `n * n` would overflow
    /// `isize`.
    pub fn eye(n: usize) -> Self {
        let mut eye = Self::zeros([n, n]);
        if eye.has_fault() {
            return eye;
        }
        for x in eye.data.iter_mut().step_by(n + 1) {
            *x = A::one();
        }
        eye
    }
}

#[cfg(test)]
mod tests {
    use crate::{Array, ErrorKind};

    #[test]
    fn negative_shape() {
        let a = Array::<f64>::zeros([2, -1]);
        assert_eq!(a.fault().map(|e| e.kind()), Some(ErrorKind::NegativeAxis));
        assert!(a.is_empty());
        let b = Array::from_shape_vec(vec![-2isize], vec![1f32, 2.]);
        assert_eq!(b.fault().map(|e| e.kind()), Some(ErrorKind::NegativeAxis));
    }

    #[test]
    fn overflowing_shape() {
        let a = Array::<f64>::from_shape_vec([usize::MAX, 2], vec![1.]);
        assert_eq!(a.fault().map(|e| e.kind()), Some(ErrorKind::ShapeMismatch));
        let b = Array::<f32>::zeros([1usize << 40, 1 << 40]);
        assert_eq!(b.fault().map(|e| e.kind()), Some(ErrorKind::ShapeMismatch));
        let c = Array::<f64>::eye(usize::MAX);
        assert_eq!(c.fault().map(|e| e.kind()), Some(ErrorKind::ShapeMismatch));
        assert!(c.is_empty());
    }

    #[test]
    #[should_panic]
    fn range_too_long_for_memory() {
        let _ = Array::<f64>::range(0., 2e18, 1.);
    }

    #[test]
    fn identity() {
        let a = Array::<f64>::eye(3);
        assert_eq!(a.as_slice(), &[1., 0., 0., 0., 1., 0., 0., 0., 1.]);
        assert_eq!(Array::<f64>::eye(0).len(), 0);
    }

    #[test]
    fn boolean_zeros() {
        let a = Array::<bool>::zeros([3]);
        assert_eq!(a.as_slice(), &[false; 3]);
    }
}
