// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::{self, Dim, IntoDimension};
use crate::error::{ArrayError, ErrorKind};
use crate::{Array, Element};

/// # Methods For All Array Types
impl<A> Array<A> {
    /// Return the total number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.dim.size()
    }

    /// Return `true` if the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the shape and strides of the array.
    #[inline]
    pub fn dim(&self) -> &Dim {
        &self.dim
    }

    /// Return the shape of the array as a slice.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.dim.shape()
    }

    /// Return the strides of the array: the number of elements first, then
    /// the offset step of every axis.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let a = Array::<f64>::zeros([3, 4]);
    /// assert_eq!(a.strides(), &[12, 4, 1]);
    /// ```
    #[inline]
    pub fn strides(&self) -> &[usize] {
        self.dim.strides()
    }

    /// Return the number of dimensions (axes) in the array.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dim.ndim()
    }

    /// Return the array's data as a slice, in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    /// Return the array's data as a mutable slice, in row-major order.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [A] {
        &mut self.data
    }

    /// Convert a multi-index into a flat offset into the buffer.
    ///
    /// The index may be a prefix: fewer components than axes address the
    /// first element of the block below the given components.
    ///
    /// **Errors** with the array's fault if it carries one, `InvalidIndex`
    /// if there are more components than axes and `IndexOutOfRange` if a
    /// component is negative or not less than its axis length.
    ///
    /// ```
    /// use ndbuf::{Array, ErrorKind};
    ///
    /// let a = Array::<f64>::zeros([2, 3, 4]);
    /// assert_eq!(a.validate_index([1, 2, 3]), Ok(23));
    /// assert_eq!(a.validate_index([1]), Ok(12));
    /// assert_eq!(a.validate_index([0, 3]).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    /// assert_eq!(a.validate_index([0, 0, 0, 0]).unwrap_err().kind(), ErrorKind::InvalidIndex);
    /// ```
    pub fn validate_index<I: IntoDimension>(&self, index: I) -> Result<usize, ArrayError> {
        if let Some(error) = &self.fault {
            return Err(error.clone());
        }
        self.offset_of(&index.into_dimension())
    }

    pub(crate) fn offset_of(&self, index: &[isize]) -> Result<usize, ArrayError> {
        self.dim.offset_of(index).map_err(|kind| {
            ArrayError::capture(kind, || {
                format!("index {:?} for shape {:?}", index, self.dim.shape())
            })
        })
    }

    /// Change the shape of the array without touching its elements.
    ///
    /// Records `Reshape` if the new shape holds a different number of
    /// elements, or `NegativeAxis` if an axis length is negative.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::<f64>::arange(6.);
    /// a.reshape([2, 3]);
    /// assert_eq!(a.shape(), &[2, 3]);
    /// assert_eq!(a.get([1, 0]), Ok(3.));
    /// ```
    pub fn reshape<Sh: IntoDimension>(&mut self, shape: Sh) -> &mut Self {
        if self.has_fault() {
            return self;
        }
        let lengths = shape.into_dimension();
        let shape = match unsigned_shape(&lengths) {
            Some(shape) => shape,
            None => {
                self.record(ErrorKind::NegativeAxis, || format!("shape {:?}", lengths));
                return self;
            }
        };
        if dimension::size_of_shape_checked(&shape) != Some(self.len()) {
            let from = self.dim.clone();
            self.record(ErrorKind::Reshape, || {
                format!("reshape from {:?} to {:?}", from, shape)
            });
            return self;
        }
        self.dim = Dim::from_shape(&shape);
        self
    }

    /// Make the array one-dimensional, of length `len()`.
    pub fn flatten(&mut self) -> &mut Self {
        if !self.has_fault() {
            self.dim = Dim::linear(self.len());
        }
        self
    }
}

/// # Element access
impl<A: Element> Array<A> {
    /// Return the element at `index`.
    ///
    /// `index` must have one component per axis.
    ///
    /// **Errors** with the array's fault if it carries one, or as
    /// [`validate_index`](Array::validate_index); a prefix index fails with
    /// `InvalidIndex`.
    pub fn get<I: IntoDimension>(&self, index: I) -> Result<A, ArrayError> {
        if let Some(error) = &self.fault {
            return Err(error.clone());
        }
        let index = index.into_dimension();
        self.full_offset(&index).map(|offset| self.data[offset])
    }

    /// Set the element at `index` to `value`.
    ///
    /// Records the error of [`get`](Array::get) for a bad index.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::<f64>::zeros([2, 2]);
    /// a.set([0, 1], 5.).set([1, 1], 6.);
    /// assert_eq!(a.as_slice(), &[0., 5., 0., 6.]);
    /// ```
    pub fn set<I: IntoDimension>(&mut self, index: I, value: A) -> &mut Self {
        if self.has_fault() {
            return self;
        }
        let index = index.into_dimension();
        match self.full_offset(&index) {
            Ok(offset) => self.data[offset] = value,
            Err(error) => self.put_fault(error),
        }
        self
    }

    fn full_offset(&self, index: &[isize]) -> Result<usize, ArrayError> {
        if index.len() != self.ndim() {
            return Err(ArrayError::capture(ErrorKind::InvalidIndex, || {
                format!("index {:?} for shape {:?}", index, self.dim.shape())
            }));
        }
        self.offset_of(index)
    }
}

/// Shape with every length converted to `usize`, or `None` if one is
/// negative.
pub(crate) fn unsigned_shape(lengths: &[isize]) -> Option<Vec<usize>> {
    lengths
        .iter()
        .map(|&len| if len < 0 { None } else { Some(len as usize) })
        .collect()
}
