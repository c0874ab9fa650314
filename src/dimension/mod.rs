// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::error::ErrorKind;

pub use self::axes::AxisSet;
pub use self::axis::Axis;
pub(crate) use self::broadcast::broadcast_block;
pub use self::conversion::{AxisLen, IntoDimension};

mod axes;
mod axis;
mod broadcast;
mod conversion;

/// Shape and strides of an array.
///
/// `strides` has one more entry than `shape`: `strides[0]` is the number of
/// elements, and `strides[i + 1]` is the offset step of axis `i`. They
/// always satisfy `strides[i] == shape[i] * strides[i + 1]` and end in `1`.
///
/// ```
/// use ndbuf::Dim;
///
/// let dim = Dim::from_shape(&[2, 3, 4]);
/// assert_eq!(dim.strides(), &[24, 12, 4, 1]);
/// assert_eq!(dim.size(), 24);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Dim {
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl Dim {
    /// Compute the strides of `shape`.
    ///
    /// **Panics** if the number of elements overflows `isize`; see
    /// [`Dim::checked`] for the fallible version.
    pub fn from_shape(shape: &[usize]) -> Dim {
        match Dim::checked(shape) {
            Some(dim) => dim,
            None => panic!("ndbuf: shape {:?} overflows isize", shape),
        }
    }

    /// Compute the strides of `shape`, or return `None` if the number of
    /// elements overflows `isize`.
    ///
    /// ```
    /// use ndbuf::Dim;
    ///
    /// assert!(Dim::checked(&[usize::MAX, 2]).is_none());
    /// assert_eq!(Dim::checked(&[3, 2]).map(|d| d.size()), Some(6));
    /// ```
    pub fn checked(shape: &[usize]) -> Option<Dim> {
        let strides = default_strides(shape)?;
        Some(Dim {
            shape: shape.to_vec(),
            strides,
        })
    }

    /// Validate a signed shape and compute its strides.
    ///
    /// Fails with `NegativeAxis` if any length is negative and with
    /// `ShapeMismatch` if the number of elements overflows `isize`.
    pub fn from_lengths(lengths: &[isize]) -> Result<Dim, ErrorKind> {
        let mut shape = Vec::with_capacity(lengths.len());
        for &len in lengths {
            if len < 0 {
                return Err(ErrorKind::NegativeAxis);
            }
            shape.push(len as usize);
        }
        Dim::checked(&shape).ok_or(ErrorKind::ShapeMismatch)
    }

    /// The rank-1 dimension of length `len`.
    #[inline]
    pub fn linear(len: usize) -> Dim {
        Dim {
            shape: vec![len],
            strides: vec![len, 1],
        }
    }

    /// Axis lengths, outermost first.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// `[size, stride of axis 0, stride of axis 1, ..., 1]`
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.strides[0]
    }

    /// Length of the contiguous block addressed by a prefix of `depth`
    /// index components.
    #[inline]
    pub(crate) fn block_len(&self, depth: usize) -> usize {
        self.strides[depth]
    }

    /// Convert a (possibly partial) multi-index into a flat offset.
    ///
    /// Fewer components than axes address the first element of the block
    /// below the given prefix.
    ///
    /// Fails with `InvalidIndex` if there are more components than axes and
    /// with `IndexOutOfRange` if a component is negative or not less than
    /// its axis length.
    pub fn offset_of(&self, index: &[isize]) -> Result<usize, ErrorKind> {
        if index.len() > self.ndim() {
            return Err(ErrorKind::InvalidIndex);
        }
        let mut offset = 0;
        for (k, &i) in index.iter().enumerate() {
            if i < 0 || i as usize >= self.shape[k] {
                return Err(ErrorKind::IndexOutOfRange);
            }
            offset += i as usize * self.strides[k + 1];
        }
        Ok(offset)
    }

    /// Flat offsets of every multi-index over the given axes (in increasing
    /// order), with the other axes held at zero, in row-major order.
    pub(crate) fn offsets_over(&self, axes: &[usize]) -> Vec<usize> {
        let shape: Vec<usize> = axes.iter().map(|&ax| self.shape[ax]).collect();
        let strides: Vec<usize> = axes.iter().map(|&ax| self.strides[ax + 1]).collect();
        flat_offsets(&shape, &strides)
    }
}

impl fmt::Debug for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.shape)
    }
}

/// Compute default array strides
///
/// Shape (a, b, c) => Give strides (a * b * c, b * c, c, 1)
///
/// Return `None` if the element count overflows `isize`.
pub(crate) fn default_strides(shape: &[usize]) -> Option<Vec<usize>> {
    let mut strides = vec![1; shape.len() + 1];
    let mut cum_prod: usize = 1;
    for (i, &len) in shape.iter().enumerate().rev() {
        cum_prod = cum_prod.checked_mul(len)?;
        strides[i] = cum_prod;
    }
    if cum_prod > isize::MAX as usize {
        return None;
    }
    Some(strides)
}

/// Number of elements of `shape`, `None` on overflow.
pub(crate) fn size_of_shape_checked(shape: &[usize]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &len| acc.checked_mul(len))
        .filter(|&size| size <= isize::MAX as usize)
}

/// Walk all multi-indices of `shape` with an incrementing counter (last axis
/// fastest) and collect the flat offset of each, given per-axis `strides`.
pub(crate) fn flat_offsets(shape: &[usize], strides: &[usize]) -> Vec<usize> {
    debug_assert_eq!(shape.len(), strides.len());
    let count: usize = shape.iter().product();
    let mut offsets = Vec::with_capacity(count);
    if count == 0 {
        return offsets;
    }
    let mut index = vec![0; shape.len()];
    let mut offset = 0;
    loop {
        offsets.push(offset);
        let mut axis = shape.len();
        loop {
            if axis == 0 {
                return offsets;
            }
            axis -= 1;
            index[axis] += 1;
            offset += strides[axis];
            if index[axis] < shape[axis] {
                break;
            }
            offset -= strides[axis] * shape[axis];
            index[axis] = 0;
        }
    }
}
