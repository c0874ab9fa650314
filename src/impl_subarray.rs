//! Reads and writes of the contiguous block under a prefix index.
//!
//! For an array of shape `[2, 3, 4]`, the prefix index `[1]` addresses the
//! `[3, 4]` block holding elements `12..24`, and `[1, 2]` the `[4]` block
//! holding elements `20..24`. The empty index addresses the whole array.

use crate::dimension::{broadcast_block, Dim, IntoDimension};
use crate::error::{ArrayError, ErrorKind};
use crate::{Array, Element};

/// # Sub-arrays
impl<A: Element> Array<A> {
    /// Flat range and shape of the block under `index`.
    ///
    /// The block under a full index is the single element, of shape `[1]`.
    fn block(&self, index: &[isize]) -> Result<(usize, usize, Vec<usize>), ArrayError> {
        let start = self.offset_of(index)?;
        let len = self.dim.block_len(index.len());
        let shape = match &self.shape()[index.len()..] {
            [] => vec![1],
            inner => inner.to_vec(),
        };
        Ok((start, len, shape))
    }

    /// Return the block under the prefix `index` as a slice.
    ///
    /// **Errors** with the array's fault if it carries one, or as
    /// [`validate_index`](Array::validate_index).
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let a = Array::<f64>::arange(6.);
    /// let mut b = a.clone();
    /// b.reshape([2, 3]);
    /// assert_eq!(b.slice_element([1]).unwrap(), &[3., 4., 5.]);
    /// ```
    pub fn slice_element<I: IntoDimension>(&self, index: I) -> Result<&[A], ArrayError> {
        if let Some(error) = &self.fault {
            return Err(error.clone());
        }
        let (start, len, _) = self.block(&index.into_dimension())?;
        Ok(&self.data[start..start + len])
    }

    /// Return a copy of the block under the prefix `index`, with the shape
    /// of the axes not indexed (`[1]` for a full index).
    ///
    /// On error the result is empty and carries the fault.
    pub fn sub_array<I: IntoDimension>(&self, index: I) -> Array<A> {
        if let Some(error) = &self.fault {
            return Array::from_error(error.clone());
        }
        match self.block(&index.into_dimension()) {
            Ok((start, len, shape)) => {
                Array::from_parts(Dim::from_shape(&shape), self.data[start..start + len].to_vec())
            }
            Err(error) => Array::from_error(error),
        }
    }

    /// Overwrite the block under the prefix `index` with `values`.
    ///
    /// Records `ShapeMismatch` if `values` does not have exactly the length
    /// of the block; nothing is written then.
    pub fn set_slice_element<I: IntoDimension>(&mut self, index: I, values: &[A]) -> &mut Self {
        if self.has_fault() {
            return self;
        }
        let (start, len) = match self.block(&index.into_dimension()) {
            Ok((start, len, _)) => (start, len),
            Err(error) => {
                self.put_fault(error);
                return self;
            }
        };
        if values.len() != len {
            self.record(ErrorKind::ShapeMismatch, || {
                format!("{} values for a block of {}", values.len(), len)
            });
            return self;
        }
        self.data[start..start + len].copy_from_slice(values);
        self
    }

    /// Overwrite the block under the prefix `index` with `src`.
    ///
    /// `src` is broadcast over the block like the right hand side of the
    /// arithmetic operations: its shape must equal the trailing axes of the
    /// block, and it is tiled over the rest. As with
    /// [`sub_array`](Array::sub_array), the block under a full index has
    /// shape `[1]`, so whatever `sub_array` returns can be written back.
    ///
    /// Records `NullOperand` if `src` is `None`, adopts the fault of `src`,
    /// and records the index errors of
    /// [`validate_index`](Array::validate_index) or `ShapeMismatch`. Nothing
    /// is written when a fault is recorded.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::<f64>::zeros([2, 2, 2]);
    /// a.set_sub_array([1], &Array::from_vec(vec![1., 2.]));
    /// assert_eq!(a.as_slice(), &[0., 0., 0., 0., 1., 2., 1., 2.]);
    /// ```
    pub fn set_sub_array<'a, I>(&mut self, index: I, src: impl Into<Option<&'a Array<A>>>) -> &mut Self
    where
        I: IntoDimension,
    {
        if self.has_fault() {
            return self;
        }
        let src = match src.into() {
            Some(src) => src,
            None => {
                self.record(ErrorKind::NullOperand, || "set_sub_array".to_string());
                return self;
            }
        };
        if self.adopt_fault(src) {
            return self;
        }
        let (start, len, shape) = match self.block(&index.into_dimension()) {
            Ok(block) => block,
            Err(error) => {
                self.put_fault(error);
                return self;
            }
        };
        let tile = match broadcast_block(&shape, src.shape()) {
            Ok(tile) => tile,
            Err(kind) => {
                let src_dim = src.dim.clone();
                self.record(kind, || format!("{:?} into block {:?}", src_dim, shape));
                return self;
            }
        };
        if tile > 0 {
            for chunk in self.data[start..start + len].chunks_mut(tile) {
                chunk.copy_from_slice(&src.data);
            }
        }
        self
    }
}
