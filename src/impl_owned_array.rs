use crate::dimension::{Dim, IntoDimension};
use crate::error::ErrorKind;
use crate::{Array, Element};

impl<A> Array<A> {
    /// Return the buffer of the array, consuming it.
    ///
    /// The elements are in row-major order.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data
    }
}

/// # Methods that change the number of elements
impl<A: Element> Array<A> {
    /// Change the shape of the array to `shape`, growing or shrinking the
    /// buffer.
    ///
    /// Elements keep their **flat offset** in the buffer, not their
    /// multi-index: resizing `[5, 5]` to `[5, 2]` keeps the first ten
    /// elements. New elements are zero (`false` for booleans).
    ///
    /// Records `NegativeAxis` if an axis length is negative and
    /// `ShapeMismatch` if the number of elements would overflow `isize`;
    /// the array is unchanged then.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::<f64>::arange(4.);
    /// a.resize([2, 3]);
    /// assert_eq!(a.as_slice(), &[0., 1., 2., 3., 0., 0.]);
    /// a.resize([3]);
    /// assert_eq!(a.as_slice(), &[0., 1., 2.]);
    /// ```
    pub fn resize<Sh: IntoDimension>(&mut self, shape: Sh) -> &mut Self {
        if self.has_fault() {
            return self;
        }
        let lengths = shape.into_dimension();
        let dim = match Dim::from_lengths(&lengths) {
            Ok(dim) => dim,
            Err(kind) => {
                self.record(kind, || format!("resize to shape {:?}", lengths));
                return self;
            }
        };
        self.data.resize(dim.size(), A::default());
        self.dim = dim;
        self
    }

    /// Append the elements of `other` to the array along `axis`.
    ///
    /// Both arrays must have the same number of axes, and equal lengths
    /// along every axis but `axis`. The length of `axis` grows by the length
    /// of `other` along it.
    ///
    /// Records `NullOperand` if `other` is `None`, adopts the fault of
    /// `other`, records `IndexOutOfRange` if `axis` is not an axis of the
    /// array, and `ShapeMismatch` if the shapes are incompatible.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::<f64>::zeros([2, 2]);
    /// let b = Array::from_shape_vec([2, 1], vec![1., 2.]);
    /// a.append(&b, 1);
    /// assert_eq!(a.shape(), &[2, 3]);
    /// assert_eq!(a.as_slice(), &[0., 0., 1., 0., 0., 2.]);
    /// ```
    pub fn append<'a>(&mut self, other: impl Into<Option<&'a Array<A>>>, axis: usize) -> &mut Self {
        if self.has_fault() {
            return self;
        }
        let other = match other.into() {
            Some(other) => other,
            None => {
                self.record(ErrorKind::NullOperand, || "append".to_string());
                return self;
            }
        };
        if self.adopt_fault(other) {
            return self;
        }
        if axis >= self.ndim() {
            let ndim = self.ndim();
            self.record(ErrorKind::IndexOutOfRange, || {
                format!("append along axis {} of an array of {} axes", axis, ndim)
            });
            return self;
        }
        let compatible = self.ndim() == other.ndim()
            && self
                .shape()
                .iter()
                .zip(other.shape())
                .enumerate()
                .all(|(k, (a, b))| k == axis || a == b);
        if !compatible {
            let (lhs, rhs) = (self.dim.clone(), other.dim.clone());
            self.record(ErrorKind::ShapeMismatch, || {
                format!("append {:?} to {:?} along axis {}", rhs, lhs, axis)
            });
            return self;
        }

        let mut shape = self.shape().to_vec();
        shape[axis] += other.shape()[axis];
        let dim = match Dim::checked(&shape) {
            Some(dim) => dim,
            None => {
                self.record(ErrorKind::ShapeMismatch, || {
                    format!("append along axis {} overflows shape {:?}", axis, shape)
                });
                return self;
            }
        };

        // blocks below the leading axes alternate between the two buffers
        let outer: usize = shape[..axis].iter().product();
        let (own, theirs) = (self.dim.block_len(axis), other.dim.block_len(axis));
        let mut data = Vec::with_capacity(dim.size());
        for i in 0..outer {
            data.extend_from_slice(&self.data[i * own..(i + 1) * own]);
            data.extend_from_slice(&other.data[i * theirs..(i + 1) * theirs]);
        }
        self.install(dim, data);
        self
    }
}
