// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::AxisSet;
use crate::numeric_util;
use crate::{Array, NdFloat};

#[inline]
fn len_as<A: NdFloat>(n: usize) -> A {
    A::from_usize(n).unwrap_or_else(A::infinity)
}

/// # Numerical reductions
///
/// All reductions replace the array by the result of reducing over `axes`;
/// see [`fold_axes`](Array::fold_axes) for how axis sets are given and how
/// the result is shaped. An empty axis set reduces over the whole array to a
/// single element.
///
/// Reductions over runs of zero elements give `0` for the sums and the
/// count, and NaN for the mean, minimum and maximum.
impl<A: NdFloat> Array<A> {
    /// Sum over `axes`.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::from_shape_vec([2, 2], vec![1., 2., 3., 4.]);
    /// a.sum([0]);
    /// assert_eq!(a.as_slice(), &[4., 6.]);
    /// a.sum([]);
    /// assert_eq!(a.as_slice(), &[10.]);
    /// ```
    pub fn sum<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.fold_axes(axes, numeric_util::unrolled_sum)
    }

    /// Number of elements in each run over `axes`: the product of the
    /// lengths of the reduced axes, at every retained position.
    pub fn count<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.fold_axes(axes, |run| len_as(run.len()))
    }

    /// Arithmetic mean over `axes`: the sum divided by the count.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::from_shape_vec([2, 2], vec![1., 2., 3., 4.]);
    /// a.mean([1]);
    /// assert_eq!(a.as_slice(), &[1.5, 3.5]);
    /// ```
    pub fn mean<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.fold_axes(axes, |run| {
            numeric_util::unrolled_sum(run) / len_as::<A>(run.len())
        })
    }

    /// Minimum over `axes`; NaN if the run holds NaN.
    pub fn min<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.fold_axes(axes, |run| numeric_util::extremum(run, A::min))
    }

    /// Maximum over `axes`; NaN if the run holds NaN.
    pub fn max<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.fold_axes(axes, |run| numeric_util::extremum(run, A::max))
    }

    /// Sum over `axes`, skipping NaN.
    ///
    /// A run where every value is NaN sums to NaN.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let nan = f64::NAN;
    /// let mut a = Array::from_shape_vec([2, 2], vec![1., nan, nan, nan]);
    /// a.nansum([1]);
    /// assert_eq!(a.as_slice()[0], 1.);
    /// assert!(a.as_slice()[1].is_nan());
    /// ```
    pub fn nansum<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.fold_axes(axes, |run| match numeric_util::nan_sum_count(run) {
            (_, 0) if !run.is_empty() => A::nan(),
            (sum, _) => sum,
        })
    }

    /// Mean over `axes` of the values that are not NaN.
    ///
    /// A run where every value is NaN has a NaN mean.
    pub fn nanmean<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.fold_axes(axes, |run| {
            let (sum, n) = numeric_util::nan_sum_count(run);
            sum / len_as::<A>(n)
        })
    }

    /// Minimum over `axes`, skipping NaN.
    pub fn nanmin<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.fold_axes(axes, |run| numeric_util::nan_extremum(run, A::min))
    }

    /// Maximum over `axes`, skipping NaN.
    pub fn nanmax<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.fold_axes(axes, |run| numeric_util::nan_extremum(run, A::max))
    }

    /// Return the sum of all elements, leaving the array unchanged.
    ///
    /// Returns NaN for a faulted array.
    pub fn scalar_sum(&self) -> A {
        if self.has_fault() {
            return A::nan();
        }
        numeric_util::unrolled_sum(&self.data)
    }
}
