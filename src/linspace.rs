// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::Float;

/// An iterator of a sequence of evenly spaced floats.
///
/// Iterator element type is `F`.
#[derive(Clone, Debug)]
pub struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F> Linspace<F>
where
    F: Float,
{
    #[inline]
    fn value(&self, i: usize) -> F {
        // Calculate the value just like numpy.linspace does
        match F::from(i) {
            Some(i) => self.start + self.step * i,
            None => F::nan(),
        }
    }
}

impl<F> Iterator for Linspace<F>
where
    F: Float,
{
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.value(i))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F> DoubleEndedIterator for Linspace<F>
where
    F: Float,
{
    #[inline]
    fn next_back(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            self.len -= 1;
            Some(self.value(self.len))
        }
    }
}

impl<F> ExactSizeIterator for Linspace<F> where Linspace<F>: Iterator {}

/// Return an iterator of evenly spaced floats.
///
/// The `Linspace` has `n` elements, where the first
/// element is `a` and the last element is `b`.
///
/// Iterator element type is `F`, where `F` must be
/// either `f32` or `f64`.
///
/// ```
/// use ndbuf::linspace;
///
/// let v: Vec<f64> = linspace(0., 1., 5).collect();
/// assert_eq!(v, [0., 0.25, 0.5, 0.75, 1.]);
/// ```
#[inline]
pub fn linspace<F>(a: F, b: F, n: usize) -> Linspace<F>
where
    F: Float,
{
    let step = match F::from(n) {
        Some(nf) if n > 1 => (b - a) / (nf - F::one()),
        _ => F::zero(),
    };
    Linspace {
        start: a,
        step,
        index: 0,
        len: n,
    }
}

/// Return an iterator of floats from `a` up to, not including, `b`, spaced
/// by `step`.
///
/// Numerical reasons can result in `b` being included in the result. A step
/// of zero, a step pointing away from `b`, or a NaN argument produce an
/// empty sequence.
///
/// Iterator element type is `F`, where `F` must be
/// either `f32` or `f64`.
///
/// ```
/// use ndbuf::range;
///
/// let v: Vec<f32> = range(1., 2., 0.25).collect();
/// assert_eq!(v, [1., 1.25, 1.5, 1.75]);
/// assert_eq!(range(0., 1., -1.).len(), 0);
/// ```
#[inline]
pub fn range<F>(a: F, b: F, step: F) -> Linspace<F>
where
    F: Float,
{
    let steps = F::ceil((b - a) / step);
    let len = if step.is_zero() || !steps.is_finite() {
        0
    } else {
        steps.to_usize().unwrap_or(0)
    };
    Linspace {
        start: a,
        step,
        index: 0,
        len,
    }
}

#[cfg(test)]
mod tests {
    use super::{linspace, range};

    #[test]
    fn single_point() {
        let v: Vec<f64> = linspace(3., 7., 1).collect();
        assert_eq!(v, [3.]);
        assert_eq!(linspace(3., 7., 0).count(), 0);
    }

    #[test]
    fn reversed() {
        let v: Vec<f64> = range(0., 4., 1.).rev().collect();
        assert_eq!(v, [3., 2., 1., 0.]);
        let v: Vec<f64> = range(4., 0., -2.).collect();
        assert_eq!(v, [4., 2.]);
    }

    #[test]
    fn degenerate_steps() {
        assert_eq!(range(0., 4., 0.).count(), 0);
        assert_eq!(range(0., f64::NAN, 1.).count(), 0);
    }
}
