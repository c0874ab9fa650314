// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::cmp;

use num_traits::Float;

/// Compute the sum of the values in `xs`
pub(crate) fn unrolled_sum<A>(mut xs: &[A]) -> A
where
    A: Float,
{
    // eightfold unrolled so that floating point can be vectorized
    // (even with strict floating point accuracy semantics)
    let mut acc = A::zero();
    let (mut p0, mut p1, mut p2, mut p3, mut p4, mut p5, mut p6, mut p7) = (
        A::zero(),
        A::zero(),
        A::zero(),
        A::zero(),
        A::zero(),
        A::zero(),
        A::zero(),
        A::zero(),
    );
    while xs.len() >= 8 {
        p0 = p0 + xs[0];
        p1 = p1 + xs[1];
        p2 = p2 + xs[2];
        p3 = p3 + xs[3];
        p4 = p4 + xs[4];
        p5 = p5 + xs[5];
        p6 = p6 + xs[6];
        p7 = p7 + xs[7];

        xs = &xs[8..];
    }
    acc = acc + (p0 + p4);
    acc = acc + (p1 + p5);
    acc = acc + (p2 + p6);
    acc = acc + (p3 + p7);
    for &x in xs {
        acc = acc + x;
    }
    acc
}

/// Sum and count of the values in `xs` that are not NaN.
pub(crate) fn nan_sum_count<A>(xs: &[A]) -> (A, usize)
where
    A: Float,
{
    xs.iter()
        .filter(|x| !x.is_nan())
        .fold((A::zero(), 0), |(sum, n), &x| (sum + x, n + 1))
}

/// Fold `xs` with `pick` (a min or max), NaN if `xs` is empty or holds NaN.
pub(crate) fn extremum<A, F>(xs: &[A], pick: F) -> A
where
    A: Float,
    F: Fn(A, A) -> A,
{
    let (first, rest) = match xs.split_first() {
        Some(split) => split,
        None => return A::nan(),
    };
    let mut acc = *first;
    if acc.is_nan() {
        return acc;
    }
    for &x in rest {
        if x.is_nan() {
            return x;
        }
        acc = pick(acc, x);
    }
    acc
}

/// Fold the values of `xs` that are not NaN with `pick`; NaN if there are
/// none.
pub(crate) fn nan_extremum<A, F>(xs: &[A], pick: F) -> A
where
    A: Float,
    F: Fn(A, A) -> A,
{
    xs.iter()
        .filter(|x| !x.is_nan())
        .fold(None, |acc, &x| match acc {
            None => Some(x),
            Some(acc) => Some(pick(acc, x)),
        })
        .unwrap_or_else(A::nan)
}

/// Compute pairwise equality
///
/// `xs` and `ys` may be of different length, in which case they compare
/// unequal.
pub(crate) fn unrolled_eq<A>(xs: &[A], ys: &[A]) -> bool
where
    A: PartialEq,
{
    if xs.len() != ys.len() {
        return false;
    }
    // eightfold unrolled for performance (this is not done by llvm automatically)
    let len = cmp::min(xs.len(), ys.len());
    let mut xs = &xs[..len];
    let mut ys = &ys[..len];

    while xs.len() >= 8 {
        if (xs[0] != ys[0])
            | (xs[1] != ys[1])
            | (xs[2] != ys[2])
            | (xs[3] != ys[3])
            | (xs[4] != ys[4])
            | (xs[5] != ys[5])
            | (xs[6] != ys[6])
            | (xs[7] != ys[7])
        {
            return false;
        }
        xs = &xs[8..];
        ys = &ys[8..];
    }

    xs.iter().zip(ys).all(|(x, y)| x == y)
}

#[cfg(test)]
mod tests {
    use super::{extremum, nan_extremum, nan_sum_count, unrolled_eq, unrolled_sum};

    #[test]
    fn sum() {
        let xs: Vec<f64> = (1..=20).map(f64::from).collect();
        assert_eq!(unrolled_sum(&xs), 210.);
        assert_eq!(unrolled_sum::<f64>(&[]), 0.);
    }

    #[test]
    fn nan_aware() {
        let xs = [1., f64::NAN, 3.];
        assert_eq!(nan_sum_count(&xs), (4., 2));
        assert_eq!(nan_extremum(&xs, f64::max), 3.);
        assert!(extremum(&xs, f64::max).is_nan());
        assert!(nan_extremum(&[f64::NAN, f64::NAN], f64::min).is_nan());
        assert!(extremum::<f64, _>(&[], f64::min).is_nan());
    }

    #[test]
    fn eq() {
        let xs: Vec<i32> = (0..19).collect();
        let mut ys = xs.clone();
        assert!(unrolled_eq(&xs, &ys));
        ys[17] = -1;
        assert!(!unrolled_eq(&xs, &ys));
        assert!(!unrolled_eq(&xs, &ys[..3]));
    }
}
