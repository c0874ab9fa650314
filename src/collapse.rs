//! Collapse: reorganise a buffer so that the elements belonging to a set of
//! target axes become contiguous runs.
//!
//! For a shape `[2, 3, 4]` collapsed over axes `{0, 2}`, the retained axis
//! is axis 1: the result holds 3 runs of `2 * 4 = 8` elements each, and run
//! `j` holds every element whose index along axis 1 is `j`, in row-major
//! order of the target axes. Reductions then only look at one run at a
//! time.

use crate::dimension::{AxisSet, Dim};
use crate::parallel;
use crate::Element;

/// A buffer where every retained position owns one contiguous run.
#[derive(Clone, Debug)]
pub(crate) struct Collapsed<A> {
    /// `len() * span` elements, run after run
    pub(crate) runs: Vec<A>,
    /// Length of one run: the product of the target axis lengths
    pub(crate) span: usize,
    /// Lengths of the axes not collapsed, in their original order
    pub(crate) retained: Vec<usize>,
}

impl<A> Collapsed<A> {
    /// Number of runs.
    pub(crate) fn len(&self) -> usize {
        self.retained.iter().product()
    }

    /// Shape of a reduction result: the retained shape, or `[1]` when no
    /// axis is retained.
    pub(crate) fn output_dim(&self) -> Dim {
        if self.retained.is_empty() {
            Dim::linear(1)
        } else {
            Dim::from_shape(&self.retained)
        }
    }
}

/// Collapse `data` (laid out by `dim`) over `axes`.
///
/// An empty axis set collapses over every axis: the whole buffer is one run.
/// `axes` must already be validated against `dim`.
pub(crate) fn collapse<A: Element>(data: &[A], dim: &Dim, axes: &AxisSet) -> Collapsed<A> {
    if axes.is_empty() {
        return Collapsed {
            runs: data.to_vec(),
            span: data.len(),
            retained: Vec::new(),
        };
    }
    let target = axes.sorted();
    let kept: Vec<usize> = (0..dim.ndim()).filter(|ax| !axes.contains(*ax)).collect();
    let retained: Vec<usize> = kept.iter().map(|&ax| dim.shape()[ax]).collect();
    let span: usize = target.iter().map(|&ax| dim.shape()[ax]).product();

    // inner counter: target axes; outer counter: retained axes
    let inner = dim.offsets_over(&target);
    let outer = dim.offsets_over(&kept);
    debug_assert_eq!(inner.len(), span);

    let mut runs = vec![A::default(); outer.len() * span];
    parallel::for_each_unit(&mut runs, span, |r, run| {
        let base = outer[r];
        for (dst, &offset) in run.iter_mut().zip(&inner) {
            *dst = data[base + offset];
        }
        false
    });
    log::trace!(
        "collapse {:?} over {:?}: {} runs of {}",
        dim,
        target,
        outer.len(),
        span
    );
    Collapsed {
        runs,
        span,
        retained,
    }
}

#[cfg(test)]
mod tests {
    use super::collapse;
    use crate::dimension::{AxisSet, Dim};

    fn seq(n: usize) -> Vec<f64> {
        (0..n).map(|x| x as f64).collect()
    }

    #[test]
    fn global() {
        let data = seq(6);
        let c = collapse(&data, &Dim::from_shape(&[2, 3]), &AxisSet::all());
        assert_eq!(c.span, 6);
        assert_eq!(c.len(), 1);
        assert_eq!(c.runs, data);
        assert_eq!(c.output_dim().shape(), &[1]);
    }

    #[test]
    fn leading_axis() {
        let data = seq(6);
        let c = collapse(&data, &Dim::from_shape(&[2, 3]), &AxisSet::from([0]));
        assert_eq!(c.span, 2);
        assert_eq!(c.retained, vec![3]);
        assert_eq!(c.runs, [0., 3., 1., 4., 2., 5.]);
    }

    #[test]
    fn outer_and_inner_axes() {
        let data = seq(24);
        let c = collapse(&data, &Dim::from_shape(&[2, 3, 4]), &AxisSet::from([2, 0]));
        assert_eq!(c.span, 8);
        assert_eq!(c.retained, vec![3]);
        assert_eq!(&c.runs[..8], &[0., 1., 2., 3., 12., 13., 14., 15.]);
        assert_eq!(&c.runs[8..16], &[4., 5., 6., 7., 16., 17., 18., 19.]);
    }

    #[test]
    fn every_axis_listed() {
        let data = seq(6);
        let c = collapse(&data, &Dim::from_shape(&[2, 3]), &AxisSet::from([1, 0]));
        assert_eq!(c.span, 6);
        assert!(c.retained.is_empty());
        assert_eq!(c.runs, data);
    }

    #[test]
    fn zero_length_axes() {
        let c = collapse::<f64>(&[], &Dim::from_shape(&[2, 0, 3]), &AxisSet::from([1]));
        assert_eq!(c.span, 0);
        assert_eq!(c.retained, vec![2, 3]);
        assert_eq!(c.len(), 6);
        assert!(c.runs.is_empty());

        let c = collapse::<f64>(&[], &Dim::from_shape(&[2, 0, 3]), &AxisSet::from([0]));
        assert_eq!(c.span, 2);
        assert_eq!(c.len(), 0);
    }
}
