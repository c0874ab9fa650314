use crate::error::ErrorKind;
use crate::Axis;

/// An ordered set of axes, the target of a reduction.
///
/// Duplicates are dropped when the set is built: the first occurrence of an
/// axis is kept and the order of the remaining axes is preserved.
///
/// ```
/// use ndbuf::AxisSet;
///
/// let axes = AxisSet::from([2, 0, 2, 1]);
/// assert_eq!(axes.as_slice(), &[2, 0, 1]);
/// assert_eq!(axes.len(), 3);
/// assert_eq!(axes.sorted(), vec![0, 1, 2]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AxisSet {
    axes: Vec<usize>,
}

impl AxisSet {
    /// The empty set: reduce over the whole array.
    pub fn all() -> Self {
        AxisSet::default()
    }

    /// Build a set from a list of axes, keeping the first occurrence of
    /// each axis.
    pub fn new(axes: &[usize]) -> Self {
        axes.iter().copied().collect()
    }

    /// The axes in first-occurrence order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.axes
    }

    /// Number of distinct axes.
    #[inline]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Return `true` if the set has no axes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Return `true` if `axis` is in the set.
    pub fn contains(&self, axis: usize) -> bool {
        self.axes.contains(&axis)
    }

    /// The axes in increasing order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut axes = self.axes.clone();
        axes.sort_unstable();
        axes
    }

    /// Check the set against an array of `ndim` axes.
    ///
    /// Duplicates were already dropped, so `[0, 1, 0]` is valid for two axes.
    pub(crate) fn validate(&self, ndim: usize) -> Result<(), ErrorKind> {
        if self.axes.len() > ndim {
            return Err(ErrorKind::ShapeMismatch);
        }
        if self.axes.iter().any(|&axis| axis >= ndim) {
            return Err(ErrorKind::AxisOutOfRange);
        }
        Ok(())
    }
}

impl FromIterator<usize> for AxisSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = AxisSet::default();
        for axis in iter {
            if !set.axes.contains(&axis) {
                set.axes.push(axis);
            }
        }
        set
    }
}

impl FromIterator<Axis> for AxisSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Axis>,
    {
        iter.into_iter().map(Axis::index).collect()
    }
}

impl<const N: usize> From<[usize; N]> for AxisSet {
    fn from(axes: [usize; N]) -> Self {
        axes.into_iter().collect()
    }
}

impl<const N: usize> From<&[usize; N]> for AxisSet {
    fn from(axes: &[usize; N]) -> Self {
        AxisSet::new(axes)
    }
}

impl From<&[usize]> for AxisSet {
    fn from(axes: &[usize]) -> Self {
        AxisSet::new(axes)
    }
}

impl From<Vec<usize>> for AxisSet {
    fn from(axes: Vec<usize>) -> Self {
        axes.into_iter().collect()
    }
}

impl From<Axis> for AxisSet {
    fn from(axis: Axis) -> Self {
        std::iter::once(axis.index()).collect()
    }
}
