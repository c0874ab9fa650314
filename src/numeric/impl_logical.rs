use crate::dimension::AxisSet;
use crate::parallel;
use crate::Array;

/// Combine `run` into `run[0]` by repeated halving.
fn halve<F>(run: &mut [bool], op: F)
where
    F: Fn(bool, bool) -> bool,
{
    let mut len = run.len();
    while len > 1 {
        let half = (len + 1) / 2;
        for i in 0..len / 2 {
            run[i] = op(run[i], run[i + half]);
        }
        len = half;
    }
}

/// # Logical reductions
impl Array<bool> {
    /// Logical or over `axes`. An empty run gives `false`.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::from_shape_vec([2, 3], vec![false, true, false, false, false, false]);
    /// a.any([1]);
    /// assert_eq!(a.as_slice(), &[true, false]);
    /// ```
    pub fn any<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.combine_runs(axes.into(), false, |x, y| x | y)
    }

    /// Logical and over `axes`. An empty run gives `true`.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::from_shape_vec([2, 3], vec![true, true, false, true, true, true]);
    /// a.all([0]);
    /// assert_eq!(a.as_slice(), &[true, true, false]);
    /// ```
    pub fn all<I: Into<AxisSet>>(&mut self, axes: I) -> &mut Self {
        self.combine_runs(axes.into(), true, |x, y| x & y)
    }

    fn combine_runs<F>(&mut self, axes: AxisSet, identity: bool, op: F) -> &mut Self
    where
        F: Fn(bool, bool) -> bool + Sync,
    {
        let mut collapsed = match self.collapse_axes(axes) {
            Some(collapsed) => collapsed,
            None => return self,
        };
        let span = collapsed.span;
        let out = if span == 0 {
            vec![identity; collapsed.len()]
        } else {
            parallel::for_each_unit(&mut collapsed.runs, span, |_, run| {
                halve(run, &op);
                false
            });
            collapsed.runs.iter().step_by(span).copied().collect()
        };
        self.install(collapsed.output_dim(), out);
        self
    }
}
