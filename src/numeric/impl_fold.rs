use std::any::Any;
use std::convert::Infallible;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::collapse::{collapse, Collapsed};
use crate::dimension::AxisSet;
use crate::error::ErrorKind;
use crate::parallel;
use crate::{Array, Element};

/// # Folding and mapping
///
/// A fold collapses the array over a set of axes and reduces every run of
/// elements that share the same index along the remaining axes to a single
/// value. The array is replaced by the result, whose shape is the shape of
/// the remaining axes (`[1]` if no axis remains).
///
/// The axis set may be given as `[usize; N]`, `&[usize]`, `Vec<usize>`, an
/// [`Axis`](crate::Axis) or an [`AxisSet`]. Duplicated axes count once. An
/// empty set reduces over the whole array.
impl<A: Element> Array<A> {
    /// Collapse over `axes`, recording a fault on invalid axes.
    pub(crate) fn collapse_axes(&mut self, axes: AxisSet) -> Option<Collapsed<A>> {
        if self.has_fault() {
            return None;
        }
        if let Err(kind) = axes.validate(self.ndim()) {
            let ndim = self.ndim();
            self.record(kind, || {
                format!("axes {:?} for array of {} axes", axes.as_slice(), ndim)
            });
            return None;
        }
        Some(collapse(&self.data, &self.dim, &axes))
    }

    /// Reduce every run over `axes` with `f`.
    ///
    /// `f` receives the whole run, in row-major order of the reduced axes.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::from_shape_vec([2, 3], vec![1., 5., 2., 4., 0., 3.]);
    /// a.fold_axes([1], |run| run.iter().cloned().fold(f64::MIN, f64::max));
    /// assert_eq!(a.as_slice(), &[5., 4.]);
    /// ```
    pub fn fold_axes<I, F>(&mut self, axes: I, f: F) -> &mut Self
    where
        I: Into<AxisSet>,
        F: Fn(&[A]) -> A + Sync,
    {
        self.try_fold_axes(axes, |run| Ok::<A, Infallible>(f(run)))
    }

    /// Reduce every run over `axes` with the fallible function `f`.
    ///
    /// If `f` returns an error or panics, the array records a
    /// `ReductionFunction` fault. It still holds the (partial) result: runs
    /// that were not reduced hold `A::default()`.
    pub fn try_fold_axes<I, F, E>(&mut self, axes: I, f: F) -> &mut Self
    where
        I: Into<AxisSet>,
        F: Fn(&[A]) -> Result<A, E> + Sync,
        E: fmt::Display + Send,
    {
        let collapsed = match self.collapse_axes(axes.into()) {
            Some(collapsed) => collapsed,
            None => return self,
        };
        let mut out = vec![A::default(); collapsed.len()];
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            parallel::fold_runs(&collapsed.runs, collapsed.span, &mut out, &f)
        }));
        self.install(collapsed.output_dim(), out);
        match result {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                let message = error.to_string();
                self.record(ErrorKind::ReductionFunction, move || message);
            }
            Err(payload) => {
                let message = panic_message(&*payload);
                self.record(ErrorKind::ReductionFunction, move || message);
            }
        }
        self
    }

    /// Replace every element `x` with `f(x)`. The shape is unchanged.
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let mut a = Array::<f64>::arange(4.);
    /// a.mapv_inplace(|x| x * x);
    /// assert_eq!(a.as_slice(), &[0., 1., 4., 9.]);
    /// ```
    pub fn mapv_inplace<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(A) -> A + Sync,
    {
        self.try_mapv_inplace(|x| Ok::<A, Infallible>(f(x)))
    }

    /// Replace every element `x` with `f(x)`, where `f` may fail.
    ///
    /// On error or panic the array records a `ReductionFunction` fault;
    /// elements not yet mapped keep their previous value.
    pub fn try_mapv_inplace<F, E>(&mut self, f: F) -> &mut Self
    where
        F: Fn(A) -> Result<A, E> + Sync,
        E: fmt::Display + Send,
    {
        if self.has_fault() {
            return self;
        }
        let data = &mut self.data;
        let result = panic::catch_unwind(AssertUnwindSafe(|| parallel::try_map_inplace(data, &f)));
        match result {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                let message = error.to_string();
                self.record(ErrorKind::ReductionFunction, move || message);
            }
            Err(payload) => {
                let message = panic_message(&*payload);
                self.record(ErrorKind::ReductionFunction, move || message);
            }
        }
        self
    }

    /// Return a new array of the same shape with `f` applied to every
    /// element.
    ///
    /// The new array carries a copy of the fault of `self`, if any (and is
    /// then empty).
    ///
    /// ```
    /// use ndbuf::Array;
    ///
    /// let a = Array::from_vec(vec![1., f64::NAN, 3.]);
    /// let mut mask = a.mapv(f64::is_nan);
    /// mask.any([]);
    /// assert_eq!(mask.as_slice(), &[true]);
    /// ```
    pub fn mapv<B, F>(&self, f: F) -> Array<B>
    where
        B: Element,
        F: Fn(A) -> B,
    {
        if let Some(error) = self.fault() {
            return Array::from_error(error.clone());
        }
        Array::from_parts(self.dim.clone(), self.data.iter().map(|&x| f(x)).collect())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "reduction function panicked".to_string()
    }
}
