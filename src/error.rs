use thiserror::Error;

use crate::debug;
use crate::Array;

/// Error code for an error recorded on an array.
///
/// This enumeration is not exhaustive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// the operand array is missing
    #[error("missing operand")]
    NullOperand,
    /// incompatible shapes
    #[error("incompatible shapes")]
    ShapeMismatch,
    /// reshape to a different number of elements
    #[error("reshape changes the number of elements")]
    Reshape,
    /// negative axis length in a shape
    #[error("negative axis length")]
    NegativeAxis,
    /// index component is negative or past the end of its axis
    #[error("index out of range")]
    IndexOutOfRange,
    /// more index components than axes
    #[error("too many indices")]
    InvalidIndex,
    /// axis argument is not an axis of the array
    #[error("axis out of range")]
    AxisOutOfRange,
    /// division by zero, the result holds NaN in its place
    #[error("division by zero")]
    DivisionByZero,
    /// the user supplied reducing function failed
    #[error("reduction function failed")]
    ReductionFunction,
}

impl ErrorKind {
    /// Return `true` if an operation reporting this kind still produced its
    /// full result.
    #[inline]
    pub fn is_fatal(self) -> bool {
        self != ErrorKind::DivisionByZero
    }
}

/// An error recorded on an array, with optional diagnostic text.
///
/// The diagnostic text is only captured while [`debug`] is enabled.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}{}", display_context(.context))]
pub struct ArrayError {
    kind: ErrorKind,
    context: Option<String>,
}

fn display_context(context: &Option<String>) -> String {
    match context {
        Some(text) => format!(": {}", text),
        None => String::new(),
    }
}

impl ArrayError {
    /// Create an error of the given kind without context.
    #[inline]
    pub fn from_kind(kind: ErrorKind) -> Self {
        ArrayError {
            kind,
            context: None,
        }
    }

    /// Create an error, calling `context` only if diagnostics are enabled.
    pub(crate) fn capture<F>(kind: ErrorKind, context: F) -> Self
    where
        F: FnOnce() -> String,
    {
        let context = if debug::is_enabled() { Some(context()) } else { None };
        ArrayError { kind, context }
    }

    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return the diagnostic text, if it was captured.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl From<ErrorKind> for ArrayError {
    fn from(kind: ErrorKind) -> Self {
        ArrayError::from_kind(kind)
    }
}

impl PartialEq<ErrorKind> for ArrayError {
    fn eq(&self, kind: &ErrorKind) -> bool {
        self.kind == *kind
    }
}

/// Sticky fault handling.
impl<A> Array<A> {
    /// Return `true` if the array carries a fault.
    ///
    /// This does not consume the fault.
    #[inline]
    pub fn has_fault(&self) -> bool {
        self.fault.is_some()
    }

    /// Return the fault, if any, without consuming it.
    #[inline]
    pub fn fault(&self) -> Option<&ArrayError> {
        self.fault.as_ref()
    }

    /// Remove and return the fault.
    ///
    /// Each fault is observed exactly once: after this call the array
    /// accepts operations again.
    pub fn take_fault(&mut self) -> Option<ArrayError> {
        self.fault.take()
    }

    /// Convert the end of an operation chain into a `Result`.
    ///
    /// ```
    /// use ndbuf::{Array, ErrorKind};
    ///
    /// let a = Array::<f64>::zeros([2, 3]);
    /// let b = Array::<f64>::zeros([4]);
    /// let mut c = a.clone();
    /// c.add(&b);
    /// assert_eq!(c.into_result().unwrap_err().kind(), ErrorKind::ShapeMismatch);
    /// ```
    pub fn into_result(mut self) -> Result<Self, ArrayError> {
        match self.fault.take() {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }

    /// Record a fault unless one is already present.
    pub(crate) fn record<F>(&mut self, kind: ErrorKind, context: F)
    where
        F: FnOnce() -> String,
    {
        if self.fault.is_none() {
            self.put_fault(ArrayError::capture(kind, context));
        }
    }

    /// Record `error` unless a fault is already present.
    pub(crate) fn put_fault(&mut self, error: ArrayError) {
        if self.fault.is_none() {
            log::debug!("array fault: {}", error);
            self.fault = Some(error);
        }
    }

    /// Take over the fault of an operand.
    ///
    /// Return `true` if `self` is faulted afterwards.
    pub(crate) fn adopt_fault<B>(&mut self, operand: &Array<B>) -> bool {
        if self.fault.is_none() {
            if let Some(error) = &operand.fault {
                log::debug!("array fault taken from operand: {}", error);
                self.fault = Some(error.clone());
            }
        }
        self.fault.is_some()
    }
}
