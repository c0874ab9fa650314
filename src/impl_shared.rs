// Copyright 2019 ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dimension::IntoDimension;
use crate::error::ArrayError;
use crate::{Array, Element};

/// A reference counted array behind a reader/writer lock.
///
/// Cloning a `SharedArray` makes another handle to the same array. Readers
/// (element reads, shape queries) take the lock shared; mutation, including
/// reshape, resize and append, takes it exclusively, so a reader never sees
/// a shape that does not match the buffer.
///
/// ```
/// use ndbuf::{Array, SharedArray};
///
/// let shared = SharedArray::from(Array::<f64>::zeros([2, 2]));
/// let handle = shared.clone();
/// std::thread::spawn(move || {
///     handle.update(|a| {
///         a.add_scalar(1.).reshape([4]);
///     });
/// })
/// .join()
/// .unwrap();
/// assert_eq!(shared.shape(), vec![4]);
/// assert_eq!(shared.get([3]), Ok(1.));
/// ```
pub struct SharedArray<A> {
    inner: Arc<RwLock<Array<A>>>,
}

impl<A> SharedArray<A> {
    /// Wrap `array` in a new handle.
    pub fn new(array: Array<A>) -> Self {
        SharedArray {
            inner: Arc::new(RwLock::new(array)),
        }
    }

    /// Lock the array for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, Array<A>> {
        self.inner.read()
    }

    /// Lock the array for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, Array<A>> {
        self.inner.write()
    }

    /// Run `f` with exclusive access to the array.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Array<A>) -> R,
    {
        f(&mut self.inner.write())
    }

    /// Return a copy of the current shape.
    pub fn shape(&self) -> Vec<usize> {
        self.read().shape().to_vec()
    }

    /// Return the current number of elements.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Return `true` if the array currently has no elements.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Return `true` if this is the only handle, so that
    /// [`try_unwrap`](Self::try_unwrap) would succeed.
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.inner) == 1
    }

    /// Return the array if this is the only handle, or the handle back
    /// otherwise.
    pub fn try_unwrap(self) -> Result<Array<A>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| SharedArray { inner })
    }
}

impl<A: Element> SharedArray<A> {
    /// Return the element at `index`; see [`Array::get`].
    pub fn get<I: IntoDimension>(&self, index: I) -> Result<A, ArrayError> {
        self.read().get(index)
    }

    /// Return a deep copy of the current array value.
    pub fn snapshot(&self) -> Array<A> {
        self.read().clone()
    }
}

impl<A> Clone for SharedArray<A> {
    fn clone(&self) -> Self {
        SharedArray {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> From<Array<A>> for SharedArray<A> {
    fn from(array: Array<A>) -> Self {
        SharedArray::new(array)
    }
}

impl<A: fmt::Debug> fmt::Debug for SharedArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedArray").field("array", &*self.read()).finish()
    }
}
