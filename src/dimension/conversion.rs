// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and index argument conversion: IntoDimension and related things

/// An integer usable as an axis length or as an index component.
///
/// Signed types are accepted so that negative lengths and indices can be
/// reported as faults instead of wrapping around.
pub trait AxisLen: Copy {
    /// Convert to `isize`, saturating values that do not fit.
    fn to_isize(self) -> isize;
}

macro_rules! impl_axis_len {
    ($($t:ty),*) => {
        $(
            impl AxisLen for $t {
                #[inline]
                fn to_isize(self) -> isize {
                    isize::try_from(self).unwrap_or(isize::MAX)
                }
            }
        )*
    };
}

impl_axis_len!(usize, u32, u64, isize, i32, i64);

/// Argument conversion into a list of axis lengths or index components.
///
/// Implemented for arrays, slices, vectors and tuples of [`AxisLen`]
/// integers, so that both `[2, 3]` and `(2, 3)` or `a.shape()` work as shape
/// arguments.
pub trait IntoDimension {
    /// The components, outermost axis first.
    fn into_dimension(self) -> Vec<isize>;
}

impl<T: AxisLen, const N: usize> IntoDimension for [T; N] {
    fn into_dimension(self) -> Vec<isize> {
        self.iter().map(|&x| x.to_isize()).collect()
    }
}

impl<T: AxisLen, const N: usize> IntoDimension for &[T; N] {
    fn into_dimension(self) -> Vec<isize> {
        self.iter().map(|&x| x.to_isize()).collect()
    }
}

impl<T: AxisLen> IntoDimension for &[T] {
    fn into_dimension(self) -> Vec<isize> {
        self.iter().map(|&x| x.to_isize()).collect()
    }
}

impl<T: AxisLen> IntoDimension for Vec<T> {
    fn into_dimension(self) -> Vec<isize> {
        self.into_iter().map(AxisLen::to_isize).collect()
    }
}

impl<T: AxisLen> IntoDimension for &Vec<T> {
    fn into_dimension(self) -> Vec<isize> {
        self.iter().map(|&x| x.to_isize()).collect()
    }
}

impl IntoDimension for () {
    fn into_dimension(self) -> Vec<isize> {
        Vec::new()
    }
}

macro_rules! tuple_into_dimension {
    ($($name:ident)+) => {
        impl<T: AxisLen> IntoDimension for ($(tuple_into_dimension!(@ty $name),)+) {
            #[allow(non_snake_case)]
            fn into_dimension(self) -> Vec<isize> {
                let ($($name,)+) = self;
                vec![$($name.to_isize()),+]
            }
        }
    };
    (@ty $name:ident) => { T };
}

tuple_into_dimension!(a);
tuple_into_dimension!(a b);
tuple_into_dimension!(a b c);
tuple_into_dimension!(a b c d);
tuple_into_dimension!(a b c d e);
tuple_into_dimension!(a b c d e f);
