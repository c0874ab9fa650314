// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::Array;

fn format_block<A, F>(
    data: &[A],
    shape: &[usize],
    depth: usize,
    f: &mut fmt::Formatter<'_>,
    format: &mut F,
) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let (len, inner) = match shape.split_first() {
        Some((&len, inner)) => (len, inner),
        None => return data.first().map_or(Ok(()), |elt| format(elt, f)),
    };
    f.write_str("[")?;
    if inner.is_empty() {
        for (i, elt) in data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            format(elt, f)?;
        }
    } else {
        let stride: usize = inner.iter().product();
        for i in 0..len {
            if i > 0 {
                // new row: the brackets of the outer axes line up
                f.write_str(",\n")?;
                for _ in 0..=depth {
                    f.write_str(" ")?;
                }
            }
            format_block(&data[i * stride..(i + 1) * stride], inner, depth + 1, f, format)?;
        }
    }
    f.write_str("]")
}

fn format_array<A, F>(array: &Array<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    format_block(&array.data, array.shape(), 0, f, &mut format)
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
///
/// ```
/// use ndbuf::Array;
///
/// let a = Array::from_shape_vec([2, 2], vec![1., 2., 3., 4.]);
/// assert_eq!(a.to_string(), "[[1, 2],\n [3, 4]]");
/// ```
impl<A: fmt::Display> fmt::Display for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by its shape, strides
/// and fault.
impl<A: fmt::Debug> fmt::Debug for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)?;
        write!(f, " shape={:?}, strides={:?}", self.shape(), self.strides())?;
        if let Some(error) = self.fault() {
            write!(f, ", fault={}", error)?;
        }
        Ok(())
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
impl<A: fmt::LowerExp> fmt::LowerExp for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}
