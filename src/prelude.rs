// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndbuf prelude.
//!
//! This module contains the most used types and traits that you can import
//! easily as a group.
//!
//! ```
//! use ndbuf::prelude::*;
//!
//! let mut a = Array::<f64>::zeros([2, 2]);
//! a.add_scalar(1.).sum(Axis(0));
//! assert_eq!(a.as_slice(), &[2., 2.]);
//! ```

#[doc(no_inline)]
pub use crate::{Array, SharedArray};

#[doc(no_inline)]
pub use crate::{Axis, AxisSet, Dim, IntoDimension};

#[doc(no_inline)]
pub use crate::{ArrayError, ErrorKind};

#[doc(no_inline)]
pub use crate::{Element, NdFloat};
