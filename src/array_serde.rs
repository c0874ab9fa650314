// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dimension::{self, Dim};
use crate::Array;

/// Version of the serialized array layout.
const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

/// Serialized as `{ "v": 1, "shape": [...], "data": [...] }`, the data in
/// row-major order. A fault is not serialized.
///
/// **Requires crate feature `"serde"`**
impl<A: Serialize> Serialize for Array<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Array", 3)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("shape", self.shape())?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "Array")]
struct ArrayRepr<A> {
    v: u8,
    shape: Vec<usize>,
    data: Vec<A>,
}

/// **Requires crate feature `"serde"`**
impl<'de, A> Deserialize<'de> for Array<A>
where
    A: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ArrayRepr { v, shape, data } = ArrayRepr::deserialize(deserializer)?;
        verify_version(v)?;
        match dimension::size_of_shape_checked(&shape) {
            Some(size) if size == data.len() => Ok(Array::from_parts(Dim::from_shape(&shape), data)),
            _ => Err(de::Error::custom(format!(
                "data and shape must match in size: {} elements for shape {:?}",
                data.len(),
                shape
            ))),
        }
    }
}
