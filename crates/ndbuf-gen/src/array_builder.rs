// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndbuf::{Array, IntoDimension, NdFloat};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    shape: Vec<isize>,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// 0, 1, 2, ... in row-major order
    Sequential,
    Zero,
    /// Sequential with every other element replaced by NaN
    NanInterleaved,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        Self::new([1])
    }
}

impl ArrayBuilder
{
    pub fn new(shape: impl IntoDimension) -> Self
    {
        ArrayBuilder {
            shape: shape.into_dimension(),
            generator: ElementGenerator::Sequential,
        }
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    /// Build the array. A negative axis length gives an array carrying the
    /// `NegativeAxis` fault.
    pub fn build<T>(self) -> Array<T>
    where T: NdFloat
    {
        let size = self.shape.iter().map(|&len| len.max(0) as usize).product();
        let mut current = T::zero();
        let generator = self.generator;
        let data = (0..size)
            .map(|i| {
                let ret = current;
                current = current + T::one();
                match generator {
                    ElementGenerator::Sequential => ret,
                    ElementGenerator::Zero => T::zero(),
                    ElementGenerator::NanInterleaved if i % 2 == 1 => T::nan(),
                    ElementGenerator::NanInterleaved => ret,
                }
            })
            .collect();
        Array::from_shape_vec(self.shape, data)
    }
}

#[test]
fn test_sequential()
{
    let a = ArrayBuilder::new([2, 3]).build::<f64>();
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a.strides(), &[6, 3, 1]);
    assert_eq!(a.as_slice(), &[0., 1., 2., 3., 4., 5.]);

    let z = ArrayBuilder::new([4])
        .generator(ElementGenerator::Zero)
        .build::<f32>();
    assert_eq!(z.as_slice(), &[0.; 4]);
}

#[test]
fn test_nan_interleaved()
{
    let a = ArrayBuilder::new([4])
        .generator(ElementGenerator::NanInterleaved)
        .build::<f64>();
    assert_eq!(a.as_slice()[2], 2.);
    assert!(a.as_slice()[3].is_nan());
}
