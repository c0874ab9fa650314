use ndbuf::prelude::*;
use ndbuf_gen::array_builder::{ArrayBuilder, ElementGenerator};

#[test]
fn append_columns() {
    let mut a = ArrayBuilder::new([3, 3]).build::<f64>();
    let b = Array::from_shape_vec([3, 2], vec![-1., -2., -3., -4., -5., -6.]);
    a.append(&b, 1);
    assert!(!a.has_fault());
    assert_eq!(a.shape(), &[3, 5]);
    assert_eq!(a.strides(), &[15, 5, 1]);
    assert_eq!(
        a.as_slice(),
        &[0., 1., 2., -1., -2., 3., 4., 5., -3., -4., 6., 7., 8., -5., -6.]
    );
}

#[test]
fn append_rows() {
    let mut a = Array::<f64>::zeros([0, 4]);
    a.append(&Array::from_shape_vec([1, 4], vec![0., 1., 2., 3.]), 0)
        .append(&Array::from_shape_vec([1, 4], vec![4., 5., 6., 7.]), 0);
    assert_eq!(a.shape(), &[2, 4]);
    assert_eq!(a, ArrayBuilder::new([2, 4]).build::<f64>());
}

#[test]
fn append_inner_axis_of_3d() {
    let mut a = ArrayBuilder::new([2, 1, 2]).build::<f64>();
    let b = ArrayBuilder::new([2, 2, 2])
        .generator(ElementGenerator::Zero)
        .build::<f64>();
    a.append(&b, 1);
    assert_eq!(a.shape(), &[2, 3, 2]);
    assert_eq!(a.sub_array([0]).as_slice(), &[0., 1., 0., 0., 0., 0.]);
    assert_eq!(a.sub_array([1]).as_slice(), &[2., 3., 0., 0., 0., 0.]);
}

#[test]
fn append_errors() {
    let mut a = Array::<f64>::zeros([3, 4]);

    a.append(&Array::zeros([3, 4]), 2);
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::IndexOutOfRange));

    a.append(&Array::zeros([2, 4]), 1);
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::ShapeMismatch));

    a.append(&Array::zeros([3, 4, 1]), 0);
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::ShapeMismatch));

    let missing: Option<&Array<f64>> = None;
    a.append(missing, 0);
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::NullOperand));

    assert_eq!(a.shape(), &[3, 4]);
}

#[test]
fn append_adopts_operand_fault() {
    let mut a = Array::<f64>::zeros([2, 2]);
    let mut b = Array::<f64>::zeros([2, 2]);
    b.reshape([3]);
    a.append(&b, 0);
    assert_eq!(a.fault(), b.fault());
    assert_eq!(a.shape(), &[2, 2]);
}
