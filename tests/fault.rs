use ndbuf::prelude::*;
use ndbuf_gen::array_builder::ArrayBuilder;

#[test]
fn fault_is_sticky() {
    let mut a = ArrayBuilder::new([2, 3]).build::<f64>();
    a.reshape([4]).add_scalar(1.).sum([0]).reshape([3, 2]);
    assert!(a.has_fault());
    // nothing ran after the failing reshape
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a.as_slice(), &[0., 1., 2., 3., 4., 5.]);
    assert_eq!(a.validate_index([0, 0]).unwrap_err().kind(), ErrorKind::Reshape);
    assert_eq!(a.get([0, 0]).unwrap_err().kind(), ErrorKind::Reshape);
}

#[test]
fn first_fault_wins() {
    let mut a = Array::from_vec(vec![1., 2.]);
    a.div_scalar(0.);
    a.reshape([3]);
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::DivisionByZero));
}

#[test]
fn take_fault_clears() {
    let mut a = Array::<f64>::zeros([2]);
    a.reshape([-1]);
    assert!(a.has_fault());
    assert!(a.has_fault());
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::NegativeAxis));
    assert!(!a.has_fault());
    assert_eq!(a.take_fault(), None);
    a.add_scalar(1.);
    assert_eq!(a.as_slice(), &[1., 1.]);
}

#[test]
fn operand_fault_is_copied_verbatim() {
    let mut b = Array::<f64>::zeros([2]);
    b.sum([5]);
    let mut a = Array::<f64>::zeros([2]);
    a.mul(&b);
    assert_eq!(a.fault(), b.fault());
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::AxisOutOfRange));
    // the operand keeps its own fault
    assert!(b.has_fault());
}

#[test]
fn mapv_copies_fault() {
    let mut a = Array::<f64>::zeros([2]);
    a.reshape([5]);
    let mask = a.mapv(|x| x > 0.);
    assert_eq!(mask.fault(), a.fault());
    assert!(mask.is_empty());
}

#[test]
fn into_result() {
    let mut a = Array::<f64>::zeros([2, 2]);
    a.add_scalar(2.);
    let a = a.into_result().unwrap();
    assert_eq!(a.as_slice(), &[2.; 4]);

    let mut b = a.clone();
    b.sub(None);
    let err = b.into_result().unwrap_err();
    assert_eq!(err, ErrorKind::NullOperand);
    assert!(err.to_string().starts_with("missing operand"));
}

#[test]
fn error_kinds_are_fatal_except_division() {
    assert!(ErrorKind::Reshape.is_fatal());
    assert!(ErrorKind::NullOperand.is_fatal());
    assert!(!ErrorKind::DivisionByZero.is_fatal());
    let err: ArrayError = ErrorKind::InvalidIndex.into();
    assert_eq!(err.kind(), ErrorKind::InvalidIndex);
    assert_eq!(err.context(), None);
    assert_eq!(err.to_string(), "too many indices");
}
