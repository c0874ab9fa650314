#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;
use ndbuf::prelude::*;
use ndbuf_gen::array_builder::{ArrayBuilder, ElementGenerator};

type Reducer = fn(&mut Array<f64>, AxisSet) -> &mut Array<f64>;

fn seq(shape: &[usize]) -> Array<f64> {
    ArrayBuilder::new(shape).build()
}

#[test]
fn sum_over_leading_axis() {
    let mut a = Array::<f64>::arange(20.);
    a.reshape([2, 10]).sum([0]);
    assert!(!a.has_fault());
    assert_eq!(a.shape(), &[10]);
    let expected: Vec<f64> = (0..10).map(|i| 10. + 2. * i as f64).collect();
    assert_eq!(a.as_slice(), &expected[..]);

    // the same columns shifted by five
    let mut b = Array::range(5., 25., 1.);
    b.reshape([2, 10]).sum([0]);
    let expected: Vec<f64> = (0..10).map(|i| 20. + 2. * i as f64).collect();
    assert_eq!(b.as_slice(), &expected[..]);
}

#[test]
fn sum_axes() {
    let a = seq(&[2, 3, 4]);

    let mut s = a.clone();
    s.sum([2]);
    assert_eq!(s.shape(), &[2, 3]);
    assert_eq!(s.as_slice(), &[6., 22., 38., 54., 70., 86.]);

    let mut s = a.clone();
    s.sum([0, 2]);
    assert_eq!(s.shape(), &[3]);
    assert_eq!(s.as_slice(), &[60., 92., 124.]);

    let mut s = a.clone();
    s.sum(Axis(1));
    assert_eq!(s.shape(), &[2, 4]);
    assert_eq!(s.get([1, 3]), Ok(15. + 19. + 23.));
}

#[test]
fn global_sum() {
    let mut a = seq(&[2, 3, 4]);
    let total = a.scalar_sum();
    a.sum([]);
    assert_eq!(a.shape(), &[1]);
    assert_eq!(a.as_slice(), &[total]);
    assert_eq!(total, 276.);

    let mut b = seq(&[2, 3]);
    b.sum([1, 0]);
    assert_eq!(b.shape(), &[1]);
    assert_eq!(b.as_slice(), &[15.]);
}

#[test]
fn duplicate_axes_count_once() {
    let mut a = seq(&[2, 3]);
    a.sum(vec![1, 1]);
    assert!(!a.has_fault());
    assert_eq!(a.as_slice(), &[3., 12.]);
}

#[test]
fn duplicates_do_not_count_towards_rank() {
    let mut a = seq(&[2, 3]);
    a.sum([0, 1, 0]);
    assert!(!a.has_fault());
    assert_eq!(a.shape(), &[1]);
    assert_eq!(a.as_slice(), &[15.]);

    let mut b = seq(&[2, 3]);
    b.max(vec![1, 1, 1, 1]);
    assert!(!b.has_fault());
    assert_eq!(b.as_slice(), &[2., 5.]);
}

#[test]
fn count() {
    let mut a = seq(&[2, 3, 4]);
    a.count([0, 2]);
    assert_eq!(a.shape(), &[3]);
    assert_eq!(a.as_slice(), &[8.; 3]);

    let mut b = seq(&[2, 3, 4]);
    b.count([]);
    assert_eq!(b.as_slice(), &[24.]);
}

#[test]
fn mean_min_max() {
    let a = seq(&[3, 4]);

    let mut m = a.clone();
    m.mean([1]);
    assert_eq!(m.as_slice(), &[1.5, 5.5, 9.5]);

    let mut m = a.clone();
    m.min([0]);
    assert_eq!(m.as_slice(), &[0., 1., 2., 3.]);

    let mut m = a.clone();
    m.max([0]);
    assert_eq!(m.as_slice(), &[8., 9., 10., 11.]);

    let mut m = a.clone();
    m.mean([]);
    assert_abs_diff_eq!(m.as_slice()[0], 5.5, epsilon = 1e-12);
}

#[test]
fn nan_propagates() {
    let a = ArrayBuilder::new([2, 4])
        .generator(ElementGenerator::NanInterleaved)
        .build::<f64>();

    let reducers: [Reducer; 4] = [Array::sum, Array::mean, Array::min, Array::max];
    for reduce in reducers {
        let mut r = a.clone();
        reduce(&mut r, AxisSet::new(&[1]));
        assert!(r.as_slice().iter().all(|x| x.is_nan()));
    }
}

#[test]
fn nan_aware() {
    // [[0, NaN, 2, NaN], [4, NaN, 6, NaN]]
    let a = ArrayBuilder::new([2, 4])
        .generator(ElementGenerator::NanInterleaved)
        .build::<f64>();

    let mut r = a.clone();
    r.nansum([1]);
    assert_eq!(r.as_slice(), &[2., 10.]);

    let mut r = a.clone();
    r.nanmean([1]);
    assert_eq!(r.as_slice(), &[1., 5.]);

    let mut r = a.clone();
    r.nanmin([0]);
    assert_eq!(r.as_slice()[0], 0.);
    assert!(r.as_slice()[1].is_nan());
    assert_eq!(r.as_slice()[2], 2.);

    let mut r = a.clone();
    r.nanmax([]);
    assert_eq!(r.as_slice(), &[6.]);
}

#[test]
fn all_nan_run() {
    let nan = f64::NAN;
    let a = Array::from_shape_vec([2, 2], vec![nan, nan, 1., nan]);
    let reducers: [Reducer; 4] = [Array::nansum, Array::nanmean, Array::nanmin, Array::nanmax];
    for reduce in reducers {
        let mut r = a.clone();
        reduce(&mut r, AxisSet::new(&[1]));
        assert!(r.as_slice()[0].is_nan());
        assert_eq!(r.as_slice()[1], 1.);
    }
}

#[test]
fn empty_runs() {
    let a = Array::<f64>::zeros([2, 0]);

    let mut r = a.clone();
    r.sum([1]);
    assert_eq!(r.as_slice(), &[0., 0.]);

    let mut r = a.clone();
    r.count([1]);
    assert_eq!(r.as_slice(), &[0., 0.]);

    let mut r = a.clone();
    r.mean([1]);
    assert!(r.as_slice().iter().all(|x| x.is_nan()));

    let mut r = a.clone();
    r.max([1]);
    assert!(r.as_slice().iter().all(|x| x.is_nan()));

    let mut r = a.clone();
    r.sum([0]);
    assert_eq!(r.shape(), &[0]);
}

#[test]
fn axis_errors() {
    let mut a = seq(&[2, 3]);
    a.sum([2]);
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::AxisOutOfRange));
    assert_eq!(a.shape(), &[2, 3]);

    let mut b = seq(&[2, 3]);
    b.sum(AxisSet::new(&[0, 1, 2]));
    assert_eq!(b.take_fault().map(|e| e.kind()), Some(ErrorKind::ShapeMismatch));
    assert_eq!(b, seq(&[2, 3]));
}

#[test]
fn any_all() {
    let a = seq(&[2, 3]);
    let mut big = a.mapv(|x| x > 3.);
    big.any([1]);
    assert_eq!(big.as_slice(), &[false, true]);

    let mut big = a.mapv(|x| x > 3.);
    big.all([0]);
    assert_eq!(big.as_slice(), &[false, false, false]);

    let mut positive = a.mapv(|x| x >= 0.);
    positive.all([]);
    assert_eq!(positive.as_slice(), &[true]);

    let mut none = Array::<bool>::zeros([3, 0]);
    none.all([1]);
    assert_eq!(none.as_slice(), &[true; 3]);
    let mut none = Array::<bool>::zeros([3, 0]);
    none.any([1]);
    assert_eq!(none.as_slice(), &[false; 3]);
}

#[test]
fn fold_axes() {
    let mut a = seq(&[2, 3]);
    a.fold_axes([0], |run| run.iter().product());
    assert_eq!(a.as_slice(), &[0., 4., 10.]);
}

#[test]
fn try_fold_error_keeps_partial_result() {
    let mut a = seq(&[3, 2]);
    a.try_fold_axes([1], |run| {
        if run[0] >= 4. {
            Err(format!("refused run starting at {}", run[0]))
        } else {
            Ok(run[0] + run[1])
        }
    });
    assert_eq!(a.shape(), &[3]);
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::ReductionFunction));
    assert_eq!(a.as_slice(), &[1., 5., 0.]);
}

#[test]
fn try_fold_panic() {
    let mut a = seq(&[2, 2]);
    a.fold_axes([0], |_| panic!("reducer exploded"));
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::ReductionFunction));
    assert_eq!(a.shape(), &[2]);
}

#[test]
fn map_in_place() {
    let mut a = seq(&[2, 2]);
    a.mapv_inplace(|x| x * 10.);
    assert_eq!(a.as_slice(), &[0., 10., 20., 30.]);
    assert_eq!(a.shape(), &[2, 2]);

    a.try_mapv_inplace(|x| if x > 15. { Err("too large") } else { Ok(x + 1.) });
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::ReductionFunction));
    assert_eq!(&a.as_slice()[..2], &[1., 11.]);
}

#[test]
fn large_reduction() {
    // long enough to take the parallel path
    let n = ndbuf::parallel::MIN_PARALLEL_LEN;
    let mut a = ArrayBuilder::new([4, n / 2]).build::<f64>();
    a.sum([0]);
    assert_eq!(a.shape(), &[n / 2]);
    let half = (n / 2) as f64;
    for (i, &x) in a.as_slice().iter().enumerate() {
        assert_eq!(x, 4. * i as f64 + 6. * half);
    }

    let mut b = ArrayBuilder::new([4, n / 2]).build::<f64>();
    b.max([1]);
    assert_eq!(b.get([3]), Ok(4. * half - 1.));
}
