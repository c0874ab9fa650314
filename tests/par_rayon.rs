#![cfg(feature = "rayon")]

use ndbuf::parallel::MIN_PARALLEL_LEN;
use ndbuf::prelude::*;
use ndbuf_gen::array_builder::ArrayBuilder;
use rayon::ThreadPoolBuilder;

const M: usize = 64;
const N: usize = 2 * MIN_PARALLEL_LEN / M + 7;

/// Run `f` on a pool with one thread and on a pool with four, and return
/// both results.
fn on_both_pools<F>(f: F) -> (Array<f64>, Array<f64>)
where
    F: Fn() -> Array<f64> + Send + Sync,
{
    let single = ThreadPoolBuilder::new().num_threads(1).build().unwrap();
    let many = ThreadPoolBuilder::new().num_threads(4).build().unwrap();
    (single.install(&f), many.install(&f))
}

#[test]
fn arithmetic_is_deterministic() {
    let (a, b) = on_both_pools(|| {
        let mut a = ArrayBuilder::new([M, N]).build::<f64>();
        a.mul(&ArrayBuilder::new([N]).build::<f64>()).div_scalar(3.).pow_scalar(0.5);
        a
    });
    assert!(!a.has_fault());
    assert_eq!(a, b);
}

#[test]
fn reductions_are_deterministic() {
    let (a, b) = on_both_pools(|| {
        let mut a = ArrayBuilder::new([M, N]).build::<f64>();
        a.sum([0]);
        a
    });
    assert_eq!(a.shape(), &[N]);
    assert_eq!(a, b);

    let (a, b) = on_both_pools(|| {
        let mut a = ArrayBuilder::new([4, M, N / 4]).build::<f64>();
        a.mean([0, 2]);
        a
    });
    assert_eq!(a.shape(), &[M]);
    assert_eq!(a, b);
}

#[test]
fn division_by_zero_in_a_worker() {
    let (a, b) = on_both_pools(|| {
        let mut a = Array::<f64>::zeros([M, N]);
        a.add_scalar(1.);
        let mut rhs = Array::<f64>::zeros([N]);
        rhs.add_scalar(2.).set([N - 1], 0.);
        a.div(&rhs);
        a
    });
    for a in [a, b] {
        assert_eq!(a.fault().map(|e| e.kind()), Some(ErrorKind::DivisionByZero));
        assert!(a.as_slice().chunks(N).all(|row| row[0] == 0.5 && row[N - 1].is_nan()));
    }
}

#[test]
fn fold_error_in_a_worker() {
    let pool = ThreadPoolBuilder::new().num_threads(4).build().unwrap();
    let mut a = pool.install(|| {
        let mut a = ArrayBuilder::new([M, N]).build::<f64>();
        a.try_fold_axes([0], |run| {
            if run[0] == (N / 2) as f64 {
                Err("bad run")
            } else {
                Ok(run[0])
            }
        });
        a
    });
    assert_eq!(a.shape(), &[N]);
    assert_eq!(a.take_fault().map(|e| e.kind()), Some(ErrorKind::ReductionFunction));
}
