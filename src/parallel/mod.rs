//! Fork–join execution of bulk operations.
//!
//! The arithmetic executor and the reduction engine hand their destination
//! buffer to the helpers in this module, split into *units*: the tiles of a
//! broadcast, or the runs of a collapsed buffer. Units are disjoint
//! subslices of the destination, so each worker writes memory no other
//! worker touches.
//!
//! With the crate feature `rayon` (enabled by default) buffers of at least
//! [`MIN_PARALLEL_LEN`] elements are processed on the rayon thread pool and
//! the calling thread blocks until all units are done. Otherwise, or without
//! the feature, the units are processed in order on the calling thread. The
//! results are identical either way.
//!
//! Use a custom rayon thread pool (`ThreadPool::install`) to control the
//! number of worker threads.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Buffers shorter than this are processed on the calling thread.
pub const MIN_PARALLEL_LEN: usize = 1 << 14;

/// Number of `unit`-sized pieces grouped into one task, so that a task holds
/// at least `MIN_PARALLEL_LEN` elements.
#[cfg(feature = "rayon")]
fn units_per_task(unit: usize) -> usize {
    ((MIN_PARALLEL_LEN + unit - 1) / unit).max(1)
}

#[cfg(feature = "rayon")]
#[inline]
fn run_parallel(len: usize) -> bool {
    len >= MIN_PARALLEL_LEN && rayon::current_num_threads() > 1
}

/// Call `f(i, unit)` for each consecutive `unit`-length piece of `data`.
///
/// `data.len()` must be a multiple of `unit`. Returns the logical or of the
/// results of `f`.
pub(crate) fn for_each_unit<A, F>(data: &mut [A], unit: usize, f: F) -> bool
where
    A: Send,
    F: Fn(usize, &mut [A]) -> bool + Sync,
{
    if unit == 0 || data.is_empty() {
        return false;
    }
    debug_assert_eq!(data.len() % unit, 0);
    #[cfg(feature = "rayon")]
    {
        if run_parallel(data.len()) {
            let per_task = units_per_task(unit);
            log::trace!(
                "parallel: {} elements in tasks of {} units of {}",
                data.len(),
                per_task,
                unit
            );
            return data
                .par_chunks_mut(per_task * unit)
                .enumerate()
                .map(|(task, chunk)| {
                    chunk
                        .chunks_mut(unit)
                        .enumerate()
                        .fold(false, |acc, (k, piece)| f(task * per_task + k, piece) | acc)
                })
                .reduce(|| false, |a, b| a | b);
        }
    }
    data.chunks_mut(unit)
        .enumerate()
        .fold(false, |acc, (i, piece)| f(i, piece) | acc)
}

/// Call `f` on consecutive chunks of `data` that together cover all of it.
///
/// Returns the logical or of the results of `f`.
pub(crate) fn for_each_chunk<A, F>(data: &mut [A], f: F) -> bool
where
    A: Send,
    F: Fn(&mut [A]) -> bool + Sync,
{
    #[cfg(feature = "rayon")]
    {
        if run_parallel(data.len()) {
            log::trace!("parallel: {} elements in chunks", data.len());
            return data
                .par_chunks_mut(MIN_PARALLEL_LEN)
                .map(|chunk| f(chunk))
                .reduce(|| false, |a, b| a | b);
        }
    }
    f(data)
}

/// Compute `out[i] = f(run i)` where run `i` is `runs[i * span..(i + 1) * span]`.
///
/// Stops at the first error; `out` keeps the values computed until then.
pub(crate) fn fold_runs<A, B, E, F>(runs: &[A], span: usize, out: &mut [B], f: F) -> Result<(), E>
where
    A: Sync,
    B: Send,
    E: Send,
    F: Fn(&[A]) -> Result<B, E> + Sync,
{
    debug_assert_eq!(runs.len(), span * out.len());
    let run = |i: usize| &runs[i * span..(i + 1) * span];
    #[cfg(feature = "rayon")]
    {
        if run_parallel(runs.len()) {
            log::trace!("parallel: folding {} runs of {}", out.len(), span);
            return out
                .par_iter_mut()
                .enumerate()
                .try_for_each(|(i, slot)| {
                    *slot = f(run(i))?;
                    Ok(())
                });
        }
    }
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = f(run(i))?;
    }
    Ok(())
}

/// Replace every element `x` of `data` with `f(x)`.
///
/// Stops at the first error; elements not yet visited keep their value.
pub(crate) fn try_map_inplace<A, E, F>(data: &mut [A], f: F) -> Result<(), E>
where
    A: Copy + Send,
    E: Send,
    F: Fn(A) -> Result<A, E> + Sync,
{
    #[cfg(feature = "rayon")]
    {
        if run_parallel(data.len()) {
            log::trace!("parallel: mapping {} elements", data.len());
            return data.par_iter_mut().try_for_each(|x| {
                *x = f(*x)?;
                Ok(())
            });
        }
    }
    for x in data.iter_mut() {
        *x = f(*x)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{fold_runs, for_each_chunk, for_each_unit, try_map_inplace, MIN_PARALLEL_LEN};

    #[test]
    fn units_are_disjoint_and_ordered() {
        for &len in &[12, 4 * MIN_PARALLEL_LEN] {
            let mut data = vec![0usize; len];
            let hit = for_each_unit(&mut data, 4, |i, piece| {
                for x in piece.iter_mut() {
                    *x += i;
                }
                i == 1
            });
            assert!(hit);
            for (k, &x) in data.iter().enumerate() {
                assert_eq!(x, k / 4);
            }
        }
    }

    #[test]
    fn empty_units() {
        let mut data: Vec<f64> = Vec::new();
        assert!(!for_each_unit(&mut data, 3, |_, _| true));
        let mut data = vec![1.; 4];
        assert!(!for_each_unit(&mut data, 0, |_, _| true));
    }

    #[test]
    fn chunks_cover_everything() {
        for &len in &[0, 7, 3 * MIN_PARALLEL_LEN + 5] {
            let mut data = vec![1u32; len];
            let hit = for_each_chunk(&mut data, |chunk| {
                chunk.iter_mut().for_each(|x| *x += 1);
                !chunk.is_empty()
            });
            assert_eq!(hit, len > 0);
            assert!(data.iter().all(|&x| x == 2));
        }
    }

    #[test]
    fn fold_stops_at_error() {
        let runs: Vec<i32> = (0..6).collect();
        let mut out = vec![0; 3];
        assert_eq!(fold_runs(&runs, 2, &mut out, |r| Ok::<_, ()>(r[0] + r[1])), Ok(()));
        assert_eq!(out, [1, 5, 9]);

        let mut out = vec![0; 3];
        let result = fold_runs(&runs, 2, &mut out, |r| if r[0] == 2 { Err("two") } else { Ok(r[1]) });
        assert_eq!(result, Err("two"));
        assert_eq!(out[0], 1);
        assert_eq!(out[2], 0);
    }

    #[test]
    fn empty_runs() {
        let runs: Vec<f64> = Vec::new();
        let mut out = vec![1.; 3];
        fold_runs(&runs, 0, &mut out, |r| Ok::<_, ()>(r.len() as f64)).unwrap();
        assert_eq!(out, [0., 0., 0.]);
    }

    #[test]
    fn map() {
        let mut data = vec![1, 2, 3];
        try_map_inplace(&mut data, |x| Ok::<_, ()>(x * 10)).unwrap();
        assert_eq!(data, [10, 20, 30]);
        assert_eq!(try_map_inplace(&mut data, |x| if x > 10 { Err(x) } else { Ok(x) }), Err(20));
    }
}
