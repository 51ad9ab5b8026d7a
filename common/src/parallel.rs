//! Bounded parallel map over a slice.
//!
//! Batches of work that each allocate a full image buffer must not all be in
//! flight at once, so items are processed in rayon-parallel windows of at
//! most `max_in_flight` items.

use rayon::prelude::*;

/// Maps `f` over `items` in parallel with at most `max_in_flight` items active.
///
/// Output order matches input order.
///
/// # Panics
///
/// Panics if `max_in_flight` is 0.
pub fn par_map_limited<T, R, F>(items: &[T], max_in_flight: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    assert!(max_in_flight > 0, "max_in_flight must be > 0");

    let mut results = Vec::with_capacity(items.len());
    for window in items.chunks(max_in_flight) {
        results.par_extend(window.par_iter().map(&f));
    }
    results
}

/// Number of items to keep in flight when the caller does not specify one.
pub fn default_parallelism() -> usize {
    rayon::current_num_threads().max(1)
}
