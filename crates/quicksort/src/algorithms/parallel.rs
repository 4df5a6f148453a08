use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::{Scope, ThreadPool};

use super::partition::{partition, split_zones};
use super::sequential::quick_sort;

/// Sorts `data` on `pool`, spawning one task per range of at least `limit`
/// elements. Returns the number of tasks spawned, root included.
///
/// Every spawned task borrows a disjoint sub-slice, and `ThreadPool::scope`
/// only returns once the whole task tree has finished.
pub(crate) fn par_quick_sort<T>(pool: &ThreadPool, data: &mut [T], limit: usize) -> usize
where
    T: Ord + Copy + Send,
{
    debug_assert!(limit >= 1);

    let spawned = AtomicUsize::new(0);
    pool.scope(|s| spawn_sort(s, data, limit, &spawned));
    spawned.into_inner()
}

fn spawn_sort<'scope, T>(
    scope: &Scope<'scope>,
    data: &'scope mut [T],
    limit: usize,
    spawned: &'scope AtomicUsize,
) where
    T: Ord + Copy + Send,
{
    spawned.fetch_add(1, Ordering::Relaxed);
    scope.spawn(move |s| sort_task(s, data, limit, spawned));
}

fn sort_task<'scope, T>(
    scope: &Scope<'scope>,
    data: &'scope mut [T],
    limit: usize,
    spawned: &'scope AtomicUsize,
) where
    T: Ord + Copy + Send,
{
    if data.len() <= 1 {
        return;
    }
    if data.len() < limit {
        log::trace!("range of {} below limit {limit}, sorting sequentially", data.len());
        quick_sort(data);
        return;
    }

    let bounds = partition(data);
    let (less, greater) = split_zones(data, bounds);
    spawn_sort(scope, less, limit, spawned);
    spawn_sort(scope, greater, limit, spawned);
}
