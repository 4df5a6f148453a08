//! In-place three-way quicksort, sequential and task-parallel.
//!
//! The parallel sorter partitions a range, then spawns each outer zone as an
//! independent task on a bounded work-stealing pool until ranges drop below a
//! caller-supplied granularity `limit`; smaller ranges are sorted sequentially.

mod algorithms;
mod config;

use rayon::{ThreadPool, ThreadPoolBuildError};

pub use algorithms::partition::partition;
pub use config::{DEFAULT_WORKERS, PoolConfig, WORKER_NAME_PREFIX};

/// What one parallel sort did.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TaskStats {
    /// Tasks spawned, including the root task.
    pub tasks: usize,
}

/// Sorts `data` ascending in place on the calling thread.
pub fn sort<T: Ord + Copy>(data: &mut [T]) {
    algorithms::sequential::quick_sort(data);
}

/// Sorts `data` ascending in place on a fresh pool of [`DEFAULT_WORKERS`]
/// threads. Returns once every spawned task has finished.
///
/// # Panics
///
/// Panics if `limit` is zero.
pub fn parallel_sort<T>(data: &mut [T], limit: usize) -> Result<TaskStats, ThreadPoolBuildError>
where
    T: Ord + Copy + Send,
{
    let sorter = ParallelSorter::new(PoolConfig::default())?;
    Ok(sorter.sort(data, limit))
}

/// A parallel sorter that keeps its worker pool across calls.
#[derive(Debug)]
pub struct ParallelSorter {
    pool: ThreadPool,
}

impl ParallelSorter {
    pub fn new(config: PoolConfig) -> Result<Self, ThreadPoolBuildError> {
        Ok(Self {
            pool: config.build_pool()?,
        })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Sorts `data` ascending in place. Ranges of at least `limit` elements
    /// are partitioned and their zones spawned as tasks; shorter ranges are
    /// sorted sequentially by whichever worker holds them.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    pub fn sort<T>(&self, data: &mut [T], limit: usize) -> TaskStats
    where
        T: Ord + Copy + Send,
    {
        assert!(limit > 0, "limit must be positive");

        log::debug!(
            "parallel sort start: len={} limit={} workers={}",
            data.len(),
            limit,
            self.workers(),
        );
        let tasks = algorithms::parallel::par_quick_sort(&self.pool, data, limit);
        log::debug!("parallel sort done: tasks={tasks}");
        TaskStats { tasks }
    }
}

/// Returns whether `data` is in non-decreasing order.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
