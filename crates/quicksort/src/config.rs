use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Worker count used by [`crate::parallel_sort`].
pub const DEFAULT_WORKERS: usize = 4;

pub const WORKER_NAME_PREFIX: &str = "quicksort-worker";

/// Shape of the worker pool behind a [`crate::ParallelSorter`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub workers: usize,
    /// Worker stack size in bytes. Deeply unbalanced partitions recurse on the
    /// worker stack, so callers sorting adversarial input may want to raise it.
    pub stack_size: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            stack_size: None,
        }
    }
}

impl PoolConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    pub(crate) fn build_pool(&self) -> Result<ThreadPool, ThreadPoolBuildError> {
        assert!(self.workers > 0, "workers must be positive");

        let mut builder = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("{WORKER_NAME_PREFIX}-{i}"));
        if let Some(bytes) = self.stack_size {
            builder = builder.stack_size(bytes);
        }

        let pool = builder.build()?;
        log::debug!(
            "built sort pool: workers={} stack_size={:?}",
            pool.current_num_threads(),
            self.stack_size,
        );
        Ok(pool)
    }
}
