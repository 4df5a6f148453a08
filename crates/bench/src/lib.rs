use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const LARGE_RUNTIME_MIN_LEN: usize = 1 << 18;
const RNG_SEED: u64 = 0x5EED_2026;

/// Picks criterion timings for a run over `len` elements.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len < LARGE_RUNTIME_MIN_LEN {
        group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
        group.sampling_mode(SamplingMode::Auto);
        group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    } else {
        group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
        group.sampling_mode(SamplingMode::Flat);
        group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Task granularity for a parallel sort over `len` elements: `len / ln(len)`,
/// never below one.
pub fn granularity_for(len: usize) -> usize {
    if len < 3 {
        return 1;
    }
    let len_f = len as f64;
    ((len_f / len_f.ln()) as usize).max(1)
}

pub fn random_vec<T, R>(rng: &mut R, len: usize) -> Vec<T>
where
    R: Rng + ?Sized,
    StandardUniform: Distribution<T>,
{
    (0..len).map(|_| rng.random()).collect()
}

/// `len` values drawn from `distinct` evenly spaced keys.
pub fn few_distinct_vec<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: u32) -> Vec<u32> {
    assert!(distinct > 0, "distinct must be positive");
    (0..len).map(|_| rng.random_range(0..distinct) * 17).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granularity_scales_sub_linearly() {
        assert_eq!(granularity_for(0), 1);
        assert_eq!(granularity_for(2), 1);
        assert_eq!(granularity_for(100), 21);
        assert_eq!(granularity_for(100_000_000), 5_428_681);
        assert!(granularity_for(1 << 20) < (1 << 20) / 10);
    }

    #[test]
    fn generators_are_deterministic() {
        let a: Vec<i32> = random_vec(&mut default_rng(), 64);
        let b: Vec<i32> = random_vec(&mut default_rng(), 64);
        assert_eq!(a, b);

        let keys = few_distinct_vec(&mut default_rng(), 1000, 4);
        assert!(keys.iter().all(|&k| k % 17 == 0 && k < 4 * 17));
    }
}
