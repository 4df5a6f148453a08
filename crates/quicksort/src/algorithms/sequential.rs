use super::partition::{partition, split_zones};

/// Sorts `data` ascending in place on the calling thread.
///
/// Recursion depth is not bounded: the midpoint pivot can be driven to
/// depth ~`data.len()` by adversarial input.
pub fn quick_sort<T: Ord + Copy>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }

    let bounds = partition(data);
    let (less, greater) = split_zones(data, bounds);
    quick_sort(less);
    quick_sort(greater);
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn small_cases() {
        let cases: [&[i32]; 6] = [
            &[],
            &[7],
            &[2, 1],
            &[5, 3, 8, 3, 1, 9, 3],
            &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
            &[i32::MAX, i32::MIN, 0, -1, 1, i32::MIN, i32::MAX],
        ];

        for case in cases {
            let mut actual = case.to_vec();
            quick_sort(&mut actual);
            let mut expected = case.to_vec();
            expected.sort_unstable();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn few_distinct_values() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_5E0);
        let mut data: Vec<u8> = (0..50_000).map(|_| rng.random_range(0..4)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        quick_sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn sorted_input_is_unchanged() {
        let mut data: Vec<u64> = (0..4096).collect();
        let expected = data.clone();
        quick_sort(&mut data);
        assert_eq!(data, expected);

        quick_sort(&mut data);
        assert_eq!(data, expected);
    }
}
