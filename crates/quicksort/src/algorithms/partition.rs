use std::ptr;

/// Rearranges `data` into three contiguous zones around the value found at
/// `data[len / 2]`: elements less than it, elements equal to it, and elements
/// greater than it.
///
/// Returns `(mid_left, mid_right)` such that `data[..mid_left]` is less than
/// the pivot, `data[mid_left..mid_right]` equals the pivot and
/// `data[mid_right..]` is greater. The pivot itself always lands in the equal
/// zone, so `mid_left < mid_right`.
///
/// # Panics
///
/// Panics if `data` holds fewer than two elements.
pub fn partition<T: Ord + Copy>(data: &mut [T]) -> (usize, usize) {
    let len = data.len();
    assert!(len >= 2, "partition needs at least two elements, got {len}");

    let pivot = data[len / 2];
    let ptr = data.as_mut_ptr();

    // Hot loops: every index stays below `len`, so unchecked accesses are sound.
    let mut mid_left = 0usize;
    unsafe {
        for i in 0..len {
            if *ptr.add(i) < pivot {
                ptr::swap(ptr.add(i), ptr.add(mid_left));
                mid_left += 1;
            }
        }
    }

    let mut mid_right = mid_left;
    unsafe {
        for i in mid_left..len {
            if *ptr.add(i) == pivot {
                ptr::swap(ptr.add(i), ptr.add(mid_right));
                mid_right += 1;
            }
        }
    }

    debug_assert!(mid_left < mid_right && mid_right <= len);
    (mid_left, mid_right)
}

/// Splits `data` around a finished partition, dropping the equal zone which is
/// already in its final position.
#[inline]
pub(crate) fn split_zones<T>(
    data: &mut [T],
    (mid_left, mid_right): (usize, usize),
) -> (&mut [T], &mut [T]) {
    let (less, rest) = data.split_at_mut(mid_left);
    let (_, greater) = rest.split_at_mut(mid_right - mid_left);
    (less, greater)
}
