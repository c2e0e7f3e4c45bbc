/// Swaps the elements at `from` and `to` in place.
///
/// Returns `false` and leaves `slice` untouched when the two positions are
/// the same or either one is out of bounds.
///
/// # Example
/// ```rust
/// use seq_utils::safe_swap;
///
/// let mut sut = [10, 20, 30, 40];
/// assert!(safe_swap(&mut sut, 0, 2));
/// assert_eq!(sut, [30, 20, 10, 40]);
///
/// assert!(!safe_swap(&mut sut, 1, 1));
/// assert!(!safe_swap(&mut sut, 1, 4));
/// assert_eq!(sut, [30, 20, 10, 40]);
/// ```
pub fn safe_swap<E>(slice: &mut [E], from: usize, to: usize) -> bool {
    if from == to || from >= slice.len() || to >= slice.len() {
        return false;
    }

    slice.swap(from, to);
    true
}

/// Returns the element at `index`, or `None` if `index` is out of bounds.
///
/// # Example
/// ```rust
/// use seq_utils::safe_index;
///
/// assert_eq!(safe_index(&[1, 2, 3], 1), Some(&2));
/// assert_eq!(safe_index(&[1, 2, 3], 3), None);
/// ```
#[inline]
pub fn safe_index<E>(slice: &[E], index: usize) -> Option<&E> {
    slice.get(index)
}
