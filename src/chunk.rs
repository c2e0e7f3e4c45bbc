/// Splits `slice` into consecutive groups of `size` elements.
///
/// The last group holds whatever remains, between 1 and `size` elements.
/// An empty `slice` or a `size` of zero yields no groups at all.
///
/// # Example
/// ```rust
/// use seq_utils::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5, 6, 7], 3), [vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
/// assert_eq!(chunk(&["a", "b", "c", "d"], 2), [vec!["a", "b"], vec!["c", "d"]]);
/// assert!(chunk(&[1, 2, 3], 0).is_empty());
/// ```
pub fn chunk<E: Clone>(slice: &[E], size: usize) -> Vec<Vec<E>> {
    if slice.is_empty() || size == 0 {
        return Vec::new();
    }

    slice.chunks(size).map(<[E]>::to_vec).collect()
}

/// Alias of [`chunk`].
#[inline]
pub fn group<E: Clone>(slice: &[E], size: usize) -> Vec<Vec<E>> {
    chunk(slice, size)
}
