/// Returns `true` if any element of `slice` equals `target`.
///
/// # Example
/// ```rust
/// use seq_utils::contain;
///
/// assert!(contain(&[1, 2, 3], &2));
/// assert!(!contain(&[1, 2, 3], &4));
/// assert!(!contain(&[], &1));
/// ```
pub fn contain<E: PartialEq>(slice: &[E], target: &E) -> bool {
    slice.iter().any(|item| item == target)
}

/// Returns `true` if `predicate` holds for any element of `slice`.
///
/// Scanning stops at the first match.
///
/// # Example
/// ```rust
/// use seq_utils::contain_by;
///
/// assert!(contain_by(&[1, 2, 3], |item| *item > 1));
/// assert!(!contain_by(&[1, 2, 3], |item| *item > 3));
/// ```
pub fn contain_by<E, P>(slice: &[E], predicate: P) -> bool
where
    P: FnMut(&E) -> bool,
{
    slice.iter().any(predicate)
}

/// Returns `true` if every element of `sub_slice` occurs somewhere in `slice`.
///
/// This is not a contiguous subsequence test: order is ignored, and a single
/// occurrence in `slice` satisfies any number of equal elements in
/// `sub_slice`. A `sub_slice` longer than `slice` is never contained.
///
/// # Example
/// ```rust
/// use seq_utils::contain_sub_slice;
///
/// assert!(contain_sub_slice(&[1, 2, 3, 4], &[3, 2]));
/// assert!(contain_sub_slice(&[1, 2, 3, 4], &[2, 2]));
/// assert!(!contain_sub_slice(&[1, 2, 3, 4], &[2, 5]));
/// assert!(!contain_sub_slice(&[1], &[1, 1]));
/// ```
pub fn contain_sub_slice<E: PartialEq>(slice: &[E], sub_slice: &[E]) -> bool {
    if sub_slice.len() > slice.len() {
        return false;
    }

    sub_slice.iter().all(|item| contain(slice, item))
}

/// Returns `true` if `slice` contains every one of `elements`.
///
/// Same rules as [`contain_sub_slice`].
///
/// # Example
/// ```rust
/// use seq_utils::contains_all;
///
/// assert!(contains_all(&[1, 2, 3, 4], &[2, 4]));
/// assert!(!contains_all(&["apple", "banana", "cherry"], &["banana", "grape"]));
/// ```
pub fn contains_all<E: PartialEq>(slice: &[E], elements: &[E]) -> bool {
    contain_sub_slice(slice, elements)
}

/// Returns `true` if `slice` contains at least one of `elements`.
///
/// # Example
/// ```rust
/// use seq_utils::contains_any;
///
/// assert!(contains_any(&[1, 2, 3, 4], &[2, 5]));
/// assert!(!contains_any(&["apple", "banana", "cherry"], &["grape", "orange"]));
/// ```
pub fn contains_any<E: PartialEq>(slice: &[E], elements: &[E]) -> bool {
    elements.iter().any(|item| contain(slice, item))
}
