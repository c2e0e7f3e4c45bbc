/// A boxed equivalence test between two elements, standing in for
/// `PartialEq` where it is not available or not the right notion.
///
/// # Example
/// ```rust
/// use seq_utils::{Comparator, difference_by};
///
/// let same_parity: Comparator<i32> = Box::new(|lhs: &i32, rhs: &i32| lhs % 2 == rhs % 2);
/// assert_eq!(difference_by(&[1, 3, 4], &[5, 7], same_parity), [4]);
/// ```
pub type Comparator<'a, E> = Box<dyn FnMut(&E, &E) -> bool + 'a>;

/// Returns the symmetric difference of `slice` and `compared`.
///
/// The result holds every element of `slice` with no equal element in
/// `compared`, followed by every element of `compared` with no equal element
/// in `slice`. Both halves keep their original order and nothing is
/// deduplicated: an unmatched value occurring twice is reported twice.
///
/// # Example
/// ```rust
/// use seq_utils::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4, 5], &[3, 4, 6]), [1, 2, 5, 6]);
/// assert_eq!(difference(&[1, 1, 2], &[2]), [1, 1]);
/// ```
pub fn difference<E>(slice: &[E], compared: &[E]) -> Vec<E>
where
    E: PartialEq + Clone,
{
    difference_by(slice, compared, |lhs, rhs| lhs == rhs)
}

/// Returns the symmetric difference of `slice` and `compared`, using
/// `comparator` to decide whether two elements match.
///
/// The comparator receives the element being checked first and the candidate
/// from the other sequence second, so during the pass over `compared` it is
/// called as `comparator(compared_item, slice_item)`.
///
/// # Example
/// ```rust
/// use seq_utils::difference_by;
///
/// let sut = difference_by(&["a", "aa", "aaa"], &["aa", "value"], |lhs, rhs| {
///     lhs.len() == rhs.len()
/// });
/// assert_eq!(sut, ["a", "aaa", "value"]);
/// ```
pub fn difference_by<E, C>(slice: &[E], compared: &[E], mut comparator: C) -> Vec<E>
where
    E: Clone,
    C: FnMut(&E, &E) -> bool,
{
    let mut diff = Vec::new();

    for (lhs, rhs) in [(slice, compared), (compared, slice)] {
        for item in lhs {
            if !rhs.iter().any(|other| comparator(item, other)) {
                diff.push(item.clone());
            }
        }
    }

    diff
}
