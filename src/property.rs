/// Reverses the order of the elements of `slice` in place.
///
/// # Example
/// ```rust
/// use seq_utils::reverse;
///
/// let mut sut = [1, 2, 3, 4, 5];
/// reverse(&mut sut);
/// assert_eq!(sut, [5, 4, 3, 2, 1]);
/// ```
pub fn reverse<E>(slice: &mut [E]) {
    let Some(mut back) = slice.len().checked_sub(1) else {
        return;
    };

    let mut front = 0;
    while front < back {
        slice.swap(front, back);
        front += 1;
        back -= 1;
    }
}

/// Returns the first element of `slice`, or `None` if it is empty.
///
/// # Example
/// ```rust
/// use seq_utils::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<E>(slice: &[E]) -> Option<&E> {
    slice.first()
}

/// Returns the last element of `slice`, or `None` if it is empty.
///
/// # Example
/// ```rust
/// use seq_utils::last;
///
/// assert_eq!(last(&["apple", "banana", "cherry"]), Some(&"cherry"));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub fn last<E>(slice: &[E]) -> Option<&E> {
    slice.last()
}

/// Returns `true` if `slice` holds no elements.
#[inline]
pub const fn is_empty<E>(slice: &[E]) -> bool {
    slice.is_empty()
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::{first, is_empty, last, reverse};

    #[test]
    fn test_reverse_works_correctly() {
        let mut sut = [1, 2, 3, 4, 5];
        reverse(&mut sut);
        assert_eq!(sut, [5, 4, 3, 2, 1]);

        let mut sut = ["a", "b", "c", "d"];
        reverse(&mut sut);
        assert_eq!(sut, ["d", "c", "b", "a"]);
    }

    #[test]
    fn test_reverse_short_slices_is_noop() {
        let mut sut: [i32; 0] = [];
        reverse(&mut sut);
        assert_eq!(sut, []);

        let mut sut = [42];
        reverse(&mut sut);
        assert_eq!(sut, [42]);
    }

    #[test]
    fn test_first_and_last_work_correctly() {
        let sut = [1, 2, 3];
        assert_eq!(first(&sut), Some(&1));
        assert_eq!(last(&sut), Some(&3));

        let sut = [7];
        assert_eq!(first(&sut), Some(&7));
        assert_eq!(last(&sut), Some(&7));

        let sut: [&str; 0] = [];
        assert_eq!(first(&sut), None);
        assert_eq!(last(&sut), None);
    }

    #[test]
    fn test_is_empty_works_correctly() {
        assert!(is_empty::<i32>(&[]));
        assert!(!is_empty(&[10, 20, 30]));
        assert!(is_empty(&Vec::<String>::new()));
    }

    #[quickcheck]
    fn test_reverse_twice_restores_slice(mut slice: Vec<i32>) {
        let expected = slice.clone();

        reverse(&mut slice);
        assert_eq!(slice.len(), expected.len());
        assert!(slice.iter().eq(expected.iter().rev()));

        reverse(&mut slice);
        assert_eq!(slice, expected);
    }

    #[quickcheck]
    fn test_is_empty_matches_len(slice: Vec<u8>) {
        assert_eq!(is_empty(&slice), slice.is_empty());
    }
}
