/// A boxed single-element test, for callers that need to store a predicate.
pub type Predicate<'a, E> = Box<dyn FnMut(&E) -> bool + 'a>;

/// Returns a new vector with the elements of `slice` for which `predicate`
/// holds, in their original order.
///
/// Without a predicate every element is kept.
///
/// # Example
/// ```rust
/// use seq_utils::{filter, Predicate};
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5, 6], Some(|item: &i32| item % 2 == 0)), [2, 4, 6]);
/// assert_eq!(filter(&[1, 2, 3], None::<Predicate<i32>>), [1, 2, 3]);
/// ```
pub fn filter<E, P>(slice: &[E], predicate: Option<P>) -> Vec<E>
where
    E: Clone,
    P: FnMut(&E) -> bool,
{
    let Some(mut predicate) = predicate else {
        return slice.to_vec();
    };

    slice
        .iter()
        .filter(|&item| predicate(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{Predicate, contains_all};

    use super::filter;

    #[test]
    fn test_filter_keeps_matching_elements_in_order() {
        let sut = filter(&[1, 2, 3, 4, 5, 6], Some(|item: &i32| item % 2 == 0));
        assert_eq!(sut, [2, 4, 6]);

        let sut = filter(
            &["apple", "kiwi", "banana"],
            Some(|item: &&str| item.len() > 4),
        );
        assert_eq!(sut, ["apple", "banana"]);
    }

    #[test]
    fn test_filter_empty_slice_yields_empty_result() {
        let sut = filter(&[] as &[i32], Some(|_: &i32| true));
        assert!(sut.is_empty());
    }

    #[test]
    fn test_filter_without_predicate_copies_everything() {
        let input = [1, 2, 3, 4, 5, 6];
        let sut = filter(&input, None::<Predicate<i32>>);
        assert_eq!(sut, input);
        assert!(contains_all(&input, &sut));
    }

    #[test]
    fn test_filter_accepts_boxed_predicate() {
        let threshold = 3;
        let predicate: Predicate<i32> = Box::new(|item: &i32| *item >= threshold);
        assert_eq!(filter(&[1, 5, 2, 3], Some(predicate)), [5, 3]);
    }

    #[quickcheck]
    fn test_filter_matches_iterator_filter(slice: Vec<i32>) {
        let sut = filter(&slice, Some(|item: &i32| item.rem_euclid(3) == 0));
        let expected: Vec<_> = slice
            .iter()
            .copied()
            .filter(|item| item.rem_euclid(3) == 0)
            .collect();
        assert_eq!(sut, expected);
    }
}
