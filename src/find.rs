/// Returns the element with the lowest index for which `predicate` holds.
///
/// The predicate receives the position and the element. Scanning goes left
/// to right and stops at the first match.
///
/// # Example
/// ```rust
/// use seq_utils::find_first_by;
///
/// assert_eq!(find_first_by(&[1, 2, 3, 4], |_, item| *item > 2), Some(&3));
/// assert_eq!(find_first_by(&["apple", "banana", "cherry"], |_, item| item.len() > 5), Some(&"banana"));
/// assert_eq!(find_first_by(&[] as &[i32], |_, item| *item > 2), None);
/// ```
pub fn find_first_by<E, P>(slice: &[E], mut predicate: P) -> Option<&E>
where
    P: FnMut(usize, &E) -> bool,
{
    slice
        .iter()
        .enumerate()
        .find(|&(index, item)| predicate(index, item))
        .map(|(_, item)| item)
}

/// Returns the element with the highest index for which `predicate` holds.
///
/// Scanning goes right to left and stops at the first match.
///
/// # Example
/// ```rust
/// use seq_utils::find_last_by;
///
/// assert_eq!(find_last_by(&[1, 2, 3, 4], |_, item| *item > 2), Some(&4));
/// assert_eq!(find_last_by(&["apple", "banana", "cherry"], |_, item| item.len() > 5), Some(&"cherry"));
/// ```
pub fn find_last_by<E, P>(slice: &[E], mut predicate: P) -> Option<&E>
where
    P: FnMut(usize, &E) -> bool,
{
    slice
        .iter()
        .enumerate()
        .rfind(|&(index, item)| predicate(index, item))
        .map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use super::{find_first_by, find_last_by};

    #[test]
    fn test_find_first_by_returns_lowest_match() {
        let sut = [1, 2, 3, 4];
        assert_eq!(find_first_by(&sut, |_, item| *item > 2), Some(&3));
        assert_eq!(find_first_by(&sut, |_, item| *item > 4), None);
        assert_eq!(find_first_by(&sut, |index, _| index == 1), Some(&2));
    }

    #[test]
    fn test_find_last_by_returns_highest_match() {
        let sut = [1, 2, 3, 4];
        assert_eq!(find_last_by(&sut, |_, item| *item > 2), Some(&4));
        assert_eq!(find_last_by(&sut, |_, item| *item < 3), Some(&2));
        assert_eq!(find_last_by(&sut, |_, item| *item > 4), None);
    }

    #[test]
    fn test_find_on_empty_slice_yields_none() {
        let sut: [i32; 0] = [];
        assert_eq!(find_first_by(&sut, |_, _| true), None);
        assert_eq!(find_last_by(&sut, |_, _| true), None);
    }

    #[test]
    fn test_find_visits_indices_in_scan_order() {
        let sut = ["a", "b", "c"];

        let mut visited = Vec::new();
        find_first_by(&sut, |index, _| {
            visited.push(index);
            index == 1
        });
        assert_eq!(visited, [0, 1]);

        visited.clear();
        find_last_by(&sut, |index, _| {
            visited.push(index);
            index == 1
        });
        assert_eq!(visited, [2, 1]);
    }

    #[test]
    fn test_find_by_index_and_element() {
        let sut = [5, 1, 5, 1, 5];
        assert_eq!(
            find_first_by(&sut, |index, item| index > 0 && *item == 5),
            Some(&5)
        );
        assert_eq!(
            find_last_by(&sut, |index, item| index < 4 && *item == 1),
            Some(&1)
        );
    }
}
