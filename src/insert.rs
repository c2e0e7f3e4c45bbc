/// The value handed to [`insert_at`]: either one element or a run of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<E> {
    /// A single element.
    Single(E),
    /// A sequence of elements, inserted contiguously in their given order.
    Many(Vec<E>),
}

/// Returns a new vector holding `element` followed by every element of
/// `slice`.
///
/// # Example
/// ```rust
/// use seq_utils::prepend;
///
/// assert_eq!(prepend(&[2, 3, 4], 1), [1, 2, 3, 4]);
/// assert_eq!(prepend(&["b", "c"], "a"), ["a", "b", "c"]);
/// ```
pub fn prepend<E: Clone>(slice: &[E], element: E) -> Vec<E> {
    let mut result = Vec::with_capacity(slice.len() + 1);
    result.push(element);
    result.extend_from_slice(slice);
    result
}

/// Inserts `value` into `vec` so that it starts at `index`, shifting the
/// following elements to the right.
///
/// Any `index` in `0..=vec.len()` is valid, `vec.len()` appends. An index past
/// the end leaves `vec` untouched and returns it as is.
///
/// # Example
/// ```rust
/// use seq_utils::{insert_at, Insertion};
///
/// assert_eq!(insert_at(vec![1, 2, 3], 1, Insertion::Single(4)), [1, 4, 2, 3]);
/// assert_eq!(insert_at(vec![1, 2, 3], 5, Insertion::Single(4)), [1, 2, 3]);
/// assert_eq!(
///     insert_at(vec!["a", "b"], 0, Insertion::Many(vec!["x", "y"])),
///     ["x", "y", "a", "b"]
/// );
/// ```
pub fn insert_at<E>(mut vec: Vec<E>, index: usize, value: Insertion<E>) -> Vec<E> {
    if index > vec.len() {
        return vec;
    }

    match value {
        Insertion::Single(element) => vec.insert(index, element),
        Insertion::Many(elements) => {
            vec.splice(index..index, elements);
        }
    }

    vec
}
