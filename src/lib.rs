//! # seq_utils
//!
//! `seq_utils` collects the small sequence operations that every codebase ends up
//! rewriting: membership tests, symmetric difference, chunking, searching from
//! either end, bounds-checked indexing and swapping, shuffling and enumeration.
//!
//! ## Features
//! - Free functions over plain slices, usable with arrays, `Vec`s and borrowed
//!   slices alike.
//! - The same operations as methods through the [`SeqExt`] extension trait.
//! - Total functions: no operation panics. Out-of-range indices, zero chunk sizes
//!   and empty inputs all resolve to `None`, `false`, an empty result or the
//!   unchanged input.
//! - `*_by` variants taking closures for element types without a useful
//!   `PartialEq`.
//! - Fixed-arity [`Tuple2`] .. [`Tuple6`] value groupings.
//!
//! ## Cargo features
//! - `random` (enabled by default): the shuffling operations [`random_in`] and
//!   [`random_copy`], backed by the `rand` crate.
//!
//! ## Sequences and mutation
//! Read-only operations borrow `&[E]` and copy-returning ones hand back a fresh
//! `Vec`, so they never alter their input. [`reverse`], [`safe_swap`] and
//! [`random_in`] work in place on `&mut [E]`. [`insert_at`] takes the vector by
//! value, since it may need to grow it.
//!
//! ## Example
//! ```rust
//! use seq_utils::{chunk, contain_sub_slice, difference, safe_swap};
//!
//! let mut list = vec![10, 20, 30, 40];
//!
//! assert!(contain_sub_slice(&list, &[30, 10]));
//! assert_eq!(difference(&list, &[20, 50]), [10, 30, 40, 50]);
//! assert_eq!(chunk(&list, 3), [vec![10, 20, 30], vec![40]]);
//!
//! assert!(safe_swap(&mut list, 0, 2));
//! assert!(!safe_swap(&mut list, 0, 4));
//! assert_eq!(list, [30, 20, 10, 40]);
//! ```

mod chunk;
mod contain;
mod difference;
mod enumerated;
mod ext;
mod filter;
mod find;
mod insert;
mod property;
#[cfg(feature = "random")]
mod random;
mod safe;
mod sailed;
mod tuple;

pub use chunk::{chunk, group};
pub use contain::{contain, contain_by, contain_sub_slice, contains_all, contains_any};
pub use difference::{Comparator, difference, difference_by};
pub use enumerated::{Enumerated, enumerated};
pub use ext::SeqExt;
pub use filter::{Predicate, filter};
pub use find::{find_first_by, find_last_by};
pub use insert::{Insertion, insert_at, prepend};
pub use property::{first, is_empty, last, reverse};
#[cfg(feature = "random")]
pub use random::{random_copy, random_copy_with, random_in, random_in_with};
pub use safe::{safe_index, safe_swap};
pub use tuple::{Tuple, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6};

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{
        Insertion, chunk, contain, difference, enumerated, first, insert_at, is_empty, last,
        prepend, reverse, safe_index,
    };

    #[test]
    fn test_operations_compose_on_a_single_sequence() {
        let mut list = vec![3, 1, 4, 1, 5, 9, 2, 6];

        list = insert_at(list, 0, Insertion::Many(vec![2, 7]));
        assert_eq!(list, [2, 7, 3, 1, 4, 1, 5, 9, 2, 6]);

        reverse(&mut list);
        assert_eq!(first(&list), Some(&6));
        assert_eq!(last(&list), Some(&2));

        let groups = chunk(&list, 4);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2], [7, 2]);

        assert_eq!(difference(&groups[0], &groups[1]), [6, 2, 9, 5, 1, 4, 1, 3]);
    }

    #[test]
    fn test_empty_input_is_never_an_error() {
        let sut: Vec<i32> = Vec::new();

        assert!(is_empty(&sut));
        assert!(!contain(&sut, &0));
        assert!(chunk(&sut, 3).is_empty());
        assert!(difference(&sut, &sut).is_empty());
        assert_eq!(first(&sut), None);
        assert_eq!(last(&sut), None);
        assert_eq!(safe_index(&sut, 0), None);
        assert_eq!(enumerated(&sut).count(), 0);
        assert_eq!(prepend(&sut, 1), [1]);
    }

    #[quickcheck]
    fn test_prepend_then_first_yields_element(slice: Vec<i32>, element: i32) {
        let sut = prepend(&slice, element);
        assert_eq!(sut.len(), slice.len() + 1);
        assert_eq!(first(&sut), Some(&element));
        assert_eq!(&sut[1..], &slice[..]);
    }
}
