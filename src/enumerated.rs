use core::iter::FusedIterator;
use core::slice;

use crate::tuple::Tuple2;

/// Pairs every element of `slice` with its zero-based position.
///
/// The pairs are produced lazily, in original order; collect them when an
/// owned sequence is needed.
///
/// # Example
/// ```rust
/// use seq_utils::{enumerated, Tuple2};
///
/// let sut: Vec<_> = enumerated(&[10, 20, 30, 40]).collect();
/// assert_eq!(
///     sut,
///     [Tuple2::new(&10, 0), Tuple2::new(&20, 1), Tuple2::new(&30, 2), Tuple2::new(&40, 3)]
/// );
/// ```
pub fn enumerated<E>(slice: &[E]) -> Enumerated<'_, E> {
    Enumerated::from_slice(slice)
}

/// An iterator over the elements of a slice together with their positions.
///
/// This struct is created by [`enumerated`].
pub struct Enumerated<'a, E> {
    iter: slice::Iter<'a, E>,
    front_index: usize,
}

impl<'a, E> Enumerated<'a, E> {
    pub(crate) fn from_slice(slice: &'a [E]) -> Self {
        Self {
            iter: slice.iter(),
            front_index: 0,
        }
    }
}

impl<E> Default for Enumerated<'_, E> {
    fn default() -> Self {
        Self {
            iter: Default::default(),
            front_index: 0,
        }
    }
}

impl<E> Clone for Enumerated<'_, E> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            front_index: self.front_index,
        }
    }
}

impl<'a, E> Iterator for Enumerated<'a, E> {
    type Item = Tuple2<&'a E, usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.front_index;
        self.front_index += 1;
        Some(Tuple2::new(item, index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<E> DoubleEndedIterator for Enumerated<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.iter.next_back()?;
        Some(Tuple2::new(item, self.front_index + self.iter.len()))
    }
}

impl<E> ExactSizeIterator for Enumerated<'_, E> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<E> FusedIterator for Enumerated<'_, E> {}

impl<E> core::fmt::Debug for Enumerated<'_, E>
where
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Enumerated")
            .field(&self.iter.as_slice())
            .field(&self.front_index)
            .finish()
    }
}
