use crate::enumerated::Enumerated;

/// Method-call access to the slice operations of this crate.
///
/// Implemented for every `[E]`, so arrays, vectors and slices all pick it up
/// through auto-deref. Each method forwards to the free function of the same
/// name.
///
/// # Example
/// ```rust
/// use seq_utils::SeqExt;
///
/// let mut sut = vec![10, 20, 30, 40];
/// assert!(sut.contain(&20));
/// assert!(sut.safe_swap(0, 2));
/// assert_eq!(sut, [30, 20, 10, 40]);
/// assert_eq!(sut.chunk(3), [vec![30, 20, 10], vec![40]]);
/// assert_eq!(sut.find_last_by(|_, item| *item > 15), Some(&40));
/// ```
pub trait SeqExt<E> {
    /// See [`contain`](crate::contain()).
    fn contain(&self, target: &E) -> bool
    where
        E: PartialEq;

    /// See [`contain_by`](crate::contain_by()).
    fn contain_by<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool;

    /// See [`contain_sub_slice`](crate::contain_sub_slice()).
    fn contain_sub_slice(&self, sub_slice: &[E]) -> bool
    where
        E: PartialEq;

    /// See [`contains_all`](crate::contains_all()).
    fn contains_all(&self, elements: &[E]) -> bool
    where
        E: PartialEq;

    /// See [`contains_any`](crate::contains_any()).
    fn contains_any(&self, elements: &[E]) -> bool
    where
        E: PartialEq;

    /// See [`difference`](crate::difference()).
    fn difference(&self, compared: &[E]) -> Vec<E>
    where
        E: PartialEq + Clone;

    /// See [`difference_by`](crate::difference_by()).
    fn difference_by<C>(&self, compared: &[E], comparator: C) -> Vec<E>
    where
        E: Clone,
        C: FnMut(&E, &E) -> bool;

    /// See [`chunk`](crate::chunk()).
    fn chunk(&self, size: usize) -> Vec<Vec<E>>
    where
        E: Clone;

    /// See [`group`](crate::group()).
    fn group(&self, size: usize) -> Vec<Vec<E>>
    where
        E: Clone;

    /// See [`prepend`](crate::prepend()).
    fn prepend(&self, element: E) -> Vec<E>
    where
        E: Clone;

    /// See [`find_first_by`](crate::find_first_by()).
    fn find_first_by<P>(&self, predicate: P) -> Option<&E>
    where
        P: FnMut(usize, &E) -> bool;

    /// See [`find_last_by`](crate::find_last_by()).
    fn find_last_by<P>(&self, predicate: P) -> Option<&E>
    where
        P: FnMut(usize, &E) -> bool;

    /// See [`safe_swap`](crate::safe_swap()).
    fn safe_swap(&mut self, from: usize, to: usize) -> bool;

    /// See [`safe_index`](crate::safe_index()).
    fn safe_index(&self, index: usize) -> Option<&E>;

    /// See [`reverse`](crate::reverse()). Named `reverse_in_place` so it does not
    /// shadow `<[E]>::reverse`.
    fn reverse_in_place(&mut self);

    /// See [`random_in`](crate::random_in()).
    #[cfg(feature = "random")]
    fn random_in(&mut self);

    /// See [`random_copy`](crate::random_copy()).
    #[cfg(feature = "random")]
    fn random_copy(&self) -> Vec<E>
    where
        E: Clone;

    /// See [`enumerated`](crate::enumerated()).
    fn enumerated(&self) -> Enumerated<'_, E>;

    /// See [`filter`](crate::filter()).
    fn filter_by<P>(&self, predicate: Option<P>) -> Vec<E>
    where
        E: Clone,
        P: FnMut(&E) -> bool;
}

impl<E> SeqExt<E> for [E] {
    fn contain(&self, target: &E) -> bool
    where
        E: PartialEq,
    {
        crate::contain(self, target)
    }

    fn contain_by<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool,
    {
        crate::contain_by(self, predicate)
    }

    fn contain_sub_slice(&self, sub_slice: &[E]) -> bool
    where
        E: PartialEq,
    {
        crate::contain_sub_slice(self, sub_slice)
    }

    fn contains_all(&self, elements: &[E]) -> bool
    where
        E: PartialEq,
    {
        crate::contains_all(self, elements)
    }

    fn contains_any(&self, elements: &[E]) -> bool
    where
        E: PartialEq,
    {
        crate::contains_any(self, elements)
    }

    fn difference(&self, compared: &[E]) -> Vec<E>
    where
        E: PartialEq + Clone,
    {
        crate::difference(self, compared)
    }

    fn difference_by<C>(&self, compared: &[E], comparator: C) -> Vec<E>
    where
        E: Clone,
        C: FnMut(&E, &E) -> bool,
    {
        crate::difference_by(self, compared, comparator)
    }

    fn chunk(&self, size: usize) -> Vec<Vec<E>>
    where
        E: Clone,
    {
        crate::chunk(self, size)
    }

    fn group(&self, size: usize) -> Vec<Vec<E>>
    where
        E: Clone,
    {
        crate::group(self, size)
    }

    fn prepend(&self, element: E) -> Vec<E>
    where
        E: Clone,
    {
        crate::prepend(self, element)
    }

    fn find_first_by<P>(&self, predicate: P) -> Option<&E>
    where
        P: FnMut(usize, &E) -> bool,
    {
        crate::find_first_by(self, predicate)
    }

    fn find_last_by<P>(&self, predicate: P) -> Option<&E>
    where
        P: FnMut(usize, &E) -> bool,
    {
        crate::find_last_by(self, predicate)
    }

    fn safe_swap(&mut self, from: usize, to: usize) -> bool {
        crate::safe_swap(self, from, to)
    }

    fn safe_index(&self, index: usize) -> Option<&E> {
        crate::safe_index(self, index)
    }

    fn reverse_in_place(&mut self) {
        crate::reverse(self)
    }

    #[cfg(feature = "random")]
    fn random_in(&mut self) {
        crate::random_in(self)
    }

    #[cfg(feature = "random")]
    fn random_copy(&self) -> Vec<E>
    where
        E: Clone,
    {
        crate::random_copy(self)
    }

    fn enumerated(&self) -> Enumerated<'_, E> {
        crate::enumerated(self)
    }

    fn filter_by<P>(&self, predicate: Option<P>) -> Vec<E>
    where
        E: Clone,
        P: FnMut(&E) -> bool,
    {
        crate::filter(self, predicate)
    }
}
