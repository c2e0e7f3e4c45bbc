use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffles `slice` in place using the thread-local random generator.
///
/// Every permutation is equally likely.
///
/// # Example
/// ```rust
/// use seq_utils::random_in;
///
/// let mut sut = [1, 2, 3, 4, 5];
/// random_in(&mut sut);
///
/// sut.sort();
/// assert_eq!(sut, [1, 2, 3, 4, 5]);
/// ```
pub fn random_in<E>(slice: &mut [E]) {
    random_in_with(slice, &mut rand::rng());
}

/// Shuffles `slice` in place drawing randomness from `rng`.
pub fn random_in_with<E, R>(slice: &mut [E], rng: &mut R)
where
    R: Rng + ?Sized,
{
    slice.shuffle(rng);
}

/// Returns a shuffled copy of `slice`, leaving `slice` untouched.
///
/// # Example
/// ```rust
/// use seq_utils::random_copy;
///
/// let input = [1, 2, 3, 4, 5];
/// let mut sut = random_copy(&input);
/// assert_eq!(input, [1, 2, 3, 4, 5]);
///
/// sut.sort();
/// assert_eq!(sut, input);
/// ```
pub fn random_copy<E: Clone>(slice: &[E]) -> Vec<E> {
    random_copy_with(slice, &mut rand::rng())
}

/// Returns a copy of `slice` shuffled with randomness drawn from `rng`.
pub fn random_copy_with<E, R>(slice: &[E], rng: &mut R) -> Vec<E>
where
    E: Clone,
    R: Rng + ?Sized,
{
    let mut copy = slice.to_vec();
    random_in_with(&mut copy, rng);
    copy
}
