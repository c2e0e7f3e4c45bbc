/// Fixed-arity value groupings with positionally named fields.
///
/// Every tuple type converts losslessly to and from the native Rust tuple of
/// the same arity.
///
/// # Example
/// ```rust
/// use seq_utils::{Tuple, Tuple3};
///
/// let sut = Tuple3::new(1, "two", 3.0);
/// assert_eq!(sut.s2, "two");
/// assert_eq!(Tuple3::<i32, &str, f64>::ARITY, 3);
///
/// let native: (i32, &str, f64) = sut.into();
/// assert_eq!(native, (1, "two", 3.0));
/// ```
pub trait Tuple: crate::sailed::Sailed {
    /// The number of fields held by the tuple.
    const ARITY: usize;
}

macro_rules! tuple {
    ($(#[$meta:meta])* $name:ident, $arity:literal, $($field:ident: $ty:ident),+) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name<$($ty),+> {
            $(pub $field: $ty,)+
        }

        impl<$($ty),+> $name<$($ty),+> {
            /// Groups the given values, in order.
            pub const fn new($($field: $ty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$($ty),+> Tuple for $name<$($ty),+> {
            const ARITY: usize = $arity;
        }

        impl<$($ty),+> From<($($ty,)+)> for $name<$($ty),+> {
            fn from(($($field,)+): ($($ty,)+)) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$($ty),+> From<$name<$($ty),+>> for ($($ty,)+) {
            fn from(value: $name<$($ty),+>) -> Self {
                ($(value.$field,)+)
            }
        }
    };
}

tuple!(
    /// A pair of values.
    ///
    /// Used by [`enumerated`](crate::enumerated()) to carry an element together
    /// with its position.
    Tuple2, 2, s1: T1, s2: T2
);
tuple!(
    /// A grouping of three values.
    Tuple3, 3, s1: T1, s2: T2, s3: T3
);
tuple!(
    /// A grouping of four values.
    Tuple4, 4, s1: T1, s2: T2, s3: T3, s4: T4
);
tuple!(
    /// A grouping of five values.
    Tuple5, 5, s1: T1, s2: T2, s3: T3, s4: T4, s5: T5
);
tuple!(
    /// A grouping of six values.
    Tuple6, 6, s1: T1, s2: T2, s3: T3, s4: T4, s5: T5, s6: T6
);
