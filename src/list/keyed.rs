//! Lookup keys for list values.

use std::hash::Hash;

/// A value that can be looked up in a [`BoundedList`](super::BoundedList).
///
/// Two values with the same key are the same logical entry, even when the
/// rest of their fields differ.
pub trait Keyed {
    type Key: Eq + Hash + Clone;

    /// The identity of this value for membership checks.
    fn key(&self) -> Self::Key;
}

macro_rules! impl_keyed_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl Keyed for $t {
                type Key = $t;

                #[inline]
                fn key(&self) -> Self::Key {
                    self.clone()
                }
            }
        )*
    };
}

impl_keyed_by_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, char, bool, String);
