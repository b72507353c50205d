//! 8-bit colour values.
//!
//! Each colour is a `#[repr(C)]` struct of [`Channel`] fields, which is reinterpreted in-place as a
//! `[Channel; N]` for indexed access. Both views are the same bytes, so writing `col[1]` is
//! the same as writing `col.g`.

use crate::def::targets;
use crate::def::types::Channel;
use crate::error::ColourError;

/// Expands to [`Channel`], ignoring the field name. Lets [impl_colour] repeat a type once per field
macro_rules! channel_of {
    ($field:ident) => {
        Channel
    };
}

/// Implements the shared surface of a colour type, given its channel count and fields in index order.
///
/// The type must be `#[repr(C)]`, contain only [`Channel`] fields, and implement [`bytemuck::Pod`].
/// The layout is checked at compile time, so a mismatch fails the build rather than the cast.
macro_rules! impl_colour {
    ($colour:ident : $n:literal => $( $field:ident = $idx:literal ),+ $(,)?) => {
        static_assertions::assert_eq_size!($colour, [Channel; $n]);
        static_assertions::assert_eq_align!($colour, Channel);
        $( static_assertions::const_assert_eq!(::core::mem::offset_of!($colour, $field), $idx); )+

        impl $colour {
            /// How many channels there are, for this colour.
            pub const CHANNEL_COUNT: usize = $n;

            /// Views the channels as an array, sharing storage with the named fields
            #[inline]
            pub fn as_array(&self) -> &[Channel; $n] { bytemuck::cast_ref(self) }
            /// Mutable version of [Self::as_array]
            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [Channel; $n] { bytemuck::cast_mut(self) }

            pub const fn from_array([$($field),+]: [Channel; $n]) -> Self { Self { $($field),+ } }
            pub const fn to_array(self) -> [Channel; $n] {
                let Self { $($field),+ } = self;
                [$($field),+]
            }
        }

        // region To/From impls

        impl From<[Channel; $n]> for $colour {
            fn from(val: [Channel; $n]) -> Self { Self::from_array(val) }
        }
        impl From<$colour> for [Channel; $n] {
            fn from(val: $colour) -> Self { val.to_array() }
        }

        impl From<($(channel_of!($field)),+)> for $colour {
            fn from(($($field),+): ($(channel_of!($field)),+)) -> Self { Self { $($field),+ } }
        }
        impl From<$colour> for ($(channel_of!($field)),+) {
            fn from($colour { $($field),+ }: $colour) -> Self { ($($field),+) }
        }

        impl TryFrom<&[Channel]> for $colour {
            type Error = ColourError;

            /// Converts a slice into a colour.
            ///
            /// The slice must have exactly [Self::CHANNEL_COUNT] elements
            fn try_from(val: &[Channel]) -> Result<Self, Self::Error> {
                let arr = <[Channel; $n]>::try_from(val).map_err(|_| {
                    let err = ColourError::ChannelCount {
                        expected: $n,
                        actual: val.len(),
                    };
                    tracing::debug!(target: targets::COLOUR, ?err, colour = stringify!($colour), "rejected channel slice");
                    err
                })?;
                Ok(Self::from_array(arr))
            }
        }

        // endregion To/From impls

        // region Iterating/Indexing

        impl IntoIterator for $colour {
            type Item = Channel;
            type IntoIter = std::array::IntoIter<Channel, $n>;

            fn into_iter(self) -> Self::IntoIter { self.to_array().into_iter() }
        }
        impl<'a> IntoIterator for &'a $colour {
            type Item = &'a Channel;
            type IntoIter = std::slice::Iter<'a, Channel>;

            fn into_iter(self) -> Self::IntoIter { self.as_array().iter() }
        }

        impl std::ops::Deref for $colour {
            type Target = [Channel; $n];

            fn deref(&self) -> &Self::Target { self.as_array() }
        }
        impl std::ops::DerefMut for $colour {
            fn deref_mut(&mut self) -> &mut Self::Target { self.as_array_mut() }
        }

        impl std::ops::Index<usize> for $colour {
            type Output = Channel;

            /// # Panics
            /// If `index >= CHANNEL_COUNT`. Use `get()` through [std::ops::Deref] for a checked lookup
            fn index(&self, index: usize) -> &Self::Output { &self.as_array()[index] }
        }
        impl std::ops::IndexMut<usize> for $colour {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.as_array_mut()[index] }
        }

        // endregion Iterating/Indexing
    };
}

pub mod rgb;
pub mod rgba;

pub use rgb::ColourRgb;
pub use rgba::ColourRgba;
