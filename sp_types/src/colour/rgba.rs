use crate::colour::*;
use bytemuck::{Pod, Zeroable};

/// A 4-channel colour, with alpha at index `3`.
///
/// Not related to [super::ColourRgb], there are no conversions between the two.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(C)]
pub struct ColourRgba {
    pub r: Channel,
    pub g: Channel,
    pub b: Channel,
    pub a: Channel,
}

impl_colour!(ColourRgba: 4 => r = 0, g = 1, b = 2, a = 3);

impl ColourRgba {
    pub const fn new(r: Channel, g: Channel, b: Channel, a: Channel) -> Self { Self { r, g, b, a } }
}

// region Known Colours

impl ColourRgba {
    pub const BLACK: Self = Self::new(0, 0, 0, Channel::MAX);
    pub const WHITE: Self = Self::new(Channel::MAX, Channel::MAX, Channel::MAX, Channel::MAX);
    /// Same as [Default::default]
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
}

// endregion Known Colours
