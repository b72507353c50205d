use crate::colour::*;
use bytemuck::{Pod, Zeroable};

/// A 3-channel colour, red/green/blue at indices `0..3`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(C)]
pub struct ColourRgb {
    pub r: Channel,
    pub g: Channel,
    pub b: Channel,
}

impl_colour!(ColourRgb: 3 => r = 0, g = 1, b = 2);

impl ColourRgb {
    pub const fn new(r: Channel, g: Channel, b: Channel) -> Self { Self { r, g, b } }
}

// region Known Colours

impl ColourRgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(Channel::MAX, Channel::MAX, Channel::MAX);
}

// endregion Known Colours
