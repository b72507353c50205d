#![allow(dead_code)]

use rand::{Rng as _, SeedableRng};
use sp_types::colour::{ColourRgb, ColourRgba};

pub type Rng = rand::rngs::SmallRng;

/// How many random colours each property test checks
pub const COUNT: usize = 256;

/// Seeded, so failures can be reproduced
pub fn rng() -> Rng { Rng::seed_from_u64(0x5eed_c010) }

pub fn random_rgb(rng: &mut Rng) -> ColourRgb { ColourRgb::from(rng.gen::<[u8; 3]>()) }

pub fn random_rgba(rng: &mut Rng) -> ColourRgba { ColourRgba::from(rng.gen::<[u8; 4]>()) }
