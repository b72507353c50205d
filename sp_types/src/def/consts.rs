use crate::def::types::{Number, WideNumber};

/// One full turn, in radians
pub const TAU: WideNumber = std::f64::consts::TAU;
/// See [`TAU`]
pub const TAU_F32: Number = std::f32::consts::TAU;

/// Half a turn. Prefer [`TAU`]
pub const PI: WideNumber = TAU / 2.0;
/// See [`PI`]
pub const PI_F32: Number = TAU_F32 / 2.0;
