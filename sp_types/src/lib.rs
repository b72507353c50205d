//! Shared type layer: scalar and maths type names, and 8-bit colour values.

pub mod colour;
pub mod def;
pub mod error;
