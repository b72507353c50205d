/// Numeric type of a single colour channel
pub type Channel = u8;

/// Numeric type used for most calculations
pub type Number = f32;
/// Numeric type for calculations that need the extra precision
pub type WideNumber = f64;

// Unsigned names used by the vector aliases in [`crate::def::math`].
// The signed and float primitives are already short, so they're used as-is.
pub type Ui8 = u8;
pub type Ui16 = u16;
pub type Ui32 = u32;
pub type Ui64 = u64;
