//! Short names for the [`glam`] vector, matrix and quaternion types.
//!
//! Vectors are named `<scalar>v<dims>`, e.g. [`I16v3`] is a 3D vector of `i16`.
//! Matrices and quaternions follow the same pattern with `m<dims>` and `q`.

/// Declares the 2D, 3D and 4D vector aliases for each `prefix => glam_prefix` pair
macro_rules! vector_aliases {
    {$( $alias:ident => $glam:ident ),* $(,)?} => {
        paste::paste! { $(
            pub type [<$alias v2>] = glam::[<$glam 2>];
            pub type [<$alias v3>] = glam::[<$glam 3>];
            pub type [<$alias v4>] = glam::[<$glam 4>];
        )* }
    };
}

vector_aliases! {
    I8 => I8Vec,
    I16 => I16Vec,
    I32 => IVec,
    I64 => I64Vec,

    Ui8 => U8Vec,
    Ui16 => U16Vec,
    Ui32 => UVec,
    Ui64 => U64Vec,

    F32 => Vec,
    F64 => DVec,
}

// region Quaternions

pub type F32q = glam::Quat;
pub type F64q = glam::DQuat;

// endregion Quaternions

// region Matrices

pub type F32m2 = glam::Mat2;
pub type F32m3 = glam::Mat3;
pub type F32m4 = glam::Mat4;

pub type F64m2 = glam::DMat2;
pub type F64m3 = glam::DMat3;
pub type F64m4 = glam::DMat4;

// endregion Matrices

// region Engine Types

// These have to stay in sync with `crate::def::types::Number`

pub type Vector2 = F32v2;
pub type Vector3 = F32v3;
pub type Vector4 = F32v4;
pub type Matrix4 = F32m4;
pub type Quaternion = F32q;

// endregion Engine Types
