pub mod consts;
pub mod math;
pub mod targets;
pub mod types;
