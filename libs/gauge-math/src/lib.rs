#![no_std]

pub mod full_math;
pub mod scaling;

pub use full_math::*;
pub use scaling::*;
