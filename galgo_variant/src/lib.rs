#![forbid(unsafe_code)]

pub mod variant;
pub use variant::*;
