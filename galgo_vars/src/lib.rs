#![forbid(unsafe_code)]

pub mod codec;
pub mod collection;
pub mod template;

pub use codec::*;
pub use collection::*;
pub use template::*;
