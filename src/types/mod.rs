//! The types inside this crate.

mod errors;
mod sample;
mod z_score;

pub use errors::*;
pub use sample::*;
pub use z_score::*;
