//! Domain values shared between the store and the HTTP layer.

pub mod errors;
pub mod hero;

pub use hero::{Hero, HeroId, HeroInput};
