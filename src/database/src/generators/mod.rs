mod generator;
mod player;

pub use generator::*;
pub use player::*;
