pub mod cards;
pub mod engine;
pub mod result;

pub use cards::*;
pub use engine::*;
pub use result::*;
