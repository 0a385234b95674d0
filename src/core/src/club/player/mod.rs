pub mod builder;
pub mod discipline;
pub mod performance;
pub mod player;
pub mod position;

pub use builder::*;
pub use discipline::*;
pub use performance::*;
pub use player::*;
pub use position::*;
