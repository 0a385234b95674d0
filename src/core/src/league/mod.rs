pub mod awards;
pub mod league;
pub mod result;
pub mod schedule;
pub mod table;

pub use awards::*;
pub use league::*;
pub use result::*;
pub use schedule::*;
pub use table::*;
