pub mod analysis;
pub mod section;

pub use analysis::*;
pub use section::*;
