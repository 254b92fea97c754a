pub mod category;
pub mod filter;
pub mod task;

pub use category::*;
pub use filter::*;
pub use task::*;
