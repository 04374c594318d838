pub mod broker;
pub mod place;

pub use broker::*;
pub use place::*;
