pub mod fetch;
pub mod post;

pub use fetch::*;
pub use post::*;
