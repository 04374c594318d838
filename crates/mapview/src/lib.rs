pub mod events;
pub mod session;

pub use events::*;
pub use session::*;
