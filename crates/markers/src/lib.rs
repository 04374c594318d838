pub mod cluster;
pub mod feature;
pub mod visible;

pub use cluster::*;
pub use feature::*;
pub use visible::*;
