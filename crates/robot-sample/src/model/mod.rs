//! Fixed-value robot models implementing the [`Robot`](robot_factory::Robot) trait.

pub mod robot1;
pub mod robot2;

pub use robot1::*;
pub use robot2::*;
