//! # Robot Trait
//!
//! The `Robot` trait defines the contract that every robot variant must
//! implement to be stored in a [`RobotRegistry`](crate::registry::RobotRegistry)
//! or merged into a [`MergeRobot`](crate::merge::MergeRobot). It specifies the
//! three observable attributes and an object-safe cloning method.
//!
//! # Architecture Note
//! Why do we need this trait?
//! The registry holds robots of *different* concrete types behind one map, so
//! it works with `Box<dyn Robot>` trait objects. `Clone` itself is not object
//! safe (its `clone` returns `Self`), which is why the trait carries its own
//! [`Robot::clone_robot`] returning a boxed trait object. Concrete types that
//! derive `Clone` implement it as a one-liner.

use std::fmt::Debug;

/// Contract for anything the factory can register, copy, and merge.
///
/// All three accessors are pure: calling them never mutates the robot and
/// always returns the same value for the same state.
pub trait Robot: Debug + Send + Sync {
    /// Height of the robot, in whatever unit the model uses.
    fn height(&self) -> f64;

    /// Top speed of the robot.
    fn speed(&self) -> f64;

    /// Weight of the robot.
    fn weight(&self) -> f64;

    /// Produces an independent value copy of this robot.
    ///
    /// The copy shares no state with the original: mutating one (where the
    /// concrete type exposes mutation at all) never affects the other.
    fn clone_robot(&self) -> Box<dyn Robot>;
}

impl Clone for Box<dyn Robot> {
    fn clone(&self) -> Self {
        self.clone_robot()
    }
}
