//! # Merge Robot
//!
//! A robot built by combining several simpler ones. It accumulates the sum of
//! heights, the minimum speed, and the sum of weights of every robot merged
//! into it.
//!
//! # Architecture Note
//! `MergeRobot` implements [`Robot`] itself, so it can be registered into a
//! [`RobotRegistry`](crate::registry::RobotRegistry) as just another
//! prototype. Creating copies of a registered merge robot yields independent
//! snapshots of its accumulated state; merging a merge robot into another one
//! composes recursively.

use crate::entity::Robot;
use tracing::debug;

/// Accumulator over the robots fed into it.
///
/// The fresh state is the identity of the reduction: height 0, weight 0, and
/// speed `+inf` (the identity element for "minimum"). Reading the getters
/// before any combine call returns those values; an infinite speed is an
/// observable, intentional value, not an error.
#[derive(Debug, Clone)]
pub struct MergeRobot {
    height: f64,
    speed: f64,
    weight: f64,
}

impl MergeRobot {
    pub fn new() -> Self {
        Self {
            height: 0.0,
            speed: f64::INFINITY,
            weight: 0.0,
        }
    }

    /// Merges a single robot into the accumulated state.
    pub fn combine(&mut self, robot: &dyn Robot) {
        self.combine_all(std::iter::once(robot));
    }

    /// Merges every robot in `robots`, in sequence order.
    ///
    /// The fold seeds from the *current* state rather than the identity, so
    /// repeated calls accumulate: combining `[a]` then `[b]` equals combining
    /// `[a, b]` in one call. No input robot is mutated.
    pub fn combine_all<'a, I>(&mut self, robots: I)
    where
        I: IntoIterator<Item = &'a dyn Robot>,
    {
        let (height, speed, weight) = robots.into_iter().fold(
            (self.height, self.speed, self.weight),
            |(height, speed, weight), robot| {
                (
                    height + robot.height(),
                    speed.min(robot.speed()),
                    weight + robot.weight(),
                )
            },
        );
        self.height = height;
        self.speed = speed;
        self.weight = weight;
        debug!(height, speed, weight, "Merged robots");
    }
}

impl Default for MergeRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl Robot for MergeRobot {
    fn height(&self) -> f64 {
        self.height
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn clone_robot(&self) -> Box<dyn Robot> {
        Box::new(self.clone())
    }
}
