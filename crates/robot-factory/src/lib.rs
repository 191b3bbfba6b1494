//! # Robot Factory
//!
//! This crate provides the foundational building blocks for a small prototype
//! factory: a capability trait, a string-keyed prototype registry, and a
//! composite robot that merges values from many instances.
//!
//! ## The Three Patterns
//!
//! ### Interface Contract
//!
//! The [`Robot`] trait is the architectural requirement every concrete robot
//! must satisfy: three pure accessors (`height`, `speed`, `weight`) plus an
//! object-safe clone. Any type implementing the trait can live in the registry
//! next to any other, behind `Box<dyn Robot>`.
//!
//! ### Prototype Registry (Factory)
//!
//! The [`RobotRegistry`] stores one prototype instance per key and stamps out
//! independent value copies on demand:
//!
//! ```rust
//! use robot_factory::{Robot, RobotRegistry};
//!
//! #[derive(Debug, Clone, Copy)]
//! struct Scout;
//!
//! impl Robot for Scout {
//!     fn height(&self) -> f64 { 24.3 }
//!     fn speed(&self) -> f64 { 17.2 }
//!     fn weight(&self) -> f64 { 10.8 }
//!     fn clone_robot(&self) -> Box<dyn Robot> { Box::new(*self) }
//! }
//!
//! let mut registry = RobotRegistry::new();
//! registry.register("Scout", Box::new(Scout)).unwrap();
//!
//! let squad = registry.create("Scout", 3).unwrap();
//! assert_eq!(squad.len(), 3);
//! ```
//!
//! The original program exposed creation through method names like
//! `createScout(3)` resolved at call time; [`RobotRegistry::dispatch`] keeps
//! that surface for callers that carry the method name as a runtime string.
//!
//! ### Composite Aggregation
//!
//! The [`MergeRobot`] accumulates statistics (sum of heights, minimum speed,
//! sum of weights) over robots fed into it. Because it implements [`Robot`]
//! itself, a merge robot can be registered back into the registry as just
//! another prototype, giving recursive composition for free.
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`FactoryError`]. Nothing in this crate
//! catches or retries; errors propagate to the caller and, in the sample
//! driver, terminate the run.
//!
//! ## Logging
//!
//! Library code logs through the `tracing` crate with structured fields. Call
//! [`tracing::setup_tracing`](crate::tracing::setup_tracing) once at startup
//! and filter with `RUST_LOG`.

pub mod entity;
pub mod error;
pub mod merge;
pub mod registry;
pub mod tracing;

// Re-export core types for convenience
pub use entity::Robot;
pub use error::FactoryError;
pub use merge::MergeRobot;
pub use registry::{normalize_key, RobotRegistry};
