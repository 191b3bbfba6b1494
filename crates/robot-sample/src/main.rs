//! # Robot Factory Recipe
//!
//! A reference implementation of the prototype-factory pattern in Rust.
//!
//! ## 🚀 Core Components
//!
//! - **[robot_factory]**: The heart of the system. Contains the [`Robot`](robot_factory::Robot) trait, the [`RobotRegistry`](robot_factory::RobotRegistry) prototype factory, and the [`MergeRobot`](robot_factory::MergeRobot) aggregator.
//! - **[model]**: Fixed-value robot models ([`Robot1`], [`Robot2`]).
//! - **[report]**: The [`RobotReport`](robot_sample::report::RobotReport) dumped to stdout at the end of the run.
//!
//! ## 📚 Quick Start
//!
//! The application entry point is in [`main`], which demonstrates:
//! 1.  Registering the [`Robot1`] and [`Robot2`] prototypes.
//! 2.  Merging three [`Robot2`] instances into a [`MergeRobot`](robot_factory::MergeRobot).
//! 3.  Registering the merge robot as a prototype of its own and creating a
//!     copy of it.

use robot_factory::tracing::setup_tracing;
use robot_factory::{MergeRobot, RobotRegistry};
use robot_sample::model::{Robot1, Robot2};
use robot_sample::report::RobotReport;
use tracing::info;

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting robot factory demo");

    // Robot1 and Robot2 are the robot types the factory can create
    let mut registry = RobotRegistry::new();
    registry
        .register("Robot1", Box::new(Robot1))
        .map_err(|e| e.to_string())?;
    registry
        .register("Robot2", Box::new(Robot2))
        .map_err(|e| e.to_string())?;

    // Merge one direct Robot2 plus two factory-created clones
    let mut merged = MergeRobot::new();
    merged.combine(&Robot2);

    let clones = registry.create("Robot2", 2).map_err(|e| e.to_string())?;
    merged.combine_all(clones.iter().map(|robot| robot.as_ref()));

    // The merge robot is a robot too, so it becomes a prototype of its own
    registry
        .register("MergeRobot", Box::new(merged))
        .map_err(|e| e.to_string())?;

    let robots = registry
        .create("MergeRobot", 1)
        .map_err(|e| e.to_string())?;
    let report = RobotReport::from(robots[0].as_ref());

    info!(
        height = report.height,
        speed = report.speed,
        weight = report.weight,
        "Merge complete"
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?
    );

    Ok(())
}
