use robot_factory::Robot;
use serde::Serialize;

/// Snapshot of a robot's observable attributes for the final dump.
///
/// Serialized to stdout as JSON by the driver. A merge robot that never
/// combined anything reports an infinite speed, which `serde_json` renders
/// as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RobotReport {
    pub height: f64,
    pub speed: f64,
    pub weight: f64,
}

impl From<&dyn Robot> for RobotReport {
    fn from(robot: &dyn Robot) -> Self {
        Self {
            height: robot.height(),
            speed: robot.speed(),
            weight: robot.weight(),
        }
    }
}
