use robot_factory::Robot;

/// A simple robot with fixed illustrative attributes.
///
/// A real system would source these from configuration or sensors; here they
/// are constants so the factory and merge behavior stay easy to follow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Robot1;

impl Robot for Robot1 {
    fn height(&self) -> f64 {
        24.3
    }

    fn speed(&self) -> f64 {
        17.2
    }

    fn weight(&self) -> f64 {
        10.8
    }

    fn clone_robot(&self) -> Box<dyn Robot> {
        Box::new(*self)
    }
}
