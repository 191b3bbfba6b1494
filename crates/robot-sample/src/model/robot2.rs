use robot_factory::Robot;

/// A lighter, faster robot than [`Robot1`](crate::model::Robot1).
#[derive(Debug, Clone, Copy, Default)]
pub struct Robot2;

impl Robot for Robot2 {
    fn height(&self) -> f64 {
        13.1
    }

    fn speed(&self) -> f64 {
        29.0
    }

    fn weight(&self) -> f64 {
        2.3
    }

    fn clone_robot(&self) -> Box<dyn Robot> {
        Box::new(*self)
    }
}
