use robot_factory::{FactoryError, MergeRobot, Robot, RobotRegistry};

// --- Test Robot ---

#[derive(Debug, Clone, Copy, PartialEq)]
struct FixedRobot {
    height: f64,
    speed: f64,
    weight: f64,
}

impl Robot for FixedRobot {
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
        Box::new(*self)
    }
}

const SCOUT: FixedRobot = FixedRobot {
    height: 24.3,
    speed: 17.2,
    weight: 10.8,
};

const COURIER: FixedRobot = FixedRobot {
    height: 13.1,
    speed: 29.0,
    weight: 2.3,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// --- Registration ---

#[test]
fn test_register_and_create_returns_requested_number_of_copies() {
    let mut registry = RobotRegistry::new();
    registry.register("Scout", Box::new(SCOUT)).unwrap();

    let squad = registry.create("Scout", 5).unwrap();
    assert_eq!(squad.len(), 5);
    for robot in &squad {
        assert_close(robot.height(), 24.3);
        assert_close(robot.speed(), 17.2);
        assert_close(robot.weight(), 10.8);
    }
}

#[test]
fn test_duplicate_key_is_rejected_and_first_prototype_kept() {
    let mut registry = RobotRegistry::new();
    registry.register("Scout", Box::new(SCOUT)).unwrap();

    let err = registry.register("Scout", Box::new(COURIER)).unwrap_err();
    assert_eq!(err, FactoryError::DuplicateKey("Scout".to_string()));

    // The stored prototype is still the first one registered
    let robots = registry.create("Scout", 1).unwrap();
    assert_close(robots[0].height(), SCOUT.height);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_qualified_keys_are_normalized() {
    let mut registry = RobotRegistry::new();
    registry.register("model::Scout", Box::new(SCOUT)).unwrap();

    // Both the normalized and the qualified spelling resolve the prototype
    assert_eq!(registry.create("model_Scout", 1).unwrap().len(), 1);
    assert_eq!(registry.create("model::Scout", 1).unwrap().len(), 1);

    // And the normalized key is a valid method-name fragment
    let robots = registry.dispatch("createmodel_Scout", &[2]).unwrap();
    assert_eq!(robots.len(), 2);
}

// --- Creation failures ---

#[test]
fn test_create_with_zero_count_fails() {
    let mut registry = RobotRegistry::new();
    registry.register("Scout", Box::new(SCOUT)).unwrap();

    let err = registry.create("Scout", 0).unwrap_err();
    assert_eq!(err, FactoryError::InvalidCount(0));
}

#[test]
fn test_create_with_unknown_key_fails() {
    let registry = RobotRegistry::new();
    let err = registry.create("Ghost", 1).unwrap_err();
    assert_eq!(err, FactoryError::UnknownKey("Ghost".to_string()));
}

// --- Dynamic dispatch surface ---

#[test]
fn test_dispatch_accepts_create_method_shape() {
    let mut registry = RobotRegistry::new();
    registry.register("Courier", Box::new(COURIER)).unwrap();

    let robots = registry.dispatch("createCourier", &[2]).unwrap();
    assert_eq!(robots.len(), 2);
    assert_close(robots[0].speed(), 29.0);
    assert_close(robots[1].speed(), 29.0);
}

#[test]
fn test_dispatch_rejects_bad_call_shapes() {
    let mut registry = RobotRegistry::new();
    registry.register("Courier", Box::new(COURIER)).unwrap();

    let bad_calls: &[(&str, &[i64])] = &[
        ("fly", &[1]),             // wrong prefix
        ("create", &[1]),          // empty key
        ("createCourier", &[]),    // missing count
        ("createCourier", &[1, 2]), // too many arguments
        ("createCourier", &[0]),   // zero count
        ("createCourier", &[-3]),  // negative count
    ];
    for (method, args) in bad_calls {
        let err = registry.dispatch(method, args).unwrap_err();
        assert_eq!(
            err,
            FactoryError::InvalidMethod(method.to_string()),
            "call {method}({args:?}) should be rejected as a bad shape"
        );
    }
}

#[test]
fn test_dispatch_with_unknown_key_fails() {
    let registry = RobotRegistry::new();
    let err = registry.dispatch("createGhost", &[1]).unwrap_err();
    assert_eq!(err, FactoryError::UnknownKey("Ghost".to_string()));
}

// --- Merge robots as prototypes ---

#[test]
fn test_merge_robot_can_be_registered_as_prototype() {
    let mut registry = RobotRegistry::new();

    let mut merged = MergeRobot::new();
    merged.combine_all([&COURIER as &dyn Robot, &COURIER]);

    registry.register("MergeRobot", Box::new(merged)).unwrap();

    let robots = registry.create("MergeRobot", 1).unwrap();
    assert_close(robots[0].height(), 26.2);
    assert_close(robots[0].speed(), 29.0);
    assert_close(robots[0].weight(), 4.6);
}

#[test]
fn test_created_merge_robot_copies_are_independent() {
    let mut registry = RobotRegistry::new();

    let mut merged = MergeRobot::new();
    merged.combine(&COURIER);
    registry.register("MergeRobot", Box::new(merged)).unwrap();

    let robots = registry.create("MergeRobot", 2).unwrap();

    // Feeding more robots into one copy must not leak into the other copy
    // or into the stored prototype.
    let mut first = MergeRobot::new();
    first.combine(robots[0].as_ref());
    first.combine(&SCOUT);

    assert_close(robots[1].height(), COURIER.height);
    assert_close(registry.create("MergeRobot", 1).unwrap()[0].height(), COURIER.height);
    assert_close(first.height(), COURIER.height + SCOUT.height);
}
