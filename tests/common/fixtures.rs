use airframe::config::Curve;
use airframe::{ColliderId, PlaneConfig, RigidBody, TorqueMode};
use nalgebra::{UnitQuaternion, Vector3};

pub const GEAR_LEFT: ColliderId = ColliderId(1);
pub const GEAR_RIGHT: ColliderId = ColliderId(2);
pub const FUSELAGE: ColliderId = ColliderId(3);

pub fn landing_gear() -> Vec<ColliderId> {
    vec![GEAR_LEFT, GEAR_RIGHT]
}

/// The stock profile with a fast throttle ramp, handy for short scenarios.
pub fn test_profile() -> PlaneConfig {
    PlaneConfig {
        throttle_speed: 2.0,
        ..PlaneConfig::falcon()
    }
}

/// A profile that isolates the steering load limiter: no lift, no drag, full
/// steering authority at every speed. The aircraft keeps whatever linear
/// velocity it has while the limiter shapes the turn rate.
pub fn limiter_profile() -> PlaneConfig {
    let mut config = PlaneConfig::falcon();
    config.g_limit = 9.0;
    config.g_limit_pitch = 6.0;
    config.steering.turn_speed = Vector3::new(40.0, 30.0, 120.0);
    config.steering.turn_acceleration = Vector3::new(90.0, 60.0, 270.0);
    config.steering.steering_curve = Curve::constant(1.0);
    config.lift.aoa_curve = Curve::constant(0.0);
    config.lift.rudder_aoa_curve = Curve::constant(0.0);
    config.drag.directional = airframe::config::DirectionalDrag::uniform(0.0);
    config.drag.angular_drag = Vector3::zeros();
    config
}

/// A rigid body with semi-implicit Euler integration, just enough to close
/// the loop around the flight model. Mass only matters for forces; torque
/// requests arrive in the mass-independent modes.
pub struct TestBody {
    pub position: Vector3<f64>,
    pub attitude: UnitQuaternion<f64>,
    pub velocity: Vector3<f64>,
    /// World frame [rad/s]
    pub angular_velocity: Vector3<f64>,
    pub mass: f64,
    pub kinematic: bool,
    pub gear_extended: bool,
    pub gear_braking: bool,
    force: Vector3<f64>,
    angular_acceleration: Vector3<f64>,
}

impl TestBody {
    pub fn at_rest() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            mass: 8000.0,
            kinematic: false,
            gear_extended: false,
            gear_braking: false,
            force: Vector3::zeros(),
            angular_acceleration: Vector3::zeros(),
        }
    }

    /// Level flight along world +z at `speed` m/s.
    pub fn flying(speed: f64) -> Self {
        Self {
            velocity: Vector3::new(0.0, 0.0, speed),
            position: Vector3::new(0.0, 1000.0, 0.0),
            ..Self::at_rest()
        }
    }

    /// Integrates the accumulated forces over `dt` and clears them.
    pub fn step(&mut self, dt: f64) {
        if !self.kinematic {
            self.velocity += self.force / self.mass * dt;
            self.position += self.velocity * dt;
            self.angular_velocity += self.angular_acceleration * dt;
            if self.angular_velocity.norm_squared() > 0.0 {
                self.attitude =
                    UnitQuaternion::from_scaled_axis(self.angular_velocity * dt) * self.attitude;
            }
        }
        self.force = Vector3::zeros();
        self.angular_acceleration = Vector3::zeros();
    }
}

impl RigidBody for TestBody {
    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.attitude
    }

    fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    fn angular_velocity(&self) -> Vector3<f64> {
        self.angular_velocity
    }

    fn apply_local_force(&mut self, force: Vector3<f64>) {
        self.force += self.attitude * force;
    }

    fn apply_local_torque(&mut self, torque: Vector3<f64>, mode: TorqueMode) {
        match mode {
            TorqueMode::Acceleration => self.angular_acceleration += self.attitude * torque,
            TorqueMode::VelocityChange => self.angular_velocity += self.attitude * torque,
        }
    }

    fn freeze(&mut self, position: Option<Vector3<f64>>, attitude: UnitQuaternion<f64>) {
        self.kinematic = true;
        if let Some(position) = position {
            self.position = position;
        }
        self.attitude = attitude;
        self.velocity = Vector3::zeros();
        self.angular_velocity = Vector3::zeros();
    }

    fn set_gear_extended(&mut self, extended: bool) {
        self.gear_extended = extended;
    }

    fn set_gear_braking(&mut self, braking: bool) {
        self.gear_braking = braking;
    }
}
