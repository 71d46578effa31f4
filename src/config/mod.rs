mod curve;
mod loader;

pub use curve::Curve;
pub use loader::ConfigError;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// The full flight profile of one aircraft, loaded once at construction and
/// immutable afterwards. All tuning lives here; the flight systems read it
/// and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneConfig {
    /// Name of the profile, e.g. "Falcon".
    pub name: String,
    /// Hit points at spawn [hp]
    pub max_health: f64,
    /// Engine thrust at full throttle [N]
    pub max_thrust: f64,
    /// Throttle ramp rate at full input [1/s]
    pub throttle_speed: f64,
    /// Structural load limit for pitch-down, yaw and roll [g]
    pub g_limit: f64,
    /// Structural load limit for pitch-up [g]
    pub g_limit_pitch: f64,
    pub lift: LiftConfig,
    pub steering: SteeringConfig,
    pub drag: DragConfig,
}

/// Lifting-surface tuning for the main wing, the tail/rudder and the flaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftConfig {
    /// Wing lift scale [N s^2/m^2 per unit coefficient]
    pub lift_power: f64,
    /// Wing lift coefficient over angle of attack [deg]
    pub aoa_curve: Curve,
    /// Induced drag scale, shared by wing and rudder
    pub induced_drag: f64,
    /// Induced drag factor over forward speed [m/s]
    pub induced_drag_curve: Curve,
    /// Tail/rudder lift scale
    pub rudder_power: f64,
    /// Rudder lift coefficient over yaw-plane angle of attack [deg]
    pub rudder_aoa_curve: Curve,
    /// Rudder induced drag factor over forward speed [m/s]
    pub rudder_induced_drag_curve: Curve,
    /// Extra lift power while flaps are deployed
    pub flaps_lift_power: f64,
    /// Angle-of-attack bias while flaps are deployed [deg]
    pub flaps_aoa_bias: f64,
    /// Extra forward drag coefficient while flaps are deployed
    pub flaps_drag: f64,
    /// Forward speed above which flaps retract automatically [m/s]
    pub flaps_retract_speed: f64,
}

/// Steering authority per body axis (x = pitch, y = yaw, z = roll).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteeringConfig {
    /// Maximum commanded turn rate per axis [deg/s]
    pub turn_speed: Vector3<f64>,
    /// Turn rate slew limit per axis [deg/s^2]. Must be non-zero on every
    /// axis; it divides the effective-input feedback.
    pub turn_acceleration: Vector3<f64>,
    /// Steering authority factor over forward speed [m/s]
    pub steering_curve: Curve,
}

/// Passive drag tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    pub directional: DirectionalDrag,
    /// Quadratic angular damping per axis, applied as an angular
    /// acceleration so it is independent of the body's inertia
    pub angular_drag: Vector3<f64>,
    /// Extra forward drag coefficient while the airbrake is deployed
    pub airbrake_drag: f64,
}

/// A body axis of the directional drag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Drag coefficient curves keyed by body axis and travel direction. Each
/// half-axis has its own curve over the absolute velocity component along
/// that axis; the blend in [`DirectionalDrag::coefficient`] picks the curve
/// matching the sign of each component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalDrag {
    pub right: Curve,
    pub left: Curve,
    pub top: Curve,
    pub bottom: Curve,
    pub forward: Curve,
    pub back: Curve,
}

impl DirectionalDrag {
    /// A table with the same constant coefficient on all six half-axes.
    pub fn uniform(value: f64) -> Self {
        Self {
            right: Curve::constant(value),
            left: Curve::constant(value),
            top: Curve::constant(value),
            bottom: Curve::constant(value),
            forward: Curve::constant(value),
            back: Curve::constant(value),
        }
    }

    /// The curve governing travel along `axis` in the positive or negative
    /// direction.
    pub fn curve(&self, axis: Axis, positive: bool) -> &Curve {
        match (axis, positive) {
            (Axis::X, true) => &self.right,
            (Axis::X, false) => &self.left,
            (Axis::Y, true) => &self.top,
            (Axis::Y, false) => &self.bottom,
            (Axis::Z, true) => &self.forward,
            (Axis::Z, false) => &self.back,
        }
    }

    /// Blends the six curves into one coefficient vector for the given local
    /// velocity. Each axis independently evaluates its positive- or
    /// negative-direction curve at the absolute component magnitude, then
    /// scales it by the normalized component so the vector varies smoothly
    /// with direction. `forward_bonus` is added to the forward-curve value
    /// (airbrake and flap drag).
    pub fn coefficient(&self, local_velocity: &Vector3<f64>, forward_bonus: f64) -> Vector3<f64> {
        let magnitude = local_velocity.norm();
        if magnitude <= 0.0 {
            return Vector3::zeros();
        }
        let direction = local_velocity / magnitude;

        let mut result = Vector3::zeros();
        for axis in Axis::ALL {
            let i = axis.index();
            let component = local_velocity[i];
            let positive = component > 0.0;
            let mut value = self.curve(axis, positive).evaluate(component.abs());
            if axis == Axis::Z && positive {
                value += forward_bonus;
            }
            result[i] = direction[i] * value;
        }
        result
    }
}

impl PlaneConfig {
    /// A programmed single-seat jet profile with plausible handling numbers.
    pub fn falcon() -> Self {
        Self {
            name: "Falcon".to_string(),
            max_health: 100.0,
            max_thrust: 120_000.0,
            throttle_speed: 0.5,
            g_limit: 8.0,
            g_limit_pitch: 10.0,
            lift: LiftConfig {
                lift_power: 80.0,
                aoa_curve: Curve::new(vec![
                    (-90.0, 0.0),
                    (-30.0, -1.0),
                    (-15.0, -1.1),
                    (0.0, 0.0),
                    (15.0, 1.1),
                    (30.0, 1.0),
                    (90.0, 0.0),
                ])
                .expect("falcon aoa curve"),
                induced_drag: 0.3,
                induced_drag_curve: Curve::new(vec![(0.0, 1.0), (100.0, 0.7), (300.0, 0.4)])
                    .expect("falcon induced drag curve"),
                rudder_power: 25.0,
                rudder_aoa_curve: Curve::new(vec![
                    (-90.0, 0.0),
                    (-40.0, -0.6),
                    (-20.0, -0.8),
                    (0.0, 0.0),
                    (20.0, 0.8),
                    (40.0, 0.6),
                    (90.0, 0.0),
                ])
                .expect("falcon rudder curve"),
                rudder_induced_drag_curve: Curve::new(vec![
                    (0.0, 1.0),
                    (100.0, 0.6),
                    (300.0, 0.3),
                ])
                .expect("falcon rudder induced drag curve"),
                flaps_lift_power: 20.0,
                flaps_aoa_bias: 4.0,
                flaps_drag: 0.002,
                flaps_retract_speed: 55.0,
            },
            steering: SteeringConfig {
                turn_speed: Vector3::new(60.0, 40.0, 160.0),
                turn_acceleration: Vector3::new(120.0, 80.0, 320.0),
                steering_curve: Curve::new(vec![
                    (0.0, 0.2),
                    (80.0, 1.0),
                    (220.0, 1.0),
                    (400.0, 0.4),
                ])
                .expect("falcon steering curve"),
            },
            drag: DragConfig {
                directional: DirectionalDrag {
                    right: Curve::constant(0.02),
                    left: Curve::constant(0.02),
                    top: Curve::constant(0.05),
                    bottom: Curve::constant(0.04),
                    forward: Curve::constant(0.0025),
                    back: Curve::constant(0.004),
                },
                angular_drag: Vector3::new(0.5, 0.4, 0.1),
                airbrake_drag: 0.004,
            },
        }
    }

    /// Checks the invariants tick-time code relies on. Called at aircraft
    /// construction so violations surface before the first tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health < 0.0 {
            return Err(ConfigError::ValidationError(
                "max_health must not be negative".to_string(),
            ));
        }
        if self.max_thrust < 0.0 {
            return Err(ConfigError::ValidationError(
                "max_thrust must not be negative".to_string(),
            ));
        }
        if self.throttle_speed <= 0.0 {
            return Err(ConfigError::ValidationError(
                "throttle_speed must be positive".to_string(),
            ));
        }
        if self.lift.flaps_retract_speed < 0.0 {
            return Err(ConfigError::ValidationError(
                "flaps_retract_speed must not be negative".to_string(),
            ));
        }
        for (i, label) in ["pitch", "yaw", "roll"].iter().enumerate() {
            if self.steering.turn_acceleration[i] == 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "turn_acceleration.{label} must be non-zero"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self::falcon()
    }
}
