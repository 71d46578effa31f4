use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Motion quantities derived from the rigid body every tick.
///
/// Everything here is recomputed by the state estimator; it is scratch state
/// owned by the orchestrator, not an input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionState {
    /// World-frame velocity [m/s]
    pub velocity: Vector3<f64>,
    /// Velocity rotated into the body frame (+z forward, +y up, +x right) [m/s]
    pub local_velocity: Vector3<f64>,
    /// Angular velocity in the body frame [rad/s]
    pub local_angular_velocity: Vector3<f64>,
    /// Inertial acceleration in the body frame [m/s^2]
    pub local_g_force: Vector3<f64>,
    /// Pitch-plane angle of attack [rad]
    pub alpha: f64,
    /// Yaw-plane angle of attack, the sideslip analogue [rad]
    pub beta: f64,
    /// World velocity of the previous tick, for the G-force difference [m/s]
    pub last_velocity: Vector3<f64>,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            velocity: Vector3::zeros(),
            local_velocity: Vector3::zeros(),
            local_angular_velocity: Vector3::zeros(),
            local_g_force: Vector3::zeros(),
            alpha: 0.0,
            beta: 0.0,
            last_velocity: Vector3::zeros(),
        }
    }
}
