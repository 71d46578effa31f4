use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Normalized control state: what the player commands and what the control
/// surfaces derive from it each tick.
///
/// The input fields are written from outside between ticks; the derived
/// fields are recomputed by the flight systems. All inputs are frozen once
/// the aircraft is dead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlState {
    /// Commanded turn rates per axis (x = pitch, y = yaw, z = roll), each
    /// in [-1, 1]
    pub control_input: Vector3<f64>,
    /// Throttle lever in [-1, 1]; negative requests the airbrake
    pub throttle_input: f64,
    /// Derived throttle output in [0, 1]
    pub throttle: f64,
    /// How much of the commanded input is actually achieved after load
    /// limiting and turn-rate lag, per axis in [-1, 1]. Feedback for
    /// external visualization only.
    pub effective_input: Vector3<f64>,
    pub flaps_deployed: bool,
    pub airbrake_deployed: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            control_input: Vector3::zeros(),
            throttle_input: 0.0,
            throttle: 0.0,
            effective_input: Vector3::zeros(),
            flaps_deployed: false,
            airbrake_deployed: false,
        }
    }
}
