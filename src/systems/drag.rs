use nalgebra::Vector3;

use crate::components::{ControlState, MotionState};
use crate::config::PlaneConfig;

/// Directional drag force and angular drag torque for this tick, both in the
/// body frame.
///
/// The force blends the six half-axis drag curves by travel direction and
/// scales with speed squared, opposing the velocity. Airbrake and flap drag
/// are folded into the forward coefficient while deployed. The torque
/// opposes the angular velocity quadratically and is meant to be applied as
/// an angular acceleration, so the damping feel does not depend on the
/// body's inertia.
pub fn drag_forces(
    motion: &MotionState,
    controls: &ControlState,
    config: &PlaneConfig,
) -> (Vector3<f64>, Vector3<f64>) {
    let local_velocity = motion.local_velocity;
    let speed_squared = local_velocity.norm_squared();

    let force = if speed_squared > 0.0 {
        let mut forward_bonus = 0.0;
        if controls.airbrake_deployed {
            forward_bonus += config.drag.airbrake_drag;
        }
        if controls.flaps_deployed {
            forward_bonus += config.lift.flaps_drag;
        }

        let coefficient = config
            .drag
            .directional
            .coefficient(&local_velocity, forward_bonus);
        -local_velocity.normalize() * (coefficient.norm() * speed_squared)
    } else {
        Vector3::zeros()
    };

    let angular_velocity = motion.local_angular_velocity;
    // -normalize(w) * |w|^2 collapses to -w * |w|, which is safe at rest.
    let torque =
        (-angular_velocity * angular_velocity.norm()).component_mul(&config.drag.angular_drag);

    (force, torque)
}
