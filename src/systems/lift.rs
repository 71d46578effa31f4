use nalgebra::Vector3;

use crate::components::{ControlState, MotionState};
use crate::config::{Curve, LiftConfig};
use crate::utils::project_on_plane;

/// Below this local speed squared no lift is produced at all; the surfaces
/// have nothing to work with and normalizing the flow direction would be
/// unstable.
pub const MIN_LIFT_SPEED_SQUARED: f64 = 1.0;

/// Combined lift and induced drag of one lifting surface, in the body frame.
///
/// `axis` is the surface's hinge axis: body right (+x) for the main wing,
/// body up (+y) for the tail/rudder. The flow is the local velocity
/// projected onto the plane perpendicular to that axis; lift acts
/// perpendicular to the flow, induced drag against it, both scaling with the
/// flow speed squared.
fn surface_lift(
    aoa: f64,
    axis: &Vector3<f64>,
    local_velocity: &Vector3<f64>,
    power: f64,
    aoa_curve: &Curve,
    induced_drag: f64,
    induced_drag_curve: &Curve,
) -> Vector3<f64> {
    let lift_velocity = project_on_plane(local_velocity, axis);
    let speed_squared = lift_velocity.norm_squared();
    if speed_squared <= f64::EPSILON {
        return Vector3::zeros();
    }
    let flow_direction = lift_velocity / speed_squared.sqrt();

    let lift_coefficient = aoa_curve.evaluate(aoa.to_degrees());
    let lift = flow_direction.cross(axis) * (speed_squared * lift_coefficient * power);

    let drag_coefficient = lift_coefficient * lift_coefficient;
    let induced = -flow_direction
        * (speed_squared
            * drag_coefficient
            * induced_drag
            * induced_drag_curve.evaluate(local_velocity.z.max(0.0)));

    lift + induced
}

/// The wing and rudder forces for this tick, in the body frame. Both are
/// zero below the minimum lift speed. Deployed flaps raise the wing's lift
/// power and bias its angle of attack; the rudder never sees the flaps.
pub fn lift_forces(
    motion: &MotionState,
    controls: &ControlState,
    config: &LiftConfig,
) -> (Vector3<f64>, Vector3<f64>) {
    if motion.local_velocity.norm_squared() < MIN_LIFT_SPEED_SQUARED {
        return (Vector3::zeros(), Vector3::zeros());
    }

    let (flaps_lift_power, flaps_aoa_bias) = if controls.flaps_deployed {
        (config.flaps_lift_power, config.flaps_aoa_bias)
    } else {
        (0.0, 0.0)
    };

    let wing = surface_lift(
        motion.alpha + flaps_aoa_bias.to_radians(),
        &Vector3::x(),
        &motion.local_velocity,
        config.lift_power + flaps_lift_power,
        &config.aoa_curve,
        config.induced_drag,
        &config.induced_drag_curve,
    );

    let rudder = surface_lift(
        motion.beta,
        &Vector3::y(),
        &motion.local_velocity,
        config.rudder_power,
        &config.rudder_aoa_curve,
        config.induced_drag,
        &config.rudder_induced_drag_curve,
    );

    (wing, rudder)
}
