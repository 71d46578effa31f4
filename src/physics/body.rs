use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// How the body should integrate a torque request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorqueMode {
    /// Angular acceleration [rad/s^2]; the body's inertia is ignored.
    Acceleration,
    /// Instantaneous angular velocity change [rad/s]; inertia is ignored.
    VelocityChange,
}

/// Identifier of a collider surface owned by the surrounding scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColliderId(pub u32);

/// One collision contact reported by the external collision system.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// The surface of this aircraft that touched something.
    pub collider: ColliderId,
    /// World-space contact point.
    pub point: Vector3<f64>,
}

/// The external rigid body the flight model reads from and acts upon.
///
/// The integrator owns mass, inertia and integration; the flight model only
/// issues force and torque requests against this interface and reads the
/// resulting motion back on the next tick. The body frame is +z forward,
/// +y up, +x right; the world is y-up.
pub trait RigidBody {
    /// World-frame position [m].
    fn position(&self) -> Vector3<f64>;

    /// Rotation from body frame to world frame.
    fn attitude(&self) -> UnitQuaternion<f64>;

    /// World-frame linear velocity [m/s].
    fn velocity(&self) -> Vector3<f64>;

    /// World-frame angular velocity [rad/s].
    fn angular_velocity(&self) -> Vector3<f64>;

    /// Accumulates a body-frame force [N] for the next integration step.
    fn apply_local_force(&mut self, force: Vector3<f64>);

    /// Accumulates a body-frame torque, integrated per `mode` with mass and
    /// inertia ignored.
    fn apply_local_torque(&mut self, torque: Vector3<f64>, mode: TorqueMode);

    /// Marks the body immovable, overriding its attitude and optionally its
    /// position. Used for the crash pose.
    fn freeze(&mut self, position: Option<Vector3<f64>>, attitude: UnitQuaternion<f64>);

    /// Landing gear extension state; the gear follows the flap setting.
    fn set_gear_extended(&mut self, extended: bool);

    /// Swaps the gear contact surfaces to or from the braking material.
    fn set_gear_braking(&mut self, braking: bool);
}
