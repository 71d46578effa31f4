pub mod body;

pub use body::{ColliderId, Contact, RigidBody, TorqueMode};
