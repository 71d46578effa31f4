pub mod controls;
pub mod health;
pub mod motion;

pub use controls::ControlState;
pub use health::HealthState;
pub use motion::MotionState;
