//! Loiter mode decision logic
//!
//! The loiter mode keeps the vehicle near a moving subject and lets the
//! subject steer it with a remote. It is a nested state machine of
//! [`LoiterSubMode`]s; every transition is a pure function in
//! [`transition`], so the owning mode only has to apply the result.

pub mod camera;
mod error;
mod sub_mode;
pub mod transition;

pub use camera::{clamp_altitude, point_camera_at_subject};
pub use error::GeometryError;
pub use sub_mode::LoiterSubMode;
pub use transition::{LoiterInputs, Transition, MIN_ORBIT_RADIUS};
