//! Parameter management types
//!
//! The parameter store plus the parameter blocks the navigator modes load
//! from it. Persistence is owned by the parameter-storage subsystem.

pub mod error;
pub mod loiter;
pub mod navigator;
pub mod storage;

pub use error::ParameterError;
pub use loiter::LoiterParams;
pub use navigator::NavigatorParams;
pub use storage::{ParamFlags, ParamMetadata, ParamValue, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};
