//! Navigator Parameter Definitions
//!
//! Parameters shared by every navigator mode.
//!
//! # Parameters
//!
//! - `NAV_TAKEOFF_ALT` - Climb above the launch point for takeoff (m)
//! - `NAV_TAKEOFF_ACR` - Vertical acceptance radius for takeoff (m)
//! - `NAV_ACC_RAD` - 3-D acceptance radius for position setpoints (m)

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

const DEFAULT_TAKEOFF_ALT: f32 = 10.0;
const MIN_TAKEOFF_ALT: f32 = 1.0;
const MAX_TAKEOFF_ALT: f32 = 100.0;

const DEFAULT_TAKEOFF_ACR: f32 = 1.0;
const MIN_TAKEOFF_ACR: f32 = 0.1;
const MAX_TAKEOFF_ACR: f32 = 10.0;

const DEFAULT_ACC_RAD: f32 = 2.0;
const MIN_ACC_RAD: f32 = 0.1;
const MAX_ACC_RAD: f32 = 50.0;

/// Navigator parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorParams {
    /// Takeoff climb height above the vehicle position (m)
    pub takeoff_alt: f32,
    /// Takeoff counts as complete within this altitude error (m)
    pub takeoff_acceptance_radius: f32,
    /// Position setpoints count as reached within this distance (m)
    pub acceptance_radius: f32,
}

impl Default for NavigatorParams {
    fn default() -> Self {
        Self {
            takeoff_alt: DEFAULT_TAKEOFF_ALT,
            takeoff_acceptance_radius: DEFAULT_TAKEOFF_ACR,
            acceptance_radius: DEFAULT_ACC_RAD,
        }
    }
}

impl NavigatorParams {
    /// Register navigator parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "NAV_TAKEOFF_ALT",
            ParamValue::Float(DEFAULT_TAKEOFF_ALT),
            ParamFlags::empty(),
        )?;
        store.register(
            "NAV_TAKEOFF_ACR",
            ParamValue::Float(DEFAULT_TAKEOFF_ACR),
            ParamFlags::empty(),
        )?;
        store.register(
            "NAV_ACC_RAD",
            ParamValue::Float(DEFAULT_ACC_RAD),
            ParamFlags::empty(),
        )?;
        Ok(())
    }

    /// Load navigator parameters, clamping each to its valid range
    ///
    /// Missing parameters fall back to their defaults.
    pub fn from_store(store: &ParameterStore) -> Self {
        let takeoff_alt = store
            .get_f32("NAV_TAKEOFF_ALT")
            .map_or(DEFAULT_TAKEOFF_ALT, |v| v.clamp(MIN_TAKEOFF_ALT, MAX_TAKEOFF_ALT));

        let takeoff_acceptance_radius = store
            .get_f32("NAV_TAKEOFF_ACR")
            .map_or(DEFAULT_TAKEOFF_ACR, |v| v.clamp(MIN_TAKEOFF_ACR, MAX_TAKEOFF_ACR));

        let acceptance_radius = store
            .get_f32("NAV_ACC_RAD")
            .map_or(DEFAULT_ACC_RAD, |v| v.clamp(MIN_ACC_RAD, MAX_ACC_RAD));

        Self {
            takeoff_alt,
            takeoff_acceptance_radius,
            acceptance_radius,
        }
    }
}
