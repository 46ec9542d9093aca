//! Loiter Mode Parameter Definitions
//!
//! # Parameters
//!
//! - `LOI_MIN_ALT` - Minimum height above the subject while aiming (m)
//! - `LOI_STEP_LEN` - Distance moved per remote nudge (m)

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

/// Default minimum height above the subject in meters
const DEFAULT_MIN_ALT: f32 = 5.0;
const MIN_MIN_ALT: f32 = 0.0;
const MAX_MIN_ALT: f32 = 100.0;

/// Default nudge step in meters
const DEFAULT_STEP_LEN: f32 = 5.0;
const MIN_STEP_LEN: f32 = 0.5;
const MAX_STEP_LEN: f32 = 50.0;

/// Loiter mode parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoiterParams {
    /// Setpoint altitude never goes below subject altitude + this (m)
    pub min_alt: f32,
    /// Length of one up/down/left/right/closer/further step (m)
    pub step_len: f32,
}

impl Default for LoiterParams {
    fn default() -> Self {
        Self {
            min_alt: DEFAULT_MIN_ALT,
            step_len: DEFAULT_STEP_LEN,
        }
    }
}

impl LoiterParams {
    /// Register loiter parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "LOI_MIN_ALT",
            ParamValue::Float(DEFAULT_MIN_ALT),
            ParamFlags::empty(),
        )?;
        store.register(
            "LOI_STEP_LEN",
            ParamValue::Float(DEFAULT_STEP_LEN),
            ParamFlags::empty(),
        )?;
        Ok(())
    }

    /// Load loiter parameters from parameter store
    ///
    /// Values are clamped to their valid range, missing ones default.
    pub fn from_store(store: &ParameterStore) -> Self {
        let min_alt = store
            .get_f32("LOI_MIN_ALT")
            .map_or(DEFAULT_MIN_ALT, |v| v.clamp(MIN_MIN_ALT, MAX_MIN_ALT));

        let step_len = store
            .get_f32("LOI_STEP_LEN")
            .map_or(DEFAULT_STEP_LEN, |v| v.clamp(MIN_STEP_LEN, MAX_STEP_LEN));

        Self { min_alt, step_len }
    }
}
