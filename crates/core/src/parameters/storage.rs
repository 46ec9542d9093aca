//! Parameter Storage Types
//!
//! Provides the in-memory `ParameterStore` the navigator reads its tuning
//! from. Persistence lives with the parameter-storage subsystem; this store
//! only tracks values, flags and whether anything changed since the last
//! time the navigator looked.

use super::error::ParameterError;
use bitflags::bitflags;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length (MAVLink limit)
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 32;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter is read-only (cannot be modified at runtime)
        const READ_ONLY = 0b00000001;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

impl ParamValue {
    /// Numeric view of the value (bools map to 0.0/1.0)
    pub fn as_f32(&self) -> f32 {
        match self {
            ParamValue::Bool(b) => *b as u8 as f32,
            ParamValue::Int(i) => *i as f32,
            ParamValue::Float(f) => *f,
        }
    }
}

/// Parameter metadata
#[derive(Debug, Clone)]
pub struct ParamMetadata {
    /// Parameter flags
    pub flags: ParamFlags,
}

/// Parameter store
///
/// Parameters are registered once with a default and then updated by name.
/// Every successful `set` raises the update flag that the navigator loop
/// consumes with [`ParameterStore::take_updated`].
pub struct ParameterStore {
    parameters: FnvIndexMap<String<PARAM_NAME_LEN>, ParamValue, MAX_PARAMS>,
    metadata: FnvIndexMap<String<PARAM_NAME_LEN>, ParamMetadata, MAX_PARAMS>,
    updated: bool,
}

fn key(name: &str) -> Result<String<PARAM_NAME_LEN>, ParameterError> {
    let mut key = String::<PARAM_NAME_LEN>::new();
    key.push_str(name)
        .map_err(|_| ParameterError::InvalidConfig)?;
    Ok(key)
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            parameters: FnvIndexMap::new(),
            metadata: FnvIndexMap::new(),
            updated: false,
        }
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.parameters.get(&key(name).ok()?)
    }

    /// Get a parameter as f32, if present
    pub fn get_f32(&self, name: &str) -> Option<f32> {
        self.get(name).map(ParamValue::as_f32)
    }

    /// Set parameter value
    ///
    /// The parameter must already be registered and writable.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = key(name)?;

        if !self.parameters.contains_key(&key) {
            return Err(ParameterError::InvalidConfig);
        }

        if let Some(meta) = self.metadata.get(&key) {
            if meta.flags.contains(ParamFlags::READ_ONLY) {
                return Err(ParameterError::ReadOnly);
            }
        }

        self.parameters.insert(key, value).ok();
        self.updated = true;
        Ok(())
    }

    /// Register a new parameter with default value and flags
    ///
    /// If the parameter already exists, this is a no-op (idempotent).
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = key(name)?;

        if self.parameters.contains_key(&key) {
            return Ok(());
        }

        self.parameters
            .insert(key.clone(), default_value)
            .map_err(|_| ParameterError::StoreFull)?;
        self.metadata
            .insert(key, ParamMetadata { flags })
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// A value changed since the last call; clears the flag
    pub fn take_updated(&mut self) -> bool {
        core::mem::take(&mut self.updated)
    }

    /// A value changed and has not been consumed yet
    pub fn is_updated(&self) -> bool {
        self.updated
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_value_as_f32() {
        assert!((ParamValue::Float(2.5).as_f32() - 2.5).abs() < 0.001);
        assert!((ParamValue::Int(7).as_f32() - 7.0).abs() < 0.001);
        assert!((ParamValue::Bool(true).as_f32() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_parameter_store_new() {
        let store = ParameterStore::new();
        assert!(store.get("NAV_ACC_RAD").is_none());
        assert!(!store.is_updated());
    }

    #[test]
    fn test_parameter_store_register_and_get() {
        let mut store = ParameterStore::new();
        store
            .register("LOI_STEP_LEN", ParamValue::Float(5.0), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("LOI_STEP_LEN"), Some(&ParamValue::Float(5.0)));
        assert_eq!(store.get_f32("LOI_STEP_LEN"), Some(5.0));
        // Registration alone is not a change notification
        assert!(!store.is_updated());
    }

    #[test]
    fn test_parameter_store_set_raises_update() {
        let mut store = ParameterStore::new();
        store
            .register("NAV_ACC_RAD", ParamValue::Float(2.0), ParamFlags::empty())
            .unwrap();
        store.set("NAV_ACC_RAD", ParamValue::Float(3.0)).unwrap();
        assert_eq!(store.get_f32("NAV_ACC_RAD"), Some(3.0));
        assert!(store.take_updated());
        assert!(!store.take_updated());
    }

    #[test]
    fn test_parameter_store_set_unknown() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.set("UNKNOWN", ParamValue::Int(1)),
            Err(ParameterError::InvalidConfig)
        );
        assert!(!store.is_updated());
    }

    #[test]
    fn test_parameter_store_name_too_long() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.register(
                "THIS_NAME_IS_WAY_TOO_LONG",
                ParamValue::Int(1),
                ParamFlags::empty()
            ),
            Err(ParameterError::InvalidConfig)
        );
        assert!(store.get("THIS_NAME_IS_WAY_TOO_LONG").is_none());
    }

    #[test]
    fn test_parameter_store_register_idempotent() {
        let mut store = ParameterStore::new();
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        store.set("TEST", ParamValue::Int(100)).unwrap();
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("TEST"), Some(&ParamValue::Int(100)));
    }

    #[test]
    fn test_parameter_store_full() {
        let mut store = ParameterStore::new();
        let mut name = String::<PARAM_NAME_LEN>::new();
        for i in 0..MAX_PARAMS {
            name.clear();
            core::fmt::write(&mut name, format_args!("P{}", i)).unwrap();
            store
                .register(&name, ParamValue::Int(0), ParamFlags::empty())
                .unwrap();
        }
        assert_eq!(
            store.register("ONE_MORE", ParamValue::Int(0), ParamFlags::empty()),
            Err(ParameterError::StoreFull)
        );
    }

    #[test]
    fn test_parameter_read_only() {
        let mut store = ParameterStore::new();
        store
            .register("READONLY", ParamValue::Int(42), ParamFlags::READ_ONLY)
            .unwrap();
        assert_eq!(
            store.set("READONLY", ParamValue::Int(100)),
            Err(ParameterError::ReadOnly)
        );
    }
}
