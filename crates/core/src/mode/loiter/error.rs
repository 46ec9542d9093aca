//! Loiter geometry errors

/// Loiter command rejected because of vehicle/subject geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Vehicle too close to the subject horizontally for a bearing (m)
    DegenerateRadius(f32),
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GeometryError::DegenerateRadius(r) => {
                write!(f, "Radius to subject too small: {} m", r)
            }
        }
    }
}
