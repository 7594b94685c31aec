use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::angle::{Axis, format_prompt};

/// One selected viewpoint from a `selected_points` document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleRecord {
    pub azimuth: i64,
    pub elevation: i64,
    pub distance: i64,
}

impl Default for AngleRecord {
    fn default() -> Self {
        Self {
            azimuth: Axis::Azimuth.default_code(),
            elevation: Axis::Elevation.default_code(),
            distance: Axis::Distance.default_code(),
        }
    }
}

impl AngleRecord {
    pub fn new(azimuth: i64, elevation: i64, distance: i64) -> Self {
        Self { azimuth, elevation, distance }
    }

    /// Build a record from one element of a `selected_points` array.
    ///
    /// Never fails: missing keys, non-integer values and non-object elements
    /// all fall back to the per-axis default code.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            log::debug!("selected point is not an object, using defaults: {value}");
            return Self::default();
        };

        let code = |axis: Axis| match object.get(axis.key()) {
            None => axis.default_code(),
            Some(raw) => integral_code(raw).unwrap_or_else(|| {
                log::debug!("non-integer {axis} value {raw}, using default");
                axis.default_code()
            }),
        };

        Self {
            azimuth: code(Axis::Azimuth),
            elevation: code(Axis::Elevation),
            distance: code(Axis::Distance),
        }
    }

    pub fn code(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Azimuth => self.azimuth,
            Axis::Elevation => self.elevation,
            Axis::Distance => self.distance,
        }
    }

    /// The `<sks> ...` prompt for this viewpoint.
    pub fn prompt(&self) -> String {
        format_prompt(self.azimuth, self.elevation, self.distance)
    }
}

/// Integers pass through; floats with no fractional part compare equal to
/// the integer code (`90.0` selects `90`). Booleans are not codes.
fn integral_code(value: &Value) -> Option<i64> {
    if let Some(code) = value.as_i64() {
        return Some(code);
    }
    let float = value.as_f64()?;
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}
