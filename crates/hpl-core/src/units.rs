//! Energy units and validity ranges.
//!
//! The base energy unit is the MeV, matching the convention of the host
//! simulation toolkit. All energy-valued fields in this workspace carry
//! values expressed in these units.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HplError};

/// Electronvolt.
pub const EV: f64 = 1.0e-6;
/// Kiloelectronvolt.
pub const KEV: f64 = 1.0e-3;
/// Megaelectronvolt (base unit).
pub const MEV: f64 = 1.0;
/// Gigaelectronvolt.
pub const GEV: f64 = 1.0e3;
/// Teraelectronvolt.
pub const TEV: f64 = 1.0e6;

/// Toolkit-wide ceiling used when a model places no upper bound of its own.
pub const DEFAULT_MAX_ENERGY: f64 = 100.0 * TEV;

/// Closed validity interval `[min, max]` for a model or generator, in MeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyRange {
    /// Lower validity bound.
    pub min: f64,
    /// Upper validity bound.
    pub max: f64,
}

impl EnergyRange {
    /// Creates a validated range. `min` must be finite and non-negative,
    /// `max` finite and strictly greater than `min`.
    pub fn new(min: f64, max: f64) -> Result<Self, HplError> {
        if !min.is_finite() || min < 0.0 {
            return Err(HplError::Wiring(
                ErrorInfo::new("energy-range-min", "minimum energy must be finite and >= 0")
                    .with_context("min", min.to_string()),
            ));
        }
        if !max.is_finite() || max <= min {
            return Err(HplError::Wiring(
                ErrorInfo::new("energy-range-max", "maximum energy must be finite and > min")
                    .with_context("min", min.to_string())
                    .with_context("max", max.to_string()),
            ));
        }
        Ok(Self { min, max })
    }

    /// Range from zero up to `max`.
    pub fn up_to(max: f64) -> Result<Self, HplError> {
        Self::new(0.0, max)
    }

    /// Whether `energy` lies inside the closed interval.
    pub fn contains(&self, energy: f64) -> bool {
        energy >= self.min && energy <= self.max
    }

    /// Interval width.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(EnergyRange::new(5.0 * GEV, 1.0 * GEV).is_err());
        assert!(EnergyRange::new(f64::NAN, 1.0).is_err());
        assert!(EnergyRange::new(-1.0, 1.0).is_err());
    }

    #[test]
    fn range_containment_is_closed() {
        let range = EnergyRange::new(100.0 * MEV, 100.0 * TEV).unwrap();
        assert!(range.contains(100.0 * MEV));
        assert!(range.contains(100.0 * TEV));
        assert!(!range.contains(99.9 * MEV));
    }
}
