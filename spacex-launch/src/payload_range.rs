use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Payload slider lower end (kg).
pub const SLIDER_MIN: u32 = 0;
/// Payload slider upper end (kg).
pub const SLIDER_MAX: u32 = 10_000;
/// Payload slider step (kg).
pub const SLIDER_STEP: u32 = 1_000;
/// Labelled slider positions.
pub const SLIDER_MARKS: [u32; 3] = [0, 5_000, 10_000];

/// Inclusive payload mass interval in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    /// Build a range; bounds given in the wrong order are swapped.
    pub fn new(low: f64, high: f64) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self { low: high, high: low }
        }
    }

    /// Build a range from user-supplied bounds, rejecting NaN and infinities.
    pub fn try_new(low: f64, high: f64) -> anyhow::Result<Self> {
        check_bound("low", low)?;
        check_bound("high", high)?;
        Ok(Self::new(low, high))
    }

    /// The full slider span.
    pub fn slider_span() -> Self {
        Self::new(SLIDER_MIN as f64, SLIDER_MAX as f64)
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

/// A payload bound must be a finite number of kilograms.
pub fn check_bound(name: &str, value: f64) -> anyhow::Result<f64> {
    if !value.is_finite() {
        bail!("payload bound {} must be a finite number, got {}", name, value);
    }
    Ok(value)
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self::slider_span()
    }
}

#[cfg(test)]
mod tests {
    use super::{check_bound, PayloadRange};

    #[test]
    fn test_contains_is_inclusive() {
        let range = PayloadRange::new(1000.0, 5000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(range.contains(2500.5));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn test_new_swaps_reversed_bounds() {
        let range = PayloadRange::new(8000.0, 2000.0);
        assert_eq!(range.low, 2000.0);
        assert_eq!(range.high, 8000.0);
    }

    #[test]
    fn test_degenerate_range() {
        let range = PayloadRange::new(500.0, 500.0);
        assert!(range.contains(500.0));
        assert!(!range.contains(500.5));
    }

    #[test]
    fn test_try_new_rejects_non_finite_bounds() {
        let err = PayloadRange::try_new(f64::NAN, 9600.0).unwrap_err();
        assert!(err.to_string().contains("low"));
        let err = PayloadRange::try_new(0.0, f64::INFINITY).unwrap_err();
        assert!(err.to_string().contains("high"));
        assert!(check_bound("low", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_try_new_swaps_like_new() {
        let range = PayloadRange::try_new(9600.0, 0.0).unwrap();
        assert_eq!(range, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_slider_span() {
        let range = PayloadRange::default();
        assert_eq!(range.low, 0.0);
        assert_eq!(range.high, 10000.0);
    }
}
