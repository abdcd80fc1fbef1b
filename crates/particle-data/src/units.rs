//! SI mass and time quantities
//!
//! Thin wrappers over `f64` so a mass can never be passed where a
//! half-life is expected.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mass(f64);

impl Mass {
    /// Create a mass from a value in kilograms
    pub const fn kg(value: f64) -> Self {
        Self(value)
    }

    /// Magnitude in kilograms
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e} kg", self.0)
    }
}

/// A duration in seconds, possibly infinite
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Time(f64);

impl Time {
    /// Half-life of a stable particle
    pub const INFINITE: Time = Time(f64::INFINITY);

    /// Create a duration from a value in seconds
    pub const fn seconds(value: f64) -> Self {
        Self(value)
    }

    /// Magnitude in seconds
    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() {
            write!(f, "{:e} s", self.0)
        } else {
            write!(f, "inf s")
        }
    }
}
