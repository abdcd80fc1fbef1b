//! Physical constants for the particle table
//!
//! Rest masses are CODATA 2018 values in SI units. The muon and tau
//! figures are the literal values the table has always carried.

use crate::units::{Mass, Time};

/// Spin of every fermion in the table (in units of ħ)
pub const FERMION_SPIN: f64 = 0.5;

/// Electron rest mass
pub const ELECTRON_MASS: Mass = Mass::kg(9.109_383_701_5e-31);

/// Proton rest mass
pub const PROTON_MASS: Mass = Mass::kg(1.672_621_923_69e-27);

/// Neutron rest mass
pub const NEUTRON_MASS: Mass = Mass::kg(1.674_927_498_04e-27);

/// Muon rest mass
pub const MUON_MASS: Mass = Mass::kg(1.883_531_594e-28);

/// Tau rest mass
pub const TAU_MASS: Mass = Mass::kg(3.167_47e-27);

pub const MUON_HALF_LIFE: Time = Time::seconds(2.196_981_1e-6);

pub const TAU_HALF_LIFE: Time = Time::seconds(2.906e-13);

/// Free neutron half-life
pub const NEUTRON_HALF_LIFE: Time = Time::seconds(881.5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_hierarchy() {
        // e < mu < p < n < tau
        assert!(ELECTRON_MASS < MUON_MASS);
        assert!(MUON_MASS < PROTON_MASS);
        assert!(PROTON_MASS < NEUTRON_MASS);
        assert!(NEUTRON_MASS < TAU_MASS);
    }

    #[test]
    fn test_half_lives_are_finite() {
        for t in [MUON_HALF_LIFE, TAU_HALF_LIFE, NEUTRON_HALF_LIFE] {
            assert!(t.is_finite());
            assert!(t.value() > 0.0);
        }
    }
}
