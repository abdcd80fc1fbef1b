//! Physical attributes of every particle
//!
//! The table is built once from literal data and never mutated afterwards.
//! Records keep the order leptons, antileptons, baryons, antibaryons.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::constants::*;
use crate::error::{ParticleError, Result};
use crate::particle::{LeptonFlavor, Particle, ParticleClass};
use crate::units::{Mass, Time};

/// Attributes of a single particle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ParticleRecord {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub particle: Particle,
    pub symbol: &'static str,
    pub name: &'static str,
    pub spin: f64,
    pub class: ParticleClass,
    pub lepton_number: i8,
    pub baryon_number: i8,
    /// Only set for charged leptons and antileptons
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub generation: Option<u8>,
    /// Absent for neutrinos
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mass: Option<Mass>,
    /// Infinite for stable particles
    pub half_life: Time,
}

impl ParticleRecord {
    fn new(particle: Particle) -> Self {
        let class = particle.class();
        Self {
            particle,
            symbol: particle.symbol(),
            name: particle.name(),
            // The table holds no bosons
            spin: FERMION_SPIN,
            class,
            lepton_number: class.lepton_number(),
            baryon_number: class.baryon_number(),
            generation: None,
            mass: None,
            half_life: Time::INFINITE,
        }
    }

    pub fn is_stable(&self) -> bool {
        !self.half_life.is_finite()
    }
}

/// Immutable table of particle records keyed by symbol
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParticleTable {
    records: Vec<ParticleRecord>,
}

impl ParticleTable {
    pub fn get(&self, symbol: &str) -> Option<&ParticleRecord> {
        self.records.iter().find(|r| r.symbol == symbol)
    }

    pub fn lookup(&self, symbol: &str) -> Result<&ParticleRecord> {
        self.get(symbol)
            .ok_or_else(|| ParticleError::UnknownSymbol(symbol.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticleRecord> {
        self.records.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.iter().map(|r| r.symbol)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParticleTable {
    type Item = &'a ParticleRecord;
    type IntoIter = std::slice::Iter<'a, ParticleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Build the particle table
///
/// Every record gets name, spin, class and quantum numbers. Charged
/// leptons additionally get a generation and mass, muons and taus a
/// finite half-life. Nucleons get their masses, neutrons a half-life.
/// Anything left without a half-life is stable.
pub fn build_particle_table() -> ParticleTable {
    let records = Particle::ALL
        .into_iter()
        .map(|particle| {
            let mut record = ParticleRecord::new(particle);

            if record.class.is_lepton_like() && !particle.is_neutrino() {
                if let Some(flavor) = particle.flavor() {
                    record.generation = Some(flavor.generation());
                    match flavor {
                        LeptonFlavor::Electron => {
                            record.mass = Some(ELECTRON_MASS);
                        }
                        LeptonFlavor::Muon => {
                            record.mass = Some(MUON_MASS);
                            record.half_life = MUON_HALF_LIFE;
                        }
                        LeptonFlavor::Tau => {
                            record.mass = Some(TAU_MASS);
                            record.half_life = TAU_HALF_LIFE;
                        }
                    }
                }
            }

            match particle {
                Particle::Proton | Particle::Antiproton => {
                    record.mass = Some(PROTON_MASS);
                }
                Particle::Neutron | Particle::Antineutron => {
                    record.mass = Some(NEUTRON_MASS);
                    record.half_life = NEUTRON_HALF_LIFE;
                }
                _ => {}
            }

            record
        })
        .collect();

    ParticleTable { records }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-9
    }

    #[test]
    fn test_every_symbol_has_one_record() {
        let table = build_particle_table();
        assert_eq!(table.len(), 16);
        for p in Particle::ALL {
            let record = table.get(p.symbol()).unwrap();
            assert_eq!(record.name, p.name());
            assert_eq!(record.spin, 0.5);
            assert_eq!(record.class, p.class());
            assert_eq!(record.particle, p);
        }
    }

    #[test]
    fn test_finite_half_lives() {
        let table = build_particle_table();
        let finite: Vec<_> = table
            .iter()
            .filter(|r| r.half_life.is_finite())
            .map(|r| r.symbol)
            .collect();
        assert_eq!(finite, ["mu-", "tau-", "mu+", "tau+", "n", "antineutron"]);
        assert_eq!(table.iter().filter(|r| r.is_stable()).count(), 10);
    }

    #[test]
    fn test_masses() {
        let table = build_particle_table();
        let massive: Vec<_> = table
            .iter()
            .filter(|r| r.mass.is_some())
            .map(|r| r.symbol)
            .collect();
        assert_eq!(
            massive,
            ["e-", "mu-", "tau-", "e+", "mu+", "tau+", "p", "n", "p-", "antineutron"]
        );
        assert_eq!(table.get("e+").unwrap().mass, Some(ELECTRON_MASS));
        assert_eq!(table.get("p-").unwrap().mass, Some(PROTON_MASS));
        assert_eq!(table.get("antineutron").unwrap().mass, Some(NEUTRON_MASS));
        assert!(table.get("nu_tau").unwrap().mass.is_none());
    }

    #[test]
    fn test_generation_only_for_charged_leptons() {
        let table = build_particle_table();
        for record in &table {
            let expected = match record.symbol {
                "e-" | "e+" => Some(1),
                "mu-" | "mu+" => Some(2),
                "tau-" | "tau+" => Some(3),
                _ => None,
            };
            assert_eq!(record.generation, expected, "{}", record.symbol);
        }
    }

    #[test]
    fn test_quantum_numbers() {
        let table = build_particle_table();
        let e = table.get("e-").unwrap();
        assert_eq!((e.lepton_number, e.baryon_number), (1, 0));
        let p = table.get("p").unwrap();
        assert_eq!((p.lepton_number, p.baryon_number), (0, 1));
        let nubar = table.get("anti_nu_mu").unwrap();
        assert_eq!((nubar.lepton_number, nubar.baryon_number), (-1, 0));
        let nbar = table.get("antineutron").unwrap();
        assert_eq!((nbar.lepton_number, nbar.baryon_number), (0, -1));

        for record in &table {
            assert!((record.lepton_number == 0) != (record.baryon_number == 0));
        }
    }

    #[test]
    fn test_tau_record() {
        let table = build_particle_table();
        let tau = table.lookup("tau-").unwrap();
        assert_eq!(tau.name, "tau");
        assert!(approx_eq(tau.mass.unwrap().value(), 3.16747e-27));
        assert!(approx_eq(tau.half_life.value(), 2.906e-13));
        assert_eq!(tau.generation, Some(3));
        assert_eq!(tau.lepton_number, 1);
    }

    #[test]
    fn test_lookup_unknown_symbol() {
        let table = build_particle_table();
        assert_eq!(
            table.lookup("D").unwrap_err(),
            ParticleError::UnknownSymbol("D".to_string())
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_particle_table(), build_particle_table());
    }
}
