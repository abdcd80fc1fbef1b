//! Particle identities and their classification

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Lepton family
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum LeptonFlavor {
    Electron = 1,
    Muon = 2,
    Tau = 3,
}

impl LeptonFlavor {
    /// Generation number: 1 for electron, 2 for muon, 3 for tau
    pub fn generation(self) -> u8 {
        self as u8
    }
}

/// Broad category of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParticleClass {
    Lepton,
    Antilepton,
    Baryon,
    Antibaryon,
}

impl ParticleClass {
    pub fn lepton_number(self) -> i8 {
        match self {
            ParticleClass::Lepton => 1,
            ParticleClass::Antilepton => -1,
            ParticleClass::Baryon | ParticleClass::Antibaryon => 0,
        }
    }

    pub fn baryon_number(self) -> i8 {
        match self {
            ParticleClass::Baryon => 1,
            ParticleClass::Antibaryon => -1,
            ParticleClass::Lepton | ParticleClass::Antilepton => 0,
        }
    }

    pub fn is_lepton_like(self) -> bool {
        matches!(self, ParticleClass::Lepton | ParticleClass::Antilepton)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParticleClass::Lepton => "lepton",
            ParticleClass::Antilepton => "antilepton",
            ParticleClass::Baryon => "baryon",
            ParticleClass::Antibaryon => "antibaryon",
        }
    }
}

impl fmt::Display for ParticleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every particle the table knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Particle {
    // Leptons
    Electron,
    Muon,
    Tau,
    ElectronNeutrino,
    MuonNeutrino,
    TauNeutrino,
    // Antileptons
    Positron,
    Antimuon,
    Antitau,
    ElectronAntineutrino,
    MuonAntineutrino,
    TauAntineutrino,
    // Baryons
    Proton,
    Neutron,
    // Antibaryons
    Antiproton,
    Antineutron,
}

impl Particle {
    /// All particles, leptons first, then antileptons, baryons and antibaryons
    pub const ALL: [Particle; 16] = [
        Particle::Electron,
        Particle::Muon,
        Particle::Tau,
        Particle::ElectronNeutrino,
        Particle::MuonNeutrino,
        Particle::TauNeutrino,
        Particle::Positron,
        Particle::Antimuon,
        Particle::Antitau,
        Particle::ElectronAntineutrino,
        Particle::MuonAntineutrino,
        Particle::TauAntineutrino,
        Particle::Proton,
        Particle::Neutron,
        Particle::Antiproton,
        Particle::Antineutron,
    ];

    /// Canonical symbol used as the table key
    pub fn symbol(self) -> &'static str {
        match self {
            Particle::Electron => "e-",
            Particle::Muon => "mu-",
            Particle::Tau => "tau-",
            Particle::ElectronNeutrino => "nu_e",
            Particle::MuonNeutrino => "nu_mu",
            Particle::TauNeutrino => "nu_tau",
            Particle::Positron => "e+",
            Particle::Antimuon => "mu+",
            Particle::Antitau => "tau+",
            Particle::ElectronAntineutrino => "anti_nu_e",
            Particle::MuonAntineutrino => "anti_nu_mu",
            Particle::TauAntineutrino => "anti_nu_tau",
            Particle::Proton => "p",
            Particle::Neutron => "n",
            Particle::Antiproton => "p-",
            Particle::Antineutron => "antineutron",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Particle::Electron => "electron",
            Particle::Muon => "muon",
            Particle::Tau => "tau",
            Particle::ElectronNeutrino => "electron neutrino",
            Particle::MuonNeutrino => "muon neutrino",
            Particle::TauNeutrino => "tau neutrino",
            Particle::Positron => "positron",
            Particle::Antimuon => "antimuon",
            Particle::Antitau => "antitau",
            Particle::ElectronAntineutrino => "electron antineutrino",
            Particle::MuonAntineutrino => "muon antineutrino",
            Particle::TauAntineutrino => "tau antineutrino",
            Particle::Proton => "proton",
            Particle::Neutron => "neutron",
            Particle::Antiproton => "antiproton",
            Particle::Antineutron => "antineutron",
        }
    }

    pub fn class(self) -> ParticleClass {
        match self {
            Particle::Electron
            | Particle::Muon
            | Particle::Tau
            | Particle::ElectronNeutrino
            | Particle::MuonNeutrino
            | Particle::TauNeutrino => ParticleClass::Lepton,
            Particle::Positron
            | Particle::Antimuon
            | Particle::Antitau
            | Particle::ElectronAntineutrino
            | Particle::MuonAntineutrino
            | Particle::TauAntineutrino => ParticleClass::Antilepton,
            Particle::Proton | Particle::Neutron => ParticleClass::Baryon,
            Particle::Antiproton | Particle::Antineutron => ParticleClass::Antibaryon,
        }
    }

    /// Lepton family, `None` for baryons
    pub fn flavor(self) -> Option<LeptonFlavor> {
        match self {
            Particle::Electron
            | Particle::ElectronNeutrino
            | Particle::Positron
            | Particle::ElectronAntineutrino => Some(LeptonFlavor::Electron),
            Particle::Muon
            | Particle::MuonNeutrino
            | Particle::Antimuon
            | Particle::MuonAntineutrino => Some(LeptonFlavor::Muon),
            Particle::Tau
            | Particle::TauNeutrino
            | Particle::Antitau
            | Particle::TauAntineutrino => Some(LeptonFlavor::Tau),
            Particle::Proton | Particle::Neutron | Particle::Antiproton | Particle::Antineutron => {
                None
            }
        }
    }

    pub fn is_neutrino(self) -> bool {
        matches!(
            self,
            Particle::ElectronNeutrino
                | Particle::MuonNeutrino
                | Particle::TauNeutrino
                | Particle::ElectronAntineutrino
                | Particle::MuonAntineutrino
                | Particle::TauAntineutrino
        )
    }

    pub fn is_antiparticle(self) -> bool {
        matches!(
            self.class(),
            ParticleClass::Antilepton | ParticleClass::Antibaryon
        )
    }

    /// Look up a particle by its exact canonical symbol
    pub fn from_symbol(symbol: &str) -> Option<Particle> {
        Particle::ALL.into_iter().find(|p| p.symbol() == symbol)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
