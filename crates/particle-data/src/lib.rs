//! # Particle Data
//!
//! Static tables of leptons, baryons and their antiparticles: names, spin,
//! quantum numbers, masses and half-lives, plus the alternate spellings
//! used for particles, hydrogen isotopes and light ions.

pub mod aliases;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod particle;
pub mod table;
pub mod units;

pub use aliases::*;
pub use catalog::*;
pub use constants::*;
pub use error::ParticleError;
pub use particle::*;
pub use table::*;
pub use units::*;
