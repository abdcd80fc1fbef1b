//! Particle and alias tables bundled together

use crate::aliases::{build_alias_table, AliasTable};
use crate::table::{build_particle_table, ParticleTable};

/// Both particle tables, built once and read-only afterwards
///
/// Construct one at startup and hand out references; the catalog is
/// `Send + Sync` so it can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleCatalog {
    particles: ParticleTable,
    aliases: AliasTable,
}

impl ParticleCatalog {
    pub fn new() -> Self {
        let particles = build_particle_table();
        let aliases = build_alias_table(&particles);

        log::debug!(
            "Built particle catalog: {} particles, {} alias entries",
            particles.len(),
            aliases.len()
        );

        Self { particles, aliases }
    }

    pub fn particles(&self) -> &ParticleTable {
        &self.particles
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }
}

impl Default for ParticleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_catalog_contents() {
        let catalog = ParticleCatalog::new();
        assert_eq!(catalog.particles().len(), 16);
        assert_eq!(catalog.aliases().len(), 21);
        for symbol in catalog.particles().symbols() {
            assert!(catalog.aliases().get(symbol).is_some(), "{symbol}");
        }
    }

    #[test]
    fn test_catalog_is_reproducible() {
        assert_eq!(ParticleCatalog::new(), ParticleCatalog::default());
    }

    #[test]
    fn test_shared_read_access() {
        let catalog = Arc::new(ParticleCatalog::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let catalog = Arc::clone(&catalog);
                thread::spawn(move || {
                    let n = catalog.particles().lookup("n").map(|r| r.half_life);
                    let alpha = catalog.aliases().get("He-4 2+").map(|a| a.len());
                    (n.ok(), alpha)
                })
            })
            .collect();

        for handle in handles {
            let (n, alpha) = handle.join().unwrap();
            assert_eq!(n.map(|t| t.value()), Some(881.5));
            assert_eq!(alpha, Some(7));
        }
    }
}
