//! Alternate spellings for particles, isotopes and ions
//!
//! Besides the particles themselves, the alias table carries entries for a
//! few hydrogen and helium species that are commonly referred to by name:
//! deuterium, tritium, their singly charged ions, and the alpha particle.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{ParticleError, Result};
use crate::table::ParticleTable;

/// Symbols with aliases but no record in the particle table
pub const ISOTOPE_SYMBOLS: [&str; 5] = ["D", "D 1+", "T", "T 1+", "He-4 2+"];

/// Alias lists for one symbol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Aliases {
    /// Must match exactly
    pub case_sensitive: Vec<String>,
    /// Match regardless of letter case
    pub case_insensitive: Vec<String>,
}

impl Aliases {
    fn sensitive<I, S>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.case_sensitive.extend(aliases.into_iter().map(Into::into));
    }

    fn insensitive<I, S>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.case_insensitive
            .extend(aliases.into_iter().map(Into::into));
    }

    /// Total number of aliases in both lists
    pub fn len(&self) -> usize {
        self.case_sensitive.len() + self.case_insensitive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.case_sensitive.is_empty() && self.case_insensitive.is_empty()
    }
}

/// Insertion-ordered alias lists keyed by symbol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(String, Aliases)>,
}

impl AliasTable {
    pub fn get(&self, symbol: &str) -> Option<&Aliases> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, aliases)| aliases)
    }

    pub fn lookup(&self, symbol: &str) -> Result<&Aliases> {
        self.get(symbol)
            .ok_or_else(|| ParticleError::UnknownSymbol(symbol.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Aliases)> {
        self.entries.iter().map(|(s, a)| (s.as_str(), a))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start a fresh, empty entry for `symbol` and return it
    ///
    /// Re-inserting a symbol clears its aliases but keeps its position.
    fn insert(&mut self, symbol: &str) -> &mut Aliases {
        let index = match self.entries.iter().position(|(s, _)| s == symbol) {
            Some(index) => {
                self.entries[index].1 = Aliases::default();
                index
            }
            None => {
                self.entries.push((symbol.to_string(), Aliases::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Entry for a symbol inserted earlier in the build
    fn entry(&mut self, symbol: &str) -> &mut Aliases {
        match self.entries.iter().position(|(s, _)| s == symbol) {
            Some(i) => &mut self.entries[i].1,
            None => panic!("no alias entry for {symbol:?}"),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for AliasTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (symbol, aliases) in &self.entries {
            map.serialize_entry(symbol, aliases)?;
        }
        map.end()
    }
}

/// Aliases derivable from a particle's name alone
fn name_aliases(name: &str) -> Vec<String> {
    let mut aliases = vec![name.to_string()];
    if name.contains(' ') {
        aliases.push(name.replace(' ', "_"));
    }
    if name.contains("anti") {
        aliases.push(name.replacen("anti", "anti-", 1));
    }
    aliases
}

/// Build the alias table for every particle plus the hydrogen and helium
/// species in [`ISOTOPE_SYMBOLS`]
pub fn build_alias_table(particles: &ParticleTable) -> AliasTable {
    let mut table = AliasTable::default();

    for record in particles {
        table.insert(record.symbol).insensitive(name_aliases(record.name));
    }

    table.entry("e-").sensitive(["beta-"]);

    let positron = table.entry("e+");
    positron.sensitive(["beta+"]);
    positron.insensitive(["antielectron", "anti-electron"]);

    for symbol in ISOTOPE_SYMBOLS {
        table.insert(symbol);
    }

    for (symbol, mass_number) in [("D", 2), ("T", 3)] {
        let isotope = table.entry(symbol);
        isotope.sensitive([format!("H-{mass_number}")]);
        isotope.insensitive([format!("hydrogen-{mass_number}")]);

        let ion = table.entry(&format!("{symbol} 1+"));
        ion.sensitive([
            format!("{symbol}+"),
            format!("{symbol} +1"),
            format!("H-{mass_number}+"),
            format!("H-{mass_number} 1+"),
            format!("H-{mass_number} +1"),
        ]);
        ion.insensitive([
            format!("hydrogen-{mass_number}+"),
            format!("hydrogen-{mass_number} 1+"),
            format!("hydrogen-{mass_number} +1"),
        ]);
    }

    table.entry("D").insensitive(["deuterium"]);
    table.entry("T").insensitive(["tritium"]);

    table
        .entry("D 1+")
        .insensitive(["deuteron", "deuterium+", "deuterium 1+", "deuterium +1"]);
    table
        .entry("T 1+")
        .insensitive(["triton", "tritium+", "tritium 1+", "tritium +1"]);

    let alpha = table.entry("He-4 2+");
    alpha.insensitive(["alpha", "helium-4++", "helium-4 2+", "helium-4 +2"]);
    alpha.sensitive(["He-4 2+", "He-4++", "He-4 +2"]);

    let neutron = table.entry("n");
    neutron.sensitive(["n-1"]);
    neutron.insensitive(["n0"]);

    table
}
