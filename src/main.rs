//! Particle Tables
//!
//! Builds the particle and alias tables and prints them.

mod options;

use clap::Parser;
use options::{DumpOptions, OutputFormat};
use particle_data::{AliasTable, Aliases, ParticleCatalog, ParticleRecord, ParticleTable};
use serde::Serialize;

#[derive(Serialize)]
struct JsonDump<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    particles: Option<&'a ParticleTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aliases: Option<&'a AliasTable>,
}

fn format_record(record: &ParticleRecord) -> String {
    let mut line = format!(
        "{:<12} {:<22} {:<10} spin={} L={:+} B={:+}",
        record.symbol,
        record.name,
        record.class.as_str(),
        record.spin,
        record.lepton_number,
        record.baryon_number,
    );
    if let Some(generation) = record.generation {
        line.push_str(&format!(" gen={generation}"));
    }
    if let Some(mass) = record.mass {
        line.push_str(&format!(" mass={mass}"));
    }
    line.push_str(&format!(" half-life={}", record.half_life));
    line
}

fn format_aliases(symbol: &str, aliases: &Aliases) -> String {
    format!(
        "{:<12} case sensitive: [{}]  case insensitive: [{}]",
        symbol,
        aliases.case_sensitive.join(", "),
        aliases.case_insensitive.join(", "),
    )
}

fn print_text(catalog: &ParticleCatalog, options: &DumpOptions) {
    if options.show_particles() {
        for record in catalog.particles() {
            println!("{}", format_record(record));
        }
    }
    if options.show_particles() && options.show_aliases() {
        println!();
    }
    if options.show_aliases() {
        for (symbol, aliases) in catalog.aliases().iter() {
            println!("{}", format_aliases(symbol, aliases));
        }
    }
}

fn print_json(catalog: &ParticleCatalog, options: &DumpOptions) -> serde_json::Result<()> {
    let dump = JsonDump {
        particles: options.show_particles().then(|| catalog.particles()),
        aliases: options.show_aliases().then(|| catalog.aliases()),
    };
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}

fn main() {
    // Initialize logger (RUST_LOG=debug for the per-symbol alias dump)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = DumpOptions::parse();

    let catalog = ParticleCatalog::new();
    log::info!(
        "✓ Built {} particle records and {} alias entries",
        catalog.particles().len(),
        catalog.aliases().len()
    );

    for (symbol, aliases) in catalog.aliases().iter() {
        log::debug!("{symbol}: {aliases:?}");
    }

    match options.format() {
        OutputFormat::Text => print_text(&catalog, &options),
        OutputFormat::Json => {
            if let Err(err) = print_json(&catalog, &options) {
                log::error!("Failed to serialize tables: {err}");
                std::process::exit(1);
            }
        }
    }
}
