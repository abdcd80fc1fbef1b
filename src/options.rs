//! Command-line options for the table dump

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per entry, human readable
    Text,
    Json,
}

#[derive(Parser, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[command(name = "particle-tables")]
#[command(version, about = "Print the particle and alias tables")]
pub struct DumpOptions {
    /// Emit both tables as JSON
    #[arg(long)]
    pub json: bool,

    /// Only print the particle table
    #[arg(long, conflicts_with = "aliases")]
    pub particles: bool,

    /// Only print the alias table
    #[arg(long)]
    pub aliases: bool,
}

impl DumpOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn show_particles(&self) -> bool {
        !self.aliases
    }

    pub fn show_aliases(&self) -> bool {
        !self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let options = DumpOptions::try_parse_from(["particle-tables"]).unwrap();
        assert_eq!(options, DumpOptions::default());
        assert_eq!(options.format(), OutputFormat::Text);
        assert!(options.show_particles() && options.show_aliases());
    }

    #[test]
    fn test_json_aliases_only() {
        let options =
            DumpOptions::try_parse_from(["particle-tables", "--aliases", "--json"]).unwrap();
        assert_eq!(options.format(), OutputFormat::Json);
        assert!(!options.show_particles());
        assert!(options.show_aliases());
    }

    #[test]
    fn test_particles_only() {
        let options = DumpOptions::try_parse_from(["particle-tables", "--particles"]).unwrap();
        assert!(options.show_particles());
        assert!(!options.show_aliases());
    }

    #[test]
    fn test_rejects_bad_flags() {
        let err = DumpOptions::try_parse_from(["particle-tables", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = DumpOptions::try_parse_from(["particle-tables", "--particles", "--aliases"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_help_flag() {
        let err = DumpOptions::try_parse_from(["particle-tables", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("--particles"));
    }
}
