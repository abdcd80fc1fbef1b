use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParticleError {
    #[error("Unknown particle symbol: {0}")]
    UnknownSymbol(String),
}

pub type Result<T> = std::result::Result<T, ParticleError>;
