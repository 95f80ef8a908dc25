use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InfrattError {
    #[error("No such phase: {0}")]
    NoPhase(String),

    #[error("Celerity table is empty")]
    EmptyTable,

    #[error("Celerity table distances are not sorted in ascending order")]
    UnsortedDistances,

    #[error("Celerity table size mismatch: {distances} distances vs {celerities} celerities")]
    LengthMismatch { distances: usize, celerities: usize },

    #[error("Celerity must be strictly positive, got {0}")]
    NonPositiveCelerity(f64),
}
