use thiserror::Error;

pub type PvtResult<T> = Result<T, PvtError>;

#[derive(Error, Debug)]
pub enum PvtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
