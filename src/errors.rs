use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoanError {
    #[error("principal must be positive")]
    ZeroPrincipal,

    #[error("term must be at least one month")]
    ZeroTerm,

    #[error("loan amount out of range: {value} not within {min} - {max}")]
    PrincipalOutOfRange {
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("interest rate out of range: {value} not within {min} - {max}")]
    RateOutOfRange {
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("term out of range: {value} not within {min} - {max}")]
    TermOutOfRange {
        value: u32,
        min: u32,
        max: u32,
    },
}

pub type Result<T> = std::result::Result<T, LoanError>;
