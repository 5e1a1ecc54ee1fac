use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitmentError {
    #[error(
        "the polynomial has {0} coefficients but the SRS only supports {1}"
    )]
    PolynomialTooLarge(usize, usize),

    #[error("the SRS needs at least {0} powers, got {1}")]
    SrsTooSmall(usize, usize),

    #[error("randomness generation failed: {0}")]
    Randomness(String),
}
