#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("character group must contain at least one symbol")]
    EmptyGroup,

    #[error("at least one composition group is required")]
    NoGroups,

    #[error("password length must be at least 1")]
    ZeroLength,

    #[error("invalid length range: min {min} exceeds max {max}")]
    InvalidRange { min: usize, max: usize },

    #[error("password count must be at least 1")]
    ZeroCount,

    #[error("secure random source unavailable: {0}")]
    Entropy(#[from] rand::Error),
}
