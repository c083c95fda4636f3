#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot use --length together with --min-length or --max-length")]
    InvalidArgs,

    #[error("password generation failed: {0}")]
    Generate(#[from] passmint::Error),
}
