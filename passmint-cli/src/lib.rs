//! Flag translation for the passmint command line.
//!
//! The binary in `main.rs` stays thin: everything that turns parsed flags
//! into a [`PasswordConfig`](passmint::PasswordConfig) lives here, where it
//! can be tested without spawning a process.

pub mod error;

pub use error::Error;

use passmint::{CharGroup, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, LengthSpec, default_groups};

/// Resolves the three length flags into one [`LengthSpec`].
///
/// `--length` selects fixed mode and cannot be combined with either range
/// flag. Range bounds left unset fall back to the built-in policy.
pub fn length_spec(
    length: Option<usize>,
    min_length: Option<usize>,
    max_length: Option<usize>,
) -> Result<LengthSpec, Error> {
    match (length, min_length, max_length) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(Error::InvalidArgs),
        (Some(n), None, None) => Ok(LengthSpec::Fixed(n)),
        (None, min, max) => Ok(LengthSpec::Range {
            min: min.unwrap_or(DEFAULT_MIN_LENGTH),
            max: max.unwrap_or(DEFAULT_MAX_LENGTH),
        }),
    }
}

/// Builds the composition groups from repeated `--group` flags, falling
/// back to the built-in policy when none were given.
pub fn composition_groups(flags: &[String]) -> Result<Vec<CharGroup>, Error> {
    if flags.is_empty() {
        return Ok(default_groups());
    }
    flags.iter().map(|flag| CharGroup::new(flag).map_err(Error::from)).collect()
}
