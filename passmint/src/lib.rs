//! Composition-rule password generator backed by the operating system's
//! CSPRNG.
//!
//! This library builds random passwords that satisfy a composition policy:
//! every configured character group contributes at least one character
//! (earlier groups win when the length runs out), and the remaining
//! positions are filled from the pooled groups. An optional extra group can
//! force the first character without ever appearing in the fill pool.
//!
//! # Slot-key construction
//!
//! Characters are never appended and then shuffled. Each chosen character is
//! stored under a freshly drawn 32-bit slot key (redrawn on collision), and
//! the password is read out in ascending key order, so the sort is the
//! shuffle. A forced first character claims the reserved key `0`, which no
//! drawn key survives the collision check holding, so it always lands at
//! position 0 while the rest of the password stays uniformly ordered.
//!
//! # Security
//!
//! All randomness comes from the operating system's CSPRNG via
//! [`OsRandomSource`]. There is no seeding mode and no userspace fallback:
//! if the entropy source fails, generation fails with [`Error::Entropy`].
//! Deterministic sources exist only behind the `testing` feature and never
//! reach a production build. Generated passwords are returned to the caller
//! and never logged or retained.
//!
//! # Usage
//!
//! ```
//! use passmint::{OsRandomSource, PasswordBuilder, PasswordConfig};
//!
//! let mut builder = PasswordBuilder::new(OsRandomSource);
//! let password = builder.generate(&PasswordConfig::default())?;
//! assert!((8..=12).contains(&password.chars().count()));
//! # Ok::<(), passmint::Error>(())
//! ```
//!
//! The default policy is a helpdesk-friendly one: 8 to 12 characters drawn
//! from four groups that exclude easily confused glyphs (no `l`, `o`, `D`,
//! `I`, `O`, `0`, or `1`).

pub mod builder;
pub mod config;
pub mod error;
pub mod source;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{PasswordBuilder, generate_passwords};
pub use config::{
    CharGroup, DEFAULT_DIGITS, DEFAULT_LOWERCASE, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
    DEFAULT_SYMBOLS, DEFAULT_UPPERCASE, LengthSpec, PasswordConfig, default_groups,
};
pub use error::Error;
pub use source::{OsRandomSource, RandomSource};
