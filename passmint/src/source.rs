use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::Error;

/// Supplier of uniform random 32-bit values for password construction.
///
/// The builder draws everything it needs (slot keys, character indices,
/// range-mode lengths) through this seam, so tests can substitute a
/// deterministic source without touching the algorithm. Production code
/// always uses [`OsRandomSource`].
pub trait RandomSource {
    /// Returns a uniformly distributed value across the full 32-bit range.
    ///
    /// An entropy-source fault is an environment failure, not a recoverable
    /// condition: implementations must propagate it instead of retrying or
    /// falling back to a weaker generator.
    fn next_u32(&mut self) -> Result<u32, Error>;
}

/// The operating system's CSPRNG.
///
/// A zero-sized handle to [`rand::rngs::OsRng`]; it is `Copy`, so concurrent
/// callers can each own an instance. Every draw requests four fresh bytes
/// from the OS generator; there is no seed and no replay mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn next_u32(&mut self) -> Result<u32, Error> {
        let mut bytes = [0u8; 4];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }
}
