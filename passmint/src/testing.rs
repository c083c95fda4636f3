//! Deterministic random sources for tests.
//!
//! Compiled only for this crate's own tests or for downstream crates that
//! enable the `testing` feature from a dev-dependency. Nothing here is ever
//! wired into a production code path: real password generation always runs
//! on [`crate::OsRandomSource`].

use crate::error::Error;
use crate::source::RandomSource;

/// Replays a fixed sequence of draws.
///
/// Exhausting the script surfaces as an entropy fault, which doubles as a
/// guard in tests that pin the exact number of draws an operation performs.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: std::vec::IntoIter<u32>,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self { values: values.into().into_iter() }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_u32(&mut self) -> Result<u32, Error> {
        self.values.next().ok_or_else(|| entropy_fault("scripted random source exhausted"))
    }
}

/// Reports an entropy fault on every draw, for error-propagation tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSource;

impl RandomSource for FailingSource {
    fn next_u32(&mut self) -> Result<u32, Error> {
        Err(entropy_fault("entropy source unavailable"))
    }
}

fn entropy_fault(message: &'static str) -> Error {
    Error::Entropy(rand::Error::new(std::io::Error::other(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_replays_in_order() {
        let mut source = ScriptedSource::new([3, 1, 4, 1, 5]);
        assert_eq!(source.remaining(), 5);
        for expected in [3, 1, 4, 1, 5] {
            assert_eq!(source.next_u32().unwrap(), expected);
        }
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_reports_entropy_fault() {
        let mut source = ScriptedSource::new([]);
        assert!(matches!(source.next_u32(), Err(Error::Entropy(_))));
    }

    #[test]
    fn test_failing_source_always_faults() {
        let mut source = FailingSource;
        assert!(matches!(source.next_u32(), Err(Error::Entropy(_))));
        assert!(matches!(source.next_u32(), Err(Error::Entropy(_))));
    }
}
