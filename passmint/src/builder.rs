use crate::config::{CharGroup, LengthSpec, PasswordConfig};
use crate::error::Error;
use crate::source::{OsRandomSource, RandomSource};

/// Assembles passwords from a [`RandomSource`] according to a
/// [`PasswordConfig`].
///
/// The builder holds nothing but the random source between calls, so one
/// instance can serve any number of configurations. Construction works on a
/// slot-key map: every chosen character is stored under a random 32-bit key,
/// and the password is emitted in ascending key order. That gives a
/// randomized final ordering without a separate shuffle pass, and lets the
/// forced first character claim key `0`, which sorts ahead of every drawn
/// key.
#[derive(Debug)]
pub struct PasswordBuilder<R: RandomSource> {
    source: R,
}

impl Default for PasswordBuilder<OsRandomSource> {
    fn default() -> Self {
        Self::new(OsRandomSource)
    }
}

impl<R: RandomSource> PasswordBuilder<R> {
    /// Creates a builder that draws from `source`.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Consumes the builder, returning the random source.
    pub fn into_source(self) -> R {
        self.source
    }

    /// Generates one password.
    ///
    /// The configuration is validated before the first draw; a rejected
    /// configuration consumes no entropy.
    pub fn generate(&mut self, config: &PasswordConfig) -> Result<String, Error> {
        config.validate()?;
        let pool = fill_pool(&config.groups);
        self.build_one(config, &pool)
    }

    /// Generates `config.count` passwords, each from fresh independent
    /// draws. No partial batch is returned: the first failure aborts the
    /// call.
    pub fn generate_batch(&mut self, config: &PasswordConfig) -> Result<Vec<String>, Error> {
        config.validate()?;
        // The pool depends only on the groups, so one allocation serves the
        // whole batch.
        let pool = fill_pool(&config.groups);
        let mut passwords = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            passwords.push(self.build_one(config, &pool)?);
        }
        Ok(passwords)
    }

    /// Runs the slot-key construction for one password. The configuration
    /// is already validated and `pool` holds its concatenated composition
    /// groups.
    fn build_one(&mut self, config: &PasswordConfig, pool: &[char]) -> Result<String, Error> {
        let length = self.resolve_length(config.length)?;

        let mut slots: Vec<(u32, char)> = Vec::with_capacity(length);

        // Reserved key 0 pins the forced character to position 0: the
        // redraw discipline below keeps every other key distinct from it.
        if let Some(group) = &config.first_char_group {
            let ch = self.pick_char(group.chars())?;
            slots.push((0, ch));
        }

        // One character from every group the length quota still has room
        // for, in the order supplied. Once the quota is filled the
        // remaining groups are skipped silently: earlier groups have
        // priority, and the length contract wins over full coverage.
        for group in &config.groups {
            if slots.len() >= length {
                break;
            }
            let key = self.unique_key(&slots)?;
            let ch = self.pick_char(group.chars())?;
            slots.push((key, ch));
        }

        // Remaining positions draw from the shared pool. The first-char
        // group never contributes to it.
        while slots.len() < length {
            let key = self.unique_key(&slots)?;
            let ch = self.pick_char(pool)?;
            slots.push((key, ch));
        }

        slots.sort_unstable_by_key(|&(key, _)| key);
        Ok(slots.into_iter().map(|(_, ch)| ch).collect())
    }

    /// Resolves the target length, consuming one draw only when the range
    /// is non-degenerate.
    fn resolve_length(&mut self, spec: LengthSpec) -> Result<usize, Error> {
        match spec {
            LengthSpec::Fixed(n) => Ok(n),
            LengthSpec::Range { min, max } if min == max => Ok(min),
            LengthSpec::Range { min, max } => {
                let span = (max - min + 1) as u64;
                let offset = (self.source.next_u32()? as u64 % span) as usize;
                Ok(min + offset)
            }
        }
    }

    /// Draws a slot key no existing entry occupies.
    ///
    /// At 32-bit width a collision is negligible for any realistic password
    /// length, so the loop terminates after one draw in the expected case.
    /// Passwords are short; a linear scan beats a side table.
    fn unique_key(&mut self, slots: &[(u32, char)]) -> Result<u32, Error> {
        loop {
            let key = self.source.next_u32()?;
            if !slots.iter().any(|&(taken, _)| taken == key) {
                return Ok(key);
            }
        }
    }

    /// Picks one symbol from a non-empty slice.
    ///
    /// Reduction is by modulo; with 32 draw bits against alphabets of at
    /// most a few hundred symbols the bias is far below anything
    /// measurable.
    #[inline]
    fn pick_char(&mut self, chars: &[char]) -> Result<char, Error> {
        let index = self.source.next_u32()? as usize % chars.len();
        Ok(chars[index])
    }
}

/// Generates `config.count` passwords from the operating system's CSPRNG.
///
/// The library-level entry point: equivalent to running
/// [`PasswordBuilder::generate_batch`] over an [`OsRandomSource`].
pub fn generate_passwords(config: &PasswordConfig) -> Result<Vec<String>, Error> {
    PasswordBuilder::new(OsRandomSource).generate_batch(config)
}

/// Concatenates the composition groups into the fill pool. Symbols repeated
/// within or across groups keep their multiplicity, so they are
/// proportionally likelier in fill positions.
fn fill_pool(groups: &[CharGroup]) -> Vec<char> {
    groups.iter().flat_map(|group| group.chars().iter().copied()).collect()
}
