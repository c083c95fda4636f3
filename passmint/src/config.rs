use crate::error::Error;

/// Default lowercase group. `l` and `o` are dropped so generated credentials
/// read back unambiguously next to `1` and `0`.
pub const DEFAULT_LOWERCASE: &str = "abcdefghijkmnpqrstuvwxyz";

/// Default uppercase group, without the confusable `D`, `I` and `O`.
pub const DEFAULT_UPPERCASE: &str = "ABCEFGHJKLMNPQRSTUVWXYZ";

/// Default digit group, without the confusable `0` and `1`.
pub const DEFAULT_DIGITS: &str = "23456789";

/// Default symbol group.
pub const DEFAULT_SYMBOLS: &str = "!\"#%&";

/// Default minimum length for range mode.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Default maximum length for range mode.
pub const DEFAULT_MAX_LENGTH: usize = 12;

/// The built-in policy groups in coverage-priority order: lowercase,
/// uppercase, digits, symbols.
pub fn default_groups() -> Vec<CharGroup> {
    [DEFAULT_LOWERCASE, DEFAULT_UPPERCASE, DEFAULT_DIGITS, DEFAULT_SYMBOLS]
        .into_iter()
        .map(|symbols| CharGroup::new(symbols).expect("built-in group is non-empty"))
        .collect()
}

/// An ordered sequence of candidate symbols, at least one of which must
/// appear in every password (length permitting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGroup(Vec<char>);

impl CharGroup {
    /// Builds a group from the symbols of `s`, in order.
    ///
    /// Symbols are kept verbatim: a symbol listed twice is drawn twice as
    /// often. Returns [`Error::EmptyGroup`] for an empty string.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let chars: Vec<char> = s.as_ref().chars().collect();
        if chars.is_empty() {
            return Err(Error::EmptyGroup);
        }
        Ok(Self(chars))
    }

    /// The group's symbols, in construction order.
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    /// Number of symbols, counting duplicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `c` is one of the group's symbols.
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

/// Requested password length: exact, or drawn per password from an
/// inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthSpec {
    /// Every password gets exactly this many characters.
    Fixed(usize),
    /// Each password's length is drawn uniformly from `min..=max`.
    /// When `min == max` the draw is skipped entirely.
    Range { min: usize, max: usize },
}

/// Everything one batch of passwords is generated from.
///
/// The fields are plain data, so construct it directly or start from
/// [`PasswordConfig::default`], which is the built-in policy: 8 to 12
/// characters, the four [`default_groups`], one password. The configuration
/// is immutable during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Target length for every password in the batch.
    pub length: LengthSpec,
    /// Composition groups in coverage-priority order. Each contributes at
    /// least one character when the target length allows. The fill step
    /// draws from the concatenation of these groups, so a symbol repeated
    /// within a group or shared between groups is proportionally likelier.
    pub groups: Vec<CharGroup>,
    /// When present, position 0 is drawn from this group instead. It never
    /// satisfies composition coverage and never joins the fill pool.
    pub first_char_group: Option<CharGroup>,
    /// Passwords to produce per batch.
    pub count: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: LengthSpec::Range { min: DEFAULT_MIN_LENGTH, max: DEFAULT_MAX_LENGTH },
            groups: default_groups(),
            first_char_group: None,
            count: 1,
        }
    }
}

impl PasswordConfig {
    /// Checks every configuration invariant.
    ///
    /// The builder runs this before its first random draw, so a rejected
    /// configuration consumes no entropy.
    pub fn validate(&self) -> Result<(), Error> {
        match self.length {
            LengthSpec::Fixed(0) => return Err(Error::ZeroLength),
            LengthSpec::Fixed(_) => {}
            LengthSpec::Range { min: 0, .. } => return Err(Error::ZeroLength),
            LengthSpec::Range { min, max } if max < min => {
                return Err(Error::InvalidRange { min, max });
            }
            LengthSpec::Range { .. } => {}
        }
        if self.groups.is_empty() {
            return Err(Error::NoGroups);
        }
        if self.count == 0 {
            return Err(Error::ZeroCount);
        }
        Ok(())
    }
}
