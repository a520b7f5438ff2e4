use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use festim_core::FestimError;

/// Phase of the training loop a callback runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    Train,
    Eval,
    Test,
    Infer,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Train, Mode::Eval, Mode::Test, Mode::Infer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Train => "train",
            Mode::Eval => "eval",
            Mode::Test => "test",
            Mode::Infer => "infer",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = FestimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "train" => Ok(Mode::Train),
            "eval" => Ok(Mode::Eval),
            "test" => Ok(Mode::Test),
            "infer" => Ok(Mode::Infer),
            other => Err(FestimError::InvalidArgument(format!("unknown mode '{}'", other))),
        }
    }
}

/// Set of modes a trace is active in.
///
/// Parsed from a comma separated list (`"eval,test"`) or from negations
/// (`"!infer"`, meaning every mode except `infer`). Positive and negated
/// entries cannot be mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeFilter {
    modes: BTreeSet<Mode>,
}

impl ModeFilter {
    /// Active in every mode.
    pub fn all() -> Self {
        ModeFilter {
            modes: Mode::ALL.into_iter().collect(),
        }
    }

    pub fn only(modes: &[Mode]) -> Self {
        ModeFilter {
            modes: modes.iter().copied().collect(),
        }
    }

    /// Parses a filter such as `"eval"`, `"train, eval"` or `"!infer"`.
    ///
    /// # Errors
    /// Returns `FestimError::InvalidArgument` for unknown modes, an empty
    /// filter, or a mix of positive and negated entries.
    pub fn parse(filter: &str) -> Result<Self, FestimError> {
        let entries: Vec<&str> = filter.split(',').map(str::trim).filter(|e| !e.is_empty()).collect();
        if entries.is_empty() {
            return Err(FestimError::InvalidArgument("empty mode filter".to_string()));
        }
        let negated = entries.iter().filter(|e| e.starts_with('!')).count();
        if negated == 0 {
            let modes = entries.iter().map(|e| e.parse()).collect::<Result<_, _>>()?;
            return Ok(ModeFilter { modes });
        }
        if negated != entries.len() {
            return Err(FestimError::InvalidArgument(format!(
                "mode filter '{}' mixes included and excluded modes",
                filter
            )));
        }
        let excluded: BTreeSet<Mode> = entries
            .iter()
            .map(|e| e.trim_start_matches('!').parse())
            .collect::<Result<_, _>>()?;
        Ok(ModeFilter {
            modes: Mode::ALL.into_iter().filter(|m| !excluded.contains(m)).collect(),
        })
    }

    pub fn contains(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }

    pub fn modes(&self) -> impl Iterator<Item = Mode> + '_ {
        self.modes.iter().copied()
    }
}

impl Default for ModeFilter {
    /// `eval` and `test`.
    fn default() -> Self {
        ModeFilter::only(&[Mode::Eval, Mode::Test])
    }
}

impl FromStr for ModeFilter {
    type Err = FestimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModeFilter::parse(s)
    }
}
