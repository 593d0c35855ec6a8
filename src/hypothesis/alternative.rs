//! Direction of the alternative hypothesis

use crate::io::error::{BinomTestError, out_of_range};
use std::fmt;
use std::str::FromStr;

/// Alternative hypothesis against which the null success probability is tested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alternative {
    /// True probability differs from the null value in either direction
    #[default]
    TwoSided,
    /// True probability is smaller than the null value
    Less,
    /// True probability is larger than the null value
    Greater,
}

impl Alternative {
    /// Every alternative, in canonical order
    pub const ALL: [Self; 3] = [Self::TwoSided, Self::Less, Self::Greater];

    /// Canonical textual form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwoSided => "two-sided",
            Self::Less => "less",
            Self::Greater => "greater",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alternative {
    type Err = BinomTestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alternative| alternative.as_str() == s)
            .ok_or_else(|| {
                out_of_range(
                    "alternative",
                    &s,
                    &"must be one of \"two-sided\", \"less\" or \"greater\"",
                )
            })
    }
}
