//! Season type for NCAA basketball.

use crate::error::{PointsPlusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a season, identified by the calendar year in which
/// it ends (the 2025-26 season is `Season(2026)`), matching upstream usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Display label used in published metadata, e.g. `"2025-26"`.
    pub fn label(&self) -> String {
        let end = self.0;
        format!("{}-{:02}", end.saturating_sub(1), end % 100)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2026)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = PointsPlusError;

    /// Accepts either the end year (`2026`) or the label form (`2025-26`).
    /// The label suffix must name the year after the start.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || PointsPlusError::InvalidSeason {
            value: s.to_string(),
        };
        match s.split_once('-') {
            Some((start, suffix)) => {
                let start: u16 = start.parse()?;
                let end = start.checked_add(1).ok_or_else(invalid)?;
                let suffix: u16 = suffix.parse()?;
                if suffix != end % 100 {
                    return Err(invalid());
                }
                Ok(Self(end))
            }
            None => Ok(Self(s.parse()?)),
        }
    }
}
