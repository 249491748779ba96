//! Covered conference types.

use crate::error::PointsPlusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five major conferences whose teams form the league baseline.
///
/// Opponents outside this set are adjusted against league-average values.
///
/// # Examples
///
/// ```rust
/// use ncaa_points_plus::Conference;
///
/// let conf: Conference = "big east".parse().unwrap();
/// assert_eq!(conf, Conference::BigEast);
/// assert_eq!(conf.group_id(), 4);
/// assert_eq!(conf.to_string(), "Big East");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Conference {
    #[serde(rename = "ACC")]
    Acc,
    #[serde(rename = "Big East")]
    BigEast,
    #[serde(rename = "Big Ten")]
    BigTen,
    #[serde(rename = "Big 12")]
    Big12,
    #[serde(rename = "SEC")]
    Sec,
}

impl Conference {
    /// All covered conferences in publication order.
    pub const ALL: [Conference; 5] = [
        Conference::Acc,
        Conference::BigEast,
        Conference::BigTen,
        Conference::Big12,
        Conference::Sec,
    ];

    /// Upstream standings group id.
    pub fn group_id(&self) -> u32 {
        match self {
            Conference::Acc => 2,
            Conference::BigEast => 4,
            Conference::BigTen => 7,
            Conference::Big12 => 8,
            Conference::Sec => 23,
        }
    }

    pub fn from_group_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.group_id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Conference::Acc => "ACC",
            Conference::BigEast => "Big East",
            Conference::BigTen => "Big Ten",
            Conference::Big12 => "Big 12",
            Conference::Sec => "SEC",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Conference {
    type Err = PointsPlusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "ACC" => Ok(Conference::Acc),
            "BIGEAST" => Ok(Conference::BigEast),
            "BIGTEN" | "B1G" | "BIG10" => Ok(Conference::BigTen),
            "BIG12" | "BIGTWELVE" => Ok(Conference::Big12),
            "SEC" => Ok(Conference::Sec),
            _ => Err(PointsPlusError::InvalidConference {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conference_parse_variants() {
        assert_eq!("ACC".parse::<Conference>().unwrap(), Conference::Acc);
        assert_eq!("Big Ten".parse::<Conference>().unwrap(), Conference::BigTen);
        assert_eq!("b1g".parse::<Conference>().unwrap(), Conference::BigTen);
        assert_eq!("big-12".parse::<Conference>().unwrap(), Conference::Big12);
        assert_eq!("sec".parse::<Conference>().unwrap(), Conference::Sec);
    }

    #[test]
    fn test_conference_parse_invalid() {
        match "Ivy".parse::<Conference>() {
            Err(PointsPlusError::InvalidConference { name }) => assert_eq!(name, "Ivy"),
            other => panic!("Expected InvalidConference, got {:?}", other),
        }
    }

    #[test]
    fn test_group_id_round_trip() {
        for conf in Conference::ALL {
            assert_eq!(Conference::from_group_id(conf.group_id()), Some(conf));
        }
        assert_eq!(Conference::from_group_id(99), None);
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Conference::Big12).unwrap();
        assert_eq!(json, "\"Big 12\"");
        let back: Conference = serde_json::from_str("\"Big East\"").unwrap();
        assert_eq!(back, Conference::BigEast);
    }
}
