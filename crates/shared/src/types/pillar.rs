//! Pillar tags grouping related indicators.

use serde::{Deserialize, Serialize};

/// A fixed category tag grouping indicators for aggregate reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pillar {
    /// BIGGER pillar.
    Bigger,
    /// SMARTER pillar.
    Smarter,
    /// BETTER pillar.
    Better,
}

impl Pillar {
    /// All pillars in reporting order.
    pub const ALL: [Self; 3] = [Self::Bigger, Self::Smarter, Self::Better];
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bigger => write!(f, "BIGGER"),
            Self::Smarter => write!(f, "SMARTER"),
            Self::Better => write!(f, "BETTER"),
        }
    }
}

impl std::str::FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BIGGER" => Ok(Self::Bigger),
            "SMARTER" => Ok(Self::Smarter),
            "BETTER" => Ok(Self::Better),
            _ => Err(format!("Unknown pillar: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pillar_display() {
        assert_eq!(Pillar::Bigger.to_string(), "BIGGER");
        assert_eq!(Pillar::Smarter.to_string(), "SMARTER");
        assert_eq!(Pillar::Better.to_string(), "BETTER");
    }

    #[test]
    fn test_pillar_from_str() {
        assert_eq!(Pillar::from_str("BIGGER").unwrap(), Pillar::Bigger);
        assert_eq!(Pillar::from_str("smarter").unwrap(), Pillar::Smarter);
        assert!(Pillar::from_str("FASTER").is_err());
        assert!(Pillar::from_str("").is_err());
    }
}
