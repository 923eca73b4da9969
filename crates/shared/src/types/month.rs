//! Canonical month vocabulary.
//!
//! Budget records are keyed by the Indonesian month name. The declaration
//! order of the variants is the calendar order, so `Ord` sorts chronologically.

use serde::{Deserialize, Serialize};

/// One of the twelve canonical month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    /// January.
    Januari,
    /// February.
    Februari,
    /// March.
    Maret,
    /// April.
    April,
    /// May.
    Mei,
    /// June.
    Juni,
    /// July.
    Juli,
    /// August.
    Agustus,
    /// September.
    September,
    /// October.
    Oktober,
    /// November.
    November,
    /// December.
    Desember,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Januari,
        Self::Februari,
        Self::Maret,
        Self::April,
        Self::Mei,
        Self::Juni,
        Self::Juli,
        Self::Agustus,
        Self::September,
        Self::Oktober,
        Self::November,
        Self::Desember,
    ];

    /// Returns the 1-based calendar index (Januari = 1, Desember = 12).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the month for a 1-based calendar index.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index.checked_sub(1)?)).copied()
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Januari => "Januari",
            Self::Februari => "Februari",
            Self::Maret => "Maret",
            Self::April => "April",
            Self::Mei => "Mei",
            Self::Juni => "Juni",
            Self::Juli => "Juli",
            Self::Agustus => "Agustus",
            Self::September => "September",
            Self::Oktober => "Oktober",
            Self::November => "November",
            Self::Desember => "Desember",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Month {
    type Err = String;

    /// Exact match on the canonical spelling; anything else is invalid input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| format!("Unknown month: {s}"))
    }
}
