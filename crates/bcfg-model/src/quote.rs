//! Option lists for the inquiry form.
//!
//! The form is a draft only; nothing here submits anything.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

pub static BUILDING_SECTORS: [&str; 6] = [
    "Industrial",
    "Agricultural",
    "Commercial",
    "Logistics",
    "Sports & Leisure",
    "Other",
];

pub static BUILDING_APPLICATIONS: [&str; 7] = [
    "Plants/Factories",
    "Warehouses",
    "Workshops",
    "Barns/Stables",
    "Hangars",
    "Showrooms",
    "Other",
];

pub static REALIZATION_YEARS: [u16; 4] = [2025, 2026, 2027, 2028];

pub const DEFAULT_SECTOR: &str = "Industrial";
pub const DEFAULT_APPLICATION: &str = "Plants/Factories";
pub const DEFAULT_REALIZATION_YEAR: u16 = 2025;

/// Answer to "How did you find us?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferralSource {
    Search,
    Referral,
    Social,
    Exhibition,
    Other,
}

impl ReferralSource {
    pub const ALL: [ReferralSource; 5] = [
        ReferralSource::Search,
        ReferralSource::Referral,
        ReferralSource::Social,
        ReferralSource::Exhibition,
        ReferralSource::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralSource::Search => "search",
            ReferralSource::Referral => "referral",
            ReferralSource::Social => "social",
            ReferralSource::Exhibition => "exhibition",
            ReferralSource::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReferralSource::Search => "Search Engine",
            ReferralSource::Referral => "Referral",
            ReferralSource::Social => "Social Media",
            ReferralSource::Exhibition => "Exhibition",
            ReferralSource::Other => "Other",
        }
    }
}

impl fmt::Display for ReferralSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ReferralSource {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ReferralSource::ALL
            .into_iter()
            .find(|source| source.as_str() == normalized)
            .ok_or_else(|| ModelError::unknown("referral source", s))
    }
}
