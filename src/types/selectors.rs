// src/types/selectors.rs
//! String-keyed selectors for time ranges and layout strategies.

use crate::error::BusgraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time window the synthetic builder models. Shorter ranges are noisier
/// and sparser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "max")]
    Max,
}

impl TimeRange {
    /// The wire key (`1m`, `3m`, `1y`, `max`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::OneYear => "1y",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TimeRange {
    type Err = BusgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Self::OneMonth),
            "3m" => Ok(Self::ThreeMonths),
            "1y" => Ok(Self::OneYear),
            "max" => Ok(Self::Max),
            other => Err(BusgraphError::UnknownTimeRange(other.to_string())),
        }
    }
}

/// Layout strategy selector.
///
/// `Spring` and `KamadaKawai` are the same force simulation with different
/// tuning constants; `force` parses to `Spring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    Circular,
    Shell,
    Spring,
    KamadaKawai,
}

impl LayoutKind {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Circular => "circular",
            Self::Shell => "shell",
            Self::Spring => "spring",
            Self::KamadaKawai => "kamada_kawai",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LayoutKind {
    type Err = BusgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circular" => Ok(Self::Circular),
            "shell" => Ok(Self::Shell),
            "force" | "spring" => Ok(Self::Spring),
            "kamada_kawai" | "kamada-kawai" => Ok(Self::KamadaKawai),
            other => Err(BusgraphError::UnknownLayout(other.to_string())),
        }
    }
}
