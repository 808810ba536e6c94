//! Percent-to-bucket policies.
//!
//! The agreement matrix and the per-party bars use different scales. They are
//! kept as two separate policies with no shared thresholds.

use serde::Serialize;

/// Five-way scale used to color agreement matrix cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementBucket {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Classify a matrix cell. Lower bounds are inclusive.
pub fn agreement_bucket(percent: f64) -> AgreementBucket {
    if percent >= 75.0 {
        AgreementBucket::VeryHigh
    } else if percent >= 60.0 {
        AgreementBucket::High
    } else if percent >= 45.0 {
        AgreementBucket::Medium
    } else if percent >= 30.0 {
        AgreementBucket::Low
    } else {
        AgreementBucket::VeryLow
    }
}

impl AgreementBucket {
    /// Legend text
    pub fn label(&self) -> &'static str {
        match self {
            AgreementBucket::VeryLow => "<30%",
            AgreementBucket::Low => "30-45%",
            AgreementBucket::Medium => "45-60%",
            AgreementBucket::High => "60-75%",
            AgreementBucket::VeryHigh => ">75%",
        }
    }

    /// Legend order, lowest first
    pub fn all() -> &'static [AgreementBucket] {
        &[
            AgreementBucket::VeryLow,
            AgreementBucket::Low,
            AgreementBucket::Medium,
            AgreementBucket::High,
            AgreementBucket::VeryHigh,
        ]
    }
}

/// Three-way scale used for the bars in the party detail panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarBucket {
    Weak,
    Moderate,
    Strong,
}

/// Classify a party detail bar. Split at 40 and 60, lower bounds inclusive.
pub fn bar_bucket(percent: f64) -> BarBucket {
    if percent >= 60.0 {
        BarBucket::Strong
    } else if percent >= 40.0 {
        BarBucket::Moderate
    } else {
        BarBucket::Weak
    }
}
