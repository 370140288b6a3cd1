//! Lesion categories and prediction payloads
//!
//! The inference service classifies a picture into one of seven lesion
//! categories and reports a probability for each. This module names those
//! categories, carries the display metadata shown to users, and builds the
//! human-readable report returned by the analysis endpoint.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// One of the seven lesion categories the classifier knows about.
///
/// Serialized as the short lowercase code used by the inference service
/// (`"mel"`, `"nv"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Lesion {
    Akiec,
    Bcc,
    Bkl,
    Df,
    Mel,
    Nv,
    Vasc,
}

/// How urgently a category should be looked at by a clinician
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl Lesion {
    /// All categories, in classifier index order
    pub const ALL: [Lesion; 7] = [
        Lesion::Akiec,
        Lesion::Bcc,
        Lesion::Bkl,
        Lesion::Df,
        Lesion::Mel,
        Lesion::Nv,
        Lesion::Vasc,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Lesion::Akiec => "akiec",
            Lesion::Bcc => "bcc",
            Lesion::Bkl => "bkl",
            Lesion::Df => "df",
            Lesion::Mel => "mel",
            Lesion::Nv => "nv",
            Lesion::Vasc => "vasc",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Lesion::Akiec => "Actinic Keratosis / SCC",
            Lesion::Bcc => "Basal Cell Carcinoma",
            Lesion::Bkl => "Benign Keratosis",
            Lesion::Df => "Dermatofibroma",
            Lesion::Mel => "Melanoma",
            Lesion::Nv => "Melanocytic Nevus (Mole)",
            Lesion::Vasc => "Vascular Lesion",
        }
    }

    pub fn risk(self) -> Risk {
        match self {
            Lesion::Mel => Risk::High,
            Lesion::Akiec | Lesion::Bcc => Risk::Medium,
            Lesion::Bkl | Lesion::Df | Lesion::Nv | Lesion::Vasc => Risk::Low,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Lesion::Akiec => "Precancerous lesion.",
            Lesion::Bcc => "Needs treatment.",
            Lesion::Bkl => "Harmless growth.",
            Lesion::Df => "Benign nodule.",
            Lesion::Mel => "Dangerous skin cancer.",
            Lesion::Nv => "Benign mole.",
            Lesion::Vasc => "Harmless.",
        }
    }
}

impl fmt::Display for Lesion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lesion {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lesion::ALL
            .into_iter()
            .find(|lesion| lesion.code() == s)
            .ok_or_else(|| SharedError::unknown_label(s))
    }
}

impl TryFrom<String> for Lesion {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Classification returned by the inference service
///
/// The numbers are passed through untouched; only the report formats them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Most likely category
    pub label: Lesion,
    /// Probability of `label`, in `[0, 1]`
    pub confidence: f64,
    /// Probability per category
    pub probs: BTreeMap<Lesion, f64>,
}

/// Display-ready view of a [`Prediction`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub name: &'static str,
    pub risk: Risk,
    pub description: &'static str,
    /// Confidence as a percentage with one decimal, e.g. `"87.3%"`
    pub confidence: String,
    pub breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub label: Lesion,
    pub name: &'static str,
    pub probability: String,
}

impl Prediction {
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            name: self.label.display_name(),
            risk: self.label.risk(),
            description: self.label.description(),
            confidence: format_percent(self.confidence),
            breakdown: self
                .probs
                .iter()
                .map(|(&label, &probability)| BreakdownEntry {
                    label,
                    name: label.display_name(),
                    probability: format_percent(probability),
                })
                .collect(),
        }
    }
}

/// Format a probability in `[0, 1]` as a one-decimal percentage
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}
