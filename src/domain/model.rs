use crate::utils::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practitioner {
    pub name: String,
    pub specialty: String,
    pub experience_label: String,
    #[serde(default)]
    pub experience_years: Option<f64>,
    pub rating_label: String,
    #[serde(rename = "available")]
    pub is_available: bool,
    pub image_url: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl Practitioner {
    /// Sort key for experience ranking. Missing or NaN years rank as 0.
    pub fn experience_rank(&self) -> f64 {
        // + 0.0 folds -0.0 into 0.0 so both compare equal under total_cmp
        self.experience_years
            .filter(|years| !years.is_nan())
            .unwrap_or(0.0)
            + 0.0
    }

    /// Location, if present and non-empty.
    pub fn place(&self) -> Option<&str> {
        self.location.as_deref().filter(|place| !place.is_empty())
    }
}

/// Read-only practitioner catalog shared by every consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    practitioners: Arc<[Practitioner]>,
}

impl Catalog {
    pub fn new(practitioners: Vec<Practitioner>) -> Self {
        Self {
            practitioners: practitioners.into(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for Catalog {
    type Target = [Practitioner];

    fn deref(&self) -> &Self::Target {
        &self.practitioners
    }
}

impl From<Vec<Practitioner>> for Catalog {
    fn from(practitioners: Vec<Practitioner>) -> Self {
        Self::new(practitioners)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    #[serde(rename = "availability")]
    #[cfg_attr(feature = "cli", value(name = "availability"))]
    ByAvailability,
    #[serde(rename = "place")]
    #[cfg_attr(feature = "cli", value(name = "place"))]
    ByPlace,
    #[serde(rename = "experience")]
    #[cfg_attr(feature = "cli", value(name = "experience"))]
    ByExperience,
}

impl FilterMode {
    pub const ALL: [FilterMode; 4] = [
        FilterMode::All,
        FilterMode::ByAvailability,
        FilterMode::ByPlace,
        FilterMode::ByExperience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::ByAvailability => "availability",
            FilterMode::ByPlace => "place",
            FilterMode::ByExperience => "experience",
        }
    }

    /// Label shown in the mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::ByAvailability => "By Availability",
            FilterMode::ByPlace => "By Place",
            FilterMode::ByExperience => "By Experience",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        FilterMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DirectoryError::InvalidConfigValueError {
                field: "filter_mode".to_string(),
                value: s.to_string(),
                reason: "Unknown filter mode. Valid modes: all, availability, place, experience"
                    .to_string(),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub search_text: String,
    /// `None` means no category filter.
    pub selected_category: Option<String>,
    pub filter_mode: FilterMode,
    /// Only consulted when `filter_mode` is `ByPlace`.
    pub place_selection: Option<String>,
}

/// Display strings for one practitioner card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PractitionerCard {
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub rating: String,
    pub availability: String,
    pub location: String,
    pub image_url: String,
}

impl From<&Practitioner> for PractitionerCard {
    fn from(p: &Practitioner) -> Self {
        Self {
            name: p.name.clone(),
            specialty: p.specialty.clone(),
            experience: format!("Exp: {}", p.experience_label),
            rating: format!("⭐ {}", p.rating_label),
            availability: if p.is_available {
                "Available".to_string()
            } else {
                "Not Available".to_string()
            },
            location: p.location.clone().unwrap_or_default(),
            image_url: p.image_url.clone(),
        }
    }
}
