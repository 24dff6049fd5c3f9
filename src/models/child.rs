//! Child measurement model
//!
//! This module contains the input side of an evaluation: the child's sex and
//! the raw anthropometric measurements taken at a visit. A measurement is
//! transient; the engine never stores it.

use crate::error::{GrowthError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex of the child, as recorded by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Sex {
    /// Male child (reference tables tag these rows `boy`)
    #[serde(rename = "Male")]
    Male,
    /// Female child (reference tables tag these rows `girl`)
    #[serde(rename = "Female")]
    Female,
}

impl Sex {
    /// Tag used by the reference tables for this sex
    #[must_use]
    pub const fn table_tag(self) -> &'static str {
        match self {
            Self::Male => "boy",
            Self::Female => "girl",
        }
    }

    /// Caller-facing label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Sex {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "boy" => Ok(Self::Male),
            "female" | "f" | "girl" => Ok(Self::Female),
            _ => Err(GrowthError::UnknownSex(s.to_string())),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = GrowthError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Measurements of a single child at a single visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildMeasurement {
    /// Sex of the child
    pub sex: Sex,
    /// Date of birth, if known
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Recumbent length or standing height in centimetres
    #[serde(default)]
    pub height_cm: Option<f64>,
}

impl ChildMeasurement {
    /// Create a measurement with no recorded values
    #[must_use]
    pub const fn new(sex: Sex) -> Self {
        Self {
            sex,
            birthdate: None,
            weight_kg: None,
            height_cm: None,
        }
    }

    /// Set the date of birth
    #[must_use]
    pub fn with_birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    /// Set the body weight in kilograms
    #[must_use]
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Set the length/height in centimetres
    #[must_use]
    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = Some(height_cm);
        self
    }
}
