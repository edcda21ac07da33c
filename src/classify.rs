//! Rule-based labeling for AQI level and health risk.
//!
//! Both labels are pure functions of a sample's readings:
//! - AQI level from a weighted pollutant score with half-open thresholds
//! - Health risk from the AQI level and the city type

use crate::data::{CityType, SensorReadings};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Pollution score
// ============================================================================

pub const PM2_5_WEIGHT: f64 = 0.3;
pub const PM10_WEIGHT: f64 = 0.2;
pub const NO2_WEIGHT: f64 = 0.1;
pub const O3_WEIGHT: f64 = 0.05;

/// Lower bound (inclusive) of each level above Good.
pub const MODERATE_THRESHOLD: f64 = 50.0;
pub const UNHEALTHY_THRESHOLD: f64 = 100.0;
pub const HAZARDOUS_THRESHOLD: f64 = 200.0;

/// Weighted pollutant score: 0.3*PM2.5 + 0.2*PM10 + 0.1*NO2 + 0.05*O3
pub fn pollution_score(readings: &SensorReadings) -> f64 {
    PM2_5_WEIGHT * readings.pm2_5
        + PM10_WEIGHT * readings.pm10
        + NO2_WEIGHT * readings.no2
        + O3_WEIGHT * readings.o3
}

// ============================================================================
// Label types
// ============================================================================

/// A closed set of integer class labels with display names.
///
/// Implemented by both label enums so reports can be built generically.
pub trait LabelSpace: Copy + Eq + 'static {
    /// Column name used in reports, e.g. `AQI_Level`.
    const SPACE_NAME: &'static str;

    /// Every label in ascending integer order.
    const ALL: &'static [Self];

    fn index(self) -> usize;

    fn name(self) -> &'static str;

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|label| label.index() == index)
    }

    fn len() -> usize {
        Self::ALL.len()
    }
}

/// Simplified four-level air quality index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqiLevel {
    Good,
    Moderate,
    Unhealthy,
    Hazardous,
}

impl LabelSpace for AqiLevel {
    const SPACE_NAME: &'static str = "AQI_Level";
    const ALL: &'static [Self] = &[
        AqiLevel::Good,
        AqiLevel::Moderate,
        AqiLevel::Unhealthy,
        AqiLevel::Hazardous,
    ];

    fn index(self) -> usize {
        match self {
            AqiLevel::Good => 0,
            AqiLevel::Moderate => 1,
            AqiLevel::Unhealthy => 2,
            AqiLevel::Hazardous => 3,
        }
    }

    fn name(self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::Hazardous => "Hazardous",
        }
    }
}

/// Health risk derived from AQI level and urban/rural context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthRisk {
    Low,
    Medium,
    High,
}

impl LabelSpace for HealthRisk {
    const SPACE_NAME: &'static str = "Health_Risk";
    const ALL: &'static [Self] = &[HealthRisk::Low, HealthRisk::Medium, HealthRisk::High];

    fn index(self) -> usize {
        match self {
            HealthRisk::Low => 0,
            HealthRisk::Medium => 1,
            HealthRisk::High => 2,
        }
    }

    fn name(self) -> &'static str {
        match self {
            HealthRisk::Low => "Low",
            HealthRisk::Medium => "Medium",
            HealthRisk::High => "High",
        }
    }
}

impl fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for HealthRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Classification rules
// ============================================================================

/// Map a pollution score to an AQI level.
///
/// | Score       | Level         |
/// |-------------|---------------|
/// | [0, 50)     | 0 Good        |
/// | [50, 100)   | 1 Moderate    |
/// | [100, 200)  | 2 Unhealthy   |
/// | [200, ∞)    | 3 Hazardous   |
pub fn aqi_level_for_score(score: f64) -> AqiLevel {
    if score < MODERATE_THRESHOLD {
        AqiLevel::Good
    } else if score < UNHEALTHY_THRESHOLD {
        AqiLevel::Moderate
    } else if score < HAZARDOUS_THRESHOLD {
        AqiLevel::Unhealthy
    } else {
        AqiLevel::Hazardous
    }
}

/// AQI level of a set of readings (uses PM2.5, PM10, NO2 and O3 only).
pub fn classify_aqi_level(readings: &SensorReadings) -> AqiLevel {
    aqi_level_for_score(pollution_score(readings))
}

/// Derive health risk from AQI level and city type.
///
/// Arms are evaluated top to bottom. Hazardous is intercepted before the
/// final catch-all, so the catch-all only ever sees rural Unhealthy.
///
/// | AQI       | City  | Risk   |
/// |-----------|-------|--------|
/// | Good      | any   | Low    |
/// | Moderate  | any   | Medium |
/// | Unhealthy | urban | High   |
/// | Hazardous | any   | High   |
/// | Unhealthy | rural | Medium |
pub fn classify_health_risk(aqi: AqiLevel, city: CityType) -> HealthRisk {
    match aqi {
        AqiLevel::Good => HealthRisk::Low,
        AqiLevel::Moderate => HealthRisk::Medium,
        AqiLevel::Unhealthy if city.is_urban() => HealthRisk::High,
        AqiLevel::Hazardous => HealthRisk::High,
        // catch-all: urban bias. Only rural Unhealthy reaches here; the urban
        // branch is unreachable but kept to preserve the rule's arm order.
        AqiLevel::Unhealthy => {
            if city.is_urban() {
                HealthRisk::High
            } else {
                HealthRisk::Medium
            }
        }
    }
}
