//! Predictor seam
//!
//! `RulePredictor` reapplies the labeling rules to the readings, so its
//! predictions always agree with the ground truth. A trained model would
//! implement `Predictor` and be fitted on the train partition.

use crate::classify::{classify_health_risk, aqi_level_for_score, pollution_score, AqiLevel, HealthRisk};
use crate::data::SensorReadings;
use serde::Serialize;

/// Labels predicted for one set of readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub score: f64,
    pub aqi_level: AqiLevel,
    pub health_risk: HealthRisk,
}

pub trait Predictor {
    fn predict(&self, readings: &SensorReadings) -> Prediction;
}

/// Deterministic rule-based predictor
#[derive(Debug, Clone, Copy, Default)]
pub struct RulePredictor;

impl Predictor for RulePredictor {
    fn predict(&self, readings: &SensorReadings) -> Prediction {
        let score = pollution_score(readings);
        let aqi_level = aqi_level_for_score(score);
        Prediction {
            score,
            aqi_level,
            health_risk: classify_health_risk(aqi_level, readings.city_type),
        }
    }
}
