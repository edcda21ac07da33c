//! Air Quality & Health Risk Predictor
//!
//! Synthesizes a labeled environmental-sensor dataset, evaluates a rule-based
//! predictor against it and classifies one ad hoc sample.
//!
//! Layout:
//! - `classify`: AQI level and health risk rules
//! - `data`: sensor samples, synthetic generation, train/test split
//! - `metrics/`: per-label precision/recall/F1, accuracy, confusion matrix, reports
//! - `predictor`: the predictor seam (currently the labeling rule itself)
//! - `evaluation`: pipeline coordinator
//! - `input`: interactive sample parsing with demo fallback
//! - `config`: environment-driven run configuration
//! - `formatters/`: text, markdown and JSON renderings

pub mod classify;
pub mod config;
pub mod data;
pub mod evaluation;
pub mod formatters;
pub mod input;
pub mod metrics;
pub mod predictor;

// Re-export commonly used types
pub use classify::{
    aqi_level_for_score, classify_aqi_level, classify_health_risk, pollution_score, AqiLevel,
    HealthRisk, LabelSpace,
};
pub use config::{ReportFormat, RunConfig};
pub use data::{generate_samples, CityType, DatasetSplit, DatasetSummary, Sample, SampleRanges, SensorReadings};
pub use evaluation::{EvaluationOutcome, EvaluationReport, EvaluationSettings, Evaluator, SamplePrediction};
pub use input::{parse_sample_line, read_query, resolve_query, InputError, InputSource, ResolvedQuery};
pub use metrics::*;
pub use predictor::{Prediction, Predictor, RulePredictor};
