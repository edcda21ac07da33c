//! Interactive sample input
//!
//! Accepts either the literal `demo` or nine whitespace-separated values:
//! temperature humidity CO2 PM2.5 PM10 NO2 O3 wind_speed city_type(0/1)
//!
//! Anything unparsable resolves to the demo sample; resolution never fails.

use crate::data::{CityType, SensorReadings};
use serde::Serialize;
use std::io::BufRead;
use thiserror::Error;
use tracing::warn;

pub const DEMO_KEYWORD: &str = "demo";

/// Field names in input order
pub const FIELD_NAMES: [&str; 9] = [
    "temperature",
    "humidity",
    "CO2",
    "PM2.5",
    "PM10",
    "NO2",
    "O3",
    "wind_speed",
    "city_type",
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("expected {} values, found {found}", FIELD_NAMES.len())]
    WrongFieldCount { found: usize },

    #[error("{field} is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be non-negative, got {value}")]
    OutOfDomain { field: &'static str, value: f64 },

    #[error("city_type must be 0 (rural) or 1 (urban), got '{value}'")]
    InvalidCityType { value: String },
}

/// Where the classified sample came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputSource {
    Demo,
    Custom,
    Fallback { reason: String },
}

impl InputSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, InputSource::Fallback { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    pub readings: SensorReadings,
    pub source: InputSource,
}

/// Parse a line of nine values into readings.
pub fn parse_sample_line(line: &str) -> Result<SensorReadings, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != FIELD_NAMES.len() {
        return Err(InputError::WrongFieldCount { found: tokens.len() });
    }

    let mut values = [0.0_f64; 8];
    for (i, token) in tokens[..8].iter().enumerate() {
        values[i] = parse_real(FIELD_NAMES[i], token)?;
    }

    // PM2.5, PM10, NO2, O3
    for (&field, &value) in FIELD_NAMES[3..7].iter().zip(&values[3..7]) {
        if value < 0.0 {
            return Err(InputError::OutOfDomain { field, value });
        }
    }

    let city_token = tokens[8];
    let city_type = city_token
        .parse::<i64>()
        .ok()
        .and_then(CityType::from_flag)
        .ok_or_else(|| InputError::InvalidCityType {
            value: city_token.to_string(),
        })?;

    let [temperature, humidity, co2, pm2_5, pm10, no2, o3, wind_speed] = values;
    Ok(SensorReadings {
        temperature,
        humidity,
        co2,
        pm2_5,
        pm10,
        no2,
        o3,
        wind_speed,
        city_type,
    })
}

fn parse_real(field: &'static str, token: &str) -> Result<f64, InputError> {
    let value: f64 = token.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: token.to_string(),
    })?;

    if !value.is_finite() {
        return Err(InputError::NonFinite { field, value });
    }
    Ok(value)
}

/// Resolve one line of interactive input. Never fails.
pub fn resolve_query(line: &str) -> ResolvedQuery {
    if line.trim() == DEMO_KEYWORD {
        return ResolvedQuery {
            readings: SensorReadings::demo(),
            source: InputSource::Demo,
        };
    }

    match parse_sample_line(line) {
        Ok(readings) => ResolvedQuery {
            readings,
            source: InputSource::Custom,
        },
        Err(e) => {
            warn!("Invalid sample input ({}), using demo sample", e);
            ResolvedQuery {
                readings: SensorReadings::demo(),
                source: InputSource::Fallback { reason: e.to_string() },
            }
        }
    }
}

/// Read one line from `reader` and resolve it.
///
/// A read error is logged and treated like an empty line (demo fallback).
/// Only the first line is consumed.
pub fn read_query<R: BufRead + ?Sized>(reader: &mut R) -> ResolvedQuery {
    let mut line = String::new();
    if let Err(e) = reader.read_line(&mut line) {
        warn!("Failed to read sample input: {}", e);
        line.clear();
    }
    resolve_query(&line)
}
