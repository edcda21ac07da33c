//! Sensor Samples and Synthetic Dataset
//!
//! Generates labeled environmental-sensor samples from uniform ranges and
//! splits them into train/test partitions.
//!
//! All randomness comes from a caller-owned generator passed by `&mut`, so a
//! fixed seed reproduces the same dataset and the same split.

use crate::classify::{classify_aqi_level, classify_health_risk, AqiLevel, HealthRisk};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;

/// Urban/rural context of a sample (integer flag 0 = rural, 1 = urban)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CityType {
    Rural,
    Urban,
}

impl CityType {
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(CityType::Rural),
            1 => Some(CityType::Urban),
            _ => None,
        }
    }

    pub fn is_urban(self) -> bool {
        self == CityType::Urban
    }
}

/// Raw sensor inputs for one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    pub temperature: f64,
    pub humidity: f64,
    pub co2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub no2: f64,
    pub o3: f64,
    pub wind_speed: f64,
    pub city_type: CityType,
}

impl SensorReadings {
    /// Fixed sample used for `demo` and as the fallback for unparsable input.
    ///
    /// Score 92 → Moderate AQI → Medium health risk.
    pub fn demo() -> Self {
        Self {
            temperature: 33.0,
            humidity: 65.0,
            co2: 550.0,
            pm2_5: 150.0,
            pm10: 180.0,
            no2: 80.0,
            o3: 60.0,
            wind_speed: 3.5,
            city_type: CityType::Urban,
        }
    }
}

/// A labeled sample.
///
/// Labels are computed from the readings at construction and cannot be set
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    readings: SensorReadings,
    aqi_level: AqiLevel,
    health_risk: HealthRisk,
}

impl Sample {
    pub fn labeled(readings: SensorReadings) -> Self {
        let aqi_level = classify_aqi_level(&readings);
        let health_risk = classify_health_risk(aqi_level, readings.city_type);
        Self {
            readings,
            aqi_level,
            health_risk,
        }
    }

    pub fn readings(&self) -> &SensorReadings {
        &self.readings
    }

    pub fn aqi_level(&self) -> AqiLevel {
        self.aqi_level
    }

    pub fn health_risk(&self) -> HealthRisk {
        self.health_risk
    }
}

/// Uniform generation ranges (inclusive bounds)
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRanges {
    pub temperature: RangeInclusive<f64>,
    pub humidity: RangeInclusive<f64>,
    pub co2: RangeInclusive<f64>,
    pub pm2_5: RangeInclusive<f64>,
    pub pm10: RangeInclusive<f64>,
    pub no2: RangeInclusive<f64>,
    pub o3: RangeInclusive<f64>,
    pub wind_speed: RangeInclusive<f64>,
}

impl Default for SampleRanges {
    fn default() -> Self {
        Self {
            temperature: 10.0..=45.0,
            humidity: 20.0..=90.0,
            co2: 300.0..=800.0,
            pm2_5: 5.0..=250.0,
            pm10: 10.0..=300.0,
            no2: 2.0..=200.0,
            o3: 5.0..=180.0,
            wind_speed: 0.5..=10.0,
        }
    }
}

impl SampleRanges {
    /// Draw one set of readings. Field order is fixed so a seed always
    /// reproduces the same sample.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> SensorReadings {
        let temperature = rng.gen_range(self.temperature.clone());
        let humidity = rng.gen_range(self.humidity.clone());
        let co2 = rng.gen_range(self.co2.clone());
        let pm2_5 = rng.gen_range(self.pm2_5.clone());
        let pm10 = rng.gen_range(self.pm10.clone());
        let no2 = rng.gen_range(self.no2.clone());
        let o3 = rng.gen_range(self.o3.clone());
        let wind_speed = rng.gen_range(self.wind_speed.clone());
        let city_type = if rng.gen_range(0..=1) == 1 {
            CityType::Urban
        } else {
            CityType::Rural
        };

        SensorReadings {
            temperature,
            humidity,
            co2,
            pm2_5,
            pm10,
            no2,
            o3,
            wind_speed,
            city_type,
        }
    }
}

/// Generate `count` labeled samples.
pub fn generate_samples<R: Rng + ?Sized>(count: usize, ranges: &SampleRanges, rng: &mut R) -> Vec<Sample> {
    let samples: Vec<Sample> = (0..count)
        .map(|_| Sample::labeled(ranges.draw(rng)))
        .collect();

    debug!("Generated {} labeled samples", samples.len());
    samples
}

/// Shuffled train/test partition of a dataset.
#[derive(Debug, Clone)]
pub struct DatasetSplit {
    /// Leading partition. Not consumed by the rule predictor; kept so a
    /// trained model can be dropped in later.
    pub train: Vec<Sample>,

    /// Trailing partition used for evaluation.
    pub test: Vec<Sample>,
}

impl DatasetSplit {
    /// Shuffle `samples` in place with `rng`, then split by position.
    ///
    /// `train_len = floor(train_fraction * n)`; the rest goes to test.
    pub fn shuffle_and_split<R: Rng + ?Sized>(
        mut samples: Vec<Sample>,
        train_fraction: f64,
        rng: &mut R,
    ) -> Self {
        samples.shuffle(rng);

        let train_len = ((train_fraction * samples.len() as f64) as usize).min(samples.len());
        let test = samples.split_off(train_len);

        debug!("Split dataset: train={}, test={}", samples.len(), test.len());
        Self {
            train: samples,
            test,
        }
    }
}

/// Dataset sizes and the seed that produced them
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total: usize,
    pub train: usize,
    pub test: usize,
    pub seed: Option<u64>,
}

impl DatasetSummary {
    pub fn of(split: &DatasetSplit, seed: Option<u64>) -> Self {
        Self {
            total: split.train.len() + split.test.len(),
            train: split.train.len(),
            test: split.test.len(),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::pollution_score;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_city_type_flags() {
        assert_eq!(CityType::from_flag(0), Some(CityType::Rural));
        assert_eq!(CityType::from_flag(1), Some(CityType::Urban));
        assert_eq!(CityType::from_flag(2), None);
        assert_eq!(CityType::from_flag(-1), None);
    }

    #[test]
    fn test_demo_sample_labels() {
        let sample = Sample::labeled(SensorReadings::demo());
        assert_eq!(sample.aqi_level(), AqiLevel::Moderate);
        assert_eq!(sample.health_risk(), HealthRisk::Medium);
    }

    #[test]
    fn test_generated_fields_within_ranges() {
        let ranges = SampleRanges::default();
        let mut rng = StdRng::seed_from_u64(7);
        let samples = generate_samples(500, &ranges, &mut rng);

        assert_eq!(samples.len(), 500);
        for s in &samples {
            let r = s.readings();
            assert!(ranges.temperature.contains(&r.temperature));
            assert!(ranges.humidity.contains(&r.humidity));
            assert!(ranges.co2.contains(&r.co2));
            assert!(ranges.pm2_5.contains(&r.pm2_5));
            assert!(ranges.pm10.contains(&r.pm10));
            assert!(ranges.no2.contains(&r.no2));
            assert!(ranges.o3.contains(&r.o3));
            assert!(ranges.wind_speed.contains(&r.wind_speed));
        }
    }

    #[test]
    fn test_generated_labels_match_rules() {
        let mut rng = StdRng::seed_from_u64(11);
        for s in generate_samples(300, &SampleRanges::default(), &mut rng) {
            let r = s.readings();
            assert_eq!(s.aqi_level(), crate::classify::aqi_level_for_score(pollution_score(r)));
            assert_eq!(s.health_risk(), classify_health_risk(s.aqi_level(), r.city_type));
        }
    }

    #[test]
    fn test_both_city_types_generated() {
        let mut rng = StdRng::seed_from_u64(3);
        let samples = generate_samples(200, &SampleRanges::default(), &mut rng);
        let urban = samples.iter().filter(|s| s.readings().city_type.is_urban()).count();
        assert!(urban > 0 && urban < samples.len());
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let ranges = SampleRanges::default();
        let a = generate_samples(50, &ranges, &mut StdRng::seed_from_u64(42));
        let b = generate_samples(50, &ranges, &mut StdRng::seed_from_u64(42));
        let c = generate_samples(50, &ranges, &mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_split_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        let samples = generate_samples(1500, &SampleRanges::default(), &mut rng);
        let split = DatasetSplit::shuffle_and_split(samples, 0.8, &mut rng);
        assert_eq!(split.train.len(), 1200);
        assert_eq!(split.test.len(), 300);
        assert_eq!(DatasetSummary::of(&split, None).total, 1500);
    }

    #[test]
    fn test_split_floors_train_len() {
        let mut rng = StdRng::seed_from_u64(1);
        let samples = generate_samples(7, &SampleRanges::default(), &mut rng);
        let split = DatasetSplit::shuffle_and_split(samples, 0.8, &mut rng);
        // floor(5.6) = 5
        assert_eq!(split.train.len(), 5);
        assert_eq!(split.test.len(), 2);
    }

    #[test]
    fn test_split_preserves_samples() {
        let mut rng = StdRng::seed_from_u64(9);
        let samples = generate_samples(40, &SampleRanges::default(), &mut rng);
        let split = DatasetSplit::shuffle_and_split(samples.clone(), 0.8, &mut rng);

        let mut all: Vec<Sample> = split.train.iter().chain(split.test.iter()).copied().collect();
        assert_eq!(all.len(), samples.len());
        for s in &samples {
            let pos = all.iter().position(|x| x == s).expect("sample missing after split");
            all.swap_remove(pos);
        }
        assert!(all.is_empty());
    }

    #[test]
    fn test_summary_of_split() {
        let mut rng = StdRng::seed_from_u64(5);
        let samples = generate_samples(10, &SampleRanges::default(), &mut rng);
        let split = DatasetSplit::shuffle_and_split(samples, 0.8, &mut rng);
        let summary = DatasetSummary::of(&split, Some(5));
        assert_eq!(summary, DatasetSummary { total: 10, train: 8, test: 2, seed: Some(5) });
    }
}
