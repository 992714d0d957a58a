//! Coordinate-driven weather simulation.
//!
//! Samples each metric uniformly from a fixed range, then shifts the result by
//! latitude band. The random source is injected so runs can be reproduced from
//! a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{EnvironmentError, EnvironmentSource, SkyCondition, WeatherSnapshot};
use crate::location::Coordinates;

/// Latitude above which locations are treated as northern.
const NORTHERN_LATITUDE: f64 = 40.0;
/// Latitude below which locations are treated as tropical.
const TROPICAL_LATITUDE: f64 = 10.0;

/// Weather simulator with an injectable random source.
pub struct EnvironmentSimulator<R = ChaCha8Rng> {
    rng: R,
}

impl EnvironmentSimulator<ChaCha8Rng> {
    /// Simulator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Reproducible simulator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> EnvironmentSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Simulate a weather snapshot for a coordinate pair.
    pub fn simulate(&mut self, lat: f64, _lng: f64) -> WeatherSnapshot {
        let rng = &mut self.rng;
        let mut snapshot = WeatherSnapshot {
            temperature: rng.gen_range(20..=35),
            humidity: rng.gen_range(40..=80),
            uv_index: rng.gen_range(1..=11),
            condition: SkyCondition::ALL[rng.gen_range(0..SkyCondition::ALL.len())],
            wind_speed: rng.gen_range(5..=20),
            pressure: rng.gen_range(1000..=1050),
            visibility: rng.gen_range(8..=15),
            feels_like: rng.gen_range(22..=34),
        };

        if lat > NORTHERN_LATITUDE {
            snapshot.temperature -= 5;
            snapshot.humidity += 10;
        }
        if lat < TROPICAL_LATITUDE {
            snapshot.temperature += 5;
            snapshot.humidity += 15;
            snapshot.uv_index += 2;
        }

        snapshot
    }
}

impl<R: Rng> EnvironmentSource for EnvironmentSimulator<R> {
    fn observe(&mut self, coordinates: Coordinates) -> Result<WeatherSnapshot, EnvironmentError> {
        if !coordinates.lat.is_finite() || !coordinates.lng.is_finite() {
            return Err(EnvironmentError::InvalidData(format!(
                "non-finite coordinates {}",
                coordinates
            )));
        }
        Ok(self.simulate(coordinates.lat, coordinates.lng))
    }
}

/// Observe the weather, substituting the fixed fallback snapshot on failure.
pub fn observe_or_fallback<S: EnvironmentSource + ?Sized>(
    source: &mut S,
    coordinates: Coordinates,
) -> WeatherSnapshot {
    source.observe(coordinates).unwrap_or_else(|e| {
        tracing::warn!("Weather lookup failed, using fallback snapshot: {}", e);
        WeatherSnapshot::fallback()
    })
}
