//! Emotional forecasts.
//!
//! A playful "forecast" drawn at random from a fixed table of conditions.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// A forecast condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmotionalForecast {
    /// Table key
    pub key: &'static str,
    /// Headline condition
    pub condition: &'static str,
    /// Nominal intensity percentage
    pub intensity: u8,
    /// Forecast text
    pub description: &'static str,
}

/// All forecast conditions.
pub const FORECASTS: [EmotionalForecast; 6] = [
    EmotionalForecast {
        key: "sunny",
        condition: "Sunny Disposition",
        intensity: 85,
        description: "99% chance of spontaneous joy, with scattered moments of contentment throughout the day.",
    },
    EmotionalForecast {
        key: "cloudy",
        condition: "Mild Existential Dread",
        intensity: 65,
        description: "75% chance of overthinking, clearing up by dinner with possible bursts of motivation.",
    },
    EmotionalForecast {
        key: "rainy",
        condition: "Emotional Drizzle",
        intensity: 45,
        description: "60% chance of melancholy with intermittent periods of introspection and tea consumption.",
    },
    EmotionalForecast {
        key: "stormy",
        condition: "Anxiety Storm",
        intensity: 30,
        description: "90% chance of racing thoughts with possible lightning bolts of panic, subsiding by evening.",
    },
    EmotionalForecast {
        key: "windy",
        condition: "Restless Winds",
        intensity: 55,
        description: "80% chance of fidgeting and inability to focus, with gusts of creative energy.",
    },
    EmotionalForecast {
        key: "snowy",
        condition: "Peaceful Snowfall",
        intensity: 70,
        description: "85% chance of calm reflection with a blanket of serenity covering all worries.",
    },
];

impl Default for EmotionalForecast {
    /// The forecast shown before one has been drawn.
    fn default() -> Self {
        FORECASTS[1]
    }
}

/// Draws forecasts with an injectable random source.
pub struct ForecastGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl ForecastGenerator<ChaCha8Rng> {
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> ForecastGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a forecast uniformly from the table.
    pub fn next_forecast(&mut self) -> EmotionalForecast {
        FORECASTS[self.rng.gen_range(0..FORECASTS.len())]
    }
}
