//! Local emotional climate.
//!
//! Summaries derived from the mood journal. Nothing here is persisted; every
//! value is recomputed on demand.

pub mod aggregator;
pub mod forecast;
pub mod insights;

use serde::{Deserialize, Serialize};

pub use aggregator::{summarize, WINDOW_SIZE};
pub use forecast::{EmotionalForecast, ForecastGenerator, FORECASTS};
pub use insights::{recent_reports, JournalInsights, RECENT_REPORTS};

/// Direction of the latest change in intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Improving => write!(f, "improving"),
            Trend::Declining => write!(f, "declining"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Band an average intensity falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityBand {
    /// 70 and above
    High,
    /// 40 to 69
    Moderate,
    /// Below 40
    Low,
}

impl IntensityBand {
    pub fn from_average(average: u32) -> Self {
        if average >= 70 {
            IntensityBand::High
        } else if average >= 40 {
            IntensityBand::Moderate
        } else {
            IntensityBand::Low
        }
    }
}

/// Summary of the recent mood reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateSummary {
    /// Rounded mean intensity over the window
    pub average_intensity: u32,
    /// Most frequent mood in the window
    pub dominant_mood: String,
    /// Number of reports in the window
    pub total_reports: usize,
    /// Latest change in intensity
    pub trend: Trend,
}

impl ClimateSummary {
    pub fn intensity_band(&self) -> IntensityBand {
        IntensityBand::from_average(self.average_intensity)
    }

    /// Describe the climate in a sentence or two.
    pub fn narrative(&self, location: &str) -> String {
        let outlook = match self.trend {
            Trend::Improving => "The community mood is trending upward!",
            Trend::Declining => "The community mood needs some sunshine.",
            Trend::Stable => "The emotional climate is steady.",
        };
        format!(
            "The emotional atmosphere in {} is predominantly {}. {}",
            location, self.dominant_mood, outlook
        )
    }
}
