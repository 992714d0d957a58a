//! Qualitative readings of a weather snapshot.

use serde::{Deserialize, Serialize};

use super::WeatherSnapshot;

/// UV exposure level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvLevel {
    pub fn from_index(uv_index: i32) -> Self {
        match uv_index {
            i32::MIN..=2 => UvLevel::Low,
            3..=5 => UvLevel::Moderate,
            6..=7 => UvLevel::High,
            8..=10 => UvLevel::VeryHigh,
            _ => UvLevel::Extreme,
        }
    }
}

impl std::fmt::Display for UvLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UvLevel::Low => write!(f, "Low"),
            UvLevel::Moderate => write!(f, "Moderate"),
            UvLevel::High => write!(f, "High"),
            UvLevel::VeryHigh => write!(f, "Very High"),
            UvLevel::Extreme => write!(f, "Extreme"),
        }
    }
}

/// Humidity comfort level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityLevel {
    Low,
    Comfortable,
    High,
}

impl HumidityLevel {
    pub fn from_percent(humidity: i32) -> Self {
        if humidity < 30 {
            HumidityLevel::Low
        } else if humidity <= 60 {
            HumidityLevel::Comfortable
        } else {
            HumidityLevel::High
        }
    }
}

impl std::fmt::Display for HumidityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HumidityLevel::Low => write!(f, "Low"),
            HumidityLevel::Comfortable => write!(f, "Comfortable"),
            HumidityLevel::High => write!(f, "High"),
        }
    }
}

/// Notes on how the current weather may affect mood, in display order.
pub fn mood_notes(snapshot: &WeatherSnapshot) -> Vec<&'static str> {
    let mut notes = Vec::new();
    let (temp, humidity, uv) = (snapshot.temperature, snapshot.humidity, snapshot.uv_index);

    if temp > 25 && uv > 6 {
        notes.push("Sunny and warm. High temperatures and UV levels often boost mood and energy.");
    }
    if temp < 15 && humidity > 70 {
        notes.push("Cool and humid conditions may encourage introspection and cozy indoor activities.");
    }
    if (15..=25).contains(&temp) && humidity < 60 {
        notes.push("Comfortable temperature and humidity make for ideal outdoor conditions.");
    }
    if uv <= 2 {
        notes.push("Low UV levels make extended outdoor time safe without sun protection.");
    }
    if uv > 8 {
        notes.push("High UV levels, remember sun protection if spending time outdoors.");
    }

    notes
}
