use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Shift this coordinate by an offset in degrees.
    pub fn offset(self, by: Offset) -> Self {
        Self {
            lat: self.lat + by.dlat,
            lon: self.lon + by.dlon,
        }
    }
}

/// A displacement in degrees, serialized as `[dlat, dlon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Offset {
    pub dlat: f64,
    pub dlon: f64,
}

impl From<[f64; 2]> for Offset {
    fn from([dlat, dlon]: [f64; 2]) -> Self {
        Self { dlat, dlon }
    }
}

impl From<Offset> for [f64; 2] {
    fn from(o: Offset) -> Self {
        [o.dlat, o.dlon]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireStatus {
    Active,
}

/// Observable state of the tracked fire, as served on `/fires`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireEvent {
    pub id: u32,
    #[serde(flatten)]
    pub position: Coord,
    pub intensity: Intensity,
    pub status: FireStatus,
    pub detected_by: String,
    pub tree_type: String,
    pub tree_density: String,
    /// Wall-clock time of the latest jitter step, `HH:MM:SS`.
    pub last_update: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadPrediction {
    pub fire_id: u32,
    pub direction: String,
    /// Current position followed by two projected points, each `[lat, lon]`.
    pub spread_zone: [[f64; 2]; 3],
    pub timeframe: String,
    pub risk_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageEstimate {
    pub estimated_damage_usd: f64,
    pub area_affected_km2: f64,
    pub currency: String,
}
