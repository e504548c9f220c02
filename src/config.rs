use crate::error::ConfigError;
use crate::types::{Coord, Intensity, Offset};
use serde::Deserialize;
use std::{fs, path::{Path, PathBuf}};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AreaRange {
    pub min: f64,
    pub max: f64,
}

/// Optional clamp box for the random walk. Absent means unbounded drift.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    pub fn clamp(&self, c: Coord) -> Coord {
        Coord {
            lat: c.lat.clamp(self.min_lat, self.max_lat),
            lon: c.lon.clamp(self.min_lon, self.max_lon),
        }
    }
}

/// Everything region-specific about the simulated fire.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RegionConfig {
    pub name: String,
    pub origin: Coord,
    pub initial_intensity: Intensity,
    /// Largest per-poll step, in degrees, on each axis.
    pub jitter_range: f64,
    pub bearing_offsets: [Offset; 2],
    pub area_range: AreaRange,
    pub cost_per_km2: f64,
    pub intensity_labels: Vec<Intensity>,
    pub detected_by: String,
    pub tree_type: String,
    pub tree_density: String,
    pub direction: String,
    pub timeframe: String,
    pub risk_level: String,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RegionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let cfg: RegionConfig = serde_json::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Northern California profile: fast drift, $25k per km².
    pub fn california() -> Self {
        Self {
            name: "california".to_string(),
            origin: Coord::new(37.7749, -122.4194),
            initial_intensity: Intensity::High,
            jitter_range: 0.01,
            bearing_offsets: [
                Offset { dlat: 0.0251, dlon: 0.0394 },
                Offset { dlat: 0.0751, dlon: 0.0694 },
            ],
            area_range: AreaRange { min: 50.0, max: 150.0 },
            cost_per_km2: 25_000.0,
            intensity_labels: vec![Intensity::Moderate, Intensity::High, Intensity::VeryHigh],
            detected_by: "AI Orbit Satellite-V1".to_string(),
            tree_type: "Coast Redwood & Douglas Fir".to_string(),
            tree_density: "High".to_string(),
            direction: "North-East".to_string(),
            timeframe: "6-12h".to_string(),
            risk_level: "High".to_string(),
            bounds: None,
            seed: None,
        }
    }

    /// Refuse profiles that could only ever serve nonsense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("origin.lat", self.origin.lat),
            ("origin.lon", self.origin.lon),
            ("jitter_range", self.jitter_range),
            ("area_range.min", self.area_range.min),
            ("area_range.max", self.area_range.max),
            ("cost_per_km2", self.cost_per_km2),
            ("bearing_offsets[0].dlat", self.bearing_offsets[0].dlat),
            ("bearing_offsets[0].dlon", self.bearing_offsets[0].dlon),
            ("bearing_offsets[1].dlat", self.bearing_offsets[1].dlat),
            ("bearing_offsets[1].dlon", self.bearing_offsets[1].dlon),
        ];
        for (field, v) in finite {
            if !v.is_finite() {
                return Err(ConfigError::NotFinite(field));
            }
        }

        if self.area_range.min > self.area_range.max {
            return Err(ConfigError::InvertedAreaRange {
                min: self.area_range.min,
                max: self.area_range.max,
            });
        }
        if self.intensity_labels.is_empty() {
            return Err(ConfigError::NoIntensities);
        }
        if self.jitter_range < 0.0 {
            return Err(ConfigError::NegativeJitter(self.jitter_range));
        }
        if self.cost_per_km2 < 0.0 {
            return Err(ConfigError::NegativeCost(self.cost_per_km2));
        }

        // The generator samples across the full width, which must itself be finite.
        if !(self.area_range.max - self.area_range.min).is_finite() {
            return Err(ConfigError::RangeTooWide("area_range"));
        }
        if !(2.0 * self.jitter_range).is_finite() {
            return Err(ConfigError::RangeTooWide("jitter_range"));
        }

        if let Some(b) = self.bounds {
            if !(b.min_lat <= b.max_lat) {
                return Err(ConfigError::InvertedBounds("latitude"));
            }
            if !(b.min_lon <= b.max_lon) {
                return Err(ConfigError::InvertedBounds("longitude"));
            }
        }

        Ok(())
    }
}

/// Find a region profile by name: `regions/<name>.json` next to the working
/// directory first, then next to the executable.
pub fn resolve_region_path(name: &str) -> Option<PathBuf> {
    let file = format!("{}.json", name);
    let candidates = [
        PathBuf::from("regions").join(&file),
        {
            let mut p = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
            p.pop(); // exe dir
            p.push("regions");
            p.push(&file);
            p
        },
    ];

    candidates.into_iter().find(|c| c.exists())
}
