//! Simulated wildfire telemetry: one tracked fire that drifts a little on every
//! poll, a straight-line spread projection, and sampled damage estimates.

pub mod config;
pub mod damage;
pub mod error;
pub mod fire;
pub mod http;
pub mod prediction;
pub mod random;
pub mod service;
pub mod types;

pub use config::{AreaRange, Bounds, RegionConfig};
pub use error::ConfigError;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use service::TelemetryService;
pub use types::{Coord, DamageEstimate, FireEvent, FireStatus, Intensity, Offset, SpreadPrediction};
