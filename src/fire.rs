use crate::config::{Bounds, RegionConfig};
use crate::random::RandomSource;
use crate::types::{FireEvent, FireStatus, Intensity};
use chrono::NaiveTime;

/// The single fire all endpoints report on.
pub const FIRE_ID: u32 = 1;

/// Format used for `last_update`.
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Mutable record of the tracked fire. Only `advance` changes it.
#[derive(Debug, Clone)]
pub struct FireState {
    event: FireEvent,
    bounds: Option<Bounds>,
}

impl FireState {
    /// Seed the fire at the region's origin with its starting intensity.
    pub fn new(cfg: &RegionConfig, started: NaiveTime) -> Self {
        Self {
            event: FireEvent {
                id: FIRE_ID,
                position: cfg.origin,
                intensity: cfg.initial_intensity,
                status: FireStatus::Active,
                detected_by: cfg.detected_by.clone(),
                tree_type: cfg.tree_type.clone(),
                tree_density: cfg.tree_density.clone(),
                last_update: format_time(started),
            },
            bounds: cfg.bounds,
        }
    }

    /// One jitter step: nudge each axis by at most `jitter_range`, redraw the
    /// intensity, stamp the time and hand back a copy.
    pub fn advance<R: RandomSource>(
        &mut self,
        rng: &mut R,
        jitter_range: f64,
        intensities: &[Intensity],
        now: NaiveTime,
    ) -> FireEvent {
        let dlat = rng.uniform(-jitter_range, jitter_range);
        let dlon = rng.uniform(-jitter_range, jitter_range);

        let mut pos = self.event.position;
        pos.lat += dlat;
        pos.lon += dlon;
        if let Some(b) = &self.bounds {
            pos = b.clamp(pos);
        }
        self.event.position = pos;

        if let Some(i) = rng.choice(intensities) {
            self.event.intensity = i;
        }
        self.event.last_update = format_time(now);

        tracing::debug!(
            "fire {} moved by ({:+.5}, {:+.5}) to ({:.5}, {:.5}) intensity={:?}",
            self.event.id, dlat, dlon, pos.lat, pos.lon, self.event.intensity
        );

        self.event.clone()
    }

    pub fn current(&self) -> FireEvent {
        self.event.clone()
    }
}
