use crate::config::RegionConfig;
use crate::damage;
use crate::error::ConfigError;
use crate::fire::FireState;
use crate::prediction::{self, SpreadLabels};
use crate::random::{RandomSource, SeededRandom};
use crate::types::{DamageEstimate, FireEvent, SpreadPrediction};
use chrono::{Local, NaiveTime};
use parking_lot::{Mutex, RwLock};

/// The fire and the generator that moves it share one lock, so a jitter step
/// is a single read-modify-write.
struct Tracker<R> {
    fire: FireState,
    rng: R,
}

/// Serves the three read operations for one region.
pub struct TelemetryService<R: RandomSource = SeededRandom> {
    config: RegionConfig,
    tracker: RwLock<Tracker<R>>,
    damage_rng: Mutex<R>,
    clock: fn() -> NaiveTime,
}

fn local_time() -> NaiveTime {
    Local::now().time()
}

impl TelemetryService<SeededRandom> {
    /// Build a service from a region profile.
    ///
    /// With a `seed` in the profile both generators are deterministic; the
    /// damage generator uses the next seed so the two streams differ.
    pub fn new(config: RegionConfig) -> Result<Self, ConfigError> {
        let (fire_rng, damage_rng) = match config.seed {
            Some(seed) => (
                SeededRandom::from_seed(seed),
                SeededRandom::from_seed(seed.wrapping_add(1)),
            ),
            None => (SeededRandom::from_entropy(), SeededRandom::from_entropy()),
        };
        Self::with_random(config, fire_rng, damage_rng)
    }
}

impl<R: RandomSource> TelemetryService<R> {
    /// Build a service around caller-supplied generators.
    pub fn with_random(config: RegionConfig, fire_rng: R, damage_rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let clock: fn() -> NaiveTime = local_time;
        let fire = FireState::new(&config, clock());
        tracing::info!(
            "tracking fire in region '{}' from ({:.4}, {:.4})",
            config.name, config.origin.lat, config.origin.lon
        );

        Ok(Self {
            config,
            tracker: RwLock::new(Tracker { fire, rng: fire_rng }),
            damage_rng: Mutex::new(damage_rng),
            clock,
        })
    }

    /// Replace the wall clock used for `last_update`.
    pub fn with_clock(mut self, clock: fn() -> NaiveTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &RegionConfig {
        &self.config
    }

    /// Advance the fire one jitter step and report it.
    ///
    /// Always a single element; the list shape leaves room for more fires.
    pub fn get_fires(&self) -> Vec<FireEvent> {
        let mut guard = self.tracker.write();
        let now = (self.clock)();
        let Tracker { fire, rng } = &mut *guard;
        let ev = fire.advance(rng, self.config.jitter_range, &self.config.intensity_labels, now);
        vec![ev]
    }

    /// Spread zone anchored at the latest observed position. Does not move the fire.
    pub fn get_prediction(&self) -> SpreadPrediction {
        let current = self.tracker.read().fire.current();
        prediction::predict(
            &current,
            &self.config.bearing_offsets,
            SpreadLabels {
                direction: &self.config.direction,
                timeframe: &self.config.timeframe,
                risk_level: &self.config.risk_level,
            },
        )
    }

    pub fn get_damage(&self) -> DamageEstimate {
        let mut rng = self.damage_rng.lock();
        damage::estimate(&mut *rng, self.config.area_range, self.config.cost_per_km2)
    }
}
