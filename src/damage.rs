use crate::config::AreaRange;
use crate::random::RandomSource;
use crate::types::DamageEstimate;

pub const CURRENCY: &str = "USD";

/// Round to whole cents, halves away from zero.
pub fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Sample an affected area and price it.
///
/// The area is reported exactly as sampled so that
/// `estimated_damage_usd == round_cents(area_affected_km2 * cost_per_km2)`.
pub fn estimate<R: RandomSource>(rng: &mut R, area: AreaRange, cost_per_km2: f64) -> DamageEstimate {
    let area_km2 = rng.uniform(area.min, area.max);
    let damage = round_cents(area_km2 * cost_per_km2);

    tracing::debug!("damage sample area={:.3}km2 damage=${:.2}", area_km2, damage);

    DamageEstimate {
        estimated_damage_usd: damage,
        area_affected_km2: area_km2,
        currency: CURRENCY.to_string(),
    }
}
