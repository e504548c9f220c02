use crate::types::{Coord, FireEvent, Offset, SpreadPrediction};

/// Descriptive labels attached to every prediction for a region.
#[derive(Debug, Clone, Copy)]
pub struct SpreadLabels<'a> {
    pub direction: &'a str,
    pub timeframe: &'a str,
    pub risk_level: &'a str,
}

/// Project the spread zone from the fire's latest position.
///
/// The zone is a straight line along a fixed bearing: the current position,
/// then the position shifted by each offset in turn. Nothing here looks at
/// intensity or wind.
pub fn predict(current: &FireEvent, offsets: &[Offset; 2], labels: SpreadLabels<'_>) -> SpreadPrediction {
    let origin = current.position;
    let point = |c: Coord| [c.lat, c.lon];

    SpreadPrediction {
        fire_id: current.id,
        direction: labels.direction.to_string(),
        spread_zone: [
            point(origin),
            point(origin.offset(offsets[0])),
            point(origin.offset(offsets[1])),
        ],
        timeframe: labels.timeframe.to_string(),
        risk_level: labels.risk_level.to_string(),
    }
}
