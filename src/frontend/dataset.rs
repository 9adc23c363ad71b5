use crate::backend::mathphysics::{Dbi, Foot, Megahertz, Ratio, Watt};
use crate::backend::station::{FrequencyPoint, StationError};


pub const DEFAULT_CABLE_K1: f32 = 0.122_290;
pub const DEFAULT_CABLE_K2: f32 = 0.000_260;

pub const DEFAULT_TRANSMITTER_POWER: Watt = 1_000.0;
pub const DEFAULT_FEEDLINE_LENGTH: Foot   = 73.0;
pub const DEFAULT_DUTY_CYCLE: Ratio       = 0.5;
pub const DEFAULT_AVERAGING_FRACTION: Ratio = 0.5;

// Frequency, SWR and antenna gain of each band of interest.
pub const DEFAULT_FREQUENCY_POINTS: [(Megahertz, Ratio, Dbi); 6] = [
    (7.3, 2.25, 1.5),
    (14.35, 1.35, 1.5),
    (18.1, 3.7, 1.5),
    (21.45, 4.45, 1.5),
    (24.99, 4.1, 1.5),
    (29.7, 2.18, 4.5),
];


/// # Errors
///
/// Will return `Err` on the first point rejected by `FrequencyPoint::build`.
pub fn frequency_points(
    values: &[(Megahertz, Ratio, Dbi)]
) -> Result<Vec<FrequencyPoint>, StationError> {
    values
        .iter()
        .map(|&(frequency, swr, gain)| {
            FrequencyPoint::build(frequency, swr, gain)
        })
        .collect()
}

/// # Errors
///
/// Will return `Err` if a default point is invalid.
pub fn default_frequency_points() -> Result<Vec<FrequencyPoint>, StationError> {
    frequency_points(&DEFAULT_FREQUENCY_POINTS)
}
