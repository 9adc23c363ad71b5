pub use decibel::*;
pub use unit::*;


pub mod decibel;
pub mod unit;


/// Magnitude of the voltage reflection coefficient at a mismatch with the
/// given standing wave ratio, `|(SWR - 1) / (SWR + 1)|`.
///
/// Callers pass an SWR of at least 1 (see `FrequencyPoint::build`), so the
/// result lies in `[0, 1)`.
#[must_use]
pub fn reflection_coefficient(swr: Ratio) -> Ratio {
    ((swr - 1.0) / (swr + 1.0)).abs()
}

/// Fraction of the incident power that gets through a loss of `loss` dB,
/// `10^(-dB / 10)`.
#[must_use]
pub fn to_transmission_fraction(loss: Decibel) -> Ratio {
    (-loss).power_ratio()
}

/// Fraction of the incident power that does NOT get through a loss of
/// `loss` dB, `(100 - 100 / 10^(dB / 10)) / 100`.
///
/// Complements `to_transmission_fraction()` for the same loss; the pipeline
/// uses it only for the SWR adjusted loss.
#[must_use]
pub fn to_percent_lost(loss: Decibel) -> Ratio {
    percent_to_ratio(100.0 - 100.0 / loss.power_ratio())
}

#[must_use]
pub fn gain_to_decimal(gain: Dbi) -> Ratio {
    Decibel::new(gain).power_ratio()
}
