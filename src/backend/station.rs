use thiserror::Error;

use super::mathphysics::{Dbi, Foot, Megahertz, Ratio, Watt};


#[derive(Clone, Debug, Error, PartialEq)]
pub enum StationError {
    #[error("Cable coefficient k1 must be a non-negative number, got {0}")]
    InvalidLossCoefficient(f32),
    #[error("Cable coefficient k2 must be a number not below -1, got {0}")]
    InvalidFrequencyCoefficient(f32),
    #[error("Frequency must be positive, got {0} MHz")]
    NonPositiveFrequency(Megahertz),
    #[error("SWR must be at least 1, got {0}")]
    InvalidSwr(Ratio),
    #[error("Antenna gain must be a finite number, got {0} dBi")]
    InvalidGain(Dbi),
    #[error("Transmitter power must be non-negative, got {0} W")]
    NegativeTransmitterPower(Watt),
    #[error("Feedline length must be non-negative, got {0} ft")]
    NegativeFeedlineLength(Foot),
    #[error("Duty cycle must lie in [0, 1], got {0}")]
    DutyCycleOutOfRange(Ratio),
    #[error("Averaging fraction must lie in [0, 1], got {0}")]
    AveragingFractionOutOfRange(Ratio),
}


fn is_fraction(value: Ratio) -> bool {
    (0.0..=1.0).contains(&value)
}


/// Empirical loss coefficients of a feedline type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CableSpec {
    k1: f32,
    k2: f32,
}

impl CableSpec {
    /// # Errors
    ///
    /// Will return `Err` if `k1` is negative or `k2` is below -1 (the loss
    /// radicand would be negative at every frequency), or if either is not
    /// finite.
    pub fn build(k1: f32, k2: f32) -> Result<Self, StationError> {
        if !k1.is_finite() || k1 < 0.0 {
            return Err(StationError::InvalidLossCoefficient(k1));
        }
        if !k2.is_finite() || k2 < -1.0 {
            return Err(StationError::InvalidFrequencyCoefficient(k2));
        }

        Ok(Self { k1, k2 })
    }

    #[must_use]
    pub fn k1(&self) -> f32 {
        self.k1
    }

    #[must_use]
    pub fn k2(&self) -> f32 {
        self.k2
    }
}


/// One channel of interest: its frequency, the SWR measured there and the
/// antenna gain in that band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyPoint {
    frequency: Megahertz,
    swr: Ratio,
    gain: Dbi,
}

impl FrequencyPoint {
    /// # Errors
    ///
    /// Will return `Err` if frequency is not positive, SWR is below 1 or
    /// any value is not finite.
    pub fn build(
        frequency: Megahertz,
        swr: Ratio,
        gain: Dbi
    ) -> Result<Self, StationError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(StationError::NonPositiveFrequency(frequency));
        }
        if !swr.is_finite() || swr < 1.0 {
            return Err(StationError::InvalidSwr(swr));
        }
        if !gain.is_finite() {
            return Err(StationError::InvalidGain(gain));
        }

        Ok(Self { frequency, swr, gain })
    }

    #[must_use]
    pub fn frequency(&self) -> Megahertz {
        self.frequency
    }

    #[must_use]
    pub fn swr(&self) -> Ratio {
        self.swr
    }

    #[must_use]
    pub fn gain(&self) -> Dbi {
        self.gain
    }
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationParameters {
    transmitter_power: Watt,
    feedline_length: Foot,
    duty_cycle: Ratio,
    averaging_fraction: Ratio,
}

impl StationParameters {
    /// # Errors
    ///
    /// Will return `Err` if power or feedline length is negative, if duty
    /// cycle or averaging fraction lies outside `[0, 1]`, or if any value is
    /// not finite.
    pub fn build(
        transmitter_power: Watt,
        feedline_length: Foot,
        duty_cycle: Ratio,
        averaging_fraction: Ratio,
    ) -> Result<Self, StationError> {
        if !transmitter_power.is_finite() || transmitter_power < 0.0 {
            return Err(
                StationError::NegativeTransmitterPower(transmitter_power)
            );
        }
        if !feedline_length.is_finite() || feedline_length < 0.0 {
            return Err(StationError::NegativeFeedlineLength(feedline_length));
        }
        if !is_fraction(duty_cycle) {
            return Err(StationError::DutyCycleOutOfRange(duty_cycle));
        }
        if !is_fraction(averaging_fraction) {
            return Err(
                StationError::AveragingFractionOutOfRange(averaging_fraction)
            );
        }

        Ok(Self {
            transmitter_power,
            feedline_length,
            duty_cycle,
            averaging_fraction
        })
    }

    #[must_use]
    pub fn transmitter_power(&self) -> Watt {
        self.transmitter_power
    }

    #[must_use]
    pub fn feedline_length(&self) -> Foot {
        self.feedline_length
    }

    #[must_use]
    pub fn duty_cycle(&self) -> Ratio {
        self.duty_cycle
    }

    /// Share of the uncontrolled 30 minute averaging window spent
    /// transmitting.
    #[must_use]
    pub fn averaging_fraction(&self) -> Ratio {
        self.averaging_fraction
    }
}
