use log::{trace, warn};
use thiserror::Error;

use super::feedline::{
    loss_per_100ft, matched_loss, mismatch_loss, swr_adjusted_loss
};
use super::mathphysics::{
    gain_to_decimal, reflection_coefficient, to_percent_lost,
    to_transmission_fraction, Decibel, Dbi, Foot, Megahertz,
    MilliwattPerSquareCentimeter, Ratio, Watt
};
use super::station::{CableSpec, FrequencyPoint, StationParameters};


// Power density to distance constant for feet, watts and mW/cm^2.
pub const FAR_FIELD_CONSTANT: f32 = 0.219;

// Numerator of the uncontrolled environment limit 180 / f^2.
const UNCONTROLLED_MPE_NUMERATOR: f32 = 180.0;

// Band where 180 / f^2 is the uncontrolled environment limit.
pub const MPE_FORMULA_MIN_FREQUENCY: Megahertz = 1.34;
pub const MPE_FORMULA_MAX_FREQUENCY: Megahertz = 30.0;


#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExposureError {
    #[error("Matched load transmission fraction {0} lies outside (0, 1]")]
    MatchedFractionOutOfRange(Ratio),
    #[error("Transmission fraction with SWR {0} lies outside (0, 1]")]
    SwrFractionOutOfRange(Ratio),
    #[error(
        "SWR {0} reflects all power back into a lossless feedline, the loss \
        with SWR is undefined"
    )]
    UndefinedSwrLoss(Ratio),
    #[error("Exposure limit {0} mW/cm^2 is not a positive finite number")]
    InvalidMpe(MilliwattPerSquareCentimeter),
    #[error("Safe distance radicand {0} is negative or not finite")]
    InvalidRadicand(f32),
}


fn check_transmission_fraction(
    fraction: Ratio,
    error: fn(Ratio) -> ExposureError
) -> Result<Ratio, ExposureError> {
    if fraction > 0.0 && fraction <= 1.0 {
        Ok(fraction)
    } else {
        Err(error(fraction))
    }
}

/// Uncontrolled environment maximum permissible exposure, `180 / f^2`.
///
/// Only meaningful inside the band reported by `mpe_formula_applies()`.
#[must_use]
pub fn mpe_uncontrolled(frequency: Megahertz) -> MilliwattPerSquareCentimeter {
    UNCONTROLLED_MPE_NUMERATOR / frequency.powi(2)
}

#[must_use]
pub fn mpe_formula_applies(frequency: Megahertz) -> bool {
    (MPE_FORMULA_MIN_FREQUENCY..=MPE_FORMULA_MAX_FREQUENCY)
        .contains(&frequency)
}

/// Distance in feet at which the power density of `average_power` radiated
/// with `gain` drops to `mpe`,
/// `sqrt(0.219 * P * G / MPE)`.
///
/// # Errors
///
/// Will return `Err` if `mpe` is not a positive finite number or the value
/// under the square root is negative or not finite.
pub fn safe_distance(
    average_power: Watt,
    gain: Dbi,
    mpe: MilliwattPerSquareCentimeter
) -> Result<Foot, ExposureError> {
    if !mpe.is_finite() || mpe <= 0.0 {
        return Err(ExposureError::InvalidMpe(mpe));
    }

    let radicand = (FAR_FIELD_CONSTANT * average_power * gain_to_decimal(gain))
        / mpe;

    if !radicand.is_finite() || radicand < 0.0 {
        return Err(ExposureError::InvalidRadicand(radicand));
    }

    Ok(radicand.sqrt())
}


/// How the transmitter power is reduced on its way to the antenna and over
/// the averaging window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerBudget {
    power_lost: Watt,
    peak_envelope_power: Watt,
    average_power: Watt,
}

impl PowerBudget {
    #[must_use]
    pub fn new(percent_lost: Ratio, station: &StationParameters) -> Self {
        let transmitter_power = station.transmitter_power();
        let power_lost = percent_lost * transmitter_power;
        let peak_envelope_power = transmitter_power - power_lost;
        let average_power = peak_envelope_power
            * station.duty_cycle()
            * station.averaging_fraction();

        Self { power_lost, peak_envelope_power, average_power }
    }

    #[must_use]
    pub fn power_lost(&self) -> Watt {
        self.power_lost
    }

    #[must_use]
    pub fn peak_envelope_power(&self) -> Watt {
        self.peak_envelope_power
    }

    /// Power averaged over the uncontrolled environment window.
    #[must_use]
    pub fn average_power(&self) -> Watt {
        self.average_power
    }
}


/// Every intermediate value of one safe distance calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExposureBreakdown {
    pub gamma: Ratio,
    pub loss_per_100ft: Decibel,
    pub matched_loss: Decibel,
    pub matched_fraction: Ratio,
    pub swr_loss: Decibel,
    pub mismatch_loss: Decibel,
    pub percent_lost: Ratio,
    pub power_budget: PowerBudget,
    pub mpe: MilliwattPerSquareCentimeter,
    pub safe_distance: Foot,
}


#[derive(Clone, Copy, Debug)]
pub struct ExposureCalculation<'a> {
    cable: &'a CableSpec,
    station: &'a StationParameters,
}

impl<'a> ExposureCalculation<'a> {
    #[must_use]
    pub fn new(cable: &'a CableSpec, station: &'a StationParameters) -> Self {
        Self { cable, station }
    }

    /// # Errors
    ///
    /// Will return `Err` if a transmission fraction falls outside `(0, 1]`,
    /// the loss with SWR is undefined or the safe distance cannot be taken.
    pub fn run(
        &self,
        point: &FrequencyPoint
    ) -> Result<ExposureBreakdown, ExposureError> {
        let frequency = point.frequency();

        if !mpe_formula_applies(frequency) {
            warn!(
                "{frequency} MHz lies outside {MPE_FORMULA_MIN_FREQUENCY}-\
                {MPE_FORMULA_MAX_FREQUENCY} MHz, the 180/f^2 limit is only \
                an approximation there"
            );
        }

        let gamma = reflection_coefficient(point.swr());
        let loss_per_100ft = loss_per_100ft(frequency, self.cable);
        let matched_loss = matched_loss(
            self.station.feedline_length(),
            loss_per_100ft
        );
        let matched_fraction = check_transmission_fraction(
            to_transmission_fraction(matched_loss),
            ExposureError::MatchedFractionOutOfRange
        )?;

        let swr_loss = swr_adjusted_loss(matched_fraction, gamma.powi(2));
        // Total reflection on a lossless line gives 0 / 0.
        if swr_loss.value().is_nan() {
            return Err(ExposureError::UndefinedSwrLoss(point.swr()));
        }
        let percent_lost = to_percent_lost(swr_loss);
        check_transmission_fraction(
            1.0 - percent_lost,
            ExposureError::SwrFractionOutOfRange
        )?;

        let power_budget = PowerBudget::new(percent_lost, self.station);
        let mpe = mpe_uncontrolled(frequency);
        let safe_distance = safe_distance(
            power_budget.average_power(),
            point.gain(),
            mpe
        )?;

        trace!(
            "{frequency} MHz: gamma {gamma}, matched loss {} dB, \
            SWR loss {} dB, average power {} W, MPE {mpe}, distance \
            {safe_distance} ft",
            matched_loss.value(),
            swr_loss.value(),
            power_budget.average_power(),
        );

        Ok(ExposureBreakdown {
            gamma,
            loss_per_100ft,
            matched_loss,
            matched_fraction,
            swr_loss,
            mismatch_loss: mismatch_loss(swr_loss, matched_loss),
            percent_lost,
            power_budget,
            mpe,
            safe_distance,
        })
    }
}


/// # Errors
///
/// Will return `Err` under the same conditions as `ExposureCalculation::run`.
pub fn uncontrolled_safe_distance(
    point: &FrequencyPoint,
    cable: &CableSpec,
    station: &StationParameters
) -> Result<Foot, ExposureError> {
    ExposureCalculation::new(cable, station)
        .run(point)
        .map(|breakdown| breakdown.safe_distance)
}
