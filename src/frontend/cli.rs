use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use thiserror::Error;

use crate::backend::exposure::{
    uncontrolled_safe_distance, ExposureCalculation, ExposureError
};
use crate::backend::mathphysics::Megahertz;
use crate::backend::station::{
    CableSpec, FrequencyPoint, StationError, StationParameters
};

use super::dataset::{
    default_frequency_points, frequency_points, DEFAULT_AVERAGING_FRACTION,
    DEFAULT_CABLE_K1, DEFAULT_CABLE_K2, DEFAULT_DUTY_CYCLE,
    DEFAULT_FEEDLINE_LENGTH, DEFAULT_TRANSMITTER_POWER
};
use super::report::{breakdown_table, distance_lines};


const ARG_AVERAGING: &str     = "averaging fraction";
const ARG_BREAKDOWN: &str     = "breakdown";
const ARG_CABLE_K1: &str      = "cable k1";
const ARG_CABLE_K2: &str      = "cable k2";
const ARG_DUTY_CYCLE: &str    = "duty cycle";
const ARG_FEEDLINE_LENGTH: &str = "feedline length";
const ARG_FREQUENCY: &str     = "frequency";
const ARG_GAIN: &str          = "antenna gain";
const ARG_SWR: &str           = "swr";
const ARG_TX_POWER: &str      = "transmitter power";


#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] StationError),
    #[error("Failed to compute safe distance at {frequency} MHz: {source}")]
    Exposure {
        frequency: Megahertz,
        #[source]
        source: ExposureError,
    },
}


fn number_arg(id: &'static str, long: &'static str, help: String) -> Arg {
    Arg::new(id)
        .long(long)
        .value_parser(clap::value_parser!(f32))
        .allow_negative_numbers(true)
        .help(help)
}

#[must_use]
pub fn command() -> Command {
    Command::new("rf_exposure")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Computes uncontrolled environment RF exposure safe distances \
            (in feet) for a set of amateur radio frequencies."
        )
        .arg(
            number_arg(
                ARG_TX_POWER,
                "power",
                format!(
                    "Set the transmitter power in W \
                    [default: {DEFAULT_TRANSMITTER_POWER}]"
                )
            )
            .short('p')
        )
        .arg(
            number_arg(
                ARG_FEEDLINE_LENGTH,
                "length",
                format!(
                    "Set the feedline length in ft \
                    [default: {DEFAULT_FEEDLINE_LENGTH}]"
                )
            )
            .short('l')
        )
        .arg(
            number_arg(
                ARG_DUTY_CYCLE,
                "duty-cycle",
                format!(
                    "Set the transmitter duty cycle in [0, 1] \
                    [default: {DEFAULT_DUTY_CYCLE}]"
                )
            )
            .short('d')
        )
        .arg(
            number_arg(
                ARG_AVERAGING,
                "averaging",
                format!(
                    "Set the share of the 30 minute uncontrolled averaging \
                    window spent transmitting [default: \
                    {DEFAULT_AVERAGING_FRACTION}]"
                )
            )
            .short('a')
        )
        .arg(
            number_arg(
                ARG_CABLE_K1,
                "k1",
                format!(
                    "Set the cable loss coefficient k1 \
                    [default: {DEFAULT_CABLE_K1}]"
                )
            )
        )
        .arg(
            number_arg(
                ARG_CABLE_K2,
                "k2",
                format!(
                    "Set the cable loss coefficient k2 \
                    [default: {DEFAULT_CABLE_K2}]"
                )
            )
        )
        .arg(
            number_arg(
                ARG_FREQUENCY,
                "frequency",
                "Compute a single point at this frequency in MHz instead of \
                the default band list".to_string()
            )
            .short('f')
            .requires(ARG_SWR)
            .requires(ARG_GAIN)
        )
        .arg(
            number_arg(
                ARG_SWR,
                "swr",
                "Set the SWR of the single point".to_string()
            )
            .short('s')
            .requires(ARG_FREQUENCY)
            .requires(ARG_GAIN)
        )
        .arg(
            number_arg(
                ARG_GAIN,
                "gain",
                "Set the antenna gain in dBi of the single point".to_string()
            )
            .short('g')
            .requires(ARG_FREQUENCY)
            .requires(ARG_SWR)
        )
        .arg(
            Arg::new(ARG_BREAKDOWN)
                .short('b')
                .long("breakdown")
                .action(ArgAction::SetTrue)
                .help("Print every intermediate value as a table")
        )
}

/// Parses the process arguments, runs the calculation and prints the
/// result to stdout.
///
/// # Errors
///
/// Will return `Err` if a parameter is invalid or a calculation fails.
pub fn cli() -> Result<(), CliError> {
    let matches = command().get_matches();

    for line in handle_arguments(&matches)? {
        println!("{line}");
    }

    Ok(())
}

fn exposure_error(
    point: &FrequencyPoint
) -> impl FnOnce(ExposureError) -> CliError {
    let frequency = point.frequency();

    move |source| CliError::Exposure { frequency, source }
}

fn number_or(matches: &ArgMatches, id: &str, default: f32) -> f32 {
    matches
        .get_one::<f32>(id)
        .copied()
        .unwrap_or(default)
}

fn station_from(
    matches: &ArgMatches
) -> Result<StationParameters, StationError> {
    StationParameters::build(
        number_or(matches, ARG_TX_POWER, DEFAULT_TRANSMITTER_POWER),
        number_or(matches, ARG_FEEDLINE_LENGTH, DEFAULT_FEEDLINE_LENGTH),
        number_or(matches, ARG_DUTY_CYCLE, DEFAULT_DUTY_CYCLE),
        number_or(matches, ARG_AVERAGING, DEFAULT_AVERAGING_FRACTION),
    )
}

fn cable_from(matches: &ArgMatches) -> Result<CableSpec, StationError> {
    CableSpec::build(
        number_or(matches, ARG_CABLE_K1, DEFAULT_CABLE_K1),
        number_or(matches, ARG_CABLE_K2, DEFAULT_CABLE_K2),
    )
}

fn points_from(
    matches: &ArgMatches
) -> Result<Vec<FrequencyPoint>, StationError> {
    let single_point = (
        matches.get_one::<f32>(ARG_FREQUENCY),
        matches.get_one::<f32>(ARG_SWR),
        matches.get_one::<f32>(ARG_GAIN),
    );

    match single_point {
        (Some(&frequency), Some(&swr), Some(&gain)) => {
            frequency_points(&[(frequency, swr, gain)])
        }
        _ => default_frequency_points(),
    }
}

/// Output lines for already parsed arguments.
///
/// # Errors
///
/// Will return `Err` if a parameter is invalid or a calculation fails.
pub fn handle_arguments(
    matches: &ArgMatches
) -> Result<Vec<String>, CliError> {
    let station = station_from(matches)?;
    let cable = cable_from(matches)?;
    let points = points_from(matches)?;

    debug!("{station:?}, {cable:?}");
    info!("Computing safe distances for {} frequency points", points.len());

    if matches.get_flag(ARG_BREAKDOWN) {
        let calculation = ExposureCalculation::new(&cable, &station);
        let breakdowns = points
            .iter()
            .map(|point| calculation.run(point).map_err(exposure_error(point)))
            .collect::<Result<Vec<_>, _>>()?;

        return Ok(breakdown_table(&points, &breakdowns));
    }

    let distances = points
        .iter()
        .map(|point| {
            uncontrolled_safe_distance(point, &cable, &station)
                .map_err(exposure_error(point))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(distance_lines(&distances))
}
