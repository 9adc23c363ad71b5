use crate::backend::exposure::ExposureBreakdown;
use crate::backend::mathphysics::Foot;
use crate::backend::station::FrequencyPoint;


const BREAKDOWN_HEADER: &str = "Frequency\tSWR\tGain\tGamma\tLossPer100ft\t\
    MatchedLoss\tMatchedFraction\tSwrLoss\tMismatchLoss\tPercentLost\t\
    PowerLost\tPEP\tAveragePower\tMPE\tDistance";


#[must_use]
pub fn format_distance(distance: Foot) -> String {
    format!("{distance:.2}")
}

#[must_use]
pub fn distance_lines(distances: &[Foot]) -> Vec<String> {
    distances
        .iter()
        .map(|distance| format_distance(*distance))
        .collect()
}

#[must_use]
pub fn breakdown_table(
    points: &[FrequencyPoint],
    breakdowns: &[ExposureBreakdown]
) -> Vec<String> {
    let mut lines = vec![BREAKDOWN_HEADER.to_string()];

    for (point, breakdown) in points.iter().zip(breakdowns) {
        let budget = &breakdown.power_budget;

        lines.push(format!(
            "{}\t{}\t{}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t\
            {:.2}\t{:.2}\t{:.2}\t{:.4}\t{}",
            point.frequency(),
            point.swr(),
            point.gain(),
            breakdown.gamma,
            breakdown.loss_per_100ft.value(),
            breakdown.matched_loss.value(),
            breakdown.matched_fraction,
            breakdown.swr_loss.value(),
            breakdown.mismatch_loss.value(),
            breakdown.percent_lost,
            budget.power_lost(),
            budget.peak_envelope_power(),
            budget.average_power(),
            breakdown.mpe,
            format_distance(breakdown.safe_distance),
        ));
    }

    lines
}


#[cfg(test)]
mod tests {
    use crate::backend::exposure::ExposureCalculation;
    use crate::backend::station::{CableSpec, StationParameters};
    use crate::frontend::dataset::{
        default_frequency_points, DEFAULT_AVERAGING_FRACTION, DEFAULT_CABLE_K1,
        DEFAULT_CABLE_K2, DEFAULT_DUTY_CYCLE, DEFAULT_FEEDLINE_LENGTH,
        DEFAULT_TRANSMITTER_POWER
    };

    use super::*;


    fn default_breakdowns() -> (Vec<FrequencyPoint>, Vec<ExposureBreakdown>) {
        let cable = CableSpec::build(DEFAULT_CABLE_K1, DEFAULT_CABLE_K2)
            .unwrap();
        let station = StationParameters::build(
            DEFAULT_TRANSMITTER_POWER,
            DEFAULT_FEEDLINE_LENGTH,
            DEFAULT_DUTY_CYCLE,
            DEFAULT_AVERAGING_FRACTION,
        ).unwrap();
        let points = default_frequency_points().unwrap();
        let calculation = ExposureCalculation::new(&cable, &station);

        let breakdowns = points
            .iter()
            .map(|point| calculation.run(point).unwrap())
            .collect();

        (points, breakdowns)
    }

    #[test]
    fn two_decimal_places() {
        assert_eq!("12.34", format_distance(12.344));
        assert_eq!("0.00", format_distance(0.0));
        assert_eq!("5.00", format_distance(5.0));
        assert_eq!("25.59", format_distance(25.593_647));
    }

    #[test]
    fn default_dataset_output() {
        let (_, breakdowns) = default_breakdowns();
        let distances: Vec<Foot> = breakdowns
            .iter()
            .map(|breakdown| breakdown.safe_distance)
            .collect();

        let lines = distance_lines(&distances);

        assert_eq!(
            vec!["4.61", "9.03", "10.93", "12.69", "14.78", "25.59"],
            lines
        );
        for line in &lines {
            let value: f32 = line.parse().unwrap();

            assert!(value.is_finite() && value >= 0.0);
            assert_eq!(Some(2), line.split('.').nth(1).map(str::len));
        }
    }

    #[test]
    fn breakdown_table_layout() {
        let (points, breakdowns) = default_breakdowns();

        let table = breakdown_table(&points, &breakdowns);

        assert_eq!(7, table.len());
        assert_eq!(BREAKDOWN_HEADER, table[0]);

        let columns = BREAKDOWN_HEADER.split('\t').count();
        for row in &table[1..] {
            assert_eq!(columns, row.split('\t').count());
        }
        assert!(table[1].starts_with("7.3\t2.25\t1.5\t"));
        assert!(table[1].ends_with("\t4.61"));
    }
}
