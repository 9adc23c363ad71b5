use super::mathphysics::{
    length_in_reference_units, Decibel, Foot, Megahertz, Ratio
};
use super::station::CableSpec;


/// Matched load loss of 100 ft of cable at `frequency`,
/// `k1 * sqrt(f + k2 * f)`.
#[must_use]
pub fn loss_per_100ft(frequency: Megahertz, cable: &CableSpec) -> Decibel {
    Decibel::new(
        cable.k1() * cable.k2().mul_add(frequency, frequency).sqrt()
    )
}

#[must_use]
pub fn matched_loss(length: Foot, loss_per_100ft: Decibel) -> Decibel {
    loss_per_100ft * length_in_reference_units(length)
}

/// Total line loss once the power reflected by the antenna is accounted
/// for, `-10 * log10(p * (1 - G^2) / (1 - p^2 * G^2))`, where `p` is the
/// matched load transmission fraction and `G^2` the squared reflection
/// coefficient.
///
/// Never less than the matched load loss; equal to it when `G^2` is 0.
#[must_use]
pub fn swr_adjusted_loss(
    matched_fraction: Ratio,
    gamma_squared: Ratio
) -> Decibel {
    let delivered = matched_fraction
        * ((1.0 - gamma_squared)
            / (1.0 - matched_fraction.powi(2) * gamma_squared));

    -Decibel::from_power_ratio(delivered)
}

/// Extra loss caused by the mismatch on top of the matched load loss.
#[must_use]
pub fn mismatch_loss(swr_loss: Decibel, matched_loss: Decibel) -> Decibel {
    swr_loss - matched_loss
}


#[cfg(test)]
mod tests {
    use crate::backend::mathphysics::{
        reflection_coefficient, to_transmission_fraction
    };

    use super::*;


    fn reference_cable() -> CableSpec {
        CableSpec::build(0.122_29, 0.000_26).unwrap()
    }

    #[test]
    fn loss_grows_with_frequency() {
        let cable = reference_cable();

        let low = loss_per_100ft(7.3, &cable);
        let high = loss_per_100ft(29.7, &cable);

        assert!((low.value() - 0.330_46).abs() < 1e-4);
        assert!(high > low);
    }

    #[test]
    fn lossless_cable() {
        let cable = CableSpec::build(0.0, 0.0).unwrap();

        assert_eq!(Decibel::default(), loss_per_100ft(14.0, &cable));
    }

    #[test]
    fn matched_loss_scales_with_length() {
        let per_100ft = Decibel::new(0.5);

        assert_eq!(Decibel::default(), matched_loss(0.0, per_100ft));
        assert_eq!(Decibel::new(0.5), matched_loss(100.0, per_100ft));
        assert_eq!(Decibel::new(1.0), matched_loss(200.0, per_100ft));

        let mut previous = matched_loss(0.0, per_100ft);
        for length in (10..=500).step_by(10) {
            let current = matched_loss(length as Foot, per_100ft);

            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn swr_loss_equals_matched_loss_at_perfect_match() {
        let cable = reference_cable();
        let loss = matched_loss(73.0, loss_per_100ft(7.3, &cable));
        let fraction = to_transmission_fraction(loss);
        let gamma = reflection_coefficient(1.0);

        let swr_loss = swr_adjusted_loss(fraction, gamma.powi(2));

        assert!((swr_loss.value() - loss.value()).abs() < 1e-5);
        assert!(mismatch_loss(swr_loss, loss).value().abs() < 1e-5);
    }

    #[test]
    fn swr_loss_exceeds_matched_loss() {
        let cable = reference_cable();
        let loss = matched_loss(73.0, loss_per_100ft(7.3, &cable));
        let fraction = to_transmission_fraction(loss);

        let mut previous = loss;
        for swr in [1.5, 2.25, 3.0, 5.0] {
            let gamma = reflection_coefficient(swr);
            let swr_loss = swr_adjusted_loss(fraction, gamma.powi(2));

            assert!(swr_loss > previous);
            previous = swr_loss;
        }

        let gamma = reflection_coefficient(2.25);
        let swr_loss = swr_adjusted_loss(fraction, gamma.powi(2));
        assert!((swr_loss.value() - 0.319_79).abs() < 1e-4);
    }

    #[test]
    fn lossless_line_keeps_no_loss_at_any_swr() {
        let gamma = reflection_coefficient(4.0);

        let swr_loss = swr_adjusted_loss(1.0, gamma.powi(2));

        assert!(swr_loss.value().abs() < 1e-6);
    }
}
