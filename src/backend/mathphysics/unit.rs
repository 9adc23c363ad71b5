pub type Foot = f32;
pub type Watt = f32;
pub type Megahertz = f32;
pub type Dbi = f32;
pub type Ratio = f32;
pub type MilliwattPerSquareCentimeter = f32;


// Distance in feet at which 100 ft cable loss figures are quoted.
pub const CABLE_LOSS_REFERENCE_LENGTH: Foot = 100.0;


#[must_use]
pub fn length_in_reference_units(length: Foot) -> f32 {
    length / CABLE_LOSS_REFERENCE_LENGTH
}

#[must_use]
pub fn percent_to_ratio(percent: f32) -> Ratio {
    percent / 100.0
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_length_scaling() {
        assert_eq!(0.0, length_in_reference_units(0.0));
        assert_eq!(1.0, length_in_reference_units(100.0));
        assert_eq!(0.73, length_in_reference_units(73.0));
    }

    #[test]
    fn percent_conversion() {
        assert_eq!(0.5, percent_to_ratio(50.0));
        assert_eq!(1.0, percent_to_ratio(100.0));
    }
}
