use std::ops;

use derive_more::{Add, Mul};
use impl_ops::{
    _impl_binary_op_borrowed_borrowed, _impl_binary_op_borrowed_owned,
    _impl_binary_op_internal, _impl_binary_op_owned_borrowed,
    _impl_binary_op_owned_owned, _parse_binary_op, impl_op, impl_op_ex
};

use super::unit::Ratio;


#[derive(Add, Clone, Copy, Debug, Default, Mul, PartialEq, PartialOrd)]
pub struct Decibel(f32);

impl Decibel {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.0
    }

    /// Power ratio represented by the value, `10^(dB / 10)`.
    #[must_use]
    pub fn power_ratio(&self) -> Ratio {
        10.0_f32.powf(self.0 / 10.0)
    }

    #[must_use]
    pub fn from_power_ratio(ratio: Ratio) -> Self {
        Self(10.0 * ratio.log10())
    }
}

impl_op_ex!(
    - |a: &Decibel, b: &Decibel| -> Decibel {
        Decibel(a.0 - b.0)
    }
);

impl ops::Neg for Decibel {
    type Output = Decibel;

    fn neg(self) -> Self::Output {
        Decibel(-self.0)
    }
}
