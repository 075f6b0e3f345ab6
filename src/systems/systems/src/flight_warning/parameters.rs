use crate::shared::arinc429::{Arinc429Discretes, SignStatus};

pub trait Value<T> {
    fn value(&self) -> T;
}

/// The sign status matrix trait (SSM) exposes the validity of a parameter, which qualifies the
/// accompanied value. The trait additionally provides methods to interpret the status.
pub trait SignStatusMatrix {
    fn ssm(&self) -> SignStatus;

    /// A parameter has "no computed data" (ncd) when no explicit failure has been detected, but no
    /// data is available. For example, the radio altimeter in cruise won't return any valid data
    /// even if it has not failed.
    fn is_ncd(&self) -> bool {
        self.ssm() == SignStatus::NoComputedData
    }

    /// A parameter is considered "normal" (no) when the data is considered valid.
    fn is_no(&self) -> bool {
        self.ssm() == SignStatus::NormalOperation
    }

    // A parameter is in "functional test" (ft) when the parameter has been artificially forced to
    // certain value.
    fn is_ft(&self) -> bool {
        self.ssm() == SignStatus::FunctionalTest
    }

    // A parameter is considered to have a "failure warning" (fw) when the data is most likely
    // faulty.
    fn is_fw(&self) -> bool {
        self.ssm() == SignStatus::FailureWarning
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscreteParameter {
    value: bool,
    ssm: SignStatus,
}

impl DiscreteParameter {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            ssm: SignStatus::NormalOperation,
        }
    }

    pub fn new_inv(value: bool) -> Self {
        Self {
            value,
            ssm: SignStatus::FailureWarning,
        }
    }

    /// Returns the value if the discrete is valid, otherwise the given fallback.
    pub fn value_or(&self, fallback: bool) -> bool {
        if self.is_fw() {
            fallback
        } else {
            self.value
        }
    }
}

impl SignStatusMatrix for DiscreteParameter {
    fn ssm(&self) -> SignStatus {
        self.ssm
    }
}

impl Default for DiscreteParameter {
    fn default() -> Self {
        Self::new_inv(false)
    }
}

impl Value<bool> for DiscreteParameter {
    fn value(&self) -> bool {
        self.value
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arinc429Parameter<T> {
    value: T,
    ssm: SignStatus,
}

impl<T> Arinc429Parameter<T> {
    pub fn new(value: T) -> Self {
        Self::new_with_ssm(value, SignStatus::NormalOperation)
    }

    pub fn new_ncd(value: T) -> Self {
        Self::new_with_ssm(value, SignStatus::NoComputedData)
    }

    pub fn new_ft(value: T) -> Self {
        Self::new_with_ssm(value, SignStatus::FunctionalTest)
    }

    pub fn new_inv(value: T) -> Self {
        Self::new_with_ssm(value, SignStatus::FailureWarning)
    }

    pub fn new_with_ssm(value: T, ssm: SignStatus) -> Self {
        Self { value, ssm }
    }
}

impl<T: Copy> Arinc429Parameter<T> {
    /// Returns the value when it is in normal operation or functional test, otherwise the given
    /// fallback.
    pub fn value_or(&self, fallback: T) -> T {
        if self.is_no() || self.is_ft() {
            self.value
        } else {
            fallback
        }
    }

    /// Returns the value only when it is in normal operation.
    pub fn normal_value(&self) -> Option<T> {
        if self.is_no() {
            Some(self.value)
        } else {
            None
        }
    }
}

impl Arinc429Parameter<Arinc429Discretes> {
    /// Reads a single bit of a discrete word. Words which are neither in normal operation nor in
    /// functional test yield the fallback.
    pub fn bit_value_or(&self, bit: usize, fallback: bool) -> bool {
        if self.is_no() || self.is_ft() {
            self.value.bit(bit)
        } else {
            fallback
        }
    }
}

impl<T> SignStatusMatrix for Arinc429Parameter<T> {
    fn ssm(&self) -> SignStatus {
        self.ssm
    }
}

impl<T: Default> Default for Arinc429Parameter<T> {
    fn default() -> Self {
        Self::new_inv(T::default())
    }
}

impl<T> Value<T> for Arinc429Parameter<T>
where
    T: Copy,
{
    fn value(&self) -> T {
        self.value
    }
}
