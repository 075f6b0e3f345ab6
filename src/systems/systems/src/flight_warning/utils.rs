use crate::flight_warning::parameters::{Arinc429Parameter, DiscreteParameter, SignStatusMatrix};

/// The FWC treats every parameter that is not flagged as failed as valid, which is coarser than
/// the four SSM states.
pub trait FwcSsm: SignStatusMatrix {
    fn is_val(&self) -> bool {
        !self.is_fw()
    }
    fn is_inv(&self) -> bool {
        self.is_fw()
    }
}

impl FwcSsm for DiscreteParameter {}

impl<T> FwcSsm for Arinc429Parameter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ncd_counts_as_valid() {
        assert!(Arinc429Parameter::new_ncd(1.0).is_val());
        assert!(Arinc429Parameter::new_inv(1.0).is_inv());
    }
}
