use super::*;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::velocity::knot;

pub(in crate::flight_warning::runtime) trait StallWarning {
    fn stall_warning(&self) -> bool;
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct StallWarningActivation {
    stall_warning: bool,
}

impl StallWarningActivation {
    pub fn update(
        &mut self,
        signals: &(impl FcdcDiscreteWord1 + ComputedSpeed + RadioHeight + StallWarningRaw),
        flight_phases_sheet: &impl FlightPhasesDef,
    ) {
        // The flight envelope protection takes over in normal law
        let normal_law = signals.fcdc_discrete_word_1(1).bit_value_or(11, false)
            || signals.fcdc_discrete_word_1(2).bit_value_or(11, false);
        let cas_above_60 = (1..=3).any(|index| {
            signals
                .computed_speed(index)
                .value_or(Velocity::new::<knot>(0.0))
                > Velocity::new::<knot>(60.0)
        });
        let above_1500_ft = (1..=3).all(|index| {
            signals
                .radio_height(index)
                .value_or(Length::new::<foot>(f64::INFINITY))
                > Length::new::<foot>(1500.0)
        });

        self.stall_warning = !normal_law
            && cas_above_60
            && signals.stall_warning_raw().value_or(false)
            && flight_phases_sheet.phase_567()
            && above_1500_ft;
    }
}

impl StallWarning for StallWarningActivation {
    fn stall_warning(&self) -> bool {
        self.stall_warning
    }
}
