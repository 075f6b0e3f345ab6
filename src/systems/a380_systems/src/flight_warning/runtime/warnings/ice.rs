use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;
use uom::si::f64::*;
use uom::si::ratio::ratio;
use uom::si::thermodynamic_temperature::degree_celsius;

pub(in crate::flight_warning::runtime) trait AntiIce {
    fn eng_anti_ice_on(&self, engine: u8) -> bool;
    fn wing_anti_ice_on(&self) -> bool;
    fn ice_detected_without_eng_anti_ice(&self) -> bool;
    fn severe_ice_detected(&self) -> bool;

    /// Anti ice has been on for a while without any ice being detected.
    fn ice_not_detected(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct AntiIceActivation {
    ice_detected_hold: ConfirmationNode,
    ice_detected_no_anti_ice_conf: ConfirmationNode,
    severe_ice_hold: ConfirmationNode,
    anti_ice_on_conf: ConfirmationNode,
    ice_not_detected_conf: ConfirmationNode,
    eng_anti_ice_on: [bool; 2],
    wing_anti_ice_on: bool,
    ice_detected_without_eng_anti_ice: bool,
    severe_ice_detected: bool,
    ice_not_detected: bool,
}

impl Default for AntiIceActivation {
    fn default() -> Self {
        Self {
            ice_detected_hold: ConfirmationNode::new_falling(Duration::from_secs(40)),
            ice_detected_no_anti_ice_conf: ConfirmationNode::new_leading(Duration::from_secs(5)),
            severe_ice_hold: ConfirmationNode::new_falling(Duration::from_secs(40)),
            anti_ice_on_conf: ConfirmationNode::new_leading(Duration::from_secs(60)),
            ice_not_detected_conf: ConfirmationNode::new_leading(Duration::from_secs(130)),
            eng_anti_ice_on: [false; 2],
            wing_anti_ice_on: false,
            ice_detected_without_eng_anti_ice: false,
            severe_ice_detected: false,
            ice_not_detected: false,
        }
    }
}

impl AntiIceActivation {
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl StructuralIceRatio + TotalAirTemperature + EngAntiIceOn + WingAntiIceOn),
        ground_sheet: &impl GroundDetection,
    ) {
        let ice = signals
            .structural_ice_ratio()
            .value_or(Ratio::new::<ratio>(0.0));
        let cold = signals
            .total_air_temperature()
            .normal_value()
            .map_or(false, |tat| {
                tat < ThermodynamicTemperature::new::<degree_celsius>(10.0)
            });
        let in_flight = !ground_sheet.ground();

        self.eng_anti_ice_on = [
            signals.eng_anti_ice_on(1).value_or(false),
            signals.eng_anti_ice_on(2).value_or(false),
        ];
        self.wing_anti_ice_on = signals.wing_anti_ice_on().value_or(false);

        let icing = ice >= Ratio::new::<ratio>(0.1);
        let ice_detected = self
            .ice_detected_hold
            .update(icing && cold && in_flight, delta);
        let both_eng_anti_ice_on = self.eng_anti_ice_on[0] && self.eng_anti_ice_on[1];
        self.ice_detected_without_eng_anti_ice = self
            .ice_detected_no_anti_ice_conf
            .update(ice_detected && !both_eng_anti_ice_on, delta);

        self.severe_ice_detected = self.severe_ice_hold.update(
            ice >= Ratio::new::<ratio>(0.5) && cold && in_flight,
            delta,
        );

        let any_anti_ice_on =
            self.eng_anti_ice_on[0] || self.eng_anti_ice_on[1] || self.wing_anti_ice_on;
        let anti_ice_on_for_a_while = self.anti_ice_on_conf.update(any_anti_ice_on, delta);
        self.ice_not_detected = self
            .ice_not_detected_conf
            .update(anti_ice_on_for_a_while && !icing, delta);
    }
}

impl AntiIce for AntiIceActivation {
    fn eng_anti_ice_on(&self, engine: u8) -> bool {
        match engine {
            1 | 2 => self.eng_anti_ice_on[engine as usize - 1],
            _ => panic!("Invalid engine number {}", engine),
        }
    }

    fn wing_anti_ice_on(&self) -> bool {
        self.wing_anti_ice_on
    }

    fn ice_detected_without_eng_anti_ice(&self) -> bool {
        self.ice_detected_without_eng_anti_ice
    }

    fn severe_ice_detected(&self) -> bool {
        self.severe_ice_detected
    }

    fn ice_not_detected(&self) -> bool {
        self.ice_not_detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_warning::test::*;

    struct TestGround {
        ground: bool,
    }

    impl GroundDetection for TestGround {
        fn ground(&self) -> bool {
            self.ground
        }
        fn ground_immediate(&self) -> bool {
            self.ground
        }
        fn lgciu_1_fault(&self) -> bool {
            false
        }
        fn lgciu_2_fault(&self) -> bool {
            false
        }
    }

    const IN_FLIGHT: TestGround = TestGround { ground: false };

    #[test]
    fn icing_without_anti_ice_is_confirmed_after_5_seconds() {
        let mut sheet = AntiIceActivation::default();
        let test_bed = test_bed().icing(0.2).total_air_temperature(-5.0);
        sheet.update(Duration::from_secs(4), test_bed.parameters(), &IN_FLIGHT);
        assert!(!sheet.ice_detected_without_eng_anti_ice());
        sheet.update(Duration::from_secs(1), test_bed.parameters(), &IN_FLIGHT);
        assert!(sheet.ice_detected_without_eng_anti_ice());
        assert!(!sheet.severe_ice_detected());
    }

    #[test]
    fn icing_with_engine_anti_ice_on_is_fine() {
        let mut sheet = AntiIceActivation::default();
        let test_bed = test_bed()
            .icing(0.2)
            .total_air_temperature(-5.0)
            .eng_anti_ice_on(1)
            .eng_anti_ice_on(2);
        sheet.update(Duration::from_secs(10), test_bed.parameters(), &IN_FLIGHT);
        assert!(!sheet.ice_detected_without_eng_anti_ice());
        assert!(sheet.eng_anti_ice_on(2));
    }

    #[test]
    fn warm_air_is_no_icing() {
        let mut sheet = AntiIceActivation::default();
        let test_bed = test_bed().icing(0.6).total_air_temperature(15.0);
        sheet.update(Duration::from_secs(10), test_bed.parameters(), &IN_FLIGHT);
        sheet.update(Duration::from_secs(10), test_bed.parameters(), &IN_FLIGHT);
        assert!(!sheet.ice_detected_without_eng_anti_ice());
        assert!(!sheet.severe_ice_detected());
    }

    #[test]
    fn severe_ice_is_held_after_leaving_the_icing() {
        let mut sheet = AntiIceActivation::default();
        sheet.update(
            Duration::from_secs(1),
            test_bed().icing(0.6).total_air_temperature(-5.0).parameters(),
            &IN_FLIGHT,
        );
        assert!(sheet.severe_ice_detected());

        let clear = test_bed().total_air_temperature(-5.0);
        sheet.update(Duration::from_secs(39), clear.parameters(), &IN_FLIGHT);
        assert!(sheet.severe_ice_detected());
        sheet.update(Duration::from_secs(1), clear.parameters(), &IN_FLIGHT);
        assert!(!sheet.severe_ice_detected());
    }

    #[test]
    fn anti_ice_without_ice_is_reported_after_both_confirmations() {
        let mut sheet = AntiIceActivation::default();
        let test_bed = test_bed().wing_anti_ice_on().total_air_temperature(5.0);
        sheet.update(Duration::from_secs(59), test_bed.parameters(), &IN_FLIGHT);
        sheet.update(Duration::from_secs(1), test_bed.parameters(), &IN_FLIGHT);
        sheet.update(Duration::from_secs(128), test_bed.parameters(), &IN_FLIGHT);
        assert!(!sheet.ice_not_detected());
        sheet.update(Duration::from_secs(1), test_bed.parameters(), &IN_FLIGHT);
        assert!(sheet.ice_not_detected());
    }
}
