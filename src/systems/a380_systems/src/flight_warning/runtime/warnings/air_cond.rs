use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;
use systems::flight_warning::utils::FwcSsm;

pub(in crate::flight_warning::runtime) trait AirConditioning {
    fn acsc_1_fault(&self) -> bool;
    fn acsc_2_fault(&self) -> bool;
    fn acsc_1_2_fault(&self) -> bool;
    fn acsc_lane_fault(&self) -> bool;
    fn duct_overheat(&self) -> bool;
    fn trim_air_fault(&self) -> bool;
    fn trim_air_high_pressure(&self) -> bool;
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct AirConditioningActivation {
    acsc_1_fault: bool,
    acsc_2_fault: bool,
    acsc_1_2_fault: bool,
    acsc_lane_fault: bool,
    duct_overheat: bool,
    trim_air_fault: bool,
    trim_air_high_pressure: bool,
}

impl AirConditioningActivation {
    pub fn update(&mut self, signals: &impl AcscDiscreteWord1) {
        let word_1 = signals.acsc_discrete_word_1(1);
        let word_2 = signals.acsc_discrete_word_1(2);

        let acsc_1_failed = word_1.is_inv();
        let acsc_2_failed = word_2.is_inv();
        self.acsc_1_fault = acsc_1_failed && !acsc_2_failed;
        self.acsc_2_fault = !acsc_1_failed && acsc_2_failed;
        self.acsc_1_2_fault = acsc_1_failed && acsc_2_failed;

        self.acsc_lane_fault = [word_1, word_2].iter().any(|word| {
            word.bit_value_or(21, false) || word.bit_value_or(22, false)
        });

        self.duct_overheat = (11..=13).any(|bit| {
            word_1.bit_value_or(bit, false) || word_2.bit_value_or(bit, false)
        });

        self.trim_air_fault = word_1.bit_value_or(28, false) || word_2.bit_value_or(28, false);
        self.trim_air_high_pressure =
            word_1.bit_value_or(18, false) || word_2.bit_value_or(18, false);
    }
}

impl AirConditioning for AirConditioningActivation {
    fn acsc_1_fault(&self) -> bool {
        self.acsc_1_fault
    }

    fn acsc_2_fault(&self) -> bool {
        self.acsc_2_fault
    }

    fn acsc_1_2_fault(&self) -> bool {
        self.acsc_1_2_fault
    }

    fn acsc_lane_fault(&self) -> bool {
        self.acsc_lane_fault
    }

    fn duct_overheat(&self) -> bool {
        self.duct_overheat
    }

    fn trim_air_fault(&self) -> bool {
        self.trim_air_fault
    }

    fn trim_air_high_pressure(&self) -> bool {
        self.trim_air_high_pressure
    }
}

pub(in crate::flight_warning::runtime) trait Packs {
    fn pack_on(&self, index: u8) -> bool;
    fn pack_fault(&self, index: u8) -> bool;

    /// The pack was switched off in cruise although it has bleed air and no fault.
    fn pack_off(&self, index: u8) -> bool;

    /// Both packs are lost, either by their own faults or by a pack fault while the other pack's
    /// ACSC is faulty. The loss of both ACSCs alone is not a pack fault.
    fn pack_1_2_fault(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct PacksActivation {
    bleed_available_conf: [ConfirmationNode; 2],
    pack_off_conf: [ConfirmationNode; 2],
    pack_on: [bool; 2],
    pack_fault: [bool; 2],
    pack_off: [bool; 2],
    pack_1_2_fault: bool,
}

impl Default for PacksActivation {
    fn default() -> Self {
        Self {
            bleed_available_conf: [
                ConfirmationNode::new_leading(Duration::from_secs(5)),
                ConfirmationNode::new_leading(Duration::from_secs(5)),
            ],
            pack_off_conf: [
                ConfirmationNode::new_leading(Duration::from_secs(60)),
                ConfirmationNode::new_leading(Duration::from_secs(60)),
            ],
            pack_on: [true; 2],
            pack_fault: [false; 2],
            pack_off: [false; 2],
            pack_1_2_fault: false,
        }
    }
}

impl PacksActivation {
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl PackPbOn
              + PackPbFault
              + EngBleedPbAuto
              + EngBleedPbFault
              + XbleedValveFullyClosed),
        flight_phases_sheet: &impl FlightPhasesDef,
        air_conditioning_sheet: &impl AirConditioning,
    ) {
        let cruise = flight_phases_sheet.flight_phase().number() == 6;
        let xbleed_open = !signals.xbleed_valve_fully_closed().value_or(true);

        for index in 1..=2u8 {
            let slot = index as usize - 1;
            let on = signals.pack_pb_on(index).value_or(true);
            let fault = signals.pack_pb_fault(index).value_or(false);
            let own_bleed = signals.eng_bleed_pb_auto(index).value_or(false)
                && !signals.eng_bleed_pb_fault(index).value_or(false);
            let bleed_available =
                self.bleed_available_conf[slot].update(own_bleed || xbleed_open, delta);

            self.pack_on[slot] = on;
            self.pack_fault[slot] = fault;
            self.pack_off[slot] =
                self.pack_off_conf[slot].update(!on && !fault && bleed_available && cruise, delta);
        }

        self.pack_1_2_fault = (self.pack_fault[0] && self.pack_fault[1])
            || (self.pack_off[0] && air_conditioning_sheet.acsc_2_fault())
            || (self.pack_off[1] && air_conditioning_sheet.acsc_1_fault());
    }
}

impl Packs for PacksActivation {
    fn pack_on(&self, index: u8) -> bool {
        self.pack_on[index as usize - 1]
    }

    fn pack_fault(&self, index: u8) -> bool {
        self.pack_fault[index as usize - 1]
    }

    fn pack_off(&self, index: u8) -> bool {
        self.pack_off[index as usize - 1]
    }

    fn pack_1_2_fault(&self) -> bool {
        self.pack_1_2_fault
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_warning::test::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, false, true, false, false)]
    #[case(false, true, false, true, false)]
    #[case(true, true, false, false, true)]
    #[case(false, false, false, false, false)]
    fn failed_words_select_the_acsc_fault(
        #[case] acsc_1_failed: bool,
        #[case] acsc_2_failed: bool,
        #[case] acsc_1_fault: bool,
        #[case] acsc_2_fault: bool,
        #[case] acsc_1_2_fault: bool,
    ) {
        let mut test_bed = test_bed().acsc_healthy();
        if acsc_1_failed {
            test_bed = test_bed.acsc_failed(1);
        }
        if acsc_2_failed {
            test_bed = test_bed.acsc_failed(2);
        }

        let mut sheet = AirConditioningActivation::default();
        sheet.update(test_bed.parameters());
        assert_eq!(sheet.acsc_1_fault(), acsc_1_fault);
        assert_eq!(sheet.acsc_2_fault(), acsc_2_fault);
        assert_eq!(sheet.acsc_1_2_fault(), acsc_1_2_fault);
    }

    #[rstest]
    #[case(11)]
    #[case(12)]
    #[case(13)]
    fn any_duct_overheat_bit_is_an_overheat(#[case] bit: usize) {
        let mut sheet = AirConditioningActivation::default();
        sheet.update(test_bed().acsc_healthy().acsc_bit(2, bit).parameters());
        assert!(sheet.duct_overheat());
        assert!(!sheet.acsc_lane_fault());
    }

    #[rstest]
    #[case(28, true, false)]
    #[case(18, false, true)]
    fn trim_air_bits(#[case] bit: usize, #[case] fault: bool, #[case] high_pressure: bool) {
        let mut sheet = AirConditioningActivation::default();
        sheet.update(test_bed().acsc_healthy().acsc_bit(1, bit).parameters());
        assert_eq!(sheet.trim_air_fault(), fault);
        assert_eq!(sheet.trim_air_high_pressure(), high_pressure);
    }

    #[test]
    fn lane_fault_bits_are_lane_faults() {
        let mut sheet = AirConditioningActivation::default();
        sheet.update(test_bed().acsc_healthy().acsc_bit(1, 22).parameters());
        assert!(sheet.acsc_lane_fault());
        assert!(!sheet.duct_overheat());
    }

    #[cfg(test)]
    mod packs_tests {
        use super::*;

        struct Sheets {
            flight_phases: FlightPhasesDefActivation,
            air_conditioning: AirConditioningActivation,
            packs: PacksActivation,
        }

        impl Sheets {
            fn new() -> Self {
                Self {
                    flight_phases: Default::default(),
                    air_conditioning: Default::default(),
                    packs: Default::default(),
                }
            }

            fn run(
                &mut self,
                duration: Duration,
                test_bed: &A380FwsParameterTestBed,
            ) -> &PacksActivation {
                let tick = Duration::from_millis(500);
                let mut elapsed = Duration::ZERO;
                while elapsed < duration {
                    self.flight_phases.update(test_bed.parameters());
                    self.air_conditioning.update(test_bed.parameters());
                    self.packs.update(
                        tick,
                        test_bed.parameters(),
                        &self.flight_phases,
                        &self.air_conditioning,
                    );
                    elapsed += tick;
                }
                &self.packs
            }
        }

        fn cruise() -> A380FwsParameterTestBed {
            test_bed().acsc_healthy().packs_on().flight_phase(6)
        }

        #[test]
        fn pack_switched_off_in_cruise_is_confirmed_for_a_minute() {
            let mut sheets = Sheets::new();
            let bed = cruise().pack_off(1);
            assert!(!sheets.run(Duration::from_secs(64), &bed).pack_off(1));
            assert!(sheets.run(Duration::from_secs(2), &bed).pack_off(1));
            assert!(!sheets.packs.pack_off(2));
        }

        #[test]
        fn failed_pack_is_not_reported_as_switched_off() {
            let mut sheets = Sheets::new();
            let packs = sheets.run(
                Duration::from_secs(70),
                &cruise().pack_off(1).pack_fault(1),
            );
            assert!(packs.pack_fault(1));
            assert!(!packs.pack_off(1));
        }

        #[test]
        fn pack_off_needs_bleed_air() {
            let mut sheets = Sheets::new();
            let packs = sheets.run(
                Duration::from_secs(70),
                &cruise().pack_off(1).eng_bleed_off(1),
            );
            assert!(!packs.pack_off(1));

            let mut sheets = Sheets::new();
            let packs = sheets.run(
                Duration::from_secs(70),
                &cruise().pack_off(1).eng_bleed_off(1).xbleed_open(),
            );
            assert!(packs.pack_off(1));
        }

        #[test]
        fn pack_off_is_only_monitored_in_cruise() {
            let mut sheets = Sheets::new();
            let bed = cruise().pack_off(1).flight_phase(8);
            assert!(!sheets.run(Duration::from_secs(70), &bed).pack_off(1));
        }

        #[rstest]
        #[case(cruise().pack_fault(1).pack_fault(2), true)]
        #[case(cruise().pack_fault(1), false)]
        #[case(cruise().pack_off(1).acsc_failed(2), true)]
        #[case(cruise().pack_off(2).acsc_failed(1), true)]
        #[case(cruise().acsc_failed(1).acsc_failed(2), false)]
        fn both_packs_lost(#[case] bed: A380FwsParameterTestBed, #[case] expected: bool) {
            let mut sheets = Sheets::new();
            assert_eq!(
                sheets.run(Duration::from_secs(70), &bed).pack_1_2_fault(),
                expected
            );
        }
    }
}
