use super::*;
use systems::flight_warning::parameters::SignStatusMatrix;
use uom::si::f64::*;
use uom::si::velocity::knot;

pub(in crate::flight_warning::runtime) trait AdirsFaults {
    fn adr_fault(&self, index: u8) -> bool;
    fn ir_fault(&self, index: u8) -> bool;
    fn ra_failed(&self, index: u8) -> bool;

    fn adr_1_2_3_fault(&self) -> bool {
        (1..=3).all(|index| self.adr_fault(index))
    }
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct AdirsFaultsActivation {
    adr_fault: [bool; 3],
    ir_fault: [bool; 3],
    ra_failed: [bool; 3],
}

impl AdirsFaultsActivation {
    pub fn update(
        &mut self,
        signals: &(impl ComputedSpeed + IrPitch + IrMaintenanceWord + RadioHeight),
    ) {
        for index in 1..=3 {
            let slot = index as usize - 1;
            let maintenance_word = signals.ir_maintenance_word(index);
            self.adr_fault[slot] =
                signals.computed_speed(index).is_fw() || maintenance_word.bit_value_or(8, false);
            self.ir_fault[slot] =
                !signals.ir_pitch(index).is_no() || maintenance_word.bit_value_or(9, true);
            self.ra_failed[slot] = signals.radio_height(index).is_fw();
        }
    }
}

impl AdirsFaults for AdirsFaultsActivation {
    fn adr_fault(&self, index: u8) -> bool {
        match index {
            1..=3 => self.adr_fault[index as usize - 1],
            _ => panic!("Invalid ADR number {}", index),
        }
    }

    fn ir_fault(&self, index: u8) -> bool {
        match index {
            1..=3 => self.ir_fault[index as usize - 1],
            _ => panic!("Invalid IR number {}", index),
        }
    }

    fn ra_failed(&self, index: u8) -> bool {
        match index {
            1..=3 => self.ra_failed[index as usize - 1],
            _ => panic!("Invalid RA number {}", index),
        }
    }
}

pub(in crate::flight_warning::runtime) trait Overspeed {
    fn overspeed_vmo(&self) -> bool;
    fn overspeed_vle(&self) -> bool;
    fn overspeed_vfe(&self) -> bool;
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct OverspeedActivation {
    overspeed_vmo: bool,
    overspeed_vle: bool,
    overspeed_vfe: bool,
}

impl OverspeedActivation {
    /// The VFE limits of flaps lever positions 1 to FULL.
    const VFE_LIMITS_KNOTS: [f64; 4] = [263., 220., 196., 182.];

    pub fn update(
        &mut self,
        signals: &(impl ComputedSpeed + FlapsLeverPosition),
        lg_downlocked_sheet: &impl LgDownlocked,
    ) {
        let cas = signals
            .computed_speed(1)
            .value_or(Velocity::new::<knot>(0.0))
            .get::<knot>();
        let cas_to_nearest_2 = (cas / 2.).round() * 2.;
        let is_overspeed = |limit: f64| cas_to_nearest_2 > limit + 4.;

        let flaps_lever = signals.flaps_lever_position().value_or(0);
        let gear_downlocked = lg_downlocked_sheet.main_lg_downlocked();

        self.overspeed_vmo = !gear_downlocked && flaps_lever == 0 && is_overspeed(340.);
        self.overspeed_vle = gear_downlocked && flaps_lever == 0 && is_overspeed(250.);
        self.overspeed_vfe = match flaps_lever {
            1..=4 => is_overspeed(Self::VFE_LIMITS_KNOTS[flaps_lever as usize - 1]),
            _ => false,
        };
    }
}

impl Overspeed for OverspeedActivation {
    fn overspeed_vmo(&self) -> bool {
        self.overspeed_vmo
    }

    fn overspeed_vle(&self) -> bool {
        self.overspeed_vle
    }

    fn overspeed_vfe(&self) -> bool {
        self.overspeed_vfe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_warning::test::*;
    use rstest::rstest;

    #[cfg(test)]
    mod adirs_faults_activation_tests {
        use super::*;

        #[test]
        fn healthy_adirs_have_no_faults() {
            let mut sheet = AdirsFaultsActivation::default();
            sheet.update(test_bed().adirs_aligned().parameters());
            for index in 1..=3 {
                assert!(!sheet.adr_fault(index));
                assert!(!sheet.ir_fault(index));
            }
            assert!(!sheet.adr_1_2_3_fault());
        }

        #[test]
        fn failed_cas_is_an_adr_fault() {
            let mut sheet = AdirsFaultsActivation::default();
            sheet.update(test_bed().adirs_aligned().adr_failed(2).parameters());
            assert!(!sheet.adr_fault(1));
            assert!(sheet.adr_fault(2));
            assert!(!sheet.adr_1_2_3_fault());
        }

        #[test]
        fn lost_maintenance_word_is_an_ir_fault() {
            let mut sheet = AdirsFaultsActivation::default();
            sheet.update(test_bed().parameters());
            assert!(sheet.ir_fault(1));
            assert!(sheet.adr_1_2_3_fault());
        }
    }

    #[cfg(test)]
    mod overspeed_activation_tests {
        use super::*;

        struct TestLgDownlocked {
            downlocked: bool,
        }

        impl LgDownlocked for TestLgDownlocked {
            fn main_lg_downlocked(&self) -> bool {
                self.downlocked
            }
            fn lg_downlocked(&self) -> bool {
                self.downlocked
            }
        }

        #[rstest]
        #[case(0, false, 344., false)]
        #[case(0, false, 346., true)]
        #[case(0, true, 256., true)]
        #[case(1, false, 266., false)]
        #[case(1, false, 268., true)]
        #[case(4, true, 187., true)]
        fn compares_rounded_speed_with_limit(
            #[case] flaps_lever: u8,
            #[case] gear_downlocked: bool,
            #[case] speed_knots: f64,
            #[case] overspeed: bool,
        ) {
            let mut sheet = OverspeedActivation::default();
            sheet.update(
                test_bed()
                    .flaps_lever(flaps_lever)
                    .computed_speeds(Velocity::new::<knot>(speed_knots))
                    .parameters(),
                &TestLgDownlocked {
                    downlocked: gear_downlocked,
                },
            );
            assert_eq!(
                sheet.overspeed_vmo() || sheet.overspeed_vle() || sheet.overspeed_vfe(),
                overspeed
            );
        }
    }
}
