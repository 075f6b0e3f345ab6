use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;
use systems::flight_warning::parameters::SignStatusMatrix;
use systems::flight_warning::utils::FwcSsm;
use uom::si::f64::*;
use uom::si::length::foot;

pub(in crate::flight_warning::runtime) trait ToMemo {
    fn to_memo_computed(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct ToMemoActivation {
    conf: ConfirmationNode,
    mem: MemoryNode,
    to_memo_computed: bool,
}

impl Default for ToMemoActivation {
    fn default() -> Self {
        Self {
            conf: ConfirmationNode::new(true, Duration::from_secs(120)),
            mem: MemoryNode::new(false),
            to_memo_computed: false,
        }
    }
}

impl ToMemoActivation {
    pub fn update(
        &mut self,
        delta: Duration,
        flight_phases_sheet: &impl FlightPhasesDef,
        ecp_sheet: &impl Ecp,
        eng_running_sheet: &impl EngRunning,
    ) {
        let phase = flight_phases_sheet.flight_phase().number();
        let set_mem = (phase == 2 || phase == 9) && ecp_sheet.to_config_test();
        let reset_mem = matches!(phase, 1 | 3 | 6 | 10);
        let mem_out = self.mem.update(set_mem, reset_mem);

        let conf_out = self
            .conf
            .update(eng_running_sheet.both_engines_running(), delta);

        self.to_memo_computed = mem_out || (phase == 2 && conf_out);
    }
}

impl ToMemo for ToMemoActivation {
    fn to_memo_computed(&self) -> bool {
        self.to_memo_computed
    }
}

pub(in crate::flight_warning::runtime) trait LdgMemo {
    fn ldg_memo(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct LdgMemoActivation {
    abv_2200_conf: ConfirmationNode,
    all_ra_inv_lg_downlocked_conf: ConfirmationNode,
    mem_abv_2200: MemoryNode,
    mem_blw_2000: MemoryNode,
    ldg_memo: bool,
}

impl Default for LdgMemoActivation {
    fn default() -> Self {
        Self {
            abv_2200_conf: ConfirmationNode::new_leading(Duration::from_secs(1)),
            all_ra_inv_lg_downlocked_conf: ConfirmationNode::new_leading(Duration::from_secs(10)),
            mem_abv_2200: MemoryNode::new(false),
            mem_blw_2000: MemoryNode::new(true),
            ldg_memo: false,
        }
    }
}

impl LdgMemoActivation {
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &impl RadioHeight,
        flight_phases_sheet: &impl FlightPhasesDef,
        lg_downlocked_sheet: &impl LgDownlocked,
    ) {
        let mut all_ra_inv = true;
        let mut all_ra_inv_or_ncd = true;
        let mut all_ra_abv_2200_or_inv_or_ncd = true;
        let mut any_ra_blw_2000 = false;
        for index in 1..=3 {
            let height = signals.radio_height(index);
            let inv_or_ncd = height.is_inv() || height.is_ncd();
            let value = height.value_or(Length::new::<foot>(0.0));

            all_ra_inv &= height.is_inv();
            all_ra_inv_or_ncd &= inv_or_ncd;
            all_ra_abv_2200_or_inv_or_ncd &= inv_or_ncd || value > Length::new::<foot>(2200.0);
            any_ra_blw_2000 |= !inv_or_ncd && value < Length::new::<foot>(2000.0);
        }

        let phase = flight_phases_sheet.flight_phase().number();
        let phase_6 = phase == 6;

        let set_mem_abv_2200 = self
            .abv_2200_conf
            .update(!all_ra_inv_or_ncd && all_ra_abv_2200_or_inv_or_ncd, delta);
        let abv_2200 = self
            .mem_abv_2200
            .update(set_mem_abv_2200, !matches!(phase, 6..=8));
        let blw_2000 = self
            .mem_blw_2000
            .update(any_ra_blw_2000, all_ra_abv_2200_or_inv_or_ncd);

        let all_ra_inv_lg_downlocked = self.all_ra_inv_lg_downlocked_conf.update(
            all_ra_inv && lg_downlocked_sheet.lg_downlocked() && phase_6,
            delta,
        );

        self.ldg_memo = (abv_2200 && blw_2000 && phase_6)
            || flight_phases_sheet.phase_78()
            || all_ra_inv_lg_downlocked;
    }
}

impl LdgMemo for LdgMemoActivation {
    fn ldg_memo(&self) -> bool {
        self.ldg_memo
    }
}

pub(in crate::flight_warning::runtime) trait LandAsap {
    fn land_asap_red(&self) -> bool;
    fn land_asap_amber(&self) -> bool;
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct LandAsapActivation {
    land_asap_red: bool,
    land_asap_amber: bool,
}

impl LandAsapActivation {
    pub fn update(
        &mut self,
        ground_sheet: &impl GroundDetection,
        fire_sheet: &impl Fire,
        elec_sheet: &impl ElecSupply,
        eng_running_sheet: &impl EngRunning,
        hydraulic_sheet: &impl HydraulicPressure,
        air_cond_sheet: &impl AirConditioning,
    ) {
        let in_flight = !ground_sheet.ground();
        let both_engines_off =
            !eng_running_sheet.eng_1_running() && !eng_running_sheet.eng_2_running();
        let one_engine_off = eng_running_sheet.eng_1_running() ^ eng_running_sheet.eng_2_running();

        self.land_asap_red = in_flight
            && (fire_sheet.fire_pb_out_or_test()
                || elec_sheet.emer_gen_running()
                || both_engines_off
                || hydraulic_sheet.green_yellow_lo_pr());
        self.land_asap_amber = in_flight
            && !self.land_asap_red
            && (one_engine_off
                || hydraulic_sheet.green_lo_pr()
                || hydraulic_sheet.yellow_lo_pr()
                || air_cond_sheet.duct_overheat());
    }
}

impl LandAsap for LandAsapActivation {
    fn land_asap_red(&self) -> bool {
        self.land_asap_red
    }

    fn land_asap_amber(&self) -> bool {
        self.land_asap_amber
    }
}

/// The cockpit selections which only feed memo lines.
pub(in crate::flight_warning::runtime) trait MemoInputs {
    fn park_brake_set(&self) -> bool;
    fn autobrake_off(&self) -> bool;
    fn autobrake_rto(&self) -> bool;
    fn apu_avail(&self) -> bool;
    fn apu_bleed_valve_open(&self) -> bool;
    fn landing_lights_extended(&self) -> bool;
    fn seat_belts_on(&self) -> bool;
    fn no_smoking_on(&self) -> bool;
    fn cabin_ready(&self) -> bool;
    fn refuel_in_progress(&self) -> bool;
    fn nw_steering_disconnected(&self) -> bool;
    fn eng_mode_selector_ignition(&self) -> bool;
    fn rat_deployed(&self) -> bool;
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct MemoInputsActivation {
    park_brake_set: bool,
    autobrake_off: bool,
    autobrake_rto: bool,
    apu_avail: bool,
    apu_bleed_valve_open: bool,
    landing_lights_extended: bool,
    seat_belts_on: bool,
    no_smoking_on: bool,
    cabin_ready: bool,
    refuel_in_progress: bool,
    nw_steering_disconnected: bool,
    eng_mode_selector_ignition: bool,
    rat_deployed: bool,
}

impl MemoInputsActivation {
    const AUTOBRAKE_RTO: u8 = 6;

    pub fn update(&mut self, signals: &(impl MemoDiscretes + ParkBrakeSet + AutobrakeMode)) {
        self.park_brake_set = signals.park_brake_set().value_or(false);

        // An unreadable autobrake selector is neither off nor RTO
        let autobrake = signals.autobrake_mode().normal_value();
        self.autobrake_off = autobrake == Some(0);
        self.autobrake_rto = autobrake == Some(Self::AUTOBRAKE_RTO);

        self.apu_avail = signals.apu_avail().value_or(false);
        self.apu_bleed_valve_open = signals.apu_bleed_valve_open().value_or(false);
        self.landing_lights_extended = signals.landing_lights_extended().value_or(false);
        self.seat_belts_on = signals.seat_belts_on().value_or(false);
        self.no_smoking_on = signals.no_smoking_on().value_or(false);
        self.cabin_ready = signals.cabin_ready().value_or(false);
        self.refuel_in_progress = signals.refuel_in_progress().value_or(false);
        self.nw_steering_disconnected = signals.nw_steering_disconnected().value_or(false);
        self.eng_mode_selector_ignition = signals.eng_mode_selector_ignition().value_or(false);
        self.rat_deployed = signals.rat_deployed().value_or(false);
    }
}

impl MemoInputs for MemoInputsActivation {
    fn park_brake_set(&self) -> bool {
        self.park_brake_set
    }

    fn autobrake_off(&self) -> bool {
        self.autobrake_off
    }

    fn autobrake_rto(&self) -> bool {
        self.autobrake_rto
    }

    fn apu_avail(&self) -> bool {
        self.apu_avail
    }

    fn apu_bleed_valve_open(&self) -> bool {
        self.apu_bleed_valve_open
    }

    fn landing_lights_extended(&self) -> bool {
        self.landing_lights_extended
    }

    fn seat_belts_on(&self) -> bool {
        self.seat_belts_on
    }

    fn no_smoking_on(&self) -> bool {
        self.no_smoking_on
    }

    fn cabin_ready(&self) -> bool {
        self.cabin_ready
    }

    fn refuel_in_progress(&self) -> bool {
        self.refuel_in_progress
    }

    fn nw_steering_disconnected(&self) -> bool {
        self.nw_steering_disconnected
    }

    fn eng_mode_selector_ignition(&self) -> bool {
        self.eng_mode_selector_ignition
    }

    fn rat_deployed(&self) -> bool {
        self.rat_deployed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_warning::test::*;

    struct TestPhase {
        phase: u8,
    }

    impl FlightPhasesDef for TestPhase {
        fn flight_phase(&self) -> systems::flight_warning::warnings::FlightPhase {
            systems::flight_warning::warnings::FlightPhase::from_number(self.phase)
                .unwrap_or_default()
        }

        fn phase_3_pulse(&self) -> bool {
            false
        }

        fn phase_changed_pulse(&self) -> bool {
            false
        }
    }

    #[cfg(test)]
    mod to_memo_activation_tests {
        use super::*;

        struct TestEcp {
            to_config_test: bool,
        }

        impl Ecp for TestEcp {
            fn clear_pulse(&self) -> bool {
                false
            }
            fn recall_pulse(&self) -> bool {
                false
            }
            fn recall_raw_pulse(&self) -> bool {
                false
            }
            fn to_config_pulse(&self) -> bool {
                self.to_config_test
            }
            fn to_config_test(&self) -> bool {
                self.to_config_test
            }
            fn to_config_held_min_1s5(&self) -> bool {
                false
            }
            fn to_config_raw(&self) -> bool {
                self.to_config_test
            }
        }

        fn engines(running: bool) -> EngRunningActivation {
            let mut sheet = EngRunningActivation::default();
            let test_bed = if running {
                test_bed().engines_running()
            } else {
                test_bed()
            };
            sheet.update(test_bed.parameters());
            sheet
        }

        #[test]
        fn shown_two_minutes_after_engine_start() {
            let mut sheet = ToMemoActivation::default();
            let phase = TestPhase { phase: 2 };
            let ecp = TestEcp {
                to_config_test: false,
            };
            sheet.update(Duration::from_secs(119), &phase, &ecp, &engines(true));
            assert!(!sheet.to_memo_computed());
            sheet.update(Duration::from_secs(1), &phase, &ecp, &engines(true));
            assert!(sheet.to_memo_computed());
        }

        #[test]
        fn shown_after_takeoff_config_test_until_takeoff() {
            let mut sheet = ToMemoActivation::default();
            sheet.update(
                Duration::from_secs(1),
                &TestPhase { phase: 9 },
                &TestEcp {
                    to_config_test: true,
                },
                &engines(false),
            );
            assert!(sheet.to_memo_computed());

            let released = TestEcp {
                to_config_test: false,
            };
            sheet.update(
                Duration::from_secs(1),
                &TestPhase { phase: 2 },
                &released,
                &engines(false),
            );
            assert!(sheet.to_memo_computed());

            sheet.update(
                Duration::from_secs(1),
                &TestPhase { phase: 3 },
                &released,
                &engines(true),
            );
            assert!(!sheet.to_memo_computed());
        }
    }

    #[cfg(test)]
    mod ldg_memo_activation_tests {
        use super::*;

        fn downlocked(test_bed: &A380FwsParameterTestBed) -> LgDownlockedActivation {
            let mut sheet = LgDownlockedActivation::default();
            sheet.update(test_bed.parameters());
            sheet
        }

        #[test]
        fn shown_when_descending_through_2000_ft() {
            let mut sheet = LdgMemoActivation::default();
            let phase = TestPhase { phase: 6 };

            let high = test_bed().radio_heights(Length::new::<foot>(2500.0));
            sheet.update(Duration::from_secs(1), high.parameters(), &phase, &downlocked(&high));
            assert!(!sheet.ldg_memo());

            let low = test_bed().radio_heights(Length::new::<foot>(1900.0));
            sheet.update(Duration::from_secs(1), low.parameters(), &phase, &downlocked(&low));
            assert!(sheet.ldg_memo());
        }

        #[test]
        fn not_shown_after_takeoff_below_2000_ft() {
            let mut sheet = LdgMemoActivation::default();
            let low = test_bed().radio_heights(Length::new::<foot>(1900.0));
            sheet.update(
                Duration::from_secs(1),
                low.parameters(),
                &TestPhase { phase: 6 },
                &downlocked(&low),
            );
            assert!(!sheet.ldg_memo());
        }

        #[test]
        fn always_shown_in_approach_and_landing() {
            let mut sheet = LdgMemoActivation::default();
            let test_bed = test_bed();
            sheet.update(
                Duration::from_secs(1),
                test_bed.parameters(),
                &TestPhase { phase: 8 },
                &downlocked(&test_bed),
            );
            assert!(sheet.ldg_memo());
        }

        #[test]
        fn shown_with_gear_down_when_all_radio_altimeters_are_lost() {
            let mut sheet = LdgMemoActivation::default();
            let test_bed = test_bed().gear_down();
            let phase = TestPhase { phase: 6 };
            sheet.update(Duration::from_secs(9), test_bed.parameters(), &phase, &downlocked(&test_bed));
            assert!(!sheet.ldg_memo());
            sheet.update(Duration::from_secs(1), test_bed.parameters(), &phase, &downlocked(&test_bed));
            assert!(sheet.ldg_memo());
        }
    }

    #[cfg(test)]
    mod memo_inputs_activation_tests {
        use super::*;

        fn update(test_bed: A380FwsParameterTestBed) -> MemoInputsActivation {
            let mut sheet = MemoInputsActivation::default();
            sheet.update(test_bed.parameters());
            sheet
        }

        #[test]
        fn invalid_inputs_show_nothing() {
            let sheet = update(test_bed());
            assert!(!sheet.park_brake_set());
            assert!(!sheet.autobrake_off());
            assert!(!sheet.autobrake_rto());
            assert!(!sheet.seat_belts_on());
        }

        #[test]
        fn autobrake_selector_positions() {
            assert!(update(test_bed().autobrake_mode(0)).autobrake_off());
            assert!(update(test_bed().autobrake_mode(6)).autobrake_rto());
            let landing = update(test_bed().autobrake_mode(3));
            assert!(!landing.autobrake_off());
            assert!(!landing.autobrake_rto());
        }

        #[test]
        fn cabin_signs() {
            let sheet = update(test_bed().seat_belts_on().no_smoking_on().park_brake_set());
            assert!(sheet.seat_belts_on());
            assert!(sheet.no_smoking_on());
            assert!(sheet.park_brake_set());
            assert!(!sheet.cabin_ready());
        }
    }
}
