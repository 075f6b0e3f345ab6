use super::*;
use systems::flight_warning::logic::*;
use systems::flight_warning::parameters::SignStatusMatrix;
use systems::flight_warning::utils::FwcSsm;
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::ratio::percent;

pub(in crate::flight_warning::runtime) trait LgDownlocked {
    fn main_lg_downlocked(&self) -> bool;
    fn lg_downlocked(&self) -> bool;
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct LgDownlockedActivation {
    main_lg_downlocked: bool,
    lg_downlocked: bool,
}

impl LgDownlockedActivation {
    pub fn update(&mut self, signals: &impl LgciuDiscreteWord1) {
        let word_1 = signals.lgciu_discrete_word_1(1);
        let word_2 = signals.lgciu_discrete_word_1(2);
        let any_word_invalid = word_1.is_inv() || word_2.is_inv();

        // Both LGCIUs have to agree, unless one of them has been lost
        let downlocked = |bit| {
            let lgciu_1 = word_1.bit_value_or(bit, false);
            let lgciu_2 = word_2.bit_value_or(bit, false);
            (lgciu_1 && lgciu_2) || (any_word_invalid && (lgciu_1 || lgciu_2))
        };

        self.main_lg_downlocked = downlocked(23) && downlocked(24);
        self.lg_downlocked = self.main_lg_downlocked && downlocked(25);
    }
}

impl LgDownlocked for LgDownlockedActivation {
    fn main_lg_downlocked(&self) -> bool {
        self.main_lg_downlocked
    }

    fn lg_downlocked(&self) -> bool {
        self.lg_downlocked
    }
}

pub(in crate::flight_warning::runtime) trait LgNotDown {
    /// L/G GEAR NOT DOWN, which the crew can silence.
    fn lg_not_down(&self) -> bool;

    /// L/G GEAR NOT DOWN with flaps in landing configuration, which cannot be silenced.
    fn lg_not_down_no_cancel(&self) -> bool;

    /// The red arrow on the landing gear lever.
    fn lg_lever_red_arrow(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct LgNotDownActivation {
    below_750_pulse: PulseNode,
    flaps_appr_pulse: PulseNode,
    lg_not_down: bool,
    lg_not_down_no_cancel: bool,
    lg_lever_red_arrow: bool,
}

impl Default for LgNotDownActivation {
    fn default() -> Self {
        Self {
            below_750_pulse: PulseNode::new(true),
            flaps_appr_pulse: PulseNode::new(true),
            lg_not_down: false,
            lg_not_down_no_cancel: false,
            lg_lever_red_arrow: false,
        }
    }
}

impl LgNotDownActivation {
    pub fn update(
        &mut self,
        signals: &(impl RadioHeight + PressureAltitude + EngN1 + EngMasterLeverSelectOn),
        flight_phases_sheet: &impl FlightPhasesDef,
        ground_sheet: &impl GroundDetection,
        lg_downlocked_sheet: &impl LgDownlocked,
        eng_takeoff_power_sheet: &impl EngTakeoffPower,
        flaps_slats_sheet: &impl FlapsSlatsPosition,
    ) {
        let lowest_radio_height = (1..=3)
            .map(|index| {
                signals
                    .radio_height(index)
                    .value_or(Length::new::<foot>(f64::INFINITY))
            })
            .fold(Length::new::<foot>(f64::INFINITY), |lowest, height| {
                if height < lowest {
                    height
                } else {
                    lowest
                }
            });
        let below_750_ra = lowest_radio_height < Length::new::<foot>(750.0);

        let all_ra_failed = (1..=3).all(|index| signals.radio_height(index).is_fw());
        let all_ra_failed_or_ncd = (1..=3).all(|index| {
            let height = signals.radio_height(index);
            height.is_fw() || height.is_ncd()
        });

        let pressure_altitude = signals
            .pressure_altitude(1)
            .value_or(Length::new::<foot>(0.0));
        let alt_inhibit = pressure_altitude > Length::new::<foot>(18500.0)
            && (1..=3).all(|index| {
                let height = signals.radio_height(index);
                !height.is_ncd() && !height.is_no()
            });

        let gear_not_downlocked = !lg_downlocked_sheet.main_lg_downlocked()
            && !(ground_sheet.lgciu_1_fault() && ground_sheet.lgciu_2_fault());
        let to_power = eng_takeoff_power_sheet.eng_1_or_2_to_power();

        let below_750_condition = flaps_slats_sheet.flaps_beyond_d_or_slats_beyond_c()
            && !to_power
            && below_750_ra
            && gear_not_downlocked;
        let flaps_appr_condition = ((flaps_slats_sheet.flaps_beyond_d()
            && !flaps_slats_sheet.flaps_beyond_f()
            && all_ra_failed)
            || (flaps_slats_sheet.flaps_beyond_f() && all_ra_failed_or_ncd))
            && flight_phases_sheet.flight_phase().number() == 6
            && gear_not_downlocked;

        let reset_pulse = self.below_750_pulse.update(below_750_condition)
            | self.flaps_appr_pulse.update(flaps_appr_condition);
        self.lg_not_down_no_cancel = (below_750_condition || flaps_appr_condition) && !reset_pulse;

        let n1 = |engine| signals.eng_n1(engine).value_or(Ratio::new::<percent>(0.0));
        let masters_off = !signals.eng_master_lever_select_on(1).value_or(false)
            && !signals.eng_master_lever_select_on(2).value_or(false);
        let appr_n1 = (n1(1) < Ratio::new::<percent>(75.0) && n1(2) < Ratio::new::<percent>(75.0))
            || (n1(1) < Ratio::new::<percent>(97.0)
                && n1(2) < Ratio::new::<percent>(97.0)
                && masters_off);

        self.lg_not_down =
            gear_not_downlocked && !alt_inhibit && !to_power && appr_n1 && below_750_ra;

        let phase = flight_phases_sheet.flight_phase().number();
        self.lg_lever_red_arrow = !((phase == 6 && !all_ra_failed) || phase == 4 || phase == 5)
            && (self.lg_not_down_no_cancel || self.lg_not_down);
    }
}

impl LgNotDown for LgNotDownActivation {
    fn lg_not_down(&self) -> bool {
        self.lg_not_down
    }

    fn lg_not_down_no_cancel(&self) -> bool {
        self.lg_not_down_no_cancel
    }

    fn lg_lever_red_arrow(&self) -> bool {
        self.lg_lever_red_arrow
    }
}

pub(in crate::flight_warning::runtime) trait FlapsSlatsPosition {
    fn flaps_below_a(&self) -> bool;
    fn flaps_beyond_d(&self) -> bool;
    fn flaps_beyond_f(&self) -> bool;
    fn slats_below_d(&self) -> bool;
    fn slats_beyond_g(&self) -> bool;
    fn flaps_beyond_d_or_slats_beyond_c(&self) -> bool;
}

/// Compares the flap and slat synchro angles with the positions marked on the FWS sheets.
#[derive(Default)]
pub(in crate::flight_warning::runtime) struct FlapsSlatsPositionActivation {
    flaps_below_a: bool,
    flaps_beyond_d: bool,
    flaps_beyond_f: bool,
    slats_below_d: bool,
    slats_beyond_g: bool,
    flaps_beyond_d_or_slats_beyond_c: bool,
}

impl FlapsSlatsPositionActivation {
    pub fn update(&mut self, signals: &(impl FlapsPosition + SlatsPosition)) {
        let flaps = signals.flaps_position().normal_value();
        let slats = signals.slats_position().normal_value();
        let flaps_beyond = |synchro| flaps.map_or(false, |f| f > Angle::new::<degree>(synchro));
        let slats_beyond = |synchro| slats.map_or(false, |s| s > Angle::new::<degree>(synchro));

        self.flaps_below_a = flaps.map_or(false, |f| f < Angle::new::<degree>(65.));
        self.flaps_beyond_d = flaps_beyond(152.);
        self.flaps_beyond_f = flaps_beyond(179.);
        self.slats_below_d = slats.map_or(false, |s| s < Angle::new::<degree>(210.46));
        self.slats_beyond_g = slats_beyond(309.53);
        self.flaps_beyond_d_or_slats_beyond_c = self.flaps_beyond_d || slats_beyond(198.1);
    }
}

impl FlapsSlatsPosition for FlapsSlatsPositionActivation {
    fn flaps_below_a(&self) -> bool {
        self.flaps_below_a
    }

    fn flaps_beyond_d(&self) -> bool {
        self.flaps_beyond_d
    }

    fn flaps_beyond_f(&self) -> bool {
        self.flaps_beyond_f
    }

    fn slats_below_d(&self) -> bool {
        self.slats_below_d
    }

    fn slats_beyond_g(&self) -> bool {
        self.slats_beyond_g
    }

    fn flaps_beyond_d_or_slats_beyond_c(&self) -> bool {
        self.flaps_beyond_d_or_slats_beyond_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_warning::test::*;

    #[cfg(test)]
    mod lg_downlocked_activation_tests {
        use super::*;

        #[test]
        fn gear_down_is_downlocked() {
            let mut sheet = LgDownlockedActivation::default();
            sheet.update(test_bed().gear_down().parameters());
            assert!(sheet.main_lg_downlocked());
            assert!(sheet.lg_downlocked());
        }

        #[test]
        fn gear_up_is_not_downlocked() {
            let mut sheet = LgDownlockedActivation::default();
            sheet.update(test_bed().gear_up().parameters());
            assert!(!sheet.main_lg_downlocked());
            assert!(!sheet.lg_downlocked());
        }

        #[test]
        fn single_lgciu_is_trusted_when_the_other_is_lost() {
            let mut sheet = LgDownlockedActivation::default();
            sheet.update(test_bed().gear_down().lgciu_word_1_failed(2).parameters());
            assert!(sheet.lg_downlocked());
        }
    }

    #[cfg(test)]
    mod flaps_slats_position_activation_tests {
        use super::*;

        #[test]
        fn takeoff_flaps_are_between_a_and_f() {
            let mut sheet = FlapsSlatsPositionActivation::default();
            sheet.update(test_bed().flaps_slats_in_takeoff_config().parameters());
            assert!(!sheet.flaps_below_a());
            assert!(!sheet.flaps_beyond_f());
            assert!(!sheet.slats_below_d());
            assert!(!sheet.slats_beyond_g());
        }

        #[test]
        fn invalid_positions_compare_false() {
            let mut sheet = FlapsSlatsPositionActivation::default();
            sheet.update(test_bed().parameters());
            assert!(!sheet.flaps_below_a());
            assert!(!sheet.flaps_beyond_d_or_slats_beyond_c());
        }
    }

    #[cfg(test)]
    mod lg_not_down_activation_tests {
        use super::*;

        struct Sheets {
            flight_phases: FlightPhasesDefActivation,
            ground: GroundDetectionActivation,
            lg_downlocked: LgDownlockedActivation,
            to_power: EngTakeoffPowerActivation,
            flaps_slats: FlapsSlatsPositionActivation,
            lg_not_down: LgNotDownActivation,
        }

        impl Sheets {
            fn new() -> Self {
                Self {
                    flight_phases: Default::default(),
                    ground: Default::default(),
                    lg_downlocked: Default::default(),
                    to_power: Default::default(),
                    flaps_slats: Default::default(),
                    lg_not_down: Default::default(),
                }
            }

            fn update(&mut self, test_bed: A380FwsParameterTestBed) -> &LgNotDownActivation {
                let delta = std::time::Duration::from_millis(100);
                let parameters = test_bed.parameters();
                self.flight_phases.update(parameters);
                self.ground.update(delta, parameters);
                self.lg_downlocked.update(parameters);
                self.to_power.update(delta, parameters);
                self.flaps_slats.update(parameters);
                self.lg_not_down.update(
                    parameters,
                    &self.flight_phases,
                    &self.ground,
                    &self.lg_downlocked,
                    &self.to_power,
                    &self.flaps_slats,
                );
                &self.lg_not_down
            }
        }

        fn approach() -> A380FwsParameterTestBed {
            test_bed()
                .in_flight()
                .gear_up()
                .flight_phase(6)
                .engines_running()
                .radio_heights(Length::new::<foot>(600.0))
        }

        #[test]
        fn gear_up_below_750_ft_with_idle_thrust() {
            let mut sheets = Sheets::new();
            let sheet = sheets.update(approach());
            assert!(sheet.lg_not_down());
            assert!(!sheet.lg_not_down_no_cancel());
        }

        #[test]
        fn gear_down_clears_the_warning() {
            let mut sheets = Sheets::new();
            let sheet = sheets.update(approach().gear_down());
            assert!(!sheet.lg_not_down());
        }

        #[test]
        fn landing_flaps_make_it_non_cancellable_after_the_first_update() {
            let mut sheets = Sheets::new();
            let test_bed = || approach().flaps_slats_in_landing_config();
            assert!(!sheets.update(test_bed()).lg_not_down_no_cancel());
            assert!(sheets.update(test_bed()).lg_not_down_no_cancel());
        }

        #[test]
        fn red_arrow_is_shown_below_800_ft() {
            let mut sheets = Sheets::new();
            let sheet = sheets.update(approach().flight_phase(7));
            assert!(sheet.lg_lever_red_arrow());

            let sheet = sheets.update(approach());
            assert!(!sheet.lg_lever_red_arrow());
        }
    }
}
