use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;

pub(in crate::flight_warning::runtime) trait EngRunning {
    fn eng_1_running(&self) -> bool;
    fn eng_2_running(&self) -> bool;

    fn both_engines_running(&self) -> bool {
        self.eng_1_running() && self.eng_2_running()
    }
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct EngRunningActivation {
    eng_1_running: bool,
    eng_2_running: bool,
}

impl EngRunningActivation {
    pub fn update(&mut self, signals: &(impl EngMasterLeverSelectOn + EngCoreSpeedAtOrAboveIdle)) {
        let running = |engine| {
            signals.eng_master_lever_select_on(engine).value_or(false)
                && signals.eng_core_speed_at_or_above_idle(engine).value_or(false)
        };
        self.eng_1_running = running(1);
        self.eng_2_running = running(2);
    }
}

impl EngRunning for EngRunningActivation {
    fn eng_1_running(&self) -> bool {
        self.eng_1_running
    }

    fn eng_2_running(&self) -> bool {
        self.eng_2_running
    }
}

pub(in crate::flight_warning::runtime) trait EngTakeoffPower {
    /// At least one engine is set to take off power, or was until recently and the aircraft has
    /// not climbed above 1500 ft yet.
    fn eng_1_or_2_to_power(&self) -> bool;

    fn thrust_levers_not_set(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct EngTakeoffPowerActivation {
    to_power_conf: ConfirmationNode,
    eng_1_or_2_to_power: bool,
    thrust_levers_not_set: bool,
}

impl Default for EngTakeoffPowerActivation {
    fn default() -> Self {
        Self {
            to_power_conf: ConfirmationNode::new_falling(Duration::from_secs(60)),
            eng_1_or_2_to_power: false,
            thrust_levers_not_set: false,
        }
    }
}

impl EngTakeoffPowerActivation {
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl EngTla + FlexThrustLimit + AutothrustLeverWarning + RadioHeight),
    ) {
        let flex = signals.flex_thrust_limit().value_or(false);
        let at_to_power = |engine| {
            let tla = signals
                .eng_tla(engine)
                .value_or(Angle::new::<degree>(0.0));
            tla >= Angle::new::<degree>(45.0) || (tla >= Angle::new::<degree>(35.0) && flex)
        };
        let to_power = at_to_power(1) || at_to_power(2);
        let recently_at_to_power = self.to_power_conf.update(to_power, delta);

        let ra_above_1500 = (1..=3).any(|index| {
            signals
                .radio_height(index)
                .value_or(Length::new::<foot>(0.0))
                > Length::new::<foot>(1500.0)
        });

        self.eng_1_or_2_to_power = to_power || (recently_at_to_power && !ra_above_1500);
        self.thrust_levers_not_set = signals.autothrust_lever_warning_flex().value_or(false)
            || signals.autothrust_lever_warning_toga().value_or(false);
    }
}

impl EngTakeoffPower for EngTakeoffPowerActivation {
    fn eng_1_or_2_to_power(&self) -> bool {
        self.eng_1_or_2_to_power
    }

    fn thrust_levers_not_set(&self) -> bool {
        self.thrust_levers_not_set
    }
}

pub(in crate::flight_warning::runtime) trait EngDualFault {
    fn eng_dual_fault(&self) -> bool;
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct EngDualFaultActivation {
    eng_dual_fault: bool,
}

impl EngDualFaultActivation {
    pub fn update(
        &mut self,
        signals: &(impl EngFirePbOut + EngFuelValveOpen + EngCoreSpeedAtOrAboveIdle),
        ground_sheet: &impl GroundDetection,
        eng_running_sheet: &impl EngRunning,
    ) {
        let both_fire_pb_out = signals.eng_fire_pb_out(1).value_or(false)
            && signals.eng_fire_pb_out(2).value_or(false);
        let both_fuel_valves_closed = !signals.eng_fuel_valve_open(1).value_or(true)
            && !signals.eng_fuel_valve_open(2).value_or(true);
        let both_off = !eng_running_sheet.eng_1_running() && !eng_running_sheet.eng_2_running();
        let both_below_min_idle = !signals.eng_core_speed_at_or_above_idle(1).value_or(true)
            && !signals.eng_core_speed_at_or_above_idle(2).value_or(true);

        self.eng_dual_fault = !ground_sheet.ground()
            && (both_fire_pb_out || both_fuel_valves_closed || both_off || both_below_min_idle);
    }
}

impl EngDualFault for EngDualFaultActivation {
    fn eng_dual_fault(&self) -> bool {
        self.eng_dual_fault
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

    #[cfg(test)]
    mod eng_running_activation_tests {
        use super::*;

        #[test]
        fn running_requires_master_lever_and_core_speed() {
            let mut sheet = EngRunningActivation::default();
            sheet.update(test_bed().one_engine_running().parameters());
            assert!(sheet.eng_1_running());
            assert!(!sheet.eng_2_running());
            assert!(!sheet.both_engines_running());

            sheet.update(test_bed().engines_running().parameters());
            assert!(sheet.both_engines_running());
        }
    }

    #[cfg(test)]
    mod eng_takeoff_power_activation_tests {
        use super::*;

        #[test]
        fn toga_is_takeoff_power() {
            let mut sheet = EngTakeoffPowerActivation::default();
            sheet.update(
                Duration::from_secs(1),
                test_bed().engines_at_takeoff_power().parameters(),
            );
            assert!(sheet.eng_1_or_2_to_power());
        }

        #[test]
        fn flex_needs_flex_temperature() {
            let mut sheet = EngTakeoffPowerActivation::default();
            sheet.update(
                Duration::from_secs(1),
                test_bed()
                    .eng_tla(1, Angle::new::<degree>(35.0))
                    .parameters(),
            );
            assert!(!sheet.eng_1_or_2_to_power());

            sheet.update(
                Duration::from_secs(1),
                test_bed()
                    .eng_tla(1, Angle::new::<degree>(35.0))
                    .flex_thrust_limit()
                    .parameters(),
            );
            assert!(sheet.eng_1_or_2_to_power());
        }

        #[test]
        fn takeoff_power_is_held_until_1500_ft() {
            let mut sheet = EngTakeoffPowerActivation::default();
            sheet.update(
                Duration::from_secs(1),
                test_bed().engines_at_takeoff_power().parameters(),
            );
            sheet.update(
                Duration::from_secs(10),
                test_bed()
                    .engines_at_climb_power()
                    .radio_heights(Length::new::<foot>(1000.0))
                    .parameters(),
            );
            assert!(sheet.eng_1_or_2_to_power());

            sheet.update(
                Duration::from_secs(10),
                test_bed()
                    .engines_at_climb_power()
                    .radio_heights(Length::new::<foot>(1600.0))
                    .parameters(),
            );
            assert!(!sheet.eng_1_or_2_to_power());
        }
    }

    #[cfg(test)]
    mod eng_dual_fault_activation_tests {
        use super::*;

        #[test]
        fn both_engines_off_in_flight_is_a_dual_fault() {
            let mut running = EngRunningActivation::default();
            let test_bed = test_bed().engines_off();
            running.update(test_bed.parameters());

            let mut sheet = EngDualFaultActivation::default();
            sheet.update(test_bed.parameters(), &TestGround { ground: false }, &running);
            assert!(sheet.eng_dual_fault());

            sheet.update(test_bed.parameters(), &TestGround { ground: true }, &running);
            assert!(!sheet.eng_dual_fault());
        }

        #[test]
        fn one_engine_running_is_no_dual_fault() {
            let mut running = EngRunningActivation::default();
            let test_bed = test_bed().one_engine_running();
            running.update(test_bed.parameters());

            let mut sheet = EngDualFaultActivation::default();
            sheet.update(test_bed.parameters(), &TestGround { ground: false }, &running);
            assert!(!sheet.eng_dual_fault());
        }
    }
}
