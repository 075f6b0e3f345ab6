use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;
use systems::flight_warning::utils::FwcSsm;
use uom::si::{f64::*, ratio::percent};

pub(in crate::flight_warning::runtime) trait Pressurization {
    fn cpc_1_fault(&self) -> bool;
    fn cpc_2_fault(&self) -> bool;

    /// Both CPCs have been faulty for 3 s.
    fn cpc_1_2_fault(&self) -> bool;

    /// The cabin is still pressurised on ground with the engines stopped.
    fn excess_residual_pressure(&self) -> bool;

    /// The outflow valve stayed below 85 % open after landing. Only a valve opening beyond 95 %
    /// or 30 s in phase 1 resets it.
    fn outflow_valve_not_open(&self) -> bool;

    fn safety_valve_not_closed(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct PressurizationActivation {
    cpc_1_2_fault_conf: ConfirmationNode,
    engines_off_on_ground_conf: ConfirmationNode,
    excess_residual_pressure_conf: ConfirmationNode,
    outflow_valve_not_open_conf: ConfirmationNode,
    outflow_valve_reset_conf: ConfirmationNode,
    outflow_valve_not_open_mem: MemoryNode,
    safety_valve_open_in_cruise_conf: ConfirmationNode,
    cpc_1_fault: bool,
    cpc_2_fault: bool,
    cpc_1_2_fault: bool,
    excess_residual_pressure: bool,
    outflow_valve_not_open: bool,
    safety_valve_not_closed: bool,
}

impl Default for PressurizationActivation {
    fn default() -> Self {
        Self {
            cpc_1_2_fault_conf: ConfirmationNode::new_leading(Duration::from_secs(3)),
            engines_off_on_ground_conf: ConfirmationNode::new_leading(Duration::from_secs(7)),
            excess_residual_pressure_conf: ConfirmationNode::new_leading(Duration::from_secs(5)),
            outflow_valve_not_open_conf: ConfirmationNode::new_leading(Duration::from_secs(70)),
            outflow_valve_reset_conf: ConfirmationNode::new_leading(Duration::from_secs(30)),
            outflow_valve_not_open_mem: MemoryNode::new(true),
            safety_valve_open_in_cruise_conf: ConfirmationNode::new_leading(Duration::from_secs(
                60,
            )),
            cpc_1_fault: false,
            cpc_2_fault: false,
            cpc_1_2_fault: false,
            excess_residual_pressure: false,
            outflow_valve_not_open: false,
            safety_valve_not_closed: false,
        }
    }
}

impl PressurizationActivation {
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl CpcDiscreteWord
              + ExcessResidualPressure
              + OutflowValveOpenAmount
              + ManOutflowValveOpenAmount
              + SafetyValveOpenAmount
              + EngCoreSpeedAtOrAboveIdle),
        flight_phases_sheet: &impl FlightPhasesDef,
        ground_sheet: &impl GroundDetection,
    ) {
        let phase = flight_phases_sheet.flight_phase().number();

        self.cpc_1_fault = signals.cpc_discrete_word(1).is_inv();
        self.cpc_2_fault = signals.cpc_discrete_word(2).is_inv();
        self.cpc_1_2_fault = self
            .cpc_1_2_fault_conf
            .update(self.cpc_1_fault && self.cpc_2_fault, delta);

        let engines_off = (1..=2).all(|engine| {
            !signals
                .eng_core_speed_at_or_above_idle(engine)
                .value_or(false)
        });
        let engines_off_on_ground = self
            .engines_off_on_ground_conf
            .update(ground_sheet.ground() && engines_off, delta);
        self.excess_residual_pressure = self.excess_residual_pressure_conf.update(
            engines_off_on_ground && signals.excess_residual_pressure().value_or(false),
            delta,
        );

        let controlling_cpc = if signals.cpc_discrete_word(1).bit_value_or(11, false) {
            1
        } else {
            2
        };
        let outflow_valve_open = signals
            .outflow_valve_open_amount(controlling_cpc)
            .value_or(
                signals
                    .man_outflow_valve_open_amount()
                    .value_or(Ratio::new::<percent>(100.)),
            )
            .get::<percent>();
        let not_open = self.outflow_valve_not_open_conf.update(
            outflow_valve_open < 85. && matches!(phase, 8..=10),
            delta,
        );
        let reset = outflow_valve_open > 95.
            || self.outflow_valve_reset_conf.update(phase == 1, delta);
        self.outflow_valve_not_open = self.outflow_valve_not_open_mem.update(not_open, reset);

        let safety_valve_open = signals
            .safety_valve_open_amount()
            .value_or(Ratio::new::<percent>(0.))
            .get::<percent>()
            > 0.;
        let open_in_cruise = self
            .safety_valve_open_in_cruise_conf
            .update(safety_valve_open, delta);
        self.safety_valve_not_closed = (safety_valve_open && matches!(phase, 1..=3))
            || (open_in_cruise && phase == 6);
    }
}

impl Pressurization for PressurizationActivation {
    fn cpc_1_fault(&self) -> bool {
        self.cpc_1_fault
    }

    fn cpc_2_fault(&self) -> bool {
        self.cpc_2_fault
    }

    fn cpc_1_2_fault(&self) -> bool {
        self.cpc_1_2_fault
    }

    fn excess_residual_pressure(&self) -> bool {
        self.excess_residual_pressure
    }

    fn outflow_valve_not_open(&self) -> bool {
        self.outflow_valve_not_open
    }

    fn safety_valve_not_closed(&self) -> bool {
        self.safety_valve_not_closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_warning::test::*;
    use rstest::rstest;

    struct Sheets {
        flight_phases: FlightPhasesDefActivation,
        ground: GroundDetectionActivation,
        pressurization: PressurizationActivation,
    }

    impl Sheets {
        fn new() -> Self {
            Self {
                flight_phases: Default::default(),
                ground: Default::default(),
                pressurization: Default::default(),
            }
        }

        fn update(&mut self, delta: Duration, test_bed: &A380FwsParameterTestBed) -> &Self {
            self.flight_phases.update(test_bed.parameters());
            self.ground.update(delta, test_bed.parameters());
            self.pressurization.update(
                delta,
                test_bed.parameters(),
                &self.flight_phases,
                &self.ground,
            );
            self
        }

        fn run(&mut self, duration: Duration, test_bed: &A380FwsParameterTestBed) -> &Self {
            let tick = Duration::from_millis(500);
            let mut elapsed = Duration::ZERO;
            while elapsed < duration {
                self.update(tick, test_bed);
                elapsed += tick;
            }
            self
        }
    }

    #[cfg(test)]
    mod cpc_tests {
        use super::*;

        #[test]
        fn single_cpc_fault_is_immediate() {
            let mut sheets = Sheets::new();
            let sheet = &sheets
                .update(Duration::from_millis(100), &test_bed().cpc_healthy().cpc_failed(2))
                .pressurization;
            assert!(!sheet.cpc_1_fault());
            assert!(sheet.cpc_2_fault());
            assert!(!sheet.cpc_1_2_fault());
        }

        #[test]
        fn dual_cpc_fault_is_confirmed_for_3_seconds() {
            let mut sheets = Sheets::new();
            let failed = test_bed().cpc_failed(1).cpc_failed(2);
            assert!(
                !sheets
                    .run(Duration::from_millis(2500), &failed)
                    .pressurization
                    .cpc_1_2_fault()
            );
            assert!(
                sheets
                    .run(Duration::from_secs(1), &failed)
                    .pressurization
                    .cpc_1_2_fault()
            );
        }
    }

    #[cfg(test)]
    mod residual_pressure_tests {
        use super::*;

        fn parked_with_residual_pressure() -> A380FwsParameterTestBed {
            test_bed().parked().excess_residual_pressure()
        }

        #[test]
        fn residual_pressure_waits_for_the_engines_to_be_off() {
            let mut sheets = Sheets::new();
            assert!(
                !sheets
                    .run(Duration::from_secs(11), &parked_with_residual_pressure())
                    .pressurization
                    .excess_residual_pressure()
            );
            assert!(
                sheets
                    .run(Duration::from_secs(2), &parked_with_residual_pressure())
                    .pressurization
                    .excess_residual_pressure()
            );
        }

        #[test]
        fn running_engine_suppresses_residual_pressure() {
            let mut sheets = Sheets::new();
            let bed = parked_with_residual_pressure().one_engine_running();
            assert!(
                !sheets
                    .run(Duration::from_secs(30), &bed)
                    .pressurization
                    .excess_residual_pressure()
            );
        }
    }

    #[cfg(test)]
    mod valve_tests {
        use super::*;

        #[test]
        fn outflow_valve_not_open_after_landing_latches() {
            let mut sheets = Sheets::new();
            let landed = || test_bed().parked().flight_phase(9);
            sheets.run(Duration::from_secs(69), &landed().outflow_valve_open(50.));
            assert!(!sheets.pressurization.outflow_valve_not_open());

            sheets.run(Duration::from_secs(2), &landed().outflow_valve_open(50.));
            assert!(sheets.pressurization.outflow_valve_not_open());

            sheets.run(Duration::from_secs(1), &landed().outflow_valve_open(90.));
            assert!(sheets.pressurization.outflow_valve_not_open());

            sheets.run(Duration::from_secs(1), &landed().outflow_valve_open(100.));
            assert!(!sheets.pressurization.outflow_valve_not_open());
        }

        #[test]
        fn outflow_valve_memory_resets_after_30_seconds_in_phase_1() {
            let mut sheets = Sheets::new();
            sheets.run(
                Duration::from_secs(71),
                &test_bed().parked().flight_phase(10).outflow_valve_open(50.),
            );
            assert!(sheets.pressurization.outflow_valve_not_open());

            let parked = test_bed().parked().outflow_valve_open(50.);
            sheets.run(Duration::from_secs(29), &parked);
            assert!(sheets.pressurization.outflow_valve_not_open());
            sheets.run(Duration::from_secs(2), &parked);
            assert!(!sheets.pressurization.outflow_valve_not_open());
        }

        #[test]
        fn manual_outflow_valve_reading_is_the_fallback() {
            let mut sheets = Sheets::new();
            let bed = test_bed()
                .parked()
                .flight_phase(9)
                .cpc_failed(1)
                .cpc_failed(2)
                .man_outflow_valve_open(40.);
            sheets.run(Duration::from_secs(71), &bed);
            assert!(sheets.pressurization.outflow_valve_not_open());
        }

        #[rstest]
        #[case(1, true)]
        #[case(3, true)]
        #[case(4, false)]
        #[case(6, false)]
        fn open_safety_valve_on_ground_and_in_climb(#[case] phase: u8, #[case] expected: bool) {
            let mut sheets = Sheets::new();
            let bed = test_bed().parked().flight_phase(phase).safety_valve_open(5.);
            sheets.update(Duration::from_millis(100), &bed);
            assert_eq!(sheets.pressurization.safety_valve_not_closed(), expected);
        }

        #[test]
        fn open_safety_valve_in_cruise_is_confirmed_for_a_minute() {
            let mut sheets = Sheets::new();
            let cruise = test_bed()
                .in_flight()
                .radio_heights_at_cruise()
                .flight_phase(6)
                .safety_valve_open(5.);
            sheets.run(Duration::from_secs(59), &cruise);
            assert!(!sheets.pressurization.safety_valve_not_closed());
            sheets.run(Duration::from_secs(2), &cruise);
            assert!(sheets.pressurization.safety_valve_not_closed());
        }
    }
}
