use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;

pub(in crate::flight_warning::runtime) trait Fire {
    fn eng_fire(&self, engine: u8) -> bool;
    fn apu_fire(&self) -> bool;
    fn eng_fire_pb_out(&self, engine: u8) -> bool;
    fn apu_fire_pb_out(&self) -> bool;
    fn eng_agent_discharged(&self, engine: u8, agent: u8) -> bool;
    fn apu_agent_discharged(&self) -> bool;

    /// The discharge delay after pushing the fire push-button has elapsed for the given agent.
    fn eng_agent_discharge_due(&self, engine: u8, agent: u8) -> bool;

    /// Any fire test is running. This forces the master warning and the CRC on.
    fn fire_active(&self) -> bool;

    /// A fire push-button is pushed or a fire test is running on an engine or the APU.
    fn fire_pb_out_or_test(&self) -> bool;
}

struct EngineFire {
    agent_1_delay: ConfirmationNode,
    agent_2_delay: ConfirmationNode,
    fire: bool,
    test: bool,
    pb_out: bool,
    agent_discharged: [bool; 2],
    agent_discharge_due: [bool; 2],
}

impl EngineFire {
    fn new() -> Self {
        Self {
            agent_1_delay: ConfirmationNode::new_leading(Duration::from_secs(10)),
            agent_2_delay: ConfirmationNode::new_leading(Duration::from_secs(30)),
            fire: false,
            test: false,
            pb_out: false,
            agent_discharged: [false; 2],
            agent_discharge_due: [false; 2],
        }
    }

    fn update(
        &mut self,
        delta: Duration,
        engine: u8,
        signals: &(impl EngFireDetected + EngFireTest + EngFirePbOut + EngAgentDischarged),
        on_ground: bool,
    ) {
        self.test = signals.eng_fire_test(engine).value_or(false);
        self.fire = signals.eng_fire_detected(engine).value_or(false) || self.test;
        self.pb_out = signals.eng_fire_pb_out(engine).value_or(false);
        self.agent_discharged = [
            signals.eng_agent_discharged(engine, 1).value_or(false),
            signals.eng_agent_discharged(engine, 2).value_or(false),
        ];

        self.agent_discharge_due = [
            self.agent_1_delay.update(self.pb_out, delta),
            self.agent_2_delay.update(
                self.pb_out && self.agent_discharged[0] && !on_ground,
                delta,
            ),
        ];
    }
}

pub(in crate::flight_warning::runtime) struct FireActivation {
    engines: [EngineFire; 2],
    apu_fire: bool,
    apu_fire_pb_out: bool,
    apu_agent_discharged: bool,
    fire_active: bool,
    fire_pb_out_or_test: bool,
}

impl Default for FireActivation {
    fn default() -> Self {
        Self {
            engines: [EngineFire::new(), EngineFire::new()],
            apu_fire: false,
            apu_fire_pb_out: false,
            apu_agent_discharged: false,
            fire_active: false,
            fire_pb_out_or_test: false,
        }
    }
}

impl FireActivation {
    fn engine(&self, engine: u8) -> &EngineFire {
        match engine {
            1 | 2 => &self.engines[engine as usize - 1],
            _ => panic!("Invalid engine number {}", engine),
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl EngFireDetected
              + EngFireTest
              + EngFirePbOut
              + EngAgentDischarged
              + ApuFire
              + CargoSmokeTest),
        ground_sheet: &impl GroundDetection,
    ) {
        for (engine, fire) in (1..=2).zip(self.engines.iter_mut()) {
            fire.update(delta, engine, signals, ground_sheet.ground());
        }

        let apu_test = signals.apu_fire_test().value_or(false);
        self.apu_fire = signals.apu_fire_detected().value_or(false) || apu_test;
        self.apu_fire_pb_out = signals.apu_fire_pb_out().value_or(false);
        self.apu_agent_discharged = signals.apu_agent_discharged().value_or(false);

        let any_engine_test = self.engines.iter().any(|engine| engine.test);
        self.fire_active =
            any_engine_test || apu_test || signals.cargo_smoke_test().value_or(false);
        self.fire_pb_out_or_test = self
            .engines
            .iter()
            .any(|engine| engine.pb_out || engine.test)
            || self.apu_fire_pb_out
            || apu_test;
    }
}

impl Fire for FireActivation {
    fn eng_fire(&self, engine: u8) -> bool {
        self.engine(engine).fire
    }

    fn apu_fire(&self) -> bool {
        self.apu_fire
    }

    fn eng_fire_pb_out(&self, engine: u8) -> bool {
        self.engine(engine).pb_out
    }

    fn apu_fire_pb_out(&self) -> bool {
        self.apu_fire_pb_out
    }

    fn eng_agent_discharged(&self, engine: u8, agent: u8) -> bool {
        match agent {
            1 | 2 => self.engine(engine).agent_discharged[agent as usize - 1],
            _ => panic!("Invalid agent number {}", agent),
        }
    }

    fn apu_agent_discharged(&self) -> bool {
        self.apu_agent_discharged
    }

    fn eng_agent_discharge_due(&self, engine: u8, agent: u8) -> bool {
        match agent {
            1 | 2 => self.engine(engine).agent_discharge_due[agent as usize - 1],
            _ => panic!("Invalid agent number {}", agent),
        }
    }

    fn fire_active(&self) -> bool {
        self.fire_active
    }

    fn fire_pb_out_or_test(&self) -> bool {
        self.fire_pb_out_or_test
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
    fn detected_fire_is_no_fire_test() {
        let mut sheet = FireActivation::default();
        sheet.update(
            Duration::from_secs(1),
            test_bed().eng_fire_detected(2).parameters(),
            &IN_FLIGHT,
        );
        assert!(!sheet.eng_fire(1));
        assert!(sheet.eng_fire(2));
        assert!(!sheet.fire_active());
    }

    #[test]
    fn fire_test_forces_fire_active() {
        let mut sheet = FireActivation::default();
        sheet.update(
            Duration::from_secs(1),
            test_bed().apu_fire_test().parameters(),
            &IN_FLIGHT,
        );
        assert!(sheet.apu_fire());
        assert!(sheet.fire_active());
        assert!(sheet.fire_pb_out_or_test());
    }

    #[test]
    fn cargo_smoke_test_forces_fire_active() {
        let mut sheet = FireActivation::default();
        sheet.update(
            Duration::from_secs(1),
            test_bed().cargo_smoke_test().parameters(),
            &IN_FLIGHT,
        );
        assert!(sheet.fire_active());
        assert!(!sheet.fire_pb_out_or_test());
    }

    #[test]
    fn agent_1_is_due_10_seconds_after_pushing_the_fire_pb() {
        let mut sheet = FireActivation::default();
        let test_bed = test_bed().eng_fire_detected(1).eng_fire_pb_out(1);
        sheet.update(Duration::from_secs(9), test_bed.parameters(), &IN_FLIGHT);
        assert!(!sheet.eng_agent_discharge_due(1, 1));
        sheet.update(Duration::from_secs(1), test_bed.parameters(), &IN_FLIGHT);
        assert!(sheet.eng_agent_discharge_due(1, 1));
        assert!(!sheet.eng_agent_discharge_due(1, 2));
    }

    #[test]
    fn agent_2_is_not_due_on_ground() {
        let mut sheet = FireActivation::default();
        let test_bed = test_bed()
            .eng_fire_detected(1)
            .eng_fire_pb_out(1)
            .eng_agent_discharged(1, 1);
        sheet.update(
            Duration::from_secs(30),
            test_bed.parameters(),
            &TestGround { ground: true },
        );
        assert!(sheet.eng_agent_discharged(1, 1));
        assert!(!sheet.eng_agent_discharge_due(1, 2));

        sheet.update(Duration::from_secs(30), test_bed.parameters(), &IN_FLIGHT);
        assert!(sheet.eng_agent_discharge_due(1, 2));
    }
}
