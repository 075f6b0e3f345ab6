use std::time::Duration;

use a380_systems::flight_warning::{
    A380FlightWarningSystem, A380FwsParameterTable, FwsConfig, FwsOutput, RegistryError,
};
use tracing::info;

use crate::scenario::{initial_parameters, Frame};

/// Drives a flight warning system through the frames of a scenario at a fixed tick.
pub struct Replay {
    fws: A380FlightWarningSystem,
    parameters: A380FwsParameterTable,
    tick: Duration,
    elapsed: Duration,
    last: FwsOutput,
}

impl Replay {
    pub fn new(config: FwsConfig, tick: Duration) -> Result<Self, RegistryError> {
        Ok(Self {
            fws: A380FlightWarningSystem::new(config)?,
            parameters: initial_parameters(),
            tick,
            elapsed: Duration::ZERO,
            last: FwsOutput::default(),
        })
    }

    pub fn run_frame(&mut self, frame: &Frame) {
        frame.inputs.apply(&mut self.parameters);

        let mut remaining = Duration::from_millis(frame.duration_ms);
        while !remaining.is_zero() {
            let delta = remaining.min(self.tick);
            self.step(delta);
            remaining -= delta;
        }
    }

    fn step(&mut self, delta: Duration) {
        self.fws.update(delta, &self.parameters);
        self.elapsed += delta;

        let output = self.fws.output();
        self.log_changes(&output);
        self.last = output;
    }

    fn log_changes(&self, output: &FwsOutput) {
        let at = self.elapsed.as_millis();
        let last = &self.last;
        if output.master_warning != last.master_warning {
            info!(at, on = output.master_warning, "MASTER WARNING");
        }
        if output.master_caution != last.master_caution {
            info!(at, on = output.master_caution, "MASTER CAUTION");
        }
        if output.continuous_chime != last.continuous_chime {
            info!(at, on = output.continuous_chime, "Continuous repetitive chime");
        }
        if output.single_chime {
            info!(at, "Single chime");
        }
        if output.presented != last.presented {
            info!(at, presented = ?output.presented, "Presented alerts");
        }
        if output.memo_left != last.memo_left || output.memo_right != last.memo_right {
            info!(at, left = ?output.memo_left, right = ?output.memo_right, "Memo");
        }
    }

    pub fn output(&self) -> &FwsOutput {
        &self.last
    }
}
