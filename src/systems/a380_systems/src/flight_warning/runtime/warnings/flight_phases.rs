use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;
use systems::flight_warning::warnings::{FlightPhase, FlightPhases};

/// The flight phase is computed upstream. Everything downstream only needs membership tests against
/// a handful of phase groups and two edges.
pub(in crate::flight_warning::runtime) trait FlightPhasesDef {
    fn flight_phase(&self) -> FlightPhase;
    fn phase_3_pulse(&self) -> bool;
    fn phase_changed_pulse(&self) -> bool;

    fn in_phases(&self, phases: FlightPhases) -> bool {
        phases.contains(self.flight_phase())
    }
    fn phase_126(&self) -> bool {
        self.in_phases(FlightPhases::of(&[1, 2, 6]))
    }
    fn phase_23(&self) -> bool {
        self.in_phases(FlightPhases::of(&[2, 3]))
    }
    fn phase_34(&self) -> bool {
        self.in_phases(FlightPhases::of(&[3, 4]))
    }
    fn phase_345(&self) -> bool {
        self.in_phases(FlightPhases::of(&[3, 4, 5]))
    }
    fn phase_129(&self) -> bool {
        self.in_phases(FlightPhases::of(&[1, 2, 9]))
    }
    fn phase_567(&self) -> bool {
        self.in_phases(FlightPhases::of(&[5, 6, 7]))
    }
    fn phase_67(&self) -> bool {
        self.in_phases(FlightPhases::of(&[6, 7]))
    }
    fn phase_78(&self) -> bool {
        self.in_phases(FlightPhases::of(&[7, 8]))
    }
}

pub(in crate::flight_warning::runtime) struct FlightPhasesDefActivation {
    phase_3_pulse_node: PulseNode,
    previous_phase: PreceedingValueNode<FlightPhase>,
    flight_phase: FlightPhase,
    phase_3_pulse: bool,
    phase_changed_pulse: bool,
}

impl Default for FlightPhasesDefActivation {
    fn default() -> Self {
        Self {
            phase_3_pulse_node: PulseNode::new(true),
            previous_phase: PreceedingValueNode::new(),
            flight_phase: FlightPhase::default(),
            phase_3_pulse: false,
            phase_changed_pulse: false,
        }
    }
}

impl FlightPhasesDefActivation {
    pub fn update(&mut self, signals: &impl FwcFlightPhase) {
        // Without a valid flight phase, assume cruise where the least alerts are inhibited
        self.flight_phase = signals
            .fwc_flight_phase()
            .normal_value()
            .unwrap_or(FlightPhase::AtOrAbove1500Feet);
        self.phase_3_pulse = self
            .phase_3_pulse_node
            .update(self.flight_phase == FlightPhase::FirstEngineTakeOffPower);
        self.phase_changed_pulse = self.previous_phase.update(self.flight_phase) != self.flight_phase;
    }
}

impl FlightPhasesDef for FlightPhasesDefActivation {
    fn flight_phase(&self) -> FlightPhase {
        self.flight_phase
    }

    fn phase_3_pulse(&self) -> bool {
        self.phase_3_pulse
    }

    fn phase_changed_pulse(&self) -> bool {
        self.phase_changed_pulse
    }
}

pub(in crate::flight_warning::runtime) trait FlightPhaseInhibit {
    /// T.O INHIBIT, which suppresses most cautions during the take off roll and initial climb.
    fn to_inhibit(&self) -> bool;

    /// LDG INHIBIT, which suppresses most cautions during the final approach and landing roll.
    fn ldg_inhibit(&self) -> bool;
}

/// Pressing RCL overrides the inhibition until the next flight phase change.
pub(in crate::flight_warning::runtime) struct FlightPhaseInhibitActivation {
    override_mem: MemoryNode,
    to_conf: ConfirmationNode,
    ldg_conf: ConfirmationNode,
    to_inhibit: bool,
    ldg_inhibit: bool,
}

impl FlightPhaseInhibitActivation {
    pub fn new(confirmation_time: Duration) -> Self {
        Self {
            override_mem: MemoryNode::new(false),
            to_conf: ConfirmationNode::new_leading(confirmation_time),
            ldg_conf: ConfirmationNode::new_leading(confirmation_time),
            to_inhibit: false,
            ldg_inhibit: false,
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        flight_phases_sheet: &impl FlightPhasesDef,
        ecp_sheet: &impl Ecp,
    ) {
        let inhibit_overridden = self.override_mem.update(
            ecp_sheet.recall_raw_pulse(),
            flight_phases_sheet.phase_changed_pulse(),
        );

        self.to_inhibit = self.to_conf.update(
            flight_phases_sheet.phase_345() && !inhibit_overridden,
            delta,
        );
        self.ldg_inhibit = self.ldg_conf.update(
            flight_phases_sheet.phase_78() && !inhibit_overridden,
            delta,
        );
    }
}

impl Default for FlightPhaseInhibitActivation {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl FlightPhaseInhibit for FlightPhaseInhibitActivation {
    fn to_inhibit(&self) -> bool {
        self.to_inhibit
    }

    fn ldg_inhibit(&self) -> bool {
        self.ldg_inhibit
    }
}
