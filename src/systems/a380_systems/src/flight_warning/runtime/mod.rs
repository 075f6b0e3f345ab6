use std::time::Duration;

use systems::flight_warning::logic::ConfirmationNode;
use systems::flight_warning::warnings::EcamCode;
use tracing::info;

use super::config::FwsConfig;
use super::output::{FwsOutput, ProcedureState};
use super::parameters::A380FwsParameterTable;
use arbitration::AlertArbitration;
use aural::AuralArbitration;
use memos::MessageComposer;
use network::ConditionNetwork;
use warnings::*;

mod arbitration;
mod aural;
mod memos;
mod network;
mod procedures;
mod warnings;

pub use procedures::{ItemColor, ItemState, ProcedureRegistry, RegistryError};

/// The software which runs on a powered FWS. It evaluates the condition network every update and,
/// once it finished starting, arbitrates the alerts and composes the display lines.
pub(super) struct A380FwsRuntime {
    ready_conf: ConfirmationNode,
    ready: bool,
    network: ConditionNetwork,
    arbitration: AlertArbitration,
    aural: AuralArbitration,
    composer: MessageComposer,
}

impl A380FwsRuntime {
    pub(super) fn new(config: &FwsConfig) -> Self {
        Self {
            ready_conf: ConfirmationNode::new_leading(config.startup_time),
            ready: false,
            network: ConditionNetwork::new(config),
            arbitration: AlertArbitration::default(),
            aural: AuralArbitration::new(config),
            composer: MessageComposer::new(),
        }
    }

    pub(super) fn update(
        &mut self,
        delta: Duration,
        parameters: &A380FwsParameterTable,
        registry: &ProcedureRegistry,
    ) {
        self.network.update(delta, parameters);

        let ready = self.ready_conf.update(true, delta);
        if ready && !self.ready {
            info!("Flight warning system ready");
        }
        self.ready = ready;

        if self.ready {
            self.arbitration.update(&self.network, registry);
            self.aural.update(delta, &self.network, &self.arbitration);
        }
        self.composer
            .update(&self.network, &self.arbitration, registry);
    }

    pub(super) fn ready(&self) -> bool {
        self.ready
    }

    pub(super) fn toggle_item(&mut self, code: EcamCode, index: usize, registry: &ProcedureRegistry) {
        self.arbitration.toggle_item(code, index, registry);
    }

    pub(super) fn output(&self, registry: &ProcedureRegistry) -> FwsOutput {
        let lines = self.composer.lines();
        let active_procedures = self
            .arbitration
            .active_codes(registry)
            .filter_map(|code| {
                let record = self.arbitration.record(code)?;
                let definition = registry.definition(registry.index_of(code)?);
                Some(ProcedureState {
                    code,
                    severity: definition.severity,
                    items_shown: record.shown.clone(),
                    items_active: record.active.clone(),
                    items_completed: record.completed.clone(),
                    item_levels: definition.items.iter().map(|item| item.level).collect(),
                    item_colors: definition.items.iter().map(|item| item.color).collect(),
                })
            })
            .collect();

        FwsOutput {
            master_warning: self.ready
                && (self.arbitration.master_warning()
                    || self.network.fire.fire_active()
                    || self.network.stall.stall_warning()),
            master_caution: self.ready && self.arbitration.master_caution(),
            continuous_chime: self.ready && self.aural.continuous_repetitive_chime(),
            single_chime: self.ready && self.aural.single_chime(),
            single_chime_playing: self.ready && self.aural.single_chime_playing(),
            memo_left: lines.memo_left.clone(),
            memo_right: lines.memo_right.clone(),
            pfd_memo: lines.pfd_memo.clone(),
            status_info: lines.status_info.clone(),
            inop_all_phases: lines.inop_all_phases.clone(),
            inop_appr_ldg: lines.inop_appr_ldg.clone(),
            limitations_all_phases: lines.limitations_all_phases.clone(),
            limitations_appr_ldg: lines.limitations_appr_ldg.clone(),
            limitations_pfd: lines.limitations_pfd.clone(),
            active_procedures,
            presented: self.arbitration.presented().to_vec(),
            recalled: self.arbitration.recalled().to_vec(),
            flight_phase: self.network.flight_phases.flight_phase(),
            to_inhibit: self.network.flight_phase_inhibit.to_inhibit(),
            ldg_inhibit: self.network.flight_phase_inhibit.ldg_inhibit(),
            to_config_normal: self.network.to_config_test.to_config_normal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_warning::test::*;

    fn runtime() -> (A380FwsRuntime, ProcedureRegistry) {
        (
            A380FwsRuntime::new(&FwsConfig::default()),
            ProcedureRegistry::a380().unwrap(),
        )
    }

    #[test]
    fn becomes_ready_after_the_startup_time() {
        let (mut runtime, registry) = runtime();
        runtime.update(
            Duration::from_secs(4),
            test_bed().parked().parameters(),
            &registry,
        );
        assert!(!runtime.ready());

        runtime.update(
            Duration::from_secs(1),
            test_bed().parked().parameters(),
            &registry,
        );
        assert!(runtime.ready());
    }

    #[test]
    fn master_lights_stay_off_while_starting() {
        let (mut runtime, registry) = runtime();
        let fire = test_bed().parked().eng_fire_detected(1).eng_fire_test(2);
        runtime.update(Duration::from_secs(1), fire.parameters(), &registry);

        let output = runtime.output(&registry);
        assert!(!output.master_warning);
        assert!(!output.continuous_chime);
        assert!(output.active_procedures.is_empty());
    }

    #[test]
    fn fire_test_lights_the_master_warning() {
        let (mut runtime, registry) = runtime();
        runtime.update(
            Duration::from_secs(6),
            test_bed().parked().parameters(),
            &registry,
        );
        runtime.update(
            Duration::from_millis(100),
            test_bed().parked().eng_fire_test(1).parameters(),
            &registry,
        );

        let output = runtime.output(&registry);
        assert!(output.master_warning);
        assert!(output.continuous_chime);
    }

    #[test]
    fn output_carries_the_checklist_of_active_procedures() {
        let (mut runtime, registry) = runtime();
        runtime.update(
            Duration::from_secs(6),
            test_bed().parked().parameters(),
            &registry,
        );
        runtime.update(
            Duration::from_millis(100),
            test_bed().parked().eng_fire_detected(1).parameters(),
            &registry,
        );

        let output = runtime.output(&registry);
        let code = output.presented[0];
        let procedure = output.procedure(code).unwrap();
        assert_eq!(procedure.items_completed, vec![false; 5]);
        assert_eq!(procedure.items_shown, vec![true, true, false, false, true]);
        assert_eq!(procedure.item_levels.len(), 5);
        assert_eq!(procedure.item_colors.len(), 5);
        assert_eq!(output.active_procedures.len(), 1);
    }
}
