use std::time::Duration;

use super::warnings::*;
use crate::flight_warning::config::FwsConfig;
use crate::flight_warning::parameters::A380FwsParameterTable;
use systems::flight_warning::warnings::FlightPhases;

/// All derived signals of one tick. Every sheet is a field which is only written by [`update`],
/// and a sheet may only read the sheets which are updated before it.
///
/// [`update`]: ConditionNetwork::update
pub(in crate::flight_warning::runtime) struct ConditionNetwork {
    pub(in crate::flight_warning::runtime) flight_phases: FlightPhasesDefActivation,
    pub(in crate::flight_warning::runtime) general_cancel: GeneralCancelActivation,
    pub(in crate::flight_warning::runtime) ecp: EcpActivation,
    pub(in crate::flight_warning::runtime) flight_phase_inhibit: FlightPhaseInhibitActivation,
    pub(in crate::flight_warning::runtime) ground: GroundDetectionActivation,
    pub(in crate::flight_warning::runtime) eng_running: EngRunningActivation,
    pub(in crate::flight_warning::runtime) eng_takeoff_power: EngTakeoffPowerActivation,
    pub(in crate::flight_warning::runtime) eng_dual_fault: EngDualFaultActivation,
    pub(in crate::flight_warning::runtime) hydraulic: HydraulicPressureActivation,
    pub(in crate::flight_warning::runtime) elec: ElecSupplyActivation,
    pub(in crate::flight_warning::runtime) air_cond: AirConditioningActivation,
    pub(in crate::flight_warning::runtime) packs: PacksActivation,
    pub(in crate::flight_warning::runtime) pressurization: PressurizationActivation,
    pub(in crate::flight_warning::runtime) lg_downlocked: LgDownlockedActivation,
    pub(in crate::flight_warning::runtime) adirs: AdirsFaultsActivation,
    pub(in crate::flight_warning::runtime) overspeed: OverspeedActivation,
    pub(in crate::flight_warning::runtime) flaps_slats: FlapsSlatsPositionActivation,
    pub(in crate::flight_warning::runtime) lg_not_down: LgNotDownActivation,
    pub(in crate::flight_warning::runtime) surfaces: TakeoffConfigSurfacesActivation,
    pub(in crate::flight_warning::runtime) speed_brake: SpeedBrakeActivation,
    pub(in crate::flight_warning::runtime) to_speeds: TakeoffSpeedsActivation,
    pub(in crate::flight_warning::runtime) fire: FireActivation,
    pub(in crate::flight_warning::runtime) stall: StallWarningActivation,
    pub(in crate::flight_warning::runtime) anti_ice: AntiIceActivation,
    pub(in crate::flight_warning::runtime) to_memo: ToMemoActivation,
    pub(in crate::flight_warning::runtime) to_config_test: TakeoffConfigTestActivation,
    pub(in crate::flight_warning::runtime) ldg_memo: LdgMemoActivation,
    pub(in crate::flight_warning::runtime) land_asap: LandAsapActivation,
    pub(in crate::flight_warning::runtime) memo_inputs: MemoInputsActivation,
}

impl ConditionNetwork {
    pub fn new(config: &FwsConfig) -> Self {
        Self {
            flight_phases: Default::default(),
            general_cancel: Default::default(),
            ecp: Default::default(),
            flight_phase_inhibit: FlightPhaseInhibitActivation::new(
                config.flight_phase_inhibit_confirmation,
            ),
            ground: Default::default(),
            eng_running: Default::default(),
            eng_takeoff_power: Default::default(),
            eng_dual_fault: Default::default(),
            hydraulic: Default::default(),
            elec: Default::default(),
            air_cond: Default::default(),
            packs: Default::default(),
            pressurization: Default::default(),
            lg_downlocked: Default::default(),
            adirs: Default::default(),
            overspeed: Default::default(),
            flaps_slats: Default::default(),
            lg_not_down: Default::default(),
            surfaces: Default::default(),
            speed_brake: Default::default(),
            to_speeds: Default::default(),
            fire: Default::default(),
            stall: Default::default(),
            anti_ice: Default::default(),
            to_memo: Default::default(),
            to_config_test: Default::default(),
            ldg_memo: Default::default(),
            land_asap: Default::default(),
            memo_inputs: Default::default(),
        }
    }

    pub fn update(&mut self, delta: Duration, parameters: &A380FwsParameterTable) {
        self.flight_phases.update(parameters);
        self.general_cancel.update(parameters);
        self.ecp.update(delta, parameters);
        self.flight_phase_inhibit
            .update(delta, &self.flight_phases, &self.ecp);

        self.ground.update(delta, parameters);
        self.eng_running.update(parameters);
        self.eng_takeoff_power.update(delta, parameters);
        self.eng_dual_fault
            .update(parameters, &self.ground, &self.eng_running);
        self.hydraulic.update(parameters);
        self.elec.update(parameters);
        self.air_cond.update(parameters);
        self.packs
            .update(delta, parameters, &self.flight_phases, &self.air_cond);
        self.pressurization
            .update(delta, parameters, &self.flight_phases, &self.ground);

        self.lg_downlocked.update(parameters);
        self.adirs.update(parameters);
        self.overspeed.update(parameters, &self.lg_downlocked);
        self.flaps_slats.update(parameters);
        self.lg_not_down.update(
            parameters,
            &self.flight_phases,
            &self.ground,
            &self.lg_downlocked,
            &self.eng_takeoff_power,
            &self.flaps_slats,
        );

        self.surfaces.update(
            parameters,
            &self.flight_phases,
            &self.ecp,
            &self.flaps_slats,
        );
        self.speed_brake
            .update(delta, parameters, &self.flight_phases);
        self.to_speeds
            .update(parameters, &self.flight_phases, &self.ecp);

        self.fire.update(delta, parameters, &self.ground);
        self.stall.update(parameters, &self.flight_phases);
        self.anti_ice.update(delta, parameters, &self.ground);

        self.to_memo
            .update(delta, &self.flight_phases, &self.ecp, &self.eng_running);
        self.to_config_test.update(
            delta,
            parameters,
            &self.ecp,
            &self.elec,
            &self.hydraulic,
            &self.to_speeds,
            &self.surfaces,
            &self.to_memo,
        );
        self.ldg_memo
            .update(delta, parameters, &self.flight_phases, &self.lg_downlocked);
        self.land_asap.update(
            &self.ground,
            &self.fire,
            &self.elec,
            &self.eng_running,
            &self.hydraulic,
            &self.air_cond,
        );
        self.memo_inputs.update(parameters);
    }

    /// Whether the current flight phase suppresses an item inhibited in `phases`.
    pub fn phase_inhibited(&self, phases: FlightPhases) -> bool {
        phases.contains(self.flight_phases.flight_phase())
    }
}

impl Default for ConditionNetwork {
    fn default() -> Self {
        Self::new(&FwsConfig::default())
    }
}
