use super::super::network::ConditionNetwork;
use super::super::warnings::*;

/// Selects the activation predicate and the checklist item states of a procedure. The states are
/// evaluated centrally over the condition network, so the procedure table stays plain data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::flight_warning::runtime) enum ProcedureRule {
    Acsc1Fault,
    Acsc2Fault,
    Acsc12Fault,
    DuctOverheat,
    AcscLaneFault,
    TrimAirFault,
    TrimAirHiPr,
    PackFault(u8),
    Pack12Fault,
    PackOff(u8),
    Cpc1Fault,
    Cpc2Fault,
    Cpc12Fault,
    ExcessResidualPr,
    OutflowValveNotOpen,
    SafetyValveOpen,
    ToSpeedsNotInserted,
    ToSpeedsTooLow,
    ToV1VrV2Disagree,
    ToFlapsFmsDisagree,
    Gen1Fault,
    Gen2Fault,
    ElecEmerConfig,
    EngFire(u8),
    ApuFire,
    ConfigFlaps,
    ConfigSlats,
    ConfigSpeedBrakes,
    ConfigPitchTrim,
    ConfigRudderTrim,
    ConfigParkBrake,
    SpeedBrakesStillOut,
    GreenSysLoPr,
    YellowSysLoPr,
    GreenYellowSysLoPr,
    IceDetected,
    LgNotDownNoCancel,
    LgNotDown,
    Lgciu1Fault,
    Lgciu2Fault,
    Lgciu12Fault,
    AdrFault(u8),
    Adr123Fault,
    IrFault(u8),
    RaFault(u8),
    OverspeedVmo,
    OverspeedVle,
    OverspeedVfe,
    EngDualFailure,
    ThrLeversNotSet,
}

impl ProcedureRule {
    pub fn is_active(&self, network: &ConditionNetwork) -> bool {
        let n = network;
        match *self {
            ProcedureRule::Acsc1Fault => n.air_cond.acsc_1_fault(),
            ProcedureRule::Acsc2Fault => n.air_cond.acsc_2_fault(),
            ProcedureRule::Acsc12Fault => n.air_cond.acsc_1_2_fault(),
            ProcedureRule::DuctOverheat => n.air_cond.duct_overheat(),
            ProcedureRule::AcscLaneFault => n.air_cond.acsc_lane_fault(),
            ProcedureRule::TrimAirFault => n.air_cond.trim_air_fault(),
            ProcedureRule::TrimAirHiPr => n.air_cond.trim_air_high_pressure(),
            ProcedureRule::PackFault(index) => n.packs.pack_fault(index),
            ProcedureRule::Pack12Fault => n.packs.pack_1_2_fault(),
            ProcedureRule::PackOff(index) => n.packs.pack_off(index),
            ProcedureRule::Cpc1Fault => n.pressurization.cpc_1_fault(),
            ProcedureRule::Cpc2Fault => n.pressurization.cpc_2_fault(),
            ProcedureRule::Cpc12Fault => n.pressurization.cpc_1_2_fault(),
            ProcedureRule::ExcessResidualPr => n.pressurization.excess_residual_pressure(),
            ProcedureRule::OutflowValveNotOpen => n.pressurization.outflow_valve_not_open(),
            ProcedureRule::SafetyValveOpen => n.pressurization.safety_valve_not_closed(),
            ProcedureRule::ToSpeedsNotInserted => n.to_speeds.to_speeds_not_inserted(),
            ProcedureRule::ToSpeedsTooLow => n.to_speeds.to_speeds_too_low(),
            ProcedureRule::ToV1VrV2Disagree => n.to_speeds.to_v1_vr_v2_disagree(),
            ProcedureRule::ToFlapsFmsDisagree => n.to_speeds.to_flaps_fms_disagree(),
            ProcedureRule::Gen1Fault => {
                n.eng_running.eng_1_running() && !n.elec.eng_gen_1_normal()
            }
            ProcedureRule::Gen2Fault => {
                n.eng_running.eng_2_running() && !n.elec.eng_gen_2_normal()
            }
            ProcedureRule::ElecEmerConfig => n.elec.emer_gen_running() && !n.ground.ground(),
            ProcedureRule::EngFire(engine) => n.fire.eng_fire(engine),
            ProcedureRule::ApuFire => n.fire.apu_fire(),
            ProcedureRule::ConfigFlaps => n.surfaces.flaps_config_warning(),
            ProcedureRule::ConfigSlats => n.surfaces.slats_config_warning(),
            ProcedureRule::ConfigSpeedBrakes => n.surfaces.speed_brakes_config_warning(),
            ProcedureRule::ConfigPitchTrim => n.surfaces.pitch_trim_config_warning(),
            ProcedureRule::ConfigRudderTrim => n.surfaces.rudder_trim_config_warning(),
            ProcedureRule::ConfigParkBrake => n.surfaces.park_brake_config_warning(),
            ProcedureRule::SpeedBrakesStillOut => n.speed_brake.speed_brake_still_out(),
            ProcedureRule::GreenSysLoPr => n.hydraulic.green_lo_pr(),
            ProcedureRule::YellowSysLoPr => n.hydraulic.yellow_lo_pr(),
            ProcedureRule::GreenYellowSysLoPr => n.hydraulic.green_yellow_lo_pr(),
            ProcedureRule::IceDetected => n.anti_ice.ice_detected_without_eng_anti_ice(),
            ProcedureRule::LgNotDownNoCancel => n.lg_not_down.lg_not_down_no_cancel(),
            ProcedureRule::LgNotDown => n.lg_not_down.lg_not_down(),
            ProcedureRule::Lgciu1Fault => n.ground.lgciu_1_fault(),
            ProcedureRule::Lgciu2Fault => n.ground.lgciu_2_fault(),
            ProcedureRule::Lgciu12Fault => n.ground.lgciu_1_fault() && n.ground.lgciu_2_fault(),
            ProcedureRule::AdrFault(index) => n.adirs.adr_fault(index),
            ProcedureRule::Adr123Fault => n.adirs.adr_1_2_3_fault(),
            ProcedureRule::IrFault(index) => n.adirs.ir_fault(index),
            ProcedureRule::RaFault(index) => n.adirs.ra_failed(index),
            ProcedureRule::OverspeedVmo => n.overspeed.overspeed_vmo(),
            ProcedureRule::OverspeedVle => n.overspeed.overspeed_vle(),
            ProcedureRule::OverspeedVfe => n.overspeed.overspeed_vfe(),
            ProcedureRule::EngDualFailure => n.eng_dual_fault.eng_dual_fault(),
            ProcedureRule::ThrLeversNotSet => {
                n.eng_takeoff_power.thrust_levers_not_set() && n.flight_phases.phase_23()
            }
        }
    }

    /// Which checklist items are done. Unsensed items are only read when the alert first
    /// appears, afterwards the crew owns them.
    pub fn completed_items(&self, network: &ConditionNetwork) -> Vec<bool> {
        let n = network;
        match *self {
            ProcedureRule::Acsc1Fault
            | ProcedureRule::Acsc2Fault
            | ProcedureRule::AcscLaneFault
            | ProcedureRule::TrimAirFault
            | ProcedureRule::PackOff(_)
            | ProcedureRule::Cpc1Fault
            | ProcedureRule::Cpc2Fault
            | ProcedureRule::SafetyValveOpen
            | ProcedureRule::ToSpeedsNotInserted
            | ProcedureRule::ToV1VrV2Disagree
            | ProcedureRule::ConfigFlaps
            | ProcedureRule::ConfigSlats
            | ProcedureRule::ConfigSpeedBrakes
            | ProcedureRule::ConfigPitchTrim
            | ProcedureRule::ConfigRudderTrim
            | ProcedureRule::ConfigParkBrake
            | ProcedureRule::LgNotDownNoCancel
            | ProcedureRule::LgNotDown
            | ProcedureRule::Lgciu1Fault
            | ProcedureRule::Lgciu2Fault
            | ProcedureRule::IrFault(_)
            | ProcedureRule::RaFault(_) => vec![],
            ProcedureRule::Acsc12Fault
            | ProcedureRule::TrimAirHiPr
            | ProcedureRule::Cpc12Fault
            | ProcedureRule::OutflowValveNotOpen
            | ProcedureRule::ToSpeedsTooLow
            | ProcedureRule::ToFlapsFmsDisagree
            | ProcedureRule::Lgciu12Fault
            | ProcedureRule::AdrFault(_)
            | ProcedureRule::OverspeedVmo
            | ProcedureRule::OverspeedVle
            | ProcedureRule::OverspeedVfe
            | ProcedureRule::ThrLeversNotSet => vec![false],
            ProcedureRule::DuctOverheat => vec![false; 2],
            ProcedureRule::PackFault(index) => vec![!n.packs.pack_on(index)],
            ProcedureRule::Pack12Fault => {
                vec![!n.packs.pack_on(1), !n.packs.pack_on(2), false]
            }
            ProcedureRule::ExcessResidualPr => vec![!n.packs.pack_on(1), !n.packs.pack_on(2)],
            ProcedureRule::Gen1Fault | ProcedureRule::Gen2Fault => vec![false; 3],
            ProcedureRule::ElecEmerConfig => vec![false; 3],
            ProcedureRule::EngFire(engine) => vec![
                n.fire.eng_fire_pb_out(engine),
                n.fire.eng_agent_discharged(engine, 1),
                false,
                n.fire.eng_agent_discharged(engine, 2),
                false,
            ],
            ProcedureRule::ApuFire => vec![
                n.fire.apu_fire_pb_out(),
                n.fire.apu_agent_discharged(),
                false,
            ],
            ProcedureRule::SpeedBrakesStillOut => vec![!n.speed_brake.speed_brake_extended()],
            ProcedureRule::GreenSysLoPr => vec![!n.hydraulic.eng_1_pump_auto()],
            ProcedureRule::YellowSysLoPr => vec![!n.hydraulic.eng_2_pump_auto()],
            ProcedureRule::GreenYellowSysLoPr => vec![
                !n.hydraulic.eng_1_pump_auto(),
                !n.hydraulic.eng_2_pump_auto(),
                false,
                false,
            ],
            ProcedureRule::IceDetected => vec![
                n.anti_ice.eng_anti_ice_on(1),
                n.anti_ice.eng_anti_ice_on(2),
            ],
            ProcedureRule::Adr123Fault => vec![false; 4],
            ProcedureRule::EngDualFailure => vec![
                false,
                false,
                false,
                n.memo_inputs.eng_mode_selector_ignition(),
            ],
        }
    }

    /// Which checklist items are displayed. `None` shows every item.
    pub fn shown_items(&self, network: &ConditionNetwork) -> Option<Vec<bool>> {
        let n = network;
        match *self {
            ProcedureRule::EngFire(engine) => {
                let agent_1 = n.fire.eng_agent_discharged(engine, 1);
                Some(vec![true, true, agent_1, agent_1, true])
            }
            ProcedureRule::GreenYellowSysLoPr => {
                let in_flight = !n.ground.ground();
                Some(vec![true, true, in_flight, in_flight])
            }
            _ => None,
        }
    }

    /// Which checklist items can be actioned right now. `None` makes every item actionable.
    pub fn active_items(&self, network: &ConditionNetwork) -> Option<Vec<bool>> {
        let n = network;
        match *self {
            ProcedureRule::EngFire(engine) => {
                let pb_out = n.fire.eng_fire_pb_out(engine);
                Some(vec![
                    true,
                    pb_out && n.fire.eng_agent_discharge_due(engine, 1),
                    true,
                    n.fire.eng_agent_discharge_due(engine, 2),
                    true,
                ])
            }
            ProcedureRule::ApuFire => Some(vec![true, n.fire.apu_fire_pb_out(), true]),
            _ => None,
        }
    }
}
