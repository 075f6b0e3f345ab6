use systems::flight_warning::parameters::{Arinc429Parameter, DiscreteParameter};
use systems::flight_warning::warnings::FlightPhase;
use systems::shared::arinc429::Arinc429Discretes;
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::ratio::percent;
use uom::si::thermodynamic_temperature::degree_celsius;
use uom::si::velocity::knot;

fn engine_index(engine: u8) -> usize {
    match engine {
        1 | 2 => engine as usize - 1,
        _ => panic!("Invalid engine number {}", engine),
    }
}

fn dual_index(index: u8) -> usize {
    match index {
        1 | 2 => index as usize - 1,
        _ => panic!("Invalid computer number {}", index),
    }
}

fn triple_index(index: u8) -> usize {
    match index {
        1..=3 => index as usize - 1,
        _ => panic!("Invalid computer number {}", index),
    }
}

pub(super) trait AcEssBusPowered {
    fn ac_ess_bus_powered(&self) -> &DiscreteParameter;
}

pub(super) trait FwcFlightPhase {
    /// The flight phase as computed by the flight phase logic. When it is not in normal operation
    /// the runtime assumes cruise.
    fn fwc_flight_phase(&self) -> &Arinc429Parameter<FlightPhase>;
}

pub(super) trait ClrPb {
    /// The CLR push button on the left (1) or right (2) side of the ECP.
    fn clr_pb(&self, index: u8) -> &DiscreteParameter;
}

pub(super) trait RclPb {
    fn rcl_pb(&self) -> &DiscreteParameter;
}

pub(super) trait ToConfigPb {
    /// The T.O CONFIG push button on the ECP.
    fn to_config_pb(&self) -> &DiscreteParameter;
}

pub(super) trait CaptMwCancelOn {
    fn capt_mw_cancel_on(&self) -> &DiscreteParameter;
}

pub(super) trait FoMwCancelOn {
    fn fo_mw_cancel_on(&self) -> &DiscreteParameter;
}

pub(super) trait CaptMcCancelOn {
    fn capt_mc_cancel_on(&self) -> &DiscreteParameter;
}

pub(super) trait FoMcCancelOn {
    fn fo_mc_cancel_on(&self) -> &DiscreteParameter;
}

pub(super) trait EssLhLgCompressed {
    /// This signal indicates that the left main landing gear is compressed. It is hardwired from
    /// LGCIU 1 and is powered by the DC ESS bus.
    fn ess_lh_lg_compressed(&self) -> &DiscreteParameter;
}

pub(super) trait NormLhLgCompressed {
    /// This signal indicates that the left main landing gear is compressed. It is hardwired from
    /// LGCIU 2 and is powered by the DC 2 bus.
    fn norm_lh_lg_compressed(&self) -> &DiscreteParameter;
}

pub(super) trait LgciuDiscreteWord1 {
    /// The first discrete word of the given LGCIU. Bits 23 and 24 indicate the left and right
    /// main gear downlocked, bit 25 the nose gear downlocked.
    fn lgciu_discrete_word_1(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes>;
}

pub(super) trait LgciuDiscreteWord2 {
    /// The second discrete word of the given LGCIU. Bit 13 indicates the left main gear
    /// compressed.
    fn lgciu_discrete_word_2(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes>;
}

pub(super) trait RadioHeight {
    /// This signal contains the radio height as measured by the specified radio altimeter.
    fn radio_height(&self, index: u8) -> &Arinc429Parameter<Length>;
}

pub(super) trait ComputedSpeed {
    /// This signal contains the computed airspeed as measured by the specified ADR.
    fn computed_speed(&self, index: u8) -> &Arinc429Parameter<Velocity>;
}

pub(super) trait PressureAltitude {
    fn pressure_altitude(&self, index: u8) -> &Arinc429Parameter<Length>;
}

pub(super) trait IrPitch {
    fn ir_pitch(&self, index: u8) -> &Arinc429Parameter<Angle>;
}

pub(super) trait IrMaintenanceWord {
    /// Bit 8 flags an ADR fault and bit 9 an IR fault.
    fn ir_maintenance_word(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes>;
}

pub(super) trait EngMasterLeverSelectOn {
    fn eng_master_lever_select_on(&self, engine: u8) -> &Arinc429Parameter<bool>;
}

pub(super) trait EngCoreSpeedAtOrAboveIdle {
    fn eng_core_speed_at_or_above_idle(&self, engine: u8) -> &Arinc429Parameter<bool>;
}

pub(super) trait EngN1 {
    fn eng_n1(&self, engine: u8) -> &Arinc429Parameter<Ratio>;
}

pub(super) trait EngTla {
    /// This signal contains the thrust lever angle (TLA) of the specified engine.
    fn eng_tla(&self, engine: u8) -> &Arinc429Parameter<Angle>;
}

pub(super) trait FlexThrustLimit {
    /// Indicates that a FLEX temperature has been entered, so the MCT detent commands FLEX thrust.
    fn flex_thrust_limit(&self) -> &DiscreteParameter;
}

pub(super) trait AutothrustLeverWarning {
    fn autothrust_lever_warning_flex(&self) -> &DiscreteParameter;
    fn autothrust_lever_warning_toga(&self) -> &DiscreteParameter;
}

pub(super) trait EngFuelValveOpen {
    fn eng_fuel_valve_open(&self, engine: u8) -> &DiscreteParameter;
}

pub(super) trait EngFirePbOut {
    fn eng_fire_pb_out(&self, engine: u8) -> &DiscreteParameter;
}

pub(super) trait EngFireDetected {
    fn eng_fire_detected(&self, engine: u8) -> &DiscreteParameter;
}

pub(super) trait EngFireTest {
    fn eng_fire_test(&self, engine: u8) -> &DiscreteParameter;
}

pub(super) trait EngAgentDischarged {
    fn eng_agent_discharged(&self, engine: u8, agent: u8) -> &DiscreteParameter;
}

pub(super) trait ApuFire {
    fn apu_fire_pb_out(&self) -> &DiscreteParameter;
    fn apu_fire_detected(&self) -> &DiscreteParameter;
    fn apu_fire_test(&self) -> &DiscreteParameter;
    fn apu_agent_discharged(&self) -> &DiscreteParameter;
}

pub(super) trait CargoSmokeTest {
    fn cargo_smoke_test(&self) -> &DiscreteParameter;
}

pub(super) trait GreenSysLoPr {
    fn green_sys_lo_pr(&self) -> &DiscreteParameter;
}

pub(super) trait YellowSysLoPr {
    fn yellow_sys_lo_pr(&self) -> &DiscreteParameter;
}

pub(super) trait EngPumpPbAuto {
    fn eng_pump_pb_auto(&self, engine: u8) -> &DiscreteParameter;
}

pub(super) trait EngGenPotentialNormal {
    fn eng_gen_potential_normal(&self, engine: u8) -> &DiscreteParameter;
}

pub(super) trait EmerGenRunning {
    fn emer_gen_running(&self) -> &DiscreteParameter;
}

pub(super) trait AcscDiscreteWord1 {
    /// Bits 11 to 13 flag a duct overheat, bits 21 and 22 a lane fault of the given ACSC.
    fn acsc_discrete_word_1(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes>;
}

pub(super) trait FlapsLeverPosition {
    /// The flaps lever detent, from 0 (retracted) to 4 (FULL).
    fn flaps_lever_position(&self) -> &Arinc429Parameter<u8>;
}

pub(super) trait FlapsPosition {
    /// The actual flaps position in synchro degrees.
    fn flaps_position(&self) -> &Arinc429Parameter<Angle>;
}

pub(super) trait SlatsPosition {
    /// The actual slats position in synchro degrees.
    fn slats_position(&self) -> &Arinc429Parameter<Angle>;
}

pub(super) trait CpcDiscreteWord {
    /// A failure warning flags a faulty CPC. On the word of CPC 1, bit 11 tells that CPC 1 is in
    /// control.
    fn cpc_discrete_word(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes>;
}

pub(super) trait ExcessResidualPressure {
    fn excess_residual_pressure(&self) -> &DiscreteParameter;
}

pub(super) trait OutflowValveOpenAmount {
    /// The outflow valve opening as measured by the given CPC.
    fn outflow_valve_open_amount(&self, index: u8) -> &Arinc429Parameter<Ratio>;
}

pub(super) trait ManOutflowValveOpenAmount {
    /// The outflow valve opening from the manual control channel, used when the controlling CPC
    /// has no valid measurement.
    fn man_outflow_valve_open_amount(&self) -> &Arinc429Parameter<Ratio>;
}

pub(super) trait SafetyValveOpenAmount {
    fn safety_valve_open_amount(&self) -> &Arinc429Parameter<Ratio>;
}

pub(super) trait PackPbOn {
    fn pack_pb_on(&self, index: u8) -> &DiscreteParameter;
}

pub(super) trait PackPbFault {
    fn pack_pb_fault(&self, index: u8) -> &DiscreteParameter;
}

pub(super) trait EngBleedPbAuto {
    fn eng_bleed_pb_auto(&self, engine: u8) -> &DiscreteParameter;
}

pub(super) trait EngBleedPbFault {
    fn eng_bleed_pb_fault(&self, engine: u8) -> &DiscreteParameter;
}

pub(super) trait XbleedValveFullyClosed {
    fn xbleed_valve_fully_closed(&self) -> &DiscreteParameter;
}

pub(super) trait FcdcDiscreteWord1 {
    /// Bit 11 indicates that the flight controls are in normal law.
    fn fcdc_discrete_word_1(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes>;
}

pub(super) trait FcdcDiscreteWord4 {
    /// Bit 27 indicates that the ground spoilers are armed, bit 28 that the speed brakes are
    /// extended.
    fn fcdc_discrete_word_4(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes>;
}

pub(super) trait PitchTrimInTakeoffRange {
    fn pitch_trim_in_takeoff_range(&self) -> &DiscreteParameter;
}

pub(super) trait ParkBrakeSet {
    fn park_brake_set(&self) -> &DiscreteParameter;
}

pub(super) trait FmDiscreteWord3 {
    /// Bit 16 flags a V1/VR/V2 disagreement, bit 17 take off speeds too low and bit 18 take off
    /// speeds not inserted.
    fn fm_discrete_word_3(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes>;
}

pub(super) trait FmDiscreteWord2 {
    /// Bits 13 to 16 flag the take off flaps configuration 0 to 3 entered in the MCDU.
    fn fm_discrete_word_2(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes>;
}

pub(super) trait FacHealthy {
    fn fac_healthy(&self, index: u8) -> &DiscreteParameter;
}

pub(super) trait FacRudderTrimPosition {
    fn fac_rudder_trim_position(&self, index: u8) -> &Arinc429Parameter<Angle>;
}

pub(super) trait BrakesHot {
    fn brakes_hot(&self) -> &DiscreteParameter;
}

pub(super) trait DoorsClosedAndLocked {
    fn doors_closed_and_locked(&self) -> &DiscreteParameter;
}

pub(super) trait StallWarningRaw {
    fn stall_warning_raw(&self) -> &DiscreteParameter;
}

pub(super) trait StructuralIceRatio {
    fn structural_ice_ratio(&self) -> &Arinc429Parameter<Ratio>;
}

pub(super) trait TotalAirTemperature {
    fn total_air_temperature(&self) -> &Arinc429Parameter<ThermodynamicTemperature>;
}

pub(super) trait EngAntiIceOn {
    fn eng_anti_ice_on(&self, engine: u8) -> &DiscreteParameter;
}

pub(super) trait WingAntiIceOn {
    fn wing_anti_ice_on(&self) -> &DiscreteParameter;
}

pub(super) trait AutobrakeMode {
    /// The selected autobrake mode: 0 is off, 1 to 5 are landing modes and 6 is RTO.
    fn autobrake_mode(&self) -> &Arinc429Parameter<u8>;
}

/// The discretes which only feed memo lines.
pub(super) trait MemoDiscretes {
    fn apu_avail(&self) -> &DiscreteParameter;
    fn apu_bleed_valve_open(&self) -> &DiscreteParameter;
    fn landing_lights_extended(&self) -> &DiscreteParameter;
    fn seat_belts_on(&self) -> &DiscreteParameter;
    fn no_smoking_on(&self) -> &DiscreteParameter;
    fn cabin_ready(&self) -> &DiscreteParameter;
    fn refuel_in_progress(&self) -> &DiscreteParameter;
    fn nw_steering_disconnected(&self) -> &DiscreteParameter;
    fn eng_mode_selector_ignition(&self) -> &DiscreteParameter;
    fn rat_deployed(&self) -> &DiscreteParameter;
}

/// This struct represents the in-memory representation of the signals used by the Flight Warning
/// System to determine its activations. Every value is invalid until it has been acquired.
#[derive(Clone)]
pub struct A380FwsParameterTable {
    ac_ess_bus_powered: DiscreteParameter,
    fwc_flight_phase: Arinc429Parameter<FlightPhase>,
    clr_pb: [DiscreteParameter; 2],
    rcl_pb: DiscreteParameter,
    to_config_pb: DiscreteParameter,
    capt_mw_cancel_on: DiscreteParameter,
    fo_mw_cancel_on: DiscreteParameter,
    capt_mc_cancel_on: DiscreteParameter,
    fo_mc_cancel_on: DiscreteParameter,
    ess_lh_lg_compressed: DiscreteParameter,
    norm_lh_lg_compressed: DiscreteParameter,
    lgciu_discrete_word_1: [Arinc429Parameter<Arinc429Discretes>; 2],
    lgciu_discrete_word_2: [Arinc429Parameter<Arinc429Discretes>; 2],
    radio_height: [Arinc429Parameter<Length>; 3],
    computed_speed: [Arinc429Parameter<Velocity>; 3],
    pressure_altitude: [Arinc429Parameter<Length>; 3],
    ir_pitch: [Arinc429Parameter<Angle>; 3],
    ir_maintenance_word: [Arinc429Parameter<Arinc429Discretes>; 3],
    eng_master_lever_select_on: [Arinc429Parameter<bool>; 2],
    eng_core_speed_at_or_above_idle: [Arinc429Parameter<bool>; 2],
    eng_n1: [Arinc429Parameter<Ratio>; 2],
    eng_tla: [Arinc429Parameter<Angle>; 2],
    flex_thrust_limit: DiscreteParameter,
    autothrust_lever_warning_flex: DiscreteParameter,
    autothrust_lever_warning_toga: DiscreteParameter,
    eng_fuel_valve_open: [DiscreteParameter; 2],
    eng_fire_pb_out: [DiscreteParameter; 2],
    eng_fire_detected: [DiscreteParameter; 2],
    eng_fire_test: [DiscreteParameter; 2],
    eng_agent_discharged: [[DiscreteParameter; 2]; 2],
    apu_fire_pb_out: DiscreteParameter,
    apu_fire_detected: DiscreteParameter,
    apu_fire_test: DiscreteParameter,
    apu_agent_discharged: DiscreteParameter,
    cargo_smoke_test: DiscreteParameter,
    green_sys_lo_pr: DiscreteParameter,
    yellow_sys_lo_pr: DiscreteParameter,
    eng_pump_pb_auto: [DiscreteParameter; 2],
    eng_gen_potential_normal: [DiscreteParameter; 2],
    emer_gen_running: DiscreteParameter,
    acsc_discrete_word_1: [Arinc429Parameter<Arinc429Discretes>; 2],
    cpc_discrete_word: [Arinc429Parameter<Arinc429Discretes>; 2],
    excess_residual_pressure: DiscreteParameter,
    outflow_valve_open_amount: [Arinc429Parameter<Ratio>; 2],
    man_outflow_valve_open_amount: Arinc429Parameter<Ratio>,
    safety_valve_open_amount: Arinc429Parameter<Ratio>,
    pack_pb_on: [DiscreteParameter; 2],
    pack_pb_fault: [DiscreteParameter; 2],
    eng_bleed_pb_auto: [DiscreteParameter; 2],
    eng_bleed_pb_fault: [DiscreteParameter; 2],
    xbleed_valve_fully_closed: DiscreteParameter,
    flaps_lever_position: Arinc429Parameter<u8>,
    flaps_position: Arinc429Parameter<Angle>,
    slats_position: Arinc429Parameter<Angle>,
    fcdc_discrete_word_1: [Arinc429Parameter<Arinc429Discretes>; 2],
    fcdc_discrete_word_4: [Arinc429Parameter<Arinc429Discretes>; 2],
    pitch_trim_in_takeoff_range: DiscreteParameter,
    park_brake_set: DiscreteParameter,
    fm_discrete_word_2: [Arinc429Parameter<Arinc429Discretes>; 2],
    fm_discrete_word_3: [Arinc429Parameter<Arinc429Discretes>; 2],
    fac_healthy: [DiscreteParameter; 2],
    fac_rudder_trim_position: [Arinc429Parameter<Angle>; 2],
    brakes_hot: DiscreteParameter,
    doors_closed_and_locked: DiscreteParameter,
    stall_warning_raw: DiscreteParameter,
    structural_ice_ratio: Arinc429Parameter<Ratio>,
    total_air_temperature: Arinc429Parameter<ThermodynamicTemperature>,
    eng_anti_ice_on: [DiscreteParameter; 2],
    wing_anti_ice_on: DiscreteParameter,
    autobrake_mode: Arinc429Parameter<u8>,
    apu_avail: DiscreteParameter,
    apu_bleed_valve_open: DiscreteParameter,
    landing_lights_extended: DiscreteParameter,
    seat_belts_on: DiscreteParameter,
    no_smoking_on: DiscreteParameter,
    cabin_ready: DiscreteParameter,
    refuel_in_progress: DiscreteParameter,
    nw_steering_disconnected: DiscreteParameter,
    eng_mode_selector_ignition: DiscreteParameter,
    rat_deployed: DiscreteParameter,
}

impl A380FwsParameterTable {
    pub fn new() -> Self {
        let word = Arinc429Parameter::new_inv(Arinc429Discretes::default());
        Self {
            ac_ess_bus_powered: DiscreteParameter::new_inv(false),
            fwc_flight_phase: Arinc429Parameter::new_inv(FlightPhase::default()),
            clr_pb: [DiscreteParameter::new_inv(false); 2],
            rcl_pb: DiscreteParameter::new_inv(false),
            to_config_pb: DiscreteParameter::new_inv(false),
            capt_mw_cancel_on: DiscreteParameter::new_inv(false),
            fo_mw_cancel_on: DiscreteParameter::new_inv(false),
            capt_mc_cancel_on: DiscreteParameter::new_inv(false),
            fo_mc_cancel_on: DiscreteParameter::new_inv(false),
            ess_lh_lg_compressed: DiscreteParameter::new_inv(false),
            norm_lh_lg_compressed: DiscreteParameter::new_inv(false),
            lgciu_discrete_word_1: [word; 2],
            lgciu_discrete_word_2: [word; 2],
            radio_height: [Arinc429Parameter::new_inv(Length::new::<foot>(0.0)); 3],
            computed_speed: [Arinc429Parameter::new_inv(Velocity::new::<knot>(0.0)); 3],
            pressure_altitude: [Arinc429Parameter::new_inv(Length::new::<foot>(0.0)); 3],
            ir_pitch: [Arinc429Parameter::new_inv(Angle::new::<degree>(0.0)); 3],
            ir_maintenance_word: [word; 3],
            eng_master_lever_select_on: [Arinc429Parameter::new_inv(false); 2],
            eng_core_speed_at_or_above_idle: [Arinc429Parameter::new_inv(false); 2],
            eng_n1: [Arinc429Parameter::new_inv(Ratio::new::<percent>(0.0)); 2],
            eng_tla: [Arinc429Parameter::new_inv(Angle::new::<degree>(0.0)); 2],
            flex_thrust_limit: DiscreteParameter::new_inv(false),
            autothrust_lever_warning_flex: DiscreteParameter::new_inv(false),
            autothrust_lever_warning_toga: DiscreteParameter::new_inv(false),
            eng_fuel_valve_open: [DiscreteParameter::new_inv(false); 2],
            eng_fire_pb_out: [DiscreteParameter::new_inv(false); 2],
            eng_fire_detected: [DiscreteParameter::new_inv(false); 2],
            eng_fire_test: [DiscreteParameter::new_inv(false); 2],
            eng_agent_discharged: [[DiscreteParameter::new_inv(false); 2]; 2],
            apu_fire_pb_out: DiscreteParameter::new_inv(false),
            apu_fire_detected: DiscreteParameter::new_inv(false),
            apu_fire_test: DiscreteParameter::new_inv(false),
            apu_agent_discharged: DiscreteParameter::new_inv(false),
            cargo_smoke_test: DiscreteParameter::new_inv(false),
            green_sys_lo_pr: DiscreteParameter::new_inv(false),
            yellow_sys_lo_pr: DiscreteParameter::new_inv(false),
            eng_pump_pb_auto: [DiscreteParameter::new_inv(false); 2],
            eng_gen_potential_normal: [DiscreteParameter::new_inv(false); 2],
            emer_gen_running: DiscreteParameter::new_inv(false),
            acsc_discrete_word_1: [word; 2],
            cpc_discrete_word: [word; 2],
            excess_residual_pressure: DiscreteParameter::new_inv(false),
            outflow_valve_open_amount: [Arinc429Parameter::new_inv(Ratio::new::<percent>(0.0)); 2],
            man_outflow_valve_open_amount: Arinc429Parameter::new_inv(Ratio::new::<percent>(0.0)),
            safety_valve_open_amount: Arinc429Parameter::new_inv(Ratio::new::<percent>(0.0)),
            pack_pb_on: [DiscreteParameter::new_inv(false); 2],
            pack_pb_fault: [DiscreteParameter::new_inv(false); 2],
            eng_bleed_pb_auto: [DiscreteParameter::new_inv(false); 2],
            eng_bleed_pb_fault: [DiscreteParameter::new_inv(false); 2],
            xbleed_valve_fully_closed: DiscreteParameter::new_inv(false),
            flaps_lever_position: Arinc429Parameter::new_inv(0),
            flaps_position: Arinc429Parameter::new_inv(Angle::new::<degree>(0.0)),
            slats_position: Arinc429Parameter::new_inv(Angle::new::<degree>(0.0)),
            fcdc_discrete_word_1: [word; 2],
            fcdc_discrete_word_4: [word; 2],
            pitch_trim_in_takeoff_range: DiscreteParameter::new_inv(false),
            park_brake_set: DiscreteParameter::new_inv(false),
            fm_discrete_word_2: [word; 2],
            fm_discrete_word_3: [word; 2],
            fac_healthy: [DiscreteParameter::new_inv(false); 2],
            fac_rudder_trim_position: [Arinc429Parameter::new_inv(Angle::new::<degree>(0.0)); 2],
            brakes_hot: DiscreteParameter::new_inv(false),
            doors_closed_and_locked: DiscreteParameter::new_inv(false),
            stall_warning_raw: DiscreteParameter::new_inv(false),
            structural_ice_ratio: Arinc429Parameter::new_inv(Ratio::new::<percent>(0.0)),
            total_air_temperature: Arinc429Parameter::new_inv(
                ThermodynamicTemperature::new::<degree_celsius>(15.0),
            ),
            eng_anti_ice_on: [DiscreteParameter::new_inv(false); 2],
            wing_anti_ice_on: DiscreteParameter::new_inv(false),
            autobrake_mode: Arinc429Parameter::new_inv(0),
            apu_avail: DiscreteParameter::new_inv(false),
            apu_bleed_valve_open: DiscreteParameter::new_inv(false),
            landing_lights_extended: DiscreteParameter::new_inv(false),
            seat_belts_on: DiscreteParameter::new_inv(false),
            no_smoking_on: DiscreteParameter::new_inv(false),
            cabin_ready: DiscreteParameter::new_inv(false),
            refuel_in_progress: DiscreteParameter::new_inv(false),
            nw_steering_disconnected: DiscreteParameter::new_inv(false),
            eng_mode_selector_ignition: DiscreteParameter::new_inv(false),
            rat_deployed: DiscreteParameter::new_inv(false),
        }
    }

    pub fn set_ac_ess_bus_powered(&mut self, powered: DiscreteParameter) {
        self.ac_ess_bus_powered = powered;
    }

    pub fn set_fwc_flight_phase(&mut self, phase: Arinc429Parameter<FlightPhase>) {
        self.fwc_flight_phase = phase;
    }

    pub fn set_clr_pb(&mut self, index: u8, pressed: DiscreteParameter) {
        self.clr_pb[dual_index(index)] = pressed;
    }

    pub fn set_rcl_pb(&mut self, pressed: DiscreteParameter) {
        self.rcl_pb = pressed;
    }

    pub fn set_to_config_pb(&mut self, pressed: DiscreteParameter) {
        self.to_config_pb = pressed;
    }

    pub fn set_capt_mw_cancel_on(&mut self, pressed: DiscreteParameter) {
        self.capt_mw_cancel_on = pressed;
    }

    pub fn set_fo_mw_cancel_on(&mut self, pressed: DiscreteParameter) {
        self.fo_mw_cancel_on = pressed;
    }

    pub fn set_capt_mc_cancel_on(&mut self, pressed: DiscreteParameter) {
        self.capt_mc_cancel_on = pressed;
    }

    pub fn set_fo_mc_cancel_on(&mut self, pressed: DiscreteParameter) {
        self.fo_mc_cancel_on = pressed;
    }

    pub fn set_ess_lh_lg_compressed(&mut self, compressed: DiscreteParameter) {
        self.ess_lh_lg_compressed = compressed;
    }

    pub fn set_norm_lh_lg_compressed(&mut self, compressed: DiscreteParameter) {
        self.norm_lh_lg_compressed = compressed;
    }

    pub fn set_lgciu_discrete_word_1(
        &mut self,
        index: u8,
        word: Arinc429Parameter<Arinc429Discretes>,
    ) {
        self.lgciu_discrete_word_1[dual_index(index)] = word;
    }

    pub fn set_lgciu_discrete_word_2(
        &mut self,
        index: u8,
        word: Arinc429Parameter<Arinc429Discretes>,
    ) {
        self.lgciu_discrete_word_2[dual_index(index)] = word;
    }

    pub fn set_radio_height(&mut self, index: u8, height: Arinc429Parameter<Length>) {
        self.radio_height[triple_index(index)] = height;
    }

    pub fn set_computed_speed(&mut self, index: u8, speed: Arinc429Parameter<Velocity>) {
        self.computed_speed[triple_index(index)] = speed;
    }

    pub fn set_pressure_altitude(&mut self, index: u8, altitude: Arinc429Parameter<Length>) {
        self.pressure_altitude[triple_index(index)] = altitude;
    }

    pub fn set_ir_pitch(&mut self, index: u8, pitch: Arinc429Parameter<Angle>) {
        self.ir_pitch[triple_index(index)] = pitch;
    }

    pub fn set_ir_maintenance_word(
        &mut self,
        index: u8,
        word: Arinc429Parameter<Arinc429Discretes>,
    ) {
        self.ir_maintenance_word[triple_index(index)] = word;
    }

    pub fn set_eng_master_lever_select_on(&mut self, engine: u8, on: Arinc429Parameter<bool>) {
        self.eng_master_lever_select_on[engine_index(engine)] = on;
    }

    pub fn set_eng_core_speed_at_or_above_idle(
        &mut self,
        engine: u8,
        at_or_above_idle: Arinc429Parameter<bool>,
    ) {
        self.eng_core_speed_at_or_above_idle[engine_index(engine)] = at_or_above_idle;
    }

    pub fn set_eng_n1(&mut self, engine: u8, n1: Arinc429Parameter<Ratio>) {
        self.eng_n1[engine_index(engine)] = n1;
    }

    pub fn set_eng_tla(&mut self, engine: u8, tla: Arinc429Parameter<Angle>) {
        self.eng_tla[engine_index(engine)] = tla;
    }

    pub fn set_flex_thrust_limit(&mut self, flex: DiscreteParameter) {
        self.flex_thrust_limit = flex;
    }

    pub fn set_autothrust_lever_warning_flex(&mut self, warning: DiscreteParameter) {
        self.autothrust_lever_warning_flex = warning;
    }

    pub fn set_autothrust_lever_warning_toga(&mut self, warning: DiscreteParameter) {
        self.autothrust_lever_warning_toga = warning;
    }

    pub fn set_eng_fuel_valve_open(&mut self, engine: u8, open: DiscreteParameter) {
        self.eng_fuel_valve_open[engine_index(engine)] = open;
    }

    pub fn set_eng_fire_pb_out(&mut self, engine: u8, out: DiscreteParameter) {
        self.eng_fire_pb_out[engine_index(engine)] = out;
    }

    pub fn set_eng_fire_detected(&mut self, engine: u8, detected: DiscreteParameter) {
        self.eng_fire_detected[engine_index(engine)] = detected;
    }

    pub fn set_eng_fire_test(&mut self, engine: u8, test: DiscreteParameter) {
        self.eng_fire_test[engine_index(engine)] = test;
    }

    pub fn set_eng_agent_discharged(
        &mut self,
        engine: u8,
        agent: u8,
        discharged: DiscreteParameter,
    ) {
        self.eng_agent_discharged[engine_index(engine)][dual_index(agent)] = discharged;
    }

    pub fn set_apu_fire_pb_out(&mut self, out: DiscreteParameter) {
        self.apu_fire_pb_out = out;
    }

    pub fn set_apu_fire_detected(&mut self, detected: DiscreteParameter) {
        self.apu_fire_detected = detected;
    }

    pub fn set_apu_fire_test(&mut self, test: DiscreteParameter) {
        self.apu_fire_test = test;
    }

    pub fn set_apu_agent_discharged(&mut self, discharged: DiscreteParameter) {
        self.apu_agent_discharged = discharged;
    }

    pub fn set_cargo_smoke_test(&mut self, test: DiscreteParameter) {
        self.cargo_smoke_test = test;
    }

    pub fn set_green_sys_lo_pr(&mut self, low: DiscreteParameter) {
        self.green_sys_lo_pr = low;
    }

    pub fn set_yellow_sys_lo_pr(&mut self, low: DiscreteParameter) {
        self.yellow_sys_lo_pr = low;
    }

    pub fn set_eng_pump_pb_auto(&mut self, engine: u8, auto: DiscreteParameter) {
        self.eng_pump_pb_auto[engine_index(engine)] = auto;
    }

    pub fn set_eng_gen_potential_normal(&mut self, engine: u8, normal: DiscreteParameter) {
        self.eng_gen_potential_normal[engine_index(engine)] = normal;
    }

    pub fn set_emer_gen_running(&mut self, running: DiscreteParameter) {
        self.emer_gen_running = running;
    }

    pub fn set_acsc_discrete_word_1(
        &mut self,
        index: u8,
        word: Arinc429Parameter<Arinc429Discretes>,
    ) {
        self.acsc_discrete_word_1[dual_index(index)] = word;
    }

    pub fn set_cpc_discrete_word(
        &mut self,
        index: u8,
        word: Arinc429Parameter<Arinc429Discretes>,
    ) {
        self.cpc_discrete_word[dual_index(index)] = word;
    }

    pub fn set_excess_residual_pressure(&mut self, excess: DiscreteParameter) {
        self.excess_residual_pressure = excess;
    }

    pub fn set_outflow_valve_open_amount(&mut self, index: u8, amount: Arinc429Parameter<Ratio>) {
        self.outflow_valve_open_amount[dual_index(index)] = amount;
    }

    pub fn set_man_outflow_valve_open_amount(&mut self, amount: Arinc429Parameter<Ratio>) {
        self.man_outflow_valve_open_amount = amount;
    }

    pub fn set_safety_valve_open_amount(&mut self, amount: Arinc429Parameter<Ratio>) {
        self.safety_valve_open_amount = amount;
    }

    pub fn set_pack_pb_on(&mut self, index: u8, on: DiscreteParameter) {
        self.pack_pb_on[dual_index(index)] = on;
    }

    pub fn set_pack_pb_fault(&mut self, index: u8, fault: DiscreteParameter) {
        self.pack_pb_fault[dual_index(index)] = fault;
    }

    pub fn set_eng_bleed_pb_auto(&mut self, engine: u8, auto: DiscreteParameter) {
        self.eng_bleed_pb_auto[engine_index(engine)] = auto;
    }

    pub fn set_eng_bleed_pb_fault(&mut self, engine: u8, fault: DiscreteParameter) {
        self.eng_bleed_pb_fault[engine_index(engine)] = fault;
    }

    pub fn set_xbleed_valve_fully_closed(&mut self, closed: DiscreteParameter) {
        self.xbleed_valve_fully_closed = closed;
    }

    pub fn set_flaps_lever_position(&mut self, position: Arinc429Parameter<u8>) {
        self.flaps_lever_position = position;
    }

    pub fn set_flaps_position(&mut self, position: Arinc429Parameter<Angle>) {
        self.flaps_position = position;
    }

    pub fn set_slats_position(&mut self, position: Arinc429Parameter<Angle>) {
        self.slats_position = position;
    }

    pub fn set_fcdc_discrete_word_1(
        &mut self,
        index: u8,
        word: Arinc429Parameter<Arinc429Discretes>,
    ) {
        self.fcdc_discrete_word_1[dual_index(index)] = word;
    }

    pub fn set_fcdc_discrete_word_4(
        &mut self,
        index: u8,
        word: Arinc429Parameter<Arinc429Discretes>,
    ) {
        self.fcdc_discrete_word_4[dual_index(index)] = word;
    }

    pub fn set_pitch_trim_in_takeoff_range(&mut self, in_range: DiscreteParameter) {
        self.pitch_trim_in_takeoff_range = in_range;
    }

    pub fn set_park_brake_set(&mut self, set: DiscreteParameter) {
        self.park_brake_set = set;
    }

    pub fn set_fm_discrete_word_2(
        &mut self,
        index: u8,
        word: Arinc429Parameter<Arinc429Discretes>,
    ) {
        self.fm_discrete_word_2[dual_index(index)] = word;
    }

    pub fn set_fac_healthy(&mut self, index: u8, healthy: DiscreteParameter) {
        self.fac_healthy[dual_index(index)] = healthy;
    }

    pub fn set_fac_rudder_trim_position(&mut self, index: u8, position: Arinc429Parameter<Angle>) {
        self.fac_rudder_trim_position[dual_index(index)] = position;
    }

    pub fn set_fm_discrete_word_3(
        &mut self,
        index: u8,
        word: Arinc429Parameter<Arinc429Discretes>,
    ) {
        self.fm_discrete_word_3[dual_index(index)] = word;
    }

    pub fn set_brakes_hot(&mut self, hot: DiscreteParameter) {
        self.brakes_hot = hot;
    }

    pub fn set_doors_closed_and_locked(&mut self, closed: DiscreteParameter) {
        self.doors_closed_and_locked = closed;
    }

    pub fn set_stall_warning_raw(&mut self, stall: DiscreteParameter) {
        self.stall_warning_raw = stall;
    }

    pub fn set_structural_ice_ratio(&mut self, ice: Arinc429Parameter<Ratio>) {
        self.structural_ice_ratio = ice;
    }

    pub fn set_total_air_temperature(
        &mut self,
        temperature: Arinc429Parameter<ThermodynamicTemperature>,
    ) {
        self.total_air_temperature = temperature;
    }

    pub fn set_eng_anti_ice_on(&mut self, engine: u8, on: DiscreteParameter) {
        self.eng_anti_ice_on[engine_index(engine)] = on;
    }

    pub fn set_wing_anti_ice_on(&mut self, on: DiscreteParameter) {
        self.wing_anti_ice_on = on;
    }

    pub fn set_autobrake_mode(&mut self, mode: Arinc429Parameter<u8>) {
        self.autobrake_mode = mode;
    }

    pub fn set_apu_avail(&mut self, avail: DiscreteParameter) {
        self.apu_avail = avail;
    }

    pub fn set_apu_bleed_valve_open(&mut self, open: DiscreteParameter) {
        self.apu_bleed_valve_open = open;
    }

    pub fn set_landing_lights_extended(&mut self, extended: DiscreteParameter) {
        self.landing_lights_extended = extended;
    }

    pub fn set_seat_belts_on(&mut self, on: DiscreteParameter) {
        self.seat_belts_on = on;
    }

    pub fn set_no_smoking_on(&mut self, on: DiscreteParameter) {
        self.no_smoking_on = on;
    }

    pub fn set_cabin_ready(&mut self, ready: DiscreteParameter) {
        self.cabin_ready = ready;
    }

    pub fn set_refuel_in_progress(&mut self, refuel: DiscreteParameter) {
        self.refuel_in_progress = refuel;
    }

    pub fn set_nw_steering_disconnected(&mut self, disconnected: DiscreteParameter) {
        self.nw_steering_disconnected = disconnected;
    }

    pub fn set_eng_mode_selector_ignition(&mut self, ignition: DiscreteParameter) {
        self.eng_mode_selector_ignition = ignition;
    }

    pub fn set_rat_deployed(&mut self, deployed: DiscreteParameter) {
        self.rat_deployed = deployed;
    }
}

impl Default for A380FwsParameterTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AcEssBusPowered for A380FwsParameterTable {
    fn ac_ess_bus_powered(&self) -> &DiscreteParameter {
        &self.ac_ess_bus_powered
    }
}

impl FwcFlightPhase for A380FwsParameterTable {
    fn fwc_flight_phase(&self) -> &Arinc429Parameter<FlightPhase> {
        &self.fwc_flight_phase
    }
}

impl ClrPb for A380FwsParameterTable {
    fn clr_pb(&self, index: u8) -> &DiscreteParameter {
        &self.clr_pb[dual_index(index)]
    }
}

impl RclPb for A380FwsParameterTable {
    fn rcl_pb(&self) -> &DiscreteParameter {
        &self.rcl_pb
    }
}

impl ToConfigPb for A380FwsParameterTable {
    fn to_config_pb(&self) -> &DiscreteParameter {
        &self.to_config_pb
    }
}

impl CaptMwCancelOn for A380FwsParameterTable {
    fn capt_mw_cancel_on(&self) -> &DiscreteParameter {
        &self.capt_mw_cancel_on
    }
}

impl FoMwCancelOn for A380FwsParameterTable {
    fn fo_mw_cancel_on(&self) -> &DiscreteParameter {
        &self.fo_mw_cancel_on
    }
}

impl CaptMcCancelOn for A380FwsParameterTable {
    fn capt_mc_cancel_on(&self) -> &DiscreteParameter {
        &self.capt_mc_cancel_on
    }
}

impl FoMcCancelOn for A380FwsParameterTable {
    fn fo_mc_cancel_on(&self) -> &DiscreteParameter {
        &self.fo_mc_cancel_on
    }
}

impl EssLhLgCompressed for A380FwsParameterTable {
    fn ess_lh_lg_compressed(&self) -> &DiscreteParameter {
        &self.ess_lh_lg_compressed
    }
}

impl NormLhLgCompressed for A380FwsParameterTable {
    fn norm_lh_lg_compressed(&self) -> &DiscreteParameter {
        &self.norm_lh_lg_compressed
    }
}

impl LgciuDiscreteWord1 for A380FwsParameterTable {
    fn lgciu_discrete_word_1(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes> {
        &self.lgciu_discrete_word_1[dual_index(index)]
    }
}

impl LgciuDiscreteWord2 for A380FwsParameterTable {
    fn lgciu_discrete_word_2(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes> {
        &self.lgciu_discrete_word_2[dual_index(index)]
    }
}

impl RadioHeight for A380FwsParameterTable {
    fn radio_height(&self, index: u8) -> &Arinc429Parameter<Length> {
        &self.radio_height[triple_index(index)]
    }
}

impl ComputedSpeed for A380FwsParameterTable {
    fn computed_speed(&self, index: u8) -> &Arinc429Parameter<Velocity> {
        &self.computed_speed[triple_index(index)]
    }
}

impl PressureAltitude for A380FwsParameterTable {
    fn pressure_altitude(&self, index: u8) -> &Arinc429Parameter<Length> {
        &self.pressure_altitude[triple_index(index)]
    }
}

impl IrPitch for A380FwsParameterTable {
    fn ir_pitch(&self, index: u8) -> &Arinc429Parameter<Angle> {
        &self.ir_pitch[triple_index(index)]
    }
}

impl IrMaintenanceWord for A380FwsParameterTable {
    fn ir_maintenance_word(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes> {
        &self.ir_maintenance_word[triple_index(index)]
    }
}

impl EngMasterLeverSelectOn for A380FwsParameterTable {
    fn eng_master_lever_select_on(&self, engine: u8) -> &Arinc429Parameter<bool> {
        &self.eng_master_lever_select_on[engine_index(engine)]
    }
}

impl EngCoreSpeedAtOrAboveIdle for A380FwsParameterTable {
    fn eng_core_speed_at_or_above_idle(&self, engine: u8) -> &Arinc429Parameter<bool> {
        &self.eng_core_speed_at_or_above_idle[engine_index(engine)]
    }
}

impl EngN1 for A380FwsParameterTable {
    fn eng_n1(&self, engine: u8) -> &Arinc429Parameter<Ratio> {
        &self.eng_n1[engine_index(engine)]
    }
}

impl EngTla for A380FwsParameterTable {
    fn eng_tla(&self, engine: u8) -> &Arinc429Parameter<Angle> {
        &self.eng_tla[engine_index(engine)]
    }
}

impl FlexThrustLimit for A380FwsParameterTable {
    fn flex_thrust_limit(&self) -> &DiscreteParameter {
        &self.flex_thrust_limit
    }
}

impl AutothrustLeverWarning for A380FwsParameterTable {
    fn autothrust_lever_warning_flex(&self) -> &DiscreteParameter {
        &self.autothrust_lever_warning_flex
    }

    fn autothrust_lever_warning_toga(&self) -> &DiscreteParameter {
        &self.autothrust_lever_warning_toga
    }
}

impl EngFuelValveOpen for A380FwsParameterTable {
    fn eng_fuel_valve_open(&self, engine: u8) -> &DiscreteParameter {
        &self.eng_fuel_valve_open[engine_index(engine)]
    }
}

impl EngFirePbOut for A380FwsParameterTable {
    fn eng_fire_pb_out(&self, engine: u8) -> &DiscreteParameter {
        &self.eng_fire_pb_out[engine_index(engine)]
    }
}

impl EngFireDetected for A380FwsParameterTable {
    fn eng_fire_detected(&self, engine: u8) -> &DiscreteParameter {
        &self.eng_fire_detected[engine_index(engine)]
    }
}

impl EngFireTest for A380FwsParameterTable {
    fn eng_fire_test(&self, engine: u8) -> &DiscreteParameter {
        &self.eng_fire_test[engine_index(engine)]
    }
}

impl EngAgentDischarged for A380FwsParameterTable {
    fn eng_agent_discharged(&self, engine: u8, agent: u8) -> &DiscreteParameter {
        &self.eng_agent_discharged[engine_index(engine)][dual_index(agent)]
    }
}

impl ApuFire for A380FwsParameterTable {
    fn apu_fire_pb_out(&self) -> &DiscreteParameter {
        &self.apu_fire_pb_out
    }

    fn apu_fire_detected(&self) -> &DiscreteParameter {
        &self.apu_fire_detected
    }

    fn apu_fire_test(&self) -> &DiscreteParameter {
        &self.apu_fire_test
    }

    fn apu_agent_discharged(&self) -> &DiscreteParameter {
        &self.apu_agent_discharged
    }
}

impl CargoSmokeTest for A380FwsParameterTable {
    fn cargo_smoke_test(&self) -> &DiscreteParameter {
        &self.cargo_smoke_test
    }
}

impl GreenSysLoPr for A380FwsParameterTable {
    fn green_sys_lo_pr(&self) -> &DiscreteParameter {
        &self.green_sys_lo_pr
    }
}

impl YellowSysLoPr for A380FwsParameterTable {
    fn yellow_sys_lo_pr(&self) -> &DiscreteParameter {
        &self.yellow_sys_lo_pr
    }
}

impl EngPumpPbAuto for A380FwsParameterTable {
    fn eng_pump_pb_auto(&self, engine: u8) -> &DiscreteParameter {
        &self.eng_pump_pb_auto[engine_index(engine)]
    }
}

impl EngGenPotentialNormal for A380FwsParameterTable {
    fn eng_gen_potential_normal(&self, engine: u8) -> &DiscreteParameter {
        &self.eng_gen_potential_normal[engine_index(engine)]
    }
}

impl EmerGenRunning for A380FwsParameterTable {
    fn emer_gen_running(&self) -> &DiscreteParameter {
        &self.emer_gen_running
    }
}

impl AcscDiscreteWord1 for A380FwsParameterTable {
    fn acsc_discrete_word_1(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes> {
        &self.acsc_discrete_word_1[dual_index(index)]
    }
}

impl CpcDiscreteWord for A380FwsParameterTable {
    fn cpc_discrete_word(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes> {
        &self.cpc_discrete_word[dual_index(index)]
    }
}

impl ExcessResidualPressure for A380FwsParameterTable {
    fn excess_residual_pressure(&self) -> &DiscreteParameter {
        &self.excess_residual_pressure
    }
}

impl OutflowValveOpenAmount for A380FwsParameterTable {
    fn outflow_valve_open_amount(&self, index: u8) -> &Arinc429Parameter<Ratio> {
        &self.outflow_valve_open_amount[dual_index(index)]
    }
}

impl ManOutflowValveOpenAmount for A380FwsParameterTable {
    fn man_outflow_valve_open_amount(&self) -> &Arinc429Parameter<Ratio> {
        &self.man_outflow_valve_open_amount
    }
}

impl SafetyValveOpenAmount for A380FwsParameterTable {
    fn safety_valve_open_amount(&self) -> &Arinc429Parameter<Ratio> {
        &self.safety_valve_open_amount
    }
}

impl PackPbOn for A380FwsParameterTable {
    fn pack_pb_on(&self, index: u8) -> &DiscreteParameter {
        &self.pack_pb_on[dual_index(index)]
    }
}

impl PackPbFault for A380FwsParameterTable {
    fn pack_pb_fault(&self, index: u8) -> &DiscreteParameter {
        &self.pack_pb_fault[dual_index(index)]
    }
}

impl EngBleedPbAuto for A380FwsParameterTable {
    fn eng_bleed_pb_auto(&self, engine: u8) -> &DiscreteParameter {
        &self.eng_bleed_pb_auto[engine_index(engine)]
    }
}

impl EngBleedPbFault for A380FwsParameterTable {
    fn eng_bleed_pb_fault(&self, engine: u8) -> &DiscreteParameter {
        &self.eng_bleed_pb_fault[engine_index(engine)]
    }
}

impl XbleedValveFullyClosed for A380FwsParameterTable {
    fn xbleed_valve_fully_closed(&self) -> &DiscreteParameter {
        &self.xbleed_valve_fully_closed
    }
}

impl FlapsLeverPosition for A380FwsParameterTable {
    fn flaps_lever_position(&self) -> &Arinc429Parameter<u8> {
        &self.flaps_lever_position
    }
}

impl FlapsPosition for A380FwsParameterTable {
    fn flaps_position(&self) -> &Arinc429Parameter<Angle> {
        &self.flaps_position
    }
}

impl SlatsPosition for A380FwsParameterTable {
    fn slats_position(&self) -> &Arinc429Parameter<Angle> {
        &self.slats_position
    }
}

impl FcdcDiscreteWord1 for A380FwsParameterTable {
    fn fcdc_discrete_word_1(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes> {
        &self.fcdc_discrete_word_1[dual_index(index)]
    }
}

impl FcdcDiscreteWord4 for A380FwsParameterTable {
    fn fcdc_discrete_word_4(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes> {
        &self.fcdc_discrete_word_4[dual_index(index)]
    }
}

impl PitchTrimInTakeoffRange for A380FwsParameterTable {
    fn pitch_trim_in_takeoff_range(&self) -> &DiscreteParameter {
        &self.pitch_trim_in_takeoff_range
    }
}

impl ParkBrakeSet for A380FwsParameterTable {
    fn park_brake_set(&self) -> &DiscreteParameter {
        &self.park_brake_set
    }
}

impl FmDiscreteWord2 for A380FwsParameterTable {
    fn fm_discrete_word_2(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes> {
        &self.fm_discrete_word_2[dual_index(index)]
    }
}

impl FacHealthy for A380FwsParameterTable {
    fn fac_healthy(&self, index: u8) -> &DiscreteParameter {
        &self.fac_healthy[dual_index(index)]
    }
}

impl FacRudderTrimPosition for A380FwsParameterTable {
    fn fac_rudder_trim_position(&self, index: u8) -> &Arinc429Parameter<Angle> {
        &self.fac_rudder_trim_position[dual_index(index)]
    }
}

impl FmDiscreteWord3 for A380FwsParameterTable {
    fn fm_discrete_word_3(&self, index: u8) -> &Arinc429Parameter<Arinc429Discretes> {
        &self.fm_discrete_word_3[dual_index(index)]
    }
}

impl BrakesHot for A380FwsParameterTable {
    fn brakes_hot(&self) -> &DiscreteParameter {
        &self.brakes_hot
    }
}

impl DoorsClosedAndLocked for A380FwsParameterTable {
    fn doors_closed_and_locked(&self) -> &DiscreteParameter {
        &self.doors_closed_and_locked
    }
}

impl StallWarningRaw for A380FwsParameterTable {
    fn stall_warning_raw(&self) -> &DiscreteParameter {
        &self.stall_warning_raw
    }
}

impl StructuralIceRatio for A380FwsParameterTable {
    fn structural_ice_ratio(&self) -> &Arinc429Parameter<Ratio> {
        &self.structural_ice_ratio
    }
}

impl TotalAirTemperature for A380FwsParameterTable {
    fn total_air_temperature(&self) -> &Arinc429Parameter<ThermodynamicTemperature> {
        &self.total_air_temperature
    }
}

impl EngAntiIceOn for A380FwsParameterTable {
    fn eng_anti_ice_on(&self, engine: u8) -> &DiscreteParameter {
        &self.eng_anti_ice_on[engine_index(engine)]
    }
}

impl WingAntiIceOn for A380FwsParameterTable {
    fn wing_anti_ice_on(&self) -> &DiscreteParameter {
        &self.wing_anti_ice_on
    }
}

impl AutobrakeMode for A380FwsParameterTable {
    fn autobrake_mode(&self) -> &Arinc429Parameter<u8> {
        &self.autobrake_mode
    }
}

impl MemoDiscretes for A380FwsParameterTable {
    fn apu_avail(&self) -> &DiscreteParameter {
        &self.apu_avail
    }

    fn apu_bleed_valve_open(&self) -> &DiscreteParameter {
        &self.apu_bleed_valve_open
    }

    fn landing_lights_extended(&self) -> &DiscreteParameter {
        &self.landing_lights_extended
    }

    fn seat_belts_on(&self) -> &DiscreteParameter {
        &self.seat_belts_on
    }

    fn no_smoking_on(&self) -> &DiscreteParameter {
        &self.no_smoking_on
    }

    fn cabin_ready(&self) -> &DiscreteParameter {
        &self.cabin_ready
    }

    fn refuel_in_progress(&self) -> &DiscreteParameter {
        &self.refuel_in_progress
    }

    fn nw_steering_disconnected(&self) -> &DiscreteParameter {
        &self.nw_steering_disconnected
    }

    fn eng_mode_selector_ignition(&self) -> &DiscreteParameter {
        &self.eng_mode_selector_ignition
    }

    fn rat_deployed(&self) -> &DiscreteParameter {
        &self.rat_deployed
    }
}
