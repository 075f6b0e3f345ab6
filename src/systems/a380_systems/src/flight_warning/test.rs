use crate::flight_warning::parameters::{A380FwsParameterTable, AcscDiscreteWord1, FmDiscreteWord3};
use systems::flight_warning::parameters::*;
use systems::flight_warning::warnings::FlightPhase;
use systems::shared::arinc429::{Arinc429Discretes, Arinc429DiscretesWordBuilder};
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::ratio::{percent, ratio};
use uom::si::thermodynamic_temperature::degree_celsius;
use uom::si::velocity::knot;

#[derive(Clone)]
pub struct A380FwsParameterTestBed {
    parameters: A380FwsParameterTable,
}

impl A380FwsParameterTestBed {
    pub fn new() -> Self {
        Self {
            parameters: A380FwsParameterTable::new(),
        }
    }

    pub fn and(self) -> Self {
        self
    }

    pub fn parameters(&self) -> &A380FwsParameterTable {
        &self.parameters
    }

    pub fn powered(mut self) -> Self {
        self.parameters
            .set_ac_ess_bus_powered(DiscreteParameter::new(true));
        self
    }

    /// A powered aircraft parked with its engines off and every monitored system healthy.
    pub fn parked(self) -> Self {
        self.powered()
            .flight_phase(1)
            .on_ground()
            .gear_down()
            .adirs_aligned()
            .acsc_healthy()
            .hydraulics_pressurised()
            .fms_healthy()
            .cpc_healthy()
            .engines_off()
    }

    pub fn unpowered(mut self) -> Self {
        self.parameters
            .set_ac_ess_bus_powered(DiscreteParameter::new(false));
        self
    }

    pub fn flight_phase(mut self, phase: u8) -> Self {
        let phase = FlightPhase::from_number(phase)
            .unwrap_or_else(|| panic!("Invalid flight phase {}", phase));
        self.parameters
            .set_fwc_flight_phase(Arinc429Parameter::new(phase));
        self
    }

    pub fn clr_pressed(mut self, side: u8) -> Self {
        self.parameters
            .set_clr_pb(side, DiscreteParameter::new(true));
        self
    }

    pub fn rcl_pressed(mut self) -> Self {
        self.parameters.set_rcl_pb(DiscreteParameter::new(true));
        self
    }

    pub fn takeoff_config_test_pressed(mut self) -> Self {
        self.parameters
            .set_to_config_pb(DiscreteParameter::new(true));
        self
    }

    pub fn mw_cancel_pressed(mut self) -> Self {
        self.parameters
            .set_capt_mw_cancel_on(DiscreteParameter::new(true));
        self
    }

    pub fn mc_cancel_pressed(mut self) -> Self {
        self.parameters
            .set_fo_mc_cancel_on(DiscreteParameter::new(true));
        self
    }

    fn lgciu_word_2(mut self, index: u8, compressed: bool) -> Self {
        let word = Arinc429DiscretesWordBuilder::new()
            .set(13, compressed)
            .build();
        self.parameters
            .set_lgciu_discrete_word_2(index, Arinc429Parameter::new(word));
        self
    }

    pub fn on_ground(self) -> Self {
        self.ess_lh_lg_compressed()
            .norm_lh_lg_compressed()
            .lgciu_word_2(1, true)
            .lgciu_word_2(2, true)
            .radio_heights(Length::new::<foot>(0.0))
    }

    pub fn in_flight(mut self) -> Self {
        self.parameters
            .set_ess_lh_lg_compressed(DiscreteParameter::new(false));
        self.parameters
            .set_norm_lh_lg_compressed(DiscreteParameter::new(false));
        self.lgciu_word_2(1, false).lgciu_word_2(2, false)
    }

    pub fn ess_lh_lg_compressed(mut self) -> Self {
        self.parameters
            .set_ess_lh_lg_compressed(DiscreteParameter::new(true));
        self
    }

    pub fn norm_lh_lg_compressed(mut self) -> Self {
        self.parameters
            .set_norm_lh_lg_compressed(DiscreteParameter::new(true));
        self
    }

    /// Overrides the compressed bit that the given LGCIU reports on its bus word.
    pub fn lgciu_bus_compressed(self, index: u8, compressed: bool) -> Self {
        self.lgciu_word_2(index, compressed)
    }

    fn lgciu_word_1(mut self, downlocked: bool) -> Self {
        let word = Arinc429DiscretesWordBuilder::new()
            .set(23, downlocked)
            .set(24, downlocked)
            .set(25, downlocked)
            .build();
        for index in 1..=2 {
            self.parameters
                .set_lgciu_discrete_word_1(index, Arinc429Parameter::new(word));
        }
        self
    }

    pub fn gear_down(self) -> Self {
        self.lgciu_word_1(true)
    }

    pub fn gear_up(self) -> Self {
        self.lgciu_word_1(false)
    }

    pub fn lgciu_word_1_failed(mut self, index: u8) -> Self {
        self.parameters.set_lgciu_discrete_word_1(
            index,
            Arinc429Parameter::new_inv(Arinc429Discretes::default()),
        );
        self
    }

    pub fn radio_heights(mut self, height: Length) -> Self {
        for index in 1..=3 {
            self.parameters
                .set_radio_height(index, Arinc429Parameter::new(height));
        }
        self
    }

    /// Simulates a flight at cruise, where the radio altimeters will not be able to receive a
    /// valid ground return and mark their data as NCD.
    pub fn radio_heights_at_cruise(mut self) -> Self {
        for index in 1..=3 {
            self.parameters.set_radio_height(
                index,
                Arinc429Parameter::new_ncd(Length::new::<foot>(10000.0)),
            );
        }
        self
    }

    pub fn radio_height_failed(mut self, index: u8) -> Self {
        self.parameters
            .set_radio_height(index, Arinc429Parameter::new_inv(Length::new::<foot>(0.0)));
        self
    }

    pub fn computed_speeds(mut self, speed: Velocity) -> Self {
        for index in 1..=3 {
            self.parameters
                .set_computed_speed(index, Arinc429Parameter::new(speed));
        }
        self
    }

    /// All three ADIRUs deliver valid air data and are aligned.
    pub fn adirs_aligned(mut self) -> Self {
        for index in 1..=3 {
            self.parameters.set_computed_speed(
                index,
                Arinc429Parameter::new(Velocity::new::<knot>(0.0)),
            );
            self.parameters
                .set_ir_pitch(index, Arinc429Parameter::new(Angle::new::<degree>(0.0)));
            self.parameters.set_ir_maintenance_word(
                index,
                Arinc429Parameter::new(Arinc429Discretes::default()),
            );
        }
        self
    }

    pub fn adr_failed(mut self, index: u8) -> Self {
        self.parameters.set_computed_speed(
            index,
            Arinc429Parameter::new_inv(Velocity::new::<knot>(0.0)),
        );
        self
    }

    fn master_lever(mut self, engine: u8, on: bool) -> Self {
        self.parameters
            .set_eng_master_lever_select_on(engine, Arinc429Parameter::new(on));
        self.parameters
            .set_eng_core_speed_at_or_above_idle(engine, Arinc429Parameter::new(on));
        self.parameters
            .set_eng_fuel_valve_open(engine, DiscreteParameter::new(on));
        self.parameters
            .set_eng_gen_potential_normal(engine, DiscreteParameter::new(on));
        self.parameters.set_eng_n1(
            engine,
            Arinc429Parameter::new(Ratio::new::<percent>(if on { 20.0 } else { 0.0 })),
        );
        self.eng_tla(engine, Angle::new::<degree>(0.0))
    }

    pub fn eng_gen_lost(mut self, engine: u8) -> Self {
        self.parameters
            .set_eng_gen_potential_normal(engine, DiscreteParameter::new(false));
        self
    }

    pub fn one_engine_running(self) -> Self {
        self.master_lever(1, true).master_lever(2, false)
    }

    /// Both engines running at idle.
    pub fn engines_running(self) -> Self {
        self.master_lever(1, true).master_lever(2, true)
    }

    pub fn engines_off(self) -> Self {
        self.master_lever(1, false).master_lever(2, false)
    }

    pub fn eng_tla(mut self, engine: u8, tla: Angle) -> Self {
        self.parameters
            .set_eng_tla(engine, Arinc429Parameter::new(tla));
        self
    }

    pub fn engines_at_takeoff_power(self) -> Self {
        self.eng_tla(1, Angle::new::<degree>(45.0))
            .eng_tla(2, Angle::new::<degree>(45.0))
    }

    pub fn engines_at_climb_power(self) -> Self {
        self.eng_tla(1, Angle::new::<degree>(25.0))
            .eng_tla(2, Angle::new::<degree>(25.0))
    }

    pub fn flex_thrust_limit(mut self) -> Self {
        self.parameters
            .set_flex_thrust_limit(DiscreteParameter::new(true));
        self
    }

    pub fn thrust_levers_not_set(mut self) -> Self {
        self.parameters
            .set_autothrust_lever_warning_toga(DiscreteParameter::new(true));
        self
    }

    pub fn eng_fire_detected(mut self, engine: u8) -> Self {
        self.parameters
            .set_eng_fire_detected(engine, DiscreteParameter::new(true));
        self
    }

    pub fn eng_fire_test(mut self, engine: u8) -> Self {
        self.parameters
            .set_eng_fire_test(engine, DiscreteParameter::new(true));
        self
    }

    pub fn eng_fire_pb_out(mut self, engine: u8) -> Self {
        self.parameters
            .set_eng_fire_pb_out(engine, DiscreteParameter::new(true));
        self
    }

    pub fn eng_agent_discharged(mut self, engine: u8, agent: u8) -> Self {
        self.parameters
            .set_eng_agent_discharged(engine, agent, DiscreteParameter::new(true));
        self
    }

    pub fn apu_fire_detected(mut self) -> Self {
        self.parameters
            .set_apu_fire_detected(DiscreteParameter::new(true));
        self
    }

    pub fn apu_fire_test(mut self) -> Self {
        self.parameters
            .set_apu_fire_test(DiscreteParameter::new(true));
        self
    }

    pub fn cargo_smoke_test(mut self) -> Self {
        self.parameters
            .set_cargo_smoke_test(DiscreteParameter::new(true));
        self
    }

    pub fn green_lo_pr(mut self) -> Self {
        self.parameters
            .set_green_sys_lo_pr(DiscreteParameter::new(true));
        self
    }

    pub fn yellow_lo_pr(mut self) -> Self {
        self.parameters
            .set_yellow_sys_lo_pr(DiscreteParameter::new(true));
        self
    }

    pub fn hydraulics_pressurised(mut self) -> Self {
        self.parameters
            .set_green_sys_lo_pr(DiscreteParameter::new(false));
        self.parameters
            .set_yellow_sys_lo_pr(DiscreteParameter::new(false));
        for engine in 1..=2 {
            self.parameters
                .set_eng_pump_pb_auto(engine, DiscreteParameter::new(true));
        }
        self
    }

    pub fn emer_gen_running(mut self) -> Self {
        self.parameters
            .set_emer_gen_running(DiscreteParameter::new(true));
        self
    }

    pub fn acsc_healthy(mut self) -> Self {
        for index in 1..=2 {
            self.parameters.set_acsc_discrete_word_1(
                index,
                Arinc429Parameter::new(Arinc429Discretes::default()),
            );
        }
        self
    }

    pub fn acsc_failed(mut self, index: u8) -> Self {
        self.parameters.set_acsc_discrete_word_1(
            index,
            Arinc429Parameter::new_inv(Arinc429Discretes::default()),
        );
        self
    }

    /// Sets a single bit on the discrete word of the given ACSC, keeping the word valid.
    pub fn acsc_bit(mut self, index: u8, bit: usize) -> Self {
        let word = self
            .parameters
            .acsc_discrete_word_1(index)
            .value_or(Arinc429Discretes::default())
            .with_bit(bit, true);
        self.parameters
            .set_acsc_discrete_word_1(index, Arinc429Parameter::new(word));
        self
    }

    /// Both packs on with their engine bleeds in auto.
    pub fn packs_on(mut self) -> Self {
        for index in 1..=2 {
            self.parameters
                .set_pack_pb_on(index, DiscreteParameter::new(true));
            self.parameters
                .set_pack_pb_fault(index, DiscreteParameter::new(false));
            self.parameters
                .set_eng_bleed_pb_auto(index, DiscreteParameter::new(true));
            self.parameters
                .set_eng_bleed_pb_fault(index, DiscreteParameter::new(false));
        }
        self.parameters
            .set_xbleed_valve_fully_closed(DiscreteParameter::new(true));
        self
    }

    pub fn pack_off(mut self, index: u8) -> Self {
        self.parameters
            .set_pack_pb_on(index, DiscreteParameter::new(false));
        self
    }

    pub fn pack_fault(mut self, index: u8) -> Self {
        self.parameters
            .set_pack_pb_fault(index, DiscreteParameter::new(true));
        self
    }

    pub fn eng_bleed_off(mut self, engine: u8) -> Self {
        self.parameters
            .set_eng_bleed_pb_auto(engine, DiscreteParameter::new(false));
        self
    }

    pub fn xbleed_open(mut self) -> Self {
        self.parameters
            .set_xbleed_valve_fully_closed(DiscreteParameter::new(false));
        self
    }

    /// Both CPCs healthy with CPC 1 in control and the outflow valve fully open.
    pub fn cpc_healthy(mut self) -> Self {
        let word_1 = Arinc429DiscretesWordBuilder::new().set(11, true).build();
        self.parameters
            .set_cpc_discrete_word(1, Arinc429Parameter::new(word_1));
        self.parameters.set_cpc_discrete_word(
            2,
            Arinc429Parameter::new(Arinc429Discretes::default()),
        );
        self.outflow_valve_open(100.0)
    }

    pub fn cpc_failed(mut self, index: u8) -> Self {
        self.parameters.set_cpc_discrete_word(
            index,
            Arinc429Parameter::new_inv(Arinc429Discretes::default()),
        );
        self.parameters.set_outflow_valve_open_amount(
            index,
            Arinc429Parameter::new_inv(Ratio::new::<percent>(0.0)),
        );
        self
    }

    pub fn excess_residual_pressure(mut self) -> Self {
        self.parameters
            .set_excess_residual_pressure(DiscreteParameter::new(true));
        self
    }

    /// The outflow valve opening as measured by both CPCs.
    pub fn outflow_valve_open(mut self, open: f64) -> Self {
        for index in 1..=2 {
            self.parameters.set_outflow_valve_open_amount(
                index,
                Arinc429Parameter::new(Ratio::new::<percent>(open)),
            );
        }
        self
    }

    pub fn man_outflow_valve_open(mut self, open: f64) -> Self {
        self.parameters
            .set_man_outflow_valve_open_amount(Arinc429Parameter::new(Ratio::new::<percent>(open)));
        self
    }

    pub fn safety_valve_open(mut self, open: f64) -> Self {
        self.parameters
            .set_safety_valve_open_amount(Arinc429Parameter::new(Ratio::new::<percent>(open)));
        self
    }

    pub fn flaps_lever(mut self, position: u8) -> Self {
        self.parameters
            .set_flaps_lever_position(Arinc429Parameter::new(position));
        self
    }

    fn flaps_slats(mut self, flaps: f64, slats: f64) -> Self {
        self.parameters
            .set_flaps_position(Arinc429Parameter::new(Angle::new::<degree>(flaps)));
        self.parameters
            .set_slats_position(Arinc429Parameter::new(Angle::new::<degree>(slats)));
        self
    }

    pub fn flaps_slats_retracted(self) -> Self {
        self.flaps_slats(0.0, 0.0).flaps_lever(0)
    }

    pub fn flaps_slats_in_takeoff_config(self) -> Self {
        self.flaps_slats(120.0, 222.0).flaps_lever(2)
    }

    pub fn flaps_slats_in_landing_config(self) -> Self {
        self.flaps_slats(251.0, 334.0).flaps_lever(4)
    }

    /// Both flight control computers report normal law.
    pub fn normal_law(mut self) -> Self {
        let word = Arinc429DiscretesWordBuilder::new().set(11, true).build();
        for index in 1..=2 {
            self.parameters
                .set_fcdc_discrete_word_1(index, Arinc429Parameter::new(word));
        }
        self
    }

    pub fn speed_brake_extended(mut self) -> Self {
        let word = Arinc429DiscretesWordBuilder::new().set(28, true).build();
        for index in 1..=2 {
            self.parameters
                .set_fcdc_discrete_word_4(index, Arinc429Parameter::new(word));
        }
        self
    }

    pub fn ground_spoilers_armed(mut self) -> Self {
        let word = Arinc429DiscretesWordBuilder::new().set(27, true).build();
        for index in 1..=2 {
            self.parameters
                .set_fcdc_discrete_word_4(index, Arinc429Parameter::new(word));
        }
        self
    }

    pub fn pitch_trim_out_of_takeoff_range(mut self) -> Self {
        self.parameters
            .set_pitch_trim_in_takeoff_range(DiscreteParameter::new(false));
        self
    }

    pub fn park_brake_set(mut self) -> Self {
        self.parameters
            .set_park_brake_set(DiscreteParameter::new(true));
        self
    }

    /// Both FMs have valid take off speeds.
    pub fn fms_healthy(mut self) -> Self {
        for index in 1..=2 {
            self.parameters.set_fm_discrete_word_3(
                index,
                Arinc429Parameter::new(Arinc429Discretes::default()),
            );
        }
        self
    }

    /// Raises a bit on the third discrete word of the given FM, keeping the word valid.
    pub fn fm_bit(mut self, index: u8, bit: usize) -> Self {
        let word = self
            .parameters
            .fm_discrete_word_3(index)
            .value_or(Arinc429Discretes::default())
            .with_bit(bit, true);
        self.parameters
            .set_fm_discrete_word_3(index, Arinc429Parameter::new(word));
        self
    }

    /// Enters the take off flaps configuration in the MCDU of both FMs.
    pub fn mcdu_to_conf(mut self, conf: usize) -> Self {
        let word = Arinc429DiscretesWordBuilder::new()
            .set(13 + conf, true)
            .build();
        for index in 1..=2 {
            self.parameters
                .set_fm_discrete_word_2(index, Arinc429Parameter::new(word));
        }
        self
    }

    /// Both FACs are healthy and read the given rudder trim.
    pub fn rudder_trim(mut self, degrees: f64) -> Self {
        for index in 1..=2 {
            self.parameters
                .set_fac_healthy(index, DiscreteParameter::new(true));
            self.parameters.set_fac_rudder_trim_position(
                index,
                Arinc429Parameter::new(Angle::new::<degree>(degrees)),
            );
        }
        self
    }

    pub fn fac_failed(mut self, index: u8) -> Self {
        self.parameters
            .set_fac_healthy(index, DiscreteParameter::new(false));
        self
    }

    pub fn to_speeds_not_inserted(self) -> Self {
        self.fms_healthy().fm_bit(1, 18).fm_bit(2, 18)
    }

    pub fn to_speeds_too_low(self) -> Self {
        self.fms_healthy().fm_bit(1, 17).fm_bit(2, 17)
    }

    pub fn brakes_hot(mut self) -> Self {
        self.parameters.set_brakes_hot(DiscreteParameter::new(true));
        self
    }

    pub fn doors_closed(mut self) -> Self {
        self.parameters
            .set_doors_closed_and_locked(DiscreteParameter::new(true));
        self
    }

    /// Every input of the T.O CONFIG test is in its normal take off state.
    pub fn ready_for_takeoff(self) -> Self {
        self.engines_running()
            .hydraulics_pressurised()
            .fms_healthy()
            .doors_closed()
            .flaps_slats_in_takeoff_config()
    }

    pub fn stall_warning_raw(mut self) -> Self {
        self.parameters
            .set_stall_warning_raw(DiscreteParameter::new(true));
        self
    }

    pub fn icing(mut self, ice: f64) -> Self {
        self.parameters
            .set_structural_ice_ratio(Arinc429Parameter::new(Ratio::new::<ratio>(ice)));
        self
    }

    pub fn total_air_temperature(mut self, celsius: f64) -> Self {
        self.parameters
            .set_total_air_temperature(Arinc429Parameter::new(ThermodynamicTemperature::new::<
                degree_celsius,
            >(celsius)));
        self
    }

    pub fn eng_anti_ice_on(mut self, engine: u8) -> Self {
        self.parameters
            .set_eng_anti_ice_on(engine, DiscreteParameter::new(true));
        self
    }

    pub fn wing_anti_ice_on(mut self) -> Self {
        self.parameters
            .set_wing_anti_ice_on(DiscreteParameter::new(true));
        self
    }

    pub fn autobrake_mode(mut self, mode: u8) -> Self {
        self.parameters
            .set_autobrake_mode(Arinc429Parameter::new(mode));
        self
    }

    pub fn apu_avail(mut self) -> Self {
        self.parameters.set_apu_avail(DiscreteParameter::new(true));
        self
    }

    pub fn apu_bleed_valve_open(mut self) -> Self {
        self.parameters
            .set_apu_bleed_valve_open(DiscreteParameter::new(true));
        self
    }

    pub fn landing_lights_extended(mut self) -> Self {
        self.parameters
            .set_landing_lights_extended(DiscreteParameter::new(true));
        self
    }

    pub fn seat_belts_on(mut self) -> Self {
        self.parameters
            .set_seat_belts_on(DiscreteParameter::new(true));
        self
    }

    pub fn no_smoking_on(mut self) -> Self {
        self.parameters
            .set_no_smoking_on(DiscreteParameter::new(true));
        self
    }

    pub fn cabin_ready(mut self) -> Self {
        self.parameters.set_cabin_ready(DiscreteParameter::new(true));
        self
    }

    pub fn refuel_in_progress(mut self) -> Self {
        self.parameters
            .set_refuel_in_progress(DiscreteParameter::new(true));
        self
    }

    pub fn nw_steering_disconnected(mut self) -> Self {
        self.parameters
            .set_nw_steering_disconnected(DiscreteParameter::new(true));
        self
    }

    pub fn eng_mode_selector_ignition(mut self) -> Self {
        self.parameters
            .set_eng_mode_selector_ignition(DiscreteParameter::new(true));
        self
    }

    pub fn rat_deployed(mut self) -> Self {
        self.parameters.set_rat_deployed(DiscreteParameter::new(true));
        self
    }
}

pub fn test_bed() -> A380FwsParameterTestBed {
    A380FwsParameterTestBed::new()
}

pub fn test_bed_with() -> A380FwsParameterTestBed {
    test_bed()
}
