use a380_systems::flight_warning::A380FwsParameterTable;
use serde::Deserialize;
use systems::flight_warning::parameters::{Arinc429Parameter, DiscreteParameter};
use systems::flight_warning::warnings::FlightPhase;
use systems::shared::arinc429::{Arinc429Discretes, Arinc429DiscretesWordBuilder};
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::ratio::percent;
use uom::si::velocity::knot;

#[derive(Debug, Default, Deserialize)]
pub struct Scenario {
    pub frames: Vec<Frame>,
}

/// A period of time during which the aircraft holds the given inputs. Inputs a frame leaves out
/// keep the value of the previous frames.
#[derive(Debug, Default, Deserialize)]
pub struct Frame {
    pub duration_ms: u64,
    #[serde(flatten)]
    pub inputs: Inputs,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Inputs {
    pub powered: Option<bool>,
    pub flight_phase: Option<u8>,
    pub on_ground: Option<bool>,
    pub gear_down: Option<bool>,
    pub radio_height_ft: Option<f64>,
    pub computed_speed_kt: Option<f64>,
    pub engines_running: Option<bool>,
    pub eng_1_fire: Option<bool>,
    pub eng_2_fire: Option<bool>,
    pub eng_1_fire_pb_out: Option<bool>,
    pub eng_2_fire_pb_out: Option<bool>,
    pub eng_fire_test: Option<bool>,
    pub apu_fire: Option<bool>,
    pub green_lo_pr: Option<bool>,
    pub yellow_lo_pr: Option<bool>,
    pub acsc_1_failed: Option<bool>,
    pub acsc_2_failed: Option<bool>,
    pub cpc_1_failed: Option<bool>,
    pub cpc_2_failed: Option<bool>,
    pub pack_1_on: Option<bool>,
    pub pack_2_on: Option<bool>,
    pub gen_1_lost: Option<bool>,
    pub gen_2_lost: Option<bool>,
    pub flaps_lever: Option<u8>,
    pub park_brake: Option<bool>,
    pub seat_belts: Option<bool>,
    pub no_smoking: Option<bool>,
    pub autobrake_mode: Option<u8>,
    pub apu_avail: Option<bool>,
    pub clr: Option<bool>,
    pub rcl: Option<bool>,
    pub mw_cancel: Option<bool>,
    pub mc_cancel: Option<bool>,
    pub to_config: Option<bool>,
}

fn discrete(value: bool) -> DiscreteParameter {
    DiscreteParameter::new(value)
}

fn healthy_word() -> Arinc429Parameter<Arinc429Discretes> {
    Arinc429Parameter::new(Arinc429Discretes::default())
}

/// CPC 1 is in control.
fn cpc_word(index: u8) -> Arinc429Parameter<Arinc429Discretes> {
    Arinc429Parameter::new(
        Arinc429DiscretesWordBuilder::new()
            .set(11, index == 1)
            .build(),
    )
}

/// An unpowered aircraft whose monitored systems all deliver valid, healthy data.
pub fn initial_parameters() -> A380FwsParameterTable {
    let mut parameters = A380FwsParameterTable::new();
    for index in 1..=3 {
        parameters.set_ir_pitch(index, Arinc429Parameter::new(Angle::new::<degree>(0.0)));
        parameters.set_ir_maintenance_word(index, healthy_word());
    }
    for index in 1..=2 {
        parameters.set_acsc_discrete_word_1(index, healthy_word());
        parameters.set_fm_discrete_word_3(index, healthy_word());
        parameters.set_eng_pump_pb_auto(index, discrete(true));
        parameters.set_cpc_discrete_word(index, cpc_word(index));
        parameters.set_outflow_valve_open_amount(
            index,
            Arinc429Parameter::new(Ratio::new::<percent>(100.)),
        );
    }
    parameters.set_ac_ess_bus_powered(discrete(false));
    parameters.set_green_sys_lo_pr(discrete(false));
    parameters.set_yellow_sys_lo_pr(discrete(false));
    parameters.set_doors_closed_and_locked(discrete(true));
    parameters.set_pitch_trim_in_takeoff_range(discrete(true));
    parameters
}

impl Inputs {
    pub fn apply(&self, parameters: &mut A380FwsParameterTable) {
        if let Some(powered) = self.powered {
            parameters.set_ac_ess_bus_powered(discrete(powered));
        }
        if let Some(phase) = self.flight_phase {
            parameters.set_fwc_flight_phase(match FlightPhase::from_number(phase) {
                Some(phase) => Arinc429Parameter::new(phase),
                None => Arinc429Parameter::new_inv(FlightPhase::default()),
            });
        }
        if let Some(on_ground) = self.on_ground {
            parameters.set_ess_lh_lg_compressed(discrete(on_ground));
            parameters.set_norm_lh_lg_compressed(discrete(on_ground));
            let word = Arinc429DiscretesWordBuilder::new()
                .set(13, on_ground)
                .build();
            for index in 1..=2 {
                parameters.set_lgciu_discrete_word_2(index, Arinc429Parameter::new(word));
            }
        }
        if let Some(down) = self.gear_down {
            let word = Arinc429DiscretesWordBuilder::new()
                .set(23, down)
                .set(24, down)
                .set(25, down)
                .build();
            for index in 1..=2 {
                parameters.set_lgciu_discrete_word_1(index, Arinc429Parameter::new(word));
            }
        }
        if let Some(height) = self.radio_height_ft {
            let height = Length::new::<foot>(height);
            // Above 2500 ft the altimeters lose their ground return.
            let parameter = if height.get::<foot>() > 2500. {
                Arinc429Parameter::new_ncd(height)
            } else {
                Arinc429Parameter::new(height)
            };
            for index in 1..=3 {
                parameters.set_radio_height(index, parameter);
            }
        }
        if let Some(speed) = self.computed_speed_kt {
            for index in 1..=3 {
                parameters.set_computed_speed(
                    index,
                    Arinc429Parameter::new(Velocity::new::<knot>(speed)),
                );
            }
        }
        if let Some(running) = self.engines_running {
            for engine in 1..=2 {
                set_engine_running(parameters, engine, running);
            }
        }

        for (engine, fire) in [(1, self.eng_1_fire), (2, self.eng_2_fire)] {
            if let Some(fire) = fire {
                parameters.set_eng_fire_detected(engine, discrete(fire));
            }
        }
        for (engine, out) in [(1, self.eng_1_fire_pb_out), (2, self.eng_2_fire_pb_out)] {
            if let Some(out) = out {
                parameters.set_eng_fire_pb_out(engine, discrete(out));
            }
        }
        if let Some(test) = self.eng_fire_test {
            for engine in 1..=2 {
                parameters.set_eng_fire_test(engine, discrete(test));
            }
        }
        if let Some(fire) = self.apu_fire {
            parameters.set_apu_fire_detected(discrete(fire));
        }

        if let Some(low) = self.green_lo_pr {
            parameters.set_green_sys_lo_pr(discrete(low));
        }
        if let Some(low) = self.yellow_lo_pr {
            parameters.set_yellow_sys_lo_pr(discrete(low));
        }
        for (index, failed) in [(1, self.acsc_1_failed), (2, self.acsc_2_failed)] {
            if let Some(failed) = failed {
                parameters.set_acsc_discrete_word_1(
                    index,
                    if failed {
                        Arinc429Parameter::new_inv(Arinc429Discretes::default())
                    } else {
                        healthy_word()
                    },
                );
            }
        }
        for (index, failed) in [(1, self.cpc_1_failed), (2, self.cpc_2_failed)] {
            if let Some(failed) = failed {
                parameters.set_cpc_discrete_word(
                    index,
                    if failed {
                        Arinc429Parameter::new_inv(Arinc429Discretes::default())
                    } else {
                        cpc_word(index)
                    },
                );
            }
        }
        for (index, on) in [(1, self.pack_1_on), (2, self.pack_2_on)] {
            if let Some(on) = on {
                parameters.set_pack_pb_on(index, discrete(on));
            }
        }
        for (engine, lost) in [(1, self.gen_1_lost), (2, self.gen_2_lost)] {
            if let Some(lost) = lost {
                parameters.set_eng_gen_potential_normal(engine, discrete(!lost));
            }
        }

        if let Some(position) = self.flaps_lever {
            parameters.set_flaps_lever_position(Arinc429Parameter::new(position));
        }
        if let Some(set) = self.park_brake {
            parameters.set_park_brake_set(discrete(set));
        }
        if let Some(on) = self.seat_belts {
            parameters.set_seat_belts_on(discrete(on));
        }
        if let Some(on) = self.no_smoking {
            parameters.set_no_smoking_on(discrete(on));
        }
        if let Some(mode) = self.autobrake_mode {
            parameters.set_autobrake_mode(Arinc429Parameter::new(mode));
        }
        if let Some(avail) = self.apu_avail {
            parameters.set_apu_avail(discrete(avail));
        }

        if let Some(pressed) = self.clr {
            parameters.set_clr_pb(1, discrete(pressed));
        }
        if let Some(pressed) = self.rcl {
            parameters.set_rcl_pb(discrete(pressed));
        }
        if let Some(pressed) = self.mw_cancel {
            parameters.set_capt_mw_cancel_on(discrete(pressed));
        }
        if let Some(pressed) = self.mc_cancel {
            parameters.set_capt_mc_cancel_on(discrete(pressed));
        }
        if let Some(pressed) = self.to_config {
            parameters.set_to_config_pb(discrete(pressed));
        }
    }
}

fn set_engine_running(parameters: &mut A380FwsParameterTable, engine: u8, running: bool) {
    parameters.set_eng_master_lever_select_on(engine, Arinc429Parameter::new(running));
    parameters.set_eng_core_speed_at_or_above_idle(engine, Arinc429Parameter::new(running));
    parameters.set_eng_fuel_valve_open(engine, discrete(running));
    parameters.set_eng_gen_potential_normal(engine, discrete(running));
    parameters.set_eng_n1(
        engine,
        Arinc429Parameter::new(Ratio::new::<percent>(if running { 20. } else { 0. })),
    );
    parameters.set_eng_tla(engine, Arinc429Parameter::new(Angle::new::<degree>(0.)));
}
