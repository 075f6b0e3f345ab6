use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;
use uom::si::{angle::degree, f64::*};

/// The latch behind each of the T.O CONFIG warnings. The warning is given on a T.O CONFIG test
/// in phases 1, 2 and 9, and is latched once the takeoff roll has started.
struct TakeoffConfigLatch {
    sr: MemoryNode,
    not_to: bool,
    warning: bool,
}

impl TakeoffConfigLatch {
    fn new() -> Self {
        Self {
            sr: MemoryNode::new(true),
            not_to: false,
            warning: false,
        }
    }

    fn update(
        &mut self,
        not_in_to_position: bool,
        flight_phases_sheet: &impl FlightPhasesDef,
        ecp_sheet: &impl Ecp,
    ) -> bool {
        let latched = self.sr.update(
            flight_phases_sheet.phase_34() && not_in_to_position,
            !not_in_to_position || flight_phases_sheet.flight_phase().number() == 5,
        );
        self.not_to = flight_phases_sheet.phase_129() && not_in_to_position;
        self.warning = (ecp_sheet.to_config_held_min_1s5() && self.not_to) || latched;
        self.warning
    }

    fn latched(&self) -> bool {
        self.sr.output()
    }
}

pub(in crate::flight_warning::runtime) trait TakeoffConfigSurfaces {
    fn flaps_not_in_to_position(&self) -> bool;
    fn slats_not_in_to_position(&self) -> bool;
    fn speed_brakes_not_retracted(&self) -> bool;
    fn pitch_trim_not_in_to_range(&self) -> bool;

    /// A healthy FAC reads more than 3.6° of rudder trim.
    fn rudder_trim_not_in_to_position(&self) -> bool;

    fn flaps_config_warning(&self) -> bool;
    fn slats_config_warning(&self) -> bool;
    fn speed_brakes_config_warning(&self) -> bool;
    fn pitch_trim_config_warning(&self) -> bool;
    fn rudder_trim_config_warning(&self) -> bool;
    fn park_brake_config_warning(&self) -> bool;

    /// The flaps are not in takeoff position, either latched during the takeoff roll or while
    /// the aircraft is still before takeoff.
    fn flaps_not_to_memo(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct TakeoffConfigSurfacesActivation {
    flaps: TakeoffConfigLatch,
    slats: TakeoffConfigLatch,
    speed_brakes: TakeoffConfigLatch,
    pitch_trim: TakeoffConfigLatch,
    rudder_trim: TakeoffConfigLatch,
    park_brake: TakeoffConfigLatch,
    flaps_not_in_to_position: bool,
    slats_not_in_to_position: bool,
    speed_brakes_not_retracted: bool,
    pitch_trim_not_in_to_range: bool,
    rudder_trim_not_in_to_position: bool,
}

impl Default for TakeoffConfigSurfacesActivation {
    fn default() -> Self {
        Self {
            flaps: TakeoffConfigLatch::new(),
            slats: TakeoffConfigLatch::new(),
            speed_brakes: TakeoffConfigLatch::new(),
            pitch_trim: TakeoffConfigLatch::new(),
            rudder_trim: TakeoffConfigLatch::new(),
            park_brake: TakeoffConfigLatch::new(),
            flaps_not_in_to_position: false,
            slats_not_in_to_position: false,
            speed_brakes_not_retracted: false,
            pitch_trim_not_in_to_range: false,
            rudder_trim_not_in_to_position: false,
        }
    }
}

impl TakeoffConfigSurfacesActivation {
    const RUDDER_TRIM_TAKEOFF_LIMIT_DEGREES: f64 = 3.6;

    pub fn update(
        &mut self,
        signals: &(impl FcdcDiscreteWord4
              + PitchTrimInTakeoffRange
              + ParkBrakeSet
              + FacHealthy
              + FacRudderTrimPosition),
        flight_phases_sheet: &impl FlightPhasesDef,
        ecp_sheet: &impl Ecp,
        flaps_slats_sheet: &impl FlapsSlatsPosition,
    ) {
        self.flaps_not_in_to_position =
            flaps_slats_sheet.flaps_beyond_f() || flaps_slats_sheet.flaps_below_a();
        self.slats_not_in_to_position =
            flaps_slats_sheet.slats_below_d() || flaps_slats_sheet.slats_beyond_g();
        self.speed_brakes_not_retracted = signals.fcdc_discrete_word_4(1).bit_value_or(28, false)
            || signals.fcdc_discrete_word_4(2).bit_value_or(28, false);
        self.pitch_trim_not_in_to_range = !signals.pitch_trim_in_takeoff_range().value_or(true);
        self.rudder_trim_not_in_to_position = (1..=2).any(|fac| {
            signals.fac_healthy(fac).value_or(false)
                && signals
                    .fac_rudder_trim_position(fac)
                    .value_or(Angle::new::<degree>(0.))
                    .get::<degree>()
                    .abs()
                    > Self::RUDDER_TRIM_TAKEOFF_LIMIT_DEGREES
        });
        let park_brake_set = signals.park_brake_set().value_or(false);

        self.flaps.update(
            self.flaps_not_in_to_position,
            flight_phases_sheet,
            ecp_sheet,
        );
        self.slats.update(
            self.slats_not_in_to_position,
            flight_phases_sheet,
            ecp_sheet,
        );
        self.speed_brakes.update(
            self.speed_brakes_not_retracted,
            flight_phases_sheet,
            ecp_sheet,
        );
        self.pitch_trim.update(
            self.pitch_trim_not_in_to_range,
            flight_phases_sheet,
            ecp_sheet,
        );
        self.rudder_trim.update(
            self.rudder_trim_not_in_to_position,
            flight_phases_sheet,
            ecp_sheet,
        );
        self.park_brake
            .update(park_brake_set, flight_phases_sheet, ecp_sheet);
    }
}

impl TakeoffConfigSurfaces for TakeoffConfigSurfacesActivation {
    fn flaps_not_in_to_position(&self) -> bool {
        self.flaps_not_in_to_position
    }

    fn slats_not_in_to_position(&self) -> bool {
        self.slats_not_in_to_position
    }

    fn speed_brakes_not_retracted(&self) -> bool {
        self.speed_brakes_not_retracted
    }

    fn pitch_trim_not_in_to_range(&self) -> bool {
        self.pitch_trim_not_in_to_range
    }

    fn rudder_trim_not_in_to_position(&self) -> bool {
        self.rudder_trim_not_in_to_position
    }

    fn flaps_config_warning(&self) -> bool {
        self.flaps.warning
    }

    fn slats_config_warning(&self) -> bool {
        self.slats.warning
    }

    fn speed_brakes_config_warning(&self) -> bool {
        self.speed_brakes.warning
    }

    fn pitch_trim_config_warning(&self) -> bool {
        self.pitch_trim.warning
    }

    fn rudder_trim_config_warning(&self) -> bool {
        self.rudder_trim.warning
    }

    fn park_brake_config_warning(&self) -> bool {
        self.park_brake.warning
    }

    fn flaps_not_to_memo(&self) -> bool {
        self.flaps.latched() || self.flaps.not_to
    }
}

pub(in crate::flight_warning::runtime) trait SpeedBrake {
    fn speed_brake_extended(&self) -> bool;

    /// The speed brake memo is shown amber instead of green.
    fn speed_brake_amber(&self) -> bool;

    fn speed_brake_still_out(&self) -> bool;
    fn ground_spoilers_armed(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct SpeedBrakeActivation {
    extended_5s_conf: ConfirmationNode,
    extended_50s_conf: ConfirmationNode,
    caution_1_conf: ConfirmationNode,
    caution_1_pulse: PulseNode,
    caution_2_pulse: PulseNode,
    speed_brake_extended: bool,
    speed_brake_amber: bool,
    speed_brake_still_out: bool,
    ground_spoilers_armed: bool,
}

impl Default for SpeedBrakeActivation {
    fn default() -> Self {
        Self {
            extended_5s_conf: ConfirmationNode::new_leading(Duration::from_secs(5)),
            extended_50s_conf: ConfirmationNode::new_leading(Duration::from_secs(50)),
            caution_1_conf: ConfirmationNode::new_leading(Duration::from_secs(30)),
            caution_1_pulse: PulseNode::new(true),
            caution_2_pulse: PulseNode::new(true),
            speed_brake_extended: false,
            speed_brake_amber: false,
            speed_brake_still_out: false,
            ground_spoilers_armed: false,
        }
    }
}

impl SpeedBrakeActivation {
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &impl FcdcDiscreteWord4,
        flight_phases_sheet: &impl FlightPhasesDef,
    ) {
        let word_1 = signals.fcdc_discrete_word_4(1);
        let word_2 = signals.fcdc_discrete_word_4(2);
        self.speed_brake_extended =
            word_1.bit_value_or(28, false) || word_2.bit_value_or(28, false);
        self.ground_spoilers_armed =
            word_1.bit_value_or(27, false) || word_2.bit_value_or(27, false);

        let phase = flight_phases_sheet.flight_phase().number();
        let extended_5s = self
            .extended_5s_conf
            .update(self.speed_brake_extended, delta);
        let extended_50s = self
            .extended_50s_conf
            .update(self.speed_brake_extended, delta);

        let caution_1_condition = phase == 6 && extended_50s;
        let caution_1 = self.caution_1_conf.update(caution_1_condition, delta);
        let caution_2 = phase == 7 && extended_5s;

        self.speed_brake_amber =
            caution_1_condition || caution_2 || !flight_phases_sheet.phase_67();

        let new_caution =
            self.caution_1_pulse.update(caution_1) | self.caution_2_pulse.update(caution_2);
        self.speed_brake_still_out = !new_caution && (caution_1 || caution_2);
    }
}

impl SpeedBrake for SpeedBrakeActivation {
    fn speed_brake_extended(&self) -> bool {
        self.speed_brake_extended
    }

    fn speed_brake_amber(&self) -> bool {
        self.speed_brake_amber
    }

    fn speed_brake_still_out(&self) -> bool {
        self.speed_brake_still_out
    }

    fn ground_spoilers_armed(&self) -> bool {
        self.ground_spoilers_armed
    }
}
