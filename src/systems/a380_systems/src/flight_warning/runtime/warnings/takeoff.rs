use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;

/// Checks of the take off data entered in the FMS against each other and against the aircraft.
pub(in crate::flight_warning::runtime) trait TakeoffSpeeds {
    fn to_speeds_not_inserted(&self) -> bool;
    fn to_speeds_too_low(&self) -> bool;
    fn to_v1_vr_v2_disagree(&self) -> bool;

    /// The flaps lever does not match the take off configuration entered in the MCDU.
    fn flaps_fms_disagree(&self) -> bool;

    /// [`TakeoffSpeeds::flaps_fms_disagree`] gated like the speed checks.
    fn to_flaps_fms_disagree(&self) -> bool;

    /// The FMS reports neither missing, too low nor disagreeing takeoff speeds, regardless of
    /// whether any of the warnings would be shown.
    fn to_speeds_valid(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct TakeoffSpeedsActivation {
    to_config_and_no_speeds_pulse: PulseNode,
    to_config_checked_in_phase_2_or_3: bool,
    not_inserted_latch: bool,
    to_speeds_not_inserted: bool,
    to_speeds_too_low: bool,
    to_v1_vr_v2_disagree: bool,
    flaps_fms_disagree: bool,
    to_flaps_fms_disagree: bool,
    to_speeds_valid: bool,
}

impl Default for TakeoffSpeedsActivation {
    fn default() -> Self {
        Self {
            to_config_and_no_speeds_pulse: PulseNode::new(true),
            to_config_checked_in_phase_2_or_3: false,
            not_inserted_latch: false,
            to_speeds_not_inserted: false,
            to_speeds_too_low: false,
            to_v1_vr_v2_disagree: false,
            flaps_fms_disagree: false,
            to_flaps_fms_disagree: false,
            to_speeds_valid: false,
        }
    }
}

impl TakeoffSpeedsActivation {
    pub fn update(
        &mut self,
        signals: &(impl FmDiscreteWord2 + FmDiscreteWord3 + FlapsLeverPosition),
        flight_phases_sheet: &impl FlightPhasesDef,
        ecp_sheet: &impl Ecp,
    ) {
        let phase_3 = flight_phases_sheet.flight_phase().number() == 3;
        let to_config_raw = ecp_sheet.to_config_raw();

        if !flight_phases_sheet.phase_23() {
            self.to_config_checked_in_phase_2_or_3 = false;
        } else if to_config_raw {
            self.to_config_checked_in_phase_2_or_3 = true;
        }

        // Both FMs have to report the same condition
        let both_fms = |bit| {
            signals.fm_discrete_word_3(1).bit_value_or(bit, false)
                && signals.fm_discrete_word_3(2).bit_value_or(bit, false)
        };
        let not_inserted = both_fms(18);
        let too_low = both_fms(17);
        let disagree = both_fms(16);

        let to_config_and_no_speeds = self
            .to_config_and_no_speeds_pulse
            .update(not_inserted && to_config_raw);

        if not_inserted && (to_config_raw || phase_3) {
            self.not_inserted_latch = true;
        }
        if !(flight_phases_sheet.phase_23() && not_inserted) {
            self.not_inserted_latch = false;
        }

        self.to_speeds_not_inserted = !to_config_and_no_speeds
            && self.not_inserted_latch
            && !flight_phases_sheet.phase_3_pulse();

        let checks_enabled = (self.to_config_checked_in_phase_2_or_3 || phase_3)
            && !ecp_sheet.to_config_pulse()
            && !flight_phases_sheet.phase_3_pulse();
        self.to_speeds_too_low = checks_enabled && too_low;
        self.to_v1_vr_v2_disagree = checks_enabled && disagree;

        // Either FM may carry the MCDU take off configuration
        let mcdu_conf = |conf: usize| {
            signals.fm_discrete_word_2(1).bit_value_or(13 + conf, false)
                || signals.fm_discrete_word_2(2).bit_value_or(13 + conf, false)
        };
        let lever = signals.flaps_lever_position().value_or(0) as usize;
        let any_conf_entered = (0..=3).any(mcdu_conf);
        self.flaps_fms_disagree =
            any_conf_entered && (1..=3).any(|conf| (lever == conf) != mcdu_conf(conf));
        self.to_flaps_fms_disagree = checks_enabled && self.flaps_fms_disagree;

        self.to_speeds_valid = !not_inserted && !too_low && !disagree;
    }
}

impl TakeoffSpeeds for TakeoffSpeedsActivation {
    fn to_speeds_not_inserted(&self) -> bool {
        self.to_speeds_not_inserted
    }

    fn to_speeds_too_low(&self) -> bool {
        self.to_speeds_too_low
    }

    fn to_v1_vr_v2_disagree(&self) -> bool {
        self.to_v1_vr_v2_disagree
    }

    fn flaps_fms_disagree(&self) -> bool {
        self.flaps_fms_disagree
    }

    fn to_flaps_fms_disagree(&self) -> bool {
        self.to_flaps_fms_disagree
    }

    fn to_speeds_valid(&self) -> bool {
        self.to_speeds_valid
    }
}

pub(in crate::flight_warning::runtime) trait TakeoffConfigTest {
    /// T.O CONFIG NORMAL, which is only recomputed while the T.O memo is shown and the T.O CONFIG
    /// button is held.
    fn to_config_normal(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct TakeoffConfigTestActivation {
    normal_conf: ConfirmationNode,
    to_config_normal: bool,
}

impl Default for TakeoffConfigTestActivation {
    fn default() -> Self {
        Self {
            normal_conf: ConfirmationNode::new_falling(Duration::from_millis(300)),
            to_config_normal: false,
        }
    }
}

impl TakeoffConfigTestActivation {
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl BrakesHot + DoorsClosedAndLocked),
        ecp_sheet: &impl Ecp,
        elec_sheet: &impl ElecSupply,
        hydraulic_sheet: &impl HydraulicPressure,
        to_speeds_sheet: &impl TakeoffSpeeds,
        surfaces_sheet: &impl TakeoffConfigSurfaces,
        to_memo_sheet: &impl ToMemo,
    ) {
        if !(to_memo_sheet.to_memo_computed() && ecp_sheet.to_config_raw()) {
            return;
        }

        let system_status = elec_sheet.eng_gen_1_normal()
            && elec_sheet.eng_gen_2_normal()
            && !hydraulic_sheet.green_lo_pr()
            && !hydraulic_sheet.yellow_lo_pr()
            && hydraulic_sheet.eng_1_pump_auto()
            && hydraulic_sheet.eng_2_pump_auto();
        let doors = signals.doors_closed_and_locked().value_or(false);
        let brakes_hot = signals.brakes_hot().value_or(false);
        let surfaces_not_to = surfaces_sheet.flaps_not_in_to_position()
            || surfaces_sheet.slats_not_in_to_position()
            || surfaces_sheet.speed_brakes_not_retracted()
            || surfaces_sheet.pitch_trim_not_in_to_range()
            || surfaces_sheet.rudder_trim_not_in_to_position();

        let normal = system_status
            && to_speeds_sheet.to_speeds_valid()
            && !to_speeds_sheet.flaps_fms_disagree()
            && !brakes_hot
            && doors
            && !surfaces_not_to;
        self.to_config_normal = self.normal_conf.update(normal, delta);
    }
}

impl TakeoffConfigTest for TakeoffConfigTestActivation {
    fn to_config_normal(&self) -> bool {
        self.to_config_normal
    }
}
