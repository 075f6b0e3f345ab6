use serde::Serialize;
use systems::flight_warning::warnings::{EcamCode, FlightPhase, Severity};

use super::runtime::ItemColor;

/// Everything the flight warning system drives after one update: the attention getters, the
/// chimes, the display lines and the state of every active procedure.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FwsOutput {
    pub master_warning: bool,
    pub master_caution: bool,
    pub continuous_chime: bool,

    /// Only set in the update in which a single chime starts.
    pub single_chime: bool,
    pub single_chime_playing: bool,

    pub memo_left: Vec<EcamCode>,
    pub memo_right: Vec<EcamCode>,
    pub pfd_memo: Vec<EcamCode>,

    pub status_info: Vec<EcamCode>,
    pub inop_all_phases: Vec<EcamCode>,
    pub inop_appr_ldg: Vec<EcamCode>,

    pub limitations_all_phases: Vec<EcamCode>,
    pub limitations_appr_ldg: Vec<EcamCode>,
    pub limitations_pfd: Vec<EcamCode>,

    /// Active procedures in table order.
    pub active_procedures: Vec<ProcedureState>,
    pub presented: Vec<EcamCode>,
    pub recalled: Vec<EcamCode>,

    pub flight_phase: FlightPhase,
    pub to_inhibit: bool,
    pub ldg_inhibit: bool,
    pub to_config_normal: bool,
}

impl FwsOutput {
    pub fn procedure(&self, code: EcamCode) -> Option<&ProcedureState> {
        self.active_procedures
            .iter()
            .find(|procedure| procedure.code == code)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcedureState {
    pub code: EcamCode,
    pub severity: Severity,
    pub items_shown: Vec<bool>,
    pub items_active: Vec<bool>,
    pub items_completed: Vec<bool>,

    /// Indentation level of each checklist line.
    pub item_levels: Vec<u8>,
    pub item_colors: Vec<ItemColor>,
}
