use fxhash::{FxHashMap, FxHashSet};
use systems::flight_warning::warnings::{AuralWarning, EcamCode, Severity};
use tracing::{debug, info};

use super::network::ConditionNetwork;
use super::procedures::{ChecklistItem, ItemKind, ProcedureRegistry};
use super::warnings::{Ecp, GeneralCancel};

/// The checklist state of an alert which is currently active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::flight_warning::runtime) struct ActiveAlert {
    pub shown: Vec<bool>,
    pub active: Vec<bool>,
    pub completed: Vec<bool>,
}

/// Tracks which procedures are active and which of them the crew currently sees. Every active
/// procedure is either presented or recalled, never both.
#[derive(Default)]
pub(in crate::flight_warning::runtime) struct AlertArbitration {
    records: FxHashMap<EcamCode, ActiveAlert>,
    presented: Vec<EcamCode>,
    recalled: Vec<EcamCode>,
    crc_requests: FxHashSet<EcamCode>,
    sc_requests: FxHashSet<EcamCode>,
    new_single_chime: bool,
    master_warning: bool,
    master_caution: bool,
    non_cancellable_count: usize,
}

impl AlertArbitration {
    pub fn update(&mut self, network: &ConditionNetwork, registry: &ProcedureRegistry) {
        let definitions = registry.definitions();

        let raw_active: Vec<bool> = definitions
            .iter()
            .map(|definition| {
                definition.rule.is_active(network)
                    && !network.phase_inhibited(definition.inhibited_phases)
            })
            .collect();
        let effective: Vec<bool> = (0..definitions.len())
            .map(|index| {
                raw_active[index]
                    && !registry
                        .overriders(index)
                        .iter()
                        .any(|&overrider| raw_active[overrider])
            })
            .collect();

        for (definition, &active) in definitions.iter().zip(effective.iter()) {
            if !active && self.records.remove(&definition.code).is_some() {
                self.presented.retain(|code| *code != definition.code);
                self.recalled.retain(|code| *code != definition.code);
                self.crc_requests.remove(&definition.code);
                self.sc_requests.remove(&definition.code);
                debug!(code = %definition.code, "Alert expired");
            }
        }

        self.new_single_chime = false;
        let mut new_codes = Vec::new();
        for (definition, &active) in definitions.iter().zip(effective.iter()) {
            if !active {
                continue;
            }

            let rule = definition.rule;
            let item_count = definition.items.len();
            match self.records.get_mut(&definition.code) {
                Some(record) => {
                    record.shown = rule
                        .shown_items(network)
                        .unwrap_or_else(|| vec![true; item_count]);
                    record.active = rule
                        .active_items(network)
                        .unwrap_or_else(|| vec![true; item_count]);

                    let completed = rule.completed_items(network);
                    for ((item, state), value) in definition
                        .items
                        .iter()
                        .zip(record.completed.iter_mut())
                        .zip(completed)
                    {
                        if item.kind == ItemKind::Sensed {
                            *state = value;
                        }
                    }
                }
                None => {
                    self.records.insert(
                        definition.code,
                        ActiveAlert {
                            shown: rule
                                .shown_items(network)
                                .unwrap_or_else(|| vec![true; item_count]),
                            active: rule
                                .active_items(network)
                                .unwrap_or_else(|| vec![true; item_count]),
                            completed: sensed_only(definition.items, rule.completed_items(network)),
                        },
                    );
                    self.presented.push(definition.code);
                    new_codes.push(definition.code);

                    match definition.severity {
                        Severity::Warning => self.master_warning = true,
                        Severity::Caution => self.master_caution = true,
                        Severity::Advisory => {}
                    }
                    match definition.aural_warning() {
                        AuralWarning::ContinuousRepetitiveChime => {
                            self.crc_requests.insert(definition.code);
                        }
                        AuralWarning::SingleChime => {
                            self.sc_requests.insert(definition.code);
                            self.new_single_chime = true;
                        }
                        AuralWarning::None => {}
                    }

                    info!(code = %definition.code, severity = ?definition.severity, "New alert");
                }
            }
        }

        if network.ecp.clear_pulse() {
            self.clear(&new_codes);
        }
        if network.ecp.recall_pulse() {
            self.recall();
        }

        self.non_cancellable_count = definitions
            .iter()
            .filter(|definition| {
                definition.severity == Severity::Warning
                    && !definition.cancellable
                    && self.records.contains_key(&definition.code)
            })
            .count();

        if network.general_cancel.mw_cancel_pulse_up() {
            if self.non_cancellable_count > 0 {
                debug!(
                    count = self.non_cancellable_count,
                    "Master warning cannot be cancelled"
                );
            } else {
                self.master_warning = false;
                self.crc_requests.clear();
            }
        }
        if network.general_cancel.mc_cancel_pulse_up() {
            self.master_caution = false;
        }

        if self.records.is_empty() {
            self.master_caution = false;
            if self.non_cancellable_count == 0 {
                self.master_warning = false;
            }
        }
    }

    /// Moves the oldest presented alert into the recalled list. Alerts which only appeared during
    /// this tick stay presented.
    fn clear(&mut self, new_codes: &[EcamCode]) {
        let position = self
            .presented
            .iter()
            .position(|code| !new_codes.contains(code));
        if let Some(position) = position {
            let code = self.presented.remove(position);
            self.recalled.push(code);
            debug!(%code, "Alert cleared");
        }
    }

    fn recall(&mut self) {
        if !self.recalled.is_empty() {
            let code = self.recalled.remove(0);
            self.presented.push(code);
            debug!(%code, "Alert recalled");
        }
    }

    /// Flips an unsensed checklist item. Anything else is left alone.
    pub fn toggle_item(&mut self, code: EcamCode, index: usize, registry: &ProcedureRegistry) {
        let unsensed = registry
            .index_of(code)
            .and_then(|procedure| registry.definition(procedure).items.get(index))
            .map_or(false, |item| item.kind == ItemKind::Unsensed);
        if !unsensed {
            return;
        }

        if let Some(state) = self
            .records
            .get_mut(&code)
            .and_then(|record| record.completed.get_mut(index))
        {
            *state = !*state;
        }
    }

    pub fn record(&self, code: EcamCode) -> Option<&ActiveAlert> {
        self.records.get(&code)
    }

    /// The active procedures in table order.
    pub fn active_codes<'a>(
        &'a self,
        registry: &'a ProcedureRegistry,
    ) -> impl Iterator<Item = EcamCode> + 'a {
        registry
            .definitions()
            .iter()
            .map(|definition| definition.code)
            .filter(move |code| self.records.contains_key(code))
    }

    pub fn presented(&self) -> &[EcamCode] {
        &self.presented
    }

    pub fn recalled(&self) -> &[EcamCode] {
        &self.recalled
    }

    pub fn master_warning(&self) -> bool {
        self.master_warning
    }

    pub fn master_caution(&self) -> bool {
        self.master_caution
    }

    pub fn crc_requested(&self) -> bool {
        !self.crc_requests.is_empty()
    }

    pub fn single_chime_requested(&self) -> bool {
        !self.sc_requests.is_empty()
    }

    /// A procedure asking for a single chime appeared during the last update.
    pub fn new_single_chime(&self) -> bool {
        self.new_single_chime
    }

    pub fn non_cancellable_count(&self) -> usize {
        self.non_cancellable_count
    }
}

/// Condition lines and crew ticked items start open whatever the rule says about them.
fn sensed_only(items: &[ChecklistItem], completed: Vec<bool>) -> Vec<bool> {
    items
        .iter()
        .zip(completed)
        .map(|(item, value)| item.kind == ItemKind::Sensed && value)
        .collect()
}
