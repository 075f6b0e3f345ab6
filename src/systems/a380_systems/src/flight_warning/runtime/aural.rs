use std::time::Duration;

use systems::flight_warning::logic::*;
use tracing::debug;

use super::arbitration::AlertArbitration;
use super::network::ConditionNetwork;
use super::warnings::{Fire, GeneralCancel};
use crate::flight_warning::config::FwsConfig;

/// Turns the chime requests of the alert arbitration into the continuous repetitive chime and
/// single chime playback events.
pub(in crate::flight_warning::runtime) struct AuralArbitration {
    starting: bool,
    inhibit: MonostableTriggerNode,
    inhibit_end: PulseNode,
    playing: MonostableTriggerNode,
    pending: bool,
    played_last_tick: bool,
    crc: bool,
    single_chime: bool,
    single_chime_playing: bool,
}

impl AuralArbitration {
    pub fn new(config: &FwsConfig) -> Self {
        Self {
            starting: true,
            inhibit: MonostableTriggerNode::new_leading(config.single_chime_inhibit_time),
            inhibit_end: PulseNode::new_falling(),
            playing: MonostableTriggerNode::new_leading(config.single_chime_play_time),
            pending: false,
            played_last_tick: false,
            crc: false,
            single_chime: false,
            single_chime_playing: false,
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        network: &ConditionNetwork,
        arbitration: &AlertArbitration,
    ) {
        let inhibited = self
            .inhibit
            .update(self.starting || self.played_last_tick, delta);
        self.starting = false;
        if self.inhibit_end.update(inhibited) && self.pending {
            self.pending = false;
            debug!("Dropped a single chime requested during the inhibit window");
        }

        if arbitration.new_single_chime() {
            self.pending = true;
        }
        if network.general_cancel.mc_cancel_pulse_up() || !arbitration.single_chime_requested() {
            self.pending = false;
        }

        self.crc = arbitration.crc_requested() || network.fire.fire_active();

        self.single_chime = self.pending && !self.crc && !inhibited;
        if self.single_chime {
            self.pending = false;
            debug!("Single chime");
        }
        self.played_last_tick = self.single_chime;
        self.single_chime_playing = self.playing.update(self.single_chime, delta);
    }

    pub fn continuous_repetitive_chime(&self) -> bool {
        self.crc
    }

    /// Set for the one tick in which a single chime starts playing.
    pub fn single_chime(&self) -> bool {
        self.single_chime
    }

    pub fn single_chime_playing(&self) -> bool {
        self.single_chime_playing
    }
}

impl Default for AuralArbitration {
    fn default() -> Self {
        Self::new(&FwsConfig::default())
    }
}
