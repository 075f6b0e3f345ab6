use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;

pub(in crate::flight_warning::runtime) trait GeneralCancel {
    fn mw_cancel_pulse_up(&self) -> bool;
    fn mc_cancel_pulse_up(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct GeneralCancelActivation {
    capt_mw_pulse: PulseNode,
    fo_mw_pulse: PulseNode,
    capt_mc_pulse: PulseNode,
    fo_mc_pulse: PulseNode,
    mw_cancel_pulse_up: bool,
    mc_cancel_pulse_up: bool,
}

impl Default for GeneralCancelActivation {
    fn default() -> Self {
        Self {
            capt_mw_pulse: PulseNode::new(true),
            fo_mw_pulse: PulseNode::new(true),
            capt_mc_pulse: PulseNode::new(true),
            fo_mc_pulse: PulseNode::new(true),
            mw_cancel_pulse_up: false,
            mc_cancel_pulse_up: false,
        }
    }
}

impl GeneralCancelActivation {
    pub fn update(
        &mut self,
        signals: &(impl CaptMwCancelOn + FoMwCancelOn + CaptMcCancelOn + FoMcCancelOn),
    ) {
        // Both pulse nodes have to see every update, so no short circuit here
        let capt_mw = self
            .capt_mw_pulse
            .update(signals.capt_mw_cancel_on().value_or(false));
        let fo_mw = self
            .fo_mw_pulse
            .update(signals.fo_mw_cancel_on().value_or(false));
        self.mw_cancel_pulse_up = capt_mw || fo_mw;

        let capt_mc = self
            .capt_mc_pulse
            .update(signals.capt_mc_cancel_on().value_or(false));
        let fo_mc = self
            .fo_mc_pulse
            .update(signals.fo_mc_cancel_on().value_or(false));
        self.mc_cancel_pulse_up = capt_mc || fo_mc;
    }
}

impl GeneralCancel for GeneralCancelActivation {
    fn mw_cancel_pulse_up(&self) -> bool {
        self.mw_cancel_pulse_up
    }

    fn mc_cancel_pulse_up(&self) -> bool {
        self.mc_cancel_pulse_up
    }
}

/// The ECAM control panel buttons which drive the alert queues.
pub(in crate::flight_warning::runtime) trait Ecp {
    fn clear_pulse(&self) -> bool;
    fn recall_pulse(&self) -> bool;

    /// Rising edge of the RCL button itself, without the debounce.
    fn recall_raw_pulse(&self) -> bool;

    fn to_config_pulse(&self) -> bool;
    fn to_config_test(&self) -> bool;
    fn to_config_held_min_1s5(&self) -> bool;
    fn to_config_raw(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct EcpActivation {
    clr_left_pulse: PulseNode,
    clr_right_pulse: PulseNode,
    clr_mtrig: MonostableTriggerNode,
    clr_output_pulse: PulseNode,
    rcl_raw_pulse: PulseNode,
    rcl_mtrig: MonostableTriggerNode,
    rcl_output_pulse: PulseNode,
    to_config_pulse_node: PulseNode,
    to_config_mtrig: MonostableTriggerNode,
    to_config_held_mtrig: MonostableTriggerNode,
    clear_pulse: bool,
    recall_pulse: bool,
    recall_raw_pulse: bool,
    to_config_pulse: bool,
    to_config_test: bool,
    to_config_held_min_1s5: bool,
    to_config_raw: bool,
}

impl Default for EcpActivation {
    fn default() -> Self {
        Self {
            clr_left_pulse: PulseNode::new_leading(),
            clr_right_pulse: PulseNode::new_leading(),
            clr_mtrig: MonostableTriggerNode::new_retriggerable(true, Duration::from_millis(500)),
            clr_output_pulse: PulseNode::new_leading(),
            rcl_raw_pulse: PulseNode::new_leading(),
            rcl_mtrig: MonostableTriggerNode::new_retriggerable(true, Duration::from_millis(500)),
            rcl_output_pulse: PulseNode::new_leading(),
            to_config_pulse_node: PulseNode::new_leading(),
            to_config_mtrig: MonostableTriggerNode::new_leading(Duration::from_millis(500)),
            to_config_held_mtrig: MonostableTriggerNode::new_leading(Duration::from_millis(1500)),
            clear_pulse: false,
            recall_pulse: false,
            recall_raw_pulse: false,
            to_config_pulse: false,
            to_config_test: false,
            to_config_held_min_1s5: false,
            to_config_raw: false,
        }
    }
}

impl EcpActivation {
    pub fn update(&mut self, delta: Duration, signals: &(impl ClrPb + RclPb + ToConfigPb)) {
        let clr_left = self.clr_left_pulse.update(signals.clr_pb(1).value_or(false));
        let clr_right = self.clr_right_pulse.update(signals.clr_pb(2).value_or(false));
        let clr_held = self.clr_mtrig.update(clr_left || clr_right, delta);
        self.clear_pulse = self.clr_output_pulse.update(clr_held);

        self.recall_raw_pulse = self.rcl_raw_pulse.update(signals.rcl_pb().value_or(false));
        let rcl_held = self.rcl_mtrig.update(self.recall_raw_pulse, delta);
        self.recall_pulse = self.rcl_output_pulse.update(rcl_held);

        self.to_config_raw = signals.to_config_pb().value_or(false);
        self.to_config_pulse = self.to_config_pulse_node.update(self.to_config_raw);
        self.to_config_test = self.to_config_mtrig.update(self.to_config_pulse, delta);
        self.to_config_held_min_1s5 =
            self.to_config_held_mtrig.update(self.to_config_raw, delta) || self.to_config_raw;
    }
}

impl Ecp for EcpActivation {
    fn clear_pulse(&self) -> bool {
        self.clear_pulse
    }

    fn recall_pulse(&self) -> bool {
        self.recall_pulse
    }

    fn recall_raw_pulse(&self) -> bool {
        self.recall_raw_pulse
    }

    fn to_config_pulse(&self) -> bool {
        self.to_config_pulse
    }

    fn to_config_test(&self) -> bool {
        self.to_config_test
    }

    fn to_config_held_min_1s5(&self) -> bool {
        self.to_config_held_min_1s5
    }

    fn to_config_raw(&self) -> bool {
        self.to_config_raw
    }
}
