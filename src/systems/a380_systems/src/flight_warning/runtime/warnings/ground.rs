use std::time::Duration;

use super::*;
use systems::flight_warning::logic::*;
use systems::flight_warning::parameters::{Arinc429Parameter, SignStatusMatrix};
use systems::shared::arinc429::Arinc429Discretes;
use uom::si::f64::*;
use uom::si::length::foot;

pub(in crate::flight_warning::runtime) trait GroundDetection {
    fn ground(&self) -> bool;
    fn ground_immediate(&self) -> bool;

    /// The hardwired and the bus compressed signal of LGCIU 1 disagree, or its bus word is lost.
    fn lgciu_1_fault(&self) -> bool;

    /// The hardwired and the bus compressed signal of LGCIU 2 disagree, or its bus word is lost.
    fn lgciu_2_fault(&self) -> bool;
}

struct LgciuDisagreement {
    disagree_conf: ConfirmationNode,
    agree_conf: ConfirmationNode,
    mem: MemoryNode,
}

impl LgciuDisagreement {
    fn new() -> Self {
        Self {
            disagree_conf: ConfirmationNode::new_leading(Duration::from_secs(1)),
            agree_conf: ConfirmationNode::new_leading(Duration::from_millis(500)),
            mem: MemoryNode::new(true),
        }
    }

    fn update(
        &mut self,
        delta: Duration,
        hardwired_compressed: bool,
        word: &Arinc429Parameter<Arinc429Discretes>,
    ) -> bool {
        let bus_compressed = word.bit_value_or(13, false);
        let disagree = hardwired_compressed ^ bus_compressed;
        let word_lost = !(word.is_no() || word.is_ft());

        let set = self.disagree_conf.update(disagree, delta) || word_lost;
        let reset = self.agree_conf.update(!disagree, delta);
        self.mem.update(set, reset)
    }
}

pub(in crate::flight_warning::runtime) struct GroundDetectionActivation {
    lgciu_1: LgciuDisagreement,
    lgciu_2: LgciuDisagreement,
    ignore_ra_conf: ConfirmationNode,
    ra_on_ground_mem: [MemoryNode; 3],
    ground_conf: ConfirmationNode,
    ground_immediate: bool,
    ground: bool,
    lgciu_1_fault: bool,
    lgciu_2_fault: bool,
}

impl Default for GroundDetectionActivation {
    fn default() -> Self {
        Self {
            lgciu_1: LgciuDisagreement::new(),
            lgciu_2: LgciuDisagreement::new(),
            ignore_ra_conf: ConfirmationNode::new_leading(Duration::from_secs(1)),
            ra_on_ground_mem: [
                MemoryNode::new(true),
                MemoryNode::new(true),
                MemoryNode::new(true),
            ],
            ground_conf: ConfirmationNode::new_leading(Duration::from_secs(1)),
            ground_immediate: false,
            ground: false,
            lgciu_1_fault: false,
            lgciu_2_fault: false,
        }
    }
}

impl GroundDetectionActivation {
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl EssLhLgCompressed + NormLhLgCompressed + LgciuDiscreteWord2 + RadioHeight),
    ) {
        let hardwired_1 = signals.ess_lh_lg_compressed().value_or(false);
        let hardwired_2 = signals.norm_lh_lg_compressed().value_or(false);
        let word_1 = signals.lgciu_discrete_word_2(1);
        let word_2 = signals.lgciu_discrete_word_2(2);

        self.lgciu_1_fault = self.lgciu_1.update(delta, hardwired_1, word_1);
        self.lgciu_2_fault = self.lgciu_2.update(delta, hardwired_2, word_2);
        let any_disagree = self.lgciu_1_fault || self.lgciu_2_fault;

        let on_ground_a = hardwired_1
            && hardwired_2
            && word_1.bit_value_or(13, false)
            && word_2.bit_value_or(13, false);

        let all_ra_ncd = (1..=3).all(|index| signals.radio_height(index).is_ncd());
        let ignore_ra = self
            .ignore_ra_conf
            .update(all_ra_ncd && !any_disagree, delta);

        let mut votes = hardwired_1 as u8 + hardwired_2 as u8;
        let mut any_ra_failed = false;
        for (index, mem) in (1..=3).zip(self.ra_on_ground_mem.iter_mut()) {
            let height = signals.radio_height(index);
            let usable = height.is_no() || height.is_ft();
            let below_5_ft =
                usable && height.value_or(Length::new::<foot>(0.0)) < Length::new::<foot>(5.0);
            let latched = mem.update(below_5_ft, !hardwired_1 || !hardwired_2);
            if usable && (below_5_ft || latched) {
                votes += 1;
            }
            any_ra_failed |= height.is_fw();
        }

        self.ground_immediate = (on_ground_a && ignore_ra)
            || (votes > 2 && !any_ra_failed)
            || (votes > 1 && any_ra_failed);
        self.ground = self.ground_conf.update(self.ground_immediate, delta);
    }
}

impl GroundDetection for GroundDetectionActivation {
    fn ground(&self) -> bool {
        self.ground
    }

    fn ground_immediate(&self) -> bool {
        self.ground_immediate
    }

    fn lgciu_1_fault(&self) -> bool {
        self.lgciu_1_fault
    }

    fn lgciu_2_fault(&self) -> bool {
        self.lgciu_2_fault
    }
}
