use super::*;

pub(in crate::flight_warning::runtime) trait ElecSupply {
    fn eng_gen_1_normal(&self) -> bool;
    fn eng_gen_2_normal(&self) -> bool;
    fn emer_gen_running(&self) -> bool;
    fn ac_ess_bus_powered(&self) -> bool;
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct ElecSupplyActivation {
    eng_gen_1_normal: bool,
    eng_gen_2_normal: bool,
    emer_gen_running: bool,
    ac_ess_bus_powered: bool,
}

impl ElecSupplyActivation {
    pub fn update(
        &mut self,
        signals: &(impl EngGenPotentialNormal + EmerGenRunning + AcEssBusPowered),
    ) {
        self.eng_gen_1_normal = signals.eng_gen_potential_normal(1).value_or(false);
        self.eng_gen_2_normal = signals.eng_gen_potential_normal(2).value_or(false);
        self.emer_gen_running = signals.emer_gen_running().value_or(false);
        self.ac_ess_bus_powered = signals.ac_ess_bus_powered().value_or(false);
    }
}

impl ElecSupply for ElecSupplyActivation {
    fn eng_gen_1_normal(&self) -> bool {
        self.eng_gen_1_normal
    }

    fn eng_gen_2_normal(&self) -> bool {
        self.eng_gen_2_normal
    }

    fn emer_gen_running(&self) -> bool {
        self.emer_gen_running
    }

    fn ac_ess_bus_powered(&self) -> bool {
        self.ac_ess_bus_powered
    }
}
