use super::*;

pub(in crate::flight_warning::runtime) trait HydraulicPressure {
    fn green_lo_pr(&self) -> bool;
    fn yellow_lo_pr(&self) -> bool;
    fn green_yellow_lo_pr(&self) -> bool;
    fn eng_1_pump_auto(&self) -> bool;
    fn eng_2_pump_auto(&self) -> bool;
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct HydraulicPressureActivation {
    green_lo_pr: bool,
    yellow_lo_pr: bool,
    eng_1_pump_auto: bool,
    eng_2_pump_auto: bool,
}

impl HydraulicPressureActivation {
    pub fn update(&mut self, signals: &(impl GreenSysLoPr + YellowSysLoPr + EngPumpPbAuto)) {
        self.green_lo_pr = signals.green_sys_lo_pr().value_or(false);
        self.yellow_lo_pr = signals.yellow_sys_lo_pr().value_or(false);
        self.eng_1_pump_auto = signals.eng_pump_pb_auto(1).value_or(true);
        self.eng_2_pump_auto = signals.eng_pump_pb_auto(2).value_or(true);
    }
}

impl HydraulicPressure for HydraulicPressureActivation {
    fn green_lo_pr(&self) -> bool {
        self.green_lo_pr
    }

    fn yellow_lo_pr(&self) -> bool {
        self.yellow_lo_pr
    }

    fn green_yellow_lo_pr(&self) -> bool {
        self.green_lo_pr && self.yellow_lo_pr
    }

    fn eng_1_pump_auto(&self) -> bool {
        self.eng_1_pump_auto
    }

    fn eng_2_pump_auto(&self) -> bool {
        self.eng_2_pump_auto
    }
}
