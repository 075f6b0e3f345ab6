use super::super::parameters::*;

mod air_cond;
mod elec;
mod engine;
mod fire;
mod flight_controls;
mod flight_phases;
mod ground;
mod hydraulic;
mod ice;
mod landing_gear;
mod memo;
mod monitor;
mod nav;
mod pressurization;
mod surveillance;
mod takeoff;

pub(in crate::flight_warning::runtime) use air_cond::*;
pub(in crate::flight_warning::runtime) use elec::*;
pub(in crate::flight_warning::runtime) use engine::*;
pub(in crate::flight_warning::runtime) use fire::*;
pub(in crate::flight_warning::runtime) use flight_controls::*;
pub(in crate::flight_warning::runtime) use flight_phases::*;
pub(in crate::flight_warning::runtime) use ground::*;
pub(in crate::flight_warning::runtime) use hydraulic::*;
pub(in crate::flight_warning::runtime) use ice::*;
pub(in crate::flight_warning::runtime) use landing_gear::*;
pub(in crate::flight_warning::runtime) use memo::*;
pub(in crate::flight_warning::runtime) use monitor::*;
pub(in crate::flight_warning::runtime) use nav::*;
pub(in crate::flight_warning::runtime) use pressurization::*;
pub(in crate::flight_warning::runtime) use surveillance::*;
pub(in crate::flight_warning::runtime) use takeoff::*;
