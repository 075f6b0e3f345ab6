use std::time::Duration;

use parameters::AcEssBusPowered;
use runtime::A380FwsRuntime;
use systems::flight_warning::warnings::EcamCode;
use tracing::info;

mod config;
mod output;
mod parameters;
mod runtime;
#[cfg(test)]
mod test;

pub use config::FwsConfig;
pub use output::{FwsOutput, ProcedureState};
pub use parameters::A380FwsParameterTable;
pub use runtime::{ItemColor, ItemState, ProcedureRegistry, RegistryError};

/// The A380 flight warning system as seen from its power supply. The software runtime only exists
/// while the AC ESS bus is powered, a power loss longer than the transient tolerance throws away
/// every alert, latch and timer.
pub struct A380FlightWarningSystem {
    config: FwsConfig,
    registry: ProcedureRegistry,
    unpowered_for: Duration,
    runtime: Option<A380FwsRuntime>,
}

impl A380FlightWarningSystem {
    pub fn new(config: FwsConfig) -> Result<Self, RegistryError> {
        Ok(Self {
            registry: ProcedureRegistry::a380()?,
            unpowered_for: config.power_transient_tolerance,
            runtime: None,
            config,
        })
    }

    pub fn update(&mut self, delta: Duration, parameters: &A380FwsParameterTable) {
        if parameters.ac_ess_bus_powered().value_or(false) {
            self.unpowered_for = Duration::ZERO;
        } else {
            self.unpowered_for += delta;
        }

        if self.unpowered_for < self.config.power_transient_tolerance {
            let config = &self.config;
            let runtime = self
                .runtime
                .get_or_insert_with(|| A380FwsRuntime::new(config));
            runtime.update(delta, parameters, &self.registry);
        } else if self.runtime.take().is_some() {
            info!(unpowered_for = ?self.unpowered_for, "Flight warning system shut down");
        }
    }

    /// The outputs of the last update. An unpowered system drives nothing.
    pub fn output(&self) -> FwsOutput {
        self.runtime
            .as_ref()
            .map(|runtime| runtime.output(&self.registry))
            .unwrap_or_default()
    }

    /// Ticks or unticks an unsensed checklist item of an active procedure.
    pub fn toggle_item(&mut self, code: EcamCode, index: usize) {
        if let Some(runtime) = self.runtime.as_mut() {
            runtime.toggle_item(code, index, &self.registry);
        }
    }

    pub fn is_powered(&self) -> bool {
        self.runtime.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.runtime.as_ref().map_or(false, |runtime| runtime.ready())
    }

    pub fn registry(&self) -> &ProcedureRegistry {
        &self.registry
    }
}
