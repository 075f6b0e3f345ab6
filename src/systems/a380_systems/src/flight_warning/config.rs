use serde::Deserialize;
use std::time::Duration;

/// Timing constants of the flight warning system. Hosts can override individual fields, missing
/// fields keep their default. Every duration is given in seconds, e.g. `"startup_time": 5.0`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FwsConfig {
    /// How long the AC ESS bus has to be powered before the master lights are driven.
    #[serde(with = "seconds")]
    pub startup_time: Duration,

    /// How long the FWS can tolerate a power transient before losing its internal state.
    #[serde(with = "seconds")]
    pub power_transient_tolerance: Duration,

    #[serde(with = "seconds")]
    pub single_chime_inhibit_time: Duration,

    #[serde(with = "seconds")]
    pub single_chime_play_time: Duration,

    #[serde(with = "seconds")]
    pub flight_phase_inhibit_confirmation: Duration,
}

impl Default for FwsConfig {
    fn default() -> Self {
        Self {
            startup_time: Duration::from_secs(5),
            power_transient_tolerance: Duration::from_millis(500),
            single_chime_inhibit_time: Duration::from_secs(2),
            single_chime_play_time: Duration::from_millis(500),
            flight_phase_inhibit_confirmation: Duration::from_secs(3),
        }
    }
}

mod seconds {
    use serde::{de::Error, Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(seconds).map_err(|_| {
            D::Error::custom(format!(
                "expected a non-negative number of seconds, got {}",
                seconds
            ))
        })
    }
}
