//! The power-save parameter table.

/// How deep the radio sleeps between transmissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepType {
    /// Low-power sleep.
    LowPower,
    /// Ultra-low-power deep sleep.
    UltraLowPower,
}

impl SleepType {
    /// Returns the value the firmware expects for this sleep type.
    pub fn wire_value(self) -> u8 {
        match self {
            SleepType::LowPower => 1,
            SleepType::UltraLowPower => 2,
        }
    }
}

/// The parameter block that accompanies a power-save enable request.
///
/// The controller only owns these values; interpreting them is up to the
/// transport layer that builds the actual request frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsParams {
    /// Whether power save should be used at all.
    pub enabled: bool,
    /// The sleep depth to request.
    pub sleep_type: SleepType,
    /// Pending-tx packet count above which the radio stays awake.
    pub tx_threshold: u8,
    /// Pending-rx packet count above which the radio stays awake.
    pub rx_threshold: u8,
    /// Hysteresis applied to the tx threshold.
    pub tx_hysteresis: u8,
    /// Hysteresis applied to the rx threshold.
    pub rx_hysteresis: u8,
    /// How often the firmware re-evaluates the traffic thresholds.
    pub monitor_interval: u16,
    /// The listen interval in beacon periods.
    pub listen_interval: u32,
    /// How many beacons to receive per listen interval.
    pub num_beacons_per_listen_interval: u16,
    /// The DTIM interval duration.
    pub dtim_interval_duration: u32,
    /// How many DTIMs may pass per sleep period.
    pub num_dtims_per_sleep: u16,
    /// The wakeup period while in deep sleep.
    pub deep_sleep_wakeup_period: u32,
}

impl Default for PsParams {
    fn default() -> Self {
        Self {
            enabled: true,
            sleep_type: SleepType::LowPower,
            tx_threshold: 0,
            rx_threshold: 0,
            tx_hysteresis: 0,
            rx_hysteresis: 0,
            monitor_interval: 0,
            listen_interval: 200,
            num_beacons_per_listen_interval: 0,
            dtim_interval_duration: 0,
            num_dtims_per_sleep: 0,
            deep_sleep_wakeup_period: 100,
        }
    }
}
