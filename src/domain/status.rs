/// Generation independent view on what a device reported for a single check.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceStatus {
    Info(DeviceInfo),
    System(SystemStatus),
    Meter(MeterStatus),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo {
    /// Application name on 2nd generation devices, empty for 1st generation devices.
    pub name: String,
    pub model: String,
    pub generation: u8,
    pub firmware: String,
    pub auth_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemStatus {
    pub name: String,
    /// Not reported by 1st generation devices.
    pub restart_required: Option<bool>,
    pub uptime: u64,
    pub ram: Usage,
    pub fs: Usage,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Usage {
    pub total: u64,
    pub free: u64,
}

impl Usage {
    pub fn new(total: u64, free: u64) -> Self {
        Usage { total, free }
    }

    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.free)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeterStatus {
    pub name: String,
    pub switch: u32,
    pub is_on: bool,
    /// Instantaneous power in Watt.
    pub power: f64,
    /// Total energy in Watt-hours.
    pub total_energy: f64,
    /// Current in Ampere, only reported by 2nd generation devices.
    pub current: Option<f64>,
    /// Device temperature in °C, only reported by 2nd generation devices.
    pub temperature: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(262144, 100000, 162144)]
    #[case(1024, 1024, 0)]
    #[case(0, 0, 0)]
    #[case(100, 200, 0)]
    fn used_is_never_negative(#[case] total: u64, #[case] free: u64, #[case] expected: u64) {
        assert_eq!(Usage::new(total, free).used(), expected);
    }
}
