use serde::Deserialize;

// API: https://shelly-api-docs.shelly.cloud/gen1/#shelly
#[derive(Debug, Deserialize)]
pub struct ShellyGet {
    pub r#type: String,
    pub fw: String,
    pub auth: bool,
}

// API: https://shelly-api-docs.shelly.cloud/gen1/#settings
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub device: SettingsDevice,
}

#[derive(Debug, Deserialize)]
pub struct SettingsDevice {
    pub hostname: String,
}

// API: https://shelly-api-docs.shelly.cloud/gen1/#status
#[derive(Debug, Deserialize)]
pub struct Status {
    pub uptime: u64,
    pub ram_total: u64,
    pub ram_free: u64,
    pub fs_size: u64,
    pub fs_free: u64,
}

// API: https://shelly-api-docs.shelly.cloud/gen1/#shelly1-shelly1pm-meter-0
#[derive(Debug, Deserialize)]
pub struct Meter {
    pub power: f64,
    pub total: f64,
}

// API: https://shelly-api-docs.shelly.cloud/gen1/#shelly1-shelly1pm-relay-0
#[derive(Debug, Deserialize)]
pub struct Relay {
    pub ison: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_settings_hostname() -> Result<(), serde_json::Error> {
        let settings: Settings = serde_json::from_str(include_str!("../../../tests/resources/gen1/settings.json"))?;

        assert_eq!(settings.device.hostname, "shelly1pm-B929CC");
        Ok(())
    }

    #[test]
    fn fails_to_deserialize_a_status_without_ram_figures() {
        let result = serde_json::from_str::<Status>(r#"{ "uptime": 12, "fs_size": 233681, "fs_free": 162648 }"#);

        assert!(result.is_err());
    }
}
