use crate::domain::{DeviceInfo, DeviceStatus, MeterStatus, SystemStatus, Usage};
use crate::shelly::domain::{Gen1Source, Gen2Source, RawResponse, gen1, gen2};

/// Turns generation specific documents into a [`DeviceStatus`].
pub trait Normalize {
    fn normalize(self, switch: u32) -> DeviceStatus;
}

impl Normalize for RawResponse {
    fn normalize(self, switch: u32) -> DeviceStatus {
        match self {
            RawResponse::Gen1(source) => source.normalize(switch),
            RawResponse::Gen2(source) => source.normalize(switch),
        }
    }
}

impl Normalize for Gen1Source {
    fn normalize(self, switch: u32) -> DeviceStatus {
        match self {
            Gen1Source::Info(shelly) => DeviceStatus::Info(shelly.into()),
            Gen1Source::System { settings, status } => DeviceStatus::System(SystemStatus {
                name: settings.device.hostname,
                restart_required: None,
                uptime: status.uptime,
                ram: Usage::new(status.ram_total, status.ram_free),
                fs: Usage::new(status.fs_size, status.fs_free),
            }),
            Gen1Source::Meter { settings, meter, relay } => DeviceStatus::Meter(MeterStatus {
                name: settings.device.hostname,
                switch,
                is_on: relay.ison,
                power: meter.power,
                total_energy: meter.total,
                current: None,
                temperature: None,
            }),
        }
    }
}

impl Normalize for Gen2Source {
    fn normalize(self, switch: u32) -> DeviceStatus {
        match self {
            Gen2Source::Info(shelly) => DeviceStatus::Info(shelly.into()),
            Gen2Source::System(response) => DeviceStatus::System(SystemStatus {
                name: response.src,
                restart_required: Some(response.result.restart_required),
                uptime: response.result.uptime,
                ram: Usage::new(response.result.ram_size, response.result.ram_free),
                fs: Usage::new(response.result.fs_size, response.result.fs_free),
            }),
            Gen2Source::Meter(response) => {
                let status = response.result;
                DeviceStatus::Meter(MeterStatus {
                    name: response.src,
                    switch,
                    is_on: status.output,
                    power: status.apower,
                    total_energy: status.aenergy.total,
                    current: Some(status.current),
                    temperature: Some(status.temperature.celsius),
                })
            }
        }
    }
}

impl From<gen1::ShellyGet> for DeviceInfo {
    fn from(shelly: gen1::ShellyGet) -> Self {
        DeviceInfo {
            name: String::new(),
            model: shelly.r#type,
            generation: 1,
            firmware: shelly.fw,
            auth_enabled: shelly.auth,
        }
    }
}

impl From<gen2::ShellyGet> for DeviceInfo {
    fn from(shelly: gen2::ShellyGet) -> Self {
        DeviceInfo {
            name: shelly.app,
            model: shelly.model,
            generation: shelly.r#gen,
            firmware: shelly.ver,
            auth_enabled: shelly.auth_en,
        }
    }
}
