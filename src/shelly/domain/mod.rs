pub mod gen1;
pub mod gen2;

/// Documents fetched from a 1st generation device for one check.
#[derive(Debug)]
pub enum Gen1Source {
    Info(gen1::ShellyGet),
    System {
        settings: gen1::Settings,
        status: gen1::Status,
    },
    Meter {
        settings: gen1::Settings,
        meter: gen1::Meter,
        relay: gen1::Relay,
    },
}

/// Documents fetched from a 2nd generation device for one check.
#[derive(Debug)]
pub enum Gen2Source {
    Info(gen2::ShellyGet),
    System(gen2::RpcResponse<gen2::SysStatus>),
    Meter(gen2::RpcResponse<gen2::SwitchStatus>),
}

#[derive(Debug)]
pub enum RawResponse {
    Gen1(Gen1Source),
    Gen2(Gen2Source),
}
