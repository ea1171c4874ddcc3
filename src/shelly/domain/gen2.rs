use serde::{Deserialize, Serialize};

// API: https://shelly-api-docs.shelly.cloud/gen2/ComponentsAndServices/Shelly#http-endpoint-shelly
#[derive(Debug, Deserialize)]
pub struct ShellyGet {
    pub model: String,
    pub r#gen: u8,
    pub ver: String,
    pub app: String,
    pub auth_en: bool,
}

#[derive(Debug, Serialize)]
pub struct RpcRequest {
    pub id: u32,
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<RpcParams>,
}

impl RpcRequest {
    pub fn sys_get_status() -> Self {
        RpcRequest {
            id: 1,
            method: "Sys.GetStatus",
            params: None,
        }
    }

    pub fn switch_get_status(switch: u32) -> Self {
        RpcRequest {
            id: 1,
            method: "Switch.GetStatus",
            params: Some(RpcParams { id: switch }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RpcParams {
    pub id: u32,
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub src: String,
    pub result: T,
}

// API: https://shelly-api-docs.shelly.cloud/gen2/ComponentsAndServices/Sys#status
#[derive(Debug, Deserialize)]
pub struct SysStatus {
    pub restart_required: bool,
    pub uptime: u64,
    pub ram_size: u64,
    pub ram_free: u64,
    pub fs_size: u64,
    pub fs_free: u64,
}

// API: https://shelly-api-docs.shelly.cloud/gen2/ComponentsAndServices/Switch#status
#[derive(Debug, Deserialize)]
pub struct SwitchStatus {
    pub output: bool,
    pub apower: f64,
    pub current: f64,
    pub aenergy: ActiveEnergy,
    pub temperature: Temperature,
}

#[derive(Debug, Deserialize)]
pub struct ActiveEnergy {
    pub total: f64, // Wh
}

#[derive(Debug, Deserialize)]
pub struct Temperature {
    #[serde(rename = "tC")]
    pub celsius: f64,
}
