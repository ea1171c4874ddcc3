use crate::error::ConfigError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Everything a single check needs, assembled once from the command line and configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    pub host: String,
    pub check_type: CheckType,
    pub generation: Generation,
    pub switch: u32,
    pub credentials: Option<Credentials>,
    pub ignore_restart: bool,
    pub expected_power_status: Option<PowerStatus>,
}

impl CheckRequest {
    /// Base URL of the device, `http://` is assumed when the host carries no scheme.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.contains("://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckType {
    Info,
    System,
    Meter,
}

impl FromStr for CheckType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(CheckType::Info),
            "system" => Ok(CheckType::System),
            "meter" => Ok(CheckType::Meter),
            other => Err(ConfigError::UnknownCheckType(other.to_string())),
        }
    }
}

impl Display for CheckType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CheckType::Info => "info",
            CheckType::System => "system",
            CheckType::Meter => "meter",
        };
        write!(f, "{}", name)
    }
}

/// API family of the device: 1 is the legacy REST API, 2 the JSON-RPC API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    Gen1,
    Gen2,
}

impl FromStr for Generation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Generation::Gen1),
            "2" => Ok(Generation::Gen2),
            other => Err(ConfigError::UnknownGeneration(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStatus {
    On,
    Off,
}

impl PowerStatus {
    pub fn is_on(self) -> bool {
        self == PowerStatus::On
    }
}

impl FromStr for PowerStatus {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "on" => Ok(PowerStatus::On),
            "0" | "off" => Ok(PowerStatus::Off),
            other => Err(ConfigError::UnknownPowerStatus(other.to_string())),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
pub struct CheckRequestBuilder {
    request: CheckRequest,
}

#[cfg(test)]
impl CheckRequestBuilder {
    pub fn new(check_type: CheckType, generation: Generation) -> Self {
        CheckRequestBuilder {
            request: CheckRequest {
                host: "192.168.1.20".to_string(),
                check_type,
                generation,
                switch: 0,
                credentials: None,
                ignore_restart: false,
                expected_power_status: None,
            },
        }
    }

    pub fn host(mut self, host: String) -> Self {
        self.request.host = host;
        self
    }

    pub fn switch(mut self, switch: u32) -> Self {
        self.request.switch = switch;
        self
    }

    pub fn credentials(mut self, username: &str, password: &str) -> Self {
        self.request.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn expect(mut self, power_status: PowerStatus) -> Self {
        self.request.expected_power_status = Some(power_status);
        self
    }

    pub fn build(self) -> CheckRequest {
        self.request
    }
}
