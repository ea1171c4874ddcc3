use crate::app_config::AppConfig;
use crate::domain::{CheckRequest, CheckType, Credentials, Generation, PowerStatus};
use crate::error::ConfigError;
use clap::{ArgAction, Parser};

const DEFAULT_USER: &str = "admin";

#[derive(Parser, Debug)]
#[command(name = "check_shelly")]
#[command(version, about = "Monitoring plugin for Shelly relay switch and power meter devices")]
pub struct Cli {
    /// IP address or hostname of the Shelly device
    #[arg(short = 'H', long)]
    pub host: String,
    /// Enable authentication
    #[arg(short, long)]
    pub auth: bool,
    /// Username for authentication, defaults to admin
    #[arg(short, long)]
    pub user: Option<String>,
    /// Password for authentication
    #[arg(short, long)]
    pub password: Option<String>,
    /// Type of check to do: info, system, meter
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub check_type: String,
    /// API generation of the device: 1 or 2
    #[arg(short, long, default_value = "2")]
    pub generation: String,
    /// Hardware model of the device, informational only
    #[arg(short, long)]
    pub model: Option<String>,
    /// Switch id of the device, e.g. 0 for switch_0
    #[arg(short, long, default_value_t = 0)]
    pub switch: u32,
    /// Ignore the fact that the device requires a restart
    #[arg(long)]
    pub ignore_restart: bool,
    /// Raise a warning if the switch is not in this power status (0, 1, off, on), requires --type=meter
    #[arg(long, value_name = "STATUS")]
    pub expect_powerstatus: Option<String>,
    /// Configuration file holding credentials and the request timeout
    #[arg(short, long, default_value = "check_shelly")]
    pub config: String,
    /// Log to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validates the arguments and fills in what the configuration provides.
    pub fn into_request(self, config: &AppConfig) -> Result<CheckRequest, ConfigError> {
        let credentials = if self.auth {
            let password = self
                .password
                .or_else(|| config.password().map(str::to_string))
                .ok_or(ConfigError::MissingPassword)?;
            let username = self
                .user
                .or_else(|| config.user().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_USER.to_string());
            Some(Credentials { username, password })
        } else {
            None
        };

        let check_type: CheckType = self.check_type.parse()?;
        let generation: Generation = self.generation.parse()?;
        let expected_power_status = self.expect_powerstatus.as_deref().map(str::parse::<PowerStatus>).transpose()?;
        if expected_power_status.is_some() && check_type != CheckType::Meter {
            return Err(ConfigError::PowerStatusRequiresMeter);
        }

        Ok(CheckRequest {
            host: self.host,
            check_type,
            generation,
            switch: self.switch,
            credentials,
            ignore_restart: self.ignore_restart,
            expected_power_status,
        })
    }
}

/// Condenses clap's report into one line: the error and its indented details, without usage and tips.
impl From<clap::Error> for ConfigError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let summary = rendered
            .lines()
            .take_while(|line| !line.trim().is_empty())
            .map(|line| line.trim().trim_start_matches("error: "))
            .collect::<Vec<_>>()
            .join(" ");
        ConfigError::InvalidArguments(summary)
    }
}
