use crate::domain::Severity;
use crate::shelly::ShellyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Need to give password when authentication is enabled")]
    MissingPassword,
    #[error("--expect-powerstatus requires --type=meter")]
    PowerStatusRequiresMeter,
    #[error("Unknown check type '{0}'. Try --help.")]
    UnknownCheckType(String),
    #[error("Unknown power status '{0}', expected one of 0, 1, off, on")]
    UnknownPowerStatus(String),
    #[error("Unknown device generation '{0}', expected 1 or 2")]
    UnknownGeneration(String),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unable to load configuration: {0}")]
    Source(#[from] config::ConfigError),
}

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Shelly(#[from] ShellyError),
}

impl CheckError {
    pub fn severity(&self) -> Severity {
        match self {
            CheckError::Config(ConfigError::MissingPassword) => Severity::Critical,
            CheckError::Config(_) => Severity::Unknown,
            CheckError::Shelly(ShellyError::Unauthorized) => Severity::Warning,
            CheckError::Shelly(_) => Severity::Critical,
        }
    }

    /// The error message followed by all of its underlying causes.
    pub fn message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}
