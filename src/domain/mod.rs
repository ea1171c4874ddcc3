mod check_request;
mod severity;
mod status;

#[cfg(test)]
pub use check_request::CheckRequestBuilder;
pub use check_request::{CheckRequest, CheckType, Credentials, Generation, PowerStatus};
pub use severity::Severity;
pub use status::{DeviceInfo, DeviceStatus, MeterStatus, SystemStatus, Usage};
