use crate::domain::{CheckRequest, DeviceInfo, DeviceStatus, MeterStatus, PowerStatus, Severity, SystemStatus};
use crate::extensions::bool_ext::SwitchState;
use crate::extensions::float_ext::Truncate;
use crate::output::{Metric, PerfData, Verdict};
use tracing::{debug, instrument};

/// Check specific inputs that influence the severity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Policy {
    pub ignore_restart: bool,
    pub expected_power_status: Option<PowerStatus>,
}

impl From<&CheckRequest> for Policy {
    fn from(request: &CheckRequest) -> Self {
        Policy {
            ignore_restart: request.ignore_restart,
            expected_power_status: request.expected_power_status,
        }
    }
}

/// Derives the verdict for a normalized status. Escalation never goes beyond `Warning`,
/// `Critical` is left to failures that happen before a status exists.
#[instrument(skip_all)]
pub fn evaluate(status: &DeviceStatus, policy: &Policy) -> Verdict {
    let verdict = match status {
        DeviceStatus::Info(info) => evaluate_info(info),
        DeviceStatus::System(system) => evaluate_system(system, policy),
        DeviceStatus::Meter(meter) => evaluate_meter(meter, policy),
    };
    debug!(severity = %verdict.severity, "Evaluated status");
    verdict
}

fn evaluate_info(info: &DeviceInfo) -> Verdict {
    let auth = if info.auth_enabled {
        "Authentication is enabled"
    } else {
        "Authentication is disabled"
    };

    Verdict::new(
        Severity::Ok,
        format!(
            "Device {} (Model: {}, Generation: {}, Firmware: {}) is running - {}",
            info.name, info.model, info.generation, info.firmware, auth
        ),
        PerfData::default(),
    )
}

fn evaluate_system(system: &SystemStatus, policy: &Policy) -> Verdict {
    let perfdata = PerfData::default()
        .with(Metric::new("uptime", system.uptime))
        .with(Metric::bytes("memory", system.ram.used()).bounded(0, system.ram.total))
        .with(Metric::bytes("disk", system.fs.used()).bounded(0, system.fs.total));

    // 1st generation devices do not report whether a restart is pending
    if system.restart_required == Some(true) && !policy.ignore_restart {
        return Verdict::new(Severity::Warning, format!("Device ({}) requires a restart", system.name), perfdata);
    }

    Verdict::new(Severity::Ok, format!("Device ({}), uptime {}", system.name, system.uptime), perfdata)
}

fn evaluate_meter(meter: &MeterStatus, policy: &Policy) -> Verdict {
    let severity = match policy.expected_power_status {
        Some(expected) if expected.is_on() != meter.is_on => Severity::Warning,
        _ => Severity::Ok,
    };

    let mut message = format!(
        "Device ({}) SWITCH_{} is {}, currently using {} Watt",
        meter.name,
        meter.switch,
        meter.is_on.on_off(),
        meter.power.truncated()
    );
    if let Some(current) = meter.current {
        message.push_str(&format!(" / {} Amp", current.truncated()));
    }

    let perfdata = PerfData::default()
        .with(Metric::new("power", meter.power.truncated()))
        .with_optional(meter.current.map(|current| Metric::new("current", current.truncated())))
        .with(Metric::decimal("total_power", meter.total_energy, 3))
        .with_optional(meter.temperature.map(|celsius| Metric::decimal("temp", celsius, 1)))
        .with(Metric::new("powerstatus", meter.is_on.as_flag()));

    Verdict::new(severity, message, perfdata)
}
