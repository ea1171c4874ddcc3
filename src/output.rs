use crate::domain::Severity;
use crate::error::CheckError;
use std::fmt::{Display, Formatter};

/// Outcome of a check, rendered as `SHELLY <LABEL>: <message> <perfdata>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub severity: Severity,
    pub message: String,
    pub perfdata: PerfData,
}

impl Verdict {
    pub fn new(severity: Severity, message: String, perfdata: PerfData) -> Self {
        Verdict { severity, message, perfdata }
    }

    pub fn from_error(error: &CheckError) -> Self {
        Verdict::new(error.severity(), error.message(), PerfData::default())
    }

    pub fn exit_code(&self) -> i32 {
        self.severity.exit_code()
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SHELLY {}: {} {}", self.severity.label(), self.message, self.perfdata)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerfData {
    metrics: Vec<Metric>,
}

impl PerfData {
    pub fn with(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    pub fn with_optional(self, metric: Option<Metric>) -> Self {
        match metric {
            Some(metric) => self.with(metric),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl Display for PerfData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        f.write_str("|")?;
        for (index, metric) in self.metrics.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", metric)?;
        }
        Ok(())
    }
}

/// A single `label=value[unit][;warn;crit;min;max]` entry. Thresholds are always left empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    label: &'static str,
    value: String,
    unit: &'static str,
    bounds: Option<(u64, u64)>,
}

impl Metric {
    pub fn new(label: &'static str, value: impl Display) -> Self {
        Metric {
            label,
            value: value.to_string(),
            unit: "",
            bounds: None,
        }
    }

    /// Formats `value` with a fixed number of decimals.
    pub fn decimal(label: &'static str, value: f64, precision: usize) -> Self {
        Metric::new(label, format!("{:.*}", precision, value))
    }

    pub fn bytes(label: &'static str, value: u64) -> Self {
        Metric {
            unit: "B",
            ..Metric::new(label, value)
        }
    }

    pub fn bounded(mut self, min: u64, max: u64) -> Self {
        self.bounds = Some((min, max));
        self
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}{}", self.label, self.value, self.unit)?;
        if let Some((min, max)) = self.bounds {
            write!(f, ";;;{};{}", min, max)?;
        }
        Ok(())
    }
}
