use std::fmt;
use std::process::ExitCode;

/// Monitoring-plugin status tiers. The discriminant is the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl Severity {
    pub fn exit_code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How an empty server list is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyListPolicy {
    /// `down == total` holds for 0 == 0, so the list is reported as all offline.
    #[default]
    Critical,
    Ok,
}

/// Terminal state of one invocation: one status line and one exit code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub severity: Severity,
    pub message: String,
}

impl Verdict {
    pub fn unknown(detail: impl fmt::Display) -> Self {
        Self {
            severity: Severity::Unknown,
            message: format!("{} - {}", Severity::Unknown, detail),
        }
    }

    pub fn usage() -> Self {
        Self::unknown("Usage: check_webservers <server_list.txt>")
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.severity.exit_code())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    total: usize,
    down: Vec<String>,
}

impl CheckReport {
    pub fn new(total: usize, down: Vec<String>) -> Self {
        debug_assert!(down.len() <= total);
        Self { total, down }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn down_count(&self) -> usize {
        self.down.len()
    }

    pub fn down_list(&self) -> &[String] {
        &self.down
    }

    pub fn verdict(&self, empty: EmptyListPolicy) -> Verdict {
        let total = self.total;
        let down = self.down_count();
        let offline = self.down_list().join(", ");

        let all_down = down == total && (total > 0 || empty == EmptyListPolicy::Critical);
        let severity = if all_down {
            Severity::Critical
        } else if down > 0 {
            Severity::Warning
        } else {
            Severity::Ok
        };

        let message = match severity {
            Severity::Critical => {
                format!("{severity} - ALL {total} web servers are offline: {offline}")
            }
            Severity::Warning => {
                format!("{severity} - {down}/{total} web servers are offline: {offline}")
            }
            _ => format!("{severity} - All {total} web servers are online"),
        };

        Verdict { severity, message }
    }
}
