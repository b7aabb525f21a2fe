use mac_proto::MacAddress;
use std::time::Duration;
use thiserror::Error;

/// Outcome of a failed MAC address operation
#[derive(Error, Debug)]
pub enum MacChangerError {
    /// The supplied string is not a MAC address.
    #[error("invalid MAC address format: {0} (use XX:XX:XX:XX:XX:XX or XX-XX-XX-XX-XX-XX)")]
    InvalidFormat(String),

    #[error("interface name must not be empty")]
    InvalidInterface,

    /// The tool could not resolve the named interface.
    #[error("interface {interface} not found: {detail}")]
    InterfaceNotFound { interface: String, detail: String },

    /// The tool ran but exited unsuccessfully.
    #[error("'{command}' failed ({}): {detail}", status_text(.status))]
    CommandExecution {
        command: String,
        status: Option<i32>,
        detail: String,
    },

    /// The tool succeeded but printed no hardware address.
    #[error("could not find a MAC address for interface {interface} in the tool output")]
    NoHardwareAddress { interface: String },

    /// The tool accepted the change but the interface still reports another address.
    #[error("MAC address of {interface} is {actual} after the change, expected {expected}")]
    VerificationFailed {
        interface: String,
        expected: MacAddress,
        actual: MacAddress,
    },

    #[error("'{command}' did not finish within {}s", .after.as_secs())]
    Timeout { command: String, after: Duration },

    /// The tool could not be started at all.
    #[error("unable to run {program}: {source}")]
    ToolUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("changing a MAC address requires root privileges")]
    PermissionDenied,
}

fn status_text(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl MacChangerError {
    /// Process exit code reported by the command line front-end
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidFormat(_) | Self::InvalidInterface => 2,
            Self::InterfaceNotFound { .. } => 3,
            Self::CommandExecution { .. } | Self::NoHardwareAddress { .. } => 4,
            Self::VerificationFailed { .. } => 5,
            Self::Timeout { .. } => 6,
            Self::ToolUnavailable { .. } => 7,
            Self::PermissionDenied => 8,
        }
    }
}

pub type Result<T> = std::result::Result<T, MacChangerError>;
