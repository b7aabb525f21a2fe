use mac_proto::MacAddress;
use regex::Regex;
use std::sync::OnceLock;

use super::runner::CommandOutput;
use crate::error::MacChangerError;

/// Substrings tools print when the interface does not exist
const MISSING_DEVICE_MARKERS: &[&str] = &[
    "no such device",
    "not found",
    "does not exist",
    "cannot find device",
];

fn labelled_address() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:ether|hwaddr|address):?\s+([0-9a-f:-]+)")
            .expect("hardware address pattern is valid")
    })
}

/// Extract the hardware address from the output of the show command.
///
/// An address right after a hardware label (`ether`, `HWaddr`,
/// `link/ether`, `address`) wins; otherwise the first address anywhere.
pub fn hardware_address(stdout: &str) -> Option<MacAddress> {
    labelled_address()
        .captures_iter(stdout)
        .find_map(|caps| MacAddress::from_string(&caps[1]))
        .or_else(|| mac_proto::find_in(stdout))
}

/// Map a failed command to the matching error kind
pub fn classify_failure(interface: &str, command: &str, output: &CommandOutput) -> MacChangerError {
    let text = output.combined().to_lowercase();
    if MISSING_DEVICE_MARKERS.iter().any(|m| text.contains(m)) {
        return MacChangerError::InterfaceNotFound {
            interface: interface.to_string(),
            detail: output.detail(),
        };
    }

    MacChangerError::CommandExecution {
        command: command.to_string(),
        status: output.status,
        detail: output.detail(),
    }
}
