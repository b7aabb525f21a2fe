use async_trait::async_trait;
use mac_proto::MacAddress;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::runner::{CommandOutput, CommandRunner};
use crate::config::Config;
use crate::error::Result;

/// Config for the fake tool: default ifconfig templates, no root check
pub fn create_test_config() -> Config {
    Config {
        require_root: false,
        ..Config::default()
    }
}

#[derive(Default)]
struct FakeState {
    interfaces: HashMap<String, MacAddress>,
    loopbacks: HashSet<String>,
    calls: Vec<Vec<String>>,
    ignore_writes: bool,
    failing_step: Option<&'static str>,
}

/// In-memory stand-in for ifconfig, understanding the default templates
#[derive(Default)]
pub struct FakeIfconfig {
    state: Mutex<FakeState>,
}

impl FakeIfconfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interface(self, name: &str, mac: &str) -> Self {
        let mac = MacAddress::from_string(mac).unwrap();
        self.state
            .lock()
            .unwrap()
            .interfaces
            .insert(name.to_string(), mac);
        self
    }

    /// Interface that exists but prints no hardware address
    pub fn with_loopback(self, name: &str) -> Self {
        self.state.lock().unwrap().loopbacks.insert(name.to_string());
        self
    }

    /// Exit 0 on `hw ether` without changing anything
    pub fn ignoring_writes(self) -> Self {
        self.state.lock().unwrap().ignore_writes = true;
        self
    }

    /// Make one step (`down`, `ether` or `up`) exit non-zero
    pub fn failing_on(self, step: &'static str) -> Self {
        self.state.lock().unwrap().failing_step = Some(step);
        self
    }

    /// Every invocation so far, program first
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mac_of(&self, interface: &str) -> Option<MacAddress> {
        self.state.lock().unwrap().interfaces.get(interface).copied()
    }
}

fn exited(status: i32, stdout: String, stderr: &str) -> CommandOutput {
    CommandOutput {
        status: Some(status),
        stdout,
        stderr: stderr.to_string(),
    }
}

#[async_trait]
impl CommandRunner for FakeIfconfig {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        let mut state = self.state.lock().unwrap();
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        state.calls.push(call);

        let Some(interface) = args.first() else {
            return Ok(exited(1, String::new(), "usage: ifconfig <interface>"));
        };
        if state.loopbacks.contains(interface) {
            let stdout = format!(
                "{interface}: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536\n        \
                 inet 127.0.0.1  netmask 255.0.0.0\n        \
                 loop  txqueuelen 1000  (Local Loopback)\n"
            );
            return Ok(exited(0, stdout, ""));
        }
        let Some(current) = state.interfaces.get(interface).copied() else {
            let message =
                format!("{interface}: error fetching interface information: Device not found");
            return Ok(exited(1, String::new(), &message));
        };

        let rest: Vec<&str> = args[1..].iter().map(String::as_str).collect();
        let output = match rest.as_slice() {
            [] => exited(
                0,
                format!(
                    "{interface}: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500\n        \
                     ether {current}  txqueuelen 1000  (Ethernet)\n"
                ),
                "",
            ),
            [step @ ("down" | "up")] => {
                if state.failing_step == Some(*step) {
                    exited(1, String::new(), "SIOCSIFFLAGS: Operation not permitted")
                } else {
                    exited(0, String::new(), "")
                }
            }
            ["hw", "ether", mac] => {
                if state.failing_step == Some("ether") {
                    exited(255, String::new(), "SIOCSIFHWADDR: Operation not permitted")
                } else if let Some(mac) = MacAddress::from_string(mac) {
                    if !state.ignore_writes {
                        state.interfaces.insert(interface.clone(), mac);
                    }
                    exited(0, String::new(), "")
                } else {
                    exited(1, String::new(), &format!("{mac}: invalid ether address"))
                }
            }
            _ => exited(1, String::new(), "ifconfig: unknown arguments"),
        };

        Ok(output)
    }
}
