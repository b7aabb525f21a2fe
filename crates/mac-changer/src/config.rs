use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration structure loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// External interface configuration tool
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Arguments to print an interface, `{interface}` is substituted
    #[serde(default = "default_show_args")]
    pub show_args: Vec<String>,

    /// Arguments to change the hardware address, `{interface}` and `{mac}` are substituted
    #[serde(default = "default_set_args")]
    pub set_args: Vec<String>,

    #[serde(default = "default_down_args")]
    pub down_args: Vec<String>,

    #[serde(default = "default_up_args")]
    pub up_args: Vec<String>,

    /// Bring the link down before the change and back up afterwards
    #[serde(default = "default_true")]
    pub cycle_link: bool,

    /// Upper bound for every tool invocation, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Refuse to change an address unless running as root
    #[serde(default = "default_true")]
    pub require_root: bool,
}

fn default_tool() -> String {
    "ifconfig".to_string()
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn default_show_args() -> Vec<String> {
    args(&["{interface}"])
}

fn default_set_args() -> Vec<String> {
    args(&["{interface}", "hw", "ether", "{mac}"])
}

fn default_down_args() -> Vec<String> {
    args(&["{interface}", "down"])
}

fn default_up_args() -> Vec<String> {
    args(&["{interface}", "up"])
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            show_args: default_show_args(),
            set_args: default_set_args(),
            down_args: default_down_args(),
            up_args: default_up_args(),
            cycle_link: default_true(),
            timeout_secs: default_timeout_secs(),
            require_root: default_true(),
        }
    }
}
