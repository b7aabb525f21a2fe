use anyhow::Context;
use clap::Parser;
use mac_changer::{privilege, Config, MacChanger, MacChangerError};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_PATH: &str = "/etc/mac-changer/config.yaml";

/// Show or change the MAC address of a network interface
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Interface to inspect or change (e.g., eth0)
    #[arg(short, long)]
    interface: String,

    /// New MAC address (XX:XX:XX:XX:XX:XX or XX-XX-XX-XX-XX-XX)
    #[arg(short, long)]
    mac: Option<String>,

    /// Apply a random locally administered unicast address (overrides --mac)
    #[arg(short, long)]
    random: bool,

    /// Only print the current address (overrides --mac and --random)
    #[arg(short, long)]
    show: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Timeout in seconds for each tool invocation (at least 1)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Show,
    Random,
    Set(String),
}

impl Args {
    /// `--show` beats `--random`, which beats `--mac`; nothing means show
    fn action(&self) -> Action {
        if self.show {
            Action::Show
        } else if self.random {
            Action::Random
        } else if let Some(mac) = &self.mac {
            Action::Set(mac.clone())
        } else {
            Action::Show
        }
    }
}

/// Explicit path must load; the default locations fall back to built-in defaults
fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        let config = Config::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path))?;
        info!("Loaded configuration from {}", path);
        return Ok(config);
    }

    let config_path = if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() {
        DEFAULT_CONFIG_PATH
    } else if std::path::Path::new("config.yaml").exists() {
        "config.yaml"
    } else {
        return Ok(Config::default());
    };

    match Config::from_file(config_path) {
        Ok(cfg) => {
            info!("Loaded configuration from {}", config_path);
            Ok(cfg)
        }
        Err(e) => {
            error!("Failed to load configuration from {}: {}", config_path, e);
            info!("Using default configuration");
            Ok(Config::default())
        }
    }
}

async fn run(args: &Args, config: Config) -> Result<(), MacChangerError> {
    let action = args.action();
    // A malformed address is a usage error whoever runs the command
    if let Action::Set(mac) = &action {
        if !mac_changer::validate(mac) {
            return Err(MacChangerError::InvalidFormat(mac.clone()));
        }
    }
    if action != Action::Show && config.require_root {
        privilege::ensure_privileged()?;
    }

    let changer = MacChanger::new(config);
    let interface = args.interface.as_str();

    match action {
        Action::Show => {
            let mac = changer.get_current(interface).await?;
            println!("Current MAC address for {}: {}", interface, mac);
        }
        Action::Random => {
            let change = changer.set_random(interface).await?;
            println!(
                "MAC address for {} changed from {} to {} (random)",
                interface, change.previous, change.current
            );
        }
        Action::Set(mac) => {
            let change = changer.set(interface, &mac).await?;
            println!(
                "MAC address for {} changed from {} to {}",
                interface, change.previous, change.current
            );
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mac_changer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    match run(&args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
