use mac_proto::MacAddress;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{MacChangerError, Result};
use crate::tool::{args, command_line, output, CommandOutput, CommandRunner, ProcessRunner};

/// Addresses of an interface before and after a verified change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacChange {
    pub previous: MacAddress,
    pub current: MacAddress,
}

/// Reads and changes interface hardware addresses through the configured tool
pub struct MacChanger<R = ProcessRunner> {
    config: Config,
    runner: R,
}

impl MacChanger<ProcessRunner> {
    pub fn new(config: Config) -> Self {
        let runner = ProcessRunner::new(config.timeout());
        Self { config, runner }
    }
}

impl<R: CommandRunner> MacChanger<R> {
    pub fn with_runner(config: Config, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Current hardware address of `interface`, as reported by the tool
    pub async fn get_current(&self, interface: &str) -> Result<MacAddress> {
        check_interface(interface)?;
        let shown = self.invoke(interface, &self.config.show_args, None).await?;

        output::hardware_address(&shown.stdout).ok_or_else(|| {
            MacChangerError::NoHardwareAddress {
                interface: interface.to_string(),
            }
        })
    }

    /// Apply `mac` to `interface` and confirm the change by reading it back.
    ///
    /// A malformed address is rejected before the tool is invoked. Nothing
    /// is retried: on failure the interface is left as the tool left it.
    pub async fn set(&self, interface: &str, mac: &str) -> Result<MacChange> {
        let requested: MacAddress = mac
            .parse()
            .map_err(|_| MacChangerError::InvalidFormat(mac.to_string()))?;
        check_interface(interface)?;

        let previous = self.get_current(interface).await?;
        info!(
            "Changing MAC address of {} from {} to {}",
            interface, previous, requested
        );

        if self.config.cycle_link {
            self.invoke(interface, &self.config.down_args, None).await?;
            let applied = self
                .invoke(interface, &self.config.set_args, Some(&requested))
                .await;
            // The link goes back up whether or not the change was accepted
            let up = self.invoke(interface, &self.config.up_args, None).await;
            if let Err(e) = applied {
                if let Err(up_err) = up {
                    warn!("Failed to bring {} back up: {}", interface, up_err);
                }
                return Err(e);
            }
            if let Err(up_err) = up {
                if let Err(retry_err) = self.invoke(interface, &self.config.up_args, None).await {
                    warn!("Failed to bring {} back up: {}", interface, retry_err);
                }
                return Err(up_err);
            }
        } else {
            self.invoke(interface, &self.config.set_args, Some(&requested))
                .await?;
        }

        let actual = self.get_current(interface).await?;
        if actual != requested {
            return Err(MacChangerError::VerificationFailed {
                interface: interface.to_string(),
                expected: requested,
                actual,
            });
        }

        info!("MAC address of {} is now {}", interface, actual);
        Ok(MacChange {
            previous,
            current: actual,
        })
    }

    /// Apply a freshly generated locally administered unicast address.
    /// The applied address is only reported through the returned change.
    pub async fn set_random(&self, interface: &str) -> Result<MacChange> {
        let mac = mac_proto::generate_random();
        debug!("Generated random MAC {} for {}", mac, interface);
        self.set(interface, &mac.to_string()).await
    }

    async fn invoke(
        &self,
        interface: &str,
        template: &[String],
        mac: Option<&MacAddress>,
    ) -> Result<CommandOutput> {
        let argv = args::expand(template, interface, mac);
        let result = self.runner.run(&self.config.tool, &argv).await?;
        if result.success() {
            Ok(result)
        } else {
            let line = command_line(&self.config.tool, &argv);
            Err(output::classify_failure(interface, &line, &result))
        }
    }
}

fn check_interface(interface: &str) -> Result<()> {
    if interface.is_empty() {
        return Err(MacChangerError::InvalidInterface);
    }
    Ok(())
}
