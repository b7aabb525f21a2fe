pub mod args;
pub mod output;
pub mod runner;

#[cfg(test)]
pub mod test_helpers;

pub use runner::{command_line, CommandOutput, CommandRunner, ProcessRunner};
