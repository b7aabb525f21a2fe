//! Read and change network interface hardware addresses by driving an
//! external interface configuration tool (`ifconfig` by default).

pub mod changer;
pub mod config;
pub mod error;
pub mod privilege;
pub mod tool;

pub use changer::{MacChange, MacChanger};
pub use config::Config;
pub use error::{MacChangerError, Result};

// Re-export the address type and its pure helpers
pub use mac_proto::{generate_random, validate, MacAddress};
