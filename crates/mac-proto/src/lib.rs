//! MAC address parsing, validation and generation
//!
//! This library provides the hardware address value type without any I/O.
//! Reading or changing the address of a real interface lives in
//! `mac-changer`.

pub mod mac;
pub mod scan;

pub use mac::{generate_random, generate_random_with, validate, MacAddress, ParseMacError};
pub use scan::{find_all, find_in};
