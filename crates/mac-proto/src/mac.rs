use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bit 0 of the first octet: set for multicast/broadcast, clear for unicast
pub const MULTICAST_BIT: u8 = 0x01;

/// Bit 1 of the first octet: set when the address was assigned by software
pub const LOCALLY_ADMINISTERED_BIT: u8 = 0x02;

/// MAC address representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

/// Reason a string was rejected as a MAC address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMacError {
    #[error("expected 6 groups separated by ':' or '-', found {0}")]
    GroupCount(usize),

    #[error("group {0} is not a two-digit hexadecimal value")]
    InvalidGroup(usize),

    #[error("separators must be either all ':' or all '-'")]
    MixedSeparators,
}

impl MacAddress {
    /// Create a new MAC address from a byte array
    pub fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Get the underlying byte array
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Parse a MAC address from a string (XX:XX:XX:XX:XX:XX or XX-XX-XX-XX-XX-XX)
    pub fn from_string(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Uppercase rendering (XX:XX:XX:XX:XX:XX), for display only
    pub fn to_upper_string(&self) -> String {
        format!(
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }

    pub fn is_multicast(&self) -> bool {
        self.0[0] & MULTICAST_BIT != 0
    }

    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & LOCALLY_ADMINISTERED_BIT != 0
    }

    /// Burned-in, vendor assigned address
    pub fn is_universal(&self) -> bool {
        !self.is_locally_administered()
    }
}

/// Canonical form: lowercase, colon separated, as printed by ifconfig and ip
impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = ParseMacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator = match s.find(|c: char| c == ':' || c == '-') {
            Some(idx) => s.as_bytes()[idx] as char,
            None => return Err(ParseMacError::GroupCount(1)),
        };
        if s.contains(':') && s.contains('-') {
            return Err(ParseMacError::MixedSeparators);
        }

        let parts: Vec<&str> = s.split(separator).collect();
        if parts.len() != 6 {
            return Err(ParseMacError::GroupCount(parts.len()));
        }

        let mut bytes = [0u8; 6];
        for (i, part) in parts.iter().enumerate() {
            // from_str_radix alone would let "+f" through
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseMacError::InvalidGroup(i + 1));
            }
            bytes[i] =
                u8::from_str_radix(part, 16).map_err(|_| ParseMacError::InvalidGroup(i + 1))?;
        }

        Ok(Self(bytes))
    }
}

/// Check a candidate string against the 48-bit MAC address format.
///
/// Six two-digit hexadecimal groups, separated consistently by either `:`
/// or `-`, in any letter case. Surrounding whitespace is not stripped.
pub fn validate(candidate: &str) -> bool {
    candidate.parse::<MacAddress>().is_ok()
}

/// Generate a random locally administered unicast address.
///
/// Every call draws fresh octets; nothing prevents a collision with an
/// address already present on the network.
pub fn generate_random() -> MacAddress {
    generate_random_with(&mut rand::thread_rng())
}

/// Same as [`generate_random`] with a caller-supplied RNG
pub fn generate_random_with<R: Rng>(rng: &mut R) -> MacAddress {
    let mut bytes = [0u8; 6];
    rng.fill(&mut bytes);
    bytes[0] = (bytes[0] | LOCALLY_ADMINISTERED_BIT) & !MULTICAST_BIT;
    MacAddress(bytes)
}
