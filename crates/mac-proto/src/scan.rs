//! Locating MAC addresses inside free-form command output

use crate::mac::MacAddress;

fn is_token_char(c: char) -> bool {
    c.is_ascii_hexdigit() || c == ':' || c == '-'
}

/// Iterate over every MAC address found in `text`, in order of appearance.
///
/// A candidate is a maximal run of hex digits, `:` and `-`; it only counts
/// when the whole run is a valid address, so an IPv6 address or a
/// seven-group identifier never yields a partial match.
pub fn find_all(text: &str) -> impl Iterator<Item = MacAddress> + '_ {
    text.split(|c: char| !is_token_char(c))
        .filter(|token| token.len() == 17)
        .filter_map(MacAddress::from_string)
}

/// First MAC address in `text`
pub fn find_in(text: &str) -> Option<MacAddress> {
    find_all(text).next()
}
