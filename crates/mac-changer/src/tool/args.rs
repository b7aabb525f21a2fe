use mac_proto::MacAddress;

const INTERFACE_PLACEHOLDER: &str = "{interface}";
const MAC_PLACEHOLDER: &str = "{mac}";

/// Substitute placeholders in each template argument.
///
/// Every template entry stays one argv element whatever the interface
/// name contains.
pub fn expand(template: &[String], interface: &str, mac: Option<&MacAddress>) -> Vec<String> {
    let mac = mac.map(|m| m.to_string());
    template
        .iter()
        .map(|arg| {
            let arg = arg.replace(INTERFACE_PLACEHOLDER, interface);
            match &mac {
                Some(mac) => arg.replace(MAC_PLACEHOLDER, mac),
                None => arg,
            }
        })
        .collect()
}
