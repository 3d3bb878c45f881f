pub const CONNECTING_BANNER: &str = "Connecting to Bittensor network...";
pub const CONNECTED_BANNER: &str = "✓ Connected successfully!";
pub const GLOBAL_HEADING: &str = "GLOBAL RATE LIMITS:";
/// The global underline is one short of its heading.
pub const GLOBAL_UNDERLINE_LEN: usize = 18;
pub const COMPLETE_MARKER: &str = "✓ Complete";
pub const UNABLE_TO_QUERY: &str = "Unable to query";

pub fn subnet_heading(subnet: u16) -> String {
    format!("SUBNET-SPECIFIC RATE LIMITS (Subnet {}):", subnet)
}
