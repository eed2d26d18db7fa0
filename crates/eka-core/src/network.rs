/// Resolve a numeric chain id to its human-readable network name.
///
/// Unknown ids map to the `"unknown"` sentinel rather than failing; the
/// certificate still binds the ephemeral key either way.
pub fn network_name(id: u64) -> &'static str {
    match id {
        1 => "mainnet",
        2 => "morden",
        3 => "ropsten",
        4 => "rinkeby",
        42 => "kovan",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_networks() {
        assert_eq!(network_name(1), "mainnet");
        assert_eq!(network_name(2), "morden");
        assert_eq!(network_name(3), "ropsten");
        assert_eq!(network_name(4), "rinkeby");
        assert_eq!(network_name(42), "kovan");
    }

    #[test]
    fn test_unknown_network_sentinel() {
        assert_eq!(network_name(0), "unknown");
        assert_eq!(network_name(1337), "unknown");
    }
}
