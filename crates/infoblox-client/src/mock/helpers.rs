//! Helper functions for building WAPI-shaped values in the mock grid

use crate::error::InfobloxError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use ipnet::IpNet;

/// Build an object reference the way NIOS does:
/// `networkcontainer/<base64 key>:<network>/<view>`
pub fn container_ref(network: &str, network_view: &str, view_index: usize) -> String {
    let key = format!("dns.network_container${}/{}", network, view_index);
    format!(
        "networkcontainer/{}:{}/{}",
        URL_SAFE_NO_PAD.encode(key),
        network,
        network_view
    )
}

/// Parse a block, rejecting host bits the way the grid does
pub fn parse_cidr(cidr: &str) -> Result<IpNet, InfobloxError> {
    let net: IpNet = cidr
        .parse()
        .map_err(|e| InfobloxError::InvalidRequest(format!("invalid network {}: {}", cidr, e)))?;
    if net.trunc() != net {
        return Err(InfobloxError::InvalidRequest(format!(
            "invalid network {}: host bits set, did you mean {}?",
            cidr,
            net.trunc()
        )));
    }
    Ok(net)
}

pub fn overlaps(a: &IpNet, b: &IpNet) -> bool {
    a.contains(b) || b.contains(a)
}
