//! Process-wide node id for the UUID versions that carry one (v1, v2 and v6).

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::source::{OsRandSource, RandSource};
use crate::Error;

static NODE_ID: OnceLock<[u8; 6]> = OnceLock::new();

/// Returns the 48-bit node id of this process, resolving it on the first call.
///
/// The node id is the first non-zero hardware address found among the network interfaces
/// (ordered by name), or random bytes with the multicast bit set if none is available or the
/// `host` feature is disabled. The resolved value is cached for the process lifetime.
///
/// # Errors
///
/// Returns [`Error::Entropy`] if the random fallback cannot read the entropy source. Nothing is
/// cached in that case.
pub fn node_id() -> Result<[u8; 6], Error> {
    if let Some(node) = NODE_ID.get() {
        return Ok(*node);
    }
    let node = resolve(&mut OsRandSource::default())?;
    Ok(*NODE_ID.get_or_init(|| node))
}

fn resolve<R: RandSource>(rng: &mut R) -> Result<[u8; 6], Error> {
    if let Some((interface, node)) = hardware_address() {
        debug!(%interface, "using hardware address as node id");
        return Ok(node);
    }
    warn!("no hardware address available; using random node id");
    random_node(rng)
}

/// Generates a random node id, marking it as a multicast address so that it cannot conflict
/// with a real hardware address.
fn random_node<R: RandSource>(rng: &mut R) -> Result<[u8; 6], Error> {
    let mut node = [0u8; 6];
    rng.try_fill_bytes(&mut node)?;
    node[0] |= 0x01;
    Ok(node)
}

#[cfg(feature = "host")]
fn hardware_address() -> Option<(String, [u8; 6])> {
    let networks = sysinfo::Networks::new_with_refreshed_list();
    networks
        .list()
        .iter()
        .map(|(name, data)| (name, data.mac_address()))
        .filter(|(_, mac)| !mac.is_unspecified())
        .min_by(|a, b| a.0.cmp(b.0))
        .map(|(name, mac)| (name.clone(), mac.0))
}

#[cfg(not(feature = "host"))]
fn hardware_address() -> Option<(String, [u8; 6])> {
    None
}
