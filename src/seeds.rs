//! Compiled-in bootstrap peers
//!
//! Fixed seeds are stored packed as (16-byte address, port) records and
//! turned into [`NetAddress`] entries at startup. Each entry gets a random
//! "last seen" time between one and two weeks ago: the node only needs one
//! or two of them, after which fresher gossiped addresses take over.

use crate::error::ChainError;
use rand::Rng;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use tracing::debug;

/// One week in seconds.
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Packed seed record: IPv6 bytes (IPv4 embedded as `::ffff:a.b.c.d`) and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub fn new(ip: IpAddr, port: u16) -> Self {
        let v6 = match ip {
            IpAddr::V4(v4) => v4.to_ipv6_mapped(),
            IpAddr::V6(v6) => v6,
        };
        SeedSpec6 {
            addr: v6.octets(),
            port,
        }
    }
}

impl FromStr for SeedSpec6 {
    type Err = ChainError;

    /// Parse `1.2.3.4:55444` or `[2001:db8::1]:55444`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let socket: SocketAddr = s
            .trim()
            .parse()
            .map_err(|e| ChainError::InvalidSeed(format!("{}: {}", s, e)))?;
        Ok(SeedSpec6::new(socket.ip(), socket.port()))
    }
}

/// A peer address with the time it was last seen (Unix seconds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetAddress {
    pub ip: Ipv6Addr,
    pub port: u16,
    pub last_seen: i64,
}

impl NetAddress {
    /// The address with embedded IPv4 unwrapped.
    pub fn ip_addr(&self) -> IpAddr {
        match self.ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.ip),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip_addr(), self.port)
    }
}

/// Convert a seed table using the current time and the thread-local RNG.
pub fn convert_seeds(seeds: &[SeedSpec6]) -> Vec<NetAddress> {
    let now = chrono::Utc::now().timestamp();
    convert_seeds_at(seeds, now, &mut rand::thread_rng())
}

/// Convert a seed table relative to `now`.
///
/// Every entry is stamped `now - ONE_WEEK - r` with `r` uniform in
/// `[0, ONE_WEEK)`. Order is preserved and nothing is filtered.
pub fn convert_seeds_at<R: Rng>(
    seeds: &[SeedSpec6],
    now: i64,
    rng: &mut R,
) -> Vec<NetAddress> {
    let converted: Vec<NetAddress> = seeds
        .iter()
        .map(|seed| NetAddress {
            ip: Ipv6Addr::from(seed.addr),
            port: seed.port,
            last_seen: now - ONE_WEEK - rng.gen_range(0..ONE_WEEK),
        })
        .collect();
    debug!("Converted {} fixed seeds", converted.len());
    converted
}

/// Fixed seeds of the main network.
///
/// Intentionally empty: no generated seed list ships with this release, so
/// main-network bootstrap relies on the DNS seeds. Fill it from a list of
/// reliable nodes with `SeedSpec6::from_str`.
pub const MAIN_SEEDS: &[SeedSpec6] = &[];

/// Fixed seeds of the test network. Intentionally empty.
pub const TEST_SEEDS: &[SeedSpec6] = &[];
