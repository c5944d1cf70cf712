//! Where a request came from, as reported by client headers.

use crate::codec::ClosedEnum;
use crate::enums::Platform;
use serde::Serialize;
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv6Addr};

/// Client platform header.
pub const HEADER_CLIENT_TYPE: &str = "X-Client-Type";
/// Client version header.
pub const HEADER_CLIENT_VERSION: &str = "X-Client-Version";
/// End-user IP forwarded by the web tier.
pub const HEADER_USER_IP: &str = "X-User-Ip";
/// End-user agent forwarded by the web tier.
pub const HEADER_USER_AGENT: &str = "X-User-Agent";
/// Proxy chain header.
pub const HEADER_FORWARDED_FOR: &str = "X-Forwarded-For";
/// Single-proxy client IP header.
pub const HEADER_REAL_IP: &str = "X-Real-Ip";
/// Standard user agent header.
pub const HEADER_STANDARD_USER_AGENT: &str = "User-Agent";

/// Read-only access to request headers.
pub trait HeaderSource {
    /// Value of a header, matched case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl HeaderSource for [(&str, &str)] {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

/// Origin of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientApp {
    /// Client platform, [`Platform::Invalid`] when missing or unknown.
    pub client_type: Platform,
    /// Client version string.
    pub client_version: Option<String>,
    /// End-user IP address.
    pub user_ip: Option<String>,
    /// End-user agent.
    pub user_agent: Option<String>,
}

impl ClientApp {
    /// Collect client information from request headers.
    ///
    /// Web requests are proxied by the web tier, which forwards the browser's
    /// address and agent in dedicated headers. Other clients call directly,
    /// so the address comes from proxy headers or the socket peer.
    pub fn from_headers<H: HeaderSource + ?Sized>(headers: &H, peer: Option<IpAddr>) -> Self {
        let client_type = headers
            .header(HEADER_CLIENT_TYPE)
            .map_or(Platform::Invalid, Platform::parse_or_invalid);
        let client_version = non_empty(headers.header(HEADER_CLIENT_VERSION));

        let (user_ip, user_agent) = if client_type == Platform::Web {
            (
                non_empty(headers.header(HEADER_USER_IP)),
                non_empty(headers.header(HEADER_USER_AGENT)),
            )
        } else {
            (
                real_ip(headers, peer),
                non_empty(headers.header(HEADER_STANDARD_USER_AGENT)),
            )
        };

        Self {
            client_type,
            client_version,
            user_ip,
            user_agent,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn real_ip<H: HeaderSource + ?Sized>(headers: &H, peer: Option<IpAddr>) -> Option<String> {
    let forwarded = headers.header(HEADER_FORWARDED_FOR).and_then(|chain| {
        chain
            .split(',')
            .map(str::trim)
            .filter_map(|hop| hop.parse::<IpAddr>().ok())
            .find(is_public)
    });
    let real = || {
        headers
            .header(HEADER_REAL_IP)
            .and_then(|value| value.trim().parse::<IpAddr>().ok())
    };

    forwarded
        .or_else(real)
        .or(peer)
        .map(|ip| ip.to_string())
}

/// Proxy hops inside the network are skipped when looking for the user.
fn is_public(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(ip) => {
            !(ip.is_private() || ip.is_loopback() || ip.is_link_local() || ip.is_unspecified())
        },
        IpAddr::V6(ip) => {
            !(ip.is_loopback()
                || ip.is_unspecified()
                || is_unique_local(ip)
                || is_unicast_link_local(ip))
        },
    }
}

// fc00::/7
const fn is_unique_local(ip: &Ipv6Addr) -> bool {
    (ip.segments()[0] & 0xfe00) == 0xfc00
}

// fe80::/10
const fn is_unicast_link_local(ip: &Ipv6Addr) -> bool {
    (ip.segments()[0] & 0xffc0) == 0xfe80
}
