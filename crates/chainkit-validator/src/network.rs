//! Addresses, domains, URLs, e-mail addresses and phone numbers.

use regex::Regex;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, ToSocketAddrs};
use std::sync::OnceLock;

fn domain_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:[a-zA-Z0-9][-a-zA-Z0-9]{0,61}[a-zA-Z0-9]|[a-zA-Z0-9])(?:\.(?:[a-zA-Z0-9][-a-zA-Z0-9]{0,61}[a-zA-Z0-9]|[a-zA-Z0-9]))*\.[a-zA-Z]{2,62}$",
        )
        .expect("domain regex must compile")
    })
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]{1,64}@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        )
        .expect("email regex must compile")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^1[34578][0-9]{9}$").expect("phone regex must compile"))
}

/// IPv4 or IPv6 address.
pub fn ip(input: &str) -> bool {
    input.parse::<IpAddr>().is_ok()
}

pub fn ipv4(input: &str) -> bool {
    input.parse::<Ipv4Addr>().is_ok()
}

pub fn ipv6(input: &str) -> bool {
    input.parse::<Ipv6Addr>().is_ok()
}

/// ASCII host name ending in an alphabetic top-level label; no trailing dot.
pub fn domain(input: &str) -> bool {
    domain_re().is_match(input)
}

/// A valid `domain` that also resolves through the system resolver.
/// Performs a blocking DNS lookup.
pub fn active_domain(input: &str) -> bool {
    if !domain(input) {
        return false;
    }
    match (input, 0u16).to_socket_addrs() {
        Ok(mut addrs) => {
            let resolved = addrs.next().is_some();
            tracing::debug!(domain = input, resolved, "dns lookup finished");
            resolved
        }
        Err(err) => {
            tracing::debug!(domain = input, error = %err, "dns lookup failed");
            false
        }
    }
}

/// Absolute URL with a host. With `schemes`, the input must also start
/// with one of `<scheme>://`.
pub fn url(input: &str, schemes: Option<&[&str]>) -> bool {
    let Ok(parsed) = url::Url::parse(input) else {
        return false;
    };
    if !parsed.has_host() || !input.contains("://") {
        return false;
    }
    match schemes {
        Some(schemes) => schemes
            .iter()
            .any(|scheme| input.starts_with(&format!("{scheme}://"))),
        None => true,
    }
}

/// ASCII address `local@domain` with a dotted domain.
pub fn email(input: &str) -> bool {
    let Some((local, _)) = input.split_once('@') else {
        return false;
    };
    email_re().is_match(input)
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
}

/// Eleven-digit mainland mobile number.
pub fn phone(input: &str) -> bool {
    phone_re().is_match(input)
}
