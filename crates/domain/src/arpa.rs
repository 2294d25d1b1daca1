use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const IPV4_SUFFIX: &str = "in-addr.arpa";
const IPV6_SUFFIX: &str = "ip6.arpa";
const IPV6_NIBBLES: usize = 32;

/// Decodes a reverse-lookup name (`d.c.b.a.in-addr.arpa` or a nibble
/// `ip6.arpa` name) into the address it encodes.
///
/// The name is trimmed, lowercased and stripped of one trailing dot before
/// matching. Returns `None` for anything that is not a well-formed reverse
/// name; this never panics on hostile input.
pub fn decode_arpa(query_name: &str) -> Option<IpAddr> {
    let lowered = query_name.trim().to_lowercase();
    let name = lowered.strip_suffix('.').unwrap_or(&lowered);

    if name.ends_with(IPV4_SUFFIX) {
        decode_ipv4(name).map(IpAddr::V4)
    } else if name.ends_with(IPV6_SUFFIX) {
        decode_ipv6(name).map(IpAddr::V6)
    } else {
        None
    }
}

fn decode_ipv4(name: &str) -> Option<Ipv4Addr> {
    let labels: Vec<&str> = name.strip_suffix(".in-addr.arpa")?.split('.').collect();
    if labels.len() != 4 {
        return None;
    }

    let dotted = format!("{}.{}.{}.{}", labels[3], labels[2], labels[1], labels[0]);
    dotted.parse().ok()
}

fn decode_ipv6(name: &str) -> Option<Ipv6Addr> {
    let labels: Vec<&str> = name.strip_suffix(".ip6.arpa")?.split('.').collect();
    if labels.is_empty() || labels.len() > IPV6_NIBBLES {
        return None;
    }

    // Nibbles arrive least-significant first. Names shorter than 32 nibbles
    // are accepted on purpose: the missing low-order nibbles stay zero, so
    // `8.b.d.0.1.0.0.2.ip6.arpa` decodes to `2001:db8::`.
    let mut nibbles = [0u8; IPV6_NIBBLES];
    for (slot, label) in nibbles.iter_mut().zip(labels.iter().rev()) {
        *slot = match label.as_bytes() {
            [digit] => char::from(*digit).to_digit(16)? as u8,
            _ => return None,
        };
    }

    let mut octets = [0u8; 16];
    for (octet, pair) in octets.iter_mut().zip(nibbles.chunks_exact(2)) {
        *octet = (pair[0] << 4) | pair[1];
    }

    Some(Ipv6Addr::from(octets))
}

/// Builds the reverse-lookup name for an address, without a trailing dot.
pub fn ip_to_arpa(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.{}",
                octets[3], octets[2], octets[1], octets[0], IPV4_SUFFIX
            )
        }
        IpAddr::V6(ipv6) => {
            let mut nibbles = Vec::with_capacity(IPV6_NIBBLES);
            for byte in ipv6.octets().iter().rev() {
                nibbles.push(format!("{:x}", byte & 0x0f));
                nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
            }
            format!("{}.{}", nibbles.join("."), IPV6_SUFFIX)
        }
    }
}

/// Textual form used as the matching key against host table addresses.
///
/// IPv4-mapped IPv6 addresses render as their dotted IPv4 form, so a nibble
/// query for `::ffff:10.0.0.5` matches an `A` record of `10.0.0.5`.
pub fn canonical_address(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => ipv4.to_string(),
        IpAddr::V6(ipv6) => match ipv6.to_ipv4_mapped() {
            Some(ipv4) => ipv4.to_string(),
            None => ipv6.to_string(),
        },
    }
}
