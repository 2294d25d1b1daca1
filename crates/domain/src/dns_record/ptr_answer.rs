use super::{DnsClass, RecordType};
use std::fmt;

/// TTL carried by every PTR answer built from the host table.
pub const PTR_TTL: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PtrAnswer {
    /// Query name exactly as received, not normalized.
    pub name: String,

    /// Fully-qualified target hostname, always ending with a dot.
    pub target: String,

    pub ttl: u32,
}

impl PtrAnswer {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            ttl: PTR_TTL,
        }
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::PTR
    }

    pub fn dns_class(&self) -> DnsClass {
        DnsClass::IN
    }
}

impl fmt::Display for PtrAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name,
            self.ttl,
            self.dns_class(),
            self.record_type(),
            self.target
        )
    }
}
