use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::errors::DomainError;
use crate::host_table::HostRecordKind;

/// One `[[dns.hosts]]` entry: a short hostname and one forward address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocalDnsRecord {
    pub hostname: String,

    pub ip: String,

    #[serde(default = "default_record_type")]
    pub record_type: String,
}

impl LocalDnsRecord {
    pub fn new(
        hostname: impl Into<String>,
        record_type: impl Into<String>,
        ip: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            ip: ip.into(),
            record_type: record_type.into(),
        }
    }

    /// Checks the entry and returns its record kind.
    ///
    /// The hostname must be non-empty, the record type A or AAAA, and the
    /// address must parse and belong to the family the record type implies.
    pub fn kind(&self) -> Result<HostRecordKind, DomainError> {
        if self.hostname.trim().is_empty() {
            return Err(DomainError::InvalidHostname(
                "hostname cannot be empty".to_string(),
            ));
        }

        let kind = HostRecordKind::from_str(&self.record_type)
            .ok_or_else(|| DomainError::InvalidRecordType(self.record_type.clone()))?;

        let ip: IpAddr = self
            .ip
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(self.ip.clone()))?;

        if !kind.accepts(&ip) {
            return Err(DomainError::InvalidIpAddress(format!(
                "{} is not valid for a {} record",
                self.ip,
                kind.as_str()
            )));
        }

        Ok(kind)
    }
}

fn default_record_type() -> String {
    "A".to_string()
}
