use serde::{Deserialize, Serialize};

use super::local_records::LocalDnsRecord;
use crate::zone::Zone;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Zone appended to hostnames in PTR targets. Unset or empty means
    /// the `local.` fallback.
    #[serde(default)]
    pub zone: Option<String>,

    #[serde(default)]
    pub hosts: Vec<LocalDnsRecord>,
}

impl DnsConfig {
    pub fn effective_zone(&self) -> Zone {
        Zone::from_option(self.zone.as_deref())
    }
}
