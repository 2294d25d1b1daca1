use crate::dns_record::RecordType;
use crate::errors::DomainError;
use rustc_hash::FxHashMap;
use std::net::IpAddr;

/// Forward record kinds a host table entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostRecordKind {
    A,
    AAAA,
}

impl HostRecordKind {
    /// Matching order used when scanning an entry.
    pub const ALL: [HostRecordKind; 2] = [HostRecordKind::A, HostRecordKind::AAAA];

    pub fn as_str(&self) -> &'static str {
        match self {
            HostRecordKind::A => "A",
            HostRecordKind::AAAA => "AAAA",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A" => Some(HostRecordKind::A),
            "AAAA" => Some(HostRecordKind::AAAA),
            _ => None,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            HostRecordKind::A => RecordType::A,
            HostRecordKind::AAAA => RecordType::AAAA,
        }
    }

    pub fn accepts(&self, ip: &IpAddr) -> bool {
        matches!(
            (self, ip),
            (HostRecordKind::A, IpAddr::V4(_)) | (HostRecordKind::AAAA, IpAddr::V6(_))
        )
    }
}

/// Address lists of one host, kept as the strings they were recorded with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecords {
    a: Vec<String>,
    aaaa: Vec<String>,
}

impl HostRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn addresses(&self, kind: HostRecordKind) -> &[String] {
        match kind {
            HostRecordKind::A => &self.a,
            HostRecordKind::AAAA => &self.aaaa,
        }
    }

    pub fn push(&mut self, kind: HostRecordKind, address: impl Into<String>) {
        match kind {
            HostRecordKind::A => self.a.push(address.into()),
            HostRecordKind::AAAA => self.aaaa.push(address.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.aaaa.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Short hostname, without any zone.
    pub hostname: String,
    pub records: HostRecords,
}

/// Hostname to forward-address table.
///
/// Iteration follows insertion order of hostnames, which keeps answer
/// ordering deterministic for a given table. Inserting an address for an
/// existing hostname appends to that host's list.
#[derive(Debug, Clone, Default)]
pub struct HostTable {
    entries: Vec<HostEntry>,
    index: FxHashMap<String, usize>,
}

impl HostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        hostname: impl Into<String>,
        kind: HostRecordKind,
        address: impl Into<String>,
    ) {
        let hostname = hostname.into();
        let idx = match self.index.get(&hostname) {
            Some(&idx) => idx,
            None => {
                self.entries.push(HostEntry {
                    hostname: hostname.clone(),
                    records: HostRecords::new(),
                });
                let idx = self.entries.len() - 1;
                self.index.insert(hostname, idx);
                idx
            }
        };
        self.entries[idx].records.push(kind, address);
    }

    /// Same as [`HostTable::insert`] with the record kind given as text.
    pub fn insert_str(
        &mut self,
        hostname: impl Into<String>,
        record_type: &str,
        address: impl Into<String>,
    ) -> Result<(), DomainError> {
        let kind = HostRecordKind::from_str(record_type)
            .ok_or_else(|| DomainError::InvalidRecordType(record_type.to_string()))?;
        self.insert(hostname, kind, address);
        Ok(())
    }

    pub fn get(&self, hostname: &str) -> Option<&HostRecords> {
        self.index
            .get(hostname)
            .map(|&idx| &self.entries[idx].records)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H, A> FromIterator<(H, HostRecordKind, A)> for HostTable
where
    H: Into<String>,
    A: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (H, HostRecordKind, A)>>(iter: I) -> Self {
        let mut table = HostTable::new();
        for (hostname, kind, address) in iter {
            table.insert(hostname, kind, address);
        }
        table
    }
}
