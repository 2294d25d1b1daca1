//! Reverse-lookup domain layer: arpa names, host table, zone and PTR answers.
pub mod arpa;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod host_table;
pub mod zone;

pub use arpa::{canonical_address, decode_arpa, ip_to_arpa};
pub use config::{CliOverrides, Config, ConfigError, DnsConfig, LocalDnsRecord, LoggingConfig};
pub use dns_record::{DnsClass, PtrAnswer, RecordType, PTR_TTL};
pub use errors::DomainError;
pub use host_table::{HostEntry, HostRecordKind, HostRecords, HostTable};
pub use zone::{Zone, FALLBACK_ZONE};
