//! Adapters for the reverse-lookup core: shared host table snapshots,
//! config loading and hickory-proto PTR records.
pub mod dns;
pub mod host_table;
