use arpa_ptr_domain::{HostTable, LocalDnsRecord};
use tracing::{info, warn};

pub struct HostTableLoader;

impl HostTableLoader {
    /// Builds a host table from configured records, in file order.
    ///
    /// Invalid entries are logged and skipped. Valid addresses are stored as
    /// written in the file; PTR matching compares against that exact text.
    pub fn from_records(records: &[LocalDnsRecord]) -> HostTable {
        let mut table = HostTable::new();
        let mut skipped = 0;

        for record in records {
            match record.kind() {
                Ok(kind) => table.insert(record.hostname.clone(), kind, record.ip.clone()),
                Err(e) => {
                    warn!(
                        hostname = %record.hostname,
                        ip = %record.ip,
                        record_type = %record.record_type,
                        error = %e,
                        "Invalid host record, skipping"
                    );
                    skipped += 1;
                }
            }
        }

        info!(hosts = table.len(), records = records.len(), skipped, "Host table loaded");
        table
    }
}
