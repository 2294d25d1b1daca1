use arpa_ptr_application::ports::HostTableReader;
use arpa_ptr_domain::{HostRecordKind, HostTable};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

pub struct MockHostTableReader {
    table: RwLock<Arc<HostTable>>,
    snapshots: AtomicUsize,
}

impl MockHostTableReader {
    pub fn new(table: HostTable) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
            snapshots: AtomicUsize::new(0),
        }
    }

    pub fn set_table(&self, table: HostTable) {
        *self.table.write().unwrap() = Arc::new(table);
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.load(Ordering::Relaxed)
    }
}

impl HostTableReader for MockHostTableReader {
    fn snapshot(&self) -> Arc<HostTable> {
        self.snapshots.fetch_add(1, Ordering::Relaxed);
        Arc::clone(&self.table.read().unwrap())
    }
}

/// Builds an insertion-ordered table from `(hostname, kind, address)` rows.
pub fn table_of(rows: &[(&str, HostRecordKind, &str)]) -> HostTable {
    rows.iter()
        .map(|(hostname, kind, address)| (*hostname, *kind, *address))
        .collect()
}
