use arc_swap::ArcSwap;
use arpa_ptr_application::ports::HostTableReader;
use arpa_ptr_domain::HostTable;
use std::sync::Arc;
use tracing::info;

/// Copy-on-write host table.
///
/// Readers get an `Arc` to the current table and keep it for the whole
/// lookup; writers publish a new table atomically, so a reader never sees a
/// half-applied update.
pub struct SharedHostTable {
    table: ArcSwap<HostTable>,
}

impl SharedHostTable {
    pub fn new(table: HostTable) -> Self {
        Self {
            table: ArcSwap::from_pointee(table),
        }
    }

    pub fn replace(&self, table: HostTable) {
        let hosts = table.len();
        self.table.store(Arc::new(table));
        info!(hosts, "Host table replaced");
    }

    /// Applies `f` to a copy of the current table and publishes the result.
    ///
    /// Concurrent updates are retried against the newer table, so none of
    /// them is lost.
    pub fn update<F>(&self, mut f: F)
    where
        F: FnMut(&mut HostTable),
    {
        self.table.rcu(|current| {
            let mut next = HostTable::clone(current);
            f(&mut next);
            next
        });
    }

    pub fn len(&self) -> usize {
        self.table.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.load().is_empty()
    }
}

impl Default for SharedHostTable {
    fn default() -> Self {
        Self::new(HostTable::new())
    }
}

impl HostTableReader for SharedHostTable {
    fn snapshot(&self) -> Arc<HostTable> {
        self.table.load_full()
    }
}
