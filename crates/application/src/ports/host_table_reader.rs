use arpa_ptr_domain::HostTable;
use std::sync::Arc;

/// Read access to the host table maintained elsewhere.
///
/// Implementations hand out an immutable snapshot; a resolution pass reads
/// only that snapshot, so writers never tear a lookup in progress.
pub trait HostTableReader: Send + Sync {
    fn snapshot(&self) -> Arc<HostTable>;
}
