use crate::ports::{AnswerSink, HostTableReader};
use arpa_ptr_domain::{canonical_address, decode_arpa, HostRecordKind, HostTable, PtrAnswer, Zone};
use std::sync::Arc;
use tracing::debug;

/// Appends one PTR answer to `sink` for every host table address equal to
/// the address encoded in `query_name`, and returns how many were added.
///
/// A name that does not decode yields no answers and leaves `sink`
/// untouched. Matching compares the canonical text of the decoded address
/// against the stored strings exactly; differently written forms of the
/// same address do not match. Answers follow table order, then `A` list
/// order, then `AAAA` list order.
pub fn resolve_ptr<S>(query_name: &str, zone: &str, table: &HostTable, sink: &mut S) -> usize
where
    S: AnswerSink + ?Sized,
{
    let Some(ip) = decode_arpa(query_name) else {
        debug!(query = %query_name, "Not a reverse lookup name");
        return 0;
    };

    let target_ip = canonical_address(&ip);
    let zone = Zone::new(zone);
    let mut matches = 0;

    for entry in table.iter() {
        for kind in HostRecordKind::ALL {
            for address in entry.records.addresses(kind) {
                if *address == target_ip {
                    sink.push_answer(PtrAnswer::new(query_name, zone.fqdn(&entry.hostname)));
                    matches += 1;
                }
            }
        }
    }

    debug!(
        query = %query_name,
        ip = %target_ip,
        zone = %zone,
        matches,
        "PTR lookup against host table"
    );

    matches
}

pub struct ResolvePtrUseCase {
    hosts: Arc<dyn HostTableReader>,
    zone: String,
}

impl ResolvePtrUseCase {
    /// `zone` may be empty, in which case targets use the `local.` zone.
    pub fn new(hosts: Arc<dyn HostTableReader>, zone: impl Into<String>) -> Self {
        Self {
            hosts,
            zone: zone.into(),
        }
    }

    pub fn execute<S>(&self, query_name: &str, sink: &mut S) -> usize
    where
        S: AnswerSink + ?Sized,
    {
        let table = self.hosts.snapshot();
        resolve_ptr(query_name, &self.zone, &table, sink)
    }
}
