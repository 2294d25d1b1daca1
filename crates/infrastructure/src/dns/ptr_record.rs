use arpa_ptr_domain::{DomainError, PtrAnswer};
use hickory_proto::rr::rdata::PTR;
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

pub struct PtrRecordBuilder;

impl PtrRecordBuilder {
    /// Converts an answer into a hickory PTR record (class IN).
    pub fn build(answer: &PtrAnswer) -> Result<Record, DomainError> {
        let name = Self::parse_name(&answer.name)?;
        let target = Self::parse_name(&answer.target)?;

        Ok(Record::from_rdata(name, answer.ttl, RData::PTR(PTR(target))))
    }

    fn parse_name(name: &str) -> Result<Name, DomainError> {
        Name::from_str(name)
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
    }
}
