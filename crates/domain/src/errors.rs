use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid record type (must be A or AAAA): {0}")]
    InvalidRecordType(String),

    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),
}
