//! Reverse-lookup application layer: ports and the PTR resolution use case.
pub mod ports;
pub mod use_cases;
