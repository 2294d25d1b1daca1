pub mod ptr_answer;
pub mod record_type;

pub use ptr_answer::{PtrAnswer, PTR_TTL};
pub use record_type::{DnsClass, RecordType};
