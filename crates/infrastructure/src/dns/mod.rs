pub mod message_sink;
pub mod ptr_record;

pub use message_sink::MessageAnswerSink;
pub use ptr_record::PtrRecordBuilder;
