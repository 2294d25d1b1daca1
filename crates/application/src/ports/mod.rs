mod answer_sink;
mod host_table_reader;

pub use answer_sink::AnswerSink;
pub use host_table_reader::HostTableReader;
