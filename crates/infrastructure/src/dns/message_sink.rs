use super::ptr_record::PtrRecordBuilder;
use arpa_ptr_application::ports::AnswerSink;
use arpa_ptr_domain::PtrAnswer;
use hickory_proto::op::Message;
use tracing::warn;

/// Appends PTR answers to the answer section of a response message.
pub struct MessageAnswerSink<'a> {
    message: &'a mut Message,
    skipped: usize,
}

impl<'a> MessageAnswerSink<'a> {
    pub fn new(message: &'a mut Message) -> Self {
        Self {
            message,
            skipped: 0,
        }
    }

    /// Answers dropped because their names could not be encoded.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl AnswerSink for MessageAnswerSink<'_> {
    fn push_answer(&mut self, answer: PtrAnswer) {
        match PtrRecordBuilder::build(&answer) {
            Ok(record) => {
                self.message.add_answer(record);
            }
            Err(e) => {
                warn!(
                    query = %answer.name,
                    target = %answer.target,
                    error = %e,
                    "Dropping PTR answer"
                );
                self.skipped += 1;
            }
        }
    }
}
