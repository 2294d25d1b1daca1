use arpa_ptr_domain::PtrAnswer;

/// Append-only destination for PTR answers.
pub trait AnswerSink {
    fn push_answer(&mut self, answer: PtrAnswer);
}

impl AnswerSink for Vec<PtrAnswer> {
    fn push_answer(&mut self, answer: PtrAnswer) {
        self.push(answer);
    }
}
