//! Where completed forms go. The engine only produces a [`Submission`]; the
//! host decides how to deliver it.

use engine::Submission;

use crate::error::Result;

pub trait SubmissionTransport {
    fn send(&mut self, submission: &Submission) -> Result<()>;
}

/// Records the payload in the log. There is no backend to deliver to yet.
#[derive(Debug, Default)]
pub struct LogTransport;

impl SubmissionTransport for LogTransport {
    fn send(&mut self, submission: &Submission) -> Result<()> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(entries = submission.entries.len(), %payload, "submission handed off");
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::error::AppError;

    /// Keeps every payload it receives; optionally fails instead.
    #[derive(Debug, Default, Clone)]
    pub struct RecordingTransport {
        pub sent: Rc<RefCell<Vec<Submission>>>,
        pub fail: bool,
    }

    impl SubmissionTransport for RecordingTransport {
        fn send(&mut self, submission: &Submission) -> Result<()> {
            if self.fail {
                return Err(AppError::Terminal("transport offline".to_string()));
            }
            self.sent.borrow_mut().push(submission.clone());
            Ok(())
        }
    }
}
